mod config;
mod dashboard;
mod export;
mod ids;
mod jobs;
mod mirror;
mod models;
mod reducer;
mod remote;
mod store;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard::ActivityKind;
use jobs::JobCache;
use mirror::FileMirror;
use models::{
    ApplicationStatus, ApplicationUpdate, ContactUpdate, DocumentType, InterviewDate,
    InterviewOutcome, InterviewType, JobType, NewApplication, NewContact, NewDocument,
    PreferencesUpdate, Priority, RelationshipType, Task, Theme,
};
use remote::{JobInput, RestJobTable};
use store::AppStore;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Track job applications, contacts and documents")]
struct Cli {
    /// Directory holding the data file (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Local(LocalCommands),

    /// Jobs kept in the remote table
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },

    /// Print the data file location
    Path,
}

/// Commands that work on the local data file.
#[derive(Subcommand)]
enum LocalCommands {
    /// Manage applications
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Manage contacts
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },

    /// Manage documents
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },

    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },

    /// Dashboard: totals, pipeline and recent activity
    Stats,

    /// Write a dated JSON backup of everything
    Export {
        /// Directory to write the backup into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Replace everything with the contents of a backup file
    Import {
        /// Backup file to load
        file: PathBuf,
    },
}

#[derive(Args)]
struct ApplicationFields {
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    job_type: Option<JobType>,
    #[arg(long)]
    industry: Option<String>,
    /// Application date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    #[arg(short, long)]
    status: Option<ApplicationStatus>,
    #[arg(short, long)]
    priority: Option<Priority>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(short, long)]
    notes: Option<String>,
    #[arg(long)]
    resume_version: Option<String>,
    #[arg(long)]
    cover_letter_version: Option<String>,
    #[arg(long)]
    referral: Option<String>,
    /// Follow-up date (YYYY-MM-DD)
    #[arg(long)]
    follow_up: Option<String>,
    /// Linked contact id (repeatable)
    #[arg(long = "contact")]
    contacts: Vec<String>,
}

#[derive(Subcommand)]
enum AppCommands {
    /// Record a new application
    Add {
        /// Company name
        company: String,
        /// Job title
        title: String,
        #[command(flatten)]
        fields: ApplicationFields,
    },

    /// Change fields of an application
    Update {
        /// Application ID
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ApplicationFields,
    },

    /// Delete an application
    Delete {
        /// Application ID
        id: String,
    },

    /// List applications
    List {
        /// Search company and title
        #[arg(short, long, default_value = "")]
        search: String,
        /// Filter by status
        #[arg(long)]
        status: Option<ApplicationStatus>,
    },

    /// Show application details
    Show {
        /// Application ID
        id: String,
    },

    /// Add an interview to an application
    Interview {
        /// Application ID
        id: String,
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (HH:MM)
        time: String,
        #[arg(short, long, default_value = "phone")]
        kind: InterviewType,
        #[arg(long)]
        interviewer: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(long, default_value = "pending")]
        outcome: InterviewOutcome,
    },

    /// Add a task to an application
    Task {
        /// Application ID
        id: String,
        /// What needs doing
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },

    /// Mark an application's task as done
    Done {
        /// Application ID
        id: String,
        /// Task ID
        task_id: String,
    },
}

#[derive(Args)]
struct ContactFields {
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    linkedin: Option<String>,
    #[arg(short, long)]
    notes: Option<String>,
    #[arg(short, long)]
    relationship: Option<RelationshipType>,
    /// Last contact date (YYYY-MM-DD)
    #[arg(long)]
    last_contact: Option<String>,
    /// Linked application id (repeatable)
    #[arg(long = "application")]
    applications: Vec<String>,
}

#[derive(Subcommand)]
enum ContactCommands {
    /// Add a contact
    Add {
        /// Contact name
        name: String,
        #[command(flatten)]
        fields: ContactFields,
    },

    /// Change fields of a contact
    Update {
        /// Contact ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ContactFields,
    },

    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },

    /// List contacts
    List {
        /// Search name, company and role
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand)]
enum DocCommands {
    /// Register an uploaded document
    Add {
        /// File name as uploaded
        file_name: String,
        /// Display name (default: file name before the first '.')
        #[arg(long)]
        name: Option<String>,
        /// Type (default: guessed from the file name)
        #[arg(short, long)]
        kind: Option<DocumentType>,
        /// Linked application id (repeatable)
        #[arg(long = "application")]
        applications: Vec<String>,
    },

    /// Delete a document
    Delete {
        /// Document ID
        id: String,
    },

    /// List documents grouped by type
    List,
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Show preferences
    Show,

    /// Change preferences
    Set {
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Switch between light and dark
    ToggleTheme,
}

#[derive(Subcommand)]
enum JobsCommands {
    /// List remote jobs, newest first
    List,

    /// Add a job, or update one with --id
    Save {
        company: String,
        title: String,
        #[arg(long)]
        niche: Option<String>,
        #[arg(short, long)]
        status: Option<ApplicationStatus>,
        #[arg(short, long)]
        notes: Option<String>,
        /// Applied date (YYYY-MM-DD)
        #[arg(long)]
        applied_at: Option<String>,
        /// Existing job ID to update
        #[arg(long)]
        id: Option<String>,
    },

    /// Delete a remote job
    Delete {
        /// Job ID
        id: String,
    },
}

impl ApplicationFields {
    fn into_update(self, company: Option<String>, title: Option<String>) -> ApplicationUpdate {
        ApplicationUpdate {
            company_name: company,
            job_title: title,
            location: self.location,
            job_type: self.job_type,
            industry: self.industry,
            application_date: self.date,
            status: self.status,
            priority: self.priority,
            salary: self.salary,
            job_url: self.url,
            description: self.description,
            notes: self.notes,
            resume_version: self.resume_version,
            cover_letter_version: self.cover_letter_version,
            referral_source: self.referral,
            follow_up_date: self.follow_up,
            interview_dates: None,
            tasks: None,
            contact_ids: (!self.contacts.is_empty()).then_some(self.contacts),
        }
    }

    fn into_new(self, company: String, title: String) -> NewApplication {
        NewApplication {
            company_name: company,
            job_title: title,
            location: self.location.unwrap_or_default(),
            job_type: self.job_type.unwrap_or_default(),
            industry: self.industry.unwrap_or_default(),
            application_date: self.date.unwrap_or_else(today),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            salary: self.salary,
            job_url: self.url,
            description: self.description,
            notes: self.notes,
            resume_version: self.resume_version,
            cover_letter_version: self.cover_letter_version,
            referral_source: self.referral,
            follow_up_date: self.follow_up,
            interview_dates: Vec::new(),
            tasks: Vec::new(),
            contact_ids: self.contacts,
        }
    }
}

impl ContactFields {
    fn into_update(self, name: Option<String>) -> ContactUpdate {
        ContactUpdate {
            name,
            role: self.role,
            company: self.company,
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            notes: self.notes,
            relationship_type: self.relationship,
            last_contact_date: self.last_contact,
            application_ids: (!self.applications.is_empty()).then_some(self.applications),
        }
    }

    fn into_new(self, name: String) -> NewContact {
        NewContact {
            name,
            role: self.role.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            notes: self.notes,
            relationship_type: self.relationship.unwrap_or_default(),
            last_contact_date: self.last_contact,
            application_ids: self.applications,
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jobtrack=warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = config::resolve_data_dir(cli.data_dir);

    match cli.command {
        Commands::Jobs { command } => run_jobs(command).await,
        Commands::Path => {
            println!("{}", FileMirror::in_dir(&data_dir).path().display());
            Ok(())
        }
        Commands::Local(command) => {
            let mut store = AppStore::open(FileMirror::in_dir(&data_dir));
            run_local(&mut store, command)
        }
    }
}

fn run_local(store: &mut AppStore<FileMirror>, command: LocalCommands) -> Result<()> {
    match command {
        LocalCommands::App { command } => run_app(store, command)?,

        LocalCommands::Contact { command } => match command {
            ContactCommands::Add { name, fields } => {
                let id = store.add_contact(fields.into_new(name));
                println!("Added contact {}", id);
            }
            ContactCommands::Update { id, name, fields } => {
                require_contact(store, &id)?;
                store.update_contact(&id, fields.into_update(name));
                println!("Updated contact {}", id);
            }
            ContactCommands::Delete { id } => {
                store.delete_contact(&id);
                println!("Deleted contact {}", id);
            }
            ContactCommands::List { search } => {
                let contacts = dashboard::filter_contacts(store.data(), &search);
                if contacts.is_empty() {
                    println!("No contacts found.");
                } else {
                    println!("{:<24} {:<20} {:<20} {:<20} {:<15}", "ID", "NAME", "ROLE", "COMPANY", "RELATIONSHIP");
                    println!("{}", "-".repeat(103));
                    for contact in contacts {
                        println!(
                            "{:<24} {:<20} {:<20} {:<20} {:<15}",
                            contact.id,
                            truncate(&contact.name, 18),
                            truncate(&contact.role, 18),
                            truncate(&contact.company, 18),
                            contact.relationship_type.as_str()
                        );
                    }
                }
            }
        },

        LocalCommands::Doc { command } => match command {
            DocCommands::Add {
                file_name,
                name,
                kind,
                applications,
            } => {
                let mut document =
                    NewDocument::from_upload(&file_name, chrono::Utc::now().to_rfc3339());
                if let Some(name) = name {
                    document.name = name;
                }
                if let Some(kind) = kind {
                    document.kind = kind;
                }
                document.application_ids = applications;
                let kind = document.kind;
                let id = store.add_document(document);
                println!("Added {} {}", kind.as_str(), id);
            }
            DocCommands::Delete { id } => {
                store.delete_document(&id);
                println!("Deleted document {}", id);
            }
            DocCommands::List => {
                let groups = dashboard::group_documents(store.data());
                if groups.is_empty() {
                    println!("No documents found.");
                }
                for (kind, documents) in groups {
                    println!("{} ({})", kind.as_str(), documents.len());
                    for doc in documents {
                        let used = match doc.application_ids.len() {
                            0 => String::new(),
                            1 => "  used in 1 application".to_string(),
                            n => format!("  used in {} applications", n),
                        };
                        println!("  {:<24} {:<24} {}{}", doc.id, truncate(&doc.file_name, 22), short_date(&doc.upload_date), used);
                    }
                }
            }
        },

        LocalCommands::Prefs { command } => {
            match command {
                PrefsCommands::Show => {}
                PrefsCommands::Set {
                    theme,
                    currency,
                    date_format,
                } => store.update_preferences(PreferencesUpdate {
                    theme,
                    currency,
                    date_format,
                }),
                PrefsCommands::ToggleTheme => store.toggle_theme(),
            }
            let prefs = &store.data().preferences;
            println!("Theme:       {}", prefs.theme.as_str());
            println!("Currency:    {}", prefs.currency);
            println!("Date format: {}", prefs.date_format);
        }

        LocalCommands::Stats => print_dashboard(store),

        LocalCommands::Export { out } => {
            let path = store.export_data(&out)?;
            println!("Exported to {}", path.display());
        }

        LocalCommands::Import { file } => {
            let data = export::read_backup(&file)?;
            let counts = (data.applications.len(), data.contacts.len(), data.documents.len());
            store.import_data(data);
            println!(
                "Imported {} applications, {} contacts, {} documents.",
                counts.0, counts.1, counts.2
            );
        }
    }

    Ok(())
}

fn run_app(store: &mut AppStore<FileMirror>, command: AppCommands) -> Result<()> {
    match command {
        AppCommands::Add {
            company,
            title,
            fields,
        } => {
            let id = store.add_application(fields.into_new(company, title));
            println!("Added application {}", id);
        }

        AppCommands::Update {
            id,
            company,
            title,
            fields,
        } => {
            require_application(store, &id)?;
            store.update_application(&id, fields.into_update(company, title));
            println!("Updated application {}", id);
        }

        AppCommands::Delete { id } => {
            store.delete_application(&id);
            println!("Deleted application {}", id);
        }

        AppCommands::List { search, status } => {
            let apps = dashboard::filter_applications(store.data(), &search, status);
            if apps.is_empty() {
                if search.is_empty() && status.is_none() {
                    println!("No applications yet.");
                } else {
                    println!("No applications found.");
                }
            } else {
                println!("{:<24} {:<10} {:<24} {:<20} {:<8} {:<10}", "ID", "STATUS", "TITLE", "COMPANY", "PRIORITY", "APPLIED");
                println!("{}", "-".repeat(101));
                for app in apps {
                    println!(
                        "{:<24} {:<10} {:<24} {:<20} {:<8} {:<10}",
                        app.id,
                        app.status.as_str(),
                        truncate(&app.job_title, 22),
                        truncate(&app.company_name, 18),
                        app.priority.as_str(),
                        app.application_date
                    );
                }
            }
        }

        AppCommands::Show { id } => {
            let data = store.data();
            match data.application(&id) {
                Some(app) => {
                    println!("Application {}", app.id);
                    println!("Title: {}", app.job_title);
                    println!("Company: {}", app.company_name);
                    println!("Status: {}", app.status.as_str());
                    println!("Priority: {}", app.priority.as_str());
                    println!("Type: {}", app.job_type.as_str());
                    if !app.location.is_empty() {
                        println!("Location: {}", app.location);
                    }
                    if !app.industry.is_empty() {
                        println!("Industry: {}", app.industry);
                    }
                    println!("Applied: {}", app.application_date);
                    if let Some(salary) = &app.salary {
                        println!("Salary: {} ({})", salary, data.preferences.currency);
                    }
                    if let Some(url) = &app.job_url {
                        println!("URL: {}", url);
                    }
                    if let Some(referral) = &app.referral_source {
                        println!("Referral: {}", referral);
                    }
                    if let Some(follow_up) = &app.follow_up_date {
                        println!("Follow up: {}", follow_up);
                    }
                    if let Some(resume) = &app.resume_version {
                        println!("Resume: {}", resume);
                    }
                    if let Some(letter) = &app.cover_letter_version {
                        println!("Cover letter: {}", letter);
                    }
                    if !app.interview_dates.is_empty() {
                        println!("\nInterviews ({}):", app.interview_dates.len());
                        for interview in &app.interview_dates {
                            println!(
                                "  {} {} {} [{}]{}",
                                interview.date,
                                interview.time,
                                interview.kind.as_str(),
                                interview.outcome.as_str(),
                                interview
                                    .interviewer
                                    .as_ref()
                                    .map(|who| format!(" with {}", who))
                                    .unwrap_or_default()
                            );
                        }
                    }
                    if !app.tasks.is_empty() {
                        println!("\nTasks ({}):", app.tasks.len());
                        for task in &app.tasks {
                            println!(
                                "  [{}] {} {} ({}){}",
                                if task.completed { "x" } else { " " },
                                task.id,
                                task.title,
                                task.priority.as_str(),
                                task.due_date
                                    .as_ref()
                                    .map(|due| format!(" due {}", due))
                                    .unwrap_or_default()
                            );
                        }
                    }
                    if !app.contact_ids.is_empty() {
                        println!("\nContacts:");
                        for contact_id in &app.contact_ids {
                            match data.contact(contact_id) {
                                Some(contact) => println!("  {} - {} ({})", contact.id, contact.name, contact.role),
                                None => println!("  {} - (missing)", contact_id),
                            }
                        }
                    }
                    if let Some(description) = &app.description {
                        println!("\n--- Description ---\n{}", description);
                    }
                    if let Some(notes) = &app.notes {
                        println!("\n--- Notes ---\n{}", notes);
                    }
                }
                None => {
                    println!("Application {} not found.", id);
                }
            }
        }

        AppCommands::Interview {
            id,
            date,
            time,
            kind,
            interviewer,
            notes,
            outcome,
        } => {
            let mut interviews = require_application(store, &id)?.interview_dates.clone();
            interviews.push(InterviewDate {
                id: ids::generate_id(),
                date,
                time,
                kind,
                interviewer,
                notes,
                outcome,
            });
            store.update_application(
                &id,
                ApplicationUpdate {
                    interview_dates: Some(interviews),
                    ..Default::default()
                },
            );
            println!("Added interview to application {}", id);
        }

        AppCommands::Task {
            id,
            title,
            due,
            priority,
        } => {
            let mut tasks = require_application(store, &id)?.tasks.clone();
            let task_id = ids::generate_id();
            tasks.push(Task {
                id: task_id.clone(),
                title,
                completed: false,
                due_date: due,
                priority,
            });
            store.update_application(
                &id,
                ApplicationUpdate {
                    tasks: Some(tasks),
                    ..Default::default()
                },
            );
            println!("Added task {} to application {}", task_id, id);
        }

        AppCommands::Done { id, task_id } => {
            let mut tasks = require_application(store, &id)?.tasks.clone();
            let task = tasks
                .iter_mut()
                .find(|task| task.id == task_id)
                .ok_or_else(|| anyhow!("Task {} not found on application {}", task_id, id))?;
            task.completed = true;
            store.update_application(
                &id,
                ApplicationUpdate {
                    tasks: Some(tasks),
                    ..Default::default()
                },
            );
            println!("Completed task {}", task_id);
        }
    }

    Ok(())
}

fn print_dashboard(store: &AppStore<FileMirror>) {
    let data = store.data();
    let stats = dashboard::stats(data);
    println!("Total applications:   {}", stats.total_applications);
    println!("Interviews scheduled: {}", stats.interviews_scheduled);
    println!("Offers received:      {}", stats.offers_received);
    println!("Response rate:        {}%", stats.response_rate);

    println!("\nPipeline:");
    for stage in dashboard::pipeline(data) {
        println!(
            "  {:<10} {:>4}  {:>5.1}%",
            stage.status.as_str(),
            stage.count,
            stage.percentage
        );
    }

    let activity = dashboard::recent_activity(data);
    println!("\nRecent activity:");
    if activity.is_empty() {
        println!("  No recent activity.");
    }
    for item in activity {
        let label = match item.kind {
            ActivityKind::Application => "applied",
            ActivityKind::Interview => "interview",
        };
        println!(
            "  {:<10} {:<9} {:<30} {}",
            short_date(&item.date),
            label,
            truncate(&item.title, 28),
            item.subtitle
        );
    }
}

async fn run_jobs(command: JobsCommands) -> Result<()> {
    let mut cache = JobCache::new(RestJobTable::from_env()?);

    match command {
        JobsCommands::List => {
            if cache.fetch().await.is_err() {
                return Err(anyhow!(
                    "Failed to load jobs: {}",
                    cache.error().unwrap_or("unknown error")
                ));
            }
            if cache.jobs().is_empty() {
                println!("No jobs found.");
            } else {
                println!("{:<38} {:<10} {:<24} {:<20} {:<12} {:<10}", "ID", "STATUS", "TITLE", "COMPANY", "NICHE", "APPLIED");
                println!("{}", "-".repeat(119));
                for job in cache.jobs() {
                    println!(
                        "{:<38} {:<10} {:<24} {:<20} {:<12} {:<10}",
                        job.id,
                        job.status,
                        truncate(&job.title, 22),
                        truncate(&job.company, 18),
                        truncate(job.niche.as_deref().unwrap_or("-"), 10),
                        short_date(&job.applied_at)
                    );
                }
            }
        }

        JobsCommands::Save {
            company,
            title,
            niche,
            status,
            notes,
            applied_at,
            id,
        } => {
            let input = JobInput {
                company,
                title,
                niche,
                status: status.map(|s| s.as_str().to_string()),
                notes,
                applied_at,
            };
            let saved = cache.save(input, id.as_deref()).await?;
            if id.is_some() {
                println!("Job updated successfully ({})", saved.id);
            } else {
                println!("Job added successfully ({})", saved.id);
            }
        }

        JobsCommands::Delete { id } => {
            cache.delete(&id).await?;
            println!("Job deleted successfully");
        }
    }

    Ok(())
}

fn require_application<'a>(
    store: &'a AppStore<FileMirror>,
    id: &str,
) -> Result<&'a models::Application> {
    store
        .data()
        .application(id)
        .ok_or_else(|| anyhow!("Application {} not found", id))
}

fn require_contact(store: &AppStore<FileMirror>, id: &str) -> Result<()> {
    store
        .data()
        .contact(id)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Contact {} not found", id))
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// First ten characters of an ISO timestamp: the date part.
fn short_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
        assert_eq!(truncate("café société", 6), "caf...");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-03-01T10:00:00Z"), "2024-03-01");
        assert_eq!(short_date("2024"), "2024");
    }

    #[test]
    fn test_cli_parses_application_add() {
        let cli = Cli::try_parse_from([
            "jobtrack", "app", "add", "Acme", "Engineer", "--status", "screening", "--job-type",
            "part-time", "--contact", "c1", "--contact", "c2",
        ])
        .unwrap();
        match cli.command {
            Commands::Local(LocalCommands::App {
                command: AppCommands::Add { company, title, fields },
            }) => {
                let new = fields.into_new(company, title);
                assert_eq!(new.company_name, "Acme");
                assert_eq!(new.status, ApplicationStatus::Screening);
                assert_eq!(new.job_type, JobType::PartTime);
                assert_eq!(new.contact_ids, vec!["c1".to_string(), "c2".to_string()]);
                assert!(!new.application_date.is_empty());
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_cli_update_without_contacts_leaves_them_alone() {
        let cli = Cli::try_parse_from(["jobtrack", "app", "update", "123", "--status", "offer"]).unwrap();
        match cli.command {
            Commands::Local(LocalCommands::App {
                command: AppCommands::Update { company, title, fields, .. },
            }) => {
                let update = fields.into_update(company, title);
                assert_eq!(update.status, Some(ApplicationStatus::Offer));
                assert_eq!(update.contact_ids, None);
                assert_eq!(update.company_name, None);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_cli_parses_global_data_dir_and_enum_spellings() {
        let cli = Cli::try_parse_from([
            "jobtrack", "contact", "add", "Pat", "--relationship", "hiring-manager", "--data-dir", "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Commands::Local(LocalCommands::Contact {
                command: ContactCommands::Add { name, fields },
            }) => {
                let contact = fields.into_new(name);
                assert_eq!(contact.relationship_type, RelationshipType::HiringManager);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_cli_routes_jobs_and_path_outside_local_store() {
        let cli = Cli::try_parse_from(["jobtrack", "jobs", "delete", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Jobs {
                command: JobsCommands::Delete { .. }
            }
        ));

        let cli = Cli::try_parse_from(["jobtrack", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Path));

        let cli = Cli::try_parse_from(["jobtrack", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Local(LocalCommands::Stats)));
    }
}
