use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// --- Enumerations ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    /// Pipeline order, as shown on the dashboard.
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewType {
    #[default]
    Phone,
    Video,
    InPerson,
    Technical,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Phone => "phone",
            InterviewType::Video => "video",
            InterviewType::InPerson => "in-person",
            InterviewType::Technical => "technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InterviewOutcome {
    #[default]
    Pending,
    Passed,
    Failed,
}

impl InterviewOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewOutcome::Pending => "pending",
            InterviewOutcome::Passed => "passed",
            InterviewOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    Recruiter,
    HiringManager,
    Referral,
    Networking,
    #[default]
    Other,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Recruiter => "recruiter",
            RelationshipType::HiringManager => "hiring-manager",
            RelationshipType::Referral => "referral",
            RelationshipType::Networking => "networking",
            RelationshipType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Resume,
    CoverLetter,
    Portfolio,
    #[default]
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Resume,
        DocumentType::CoverLetter,
        DocumentType::Portfolio,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::CoverLetter => "cover-letter",
            DocumentType::Portfolio => "portfolio",
            DocumentType::Other => "other",
        }
    }

    /// Best guess from an uploaded file name.
    pub fn guess(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        if lower.contains("resume") {
            DocumentType::Resume
        } else if lower.contains("cover") {
            DocumentType::CoverLetter
        } else {
            DocumentType::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

// --- Applications ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewDate {
    pub id: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: InterviewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub outcome: InterviewOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub location: String,
    pub job_type: JobType,
    pub industry: String,
    pub application_date: String,
    pub status: ApplicationStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interview_dates: Vec<InterviewDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_ids: Vec<String>,
}

/// An application as submitted by a form, before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewApplication {
    pub company_name: String,
    pub job_title: String,
    pub location: String,
    pub job_type: JobType,
    pub industry: String,
    pub application_date: String,
    pub status: ApplicationStatus,
    pub priority: Priority,
    pub salary: Option<String>,
    pub job_url: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub resume_version: Option<String>,
    pub cover_letter_version: Option<String>,
    pub referral_source: Option<String>,
    pub follow_up_date: Option<String>,
    pub interview_dates: Vec<InterviewDate>,
    pub tasks: Vec<Task>,
    pub contact_ids: Vec<String>,
}

impl NewApplication {
    pub fn with_id(self, id: String) -> Application {
        Application {
            id,
            company_name: self.company_name,
            job_title: self.job_title,
            location: self.location,
            job_type: self.job_type,
            industry: self.industry,
            application_date: self.application_date,
            status: self.status,
            priority: self.priority,
            salary: self.salary,
            job_url: self.job_url,
            description: self.description,
            notes: self.notes,
            resume_version: self.resume_version,
            cover_letter_version: self.cover_letter_version,
            referral_source: self.referral_source,
            follow_up_date: self.follow_up_date,
            interview_dates: self.interview_dates,
            tasks: self.tasks,
            contact_ids: self.contact_ids,
        }
    }
}

/// Partial application fields; every `Some` overwrites, every `None` is left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationUpdate {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub industry: Option<String>,
    pub application_date: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub priority: Option<Priority>,
    pub salary: Option<String>,
    pub job_url: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub resume_version: Option<String>,
    pub cover_letter_version: Option<String>,
    pub referral_source: Option<String>,
    pub follow_up_date: Option<String>,
    pub interview_dates: Option<Vec<InterviewDate>>,
    pub tasks: Option<Vec<Task>>,
    pub contact_ids: Option<Vec<String>>,
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn overwrite_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl Application {
    /// Shallow merge: the update's present fields win, the id never changes.
    pub fn merged(mut self, update: ApplicationUpdate) -> Self {
        overwrite(&mut self.company_name, update.company_name);
        overwrite(&mut self.job_title, update.job_title);
        overwrite(&mut self.location, update.location);
        overwrite(&mut self.job_type, update.job_type);
        overwrite(&mut self.industry, update.industry);
        overwrite(&mut self.application_date, update.application_date);
        overwrite(&mut self.status, update.status);
        overwrite(&mut self.priority, update.priority);
        overwrite_opt(&mut self.salary, update.salary);
        overwrite_opt(&mut self.job_url, update.job_url);
        overwrite_opt(&mut self.description, update.description);
        overwrite_opt(&mut self.notes, update.notes);
        overwrite_opt(&mut self.resume_version, update.resume_version);
        overwrite_opt(&mut self.cover_letter_version, update.cover_letter_version);
        overwrite_opt(&mut self.referral_source, update.referral_source);
        overwrite_opt(&mut self.follow_up_date, update.follow_up_date);
        overwrite(&mut self.interview_dates, update.interview_dates);
        overwrite(&mut self.tasks, update.tasks);
        overwrite(&mut self.contact_ids, update.contact_ids);
        self
    }
}

// --- Contacts ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub relationship_type: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub role: String,
    pub company: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub notes: Option<String>,
    pub relationship_type: RelationshipType,
    pub last_contact_date: Option<String>,
    pub application_ids: Vec<String>,
}

impl NewContact {
    pub fn with_id(self, id: String) -> Contact {
        Contact {
            id,
            name: self.name,
            role: self.role,
            company: self.company,
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            notes: self.notes,
            relationship_type: self.relationship_type,
            last_contact_date: self.last_contact_date,
            application_ids: self.application_ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub notes: Option<String>,
    pub relationship_type: Option<RelationshipType>,
    pub last_contact_date: Option<String>,
    pub application_ids: Option<Vec<String>>,
}

impl Contact {
    pub fn merged(mut self, update: ContactUpdate) -> Self {
        overwrite(&mut self.name, update.name);
        overwrite(&mut self.role, update.role);
        overwrite(&mut self.company, update.company);
        overwrite_opt(&mut self.email, update.email);
        overwrite_opt(&mut self.phone, update.phone);
        overwrite_opt(&mut self.linkedin, update.linkedin);
        overwrite_opt(&mut self.notes, update.notes);
        overwrite(&mut self.relationship_type, update.relationship_type);
        overwrite_opt(&mut self.last_contact_date, update.last_contact_date);
        overwrite(&mut self.application_ids, update.application_ids);
        self
    }
}

// --- Documents ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    pub file_name: String,
    pub upload_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDocument {
    pub name: String,
    pub kind: DocumentType,
    pub file_name: String,
    pub upload_date: String,
    pub application_ids: Vec<String>,
}

impl NewDocument {
    /// Metadata for a freshly uploaded file: name is the stem before the first '.'.
    pub fn from_upload(file_name: &str, upload_date: String) -> Self {
        let name = file_name.split('.').next().unwrap_or(file_name).to_string();
        Self {
            name,
            kind: DocumentType::guess(file_name),
            file_name: file_name.to_string(),
            upload_date,
            application_ids: Vec::new(),
        }
    }

    pub fn with_id(self, id: String) -> Document {
        Document {
            id,
            name: self.name,
            kind: self.kind,
            file_name: self.file_name,
            upload_date: self.upload_date,
            application_ids: self.application_ids,
        }
    }
}

// --- Preferences and the root aggregate ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    pub currency: String,
    pub date_format: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            currency: "USD".to_string(),
            date_format: "MM/dd/yyyy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesUpdate {
    pub theme: Option<Theme>,
    pub currency: Option<String>,
    pub date_format: Option<String>,
}

impl Preferences {
    pub fn merged(mut self, update: PreferencesUpdate) -> Self {
        overwrite(&mut self.theme, update.theme);
        overwrite(&mut self.currency, update.currency);
        overwrite(&mut self.date_format, update.date_format);
        self
    }
}

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl AppData {
    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }
}
