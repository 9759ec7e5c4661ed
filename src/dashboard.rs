//! Read-only views derived from `AppData` for the dashboard and list pages.

use crate::models::{AppData, Application, ApplicationStatus, Contact, Document, DocumentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_applications: usize,
    pub interviews_scheduled: usize,
    pub offers_received: usize,
    /// Percentage, rounded to the nearest whole number.
    pub response_rate: u32,
}

pub fn stats(data: &AppData) -> Stats {
    let total = data.applications.len();
    let interviews = data
        .applications
        .iter()
        .filter(|app| !app.interview_dates.is_empty())
        .count();
    let offers = data
        .applications
        .iter()
        .filter(|app| app.status == ApplicationStatus::Offer)
        .count();
    let response_rate = if total > 0 {
        (((interviews + offers) as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    Stats {
        total_applications: total,
        interviews_scheduled: interviews,
        offers_received: offers,
        response_rate,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineStage {
    pub status: ApplicationStatus,
    pub count: usize,
    pub percentage: f64,
}

/// One stage per status, in lifecycle order, including empty ones.
pub fn pipeline(data: &AppData) -> Vec<PipelineStage> {
    let total = data.applications.len();
    ApplicationStatus::ALL
        .iter()
        .map(|&status| {
            let count = data
                .applications
                .iter()
                .filter(|app| app.status == status)
                .count();
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            PipelineStage {
                status,
                count,
                percentage,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Application,
    Interview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub subtitle: String,
    pub date: String,
}

const RECENT_APPLICATIONS: usize = 5;
const RECENT_INTERVIEWS: usize = 3;
const RECENT_TOTAL: usize = 8;

/// Latest applications and interviews merged into one feed, newest first.
/// Dates are ISO strings, so they order lexically.
pub fn recent_activity(data: &AppData) -> Vec<Activity> {
    let mut applications: Vec<&Application> = data.applications.iter().collect();
    applications.sort_by(|a, b| b.application_date.cmp(&a.application_date));

    let mut feed: Vec<Activity> = applications
        .into_iter()
        .take(RECENT_APPLICATIONS)
        .map(|app| Activity {
            id: app.id.clone(),
            kind: ActivityKind::Application,
            title: format!("Applied to {}", app.job_title),
            subtitle: app.company_name.clone(),
            date: app.application_date.clone(),
        })
        .collect();

    let mut interviews: Vec<Activity> = data
        .applications
        .iter()
        .flat_map(|app| {
            app.interview_dates.iter().map(move |interview| Activity {
                id: format!("{}-{}", app.id, interview.id),
                kind: ActivityKind::Interview,
                title: format!("{} interview", interview.kind.as_str()),
                subtitle: format!("{} at {}", app.job_title, app.company_name),
                date: interview.date.clone(),
            })
        })
        .collect();
    interviews.sort_by(|a, b| b.date.cmp(&a.date));
    interviews.truncate(RECENT_INTERVIEWS);

    feed.extend(interviews);
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(RECENT_TOTAL);
    feed
}

/// Case-insensitive search on company and title; `None` status means all.
pub fn filter_applications<'a>(
    data: &'a AppData,
    term: &str,
    status: Option<ApplicationStatus>,
) -> Vec<&'a Application> {
    let term = term.to_lowercase();
    data.applications
        .iter()
        .filter(|app| {
            app.company_name.to_lowercase().contains(&term)
                || app.job_title.to_lowercase().contains(&term)
        })
        .filter(|app| status.is_none_or(|s| app.status == s))
        .collect()
}

pub fn filter_contacts<'a>(data: &'a AppData, term: &str) -> Vec<&'a Contact> {
    let term = term.to_lowercase();
    data.contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&term)
                || contact.company.to_lowercase().contains(&term)
                || contact.role.to_lowercase().contains(&term)
        })
        .collect()
}

/// Documents bucketed by type; empty buckets are left out.
pub fn group_documents(data: &AppData) -> Vec<(DocumentType, Vec<&Document>)> {
    DocumentType::ALL
        .iter()
        .filter_map(|&kind| {
            let docs: Vec<&Document> = data.documents.iter().filter(|d| d.kind == kind).collect();
            (!docs.is_empty()).then_some((kind, docs))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterviewDate, InterviewType, NewApplication, NewContact, NewDocument};

    fn app(id: &str, company: &str, title: &str, date: &str, status: ApplicationStatus) -> Application {
        NewApplication {
            company_name: company.to_string(),
            job_title: title.to_string(),
            application_date: date.to_string(),
            status,
            ..Default::default()
        }
        .with_id(id.to_string())
    }

    fn interview(id: &str, date: &str) -> InterviewDate {
        InterviewDate {
            id: id.to_string(),
            date: date.to_string(),
            time: "10:00".to_string(),
            kind: InterviewType::Video,
            interviewer: None,
            notes: None,
            outcome: Default::default(),
        }
    }

    fn sample() -> AppData {
        let mut data = AppData::default();
        let mut acme = app("a", "Acme", "Engineer", "2024-01-10", ApplicationStatus::Interview);
        acme.interview_dates.push(interview("i1", "2024-01-20"));
        data.applications.push(acme);
        data.applications.push(app("b", "Globex", "Designer", "2024-01-15", ApplicationStatus::Offer));
        data.applications.push(app("c", "Initech", "Engineer", "2024-01-05", ApplicationStatus::Rejected));
        data.applications.push(app("d", "Hooli", "Manager", "2024-01-01", ApplicationStatus::Applied));
        data
    }

    #[test]
    fn test_stats() {
        let s = stats(&sample());
        assert_eq!(s.total_applications, 4);
        assert_eq!(s.interviews_scheduled, 1);
        assert_eq!(s.offers_received, 1);
        assert_eq!(s.response_rate, 50);
    }

    #[test]
    fn test_stats_empty() {
        let s = stats(&AppData::default());
        assert_eq!(s.total_applications, 0);
        assert_eq!(s.response_rate, 0);
    }

    #[test]
    fn test_pipeline_covers_every_status() {
        let stages = pipeline(&sample());
        assert_eq!(stages.len(), 6);
        assert_eq!(stages[0].status, ApplicationStatus::Applied);
        assert_eq!(stages[0].count, 1);
        assert_eq!(stages[1].count, 0);
        assert!((stages[3].percentage - 25.0).abs() < f64::EPSILON);
        let total: usize = stages.iter().map(|s| s.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let feed = recent_activity(&sample());
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].kind, ActivityKind::Interview);
        assert_eq!(feed[0].id, "a-i1");
        assert_eq!(feed[0].title, "video interview");
        assert_eq!(feed[0].subtitle, "Engineer at Acme");
        assert_eq!(feed[1].title, "Applied to Designer");
        let dates: Vec<&str> = feed.iter().map(|a| a.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_recent_activity_caps() {
        let mut data = AppData::default();
        for i in 0..10 {
            let mut a = app(
                &format!("a{}", i),
                "Acme",
                "Engineer",
                &format!("2024-02-{:02}", i + 1),
                ApplicationStatus::Applied,
            );
            a.interview_dates.push(interview("i", &format!("2024-03-{:02}", i + 1)));
            data.applications.push(a);
        }
        let feed = recent_activity(&data);
        assert_eq!(feed.len(), 8);
        let interviews = feed.iter().filter(|a| a.kind == ActivityKind::Interview).count();
        assert_eq!(interviews, 3);
    }

    #[test]
    fn test_recent_activity_does_not_reorder_store() {
        let data = sample();
        let before = data.clone();
        recent_activity(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_filter_applications() {
        let data = sample();
        let hits = filter_applications(&data, "ENGINEER", None);
        assert_eq!(hits.len(), 2);
        let hits = filter_applications(&data, "engineer", Some(ApplicationStatus::Rejected));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Initech");
        assert_eq!(filter_applications(&data, "", None).len(), 4);
    }

    #[test]
    fn test_filter_contacts() {
        let mut data = AppData::default();
        data.contacts.push(
            NewContact {
                name: "Pat Lee".to_string(),
                role: "Recruiter".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }
            .with_id("c1".to_string()),
        );
        assert_eq!(filter_contacts(&data, "acme").len(), 1);
        assert_eq!(filter_contacts(&data, "recruit").len(), 1);
        assert!(filter_contacts(&data, "globex").is_empty());
    }

    #[test]
    fn test_group_documents() {
        let mut data = AppData::default();
        for (i, name) in ["resume.pdf", "notes.txt", "resume-old.pdf"].iter().enumerate() {
            data.documents
                .push(NewDocument::from_upload(name, String::new()).with_id(i.to_string()));
        }
        let groups = group_documents(&data);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, DocumentType::Resume);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, DocumentType::Other);
    }
}
