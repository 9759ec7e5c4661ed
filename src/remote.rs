use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RemoteConfig;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{0} environment variable not set")]
    Config(&'static str),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// A job row as served by the remote table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub niche: Option<String>,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub applied_at: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields a caller may send on insert or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobInput {
    pub company: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
}

impl JobInput {
    /// Fills what the job form pre-populates: status "applied", applied today.
    pub fn with_form_defaults(mut self) -> Self {
        self.status.get_or_insert_with(|| "applied".to_string());
        self.applied_at
            .get_or_insert_with(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
        self
    }
}

/// Update body: the input plus a fresh `updated_at` stamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobChanges {
    #[serde(flatten)]
    pub input: JobInput,
    pub updated_at: String,
}

impl JobChanges {
    pub fn stamped_now(input: JobInput) -> Self {
        Self {
            input,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The remote job table. One round trip per call, no retries.
#[async_trait]
pub trait JobTable: Send + Sync {
    /// All rows, newest `applied_at` first.
    async fn select_all(&self) -> Result<Vec<JobRecord>, RemoteError>;
    async fn insert(&self, input: &JobInput) -> Result<JobRecord, RemoteError>;
    async fn update(&self, id: &str, changes: &JobChanges) -> Result<JobRecord, RemoteError>;
    async fn delete(&self, id: &str) -> Result<(), RemoteError>;
}

/// `JobTable` over a PostgREST-style HTTP API.
#[derive(Debug)]
pub struct RestJobTable {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RestJobTable {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, RemoteError> {
        Ok(Self::new(RemoteConfig::from_env()?))
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.config.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn id_filter(id: &str) -> [(&'static str, String); 1] {
        [("id", format!("eq.{}", id))]
    }
}

async fn check_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Status { status, body })
}

async fn single_row(response: Response, what: &str) -> Result<JobRecord, RemoteError> {
    let rows: Vec<JobRecord> = check_status(response).await?.json().await?;
    rows.into_iter()
        .next()
        .ok_or_else(|| RemoteError::Unexpected(format!("{} returned no rows", what)))
}

#[async_trait]
impl JobTable for RestJobTable {
    async fn select_all(&self) -> Result<Vec<JobRecord>, RemoteError> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "applied_at.desc")])
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn insert(&self, input: &JobInput) -> Result<JobRecord, RemoteError> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(input)
            .send()
            .await?;
        single_row(response, "insert").await
    }

    async fn update(&self, id: &str, changes: &JobChanges) -> Result<JobRecord, RemoteError> {
        let response = self
            .request(Method::PATCH)
            .query(&Self::id_filter(id))
            .header("Prefer", "return=representation")
            .json(changes)
            .send()
            .await?;
        single_row(response, "update").await
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let response = self
            .request(Method::DELETE)
            .query(&Self::id_filter(id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_fill_only_missing() {
        let input = JobInput {
            company: "Acme".to_string(),
            title: "Eng".to_string(),
            status: Some("screening".to_string()),
            ..Default::default()
        }
        .with_form_defaults();
        assert_eq!(input.status.as_deref(), Some("screening"));
        let applied_at = input.applied_at.unwrap();
        assert!(chrono::NaiveDate::parse_from_str(&applied_at, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_changes_body_is_flat() {
        let changes = JobChanges::stamped_now(JobInput {
            company: "Acme".to_string(),
            title: "Eng".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(json["company"], "Acme");
        assert!(json.get("niche").is_none());
        assert!(json["updated_at"].as_str().is_some());
    }

    #[test]
    fn test_record_parses_table_row() {
        let row = r#"{
            "id": "7f1c",
            "company": "Acme",
            "title": "Eng",
            "niche": null,
            "status": "applied",
            "notes": "warm intro",
            "applied_at": "2024-03-01",
            "created_at": "2024-03-01T10:00:00+00:00",
            "updated_at": "2024-03-01T10:00:00+00:00"
        }"#;
        let record: JobRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.niche, None);
        assert_eq!(record.notes.as_deref(), Some("warm intro"));
    }

    #[test]
    fn test_status_error_message() {
        let err = RemoteError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "bad key".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("bad key"));
    }
}
