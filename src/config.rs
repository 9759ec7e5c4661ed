use std::env;
use std::path::PathBuf;

use crate::remote::RemoteError;

pub const DATA_DIR_VAR: &str = "JOB_TRACKER_DATA_DIR";
pub const API_URL_VAR: &str = "JOB_TRACKER_API_URL";
pub const API_KEY_VAR: &str = "JOB_TRACKER_API_KEY";

/// Table holding remote job records.
pub const JOBS_TABLE: &str = "jobs";

/// Where the durable mirror lives: explicit flag, then env, then the
/// platform data directory, then the working directory.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = env::var(DATA_DIR_VAR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    default_data_dir()
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "job-tracker") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl RemoteConfig {
    pub fn from_env() -> Result<Self, RemoteError> {
        let base_url = env::var(API_URL_VAR).map_err(|_| RemoteError::Config(API_URL_VAR))?;
        let api_key = env::var(API_KEY_VAR).map_err(|_| RemoteError::Config(API_KEY_VAR))?;
        Ok(Self {
            base_url,
            api_key,
            table: JOBS_TABLE.to_string(),
        })
    }

    /// REST endpoint of the table, e.g. `https://x.example/rest/v1/jobs`.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/tracker")));
        assert_eq!(dir, PathBuf::from("/tmp/tracker"));
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let config = RemoteConfig {
            base_url: "https://db.example.com/".to_string(),
            api_key: "key".to_string(),
            table: JOBS_TABLE.to_string(),
        };
        assert_eq!(config.table_url(), "https://db.example.com/rest/v1/jobs");
    }

    #[test]
    fn test_remote_config_requires_env() {
        let original = env::var(API_URL_VAR).ok();
        unsafe { env::remove_var(API_URL_VAR); }

        let result = RemoteConfig::from_env();

        if let Some(val) = original {
            unsafe { env::set_var(API_URL_VAR, val); }
        }

        let err = result.unwrap_err();
        assert!(err.to_string().contains(API_URL_VAR));
    }
}
