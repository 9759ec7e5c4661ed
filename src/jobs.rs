use tracing::{debug, error};

use crate::remote::{JobChanges, JobInput, JobRecord, JobTable, RemoteError};

/// Local copy of the remote job table.
///
/// The cache only changes after the remote call succeeds, so a failure
/// leaves it exactly as it was. Callers get the error back and decide how
/// to tell the user.
pub struct JobCache<T: JobTable> {
    table: T,
    jobs: Vec<JobRecord>,
    loading: bool,
    error: Option<String>,
}

impl<T: JobTable> JobCache<T> {
    pub fn new(table: T) -> Self {
        Self {
            table,
            jobs: Vec::new(),
            loading: false,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch, cleared when a new fetch starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn fetch(&mut self) -> Result<(), RemoteError> {
        if self.loading {
            debug!("previous fetch was dropped before it finished");
        }
        self.loading = true;
        self.error = None;
        let result = self.table.select_all().await;
        self.loading = false;

        match result {
            Ok(jobs) => {
                debug!(count = jobs.len(), "fetched jobs");
                self.jobs = jobs;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to fetch jobs");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Inserts when `existing_id` is `None`, otherwise updates that row.
    /// New rows go to the front; updated rows keep their position.
    pub async fn save(
        &mut self,
        input: JobInput,
        existing_id: Option<&str>,
    ) -> Result<JobRecord, RemoteError> {
        let result = match existing_id {
            Some(id) => self.table.update(id, &JobChanges::stamped_now(input)).await,
            None => self.table.insert(&input.with_form_defaults()).await,
        };

        let saved = result.inspect_err(|e| error!(error = %e, "failed to save job"))?;
        match existing_id {
            Some(id) => {
                if let Some(slot) = self.jobs.iter_mut().find(|job| job.id == id) {
                    *slot = saved.clone();
                }
            }
            None => self.jobs.insert(0, saved.clone()),
        }
        Ok(saved)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), RemoteError> {
        self.table
            .delete(id)
            .await
            .inspect_err(|e| error!(error = %e, "failed to delete job"))?;
        self.jobs.retain(|job| job.id != id);
        Ok(())
    }
}
