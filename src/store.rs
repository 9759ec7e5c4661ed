use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::export;
use crate::ids::generate_id;
use crate::mirror::Mirror;
use crate::models::{
    AppData, ApplicationUpdate, ContactUpdate, NewApplication, NewContact, NewDocument,
    PreferencesUpdate,
};
use crate::reducer::{reduce, Action};

/// Single owner of the tracker's state.
///
/// Every mutation builds an `Action`, runs it through `reduce`, swaps in the
/// result, then writes the whole document to the mirror. Mutations never
/// fail from the caller's side: a failed write is logged and retried on the
/// next mutation or when the store is dropped.
pub struct AppStore<M: Mirror> {
    data: AppData,
    mirror: M,
    unsaved: bool,
}

impl<M: Mirror> AppStore<M> {
    /// Reads the mirror once. Missing or unreadable data starts from defaults.
    pub fn open(mirror: M) -> Self {
        let data = match mirror.load() {
            Ok(Some(data)) => {
                debug!(
                    applications = data.applications.len(),
                    contacts = data.contacts.len(),
                    documents = data.documents.len(),
                    "loaded saved data"
                );
                data
            }
            Ok(None) => {
                debug!("no saved data, starting empty");
                AppData::default()
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "failed to load saved data, starting empty");
                AppData::default()
            }
        };
        Self::with_state(data, mirror)
    }

    /// Starts from an explicit state without reading the mirror.
    pub fn with_state(data: AppData, mirror: M) -> Self {
        Self {
            data,
            mirror,
            unsaved: false,
        }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    #[cfg(test)]
    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "dispatch");
        self.data = reduce(std::mem::take(&mut self.data), action);
        self.persist();
    }

    fn persist(&mut self) {
        match self.mirror.save(&self.data) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                error!(error = %format!("{:#}", e), "failed to save data");
                self.unsaved = true;
            }
        }
    }

    // --- Applications ---

    pub fn add_application(&mut self, application: NewApplication) -> String {
        let id = generate_id();
        self.dispatch(Action::AddApplication(application.with_id(id.clone())));
        id
    }

    pub fn update_application(&mut self, id: &str, update: ApplicationUpdate) {
        self.dispatch(Action::UpdateApplication {
            id: id.to_string(),
            update,
        });
    }

    pub fn delete_application(&mut self, id: &str) {
        self.dispatch(Action::DeleteApplication(id.to_string()));
    }

    // --- Contacts ---

    pub fn add_contact(&mut self, contact: NewContact) -> String {
        let id = generate_id();
        self.dispatch(Action::AddContact(contact.with_id(id.clone())));
        id
    }

    pub fn update_contact(&mut self, id: &str, update: ContactUpdate) {
        self.dispatch(Action::UpdateContact {
            id: id.to_string(),
            update,
        });
    }

    pub fn delete_contact(&mut self, id: &str) {
        self.dispatch(Action::DeleteContact(id.to_string()));
    }

    // --- Documents (no update: metadata is fixed once uploaded) ---

    pub fn add_document(&mut self, document: NewDocument) -> String {
        let id = generate_id();
        self.dispatch(Action::AddDocument(document.with_id(id.clone())));
        id
    }

    pub fn delete_document(&mut self, id: &str) {
        self.dispatch(Action::DeleteDocument(id.to_string()));
    }

    // --- Preferences ---

    pub fn update_preferences(&mut self, update: PreferencesUpdate) {
        self.dispatch(Action::UpdatePreferences(update));
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.data.preferences.theme.toggled();
        self.update_preferences(PreferencesUpdate {
            theme: Some(theme),
            ..Default::default()
        });
    }

    // --- Backup ---

    pub fn export_data(&self, dir: &Path) -> Result<PathBuf> {
        let path = export::write_backup(&self.data, dir)?;
        info!(path = %path.display(), "exported data");
        Ok(path)
    }

    /// Replaces everything with `data`. No merging and no validation.
    pub fn import_data(&mut self, data: AppData) {
        info!(
            applications = data.applications.len(),
            contacts = data.contacts.len(),
            documents = data.documents.len(),
            "importing data"
        );
        self.dispatch(Action::SetData(data));
    }
}

impl<M: Mirror> Drop for AppStore<M> {
    fn drop(&mut self) {
        if self.unsaved {
            self.persist();
        }
    }
}
