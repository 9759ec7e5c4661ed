use crate::models::{
    AppData, Application, ApplicationUpdate, Contact, ContactUpdate, Document, PreferencesUpdate,
};

/// A state transition, carrying everything `reduce` needs. Ids are assigned
/// before an action is built, so reducing is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetData(AppData),
    AddApplication(Application),
    UpdateApplication { id: String, update: ApplicationUpdate },
    DeleteApplication(String),
    AddContact(Contact),
    UpdateContact { id: String, update: ContactUpdate },
    DeleteContact(String),
    AddDocument(Document),
    DeleteDocument(String),
    UpdatePreferences(PreferencesUpdate),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetData(_) => "set_data",
            Action::AddApplication(_) => "add_application",
            Action::UpdateApplication { .. } => "update_application",
            Action::DeleteApplication(_) => "delete_application",
            Action::AddContact(_) => "add_contact",
            Action::UpdateContact { .. } => "update_contact",
            Action::DeleteContact(_) => "delete_contact",
            Action::AddDocument(_) => "add_document",
            Action::DeleteDocument(_) => "delete_document",
            Action::UpdatePreferences(_) => "update_preferences",
        }
    }
}

/// Computes the next state. Pure: no I/O, no clock, no randomness.
///
/// Unknown ids on update/delete leave the state as it was. Deletes never
/// touch cross-references held by other records.
pub fn reduce(mut state: AppData, action: Action) -> AppData {
    match action {
        Action::SetData(data) => return data,
        Action::AddApplication(app) => state.applications.push(app),
        Action::UpdateApplication { id, update } => {
            update_where(&mut state.applications, |app| app.id == id, |app| app.merged(update));
        }
        Action::DeleteApplication(id) => remove_first(&mut state.applications, |app| app.id == id),
        Action::AddContact(contact) => state.contacts.push(contact),
        Action::UpdateContact { id, update } => {
            update_where(&mut state.contacts, |c| c.id == id, |c| c.merged(update));
        }
        Action::DeleteContact(id) => remove_first(&mut state.contacts, |c| c.id == id),
        Action::AddDocument(doc) => state.documents.push(doc),
        Action::DeleteDocument(id) => remove_first(&mut state.documents, |d| d.id == id),
        Action::UpdatePreferences(update) => {
            state.preferences = std::mem::take(&mut state.preferences).merged(update);
        }
    }
    state
}

fn update_where<T: Clone>(
    items: &mut [T],
    matches: impl Fn(&T) -> bool,
    merge: impl FnOnce(T) -> T,
) {
    if let Some(slot) = items.iter_mut().find(|item| matches(&**item)) {
        *slot = merge(slot.clone());
    }
}

fn remove_first<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) {
    if let Some(idx) = items.iter().position(matches) {
        items.remove(idx);
    }
}
