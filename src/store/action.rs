//! Actions accepted by the reducer.

use crate::models::{User, UserId};

/// A state transition.
///
/// Network-backed variants carry the result of a successful call. Failures
/// never become actions, so a failed call cannot change state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole list with the loaded collection.
    Loaded(Vec<User>),
    /// Append the server-returned record and clear the form.
    Created(User),
    /// Copy a record into the form and enter edit mode.
    BeginEdit(UserId),
    /// Replace the matching record and leave edit mode.
    Updated(User),
    /// Remove the record with this id.
    Deleted(UserId),
    SetName(String),
    SetEmail(String),
    /// Clear the form and return to create mode.
    ResetForm,
}

impl Action {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Loaded(_) => "load",
            Action::Created(_) => "create",
            Action::BeginEdit(_) => "begin_edit",
            Action::Updated(_) => "update",
            Action::Deleted(_) => "delete",
            Action::SetName(_) => "set_name",
            Action::SetEmail(_) => "set_email",
            Action::ResetForm => "reset_form",
        }
    }
}
