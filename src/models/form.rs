//! Form state: the two input fields plus the create/edit mode.

use serde::Serialize;

use super::user::{User, UserId};

/// Which action the form's submit performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum FormMode {
    /// Submitting creates a new record.
    #[default]
    Create,
    /// Submitting updates the record with this id.
    Edit(UserId),
}

impl FormMode {
    /// The id being edited, if any.
    pub fn editing_id(self) -> Option<UserId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Current contents of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub mode: FormMode,
}

impl FormState {
    /// Form populated from an existing record, in edit mode.
    pub fn editing(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            mode: FormMode::Edit(user.id),
        }
    }

    /// The record a create submission would send.
    pub fn to_new_user(&self) -> User {
        User::unsaved(self.name.clone(), self.email.clone())
    }

    /// The record an update submission would send, or `None` in create mode.
    pub fn to_updated_user(&self) -> Option<User> {
        self.mode
            .editing_id()
            .map(|id| User::new(id, self.name.clone(), self.email.clone()))
    }
}
