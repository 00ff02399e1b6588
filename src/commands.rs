//! One-shot commands behind `list`, `add`, `edit` and `delete`.
//!
//! Each command mounts the view (an initial load), runs one operation and
//! maps its [`Outcome`] to a result. The caller renders the view whatever
//! the result, so a failed call still shows the unchanged state.

use thiserror::Error;

use crate::api::Operation;
use crate::models::UserId;
use crate::view::{Outcome, UserListView};

/// Why a one-shot command should exit non-zero.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("no user with id {0}")]
    UnknownUser(UserId),

    /// The cause was already logged by the view.
    #[error("{0} request failed")]
    RequestFailed(Operation),
}

/// Only `Failed` is an error. `Stale` and `Skipped` left the state as
/// another request or the form mode dictated.
pub fn check(operation: Operation, outcome: Outcome) -> Result<(), CommandError> {
    match outcome {
        Outcome::Failed => Err(CommandError::RequestFailed(operation)),
        Outcome::Applied | Outcome::Skipped | Outcome::Stale => Ok(()),
    }
}

pub async fn list(view: &UserListView) -> Result<(), CommandError> {
    check(Operation::List, view.load().await)
}

pub async fn add(view: &UserListView, name: String, email: String) -> Result<(), CommandError> {
    view.load().await;
    view.set_name(name);
    view.set_email(email);
    check(Operation::Create, view.create().await)
}

/// Fields left as `None` keep the record's current values.
pub async fn edit(
    view: &UserListView,
    id: UserId,
    name: Option<String>,
    email: Option<String>,
) -> Result<(), CommandError> {
    view.load().await;
    if view.begin_edit(id) == Outcome::Skipped {
        return Err(CommandError::UnknownUser(id));
    }
    if let Some(name) = name {
        view.set_name(name);
    }
    if let Some(email) = email {
        view.set_email(email);
    }
    check(Operation::Update, view.update().await)
}

pub async fn delete(view: &UserListView, id: UserId) -> Result<(), CommandError> {
    view.load().await;
    check(Operation::Delete, view.delete(id).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_outcomes_are_errors() {
        assert_eq!(
            check(Operation::Create, Outcome::Failed),
            Err(CommandError::RequestFailed(Operation::Create))
        );
        assert_eq!(check(Operation::Update, Outcome::Applied), Ok(()));
        assert_eq!(check(Operation::Update, Outcome::Skipped), Ok(()));
        assert_eq!(check(Operation::Delete, Outcome::Stale), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(CommandError::UnknownUser(404).to_string(), "no user with id 404");
        assert_eq!(
            CommandError::RequestFailed(Operation::List).to_string(),
            "list request failed"
        );
    }
}
