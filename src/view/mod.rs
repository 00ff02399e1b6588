//! The user list view: local state plus the four CRUD operations.
//!
//! Every operation captures its inputs from the current state, awaits the
//! API without holding the state lock, and then dispatches the result
//! through the store. A failed call is logged and changes nothing. There
//! are no retries, cancellation, or in-flight guards. Concurrent calls on a
//! shared `Arc<UserListView>` apply in the order their responses land,
//! unless [`StalePolicy::Discard`] is configured.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::UserApi;
use crate::models::{StalePolicy, UserId};
use crate::store::{Action, RequestToken, RequestTracker, State, Store, Target};

/// What an operation did to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was applied to the state.
    Applied,
    /// The call failed; state is unchanged and the error was logged.
    Failed,
    /// Nothing to do (unknown id, or update while not editing).
    Skipped,
    /// The call succeeded but a newer request for the same target had been
    /// issued, so the response was dropped.
    Stale,
}

struct Inner {
    store: Store,
    tracker: RequestTracker,
}

/// Holds the user list and form, and talks to a [`UserApi`].
pub struct UserListView {
    api: Arc<dyn UserApi>,
    inner: Mutex<Inner>,
    stale_policy: StalePolicy,
}

impl UserListView {
    pub fn new(api: Arc<dyn UserApi>, stale_policy: StalePolicy) -> Self {
        Self::with_state(api, stale_policy, State::default())
    }

    pub fn with_state(api: Arc<dyn UserApi>, stale_policy: StalePolicy, state: State) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                store: Store::with_state(state),
                tracker: RequestTracker::new(),
            }),
            stale_policy,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> State {
        self.lock().store.state().clone()
    }

    /// Initial fetch. Replaces the list with the server collection.
    pub async fn load(&self) -> Outcome {
        let token = self.issue(Target::Collection);
        match self.api.list().await {
            Ok(users) => {
                tracing::debug!(op = "load", count = users.len(), "loaded users");
                self.apply(Target::Collection, token, Action::Loaded(users))
            }
            Err(e) => {
                tracing::error!(op = "load", error = %e, "error fetching users");
                Outcome::Failed
            }
        }
    }

    /// Create a record from the current form fields.
    ///
    /// The list gets the server's record, including its assigned id.
    pub async fn create(&self) -> Outcome {
        let draft = self.lock().store.state().form.to_new_user();
        let token = self.issue(Target::Fresh);
        match self.api.create(&draft).await {
            Ok(created) => {
                tracing::debug!(op = "create", id = created.id, "created user");
                self.apply(Target::Fresh, token, Action::Created(created))
            }
            Err(e) => {
                tracing::error!(op = "create", error = %e, "error creating user");
                Outcome::Failed
            }
        }
    }

    /// Copy record `id` into the form and switch to edit mode.
    pub fn begin_edit(&self, id: UserId) -> Outcome {
        let mut inner = self.lock();
        if !inner.store.state().users.iter().any(|u| u.id == id) {
            tracing::debug!(op = "begin_edit", id, "no such user");
            return Outcome::Skipped;
        }
        inner.store.dispatch(Action::BeginEdit(id));
        Outcome::Applied
    }

    /// Send the form as an update of the record being edited.
    ///
    /// The locally built record replaces the list entry on success. The
    /// server's response body is not consulted.
    pub async fn update(&self) -> Outcome {
        let Some(updated) = self.lock().store.state().form.to_updated_user() else {
            tracing::debug!(op = "update", "not in edit mode");
            return Outcome::Skipped;
        };
        let id = updated.id;
        let token = self.issue(Target::Record(id));
        match self.api.update(id, &updated).await {
            Ok(()) => {
                tracing::debug!(op = "update", id, "updated user");
                self.apply(Target::Record(id), token, Action::Updated(updated))
            }
            Err(e) => {
                tracing::error!(op = "update", id, error = %e, "error updating user");
                Outcome::Failed
            }
        }
    }

    /// Delete record `id`.
    pub async fn delete(&self, id: UserId) -> Outcome {
        let token = self.issue(Target::Record(id));
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(op = "delete", id, "deleted user");
                self.apply(Target::Record(id), token, Action::Deleted(id))
            }
            Err(e) => {
                tracing::error!(op = "delete", id, error = %e, "error deleting user");
                Outcome::Failed
            }
        }
    }

    /// Update when editing, create otherwise.
    pub async fn submit(&self) -> Outcome {
        let editing = self.lock().store.state().form.mode.is_edit();
        if editing {
            self.update().await
        } else {
            self.create().await
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().store.dispatch(Action::SetName(name.into()));
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.lock().store.dispatch(Action::SetEmail(email.into()));
    }

    /// Clear the form and leave edit mode without touching the list.
    pub fn reset_form(&self) {
        self.lock().store.dispatch(Action::ResetForm);
    }

    fn issue(&self, target: Target) -> RequestToken {
        self.lock().tracker.issue(target)
    }

    fn apply(&self, target: Target, token: RequestToken, action: Action) -> Outcome {
        let mut inner = self.lock();
        if self.stale_policy == StalePolicy::Discard && !inner.tracker.is_current(target, token) {
            tracing::debug!(op = action.name(), ?target, "discarding stale response");
            return Outcome::Stale;
        }
        inner.store.dispatch(action);
        Outcome::Applied
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
