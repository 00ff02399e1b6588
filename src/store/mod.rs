//! Explicit state container for the user list view.
//!
//! [`State`] holds the list and the form. It only changes by dispatching an
//! [`Action`] through the pure [`reduce`] function, which keeps the
//! transition rules independent of rendering and of the network layer.

pub mod action;
pub mod reducer;
pub mod token;

use serde::Serialize;

pub use action::Action;
pub use reducer::reduce;
pub use token::{RequestToken, RequestTracker, Target};

use crate::models::{FormState, User};

/// Everything the view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub users: Vec<User>,
    pub form: FormState,
}

/// Owns the current [`State`] and applies actions to it.
#[derive(Debug, Default)]
pub struct Store {
    state: State,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state.
    pub fn with_state(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Apply `action` and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &State {
        self.state = reduce(&self.state, action);
        &self.state
    }
}
