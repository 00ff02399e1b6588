//! Pure reduction from `(State, Action)` to the next `State`.

use super::action::Action;
use super::State;
use crate::models::FormState;

/// Compute the state that results from applying `action` to `state`.
///
/// `BeginEdit` on an unknown id returns the state unchanged.
pub fn reduce(state: &State, action: Action) -> State {
    let mut next = state.clone();
    match action {
        Action::Loaded(users) => {
            next.users = users;
        }
        Action::Created(user) => {
            next.users.push(user);
            next.form = FormState::default();
        }
        Action::BeginEdit(id) => {
            if let Some(user) = next.users.iter().find(|u| u.id == id) {
                next.form = FormState::editing(user);
            }
        }
        Action::Updated(user) => {
            for existing in next.users.iter_mut().filter(|u| u.id == user.id) {
                *existing = user.clone();
            }
            next.form = FormState::default();
        }
        Action::Deleted(id) => {
            next.users.retain(|u| u.id != id);
        }
        Action::SetName(name) => {
            next.form.name = name;
        }
        Action::SetEmail(email) => {
            next.form.email = email;
        }
        Action::ResetForm => {
            next.form = FormState::default();
        }
    }
    next
}
