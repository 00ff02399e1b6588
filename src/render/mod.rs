//! View renderers: colored terminal page and JSON.

pub mod json;
pub mod terminal;

use crate::store::State;

/// Trait for rendering the view state to an output format.
pub trait ViewRenderer {
    /// Render the state to a string.
    fn render(&self, state: &State) -> String;
}
