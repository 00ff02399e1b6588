//! JSON output renderer.
//!
//! Outputs `{"users": [...], "form": {...}}` format.

use crate::render::ViewRenderer;
use crate::store::State;

/// JSON output renderer.
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, state: &State) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }
}
