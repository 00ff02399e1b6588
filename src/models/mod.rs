//! Shared types used across all modules.
//!
//! This module defines the user record, the form state, and the small
//! policy enums that config, the HTTP client, and the view agree on.
//! Other modules import from here rather than reaching into each other's
//! internals.

pub mod form;
pub mod user;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use form::{FormMode, FormState};
pub use user::{UNSAVED_ID, User, UserId};

/// How per-record resource paths are built from the collection URL.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PathStyle {
    /// PUT goes to `{base}/{id}` verbatim, which is a double slash after a
    /// trailing-slash base. DELETE uses a single slash in every style.
    #[default]
    Legacy,
    /// Exactly one slash between base and id for every per-record call.
    Normalized,
}

/// What the view does with a response that was overtaken by a newer
/// request for the same target.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StalePolicy {
    /// Apply every response as it lands (last write wins).
    #[default]
    Apply,
    /// Drop responses older than the latest request for the same target.
    Discard,
}
