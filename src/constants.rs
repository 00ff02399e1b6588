//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default endpoint so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdesk";

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, injected by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// `User-Agent` header sent with every API request.
pub const USER_AGENT: &str = concat!("userdesk/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.userdesk.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userdesk.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdesk";

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/users/";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Title shown above the form.
pub const VIEW_TITLE: &str = "CRUD App for Users";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_API_URL: &str = "USERDESK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERDESK_TIMEOUT_SECS";
pub const ENV_PATH_STYLE: &str = "USERDESK_PATH_STYLE";
pub const ENV_STALE_RESPONSES: &str = "USERDESK_STALE_RESPONSES";
pub const ENV_LOG: &str = "USERDESK_LOG";
