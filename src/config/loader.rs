//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userdesk.toml` in the working directory (or an explicit `--config`)
//! 4. `~/.config/userdesk/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_LOG,
    ENV_PATH_STYLE, ENV_STALE_RESPONSES, ENV_TIMEOUT_SECS,
};
use super::env::Env;
use crate::models::{PathStyle, StalePolicy};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub log: LogConfig,
}

/// Where and how to reach the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection URL; per-record URLs are derived from it.
    pub base_url: String,
    pub timeout_secs: u64,
    pub path_style: PathStyle,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            path_style: PathStyle::default(),
        }
    }
}

/// View behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub stale_responses: StalePolicy,
}

/// Logging defaults, used when neither `RUST_LOG` nor `-v` is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// A config file as written: only the keys it actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    api: Option<PartialApi>,
    view: Option<PartialView>,
    log: Option<PartialLog>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PartialApi {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    path_style: Option<PathStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PartialView {
    stale_responses: Option<StalePolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PartialLog {
    level: Option<String>,
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the local `.userdesk.toml` lookup and must exist.
    pub fn load(
        work_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local or explicit config
        match explicit {
            Some(path) => {
                let file = Self::load_file(path)?;
                config.merge(file);
            }
            None => {
                if let Some(dir) = work_dir {
                    let local_path = dir.join(CONFIG_FILENAME);
                    if local_path.exists() {
                        let local = Self::load_file(&local_path)?;
                        config.merge(local);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Apply command-line overrides (layer 1) and check the result.
    pub fn apply_cli(&mut self, overrides: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(ref url) = overrides.api_url {
            self.api.base_url = url.clone();
        }
        self.validate()
    }

    /// Reject values no request could succeed with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url",
                reason: format!("expected an http:// or https:// URL, got '{url}'"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "api.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load one file layer. Keys the file leaves out stay `None`.
    fn load_file(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Overlay a file layer. Every key the file sets wins, even when it
    /// restates a built-in default.
    fn merge(&mut self, other: PartialConfig) {
        if let Some(api) = other.api {
            if let Some(base_url) = api.base_url {
                self.api.base_url = base_url;
            }
            if let Some(timeout_secs) = api.timeout_secs {
                self.api.timeout_secs = timeout_secs;
            }
            if let Some(path_style) = api.path_style {
                self.api.path_style = path_style;
            }
        }
        if let Some(stale_responses) = other.view.and_then(|v| v.stale_responses) {
            self.view.stale_responses = stale_responses;
        }
        if let Some(level) = other.log.and_then(|l| l.level) {
            self.log.level = level;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(url) = env.var(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(secs) = env.parsed::<u64>(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = secs;
        }
        if let Some(style) = env.parsed::<PathStyle>(ENV_PATH_STYLE) {
            self.api.path_style = style;
        }
        if let Some(policy) = env.parsed::<StalePolicy>(ENV_STALE_RESPONSES) {
            self.view.stale_responses = policy;
        }
        if let Some(level) = env.var(ENV_LOG) {
            self.log.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api/users/");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.path_style, PathStyle::Legacy);
        assert_eq!(config.view.stale_responses, StalePolicy::Apply);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[api]
base_url = "https://users.internal/api/users/"
timeout_secs = 3
path_style = "normalized"

[view]
stale_responses = "discard"

[log]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://users.internal/api/users/");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.path_style, PathStyle::Normalized);
        assert_eq!(config.view.stale_responses, StalePolicy::Discard);
        assert_eq!(config.log.level, "debug");
    }

    fn layer(toml_str: &str) -> PartialConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn merge_overrides_values_the_file_sets() {
        let mut base = Config::default();
        base.merge(layer(
            "[api]\nbase_url = \"http://other/api/users/\"\npath_style = \"normalized\"\n\
             [view]\nstale_responses = \"discard\"\n",
        ));

        assert_eq!(base.api.base_url, "http://other/api/users/");
        assert_eq!(base.api.path_style, PathStyle::Normalized);
        assert_eq!(base.view.stale_responses, StalePolicy::Discard);
        assert_eq!(base.api.timeout_secs, 10);
    }

    #[test]
    fn merge_keeps_base_for_keys_the_file_omits() {
        let mut base = Config::default();
        base.api.timeout_secs = 30;
        base.log.level = "info".to_string();

        base.merge(layer("[api]\nbase_url = \"http://other/api/users/\"\n"));

        assert_eq!(base.api.timeout_secs, 30);
        assert_eq!(base.log.level, "info");
    }

    #[test]
    fn local_layer_can_restore_defaults_over_global() {
        let mut config = Config::default();
        config.merge(layer(
            "[api]\npath_style = \"normalized\"\ntimeout_secs = 30\n\
             [view]\nstale_responses = \"discard\"\n[log]\nlevel = \"debug\"\n",
        ));
        config.merge(layer(
            "[api]\npath_style = \"legacy\"\ntimeout_secs = 10\n\
             [view]\nstale_responses = \"apply\"\n[log]\nlevel = \"warn\"\n",
        ));

        assert_eq!(config.api.path_style, PathStyle::Legacy);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.view.stale_responses, StalePolicy::Apply);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn explicit_file_restating_defaults_wins() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("pinned.toml");
        std::fs::write(&explicit, "[api]\npath_style = \"legacy\"\ntimeout_secs = 10\n").unwrap();

        let config = Config::load(None, Some(&explicit), &no_env()).unwrap();
        assert_eq!(config.api.path_style, PathStyle::Legacy);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let result = Config::load_file(Path::new("/tmp/userdesk_not_exist_config.toml"));
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".userdesk.toml"),
            "[api]\nbase_url = \"http://from-file/api/users/\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), None, &no_env()).unwrap();
        assert_eq!(config.api.base_url, "http://from-file/api/users/");
    }

    #[test]
    fn explicit_file_replaces_local_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".userdesk.toml"),
            "[api]\nbase_url = \"http://local/api/users/\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[api]\ntimeout_secs = 2\n").unwrap();

        let config = Config::load(Some(dir.path()), Some(&explicit), &no_env()).unwrap();
        assert_eq!(config.api.timeout_secs, 2);
        assert_ne!(config.api.base_url, "http://local/api/users/");
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load(None, Some(&missing), &no_env()).is_err());
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".userdesk.toml"),
            "[api]\nbase_url = \"http://from-file/api/users/\"\n",
        )
        .unwrap();
        let env = Env::mock([
            ("USERDESK_API_URL", "http://from-env/api/users/"),
            ("USERDESK_PATH_STYLE", "normalized"),
            ("USERDESK_STALE_RESPONSES", "discard"),
            ("USERDESK_TIMEOUT_SECS", "4"),
            ("USERDESK_LOG", "trace"),
        ]);

        let config = Config::load(Some(dir.path()), None, &env).unwrap();
        assert_eq!(config.api.base_url, "http://from-env/api/users/");
        assert_eq!(config.api.path_style, PathStyle::Normalized);
        assert_eq!(config.view.stale_responses, StalePolicy::Discard);
        assert_eq!(config.api.timeout_secs, 4);
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([
            ("USERDESK_TIMEOUT_SECS", "soon"),
            ("USERDESK_PATH_STYLE", "crooked"),
        ]);
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), None, &env).unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.path_style, PathStyle::Legacy);
    }

    #[test]
    fn cli_override_wins() {
        let mut config = Config::default();
        config
            .apply_cli(&CliOverrides {
                api_url: Some("http://cli/api/users/".to_string()),
            })
            .unwrap();
        assert_eq!(config.api.base_url, "http://cli/api/users/");
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://nope/".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn to_toml_round_trips_sections() {
        let output = Config::default().to_toml();
        assert!(output.contains("[api]"));
        assert!(output.contains("path_style = \"legacy\""));
    }
}
