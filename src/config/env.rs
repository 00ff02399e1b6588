//! `USERDESK_*` environment lookups for the config loader.
//!
//! The loader reads through [`Env`] so tests can supply variables with
//! [`Env::mock`] instead of mutating the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Source of environment variables: the process, or a fixed map.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    pub fn real() -> Self {
        Self { fixed: None }
    }

    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let fixed = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fixed: Some(fixed) }
    }

    /// The raw value, or `None` when unset or not valid unicode.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// The value parsed as `T`. An unparsable value is reported on stderr
    /// and treated as unset, since logging is not installed yet.
    pub fn parsed<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.var(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                eprintln!("Warning: ignoring invalid {name} value: {raw}");
                None
            }
        }
    }
}
