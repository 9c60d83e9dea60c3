//! Router configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings applied to every navigation.
///
/// Deserializes from JSON with every field optional:
///
/// ```rust
/// use std::time::Duration;
/// use wayfinder::RouterConfig;
///
/// let config = RouterConfig::from_json(r#"{ "loader_timeout_ms": 5000 }"#).unwrap();
/// assert_eq!(config.loader_timeout(), Some(Duration::from_secs(5)));
/// assert_eq!(config.base_path, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Loaders still pending after this many milliseconds settle with
    /// [`LoaderError::Timeout`](crate::LoaderError::Timeout). Needs a
    /// [`Timer`](crate::Timer) on the router to take effect.
    pub loader_timeout_ms: Option<u64>,
    /// Prefix the app is mounted under, removed before matching.
    pub base_path: String,
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn loader_timeout(&self) -> Option<Duration> {
        self.loader_timeout_ms.map(Duration::from_millis)
    }

    pub fn with_loader_timeout(mut self, timeout: Duration) -> Self {
        self.loader_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// `path` relative to [`base_path`](Self::base_path). Paths outside
    /// the base are returned unchanged and will usually hit the fallback.
    pub fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => path,
        }
    }
}
