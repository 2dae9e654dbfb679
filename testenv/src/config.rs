//! Application construction options.
//!
//! A typed structure instead of a generic key-value map: the two options
//! the application recognizes are enumerated here with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options consumed by the application factory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Node home directory. Accepted for interface compatibility; the
    /// in-memory application writes no persistent artifact there.
    pub home: PathBuf,

    /// Whether to emit full stack traces on application errors.
    pub trace: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home: std::env::temp_dir().join("helix-testenv"),
            trace: false,
        }
    }
}

impl AppConfig {
    /// Config with an explicit home directory and tracing enabled, the
    /// shape the original option map carried.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            trace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_trace_off() {
        let config = AppConfig::default();
        assert!(!config.trace);
        assert!(config.home.ends_with("helix-testenv"));
    }

    #[test]
    fn with_home_enables_trace() {
        let config = AppConfig::with_home("/tmp/custom");
        assert!(config.trace);
        assert_eq!(config.home, PathBuf::from("/tmp/custom"));
    }
}
