//! Shortcut Configuration
//!
//! Names of the marker id and classes the host page uses, plus the two fixed
//! routes. Key bindings themselves are not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Profile;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document structure the dispatcher reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Id of the element focused on page load
    pub autofocus_id: String,
    /// Class whose presence enables digit shortcuts
    pub listing_class: String,
    /// Class of the elements wrapping heading links
    pub container_class: String,
    /// Class of the heading links themselves
    pub heading_class: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            autofocus_id: "takefocus".to_string(),
            listing_class: "torrentheadings".to_string(),
            container_class: "torrents".to_string(),
            heading_class: "torrentheading".to_string(),
        }
    }
}

/// Fixed navigation targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub add: String,
    pub home: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            add: "/add".to_string(),
            home: "/".to_string(),
        }
    }
}

/// Full dispatcher configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub profile: Profile,
    pub layout: PageLayout,
    pub routes: Routes,
}

impl ShortcutConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded shortcut config");
        Self::from_json_str(&json)
    }
}
