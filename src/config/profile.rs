//! Profile source configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::travel::{NormalizerDefaults, DEFAULT_TRANSPORT_MODE};

use super::error::ValidationError;

/// Where raw profiles come from and how they are normalized
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Profile source kind
    #[serde(default)]
    pub source: ProfileSourceKind,

    /// Base directory for the file source
    pub data_dir: Option<PathBuf>,

    /// Transport mode used when a profile does not name one
    #[serde(default = "default_transport_mode")]
    pub default_transport_mode: String,
}

/// Profile source kind
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSourceKind {
    /// Built-in default record for every user
    #[default]
    Default,
    /// YAML/JSON records under `data_dir`
    File,
}

impl ProfileConfig {
    /// Normalizer defaults derived from this configuration
    pub fn normalizer_defaults(&self) -> NormalizerDefaults {
        NormalizerDefaults {
            transport_mode: self.default_transport_mode.clone(),
        }
    }

    /// Validate profile configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_transport_mode.trim().is_empty() {
            return Err(ValidationError::EmptyTransportMode);
        }
        if self.source == ProfileSourceKind::File && self.data_dir.is_none() {
            return Err(ValidationError::MissingRequired("PROFILE__DATA_DIR"));
        }
        Ok(())
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            source: ProfileSourceKind::default(),
            data_dir: None,
            default_transport_mode: default_transport_mode(),
        }
    }
}

fn default_transport_mode() -> String {
    DEFAULT_TRANSPORT_MODE.to_string()
}
