//! Mood classifier configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Mood classifier configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierConfig {
    /// YAML rule table replacing the built-in rules
    pub rules_path: Option<PathBuf>,
}
