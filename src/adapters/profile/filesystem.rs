//! Filesystem profile source reading YAML or JSON records

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::travel::RawProfile;
use crate::ports::ProfileSource;

/// Filesystem-based profile source
///
/// Reads raw profile records from a configurable base directory organized
/// by user ID: `{base_dir}/profiles/{user_id}.yaml`, falling back to
/// `{base_dir}/profiles/{user_id}.json`.
pub struct FsProfileSource {
    base_dir: PathBuf,
}

enum RecordFormat {
    Yaml,
    Json,
}

impl FsProfileSource {
    /// Create new filesystem source with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the per-user record files
    pub fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    /// Candidate record paths for a user, in lookup order
    fn candidate_paths(
        &self,
        user_id: &UserId,
    ) -> Result<[(PathBuf, RecordFormat); 2], DomainError> {
        let id = user_id.as_str();
        if id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(DomainError::validation(
                "user_id",
                format!("User id '{}' cannot be used as a file name", id),
            ));
        }

        let dir = self.profiles_dir();
        Ok([
            (dir.join(format!("{}.yaml", id)), RecordFormat::Yaml),
            (dir.join(format!("{}.json", id)), RecordFormat::Json),
        ])
    }

    /// Parses a record file.
    ///
    /// A file that is not valid YAML/JSON is a source failure. A well-formed
    /// document whose fields have the wrong shape is a validation failure.
    fn parse(
        path: &Path,
        format: &RecordFormat,
        content: &str,
    ) -> Result<RawProfile, DomainError> {
        match format {
            RecordFormat::Yaml => {
                let document: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| unreadable(path, e))?;
                serde_yaml::from_value(document).map_err(|e| invalid_record(path, e))
            }
            RecordFormat::Json => serde_json::from_str(content).map_err(|e| match e.classify() {
                serde_json::error::Category::Data => invalid_record(path, e),
                _ => unreadable(path, e),
            }),
        }
    }
}

fn unreadable(path: &Path, reason: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::ProfileSourceUnavailable,
        format!("Failed to parse profile file {}: {}", path.display(), reason),
    )
}

fn invalid_record(path: &Path, reason: impl std::fmt::Display) -> DomainError {
    DomainError::validation(
        "profile",
        format!("Invalid profile record in {}: {}", path.display(), reason),
    )
}

#[async_trait]
impl ProfileSource for FsProfileSource {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<RawProfile>, DomainError> {
        for (path, format) in self.candidate_paths(user_id)? {
            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    tracing::error!(path = %path.display(), "Failed to read profile file: {}", e);
                    return Err(DomainError::new(
                        ErrorCode::ProfileSourceUnavailable,
                        format!("Failed to read profile file {}: {}", path.display(), e),
                    ));
                }
            };

            tracing::debug!(user_id = %user_id, path = %path.display(), "Loaded profile file");
            return Self::parse(&path, &format, &content).map(Some);
        }

        tracing::debug!(user_id = %user_id, "No profile file found");
        Ok(None)
    }
}
