//! ReadUserProfile - Query handler for retrieving a normalized profile.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::travel::{ProfileNormalizer, UserProfile};
use crate::ports::ProfileSource;

/// Query to read a user's travel profile.
#[derive(Debug, Clone)]
pub struct ReadUserProfileQuery {
    pub user_id: UserId,
}

/// Outcome marker of a tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
}

/// Tool-call envelope returned to the agent layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileToolResult {
    pub status: ToolStatus,
    pub profile_data: UserProfile,
}

/// Handler that fetches raw profile data and normalizes it.
pub struct ReadUserProfileHandler {
    source: Arc<dyn ProfileSource>,
    normalizer: ProfileNormalizer,
}

impl ReadUserProfileHandler {
    pub fn new(source: Arc<dyn ProfileSource>, normalizer: ProfileNormalizer) -> Self {
        Self { source, normalizer }
    }

    pub async fn handle(
        &self,
        query: ReadUserProfileQuery,
    ) -> Result<ProfileToolResult, DomainError> {
        // 1. Fetch the raw record
        let raw = self.source.fetch(&query.user_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, "Profile not found")
                .with_detail("user_id", query.user_id.as_str())
        })?;

        // 2. Normalize into the strict-schema shape
        let profile = self.normalizer.normalize(raw).map_err(|e| {
            tracing::warn!(user_id = %query.user_id, "Rejected raw profile: {}", e);
            DomainError::from(e).with_detail("user_id", query.user_id.as_str())
        })?;

        tracing::info!(
            user_id = %query.user_id,
            preferences = profile.preferences().len(),
            "Profile normalized"
        );

        Ok(ProfileToolResult {
            status: ToolStatus::Success,
            profile_data: profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::travel::{PreferenceMap, RawProfile};
    use async_trait::async_trait;

    struct MockProfileSource {
        profile: Option<RawProfile>,
        should_fail: bool,
    }

    #[async_trait]
    impl ProfileSource for MockProfileSource {
        async fn fetch(&self, _user_id: &UserId) -> Result<Option<RawProfile>, DomainError> {
            if self.should_fail {
                return Err(DomainError::new(
                    ErrorCode::ProfileSourceUnavailable,
                    "Simulated store failure",
                ));
            }
            Ok(self.profile.clone())
        }
    }

    fn handler(profile: Option<RawProfile>, should_fail: bool) -> ReadUserProfileHandler {
        ReadUserProfileHandler::new(
            Arc::new(MockProfileSource {
                profile,
                should_fail,
            }),
            ProfileNormalizer::default(),
        )
    }

    fn query() -> ReadUserProfileQuery {
        ReadUserProfileQuery {
            user_id: UserId::new("test@example.com").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_read_profile_success_envelope() {
        let raw = RawProfile::new(PreferenceMap::new().with("Nature", 0.9), 250.0);
        let result = handler(Some(raw), false).handle(query()).await.unwrap();

        assert_eq!(result.status, ToolStatus::Success);
        assert_eq!(result.profile_data.preferred_transport_mode(), "Walk");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["profile_data"]["preference_vector"][0]["key"], "Nature");
    }

    #[tokio::test]
    async fn test_read_profile_not_found() {
        let err = handler(None, false).handle(query()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
        assert_eq!(
            err.details.get("user_id"),
            Some(&"test@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_read_profile_invalid_data() {
        let raw = RawProfile::new(PreferenceMap::new().with("Nature", 3.0), 250.0);
        let err = handler(Some(raw), false).handle(query()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.details.get("field"),
            Some(&"preference_vector.Nature".to_string())
        );
    }

    #[tokio::test]
    async fn test_read_profile_source_failure_propagates() {
        let err = handler(None, true).handle(query()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileSourceUnavailable);
    }
}
