//! Built-in default profile source

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::travel::{PreferenceMap, RawProfile};
use crate::ports::ProfileSource;

/// Serves one fixed profile record for every user.
///
/// Used until a real user-data store is wired in, and as the source behind
/// the demo binary.
#[derive(Debug, Clone)]
pub struct DefaultProfileSource {
    profile: RawProfile,
}

impl DefaultProfileSource {
    /// Source serving the built-in default record.
    pub fn new() -> Self {
        Self {
            profile: Self::default_profile(),
        }
    }

    /// Source serving `profile` instead of the built-in record.
    pub fn with_profile(profile: RawProfile) -> Self {
        Self { profile }
    }

    /// Nature-leaning traveller on a mid-range budget using public transport.
    pub fn default_profile() -> RawProfile {
        RawProfile::new(
            PreferenceMap::new()
                .with("Nature", 0.9)
                .with("Culture/History", 0.7)
                .with("Nightlife", 0.2),
            250.0,
        )
        .with_transport_mode("Public Transport")
    }
}

impl Default for DefaultProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileSource for DefaultProfileSource {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<RawProfile>, DomainError> {
        tracing::debug!(user_id = %user_id, "Serving default profile");
        Ok(Some(self.profile.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_same_record_for_any_user() {
        let source = DefaultProfileSource::new();
        let a = source.fetch(&UserId::new("a").unwrap()).await.unwrap();
        let b = source.fetch(&UserId::new("b").unwrap()).await.unwrap();
        assert_eq!(a, b);

        let raw = a.unwrap();
        assert_eq!(raw.max_daily_budget, Some(250.0));
        assert_eq!(raw.preferred_transport_mode.as_deref(), Some("Public Transport"));
        let map = raw.preference_vector.unwrap();
        assert_eq!(map.get("Nature"), Some(0.9));
        assert_eq!(map.get("Culture/History"), Some(0.7));
        assert_eq!(map.get("Nightlife"), Some(0.2));
    }

    #[tokio::test]
    async fn with_profile_overrides_record() {
        let custom = RawProfile::new(PreferenceMap::new().with("Beaches", 1.0), 80.0);
        let source = DefaultProfileSource::with_profile(custom.clone());
        let fetched = source.fetch(&UserId::new("x").unwrap()).await.unwrap();
        assert_eq!(fetched, Some(custom));
    }
}
