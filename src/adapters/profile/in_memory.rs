//! In-memory profile source
//!
//! Holds raw records in a map keyed by user. Handy for tests and for
//! embedding callers that already have the data in hand.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::travel::RawProfile;
use crate::ports::ProfileSource;

/// Writes replace whole records, so a poisoned lock is recovered.
#[derive(Debug, Default)]
pub struct InMemoryProfileSource {
    profiles: RwLock<HashMap<UserId, RawProfile>>,
}

impl InMemoryProfileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the record for a user.
    pub fn insert(&self, user_id: UserId, profile: RawProfile) {
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id, profile);
    }

    /// Builder-style [`InMemoryProfileSource::insert`] for fixtures.
    pub fn with_profile(mut self, user_id: UserId, profile: RawProfile) -> Self {
        self.profiles
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id, profile);
        self
    }

    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileSource for InMemoryProfileSource {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<RawProfile>, DomainError> {
        let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
        Ok(profiles.get(user_id).cloned())
    }
}
