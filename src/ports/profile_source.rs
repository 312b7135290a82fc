//! ProfileSource port for retrieving raw profile data

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::travel::RawProfile;

/// Retrieval of unvalidated profile records.
///
/// Sources do not validate: whatever they return goes through
/// `ProfileNormalizer` before anything else sees it.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the raw profile for a user
    ///
    /// Returns `Ok(None)` when the source has no record for the user and
    /// `Err` when the source itself could not be read.
    async fn fetch(&self, user_id: &UserId) -> Result<Option<RawProfile>, DomainError>;
}
