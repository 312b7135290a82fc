//! ProfileNormalizer - raw preference data to a strict-schema profile.
//!
//! Pure domain service. Raw data is fetched elsewhere (see
//! `ports::ProfileSource`); this type never performs I/O.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::preference::PREFERENCE_FIELD;
use super::profile::{validate_budget, RawProfile, UserProfile, DEFAULT_TRANSPORT_MODE};

/// Default values substituted for optional raw fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerDefaults {
    pub transport_mode: String,
}

impl Default for NormalizerDefaults {
    fn default() -> Self {
        Self {
            transport_mode: DEFAULT_TRANSPORT_MODE.to_string(),
        }
    }
}

/// Converts [`RawProfile`] records into validated [`UserProfile`]s.
#[derive(Debug, Clone, Default)]
pub struct ProfileNormalizer {
    defaults: NormalizerDefaults,
}

impl ProfileNormalizer {
    pub fn new(defaults: NormalizerDefaults) -> Self {
        Self { defaults }
    }

    /// Normalizes a raw profile.
    ///
    /// # Steps
    /// 1. Require the preference map and the budget
    /// 2. Convert the map into records in enumeration order
    /// 3. Check the budget
    /// 4. Substitute the default transport mode when none is given
    /// 5. Re-validate the assembled profile
    ///
    /// Normalizing `profile.to_raw()` for any profile this returns yields an
    /// equal profile.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a missing required field, a weight
    /// outside [0, 1], a blank or repeated category, or a negative budget.
    pub fn normalize(&self, raw: RawProfile) -> Result<UserProfile, ValidationError> {
        let preference_map = raw
            .preference_vector
            .ok_or_else(|| ValidationError::missing_field(PREFERENCE_FIELD))?;
        let max_daily_budget = raw
            .max_daily_budget
            .ok_or_else(|| ValidationError::missing_field("max_daily_budget"))?;

        let preferences = preference_map.to_records()?;
        validate_budget(max_daily_budget)?;

        let transport_mode = raw
            .preferred_transport_mode
            .filter(|mode| !mode.trim().is_empty())
            .unwrap_or_else(|| self.defaults.transport_mode.clone());

        UserProfile::new(preferences, max_daily_budget, transport_mode)
    }
}
