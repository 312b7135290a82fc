//! Travel profile types: the unvalidated raw record and the validated profile.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::preference::{PreferenceEntry, PreferenceMap, PREFERENCE_FIELD};

/// Transport mode assumed when the raw record does not name one.
pub const DEFAULT_TRANSPORT_MODE: &str = "Walk";

/// Unvalidated profile data as received from a profile source.
///
/// Every field is optional so that missing data is reported by the
/// normalizer rather than by whatever parser produced the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_vector: Option<PreferenceMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_daily_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_transport_mode: Option<String>,
}

impl RawProfile {
    /// Creates a raw profile with both required fields present.
    pub fn new(preference_vector: PreferenceMap, max_daily_budget: f64) -> Self {
        Self {
            preference_vector: Some(preference_vector),
            max_daily_budget: Some(max_daily_budget),
            preferred_transport_mode: None,
        }
    }

    pub fn with_transport_mode(mut self, mode: impl Into<String>) -> Self {
        self.preferred_transport_mode = Some(mode.into());
        self
    }
}

/// Validated travel profile with a strict-schema preference list.
///
/// Fields are private: a `UserProfile` only comes out of the normalizer or
/// out of deserialization, both of which validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnvalidatedProfile")]
pub struct UserProfile {
    /// A list of objects, each defining a category and its preference score
    preference_vector: Vec<PreferenceEntry>,
    /// The maximum preferred budget for one full day of activities, in USD
    max_daily_budget: f64,
    /// The user's most preferred method of intra-city travel
    preferred_transport_mode: String,
}

impl UserProfile {
    /// Assembles and validates a profile.
    pub(crate) fn new(
        preference_vector: Vec<PreferenceEntry>,
        max_daily_budget: f64,
        preferred_transport_mode: String,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            preference_vector,
            max_daily_budget,
            preferred_transport_mode,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn preferences(&self) -> &[PreferenceEntry] {
        &self.preference_vector
    }

    pub fn max_daily_budget(&self) -> f64 {
        self.max_daily_budget
    }

    pub fn preferred_transport_mode(&self) -> &str {
        &self.preferred_transport_mode
    }

    /// Weight of a category, if the user has a preference for it.
    pub fn preference_for(&self, category: &str) -> Option<f64> {
        self.preference_vector
            .iter()
            .find(|entry| entry.category() == category)
            .map(|entry| entry.weight().value())
    }

    /// The preference list in map shape.
    pub fn to_map(&self) -> PreferenceMap {
        PreferenceMap::from_records(&self.preference_vector)
    }

    /// Converts back to the raw shape; normalizing the result yields `self`.
    pub fn to_raw(&self) -> RawProfile {
        RawProfile {
            preference_vector: Some(self.to_map()),
            max_daily_budget: Some(self.max_daily_budget),
            preferred_transport_mode: Some(self.preferred_transport_mode.clone()),
        }
    }

    /// Checks every profile invariant.
    ///
    /// Entries are in range with non-blank categories, categories are
    /// distinct, the budget is finite and non-negative, and the transport
    /// mode is non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.preference_vector.len());
        for entry in &self.preference_vector {
            entry.validate()?;
            if !seen.insert(entry.category()) {
                return Err(ValidationError::duplicate_entry(
                    PREFERENCE_FIELD,
                    entry.category().to_string(),
                ));
            }
        }

        validate_budget(self.max_daily_budget)?;

        if self.preferred_transport_mode.trim().is_empty() {
            return Err(ValidationError::empty_field("preferred_transport_mode"));
        }

        Ok(())
    }
}

pub(crate) fn validate_budget(budget: f64) -> Result<(), ValidationError> {
    if !budget.is_finite() {
        return Err(ValidationError::invalid_format(
            "max_daily_budget",
            "must be a finite number",
        ));
    }
    if budget < 0.0 {
        return Err(ValidationError::out_of_range(
            "max_daily_budget",
            0.0,
            f64::INFINITY,
            budget,
        ));
    }
    Ok(())
}

#[derive(Deserialize)]
struct UnvalidatedProfile {
    preference_vector: Vec<PreferenceEntry>,
    max_daily_budget: f64,
    #[serde(default = "default_transport_mode")]
    preferred_transport_mode: String,
}

fn default_transport_mode() -> String {
    DEFAULT_TRANSPORT_MODE.to_string()
}

impl TryFrom<UnvalidatedProfile> for UserProfile {
    type Error = ValidationError;

    fn try_from(raw: UnvalidatedProfile) -> Result<Self, Self::Error> {
        UserProfile::new(
            raw.preference_vector,
            raw.max_daily_budget,
            raw.preferred_transport_mode,
        )
    }
}
