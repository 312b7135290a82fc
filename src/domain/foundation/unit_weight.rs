//! Unit weight value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value in the closed interval [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitWeight(f64);

impl UnitWeight {
    /// Creates a UnitWeight, returning error if out of range or NaN.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        Self::try_new_for("weight", value)
    }

    /// Same as [`UnitWeight::try_new`], reporting `field` in the error.
    pub fn try_new_for(field: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitWeight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<UnitWeight> for f64 {
    fn from(weight: UnitWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for UnitWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
