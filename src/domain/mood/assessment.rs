//! Mood assessment record produced by classifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Primary state reported when no rule recognizes the input.
pub const GENERAL_STATE: &str = "General";

/// How strictly the daily budget should be adhered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BudgetSensitivity {
    Strict,
    Flexible,
    #[default]
    Normal,
    #[serde(rename = "High-End")]
    HighEnd,
}

impl BudgetSensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Flexible => "Flexible",
            Self::Normal => "Normal",
            Self::HighEnd => "High-End",
        }
    }
}

impl fmt::Display for BudgetSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetSensitivity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "flexible" => Ok(Self::Flexible),
            "normal" => Ok(Self::Normal),
            "high-end" | "high_end" | "highend" => Ok(Self::HighEnd),
            other => Err(ValidationError::invalid_format(
                "budget_sensitivity",
                format!("unknown sensitivity '{}'", other),
            )),
        }
    }
}

/// Structured emotional context derived from user text.
///
/// Every field is always populated; classifiers fall back to
/// [`MoodAssessment::general`] rather than returning partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAssessment {
    /// Dominant emotional state or trip goal
    pub primary_state: String,
    /// Non-negotiable keywords for activity filtering
    pub mandatory_constraints: Vec<String>,
    /// How strictly the budget should be adhered to
    pub budget_sensitivity: BudgetSensitivity,
}

impl MoodAssessment {
    pub fn new<I, S>(
        primary_state: impl Into<String>,
        mandatory_constraints: I,
        budget_sensitivity: BudgetSensitivity,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primary_state: primary_state.into(),
            mandatory_constraints: mandatory_constraints.into_iter().map(Into::into).collect(),
            budget_sensitivity,
        }
    }

    /// The neutral assessment: "General", no constraints, "Normal" budget.
    pub fn general() -> Self {
        Self {
            primary_state: GENERAL_STATE.to_string(),
            mandatory_constraints: Vec::new(),
            budget_sensitivity: BudgetSensitivity::Normal,
        }
    }

    /// Rejects a blank primary state or blank constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.primary_state.trim().is_empty() {
            return Err(ValidationError::empty_field("primary_state"));
        }
        if self.mandatory_constraints.iter().any(|c| c.trim().is_empty()) {
            return Err(ValidationError::empty_field("mandatory_constraints"));
        }
        Ok(())
    }
}

impl Default for MoodAssessment {
    fn default() -> Self {
        Self::general()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_assessment_is_neutral() {
        let general = MoodAssessment::general();
        assert_eq!(general.primary_state, "General");
        assert!(general.mandatory_constraints.is_empty());
        assert_eq!(general.budget_sensitivity, BudgetSensitivity::Normal);
        assert_eq!(MoodAssessment::default(), general);
    }

    #[test]
    fn budget_sensitivity_serializes_with_labels() {
        assert_eq!(
            serde_json::to_string(&BudgetSensitivity::HighEnd).unwrap(),
            "\"High-End\""
        );
        assert_eq!(
            serde_json::from_str::<BudgetSensitivity>("\"Flexible\"").unwrap(),
            BudgetSensitivity::Flexible
        );
    }

    #[test]
    fn budget_sensitivity_parses_case_insensitively() {
        assert_eq!("strict".parse::<BudgetSensitivity>().unwrap(), BudgetSensitivity::Strict);
        assert_eq!("High-End".parse::<BudgetSensitivity>().unwrap(), BudgetSensitivity::HighEnd);
        assert!("lavish".parse::<BudgetSensitivity>().is_err());
    }

    #[test]
    fn budget_sensitivity_display_matches_serde() {
        for s in [
            BudgetSensitivity::Strict,
            BudgetSensitivity::Flexible,
            BudgetSensitivity::Normal,
            BudgetSensitivity::HighEnd,
        ] {
            assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s));
        }
    }

    #[test]
    fn assessment_serializes_all_fields() {
        let a = MoodAssessment::new(
            "Stress Relief",
            ["Quiet", "Nature"],
            BudgetSensitivity::Flexible,
        );
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::json!({
                "primary_state": "Stress Relief",
                "mandatory_constraints": ["Quiet", "Nature"],
                "budget_sensitivity": "Flexible"
            })
        );
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert!(MoodAssessment::new(" ", Vec::<String>::new(), BudgetSensitivity::Normal)
            .validate()
            .is_err());
        assert!(MoodAssessment::new("Calm", [""], BudgetSensitivity::Normal)
            .validate()
            .is_err());
        assert!(MoodAssessment::general().validate().is_ok());
    }
}
