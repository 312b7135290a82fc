//! Ordered keyword rules mapping user text to mood assessments.
//!
//! A rule fires when at least one of its trigger substrings occurs in the
//! lower-cased input. Rules are evaluated in declaration order and the first
//! match wins, so new rules are appended and never change the outcome for
//! input an earlier rule already recognizes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::assessment::{BudgetSensitivity, MoodAssessment};

/// A set of trigger substrings and the assessment they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleDefinition", into = "RuleDefinition")]
pub struct MoodRule {
    triggers: Vec<String>,
    assessment: MoodAssessment,
}

impl MoodRule {
    /// Creates a rule; triggers are trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Fails when there are no triggers, a trigger is blank, or the
    /// assessment has a blank state or constraint.
    pub fn new<I, S>(triggers: I, assessment: MoodAssessment) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let triggers: Vec<String> = triggers
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .collect();

        if triggers.is_empty() {
            return Err(ValidationError::empty_field("triggers"));
        }
        if triggers.iter().any(|t| t.is_empty()) {
            return Err(ValidationError::invalid_format(
                "triggers",
                "trigger substrings cannot be blank",
            ));
        }
        assessment.validate()?;

        Ok(Self {
            triggers,
            assessment,
        })
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn assessment(&self) -> &MoodAssessment {
        &self.assessment
    }

    /// First trigger found in `lowered`, which must already be lower-cased.
    pub fn matched_trigger(&self, lowered: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| lowered.contains(t.as_str()))
            .map(String::as_str)
    }
}

/// Serialized form of a rule: trigger list plus the flattened assessment.
#[derive(Serialize, Deserialize)]
struct RuleDefinition {
    triggers: Vec<String>,
    #[serde(flatten)]
    assessment: MoodAssessment,
}

impl TryFrom<RuleDefinition> for MoodRule {
    type Error = ValidationError;

    fn try_from(def: RuleDefinition) -> Result<Self, Self::Error> {
        MoodRule::new(def.triggers, def.assessment)
    }
}

impl From<MoodRule> for RuleDefinition {
    fn from(rule: MoodRule) -> Self {
        Self {
            triggers: rule.triggers,
            assessment: rule.assessment,
        }
    }
}

/// Result of evaluating a rule set against some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Position of the rule in its set
    pub index: usize,
    /// The trigger that fired
    pub trigger: &'a str,
    pub rule: &'a MoodRule,
}

/// Append-only, ordered list of mood rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodRuleSet {
    rules: Vec<MoodRule>,
}

impl MoodRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule after every existing rule.
    pub fn push(&mut self, rule: MoodRule) {
        self.rules.push(rule);
    }

    /// Builder-style [`MoodRuleSet::push`].
    pub fn with_rule(mut self, rule: MoodRule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules(&self) -> &[MoodRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finds the first rule with a trigger present in `text`, ignoring case.
    pub fn evaluate(&self, text: &str) -> Option<RuleMatch<'_>> {
        let lowered = text.to_lowercase();
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.matched_trigger(&lowered).map(|trigger| RuleMatch {
                index,
                trigger,
                rule,
            })
        })
    }

    /// Parses a rule table from YAML (a sequence of rule definitions).
    ///
    /// ```
    /// use trip_context::domain::mood::MoodRuleSet;
    ///
    /// let rules = MoodRuleSet::from_yaml_str(r#"
    /// - triggers: [beach, sun]
    ///   primary_state: Leisure
    ///   mandatory_constraints: [Coastal]
    ///   budget_sensitivity: Normal
    /// "#).unwrap();
    /// assert_eq!(rules.len(), 1);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("mood_rules", e.to_string()))
    }

    /// The built-in rule table.
    ///
    /// Order matters: stress and relaxation are checked first so that a
    /// stressed traveller who also mentions a birthday is still steered
    /// towards quiet activities.
    pub fn builtin() -> Self {
        let table: [(&[&str], &str, &[&str], BudgetSensitivity); 5] = [
            (
                &[
                    "stress",
                    "relax",
                    "burnout",
                    "burned out",
                    "exhausted",
                    "unwind",
                    "overwhelmed",
                ],
                "Stress Relief",
                &["Quiet", "Low-Energy", "Nature", "Comfort"],
                BudgetSensitivity::Flexible,
            ),
            (
                &[
                    "celebrate",
                    "celebration",
                    "anniversary",
                    "honeymoon",
                    "birthday",
                    "special occasion",
                ],
                "Celebration",
                &["Memorable", "Fine Dining", "Scenic"],
                BudgetSensitivity::HighEnd,
            ),
            (
                &["adventure", "thrill", "adrenaline", "hiking", "hike", "outdoors"],
                "Adventurous",
                &["Active", "Outdoor"],
                BudgetSensitivity::Normal,
            ),
            (
                &["museum", "history", "historic", "heritage", "culture"],
                "Intellectual",
                &["Museums", "Historic Sites", "Guided"],
                BudgetSensitivity::Normal,
            ),
            (
                &[
                    "cheap",
                    "tight budget",
                    "on a budget",
                    "save money",
                    "affordable",
                    "i'm broke",
                ],
                "Budget Conscious",
                &["Free Entry", "Public Transport"],
                BudgetSensitivity::Strict,
            ),
        ];

        table
            .iter()
            .map(|(triggers, state, constraints, budget)| MoodRule {
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
                assessment: MoodAssessment::new(*state, constraints.iter().copied(), *budget),
            })
            .fold(Self::new(), Self::with_rule)
    }
}
