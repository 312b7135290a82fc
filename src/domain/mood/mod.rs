//! Mood module - emotional context for trip planning
//!
//! A [`MoodAssessment`] translates how the traveller feels into planning
//! constraints. The keyword [`MoodRuleSet`] is the deterministic way of
//! producing one; classifiers sit behind `ports::MoodClassifier` so a
//! model-backed implementation can replace it.

pub mod assessment;
pub mod rules;

pub use assessment::{BudgetSensitivity, MoodAssessment, GENERAL_STATE};
pub use rules::{MoodRule, MoodRuleSet, RuleMatch};
