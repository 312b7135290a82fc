//! Rule-based MoodClassifier implementation

use crate::domain::mood::{MoodAssessment, MoodRuleSet};
use crate::ports::MoodClassifier;

/// Classifies text by case-insensitive keyword matching.
///
/// Stand-in for a model-backed classifier: the first rule in `rules` with a
/// trigger present in the text decides the assessment, and text no rule
/// recognizes gets the fallback.
#[derive(Debug, Clone)]
pub struct KeywordMoodClassifier {
    rules: MoodRuleSet,
    fallback: MoodAssessment,
}

impl KeywordMoodClassifier {
    pub fn new(rules: MoodRuleSet) -> Self {
        Self {
            rules,
            fallback: MoodAssessment::general(),
        }
    }

    /// Classifier over [`MoodRuleSet::builtin`].
    pub fn builtin() -> Self {
        Self::new(MoodRuleSet::builtin())
    }

    /// Replaces the assessment returned when no rule matches.
    pub fn with_fallback(mut self, fallback: MoodAssessment) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for KeywordMoodClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MoodClassifier for KeywordMoodClassifier {
    fn classify(&self, text: &str) -> MoodAssessment {
        match self.rules.evaluate(text) {
            Some(m) => {
                tracing::debug!(
                    rule = m.index,
                    trigger = m.trigger,
                    state = %m.rule.assessment().primary_state,
                    "Mood rule matched"
                );
                m.rule.assessment().clone()
            }
            None => {
                tracing::debug!("No mood rule matched, using fallback");
                self.fallback.clone()
            }
        }
    }
}
