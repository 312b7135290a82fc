//! AnalyzeEmotion - Command handler classifying the traveller's mood.

use std::sync::Arc;

use crate::domain::mood::MoodAssessment;
use crate::ports::MoodClassifier;

/// Command carrying the user's own words.
#[derive(Debug, Clone)]
pub struct AnalyzeEmotionCommand {
    pub user_input: String,
}

/// Handler for mood classification.
///
/// Infallible: classifiers always produce an assessment.
pub struct AnalyzeEmotionHandler {
    classifier: Arc<dyn MoodClassifier>,
}

impl AnalyzeEmotionHandler {
    pub fn new(classifier: Arc<dyn MoodClassifier>) -> Self {
        Self { classifier }
    }

    pub fn handle(&self, cmd: AnalyzeEmotionCommand) -> MoodAssessment {
        let assessment = self.classifier.classify(&cmd.user_input);
        tracing::info!(
            state = %assessment.primary_state,
            budget = %assessment.budget_sensitivity,
            constraints = assessment.mandatory_constraints.len(),
            "Emotional context classified"
        );
        assessment
    }
}
