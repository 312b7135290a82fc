//! MoodClassifier port - free text to a structured mood assessment

use crate::domain::mood::MoodAssessment;

/// Capability that turns user text into a [`MoodAssessment`].
///
/// Implementations are total: every input, including the empty string,
/// yields a fully-populated assessment. Unrecognized text maps to a neutral
/// fallback instead of an error, since planning must always proceed with
/// some emotional context.
pub trait MoodClassifier: Send + Sync {
    /// Classify `text`.
    fn classify(&self, text: &str) -> MoodAssessment;
}
