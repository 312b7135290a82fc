//! Mood classifier adapters

mod keyword_classifier;

pub use keyword_classifier::KeywordMoodClassifier;
