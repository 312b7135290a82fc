//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mood` - Mood classifiers (keyword rules)
//! - `profile` - Raw profile sources (built-in default, in-memory, filesystem)

pub mod mood;
pub mod profile;

pub use mood::KeywordMoodClassifier;
pub use profile::{DefaultProfileSource, FsProfileSource, InMemoryProfileSource};
