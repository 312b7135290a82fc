//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileSource` - Where raw profile records come from (store, request, mock)
//! - `MoodClassifier` - Text to mood capability (keyword rules today, a model later)

mod mood_classifier;
mod profile_source;

pub use mood_classifier::MoodClassifier;
pub use profile_source::ProfileSource;
