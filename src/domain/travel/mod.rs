//! Travel module - user travel preferences.
//!
//! A user's preferences arrive as a loosely-typed record (a category to score
//! mapping plus a budget and a transport mode) and leave as a validated
//! [`UserProfile`] whose preferences are explicit `{key, value}` records.
//!
//! # Domain Invariants
//!
//! 1. Every preference weight lies in [0.0, 1.0]
//! 2. Categories are non-blank and appear at most once
//! 3. The daily budget is finite and non-negative
//! 4. The transport mode is always set ("Walk" when unspecified)
//! 5. Normalizing an already-normalized profile changes nothing

pub mod normalizer;
pub mod preference;
pub mod profile;

pub use normalizer::{NormalizerDefaults, ProfileNormalizer};
pub use preference::{PreferenceEntry, PreferenceMap};
pub use profile::{RawProfile, UserProfile, DEFAULT_TRANSPORT_MODE};
