//! Preference records and the map-shaped form they are derived from.
//!
//! Strict-schema consumers cannot describe an object with arbitrary keys, so
//! a user's `category -> score` mapping is carried as an ordered list of
//! explicit `{key, value}` records. [`PreferenceMap`] keeps the map shape for
//! callers that still want lookups, and converts both ways.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::{UnitWeight, ValidationError};

/// Field name used when reporting problems with the preference list.
pub const PREFERENCE_FIELD: &str = "preference_vector";

/// One preference category and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntryDefinition", into = "EntryDefinition")]
pub struct PreferenceEntry {
    /// The preference category name
    category: String,
    /// The preference score (0.0 to 1.0)
    weight: UnitWeight,
}

impl PreferenceEntry {
    /// Creates an entry, validating the category and the weight range.
    pub fn new(category: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        let weight =
            UnitWeight::try_new_for(format!("{}.{}", PREFERENCE_FIELD, category), weight)?;
        Ok(Self { category, weight })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn weight(&self) -> UnitWeight {
        self.weight
    }

    /// Re-checks the entry against the rules of [`PreferenceEntry::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::new(self.category.clone(), self.weight.value()).map(|_| ())
    }
}

/// Wire form of an entry: `{"key": ..., "value": ...}`.
#[derive(Serialize, Deserialize)]
struct EntryDefinition {
    key: String,
    value: f64,
}

impl TryFrom<EntryDefinition> for PreferenceEntry {
    type Error = ValidationError;

    fn try_from(def: EntryDefinition) -> Result<Self, Self::Error> {
        PreferenceEntry::new(def.key, def.value)
    }
}

impl From<PreferenceEntry> for EntryDefinition {
    fn from(entry: PreferenceEntry) -> Self {
        Self {
            key: entry.category,
            value: entry.weight.value(),
        }
    }
}

/// Insertion-ordered `category -> score` mapping.
///
/// Unlike a hash map this keeps document order and keeps repeated keys, so
/// that conversion to records is reproducible and duplicates can be rejected
/// instead of silently overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceMap {
    pairs: Vec<(String, f64)>,
}

impl PreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair, keeping any earlier pair with the same category.
    pub fn push(&mut self, category: impl Into<String>, weight: f64) {
        self.pairs.push((category.into(), weight));
    }

    /// Builder-style [`PreferenceMap::push`].
    pub fn with(mut self, category: impl Into<String>, weight: f64) -> Self {
        self.push(category, weight);
        self
    }

    /// Score of the first pair for `category`.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.pairs
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, weight)| *weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.pairs.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Converts the mapping into validated records, in enumeration order.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank category
    /// - `OutOfRange` for a score outside [0, 1]
    /// - `DuplicateEntry` when a category appears twice
    pub fn to_records(&self) -> Result<Vec<PreferenceEntry>, ValidationError> {
        let mut seen = HashSet::with_capacity(self.pairs.len());
        let mut records = Vec::with_capacity(self.pairs.len());

        for (category, weight) in &self.pairs {
            if !seen.insert(category.as_str()) {
                return Err(ValidationError::duplicate_entry(
                    PREFERENCE_FIELD,
                    category.clone(),
                ));
            }
            records.push(PreferenceEntry::new(category.clone(), *weight)?);
        }

        Ok(records)
    }

    /// Builds the map shape back from records.
    pub fn from_records(records: &[PreferenceEntry]) -> Self {
        records
            .iter()
            .map(|entry| (entry.category.clone(), entry.weight.value()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PreferenceMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for PreferenceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (category, weight) in &self.pairs {
            map.serialize_entry(category, weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PreferenceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PreferenceMapVisitor;

        impl<'de> Visitor<'de> for PreferenceMapVisitor {
            type Value = PreferenceMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of preference category to numeric score")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, weight)) = access.next_entry::<String, f64>()? {
                    pairs.push((category, weight));
                }
                Ok(PreferenceMap { pairs })
            }
        }

        deserializer.deserialize_map(PreferenceMapVisitor)
    }
}
