//! Scalar table
//!
//! Key → Value mapping. Entries are only ever replaced, never edited.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::value::{infer, Input, Kind, KindOf, Value};

/// Mapping of keys to classified scalars.
///
/// Every stored value is an `Integer` or a `String`; `Undefined` input is
/// rejected before the map is touched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScalarTable {
    entries: BTreeMap<String, Value>,
}

impl ScalarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Infer a value from `input` and store it under `key`.
    ///
    /// On a type error the table is left exactly as it was, including any
    /// previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, input: Input) -> Result<Kind> {
        let value = infer(input)?;
        let kind = value.kind();
        self.entries.insert(key.into(), value);
        Ok(kind)
    }

    /// Copy of the value under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    pub fn kind_of(&self, key: &str) -> KindOf {
        match self.entries.get(key) {
            Some(value) => KindOf::Kind(value.kind()),
            None => KindOf::No,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for ScalarTable {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
