//! Snapshot document
//!
//! Serde model of the on-disk JSON and its conversion to and from `Tables`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DuoError, Result};
use crate::memtable::{ListTable, ScalarTable, Tables};
use crate::value::{Kind, Value};

/// A list element or scalar payload as it appears in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    String(String),
}

impl From<&Value> for Element {
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(n) => Element::Integer(*n),
            Value::String(s) => Element::String(s.clone()),
        }
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        match element {
            Element::Integer(n) => Value::Integer(n),
            Element::String(s) => Value::String(s),
        }
    }
}

/// A tagged scalar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRecord {
    pub val: Element,
    pub kind: Kind,
}

impl ScalarRecord {
    /// Convert back to a value, checking the tag against the payload
    fn into_value(self, key: &str) -> Result<Value> {
        let value = Value::from(self.val);
        if value.kind() != self.kind {
            return Err(DuoError::Serialization(format!(
                "scalar {}: tagged {} but holds a {} value",
                key,
                self.kind,
                value.kind()
            )));
        }
        Ok(value)
    }
}

/// The whole persisted state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub scalars: BTreeMap<String, ScalarRecord>,

    #[serde(default)]
    pub lists: BTreeMap<String, Vec<Element>>,
}

impl SnapshotDocument {
    /// Structural copy of both tables
    pub fn capture(tables: &Tables) -> Self {
        let scalars = tables
            .scalars
            .iter()
            .map(|(key, value)| {
                let record = ScalarRecord {
                    val: Element::from(value),
                    kind: value.kind(),
                };
                (key.clone(), record)
            })
            .collect();

        let lists = tables
            .lists
            .iter()
            .map(|(key, list)| (key.clone(), list.iter().map(Element::from).collect()))
            .collect();

        Self { scalars, lists }
    }

    /// Rebuild fresh tables from the document
    pub fn into_tables(self) -> Result<Tables> {
        let scalars = self
            .scalars
            .into_iter()
            .map(|(key, record)| {
                let value = record.into_value(&key)?;
                Ok((key, value))
            })
            .collect::<Result<ScalarTable>>()?;

        let lists: ListTable = self
            .lists
            .into_iter()
            .map(|(key, elements)| (key, elements.into_iter().map(Value::from).collect()))
            .collect();

        Ok(Tables { scalars, lists })
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

