//! Unclassified caller input

use serde::{Deserialize, Serialize};

/// A value as supplied by a caller, before inference.
///
/// Mirrors the shapes a JSON body can carry so that front ends can hand
/// anything they decoded to the engine and let inference reject it.
/// Composites only record their element count: they are never storable,
/// and a flat type keeps decoding of untrusted frames at a fixed depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Input {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    /// A JSON array of the given length
    List(usize),
    /// A JSON object with the given number of fields
    Map(usize),
}

impl Input {
    /// Parse a command-line literal.
    ///
    /// JSON literals are decoded as JSON (`42`, `4.0`, `"quoted"`, `true`);
    /// anything that is not valid JSON is taken verbatim as a string.
    pub fn parse_literal(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(json) => Input::from(json),
            Err(_) => Input::String(raw.to_string()),
        }
    }
}

impl From<serde_json::Value> for Input {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Input::Null,
            Json::Bool(b) => Input::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Input::Integer(i),
                // u64 beyond i64::MAX and true floats both land here
                None => Input::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Input::String(s),
            Json::Array(items) => Input::List(items.len()),
            Json::Object(fields) => Input::Map(fields.len()),
        }
    }
}

impl From<i64> for Input {
    fn from(n: i64) -> Self {
        Input::Integer(n)
    }
}

impl From<i32> for Input {
    fn from(n: i32) -> Self {
        Input::Integer(i64::from(n))
    }
}

impl From<f64> for Input {
    fn from(f: f64) -> Self {
        Input::Float(f)
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::String(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::String(s)
    }
}
