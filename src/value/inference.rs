//! Value inference and the storable value type

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Input, Kind};
use crate::error::{DuoError, Result};

/// A storable scalar. Also the element type of lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    String(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::String(_) => Kind::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Integer(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Classify input without consuming it
pub fn classify(input: &Input) -> Kind {
    match input {
        Input::Integer(_) => Kind::Integer,
        Input::Float(f) if whole_float(*f).is_some() => Kind::Integer,
        Input::String(_) => Kind::String,
        _ => Kind::Undefined,
    }
}

/// Turn caller input into a storable value.
///
/// Whole floats collapse to integers. Every other shape, including floats
/// too large for `i64`, fails with the "undefined value type" error.
pub fn infer(input: Input) -> Result<Value> {
    match input {
        Input::Integer(n) => Ok(Value::Integer(n)),
        Input::Float(f) => whole_float(f)
            .map(Value::Integer)
            .ok_or_else(DuoError::undefined_type),
        Input::String(s) => Ok(Value::String(s)),
        Input::Bool(_) | Input::Null | Input::List(_) | Input::Map(_) => {
            Err(DuoError::undefined_type())
        }
    }
}

/// `Some(n)` when `f` is finite, has no fractional part, and fits in i64
fn whole_float(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which itself does not fit
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    if !f.is_finite() || f.trunc() != f {
        return None;
    }
    if f < i64::MIN as f64 || f >= UPPER {
        return None;
    }
    Some(f as i64)
}
