//! Value Module
//!
//! The scalar type model shared by both tables.
//!
//! ## Responsibilities
//! - Represent caller input before classification (`Input`)
//! - Classify input into a storable `Value` (integer or string)
//! - Report the kind tag of a stored value
//!
//! ## Classification
//! ```text
//!   Input::Integer(n)              -> Value::Integer(n)
//!   Input::Float(f), f whole       -> Value::Integer(f as i64)
//!   Input::String(s)               -> Value::String(s)
//!   anything else                  -> Type error ("undefined value type")
//! ```
//! Non-whole floats are rejected rather than stored lossily: `133.7` fails,
//! `4.0` is stored as the integer `4`.

mod inference;
mod input;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use inference::{classify, infer, Value};
pub use input::Input;

/// Classification tag of a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "D")]
    Integer,

    #[serde(rename = "S")]
    String,

    /// Never stored; only produced by `classify` for rejected input
    #[serde(rename = "UND")]
    Undefined,
}

impl Kind {
    /// Short tag used in logs and snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "D",
            Kind::String => "S",
            Kind::Undefined => "UND",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a kind query: the stored kind, or the `"No"` sentinel when the
/// key is absent. Absence is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindOf {
    Kind(Kind),
    No,
}

impl fmt::Display for KindOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindOf::Kind(kind) => kind.fmt(f),
            KindOf::No => f.write_str("No"),
        }
    }
}
