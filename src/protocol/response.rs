//! Response definitions
//!
//! Represents responses to clients.

use serde::{Deserialize, Serialize};

use super::CommandType;
use crate::error::{DuoError, Result};
use crate::value::{KindOf, Value};

/// Response status codes
///
/// Follow the HTTP statuses the engine's callers have always used:
/// `Ok` = 200, `NotFound` = 404, `BadRequest` = 400, `Error` = 502.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    NotFound = 0x01,
    Error = 0x02,
    BadRequest = 0x03,
}

impl Status {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Status::Ok),
            0x01 => Some(Status::NotFound),
            0x02 => Some(Status::Error),
            0x03 => Some(Status::BadRequest),
            _ => None,
        }
    }

    /// Status for a failed command
    pub fn for_failure(command: CommandType, err: &DuoError) -> Self {
        match (command, err) {
            (_, DuoError::Protocol(_)) => Status::BadRequest,
            (CommandType::LSet, _) => Status::BadRequest,
            (CommandType::Get, e) if e.is_not_found() => Status::NotFound,
            _ => Status::Error,
        }
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    /// Command applied, nothing to return
    Done,

    /// The "OK" sentinel of lset
    Ok,

    /// List length after a push, or elements added by raddtoset
    Length(u64),

    Value(Value),

    Values(Vec<Value>),

    Kind(KindOf),

    Pong,
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (bincode `Reply` for OK, message otherwise)
    pub payload: Option<Vec<u8>>,
}

impl Response {
    /// Create an OK response carrying `reply`
    pub fn ok(reply: &Reply) -> Result<Self> {
        Ok(Self {
            status: Status::Ok,
            payload: Some(bincode::serialize(reply)?),
        })
    }

    /// Create a failure response with a message
    pub fn failure(status: Status, message: &str) -> Self {
        Self {
            status,
            payload: Some(message.as_bytes().to_vec()),
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self::failure(Status::Error, message)
    }

    /// Create a response from the outcome of `command`
    pub fn from_result(command: CommandType, result: Result<Reply>) -> Self {
        let outcome = result.and_then(|reply| Self::ok(&reply));
        match outcome {
            Ok(response) => response,
            Err(e) => Self::failure(Status::for_failure(command, &e), &e.to_string()),
        }
    }

    /// Decode the reply of an OK response
    pub fn reply(&self) -> Result<Reply> {
        if self.status != Status::Ok {
            return Err(DuoError::Protocol(format!(
                "{:?} response has no reply: {}",
                self.status,
                self.message().unwrap_or_default()
            )));
        }
        let payload = self
            .payload
            .as_deref()
            .ok_or_else(|| DuoError::Protocol("OK response without payload".to_string()))?;
        Ok(bincode::deserialize(payload)?)
    }

    /// Error message of a failed response
    pub fn message(&self) -> Option<String> {
        if self.status == Status::Ok {
            return None;
        }
        self.payload
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
