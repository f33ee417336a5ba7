//! Command definitions
//!
//! Represents requests from clients.

use serde::{Deserialize, Serialize};

use crate::value::Input;

/// Command types (the frame's first byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    Set = 0x01,
    Get = 0x02,
    Kind = 0x03,
    LPush = 0x04,
    RPush = 0x05,
    RAddToSet = 0x06,
    LPop = 0x07,
    RPop = 0x08,
    LSet = 0x09,
    LGet = 0x0A,
    Save = 0x0B,
    Ping = 0x0C,
    Shutdown = 0x0D,
}

impl CommandType {
    pub fn from_byte(byte: u8) -> Option<Self> {
        let ty = match byte {
            0x01 => CommandType::Set,
            0x02 => CommandType::Get,
            0x03 => CommandType::Kind,
            0x04 => CommandType::LPush,
            0x05 => CommandType::RPush,
            0x06 => CommandType::RAddToSet,
            0x07 => CommandType::LPop,
            0x08 => CommandType::RPop,
            0x09 => CommandType::LSet,
            0x0A => CommandType::LGet,
            0x0B => CommandType::Save,
            0x0C => CommandType::Ping,
            0x0D => CommandType::Shutdown,
            _ => return None,
        };
        Some(ty)
    }
}

/// A parsed command
///
/// Values arrive unclassified; the engine runs them through inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Store a scalar
    Set { key: String, value: Input },

    /// Read a scalar
    Get { key: String },

    /// Kind tag of a scalar, or "No"
    Kind { key: String },

    /// Prepend elements, keeping their order
    LPush { key: String, elements: Vec<Input> },

    /// Append elements
    RPush { key: String, elements: Vec<Input> },

    /// Append elements not already present
    RAddToSet { key: String, elements: Vec<Input> },

    /// Pop from the head (0, 1 or 2 indices)
    LPop { key: String, indices: Vec<i64> },

    /// Pop from the tail (0, 1 or 2 indices)
    RPop { key: String, indices: Vec<i64> },

    /// Overwrite one list element
    LSet { key: String, index: i64, element: Input },

    /// Read one list element
    LGet { key: String, index: i64 },

    /// Write a snapshot, to `path` or the configured file
    Save { path: Option<String> },

    /// Ping (health check)
    Ping,

    /// Stop the server after replying
    Shutdown,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Kind { .. } => CommandType::Kind,
            Command::LPush { .. } => CommandType::LPush,
            Command::RPush { .. } => CommandType::RPush,
            Command::RAddToSet { .. } => CommandType::RAddToSet,
            Command::LPop { .. } => CommandType::LPop,
            Command::RPop { .. } => CommandType::RPop,
            Command::LSet { .. } => CommandType::LSet,
            Command::LGet { .. } => CommandType::LGet,
            Command::Save { .. } => CommandType::Save,
            Command::Ping => CommandType::Ping,
            Command::Shutdown => CommandType::Shutdown,
        }
    }
}
