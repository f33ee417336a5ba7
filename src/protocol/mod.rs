//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (V1 - Framed bincode)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Commands
//! - 0x01: SET        - key, value
//! - 0x02: GET        - key
//! - 0x03: KIND       - key
//! - 0x04: LPUSH      - key, elements
//! - 0x05: RPUSH      - key, elements
//! - 0x06: RADDTOSET  - key, elements
//! - 0x07: LPOP       - key, indices
//! - 0x08: RPOP       - key, indices
//! - 0x09: LSET       - key, index, element
//! - 0x0A: LGET       - key, index
//! - 0x0B: SAVE       - optional path
//! - 0x0C: PING       - empty
//! - 0x0D: SHUTDOWN   - empty
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK
//! - 0x01: NOT_FOUND
//! - 0x02: ERROR
//! - 0x03: BAD_REQUEST

mod codec;
mod command;
mod response;

pub use codec::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
pub use command::{Command, CommandType};
pub use response::{Reply, Response, Status};
