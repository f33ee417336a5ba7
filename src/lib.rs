//! # DuoKV
//!
//! A single-node key-value store with:
//! - Two value families: scalars (integer/string) and ordered lists
//! - One coarse lock over all state
//! - Whole-state JSON snapshots written atomically
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                  (Multiple Clients)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │                 (single Mutex<Tables>)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────┐
//!          │            │             │
//!          ▼            ▼             ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ ScalarTable │ │  ListTable  │ │  Snapshot   │
//!   │ key → Value │ │ key → [Val] │ │   (JSON)    │
//!   └─────────────┘ └─────────────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod memtable;
pub mod snapshot;
pub mod network;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DuoError, Result};
pub use config::Config;
pub use engine::Engine;
pub use value::{Input, Kind, KindOf, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of DuoKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
