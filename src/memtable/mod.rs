//! MemTable Module
//!
//! The two in-memory tables that make up the whole engine state.
//!
//! ## Responsibilities
//! - `ScalarTable`: key → `Value`, replaced wholesale on every set
//! - `ListTable`: key → ordered `Vec<Value>`, edited in place by push/pop/set
//!
//! ## Concurrency
//! Neither table locks internally. The engine owns both inside one mutex and
//! hands out copies, never references, so nothing aliases table storage once
//! the lock is released.
//!
//! ## Data Structure Choice
//! BTreeMap keyed by string for both tables:
//! - Key order carries no meaning, but sorted keys make snapshots diff-able
//! - Lists are plain `Vec`s; head inserts shift, which is fine at this scale

mod list;
mod scalar;

pub use list::ListTable;
pub use scalar::ScalarTable;

/// Both tables together: the complete durable state of an engine
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tables {
    pub scalars: ScalarTable,
    pub lists: ListTable,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }
}
