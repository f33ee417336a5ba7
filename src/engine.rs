//! Engine Module
//!
//! The façade that owns both tables and serializes every access to them.
//!
//! ## Responsibilities
//! - Guard the scalar and list tables with one mutex
//! - Hand out copies only, never references into table storage
//! - Save and restore whole-state snapshots
//! - Route protocol commands to table operations

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{DuoError, Result};
use crate::memtable::Tables;
use crate::protocol::{Command, Reply};
use crate::snapshot;
use crate::value::{infer, Input, KindOf, Value};

/// Success sentinel returned by `lset`
pub const OK: &str = "OK";

/// The main storage engine
///
/// ## Concurrency Model: one coarse lock
///
/// - Every operation, read or write, holds `tables` for its full duration
/// - Snapshot save/load hold it too, including the file I/O; concurrent
///   callers wait for the snapshot to finish
/// - No operation blocks on anything but the lock, and nothing runs in the
///   background
///
/// A single lock means no lost updates and a consistent snapshot, at the cost
/// of contention that grows with call volume.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Scalar and list tables, the entire durable state
    tables: Mutex<Tables>,
}

impl Engine {
    /// Open an engine with the given config
    ///
    /// On startup:
    /// 1. Start with empty tables
    /// 2. If configured, restore the snapshot file when it exists
    /// 3. A snapshot that fails to load is logged and skipped; the engine
    ///    still serves as an empty store
    ///
    /// Never fails.
    pub fn open(config: Config) -> Self {
        let engine = Self {
            config,
            tables: Mutex::new(Tables::new()),
        };

        if !engine.config.load_on_open {
            return engine;
        }

        if let Some(path) = engine.config.snapshot_path.clone() {
            if path.exists() {
                if let Err(e) = engine.load(&path) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Snapshot could not be loaded, starting empty"
                    );
                }
            } else {
                tracing::info!(path = %path.display(), "No snapshot found, starting empty");
            }
        }

        engine
    }

    /// Engine with no snapshot file
    pub fn in_memory() -> Self {
        Self {
            config: Config::in_memory(),
            tables: Mutex::new(Tables::new()),
        }
    }

    // =========================================================================
    // Scalar Operations
    // =========================================================================

    /// Store a scalar, inferring its kind from `input`.
    ///
    /// A type error leaves any existing value under `key` untouched.
    pub fn set(&self, key: &str, input: impl Into<Input>) -> Result<()> {
        let mut tables = self.tables.lock();
        let kind = tables.scalars.set(key, input.into())?;
        tracing::debug!(key, kind = %kind, "value set");
        Ok(())
    }

    /// Copy of a scalar
    pub fn get(&self, key: &str) -> Option<Value> {
        let tables = self.tables.lock();
        let value = tables.scalars.get(key);
        tracing::debug!(key, found = value.is_some(), "value get");
        value
    }

    /// Kind of a scalar, `KindOf::No` when absent
    pub fn kind_of(&self, key: &str) -> KindOf {
        self.tables.lock().scalars.kind_of(key)
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    /// Prepend `elements` in order. Returns the new length.
    pub fn lpush(&self, key: &str, elements: Vec<Value>) -> Result<usize> {
        let count = elements.len();
        let len = self.tables.lock().lists.lpush(key, elements)?;
        tracing::debug!(key, count, len, "LPUSH executed");
        Ok(len)
    }

    /// Append `elements` in order. Returns the new length.
    pub fn rpush(&self, key: &str, elements: Vec<Value>) -> Result<usize> {
        let count = elements.len();
        let len = self.tables.lock().lists.rpush(key, elements)?;
        tracing::debug!(key, count, len, "RPUSH executed");
        Ok(len)
    }

    /// Append the elements not yet in the list. Returns how many were added.
    pub fn raddtoset(&self, key: &str, elements: Vec<Value>) -> Result<usize> {
        let added = self.tables.lock().lists.raddtoset(key, elements)?;
        tracing::debug!(key, added, "RADDTOSET executed");
        Ok(added)
    }

    /// Pop from the head; see `ListTable::lpop` for the index forms
    pub fn lpop(&self, key: &str, indices: &[i64]) -> Result<Vec<Value>> {
        let popped = self.tables.lock().lists.lpop(key, indices)?;
        tracing::debug!(key, ?indices, popped = popped.len(), "LPOP executed");
        Ok(popped)
    }

    /// Pop from the tail; see `ListTable::rpop` for the index forms
    pub fn rpop(&self, key: &str, indices: &[i64]) -> Result<Vec<Value>> {
        let popped = self.tables.lock().lists.rpop(key, indices)?;
        tracing::debug!(key, ?indices, popped = popped.len(), "RPOP executed");
        Ok(popped)
    }

    /// Overwrite one element. Returns the `"OK"` sentinel.
    pub fn lset(&self, key: &str, index: i64, element: Value) -> Result<&'static str> {
        self.tables.lock().lists.lset(key, index, element)?;
        tracing::debug!(key, index, "LSET executed");
        Ok(OK)
    }

    /// Copy of one element
    pub fn lget(&self, key: &str, index: i64) -> Result<Value> {
        let value = self.tables.lock().lists.lget(key, index)?;
        tracing::debug!(key, index, "LGET executed");
        Ok(value)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Write both tables to `path`, replacing the file atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let tables = self.tables.lock();
        snapshot::save(&tables, path)?;
        tracing::info!(
            path = %path.display(),
            scalars = tables.scalars.len(),
            lists = tables.lists.len(),
            "Storage saved to file"
        );
        Ok(())
    }

    /// Replace both tables with the snapshot at `path`.
    ///
    /// Nothing is merged: keys absent from the file are gone afterwards. If
    /// the file is missing or malformed the current tables stay as they were.
    pub fn load(&self, path: &Path) -> Result<()> {
        let mut tables = self.tables.lock();
        let loaded = snapshot::load(path)?;
        *tables = loaded;
        tracing::info!(
            path = %path.display(),
            scalars = tables.scalars.len(),
            lists = tables.lists.len(),
            "Storage loaded from file"
        );
        Ok(())
    }

    /// Save to the configured snapshot path
    pub fn save_configured(&self) -> Result<()> {
        let path = self.configured_path()?;
        self.save(&path)
    }

    /// Load from the configured snapshot path
    pub fn load_configured(&self) -> Result<()> {
        let path = self.configured_path()?;
        self.load(&path)
    }

    fn configured_path(&self) -> Result<PathBuf> {
        self.config
            .snapshot_path
            .clone()
            .ok_or_else(|| DuoError::Config("no snapshot path configured".to_string()))
    }

    // =========================================================================
    // Command Routing
    // =========================================================================

    /// Execute a command
    ///
    /// Input values are classified first; one undefined element fails the
    /// whole command before any table is touched.
    pub fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::Set { key, value } => {
                self.set(&key, value)?;
                Ok(Reply::Done)
            }
            Command::Get { key } => self
                .get(&key)
                .map(Reply::Value)
                .ok_or_else(|| DuoError::NotFound(format!("key {}", key))),
            Command::Kind { key } => Ok(Reply::Kind(self.kind_of(&key))),
            Command::LPush { key, elements } => {
                let len = self.lpush(&key, infer_all(elements)?)?;
                Ok(Reply::Length(len as u64))
            }
            Command::RPush { key, elements } => {
                let len = self.rpush(&key, infer_all(elements)?)?;
                Ok(Reply::Length(len as u64))
            }
            Command::RAddToSet { key, elements } => {
                let added = self.raddtoset(&key, infer_all(elements)?)?;
                Ok(Reply::Length(added as u64))
            }
            Command::LPop { key, indices } => Ok(Reply::Values(self.lpop(&key, &indices)?)),
            Command::RPop { key, indices } => Ok(Reply::Values(self.rpop(&key, &indices)?)),
            Command::LSet {
                key,
                index,
                element,
            } => {
                self.lset(&key, index, infer(element)?)?;
                Ok(Reply::Ok)
            }
            Command::LGet { key, index } => Ok(Reply::Value(self.lget(&key, index)?)),
            Command::Save { path: Some(path) } => {
                self.save(Path::new(&path))?;
                Ok(Reply::Done)
            }
            Command::Save { path: None } => {
                self.save_configured()?;
                Ok(Reply::Done)
            }
            Command::Ping => Ok(Reply::Pong),
            // Stopping the listener is the server's job
            Command::Shutdown => Ok(Reply::Done),
        }
    }

    /// Close the engine gracefully
    ///
    /// Writes the snapshot when `save_on_close` is set and a path is configured
    pub fn close(self) -> Result<()> {
        if self.config.save_on_close && self.config.snapshot_path.is_some() {
            self.save_configured()?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of scalar keys
    pub fn scalar_count(&self) -> usize {
        self.tables.lock().scalars.len()
    }

    /// Number of list keys, empty lists included
    pub fn list_count(&self) -> usize {
        self.tables.lock().lists.len()
    }

    /// Length of a list, `None` if the key does not exist
    pub fn list_len(&self, key: &str) -> Option<usize> {
        self.tables.lock().lists.list_len(key)
    }

    /// Copy of a whole list
    pub fn list_range(&self, key: &str) -> Option<Vec<Value>> {
        self.tables.lock().lists.range(key)
    }

    /// Copy of the complete state
    pub fn tables(&self) -> Tables {
        self.tables.lock().clone()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn infer_all(elements: Vec<Input>) -> Result<Vec<Value>> {
    elements.into_iter().map(infer).collect()
}
