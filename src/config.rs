//! Configuration for DuoKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DuoError, Result};

/// Main configuration for a DuoKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// File the engine snapshots to and restores from.
    /// `None` keeps the engine purely in memory.
    pub snapshot_path: Option<PathBuf>,

    /// Restore the snapshot (if the file exists) when the engine opens
    pub load_on_open: bool,

    /// Write a snapshot when the engine closes
    pub save_on_close: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Number of threads serving client connections
    pub worker_threads: usize,

    /// Connection read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: Some(PathBuf::from("./duokv_snapshot.json")),
            load_on_open: true,
            save_on_close: true,
            listen_addr: "127.0.0.1:6380".to_string(),
            worker_threads: 4,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Config for an engine that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            snapshot_path: None,
            load_on_open: false,
            save_on_close: false,
            ..Self::default()
        }
    }

    /// Check settings that would otherwise fail late (at bind or spawn time)
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == 0 {
            return Err(DuoError::Config(
                "worker_threads must be at least 1".to_string(),
            ));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(DuoError::Config("listen_addr is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = Some(path.into());
        self
    }

    /// Disable snapshot persistence entirely
    pub fn no_snapshot(mut self) -> Self {
        self.config.snapshot_path = None;
        self
    }

    /// Whether to restore the snapshot on open
    pub fn load_on_open(mut self, enabled: bool) -> Self {
        self.config.load_on_open = enabled;
        self
    }

    /// Whether to write the snapshot on close
    pub fn save_on_close(mut self, enabled: bool) -> Self {
        self.config.save_on_close = enabled;
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the number of connection worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
