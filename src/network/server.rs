//! TCP Server
//!
//! Accepts connections and dispatches them to worker threads.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Connection, WorkerPool};
use crate::config::Config;
use crate::engine::Engine;
use crate::error::{DuoError, Result};

/// How long the accept loop sleeps when no connection is pending
const ACCEPT_POLL: Duration = Duration::from_millis(20);

/// Handles to the sockets of connections still being served, by id
type OpenStreams = Arc<Mutex<HashMap<u64, TcpStream>>>;

/// Cloneable handle that stops a running server
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// TCP server for DuoKV
///
/// One acceptor (the thread calling `run`) feeds a fixed worker pool. The
/// accept loop polls a stop flag, set either through a `ShutdownHandle` or by
/// a client's SHUTDOWN command. On stop, every connection still open is shut
/// down before the pool is joined.
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
    listener: Option<TcpListener>,
    shutdown: Arc<AtomicBool>,
    open: OpenStreams,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self {
            config,
            engine,
            listener: None,
            shutdown: Arc::new(AtomicBool::new(false)),
            open: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Bind the listen address without serving yet.
    ///
    /// Returns the bound address, which is how callers learn the port when
    /// listening on port 0.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        if let Some(listener) = &self.listener {
            return Ok(listener.local_addr()?);
        }

        self.config.validate()?;
        let listener = TcpListener::bind(&self.config.listen_addr)?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;
        tracing::info!("Listening on {}", addr);

        self.listener = Some(listener);
        Ok(addr)
    }

    /// Start the server (blocking until shutdown)
    pub fn run(&mut self) -> Result<()> {
        self.bind()?;
        let pool = WorkerPool::new(self.config.worker_threads)?;
        tracing::info!("Serving with {} worker threads", pool.size());

        let listener = self
            .listener
            .take()
            .ok_or_else(|| DuoError::Network("listener is not bound".to_string()))?;

        let mut next_id: u64 = 0;
        while !self.shutdown.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((stream, addr)) => {
                    // Accepted sockets inherit non-blocking mode on some platforms
                    if let Err(e) = stream.set_nonblocking(false) {
                        tracing::warn!("Dropping connection from {}: {}", addr, e);
                        continue;
                    }
                    tracing::trace!("Accepted connection from {}", addr);

                    let id = next_id;
                    next_id += 1;
                    match stream.try_clone() {
                        Ok(handle) => {
                            self.open.lock().insert(id, handle);
                        }
                        Err(e) => {
                            tracing::warn!("Dropping connection from {}: {}", addr, e);
                            continue;
                        }
                    }

                    let open = Arc::clone(&self.open);
                    let engine = Arc::clone(&self.engine);
                    let shutdown = Arc::clone(&self.shutdown);
                    let (read_ms, write_ms) =
                        (self.config.read_timeout_ms, self.config.write_timeout_ms);

                    pool.spawn(move || {
                        let result = Connection::new(stream, engine, shutdown).and_then(|mut conn| {
                            conn.set_timeouts(read_ms, write_ms)?;
                            conn.handle()
                        });
                        open.lock().remove(&id);
                        if let Err(e) = result {
                            tracing::warn!("Connection from {} ended with error: {}", addr, e);
                        }
                    })?;
                }
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => thread::sleep(ACCEPT_POLL),
                Err(e) => tracing::warn!("Accept failed: {}", e),
            }
        }

        self.close_open_streams();
        tracing::info!("Shutting down, waiting for open connections");
        drop(pool);
        Ok(())
    }

    /// Shut down the sockets of connections still being served.
    ///
    /// A worker blocked reading from an idle client sees end-of-stream and
    /// returns, so the pool can be joined whatever the read timeout.
    fn close_open_streams(&self) {
        let open: Vec<(u64, TcpStream)> = self.open.lock().drain().collect();
        if !open.is_empty() {
            tracing::debug!("Closing {} open connections", open.len());
        }
        for (id, stream) in open {
            if let Err(e) = stream.shutdown(Shutdown::Both) {
                tracing::trace!("Connection {} already closed: {}", id, e);
            }
        }
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Handle for stopping the server from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }
}
