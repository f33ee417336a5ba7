//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - Worker thread pool for connections
//! - Commands routed through Engine

mod client;
mod connection;
mod pool;
mod server;

pub use client::Client;
pub use connection::Connection;
pub use pool::WorkerPool;
pub use server::{Server, ShutdownHandle};
