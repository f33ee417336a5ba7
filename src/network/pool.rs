//! Worker pool
//!
//! Fixed set of threads pulling connection jobs off a shared queue.

use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};

use crate::error::{DuoError, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Thread pool fed by an unbounded crossbeam channel.
///
/// A job that panics is logged and the worker moves on to the next one.
/// Dropping the pool closes the queue and joins every worker, so it waits for
/// in-flight jobs to finish.
pub struct WorkerPool {
    tx: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(DuoError::Config(
                "worker pool needs at least one thread".to_string(),
            ));
        }

        let (tx, rx) = channel::unbounded::<Job>();
        let mut workers = Vec::with_capacity(threads);
        for id in 0..threads {
            let rx = rx.clone();
            let handle = thread::Builder::new()
                .name(format!("duokv-worker-{}", id))
                .spawn(move || run_jobs(rx))?;
            workers.push(handle);
        }

        Ok(Self {
            tx: Some(tx),
            workers,
        })
    }

    /// Queue a job for the next free worker
    pub fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| DuoError::Network("worker pool is shut down".to_string()))?;

        tx.send(Box::new(job))
            .map_err(|_| DuoError::Network("worker pool has no threads".to_string()))
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Disconnecting the channel ends each worker's recv loop
        self.tx.take();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                tracing::error!("Worker thread exited abnormally");
            }
        }
    }
}

fn run_jobs(rx: Receiver<Job>) {
    for job in rx.iter() {
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            tracing::error!("Connection job panicked");
        }
    }
    tracing::trace!("Worker exiting, queue closed");
}
