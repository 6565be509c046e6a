use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error};

use super::ThreadPool;
use crate::{PoolError, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A thread pool using a shared job queue.
///
/// Workers pull jobs from a single MPMC channel. A panicking job is
/// caught so its worker keeps serving the queue.
pub struct SharedQueueThreadPool {
    /// `None` once the pool has been shut down.
    tx: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<Self> {
        if threads == 0 {
            return Err(PoolError::InvalidThreadCount);
        }

        let (tx, rx) = channel::unbounded::<Job>();
        let mut pool = SharedQueueThreadPool {
            tx: Some(tx),
            workers: Vec::with_capacity(threads as usize),
        };

        // On failure `pool` is dropped, which joins the workers spawned so far.
        for id in 0..threads {
            pool.workers.push(spawn_worker(id, rx.clone())?);
        }
        debug!("Started shared queue pool with {threads} workers");

        Ok(pool)
    }

    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let tx = self.tx.as_ref().ok_or(PoolError::Rejected)?;
        tx.send(Box::new(job)).map_err(|_| PoolError::Rejected)
    }

    fn shutdown(&mut self) {
        // Dropping the sender closes the channel; workers drain what is
        // already queued and then exit.
        if self.tx.take().is_none() {
            return;
        }
        debug!("Shutting down {} workers", self.workers.len());
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                error!("Worker thread terminated abnormally");
            }
        }
    }
}

/// Spawns a single worker thread that pulls jobs from the receiver.
fn spawn_worker(id: u32, rx: Receiver<Job>) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name(format!("pool-worker-{id}"))
        .spawn(move || loop {
            match rx.recv() {
                Ok(job) => {
                    debug!("Worker {id} executing job");
                    // Catch panics so the worker loop continues
                    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)).is_err() {
                        error!("Worker {id} job panicked, continuing");
                    }
                }
                Err(_) => {
                    debug!("Worker {id}: channel closed, shutting down");
                    return;
                }
            }
        })?;
    Ok(handle)
}

impl Drop for SharedQueueThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
