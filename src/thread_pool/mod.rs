use std::panic::{self, AssertUnwindSafe};

use crossbeam::channel;

use crate::Result;

/// A thread pool for executing jobs concurrently.
///
/// Implementors own a fixed set of worker threads and distribute
/// incoming jobs across them. Dropping a pool shuts it down.
pub trait ThreadPool {
    /// Creates a new thread pool with the given number of threads.
    ///
    /// # Errors
    ///
    /// Returns an error if `threads` is zero or a worker cannot be spawned.
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// Spawns a function into the thread pool.
    ///
    /// The function will be executed by one of the threads in the pool.
    /// This never blocks on the job itself.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Rejected`](crate::PoolError::Rejected) once the
    /// pool has been shut down.
    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static;

    /// Stops accepting jobs, lets queued and running jobs finish, and
    /// reclaims the workers. Calling it again is a no-op.
    fn shutdown(&mut self);

    /// Submits a task and returns a handle to its pending result.
    ///
    /// A panic inside `task` is captured and reported by
    /// [`TaskHandle::wait`] instead of unwinding through the worker.
    fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel::bounded(1);
        self.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task));
            // Nobody is listening if the handle was dropped.
            let _ = tx.send(outcome);
        })?;
        Ok(TaskHandle::new(rx))
    }
}

mod handle;
mod rayon_pool;
mod shared_queue;

pub use self::handle::TaskHandle;
pub use self::rayon_pool::RayonThreadPool;
pub use self::shared_queue::SharedQueueThreadPool;
