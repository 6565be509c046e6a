use std::thread::{self, ThreadId};
use std::time::Duration;

use log::{debug, info};

use crate::task::Greeting;
use crate::thread_pool::ThreadPool;
use crate::Result;

/// Which threads ran the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The calling thread, which ran the task inline.
    pub inline: ThreadId,
    /// The pool worker that ran the submitted task.
    pub pooled: ThreadId,
}

/// Runs a task once on a pool worker and once on the calling thread.
///
/// Generic over the thread pool `P`. The runner owns the pool, so the
/// pool is shut down however `run` exits.
pub struct TaskRunner<P: ThreadPool> {
    pool: P,
    pooled_delay: Duration,
}

impl<P: ThreadPool> TaskRunner<P> {
    /// Creates a `TaskRunner` that submits work to the given pool.
    pub fn new(pool: P) -> Self {
        Self {
            pool,
            pooled_delay: Duration::ZERO,
        }
    }

    /// Delays the pooled run by `delay` before the task starts.
    pub fn pooled_delay(mut self, delay: Duration) -> Self {
        self.pooled_delay = delay;
        self
    }

    /// Submits `task` to the pool, runs it inline, waits for the pooled
    /// run and shuts the pool down.
    ///
    /// The wait is unbounded. When it returns, the pooled run's output
    /// has already been written.
    ///
    /// # Errors
    ///
    /// Returns the first failure among submission, the inline run, the
    /// wait, and the pooled run itself.
    pub fn run(mut self, task: Greeting) -> Result<Report> {
        let delay = self.pooled_delay;
        let pooled_task = task.clone();
        let handle = self.pool.submit(move || {
            if !delay.is_zero() {
                debug!("Delaying pooled run by {delay:?}");
                thread::sleep(delay);
            }
            pooled_task.run()
        })?;
        debug!("Task submitted");

        let inline = task.run()?;
        let pooled = handle.wait()??;
        info!("Pooled run finished on {pooled:?}");

        self.pool.shutdown();
        Ok(Report { inline, pooled })
    }
}
