use std::any::Any;
use std::thread;

use crossbeam::channel::Receiver;

use crate::{PoolError, Result};

/// The pending result of a task submitted with
/// [`ThreadPool::submit`](super::ThreadPool::submit).
///
/// Owned by the submitter until [`wait`](TaskHandle::wait) consumes it.
#[must_use = "dropping a TaskHandle discards the task's result"]
pub struct TaskHandle<T> {
    rx: Receiver<thread::Result<T>>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(rx: Receiver<thread::Result<T>>) -> Self {
        Self { rx }
    }

    /// Returns `true` if the task has finished and `wait` will not block.
    pub fn is_finished(&self) -> bool {
        !self.rx.is_empty()
    }

    /// Blocks until the task completes and returns its value.
    ///
    /// There is no timeout: a slow task is waited for indefinitely.
    ///
    /// # Errors
    ///
    /// * [`PoolError::Execution`] if the task panicked.
    /// * [`PoolError::Interrupted`] if the task was discarded before it
    ///   could report, e.g. its worker went away.
    pub fn wait(self) -> Result<T> {
        match self.rx.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(payload)) => Err(PoolError::Execution(panic_message(payload.as_ref()))),
            Err(_) => Err(PoolError::Interrupted),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
