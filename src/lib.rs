#![deny(missing_docs)]

//! Submitting work to a fixed-size thread pool.
//!
//! This library provides a small thread pool capability (submit a task,
//! get a pending handle back, shut the pool down), two pool implementations,
//! and a runner that executes a greeting task both on a pool worker and on
//! the calling thread.

mod error;
mod runner;
mod task;
/// Thread pool implementations and pending task handles.
pub mod thread_pool;

pub use error::{PoolError, Result};
pub use runner::{Report, TaskRunner};
pub use task::{Greeting, Sink};
pub use thread_pool::{RayonThreadPool, SharedQueueThreadPool, TaskHandle, ThreadPool};
