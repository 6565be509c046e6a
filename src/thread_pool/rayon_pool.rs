use crossbeam::sync::WaitGroup;
use log::{debug, error};

use super::ThreadPool;
use crate::{PoolError, Result};

/// A thread pool backed by the `rayon` library.
///
/// Uses rayon's work-stealing scheduler with a fixed number of threads.
/// Outstanding jobs are tracked so that shutdown waits for them.
pub struct RayonThreadPool {
    pool: Option<rayon::ThreadPool>,
    in_flight: Option<WaitGroup>,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: u32) -> Result<Self> {
        if threads == 0 {
            return Err(PoolError::InvalidThreadCount);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .thread_name(|i| format!("rayon-worker-{i}"))
            // Without a handler rayon aborts the process on a panicking spawn.
            .panic_handler(|_| error!("Rayon job panicked, continuing"))
            .build()
            .map_err(|e| PoolError::Build(e.to_string()))?;
        debug!("Started rayon pool with {threads} threads");

        Ok(RayonThreadPool {
            pool: Some(pool),
            in_flight: Some(WaitGroup::new()),
        })
    }

    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let (pool, in_flight) = match (&self.pool, &self.in_flight) {
            (Some(pool), Some(in_flight)) => (pool, in_flight.clone()),
            _ => return Err(PoolError::Rejected),
        };
        pool.spawn(move || {
            let _in_flight = in_flight;
            job();
        });
        Ok(())
    }

    fn shutdown(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        debug!("Waiting for outstanding rayon jobs");
        in_flight.wait();
        self.pool = None;
    }
}

impl Drop for RayonThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
