use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use crate::Result;

/// A shared output destination for greetings.
pub type Sink = Arc<Mutex<dyn Write + Send>>;

/// The greeting task: prints `Hello, <thread id>` for whichever thread
/// runs it.
///
/// Clones share the same sink and hold no other state, so the same task
/// can run on several threads at once.
#[derive(Clone)]
pub struct Greeting {
    out: Sink,
}

impl Greeting {
    /// Creates a greeting that writes to the given sink.
    pub fn new(out: Sink) -> Self {
        Self { out }
    }

    /// Creates a greeting that writes to standard output.
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(io::stdout())))
    }

    /// Writes one greeting line for the current thread and returns its id.
    ///
    /// The line is written and flushed while holding the sink lock, so
    /// concurrent runs never split each other's lines.
    pub fn run(&self) -> Result<ThreadId> {
        let id = thread::current().id();
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "Hello, {id:?}")?;
        out.flush()?;
        Ok(id)
    }
}
