use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use hello_pool::{
    Greeting, PoolError, RayonThreadPool, Result, SharedQueueThreadPool, TaskRunner, ThreadPool,
};

fn capture() -> (Arc<Mutex<Vec<u8>>>, Greeting) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let greeting = Greeting::new(buf.clone());
    (buf, greeting)
}

fn lines(buf: &Mutex<Vec<u8>>) -> Vec<String> {
    let bytes = buf.lock().unwrap();
    String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn greets_twice<P: ThreadPool>() -> Result<()> {
    let (buf, greeting) = capture();
    let report = TaskRunner::new(P::new(10)?).run(greeting)?;

    let lines = lines(&buf);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.starts_with("Hello, ")));
    assert!(lines.contains(&format!("Hello, {:?}", report.inline)));
    assert!(lines.contains(&format!("Hello, {:?}", report.pooled)));

    assert_eq!(report.inline, thread::current().id());
    assert_ne!(report.inline, report.pooled);
    Ok(())
}

fn waits_for_delayed_run<P: ThreadPool>() -> Result<()> {
    let (buf, greeting) = capture();
    let delay = Duration::from_millis(300);
    let start = Instant::now();

    let report = TaskRunner::new(P::new(10)?)
        .pooled_delay(delay)
        .run(greeting)?;

    assert!(start.elapsed() >= delay);
    let lines = lines(&buf);
    assert_eq!(lines.len(), 2);
    // The pooled line was written before `run` returned, and after the
    // inline one since it was held back.
    assert_eq!(lines[0], format!("Hello, {:?}", report.inline));
    assert_eq!(lines[1], format!("Hello, {:?}", report.pooled));
    Ok(())
}

#[test]
fn shared_queue_runner_greets_twice() -> Result<()> {
    greets_twice::<SharedQueueThreadPool>()
}

#[test]
fn rayon_runner_greets_twice() -> Result<()> {
    greets_twice::<RayonThreadPool>()
}

#[test]
fn shared_queue_runner_waits_for_delayed_run() -> Result<()> {
    waits_for_delayed_run::<SharedQueueThreadPool>()
}

#[test]
fn rayon_runner_waits_for_delayed_run() -> Result<()> {
    waits_for_delayed_run::<RayonThreadPool>()
}

#[test]
fn repeated_runs_keep_two_lines_each() -> Result<()> {
    for _ in 0..20 {
        let (buf, greeting) = capture();
        let report = TaskRunner::new(SharedQueueThreadPool::new(10)?).run(greeting)?;
        assert_eq!(lines(&buf).len(), 2);
        assert_ne!(report.inline, report.pooled);
    }
    Ok(())
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_task_is_reported_and_pool_released() {
    let greeting = Greeting::new(Arc::new(Mutex::new(BrokenSink)));
    let pool = SharedQueueThreadPool::new(10).unwrap();

    match TaskRunner::new(pool).run(greeting) {
        Err(PoolError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected IO error, got {:?}", other),
    }
}
