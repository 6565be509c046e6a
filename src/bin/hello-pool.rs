use std::process::exit;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{error, info};

use hello_pool::{Greeting, RayonThreadPool, Result, SharedQueueThreadPool, TaskRunner, ThreadPool};

const DEFAULT_THREADS: u32 = 10;

#[derive(Parser)]
#[command(
    name = "hello-pool",
    version,
    about = "Greet from a pool worker and from the main thread"
)]
struct Cli {
    /// Number of worker threads in the pool
    #[arg(long, default_value_t = DEFAULT_THREADS, value_name = "N")]
    threads: u32,

    /// Thread pool implementation
    #[arg(long, value_enum, default_value_t = PoolKind::Shared)]
    pool: PoolKind,

    /// Delay the pooled run by this many milliseconds
    #[arg(long, default_value_t = 0, value_name = "MS")]
    delay_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PoolKind {
    /// Workers sharing one crossbeam job queue
    Shared,
    /// rayon work-stealing pool
    Rayon,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let delay = Duration::from_millis(cli.delay_ms);

    info!("hello-pool {}", env!("CARGO_PKG_VERSION"));
    info!("Pool: {:?} with {} threads", cli.pool, cli.threads);

    match cli.pool {
        PoolKind::Shared => run_with_pool(SharedQueueThreadPool::new(cli.threads)?, delay),
        PoolKind::Rayon => run_with_pool(RayonThreadPool::new(cli.threads)?, delay),
    }
}

fn run_with_pool<P: ThreadPool>(pool: P, delay: Duration) -> Result<()> {
    let report = TaskRunner::new(pool)
        .pooled_delay(delay)
        .run(Greeting::stdout())?;
    info!("Inline run on {:?}, pooled run on {:?}", report.inline, report.pooled);
    Ok(())
}
