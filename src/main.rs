use math_agent::api;
use math_agent::executor::executor::TaskExecutor;
use math_agent::registry::store::TaskStore;

use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound on concurrently running computations.
const WORKER_COUNT: usize = 4;
/// Simulated duration of the placeholder computation.
const COMPUTE_DELAY: Duration = Duration::from_secs(3);

const DEFAULT_BIND: &str = "0.0.0.0:8084";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8084", args[0]);
                std::process::exit(1);
            }
        }
    }

    // 1. Task registry:
    let store = TaskStore::new();

    // 2. Worker pool:
    let executor = TaskExecutor::new(store.clone(), WORKER_COUNT, COMPUTE_DELAY);
    executor.start().await;

    // 3. HTTP router:
    let app = api::router(store.clone());

    // 4. Spawn stats reporter:
    let stats_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(5));

        loop {
            interval.tick().await;
            let (pending, running, completed, failed) = stats_store.status_counts();
            tracing::info!(
                "Task stats: {} pending, {} running, {} completed, {} failed",
                pending,
                running,
                completed,
                failed
            );
        }
    });

    // 5. Start HTTP server:
    tracing::info!("Math agent listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
