use std::io::{self, Write};
use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_guide::cache::CacheConfig;
use transit_guide::protocol::{Document, write_responses};
use transit_guide::web::{AppState, create_router};

/// When set, serve HTTP on this address instead of printing responses.
const LISTEN_VAR: &str = "TRANSIT_GUIDE_LISTEN";

/// Overrides the shortest-path tree cache capacity.
const CACHE_CAPACITY_VAR: &str = "TRANSIT_GUIDE_CACHE_CAPACITY";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the JSON answer
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "transit guide failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Document path as the first argument, stdin otherwise
    let document = match std::env::args().nth(1) {
        Some(path) => Document::load(path)?,
        None => Document::from_reader(io::stdin().lock())?,
    };

    let cache_config = cache_config()?;
    let guide = document.build_guide(&cache_config)?;
    info!(
        stops = guide.index().stop_count(),
        buses = guide.index().bus_count(),
        edges = guide.graph().edge_count(),
        wait_minutes = guide.settings().bus_wait_time,
        velocity_kmh = guide.settings().bus_velocity,
        "network built"
    );

    if let Ok(addr) = std::env::var(LISTEN_VAR) {
        let addr: SocketAddr = addr.parse()?;
        let app = create_router(AppState::new(guide));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "transit guide listening");
        axum::serve(listener, app).await?;
        return Ok(());
    }

    let responses = guide.answer_all(&document.queries());
    let mut stdout = io::stdout().lock();
    write_responses(&mut stdout, &responses)?;
    writeln!(stdout)?;
    Ok(())
}

fn cache_config() -> Result<CacheConfig, Box<dyn std::error::Error>> {
    let mut config = CacheConfig::default();
    if let Ok(capacity) = std::env::var(CACHE_CAPACITY_VAR) {
        config.max_capacity = capacity.parse()?;
    }
    Ok(config)
}
