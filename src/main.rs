//! hostpulse binary: samples host metrics and serves the latest one on port 7080.

use hostpulse::{
    bind_listener, serve, spawn_sampler, SnapshotStore, SystemCollector, WebConfig,
    SAMPLE_INTERVAL,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("Starting hostpulse v{}", env!("CARGO_PKG_VERSION"));

    let collector = SystemCollector::new();
    let store = SnapshotStore::new();

    // Keep the shutdown sender alive for the lifetime of the process.
    let (_sampler, _shutdown) = spawn_sampler(collector, store.clone(), SAMPLE_INTERVAL);
    info!("Sampling host metrics every {:?}", SAMPLE_INTERVAL);

    let config = WebConfig::default();
    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Server failed to start: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting server on {}", config.bind_address());
    serve(listener, store).await?;

    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
