//! Periodic sampling task that keeps the snapshot store fresh.

use crate::error::Result;
use crate::metrics::{data::Snapshot, store::SnapshotStore, traits::MetricsProvider};
use chrono::Utc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error, info, warn};

/// Collect one snapshot, failing as soon as any reading fails.
pub async fn collect_snapshot<P: MetricsProvider>(provider: &mut P) -> Result<Snapshot> {
    let captured_at = Utc::now();
    let cpu_percent = provider.sample_cpu().await?;
    let memory_percent = provider.sample_memory().await?;
    let network = provider.sample_network().await?;

    Ok(Snapshot::from_readings(
        captured_at,
        cpu_percent,
        memory_percent,
        network,
    ))
}

/// Drives a [`MetricsProvider`] on a fixed interval and publishes each
/// complete snapshot to a [`SnapshotStore`].
pub struct Sampler<P> {
    provider: P,
    store: SnapshotStore,
    interval: Duration,
}

impl<P: MetricsProvider> Sampler<P> {
    /// Create a sampler using the default interval.
    pub fn new(provider: P, store: SnapshotStore) -> Self {
        Self {
            provider,
            store,
            interval: crate::SAMPLE_INTERVAL,
        }
    }

    /// Set the delay between sampling cycles.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run a single sampling cycle.
    ///
    /// On failure nothing is published and the store keeps whatever it held
    /// before. The error is logged here and also handed back to the caller.
    pub async fn tick(&mut self) -> Result<()> {
        match collect_snapshot(&mut self.provider).await {
            Ok(snapshot) => {
                debug!(
                    time = %snapshot.timestamp,
                    cpu_perc = snapshot.cpu_percent,
                    memory_perc = snapshot.memory_percent,
                    "Published host snapshot"
                );
                self.store.publish(snapshot);
                Ok(())
            }
            Err(err) if err.is_provider_error() => {
                warn!("Failed to collect host metrics, keeping previous snapshot: {}", err);
                Err(err)
            }
            Err(err) => {
                error!("Sampling cycle aborted, keeping previous snapshot: {}", err);
                Err(err)
            }
        }
    }

    /// Sample immediately, then once per interval, until `shutdown` turns
    /// `true` or its sender is dropped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!("Sampler started with {:?} interval", self.interval);

        loop {
            if *shutdown.borrow() {
                break;
            }

            // Failures were already logged by tick.
            let _ = self.tick().await;

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Sampler stopped");
    }
}

/// Spawn a sampler on the tokio runtime.
///
/// The returned sender stops the sampler when it sends `true` or is dropped,
/// so callers that want the sampler to live for the whole process must keep
/// it alive.
pub fn spawn_sampler<P>(
    provider: P,
    store: SnapshotStore,
    interval: Duration,
) -> (JoinHandle<()>, watch::Sender<bool>)
where
    P: MetricsProvider + Send + 'static,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sampler = Sampler::new(provider, store).with_interval(interval);
    let handle = tokio::spawn(sampler.run(shutdown_rx));
    (handle, shutdown_tx)
}
