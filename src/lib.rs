//! # hostpulse - Minimal Host Metrics Exporter
//!
//! A background sampler reads CPU, memory and network counters every ten
//! seconds and the most recent sample is served as JSON over HTTP.
//!
//! ## Features
//!
//! - **Fixed-interval sampling**: one sample at startup, then every 10 seconds
//! - **Tear-free reads**: requests always see one whole snapshot
//! - **Single endpoint**: `GET /` on port 7080
//! - **Pluggable provider**: swap the `sysinfo` backend for any `MetricsProvider`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hostpulse::{spawn_sampler, start_web_server, SnapshotStore, SystemCollector, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SnapshotStore::new();
//!     let collector = SystemCollector::new();
//!     let (_sampler, _shutdown) =
//!         spawn_sampler(collector, store.clone(), hostpulse::SAMPLE_INTERVAL);
//!
//!     start_web_server(WebConfig::default(), store).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod web;

use std::time::Duration;

// Re-export public API
pub use error::{Result, SystemError};
pub use metrics::{
    collector::SystemCollector,
    data::{NetworkCounters, Snapshot},
    sampler::{collect_snapshot, spawn_sampler, Sampler},
    store::SnapshotStore,
    traits::MetricsProvider,
};
pub use web::{bind_listener, create_app, serve, start_web_server, WebConfig};

/// Delay between sampling cycles
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(10);

/// The web server port
pub const DEFAULT_WEB_PORT: u16 = 7080;

/// The web server bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";
