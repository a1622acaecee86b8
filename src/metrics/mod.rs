//! Host metrics collection, storage and periodic sampling.
//!
//! This module provides the pieces behind the exporter's single endpoint:
//! the snapshot data model, the `MetricsProvider` capability and its
//! `sysinfo` implementation, the shared snapshot store, and the sampler
//! that ties them together.

pub mod collector;
pub mod data;
pub mod sampler;
pub mod store;
pub mod traits;

// Re-export commonly used items
pub use collector::SystemCollector;
pub use data::{NetworkCounters, Snapshot};
pub use sampler::{collect_snapshot, spawn_sampler, Sampler};
pub use store::SnapshotStore;
pub use traits::MetricsProvider;
