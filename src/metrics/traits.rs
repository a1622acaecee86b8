//! Traits for host metrics collection.

use crate::error::Result;
use crate::metrics::data::NetworkCounters;

/// Source of raw host measurements.
///
/// Each reading is independently fallible. Implementations report failures
/// as provider errors (`SystemError::Cpu`, `Memory`, `Network`) so the
/// sampler can skip the cycle without tearing down the process.
pub trait MetricsProvider {
    /// Current aggregate CPU utilization percentage across all cores.
    fn sample_cpu(&mut self) -> impl std::future::Future<Output = Result<f64>> + Send;

    /// Current physical memory utilization percentage.
    fn sample_memory(&mut self) -> impl std::future::Future<Output = Result<f64>> + Send;

    /// Cumulative packet and byte counters summed over all interfaces.
    fn sample_network(
        &mut self,
    ) -> impl std::future::Future<Output = Result<NetworkCounters>> + Send;
}
