//! Host metrics collection backed by `sysinfo`.

use crate::error::{Result, SystemError};
use crate::metrics::{data::NetworkCounters, traits::MetricsProvider};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};
use tokio::time;

/// Production metrics provider reading CPU, memory and network counters
/// through `sysinfo`.
///
/// Construction never fails. On a platform `sysinfo` does not support every
/// reading returns `SystemError::UnsupportedPlatform`, so the sampler keeps
/// skipping cycles while the endpoint serves the zero-value snapshot.
pub struct SystemCollector {
    system: System,
    networks: Networks,
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCollector {
    /// Create a new system collector instance.
    pub fn new() -> Self {
        let mut system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );
        system.refresh_cpu_usage();
        system.refresh_memory();
        let networks = Networks::new_with_refreshed_list();

        Self { system, networks }
    }
}

fn ensure_supported() -> Result<()> {
    ensure_platform(sysinfo::IS_SUPPORTED_SYSTEM)
}

fn ensure_platform(supported: bool) -> Result<()> {
    if supported {
        Ok(())
    } else {
        Err(SystemError::unsupported_platform(std::env::consts::OS))
    }
}

impl MetricsProvider for SystemCollector {
    /// Usage is measured over `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`, not
    /// over the time since the previous sample.
    async fn sample_cpu(&mut self) -> Result<f64> {
        ensure_supported()?;
        self.system.refresh_cpu_usage();
        time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(SystemError::cpu_error("no CPU information available"));
        }

        let usage = f64::from(self.system.global_cpu_usage());
        if !usage.is_finite() {
            return Err(SystemError::cpu_error(format!("invalid CPU usage reading: {usage}")));
        }
        Ok(usage.clamp(0.0, 100.0))
    }

    async fn sample_memory(&mut self) -> Result<f64> {
        ensure_supported()?;
        self.system.refresh_memory();

        let total_bytes = self.system.total_memory();
        if total_bytes == 0 {
            return Err(SystemError::memory_error("total memory reported as zero"));
        }
        let used_bytes = self.system.used_memory().min(total_bytes);

        Ok(used_bytes as f64 / total_bytes as f64 * 100.0)
    }

    /// No interfaces at all is not an error: the counters are all zero.
    async fn sample_network(&mut self) -> Result<NetworkCounters> {
        ensure_supported()?;

        // Pick up interfaces that appeared since the last cycle.
        self.networks.refresh_list();
        self.networks.refresh();

        Ok(self
            .networks
            .iter()
            .map(|(_, data)| NetworkCounters {
                packets_received: data.total_packets_received(),
                packets_sent: data.total_packets_transmitted(),
                bytes_received: data.total_received(),
                bytes_sent: data.total_transmitted(),
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_is_a_provider_error() {
        let err = ensure_platform(false).unwrap_err();
        assert!(matches!(err, SystemError::UnsupportedPlatform(_)));
        assert!(err.is_provider_error());
        assert!(ensure_platform(true).is_ok());
    }

    #[tokio::test]
    async fn test_cpu_in_range() {
        let mut collector = SystemCollector::new();
        let cpu = collector.sample_cpu().await.unwrap();
        assert!((0.0..=100.0).contains(&cpu));
    }

    #[tokio::test]
    async fn test_memory_in_range() {
        let mut collector = SystemCollector::new();
        let memory = collector.sample_memory().await.unwrap();
        assert!(memory > 0.0);
        assert!(memory <= 100.0);
    }

    #[tokio::test]
    async fn test_network_counters_do_not_decrease() {
        let mut collector = SystemCollector::new();
        let first = collector.sample_network().await.unwrap();
        let second = collector.sample_network().await.unwrap();

        assert!(second.bytes_received >= first.bytes_received);
        assert!(second.packets_received >= first.packets_received);
    }
}
