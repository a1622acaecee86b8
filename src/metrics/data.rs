//! Data structures for host metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Textual format of [`Snapshot::time`], e.g. `2024-01-15 10:30:00.123Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3fZ";

/// The metrics captured by one sampling cycle.
///
/// A `Snapshot` is never mutated after it has been published; a new one
/// replaces it wholesale on the next successful cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Capture time in UTC, formatted with [`TIMESTAMP_FORMAT`]. Empty until
    /// the first successful sample.
    #[serde(rename = "time")]
    pub timestamp: String,
    /// Aggregate CPU utilization across all cores (0.0 to 100.0)
    #[serde(rename = "cpu_perc")]
    pub cpu_percent: f64,
    /// Physical memory in use (0.0 to 100.0)
    #[serde(rename = "memory_perc")]
    pub memory_percent: f64,
    /// Cumulative packets received across all interfaces.
    ///
    /// Despite the wire name this is a raw counter, not a per-interval delta.
    pub rx_rate: u64,
    /// Cumulative packets sent across all interfaces. Also a raw counter.
    pub tx_rate: u64,
    /// Cumulative bytes received across all interfaces
    pub rx_bytes: u64,
    /// Cumulative bytes sent across all interfaces
    pub tx_bytes: u64,
}

/// Network counters summed over every interface on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkCounters {
    pub packets_received: u64,
    pub packets_sent: u64,
    pub bytes_received: u64,
    pub bytes_sent: u64,
}

impl std::iter::Sum for NetworkCounters {
    /// Sum per-interface counters. An empty iterator yields all zeros.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| Self {
            packets_received: acc.packets_received.saturating_add(c.packets_received),
            packets_sent: acc.packets_sent.saturating_add(c.packets_sent),
            bytes_received: acc.bytes_received.saturating_add(c.bytes_received),
            bytes_sent: acc.bytes_sent.saturating_add(c.bytes_sent),
        })
    }
}

impl Snapshot {
    /// Assemble a snapshot from one cycle's readings.
    pub fn from_readings(
        captured_at: DateTime<Utc>,
        cpu_percent: f64,
        memory_percent: f64,
        network: NetworkCounters,
    ) -> Self {
        Self {
            timestamp: format_timestamp(captured_at),
            cpu_percent,
            memory_percent,
            rx_rate: network.packets_received,
            tx_rate: network.packets_sent,
            rx_bytes: network.bytes_received,
            tx_bytes: network.bytes_sent,
        }
    }

    /// Whether this is the zero-value snapshot served before the first sample.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Format a capture time the way it appears in the JSON body.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
