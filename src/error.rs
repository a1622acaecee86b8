//! Error handling for the hostpulse exporter.

/// A specialized `Result` type for hostpulse operations.
pub type Result<T> = std::result::Result<T, SystemError>;

/// The main error type for hostpulse operations.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// CPU utilization could not be sampled
    #[error("CPU sampling failed: {0}")]
    Cpu(String),

    /// Memory utilization could not be sampled
    #[error("Memory sampling failed: {0}")]
    Memory(String),

    /// Network counters could not be sampled
    #[error("Network sampling failed: {0}")]
    Network(String),

    /// The host platform is not supported by the metrics backend
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Response body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),
}

impl SystemError {
    /// Create a new CPU sampling error
    pub fn cpu_error(msg: impl Into<String>) -> Self {
        Self::Cpu(msg.into())
    }

    /// Create a new memory sampling error
    pub fn memory_error(msg: impl Into<String>) -> Self {
        Self::Memory(msg.into())
    }

    /// Create a new network sampling error
    pub fn network_error(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new unsupported platform error
    pub fn unsupported_platform(msg: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(msg.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Whether this error came from the metrics provider.
    ///
    /// Provider errors are transient: the sampler skips the cycle and tries
    /// again on the next tick.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::Cpu(_) | Self::Memory(_) | Self::Network(_) | Self::UnsupportedPlatform(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_classification() {
        assert!(SystemError::cpu_error("busy").is_provider_error());
        assert!(SystemError::memory_error("busy").is_provider_error());
        assert!(SystemError::network_error("counters unavailable").is_provider_error());
        assert!(SystemError::unsupported_platform("plan9").is_provider_error());
        assert!(!SystemError::web_server_error("bind").is_provider_error());
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SystemError::from(json_err);
        assert!(matches!(err, SystemError::Serialization(_)));
        assert!(!err.is_provider_error());
    }
}
