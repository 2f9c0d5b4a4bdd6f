//! Simulator configuration

use std::time::Duration;

/// Default serial port when the operator does not name one
pub const DEFAULT_PORT: &str = "COM11";

/// Fixed link speed expected by the host
pub const BAUD_RATE: u32 = 115_200;

/// Timing and failure injection for a collection sweep
#[derive(Debug, Clone)]
pub struct CollectionTiming {
    /// Simulated per-device latency before each reading
    pub per_device_delay: Duration,
    /// Pause between the last reading and the finished event
    pub settle_delay: Duration,
    /// Probability a device is simulated unreachable this sweep
    pub offline_probability: f64,
}

impl Default for CollectionTiming {
    fn default() -> Self {
        Self {
            per_device_delay: Duration::from_millis(300),
            settle_delay: Duration::from_millis(100),
            offline_probability: 0.05,
        }
    }
}

impl CollectionTiming {
    /// Timing with no delays, for tests
    pub fn immediate() -> Self {
        Self {
            per_device_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Top-level simulator configuration
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Serial port identifier
    pub port: String,
    pub baud_rate: u32,
    /// Hold delimiter-less input instead of flushing it as a command
    pub strict_framing: bool,
    pub timing: CollectionTiming,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.into(),
            baud_rate: BAUD_RATE,
            strict_framing: false,
            timing: CollectionTiming::default(),
        }
    }
}
