//! Timer configuration
//!
//! How long each pose is held and how long the vibration pulse lasts.

/// Default seconds a pose is displayed before auto-advancing
pub const DEFAULT_INTERVAL_S: u16 = 60;

/// Default vibration pulse length
pub const DEFAULT_PULSE_MS: u16 = 100;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Interval must be at least one second
    ZeroInterval,
    /// Pulse must be non-zero and shorter than one tick
    InvalidPulse,
}

/// Pose timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Seconds per pose while running
    pub interval_s: u16,
    /// Haptic pulse duration in milliseconds
    pub pulse_ms: u16,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            interval_s: DEFAULT_INTERVAL_S,
            pulse_ms: DEFAULT_PULSE_MS,
        }
    }
}

impl TimerConfig {
    /// Create and validate a timer configuration
    pub fn new(interval_s: u16, pulse_ms: u16) -> Result<Self, ConfigError> {
        let config = Self {
            interval_s,
            pulse_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_s == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        // The pulse has to end before the next one-second tick
        if self.pulse_ms == 0 || self.pulse_ms >= 1000 {
            return Err(ConfigError::InvalidPulse);
        }
        Ok(())
    }
}
