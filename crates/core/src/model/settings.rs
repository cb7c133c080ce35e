use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SCAN_DELAY_MS: u64 = 2_000;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1_500;
pub const DEFAULT_CELEBRATION_MS: u64 = 3_000;
pub const DEFAULT_CONFETTI_COUNT: u16 = 20;

/// Longest delay any simulation may be configured with.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Timings of the mocked "intelligence" and the quiz celebration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationSettings {
    scan_delay: Duration,
    reply_delay: Duration,
    celebration: Duration,
    confetti_count: u16,
}

/// Optional overrides as they arrive from args or environment.
#[derive(Clone, Debug, Default)]
pub struct SimulationSettingsDraft {
    pub scan_delay_ms: Option<u64>,
    pub reply_delay_ms: Option<u64>,
    pub celebration_ms: Option<u64>,
    pub confetti_count: Option<u16>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} must be at most {max} ms, got {value}", max = MAX_DELAY_MS)]
    TooLong { field: &'static str, value: u64 },
}

impl SimulationSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a delay is zero or above `MAX_DELAY_MS`, or
    /// the confetti count is zero.
    pub fn validate(self) -> Result<SimulationSettings, SettingsError> {
        let scan_delay = delay(
            "scan delay",
            self.scan_delay_ms.unwrap_or(DEFAULT_SCAN_DELAY_MS),
        )?;
        let reply_delay = delay(
            "reply delay",
            self.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS),
        )?;
        let celebration = delay(
            "celebration",
            self.celebration_ms.unwrap_or(DEFAULT_CELEBRATION_MS),
        )?;
        let confetti_count = self.confetti_count.unwrap_or(DEFAULT_CONFETTI_COUNT);
        if confetti_count == 0 {
            return Err(SettingsError::Zero {
                field: "confetti count",
            });
        }

        Ok(SimulationSettings {
            scan_delay,
            reply_delay,
            celebration,
            confetti_count,
        })
    }
}

fn delay(field: &'static str, ms: u64) -> Result<Duration, SettingsError> {
    if ms == 0 {
        return Err(SettingsError::Zero { field });
    }
    if ms > MAX_DELAY_MS {
        return Err(SettingsError::TooLong { field, value: ms });
    }
    Ok(Duration::from_millis(ms))
}

impl SimulationSettings {
    #[must_use]
    pub fn scan_delay(&self) -> Duration {
        self.scan_delay
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    #[must_use]
    pub fn celebration(&self) -> Duration {
        self.celebration
    }

    #[must_use]
    pub fn confetti_count(&self) -> u16 {
        self.confetti_count
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            scan_delay: Duration::from_millis(DEFAULT_SCAN_DELAY_MS),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            celebration: Duration::from_millis(DEFAULT_CELEBRATION_MS),
            confetti_count: DEFAULT_CONFETTI_COUNT,
        }
    }
}
