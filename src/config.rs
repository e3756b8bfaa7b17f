//! Timing configuration and derived tick counts.
//!
//! The driver counts in ticks, not in time. Every duration is converted
//! once, at construction, by truncating division through the caller's tick
//! period:
//!
//! ```text
//! debounce_ticks = DEBOUNCE_TIME_ms / tick_period_ms
//! hold_ticks     = hold_timeout_ms  / tick_period_ms
//! ```
//!
//! A quotient of zero (tick period longer than the duration) would leave a
//! countdown that can never be armed, so both counts are clamped to at
//! least one tick.

use embassy_time::Duration;

use crate::error::EncoderError;

/// Fixed button debounce time. Not configurable.
pub const DEBOUNCE_TIME: Duration = Duration::from_millis(50);

/// Tick period used by [`EncoderConfig::default()`].
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Hold timeout used by [`EncoderConfig::default()`].
pub const DEFAULT_HOLD_TIMEOUT: Duration = Duration::from_millis(500);

/// Timing configuration for an [`Encoder`](crate::Encoder).
///
/// Immutable once handed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Period at which the tick entry points are invoked.
    pub tick_period: Duration,
    /// How long the button must stay pressed before a hold is reported.
    pub hold_timeout: Duration,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD, DEFAULT_HOLD_TIMEOUT)
    }
}

impl EncoderConfig {
    /// Create a configuration from a tick period and a hold timeout.
    pub const fn new(tick_period: Duration, hold_timeout: Duration) -> Self {
        Self {
            tick_period,
            hold_timeout,
        }
    }

    /// Check that tick counts can be derived from this configuration.
    ///
    /// # Errors
    /// * [`EncoderError::ZeroTickPeriod`] if the tick period is under 1 ms
    pub fn validate(&self) -> Result<(), EncoderError> {
        if self.tick_period.as_millis() == 0 {
            return Err(EncoderError::ZeroTickPeriod);
        }
        Ok(())
    }

    /// Number of ticks the button must be sampled before a press is trusted.
    ///
    /// Only meaningful for a configuration that passes [`validate()`](Self::validate);
    /// an invalid tick period yields the guard value of 1.
    pub fn debounce_ticks(&self) -> u32 {
        self.ticks_for(DEBOUNCE_TIME)
    }

    /// Number of ticks after debounce before a press becomes a hold.
    pub fn hold_ticks(&self) -> u32 {
        self.ticks_for(self.hold_timeout)
    }

    fn ticks_for(&self, duration: Duration) -> u32 {
        let period_ms = self.tick_period.as_millis();
        if period_ms == 0 {
            return 1;
        }

        let ticks = duration.as_millis() / period_ms;
        if ticks == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "{} ms does not span one {} ms tick; using 1 tick",
                duration.as_millis(),
                period_ms
            );
            return 1;
        }

        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_ms(tick_ms: u64, hold_ms: u64) -> EncoderConfig {
        EncoderConfig::new(Duration::from_millis(tick_ms), Duration::from_millis(hold_ms))
    }

    #[test]
    fn ten_ms_tick_derives_documented_counts() {
        let config = config_ms(10, 200);
        assert_eq!(config.debounce_ticks(), 5);
        assert_eq!(config.hold_ticks(), 20);
    }

    #[test]
    fn division_truncates() {
        // 50 / 15 = 3.33, 200 / 15 = 13.33
        let config = config_ms(15, 200);
        assert_eq!(config.debounce_ticks(), 3);
        assert_eq!(config.hold_ticks(), 13);
    }

    #[test]
    fn tick_longer_than_debounce_clamps_to_one() {
        let config = config_ms(80, 1000);
        assert_eq!(config.debounce_ticks(), 1);
        assert_eq!(config.hold_ticks(), 12);
    }

    #[test]
    fn tick_longer_than_hold_clamps_to_one() {
        let config = config_ms(100, 40);
        assert_eq!(config.hold_ticks(), 1);
    }

    #[test]
    fn zero_hold_timeout_clamps_to_one() {
        let config = config_ms(10, 0);
        assert_eq!(config.hold_ticks(), 1);
    }

    #[test]
    fn zero_tick_period_is_rejected() {
        let config = config_ms(0, 200);
        assert_eq!(config.validate(), Err(EncoderError::ZeroTickPeriod));
        assert_eq!(config.debounce_ticks(), 1);
        assert_eq!(config.hold_ticks(), 1);
    }

    #[test]
    fn sub_millisecond_tick_period_is_rejected() {
        let config = EncoderConfig::new(Duration::from_micros(500), Duration::from_millis(200));
        assert_eq!(config.validate(), Err(EncoderError::ZeroTickPeriod));
    }

    #[test]
    fn default_config_is_valid() {
        let config = EncoderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce_ticks(), 5);
        assert_eq!(config.hold_ticks(), 50);
    }
}
