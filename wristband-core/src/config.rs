//! Filter configuration
//!
//! `FilterConfig` carries the construction parameters of a
//! [`SensorFilter`](crate::SensorFilter) and the fail-fast checks the
//! unchecked constructor skips.
//!
//! ```rust
//! use wristband_core::FilterConfig;
//!
//! let config = FilterConfig::default()
//!     .with_log_scale(true)
//!     .with_smoothing_duration(8.0)
//!     .with_activation_range(0.05, 0.4);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.smoothing_constant(), 1.0 / (15.625 * 8.0));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    activation::ActivationBand,
    constants::{
        presets::{
            LOG_SCALED_MAX_ACTIVATION, LOG_SCALED_MIN_ACTIVATION, LOG_SCALED_SMOOTHING_S,
            SKIN_TEMP_MAX_ACTIVATION_C, SKIN_TEMP_MIN_ACTIVATION_C, SKIN_TEMP_SMOOTHING_S,
        },
        time::{sample_rate_for_period_ms, RECORDING_SAMPLE_RATE_HZ},
    },
    errors::{FilterError, FilterResult},
};

/// Construction parameters for a sensor filter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// Take `log10` of every sample before filtering.
    /// Only for sensors that never report zero or negative values.
    pub use_log: bool,

    /// Time window of the running mean in seconds.
    /// Must be at least one sample period (`1 / sample_rate_hz`).
    pub smoothing_duration_s: f32,

    /// Deviation from the running mean that still gives zero activation
    pub min_activation: f32,

    /// Deviation from the running mean that gives full activation
    pub max_activation: f32,

    /// Rate at which `update` is called, in samples per second
    pub sample_rate_hz: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            use_log: false,
            smoothing_duration_s: SKIN_TEMP_SMOOTHING_S,
            min_activation: SKIN_TEMP_MIN_ACTIVATION_C,
            max_activation: SKIN_TEMP_MAX_ACTIVATION_C,
            sample_rate_hz: RECORDING_SAMPLE_RATE_HZ,
        }
    }
}

impl FilterConfig {
    /// Skin temperature channel in °C, sampled by the recording loop
    pub fn skin_temperature() -> Self {
        Self::default()
    }

    /// Channel spanning several decades (skin conductance, light)
    pub fn log_scaled() -> Self {
        Self {
            use_log: true,
            smoothing_duration_s: LOG_SCALED_SMOOTHING_S,
            min_activation: LOG_SCALED_MIN_ACTIVATION,
            max_activation: LOG_SCALED_MAX_ACTIVATION,
            sample_rate_hz: RECORDING_SAMPLE_RATE_HZ,
        }
    }

    /// Enable or disable the `log10` transform
    pub fn with_log_scale(mut self, use_log: bool) -> Self {
        self.use_log = use_log;
        self
    }

    /// Set the running-mean window in seconds
    pub fn with_smoothing_duration(mut self, seconds: f32) -> Self {
        self.smoothing_duration_s = seconds;
        self
    }

    /// Set dead-zone and saturation thresholds
    pub fn with_activation_range(mut self, min: f32, max: f32) -> Self {
        self.min_activation = min;
        self.max_activation = max;
        self
    }

    /// Set the sample rate directly in Hz
    pub fn with_sample_rate(mut self, hz: f32) -> Self {
        self.sample_rate_hz = hz;
        self
    }

    /// Set the sample rate from the sampling timer period
    pub fn for_period_ms(mut self, period_ms: u32) -> Self {
        self.sample_rate_hz = sample_rate_for_period_ms(period_ms);
        self
    }

    /// EMA weight once warm-up has finished: `1 / (rate * duration)`
    pub fn smoothing_constant(&self) -> f32 {
        1.0 / (self.sample_rate_hz * self.smoothing_duration_s)
    }

    /// Activation thresholds as a band, without checking them
    pub fn band(&self) -> ActivationBand {
        ActivationBand::new(self.min_activation, self.max_activation)
    }

    /// Check the parameters produce a usable filter
    ///
    /// Catches the configurations that would otherwise silently give wrong
    /// activation values: a smoothing constant outside `(0, 1]` and an
    /// empty or inverted activation range.
    pub fn validate(&self) -> FilterResult<()> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(FilterError::InvalidSampleRate {
                sample_rate: self.sample_rate_hz,
            });
        }

        let min_duration = 1.0 / self.sample_rate_hz;
        // A window of exactly one sample is allowed: the mean then follows
        // the latest sample.
        if self.smoothing_duration_s.is_nan() || self.smoothing_duration_s < min_duration {
            return Err(FilterError::SmoothingTooShort {
                duration: self.smoothing_duration_s,
                min_duration,
            });
        }

        // Rounding at the one-sample edge can still push the constant past 1
        let constant = self.smoothing_constant();
        if constant > 1.0 {
            return Err(FilterError::SmoothingTooShort {
                duration: self.smoothing_duration_s,
                min_duration,
            });
        }
        // rate * duration overflowed, the constant collapsed to zero
        if constant <= 0.0 {
            return Err(FilterError::SmoothingTooLong {
                duration: self.smoothing_duration_s,
            });
        }

        ActivationBand::try_new(self.min_activation, self.max_activation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_recording_cadence() {
        let config = FilterConfig::default();
        assert_eq!(config.sample_rate_hz, 15.625);
        assert!(!config.use_log);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn presets_are_valid() {
        assert!(FilterConfig::skin_temperature().validate().is_ok());

        let log = FilterConfig::log_scaled();
        assert!(log.use_log);
        assert!(log.validate().is_ok());
    }

    #[test]
    fn smoothing_constant_from_rate_and_duration() {
        let config = FilterConfig::default()
            .with_sample_rate(10.0)
            .with_smoothing_duration(2.0);
        assert_eq!(config.smoothing_constant(), 0.05);
    }

    #[test]
    fn period_sets_rate() {
        let config = FilterConfig::default().for_period_ms(100);
        assert_eq!(config.sample_rate_hz, 10.0);
    }

    #[test]
    fn rejects_bad_sample_rate() {
        let zero = FilterConfig::default().for_period_ms(0);
        assert!(matches!(
            zero.validate(),
            Err(FilterError::InvalidSampleRate { .. })
        ));

        let nan = FilterConfig::default().with_sample_rate(f32::NAN);
        assert!(matches!(
            nan.validate(),
            Err(FilterError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn rejects_window_shorter_than_one_sample() {
        // 10 Hz -> one sample is 0.1 s
        let config = FilterConfig::default()
            .with_sample_rate(10.0)
            .with_smoothing_duration(0.05);
        assert!(matches!(
            config.validate(),
            Err(FilterError::SmoothingTooShort { .. })
        ));

        // Exactly one sample period is the edge that still works
        let edge = config.with_smoothing_duration(0.1);
        assert!(edge.validate().is_ok());
        assert_eq!(edge.smoothing_constant(), 1.0);
    }

    #[test]
    fn rejects_constant_rounded_above_one() {
        // 5.125 * (1 / 5.125) rounds just below 1 in f32
        let config = FilterConfig::default()
            .with_sample_rate(5.125)
            .with_smoothing_duration(1.0 / 5.125);
        assert!(config.smoothing_constant() > 1.0);
        assert!(matches!(
            config.validate(),
            Err(FilterError::SmoothingTooShort { .. })
        ));
    }

    #[test]
    fn one_period_windows_never_exceed_unit_constant() {
        for tenths in 1..2000u32 {
            let rate = tenths as f32 / 10.0;
            let config = FilterConfig::default()
                .with_sample_rate(rate)
                .with_smoothing_duration(1.0 / rate);
            let constant = config.smoothing_constant();
            assert_eq!(config.validate().is_ok(), constant <= 1.0, "rate {}", rate);
        }
    }

    #[test]
    fn rejects_overflowing_window() {
        let config = FilterConfig::default()
            .with_sample_rate(1e20)
            .with_smoothing_duration(1e20);
        assert_eq!(config.smoothing_constant(), 0.0);
        assert_eq!(
            config.validate(),
            Err(FilterError::SmoothingTooLong { duration: 1e20 })
        );

        let endless = FilterConfig::default().with_smoothing_duration(f32::INFINITY);
        assert!(matches!(
            endless.validate(),
            Err(FilterError::SmoothingTooLong { .. })
        ));
    }

    #[test]
    fn rejects_inverted_activation_range() {
        let config = FilterConfig::default().with_activation_range(1.0, 0.5);
        assert!(matches!(
            config.validate(),
            Err(FilterError::InvalidActivationRange { .. })
        ));

        let empty = FilterConfig::default().with_activation_range(0.5, 0.5);
        assert!(empty.validate().is_err());

        let negative = FilterConfig::default().with_activation_range(-0.1, 0.5);
        assert!(negative.validate().is_err());
    }
}
