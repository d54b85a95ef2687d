//! Error Types for Filter Configuration and Sample Rejection
//!
//! ## Design
//!
//! The filter runs inside a sampling timer callback, so errors follow the
//! same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: all error data is inline floats and sizes.
//! 2. **Copy Semantics**: errors are returned from the hot path and may be
//!    stored next to a tick result.
//!
//! ## Error Categories
//!
//! ### Misconfiguration
//! Returned by the checked constructors (`FilterConfig::validate`,
//! `SensorFilter::from_config`, `ActivationBand::try_new`):
//! - `InvalidSampleRate`: sample rate not positive
//! - `SmoothingTooShort`: smoothing window shorter than one sample period
//! - `SmoothingTooLong`: window so long the smoothing constant reaches zero
//! - `InvalidActivationRange`: thresholds not ordered `0 <= min < max`
//! - `NameTooLong`: data name does not fit the fixed-capacity label
//!
//! ### Invalid Samples
//! Produced when `SensorFilter::update` drops a sample. The filter state is
//! left untouched in both cases:
//! - `NonPositiveLogSample`: zero or negative value on a log-scaled channel
//! - `NonFiniteSample`: NaN or infinity
//!
//! ```rust
//! use wristband_core::{FilterError, SensorFilter};
//!
//! let mut filter = SensorFilter::new(true, 4.0, 0.05, 0.5, 15.625, "gsr");
//! match filter.try_update(-3.0) {
//!     Ok(_) => {}
//!     Err(FilterError::NonPositiveLogSample { value }) => {
//!         // Sensor glitch, the running mean is unchanged
//!         assert_eq!(value, -3.0);
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Sample rate must be a positive, finite number of samples per second
    #[error("Sample rate {sample_rate} Hz must be positive")]
    InvalidSampleRate {
        /// Configured sample rate
        sample_rate: f32,
    },

    /// Smoothing window shorter than one sample period
    #[error("Smoothing duration {duration}s is shorter than one sample period ({min_duration}s)")]
    SmoothingTooShort {
        /// Configured smoothing duration in seconds
        duration: f32,
        /// Shortest usable duration, `1 / sample_rate`
        min_duration: f32,
    },

    /// Smoothing window so long the smoothing constant underflows to zero
    #[error("Smoothing duration {duration}s is too long, smoothing constant is zero")]
    SmoothingTooLong {
        /// Configured smoothing duration in seconds
        duration: f32,
    },

    /// Activation thresholds do not satisfy `0 <= min < max`
    #[error("Activation range [{min}, {max}] is invalid")]
    InvalidActivationRange {
        /// Dead-zone threshold
        min: f32,
        /// Saturation threshold
        max: f32,
    },

    /// Data name longer than the fixed label capacity
    #[error("Data name exceeds {max_len} bytes")]
    NameTooLong {
        /// Label capacity in bytes
        max_len: usize,
    },

    /// Zero or negative sample on a log-scaled channel
    #[error("Sample {value} is not positive, log10 undefined")]
    NonPositiveLogSample {
        /// The rejected raw sample
        value: f32,
    },

    /// Sample is NaN or infinite
    #[error("Invalid sample: not a finite number")]
    NonFiniteSample,
}

impl FilterError {
    /// True for errors produced by a dropped sample rather than a bad config
    pub fn is_sample_error(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveLogSample { .. } | Self::NonFiniteSample
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidSampleRate { sample_rate } =>
                defmt::write!(fmt, "Sample rate {} Hz not positive", sample_rate),
            Self::SmoothingTooShort { duration, min_duration } =>
                defmt::write!(fmt, "Smoothing {}s < {}s", duration, min_duration),
            Self::SmoothingTooLong { duration } =>
                defmt::write!(fmt, "Smoothing {}s too long", duration),
            Self::InvalidActivationRange { min, max } =>
                defmt::write!(fmt, "Activation range [{}, {}] invalid", min, max),
            Self::NameTooLong { max_len } =>
                defmt::write!(fmt, "Name exceeds {} bytes", max_len),
            Self::NonPositiveLogSample { value } =>
                defmt::write!(fmt, "Log sample {} not positive", value),
            Self::NonFiniteSample =>
                defmt::write!(fmt, "Sample not finite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_errors_are_classified() {
        assert!(FilterError::NonFiniteSample.is_sample_error());
        assert!(FilterError::NonPositiveLogSample { value: 0.0 }.is_sample_error());
        assert!(!FilterError::InvalidSampleRate { sample_rate: 0.0 }.is_sample_error());
        assert!(!FilterError::NameTooLong { max_len: 24 }.is_sample_error());
        assert!(!FilterError::SmoothingTooLong { duration: 1e30 }.is_sample_error());
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_carry_values() {
        let err = FilterError::InvalidActivationRange { min: 2.0, max: 1.0 };
        assert_eq!(err.to_string(), "Activation range [2, 1] is invalid");
    }
}
