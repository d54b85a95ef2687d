//! Time-Related Constants
//!
//! The filter itself never reads a clock. These values describe the
//! cadence the sampling timer is expected to run at, since the smoothing
//! constant is derived from it.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

// ===== SAMPLING CADENCE =====

/// Delay between two recordings (milliseconds).
///
/// The wristband samples every sensor channel from one 64 ms timer.
pub const RECORDING_DELAY_MS: u32 = 64;

/// Sample rate of the recording loop (Hz).
///
/// `1000 / 64 = 15.625` samples per second.
pub const RECORDING_SAMPLE_RATE_HZ: f32 = MS_PER_SECOND as f32 / RECORDING_DELAY_MS as f32;

/// Sample rate in Hz for a timer firing every `period_ms` milliseconds.
///
/// A zero period yields `0.0`, which every checked constructor rejects.
pub fn sample_rate_for_period_ms(period_ms: u32) -> f32 {
    if period_ms == 0 {
        return 0.0;
    }
    MS_PER_SECOND as f32 / period_ms as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_rate_matches_period() {
        assert_eq!(RECORDING_SAMPLE_RATE_HZ, 15.625);
        assert_eq!(sample_rate_for_period_ms(100), 10.0);
        assert_eq!(sample_rate_for_period_ms(0), 0.0);
    }
}
