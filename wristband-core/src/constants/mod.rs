//! Constants for the wristband filter
//!
//! Numeric values used across the crate live here with a note on where
//! they come from.
//!
//! ## Organization
//!
//! - **Time**: sampling cadence of the recording loop
//! - **Activation**: output range of the motor mapping and label sizes
//! - **Presets**: tuned parameters for the wristband's sensor channels

/// Sampling cadence and time unit conversions.
pub mod time;

/// Motor activation output range and fixed buffer sizes.
pub mod activation;

/// Tuned filter parameters for the wristband sensor channels.
pub mod presets;

pub use time::{MS_PER_SECOND, RECORDING_DELAY_MS, RECORDING_SAMPLE_RATE_HZ};

pub use activation::{ACTIVATION_IDLE, ACTIVATION_MAX, ACTIVATION_MIN, MAX_NAME_LEN};
