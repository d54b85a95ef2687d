//! Sensor Channel Presets
//!
//! Filter parameters tuned on the wristband. Thresholds are in the units
//! the filter sees, i.e. after the optional `log10` transform.

// ===== SKIN TEMPERATURE =====

/// Smoothing window for skin temperature (seconds).
///
/// Skin temperature drifts over minutes; a 30 s mean tracks the drift
/// while short warm/cool events still stand out.
pub const SKIN_TEMP_SMOOTHING_S: f32 = 30.0;

/// Deviation from the mean below which the motor stays off (°C).
///
/// Roughly the noise floor of a thermistor on skin.
pub const SKIN_TEMP_MIN_ACTIVATION_C: f32 = 0.1;

/// Deviation from the mean that drives the motor fully (°C).
pub const SKIN_TEMP_MAX_ACTIVATION_C: f32 = 1.0;

// ===== LOG-SCALED CHANNELS =====

/// Smoothing window for log-scaled channels (seconds).
///
/// Used for skin conductance or light readings that span decades.
pub const LOG_SCALED_SMOOTHING_S: f32 = 10.0;

/// Dead-zone threshold for log-scaled channels (decades).
pub const LOG_SCALED_MIN_ACTIVATION: f32 = 0.05;

/// Saturation threshold for log-scaled channels (decades).
///
/// Half a decade is a factor of ~3.2 away from the running mean.
pub const LOG_SCALED_MAX_ACTIVATION: f32 = 0.5;
