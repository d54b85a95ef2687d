//! Activation Output Constants

/// Full activation in the negative direction.
pub const ACTIVATION_MIN: f32 = -1.0;

/// Full activation in the positive direction.
pub const ACTIVATION_MAX: f32 = 1.0;

/// Output inside the dead zone (motor off).
pub const ACTIVATION_IDLE: f32 = 0.0;

/// Capacity of the data name label (bytes).
///
/// Long enough for channel names such as `"skin_temperature_left"`,
/// small enough to keep the filter on the stack.
pub const MAX_NAME_LEN: usize = 24;
