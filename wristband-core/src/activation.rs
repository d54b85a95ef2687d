//! Piecewise-linear activation mapping
//!
//! Maps the deviation of a sample from the running mean onto a motor
//! activation in `[-1, 1]`:
//!
//! ```text
//!  activation
//!     1 |                 ________
//!       |                /
//!     0 |_______________/
//!       |      dead zone  min   max      |delta|
//! ```
//!
//! - `|delta| < min`: dead zone, `0`
//! - `|delta| > max`: saturated, `±1`
//! - in between: `(|delta| - min) / (max - min)`, signed like `delta`
//!
//! The mapping is continuous at both thresholds.

use libm::fabsf;

use crate::{
    constants::activation::{ACTIVATION_IDLE, ACTIVATION_MAX, ACTIVATION_MIN},
    errors::{FilterError, FilterResult},
};

/// Dead-zone and saturation thresholds of the activation mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationBand {
    min: f32,
    max: f32,
}

impl ActivationBand {
    /// Band without checks; the caller guarantees `0 <= min < max`
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Band with `0 <= min < max` enforced
    pub fn try_new(min: f32, max: f32) -> FilterResult<Self> {
        // Written so NaN thresholds fail too
        let ordered = min >= 0.0 && max > min && max.is_finite();
        if !ordered {
            return Err(FilterError::InvalidActivationRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Dead-zone threshold
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Saturation threshold
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Whether `delta` falls inside the dead zone
    pub fn in_dead_zone(&self, delta: f32) -> bool {
        fabsf(delta) < self.min
    }

    /// Activation for a deviation from the running mean
    ///
    /// A NaN deviation maps to `0` so a bad reading never drives the motor.
    pub fn map(&self, delta: f32) -> f32 {
        if delta.is_nan() {
            return ACTIVATION_IDLE;
        }

        let magnitude = fabsf(delta);
        if magnitude < self.min {
            return ACTIVATION_IDLE;
        }
        if magnitude > self.max {
            return if delta > 0.0 { ACTIVATION_MAX } else { ACTIVATION_MIN };
        }

        let scaled = (magnitude - self.min) / (self.max - self.min);
        if delta > 0.0 {
            scaled
        } else {
            -scaled
        }
    }
}
