//! Diagnostic snapshot of a filter
//!
//! The filter does not print anything itself. `FilterReport` captures the
//! values worth looking at; where they go (serial port, RTT, telemetry) is
//! up to the caller. The `Display` impl renders the block the wristband
//! firmware writes to its serial console:
//!
//! ```text
//! Data: skin_temp
//! 	Running mean: 33.10000
//! 	 Newest data: 33.40000
//! 	Newest delta: 0.30000
//! 	Min activati: 0.10000
//! 	Max activati: 1.00000
//! 	  Activation: 0.22222
//! ```

use core::fmt;

use heapless::String;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::activation::MAX_NAME_LEN;

/// Fixed-capacity data name label
pub type DataName = String<MAX_NAME_LEN>;

/// Build a label from `name`, cutting it at the last char that fits
pub(crate) fn truncated_name(name: &str) -> DataName {
    let mut label = DataName::new();
    for ch in name.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}

/// Point-in-time view of a filter's state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FilterReport {
    /// Data name the filter was created with
    pub name: DataName,
    /// Current running mean
    pub running_mean: f32,
    /// Most recent accepted sample (after the log transform, if any)
    pub latest_sample: f32,
    /// `latest_sample - running_mean`
    pub delta: f32,
    /// Dead-zone threshold
    pub min_activation: f32,
    /// Saturation threshold
    pub max_activation: f32,
    /// Activation for the latest sample
    pub activation: f32,
    /// Samples counted by the warm-up (frozen once warmed up)
    pub sample_count: u32,
    /// Whether the running mean uses the steady-state weight
    pub warmed_up: bool,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data: {}", self.name)?;
        writeln!(f, "\tRunning mean: {:.5}", self.running_mean)?;
        writeln!(f, "\t Newest data: {:.5}", self.latest_sample)?;
        writeln!(f, "\tNewest delta: {:.5}", self.delta)?;
        writeln!(f, "\tMin activati: {:.5}", self.min_activation)?;
        writeln!(f, "\tMax activati: {:.5}", self.max_activation)?;
        write!(f, "\t  Activation: {:.5}", self.activation)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{=str}: mean={} latest={} delta={} range=[{}, {}] activation={}",
            self.name.as_str(),
            self.running_mean,
            self.latest_sample,
            self.delta,
            self.min_activation,
            self.max_activation,
            self.activation,
        )
    }
}
