//! Collaborator traits
//!
//! The filter sits between three pieces of hardware-facing code that live
//! outside this crate: the sensor that produces samples, the motor driver
//! that consumes activations, and whatever channel diagnostics are written
//! to. These traits are the seams [`FeedbackLoop`](crate::FeedbackLoop)
//! plugs them into.
//!
//! Sample sources follow a pull-based, non-blocking model using `nb`, so a
//! timer callback can poll without an async runtime:
//!
//! ```rust
//! use wristband_core::traits::SampleSource;
//!
//! struct Thermistor {
//!     ready: Option<f32>,
//! }
//!
//! impl SampleSource for Thermistor {
//!     type Error = core::convert::Infallible;
//!
//!     fn poll_sample(&mut self) -> nb::Result<f32, Self::Error> {
//!         self.ready.take().ok_or(nb::Error::WouldBlock)
//!     }
//! }
//! ```

use crate::report::FilterReport;

/// Source of raw sensor readings
///
/// Two-level error model:
/// - `nb::Error::WouldBlock` - no new reading this tick
/// - `nb::Error::Other(E)` - the sensor failed
pub trait SampleSource {
    /// Sensor or bus error
    type Error;

    /// Read the next raw sample if one is available
    ///
    /// Must not block.
    fn poll_sample(&mut self) -> nb::Result<f32, Self::Error>;
}

/// Consumer of activation values, usually a vibration motor driver
pub trait Actuator {
    /// Driver error
    type Error;

    /// Apply an activation in `[-1, 1]`
    fn drive(&mut self, activation: f32) -> Result<(), Self::Error>;
}

/// Destination for diagnostic reports
pub trait ReportSink {
    /// Write one report
    fn emit(&mut self, report: &FilterReport);
}

/// Reports go to the `log` facade at info level
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[cfg(feature = "log")]
impl ReportSink for LogSink {
    fn emit(&mut self, report: &FilterReport) {
        log::info!("{}", report);
    }
}
