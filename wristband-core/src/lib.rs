//! Running-mean sensor filter for biofeedback wristbands
//!
//! Smooths a noisy sensor channel with an exponential moving average and
//! maps how far each new sample sits from that mean onto a motor
//! activation in `[-1, 1]`.
//!
//! Key constraints:
//! - Runs inside a single periodic sampling context (timer callback)
//! - No heap allocation, fixed-size state only
//! - Works without `std` (enable the `embedded` feature for `defmt`)
//!
//! ```no_run
//! use wristband_core::{FilterConfig, SensorFilter};
//!
//! let config = FilterConfig::skin_temperature();
//! let mut filter = SensorFilter::from_config(config, "skin_temp")?;
//!
//! // Called from the sampling timer every 64 ms
//! filter.update(33.1);
//! let motor = filter.activation();
//! assert!((-1.0..=1.0).contains(&motor));
//! # Ok::<(), wristband_core::FilterError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging; expands to nothing when the `log` feature is off
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod activation;
pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod filter;
pub mod report;
pub mod traits;
pub mod warmup;

// Public API
pub use activation::ActivationBand;
pub use config::FilterConfig;
pub use control::{FeedbackLoop, LoopError, TickOutcome};
pub use errors::{FilterError, FilterResult};
pub use filter::{SampleOutcome, SensorFilter};
pub use report::FilterReport;
pub use traits::{Actuator, ReportSink, SampleSource};
pub use warmup::WarmupWeight;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
