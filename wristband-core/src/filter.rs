//! Running-mean sensor filter
//!
//! ## Overview
//!
//! `SensorFilter` holds the state of one sensor channel:
//! - an exponential moving average of the accepted samples,
//! - the latest accepted sample,
//! - the warm-up counter that weights early samples `1/k`.
//!
//! Samples are pushed in with [`SensorFilter::update`] at the cadence the
//! filter was configured for. [`SensorFilter::activation`] turns the latest
//! sample's distance from the mean into a motor activation in `[-1, 1]`.
//!
//! ## Log-Scaled Channels
//!
//! With `use_log` set every sample is replaced by its `log10` before it
//! touches the mean, and thresholds are read in decades. Zero and negative
//! readings have no logarithm; they are dropped and leave the filter
//! exactly as it was. NaN and infinite readings are dropped the same way
//! on every channel.
//!
//! ## Update Step
//!
//! ```text
//! x  = use_log ? log10(sample) : sample
//! w  = warm-up weight (1/k, then smoothing_constant)
//! mean = x * w + mean * (1 - w)
//! latest = x
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use wristband_core::SensorFilter;
//!
//! // 30 s window at 10 Hz, dead zone 0.1, saturation at 1.0
//! let mut filter = SensorFilter::new(false, 30.0, 0.1, 1.0, 10.0, "skin_temp");
//!
//! filter.update(32.0);
//! filter.update(34.0);
//! assert_eq!(filter.running_mean(), 33.0);
//!
//! // Latest sample is 1.0 above the mean: full activation
//! assert_eq!(filter.activation(), 1.0);
//! ```

use libm::log10f;

use crate::{
    activation::ActivationBand,
    config::FilterConfig,
    constants::activation::MAX_NAME_LEN,
    errors::{FilterError, FilterResult},
    report::{truncated_name, DataName, FilterReport},
    warmup::WarmupWeight,
};

/// What `update` did with a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    /// Sample went into the running mean; carries the value used
    /// (after the log transform, if any)
    Accepted(f32),
    /// Sample was dropped and the filter is unchanged
    Rejected(FilterError),
}

impl SampleOutcome {
    /// Whether the sample changed the filter
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Convert into a `Result`, rejection as the error
    pub fn into_result(self) -> FilterResult<f32> {
        match self {
            Self::Accepted(value) => Ok(value),
            Self::Rejected(err) => Err(err),
        }
    }
}

/// Exponential moving average with warm-up and activation mapping
#[derive(Debug, Clone)]
pub struct SensorFilter {
    use_log: bool,
    band: ActivationBand,
    weight: WarmupWeight,
    running_mean: f32,
    latest_sample: f32,
    name: DataName,
}

impl SensorFilter {
    /// Create a filter without checking the parameters
    ///
    /// - `use_log`: take `log10` of samples first; never set for sensors
    ///   that can read zero or below
    /// - `smoothing_duration`: running-mean window in seconds, expected to
    ///   be greater than `1 / sample_rate`
    /// - `min_activation`, `max_activation`: dead-zone and saturation
    ///   thresholds, expected `0 <= min < max`
    /// - `sample_rate`: calls to `update` per second
    /// - `name`: label for reports, cut to
    ///   [`MAX_NAME_LEN`](crate::constants::MAX_NAME_LEN) bytes
    ///
    /// Use [`SensorFilter::from_config`] to have the parameters checked.
    pub fn new(
        use_log: bool,
        smoothing_duration: f32,
        min_activation: f32,
        max_activation: f32,
        sample_rate: f32,
        name: &str,
    ) -> Self {
        let smoothing_constant = 1.0 / (sample_rate * smoothing_duration);

        Self {
            use_log,
            band: ActivationBand::new(min_activation, max_activation),
            weight: WarmupWeight::new(smoothing_constant),
            running_mean: 0.0,
            latest_sample: 0.0,
            name: truncated_name(name),
        }
    }

    /// Create a filter from a validated configuration
    ///
    /// Fails on any configuration [`FilterConfig::validate`] rejects and on
    /// names longer than the label capacity.
    pub fn from_config(config: FilterConfig, name: &str) -> FilterResult<Self> {
        config.validate()?;
        if name.len() > MAX_NAME_LEN {
            return Err(FilterError::NameTooLong {
                max_len: MAX_NAME_LEN,
            });
        }

        Ok(Self::new(
            config.use_log,
            config.smoothing_duration_s,
            config.min_activation,
            config.max_activation,
            config.sample_rate_hz,
            name,
        ))
    }

    /// Feed one raw sample into the running mean
    ///
    /// Two kinds of sample are dropped:
    /// - zero or negative samples on a log channel, which have no `log10`
    /// - NaN and infinite samples on any channel, `+inf` on log channels
    ///   included. This is a guard on top of the plain EMA, which would
    ///   take such a sample in and never recover from it.
    ///
    /// A dropped sample leaves every part of the filter untouched, including
    /// the latest sample and the warm-up count. The outcome can be ignored.
    pub fn update(&mut self, sample: f32) -> SampleOutcome {
        let value = match self.transform(sample) {
            Ok(value) => value,
            Err(err) => {
                log_debug!("{}: dropped sample {}: {}", self.name, sample, err);
                return SampleOutcome::Rejected(err);
            }
        };

        let w = self.weight.next_weight();
        self.running_mean = value * w + self.running_mean * (1.0 - w);
        self.latest_sample = value;

        log_trace!("{}: sample={} weight={} mean={}", self.name, value, w, self.running_mean);
        SampleOutcome::Accepted(value)
    }

    /// Same as [`update`](Self::update), with a rejection returned as `Err`
    pub fn try_update(&mut self, sample: f32) -> FilterResult<f32> {
        self.update(sample).into_result()
    }

    fn transform(&self, sample: f32) -> FilterResult<f32> {
        if !sample.is_finite() {
            return Err(FilterError::NonFiniteSample);
        }
        if !self.use_log {
            return Ok(sample);
        }
        if sample <= 0.0 {
            return Err(FilterError::NonPositiveLogSample { value: sample });
        }
        Ok(log10f(sample))
    }

    /// Activation for `sample` against the current running mean
    ///
    /// `sample` is compared as given; on a log channel pass a value that is
    /// already in `log10` units.
    pub fn activation_for(&self, sample: f32) -> f32 {
        self.band.map(sample - self.running_mean)
    }

    /// Activation for the latest accepted sample
    pub fn activation(&self) -> f32 {
        self.activation_for(self.latest_sample)
    }

    /// Current running mean
    pub fn running_mean(&self) -> f32 {
        self.running_mean
    }

    /// Latest accepted sample, `0.0` before the first one
    pub fn latest_sample(&self) -> f32 {
        self.latest_sample
    }

    /// `latest_sample - running_mean`
    pub fn delta(&self) -> f32 {
        self.latest_sample - self.running_mean
    }

    /// Steady-state EMA weight
    pub fn smoothing_constant(&self) -> f32 {
        self.weight.smoothing_constant()
    }

    /// Accepted samples counted during warm-up
    pub fn sample_count(&self) -> u32 {
        self.weight.sample_count()
    }

    /// Whether the mean has switched to the steady-state weight
    pub fn is_warmed_up(&self) -> bool {
        self.weight.is_warmed_up()
    }

    /// Whether samples are log-transformed
    pub fn uses_log(&self) -> bool {
        self.use_log
    }

    /// Activation thresholds
    pub fn band(&self) -> ActivationBand {
        self.band
    }

    /// Data name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Snapshot for diagnostics
    pub fn report(&self) -> FilterReport {
        FilterReport {
            name: self.name.clone(),
            running_mean: self.running_mean,
            latest_sample: self.latest_sample,
            delta: self.delta(),
            min_activation: self.band.min(),
            max_activation: self.band.max(),
            activation: self.activation(),
            sample_count: self.sample_count(),
            warmed_up: self.is_warmed_up(),
        }
    }
}
