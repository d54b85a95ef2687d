//! Per-tick feedback loop
//!
//! Ties a [`SampleSource`], a [`SensorFilter`] and an [`Actuator`] together.
//! The sampling timer (outside this crate) calls [`FeedbackLoop::tick`]
//! once per period; the loop never waits or sleeps.
//!
//! ```text
//! timer ──tick()──► source.poll_sample() ──► filter.update() ──► actuator.drive()
//!                        │ WouldBlock            │ rejected
//!                        ▼                       ▼
//!                   TickOutcome::Idle     TickOutcome::Rejected
//! ```
//!
//! A tick that produces no accepted sample leaves the motor at whatever
//! it was last driven to.

use crate::{
    errors::FilterError,
    filter::{SampleOutcome, SensorFilter},
    traits::{Actuator, ReportSink, SampleSource},
};

/// Result of one tick that did not fail
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Source had no new sample
    Idle,
    /// Filter dropped the sample; actuator was not driven
    Rejected(FilterError),
    /// Sample accepted and the actuator driven with this activation
    Driven(f32),
}

/// Failure of one of the loop's collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopError<SE, AE> {
    /// Sample source failed
    Source(SE),
    /// Actuator failed
    Actuator(AE),
}

/// Sample → filter → actuator pipeline driven by an external timer
#[derive(Debug)]
pub struct FeedbackLoop<S, A> {
    filter: SensorFilter,
    source: S,
    actuator: A,
    ticks: u32,
    rejected: u32,
}

impl<S, A> FeedbackLoop<S, A>
where
    S: SampleSource,
    A: Actuator,
{
    /// Assemble a loop; the filter should be configured for the timer rate
    pub fn new(filter: SensorFilter, source: S, actuator: A) -> Self {
        Self {
            filter,
            source,
            actuator,
            ticks: 0,
            rejected: 0,
        }
    }

    /// Run one sampling period
    pub fn tick(&mut self) -> Result<TickOutcome, LoopError<S::Error, A::Error>> {
        self.ticks = self.ticks.wrapping_add(1);

        let sample = match self.source.poll_sample() {
            Ok(sample) => sample,
            Err(nb::Error::WouldBlock) => return Ok(TickOutcome::Idle),
            Err(nb::Error::Other(e)) => return Err(LoopError::Source(e)),
        };

        if let SampleOutcome::Rejected(err) = self.filter.update(sample) {
            self.rejected = self.rejected.wrapping_add(1);
            return Ok(TickOutcome::Rejected(err));
        }

        let activation = self.filter.activation();
        self.actuator
            .drive(activation)
            .map_err(LoopError::Actuator)?;

        Ok(TickOutcome::Driven(activation))
    }

    /// Write the filter's current report to `sink`
    pub fn report_to<R: ReportSink>(&self, sink: &mut R) {
        sink.emit(&self.filter.report());
    }

    /// Ticks run so far (wraps)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Samples the filter dropped so far (wraps)
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// The filter
    pub fn filter(&self) -> &SensorFilter {
        &self.filter
    }

    /// The filter, mutably (e.g. to feed it samples outside `tick`)
    pub fn filter_mut(&mut self) -> &mut SensorFilter {
        &mut self.filter
    }

    /// Take the loop apart
    pub fn into_parts(self) -> (SensorFilter, S, A) {
        (self.filter, self.source, self.actuator)
    }
}
