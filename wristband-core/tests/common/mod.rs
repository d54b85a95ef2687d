//! Shared helpers for integration tests
//!
//! Deterministic signal generators shaped like what the wristband sensors
//! produce: a slow baseline, sensor noise and occasional events.

#![allow(dead_code)]

use wristband_core::{
    constants::RECORDING_SAMPLE_RATE_HZ, FilterConfig, SensorFilter, SampleOutcome,
};

/// Pseudo-random generator so test runs are repeatable
pub struct TestRng {
    seed: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Uniform in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[-amplitude, amplitude)`
    pub fn noise(&mut self, amplitude: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * amplitude
    }
}

/// Skin temperature trace: constant baseline plus bounded noise
pub fn skin_temperature_trace(baseline: f32, noise: f32, seconds: f32, seed: u32) -> Vec<f32> {
    let mut rng = TestRng::new(seed);
    let samples = (seconds * RECORDING_SAMPLE_RATE_HZ) as usize;
    (0..samples).map(|_| baseline + rng.noise(noise)).collect()
}

/// Skin conductance trace in µS, always positive, with sporadic sensor
/// dropouts reported as `0.0`
pub fn conductance_trace(baseline: f32, samples: usize, dropout_every: usize, seed: u32) -> Vec<f32> {
    let mut rng = TestRng::new(seed);
    (0..samples)
        .map(|i| {
            if dropout_every > 0 && i % dropout_every == dropout_every - 1 {
                0.0
            } else {
                baseline * (1.0 + rng.noise(0.05))
            }
        })
        .collect()
}

/// Feed every sample, returning how many were accepted
pub fn feed(filter: &mut SensorFilter, samples: &[f32]) -> usize {
    samples
        .iter()
        .filter(|&&sample| matches!(filter.update(sample), SampleOutcome::Accepted(_)))
        .count()
}

/// Skin temperature filter at the recording cadence
pub fn skin_filter() -> SensorFilter {
    SensorFilter::from_config(FilterConfig::skin_temperature(), "skin_temp")
        .expect("preset is valid")
}
