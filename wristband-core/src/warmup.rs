//! Warm-up weighting for the running mean
//!
//! The running mean starts at zero. Blending the first samples in with the
//! steady-state smoothing constant would drag the mean towards zero for a
//! long time, so early samples are weighted `1/k` instead. That makes the
//! mean after `k` samples the plain arithmetic mean of those samples.
//!
//! Once `1/k` drops below the smoothing constant the weight locks to the
//! constant for good:
//!
//! ```text
//! smoothing_constant = 0.3
//!
//! sample   1    2    3     4
//! weight   1.0  0.5  0.33  0.3  0.3  0.3 ...
//!                           ^ 1/4 < 0.3, warmed up
//! ```
//!
//! There is no way back: a `WarmupWeight` that has warmed up stays warmed
//! up for its whole life.

/// Stateful weight source for one running mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmupWeight {
    smoothing_constant: f32,
    sample_count: u32,
    warmed_up: bool,
}

impl WarmupWeight {
    /// Start a warm-up towards `smoothing_constant`
    pub fn new(smoothing_constant: f32) -> Self {
        Self {
            smoothing_constant,
            sample_count: 0,
            warmed_up: false,
        }
    }

    /// Weight to apply to the sample being accepted now
    ///
    /// Call exactly once per accepted sample.
    pub fn next_weight(&mut self) -> f32 {
        if !self.warmed_up {
            self.sample_count = self.sample_count.saturating_add(1);
            if 1.0 / (self.sample_count as f32) < self.smoothing_constant {
                self.warmed_up = true;
            }
        }

        if self.warmed_up {
            self.smoothing_constant
        } else {
            1.0 / self.sample_count as f32
        }
    }

    /// Steady-state weight
    pub fn smoothing_constant(&self) -> f32 {
        self.smoothing_constant
    }

    /// Samples counted so far; stops increasing once warmed up
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Whether the weight has locked to the smoothing constant
    pub fn is_warmed_up(&self) -> bool {
        self.warmed_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_weights_are_reciprocal_counts() {
        let mut weight = WarmupWeight::new(0.1);

        for k in 1..=10u32 {
            assert_eq!(weight.next_weight(), 1.0 / k as f32);
            assert!(!weight.is_warmed_up());
        }
    }

    #[test]
    fn locks_to_constant_after_crossing() {
        let mut weight = WarmupWeight::new(0.3);

        assert_eq!(weight.next_weight(), 1.0);
        assert_eq!(weight.next_weight(), 0.5);
        assert_eq!(weight.next_weight(), 1.0 / 3.0);
        assert!(!weight.is_warmed_up());

        // 1/4 < 0.3
        assert_eq!(weight.next_weight(), 0.3);
        assert!(weight.is_warmed_up());
        assert_eq!(weight.sample_count(), 4);

        for _ in 0..100 {
            assert_eq!(weight.next_weight(), 0.3);
        }
        // Counting stops once warmed up
        assert_eq!(weight.sample_count(), 4);
    }

    #[test]
    fn warm_up_is_permanent() {
        let mut weight = WarmupWeight::new(0.5);
        for _ in 0..3 {
            weight.next_weight();
        }
        assert!(weight.is_warmed_up());

        for _ in 0..10_000 {
            assert_eq!(weight.next_weight(), 0.5);
            assert!(weight.is_warmed_up());
        }
        assert_eq!(weight.sample_count(), 3);
    }

    #[test]
    fn unit_constant_warms_up_on_second_sample() {
        // 1/1 is not below 1.0, 1/2 is
        let mut weight = WarmupWeight::new(1.0);
        assert_eq!(weight.next_weight(), 1.0);
        assert!(!weight.is_warmed_up());
        assert_eq!(weight.next_weight(), 1.0);
        assert!(weight.is_warmed_up());
    }
}
