//! Streaming sample statistics.
//!
//! [`SampleStatistics`] accumulates mean and sum of squared deviations with
//! Welford's update, and combines partial results with the Chan et al.
//! pairwise formula so that chunks simulated on different threads can be
//! merged without revisiting samples.

/// Running count, mean and second central moment of a sample.
///
/// # Examples
///
/// ```
/// use pricer_core::math::SampleStatistics;
///
/// let mut stats = SampleStatistics::new();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     stats.push(x);
/// }
/// assert_eq!(stats.count(), 4);
/// assert!((stats.mean() - 2.5).abs() < 1e-12);
/// assert!((stats.variance() - 5.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleStatistics {
    count: usize,
    mean: f64,
    m2: f64,
}

impl SampleStatistics {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Combines another accumulator into this one.
    pub fn merge(&mut self, other: &SampleStatistics) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let total = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / total;
        self.m2 += other.m2 + delta * delta * n_a * n_b / total;
        self.count += other.count;
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance (0 with fewer than two observations).
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Standard error of the mean, `s / sqrt(n)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as f64).sqrt()
        }
    }
}

impl FromIterator<f64> for SampleStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = SampleStatistics::new();
        for x in iter {
            stats.push(x);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_single() {
        let mut stats = SampleStatistics::new();
        assert_eq!(stats.std_error(), 0.0);
        stats.push(7.0);
        assert_eq!(stats.mean(), 7.0);
        assert_eq!(stats.variance(), 0.0);
    }

    #[test]
    fn test_std_error() {
        let stats: SampleStatistics = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_relative_eq!(stats.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(stats.variance(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(stats.std_error(), (32.0 / 7.0 / 8.0_f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_merge_with_empty() {
        let a: SampleStatistics = [1.0, 2.0].into_iter().collect();
        let mut b = SampleStatistics::new();
        b.merge(&a);
        assert_eq!(a, b);
        b.merge(&SampleStatistics::new());
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_merge_matches_single_pass(
            xs in prop::collection::vec(-100.0f64..100.0, 1..64),
            ys in prop::collection::vec(-100.0f64..100.0, 1..64),
        ) {
            let mut merged: SampleStatistics = xs.iter().copied().collect();
            merged.merge(&ys.iter().copied().collect());
            let single: SampleStatistics = xs.iter().chain(ys.iter()).copied().collect();

            prop_assert_eq!(merged.count(), single.count());
            prop_assert!((merged.mean() - single.mean()).abs() < 1e-9);
            prop_assert!((merged.variance() - single.variance()).abs() < 1e-6);
        }
    }
}
