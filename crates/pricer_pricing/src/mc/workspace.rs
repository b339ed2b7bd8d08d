//! Reusable path buffers.
//!
//! One [`PathWorkspace`] lives per sequential run or per parallel chunk, so a
//! replication never allocates.

/// Scratch buffers for one simulated path.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(3);
/// assert_eq!(workspace.spot_mut().len(), 3);
/// assert_eq!(workspace.variance().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathWorkspace {
    spot: Vec<f64>,
    variance: Vec<f64>,
}

impl PathWorkspace {
    /// Creates buffers holding `len` points each.
    pub fn new(len: usize) -> Self {
        Self {
            spot: vec![0.0; len],
            variance: vec![0.0; len],
        }
    }

    /// Price path buffer.
    #[inline]
    pub fn spot(&self) -> &[f64] {
        &self.spot
    }

    /// Mutable price path buffer.
    #[inline]
    pub fn spot_mut(&mut self) -> &mut [f64] {
        &mut self.spot
    }

    /// Variance path buffer.
    #[inline]
    pub fn variance(&self) -> &[f64] {
        &self.variance
    }

    /// Both buffers at once, for recursions that read one and write the other.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.spot, &mut self.variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes_both_buffers() {
        let workspace = PathWorkspace::new(4);
        assert_eq!(workspace.spot().len(), 4);
        assert_eq!(workspace.variance().len(), 4);
        assert!(PathWorkspace::default().spot().is_empty());
    }

    #[test]
    fn test_split_mut_writes_both() {
        let mut workspace = PathWorkspace::new(2);
        let (spot, variance) = workspace.split_mut();
        spot[1] = 1.5;
        variance[1] = 0.04;
        assert_eq!(workspace.spot()[1], 1.5);
        assert_eq!(workspace.variance()[1], 0.04);
    }
}
