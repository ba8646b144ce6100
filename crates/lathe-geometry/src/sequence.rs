//! Parameter and angle sample sequences.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Ordered Bezier parameter samples in `[0, 1]`, inclusive of both ends.
///
/// Two flavors exist: a coarse sequence stepped by `1/num_steps` used to
/// tessellate the revolved surface, and a fine fixed-step sequence used for
/// the edit-mode curve preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSequence {
    pub values: Vec<f64>,
}

impl TimeSequence {
    /// Step size of the fine (edit-mode preview) sequence.
    pub const FINE_STEP: f64 = 0.002;

    /// Coarse sequence: `num_steps + 1` evenly spaced samples.
    pub fn coarse(num_steps: u32) -> Self {
        let n = num_steps.max(1);
        let values = (0..=n).map(|i| f64::from(i) / f64::from(n)).collect();
        Self { values }
    }

    /// Fine sequence for the curve preview. The last sample is pinned to
    /// exactly 1.0 regardless of step accumulation.
    pub fn fine() -> Self {
        let mut values = Vec::with_capacity((1.0 / Self::FINE_STEP) as usize + 2);
        let mut t = 0.0;
        while t < 1.0 {
            values.push(t);
            t += Self::FINE_STEP;
        }
        values.push(1.0);
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered revolution angles spanning `[0, 2*PI]`, inclusive of both ends,
/// stepped by `2*PI/num_angles`. First and last entries are congruent modulo
/// `2*PI`, so the sweep closes on itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleSequence {
    pub values: Vec<f64>,
}

impl AngleSequence {
    /// Closed sweep with `num_angles + 1` entries. The final entry is exactly
    /// `2*PI`, not an accumulated approximation.
    pub fn closed(num_angles: u32) -> Self {
        let n = num_angles.max(1);
        let step = TAU / f64::from(n);
        let mut values: Vec<f64> = (0..n).map(|i| f64::from(i) * step).collect();
        values.push(TAU);
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coarse_endpoints_and_count() {
        let seq = TimeSequence::coarse(16);
        assert_eq!(seq.len(), 17);
        assert_eq!(seq.values[0], 0.0);
        assert_eq!(*seq.values.last().unwrap(), 1.0);
    }

    #[test]
    fn test_coarse_uniform_step() {
        let seq = TimeSequence::coarse(8);
        for pair in seq.values.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.125, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fine_covers_unit_interval() {
        let seq = TimeSequence::fine();
        assert_eq!(seq.values[0], 0.0);
        assert_eq!(*seq.values.last().unwrap(), 1.0);
        assert!(seq.len() > 400);
        assert!(seq.values.windows(2).all(|p| p[1] >= p[0]));
    }

    #[test]
    fn test_closed_angles() {
        let seq = AngleSequence::closed(16);
        assert_eq!(seq.len(), 17);
        assert_eq!(seq.values[0], 0.0);
        assert_eq!(*seq.values.last().unwrap(), TAU);
        // First and last congruent modulo 2*PI
        assert_relative_eq!(
            seq.values.last().unwrap().rem_euclid(TAU),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_step() {
        let seq = AngleSequence::closed(4);
        let step = TAU / 4.0;
        for (i, &theta) in seq.values.iter().enumerate() {
            assert_relative_eq!(theta, step * i as f64, epsilon = 1e-12);
        }
    }
}
