//! Diagram sampling.
//!
//! Turns a member's shear, moment and deflection functions into evenly
//! spaced `(position_mm, value)` series for external chart renderers. The
//! series is rebuilt from scratch on every solve.

use serde::{Deserialize, Serialize};

use crate::units::m_to_mm;

/// Default number of samples per curve
pub const DEFAULT_DIAGRAM_SAMPLES: usize = 100;

/// Pointwise internal-force and deflection functions of a member.
///
/// Positions are in metres from the member's left end. Shear is in N,
/// moment in N·m, deflection in m (positive downward).
pub trait ResponseCurves {
    fn shear_at(&self, x_m: f64) -> f64;
    fn moment_at(&self, x_m: f64) -> f64;
    fn deflection_at(&self, x_m: f64) -> f64;
}

/// Position-indexed curves for rendering.
///
/// Every series has the same length and the same positions (mm).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagramSeries {
    /// Shear force (N)
    pub shear: Vec<(f64, f64)>,
    /// Bending moment (N·m)
    pub moment: Vec<(f64, f64)>,
    /// Deflection (mm, positive downward)
    pub deflection: Vec<(f64, f64)>,
}

impl DiagramSeries {
    /// Sample `curves` at `count` evenly spaced points over `[0, length_m]`.
    pub fn sample(curves: &impl ResponseCurves, length_m: f64, count: usize) -> Self {
        let positions = sample_positions(length_m, count);
        let mut series = DiagramSeries {
            shear: Vec::with_capacity(positions.len()),
            moment: Vec::with_capacity(positions.len()),
            deflection: Vec::with_capacity(positions.len()),
        };

        for x in positions {
            let x_mm = m_to_mm(x);
            series.shear.push((x_mm, curves.shear_at(x)));
            series.moment.push((x_mm, curves.moment_at(x)));
            series.deflection.push((x_mm, m_to_mm(curves.deflection_at(x))));
        }

        series
    }

    /// Number of samples per curve
    pub fn len(&self) -> usize {
        self.shear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shear.is_empty()
    }
}

/// `count` evenly spaced positions from 0 to `length` inclusive.
///
/// At least two positions are produced so both ends are always present.
pub fn sample_positions(length: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let step = length / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { length } else { step * i as f64 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear;

    impl ResponseCurves for Linear {
        fn shear_at(&self, _x_m: f64) -> f64 {
            1.0
        }
        fn moment_at(&self, x_m: f64) -> f64 {
            x_m
        }
        fn deflection_at(&self, x_m: f64) -> f64 {
            x_m / 1000.0
        }
    }

    #[test]
    fn test_sample_positions() {
        let positions = sample_positions(2.0, 5);
        assert_eq!(positions, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(sample_positions(1.0, 0).len(), 2);
    }

    #[test]
    fn test_series_units() {
        let series = DiagramSeries::sample(&Linear, 1.0, DEFAULT_DIAGRAM_SAMPLES);
        assert_eq!(series.len(), 100);
        assert_eq!(series.moment.len(), 100);
        assert_eq!(series.deflection.len(), 100);

        let (last_pos, last_moment) = series.moment[99];
        assert_eq!(last_pos, 1000.0);
        assert_eq!(last_moment, 1.0);
        // 1 m / 1000 = 1 mm
        assert!((series.deflection[99].1 - 1.0).abs() < 1e-12);
    }
}
