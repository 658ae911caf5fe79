//! Simply-Supported Beam Analysis
//!
//! A straight member on two supports (pin at `a0`, roller at `a1`) that may
//! sit inside a longer beam, leaving overhangs at either end. Loads are
//! combined by superposition.
//!
//! The same [`BeamModel`] also serves the base frame's critical member.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Positive deflection: downward
//!
//! ## Example
//! ```rust
//! use statics_core::calculations::simple_beam::{BeamModel, MemberLoad};
//!
//! // 1 m span, 1 kN at midspan, EI = 1e6 N·m²
//! let mut beam = BeamModel::new(0.0, 1.0, 1.0e6);
//! beam.add_load(MemberLoad::point(1000.0, 0.5));
//!
//! let analysis = beam.analyze(1.0, 100);
//! assert_eq!(analysis.reaction_left_n, 500.0);
//! assert_eq!(analysis.max_bending_moment_nm, 250.0);
//! ```

use serde::{Deserialize, Serialize};

use super::diagrams::{sample_positions, DiagramSeries, ResponseCurves};
use super::warnings::SolveWarning;
use super::AnalysisInput;
use crate::equations::beam::{
    partial_uniform_deflection, point_load_deflection, point_load_reactions,
    uniform_load_deflection,
};
use crate::loads::LoadKind;
use crate::units::{m_to_mm, mm_to_m};

/// A load on a member, in newtons and metres from the member's left end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MemberLoad {
    /// Concentrated force (N)
    Point { magnitude_n: f64, position_m: f64 },
    /// Line load (N/m) between two positions
    Uniform {
        magnitude_n_per_m: f64,
        start_m: f64,
        end_m: f64,
    },
}

impl MemberLoad {
    pub fn point(magnitude_n: f64, position_m: f64) -> Self {
        MemberLoad::Point {
            magnitude_n,
            position_m,
        }
    }

    pub fn uniform(magnitude_n_per_m: f64, start_m: f64, end_m: f64) -> Self {
        MemberLoad::Uniform {
            magnitude_n_per_m,
            start_m,
            end_m,
        }
    }

    /// Resultant force and its line of action
    fn resultant(&self) -> (f64, f64) {
        match *self {
            MemberLoad::Point {
                magnitude_n,
                position_m,
            } => (magnitude_n, position_m),
            MemberLoad::Uniform {
                magnitude_n_per_m,
                start_m,
                end_m,
            } => (
                magnitude_n_per_m * (end_m - start_m),
                (start_m + end_m) / 2.0,
            ),
        }
    }
}

/// Results of one member analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAnalysis {
    /// Left support reaction (N), positive upward
    pub reaction_left_n: f64,
    /// Right support reaction (N), positive upward
    pub reaction_right_n: f64,
    /// max(|R1|, |R2|) (N)
    pub max_shear_force_n: f64,
    /// Largest |M| (N·m)
    pub max_bending_moment_nm: f64,
    /// Where the largest |M| occurs (m)
    pub max_moment_position_m: f64,
    /// Largest |δ| (m)
    pub max_deflection_m: f64,
    /// Where the largest |δ| occurs (m)
    pub max_deflection_position_m: f64,
    /// Rendered curves
    pub diagrams: DiagramSeries,
}

/// Two-support member with superposed loads.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamModel {
    /// Left support position (m)
    pub left_support_m: f64,
    /// Right support position (m)
    pub right_support_m: f64,
    /// Flexural rigidity E·I (N·m²); 0 disables deflection
    pub ei: f64,
    /// Applied loads
    pub loads: Vec<MemberLoad>,
}

impl BeamModel {
    pub fn new(left_support_m: f64, right_support_m: f64, ei: f64) -> Self {
        BeamModel {
            left_support_m,
            right_support_m,
            ei,
            loads: Vec::new(),
        }
    }

    pub fn add_load(&mut self, load: MemberLoad) {
        self.loads.push(load);
    }

    /// Distance between the supports (m)
    pub fn span_m(&self) -> f64 {
        self.right_support_m - self.left_support_m
    }

    /// Support reactions (R1, R2). Both zero when the span is not positive.
    pub fn reactions(&self) -> (f64, f64) {
        let span = self.span_m();
        if span <= 0.0 {
            return (0.0, 0.0);
        }
        self.loads.iter().fold((0.0, 0.0), |(r1, r2), load| {
            let (p, x) = load.resultant();
            let (d1, d2) = point_load_reactions(p, x - self.left_support_m, span);
            (r1 + d1, r2 + d2)
        })
    }

    fn shear_with(&self, (r1, r2): (f64, f64), x: f64) -> f64 {
        let mut v = 0.0;
        if x >= self.left_support_m {
            v += r1;
        }
        if x >= self.right_support_m {
            v += r2;
        }
        for load in &self.loads {
            match *load {
                MemberLoad::Point {
                    magnitude_n,
                    position_m,
                } => {
                    if x > position_m {
                        v -= magnitude_n;
                    }
                }
                MemberLoad::Uniform {
                    magnitude_n_per_m,
                    start_m,
                    end_m,
                } => {
                    if x > start_m {
                        v -= magnitude_n_per_m * (x - start_m).min(end_m - start_m);
                    }
                }
            }
        }
        v
    }

    fn moment_with(&self, (r1, r2): (f64, f64), x: f64) -> f64 {
        let mut m = 0.0;
        if x >= self.left_support_m {
            m += r1 * (x - self.left_support_m);
        }
        if x >= self.right_support_m {
            m += r2 * (x - self.right_support_m);
        }
        for load in &self.loads {
            match *load {
                MemberLoad::Point {
                    magnitude_n,
                    position_m,
                } => {
                    if x > position_m {
                        m -= magnitude_n * (x - position_m);
                    }
                }
                MemberLoad::Uniform {
                    magnitude_n_per_m,
                    start_m,
                    end_m,
                } => {
                    if x > start_m {
                        let loaded = (x - start_m).min(end_m - start_m);
                        let centroid = start_m + loaded / 2.0;
                        m -= magnitude_n_per_m * loaded * (x - centroid);
                    }
                }
            }
        }
        m
    }

    /// Positions where shear is discontinuous or changes slope
    fn breakpoints(&self) -> Vec<f64> {
        let mut points = vec![self.left_support_m, self.right_support_m];
        for load in &self.loads {
            match *load {
                MemberLoad::Point { position_m, .. } => points.push(position_m),
                MemberLoad::Uniform { start_m, end_m, .. } => {
                    points.push(start_m);
                    points.push(end_m);
                }
            }
        }
        points
    }

    /// Positions in `[0, length]` where |M| can peak: both ends, supports,
    /// midspan, load positions and the zero-shear points between them.
    pub fn critical_positions(&self, length_m: f64) -> Vec<f64> {
        let reactions = self.reactions();

        let mut points = self.breakpoints();
        points.push(0.0);
        points.push(length_m);
        points.push((self.left_support_m + self.right_support_m) / 2.0);
        points.retain(|x| x.is_finite() && *x >= 0.0 && *x <= length_m);
        points.sort_by(f64::total_cmp);
        points.dedup();

        // Shear is linear between consecutive breakpoints
        let mut zero_shear = Vec::new();
        for pair in points.windows(2) {
            let (p, q) = (pair[0], pair[1]);
            let inset = (q - p) * 1e-6;
            if inset <= 0.0 {
                continue;
            }
            let (u0, u1) = (p + inset, q - inset);
            let (v0, v1) = (self.shear_with(reactions, u0), self.shear_with(reactions, u1));
            if v0 * v1 < 0.0 {
                zero_shear.push(u0 + (u1 - u0) * v0 / (v0 - v1));
            }
        }

        points.extend(zero_shear);
        points.sort_by(f64::total_cmp);
        points
    }

    /// Evaluate reactions, extrema and diagrams over `[0, length_m]`.
    ///
    /// Diagrams hold exactly `samples` evenly spaced points; extrema are
    /// taken over those samples plus [`Self::critical_positions`].
    pub fn analyze(&self, length_m: f64, samples: usize) -> MemberAnalysis {
        let reactions = self.reactions();
        let diagrams = DiagramSeries::sample(self, length_m, samples);

        let mut positions = sample_positions(length_m, samples);
        positions.extend(self.critical_positions(length_m));

        let mut max_moment = 0.0f64;
        let mut max_moment_pos = 0.0;
        let mut max_deflection = 0.0f64;
        let mut max_deflection_pos = 0.0;

        for &x in &positions {
            let m = self.moment_with(reactions, x).abs();
            if m > max_moment {
                max_moment = m;
                max_moment_pos = x;
            }
            let d = self.deflection_at(x).abs();
            if d > max_deflection {
                max_deflection = d;
                max_deflection_pos = x;
            }
        }

        MemberAnalysis {
            reaction_left_n: reactions.0,
            reaction_right_n: reactions.1,
            max_shear_force_n: reactions.0.abs().max(reactions.1.abs()),
            max_bending_moment_nm: max_moment,
            max_moment_position_m: max_moment_pos,
            max_deflection_m: max_deflection,
            max_deflection_position_m: max_deflection_pos,
            diagrams,
        }
    }
}

impl ResponseCurves for BeamModel {
    fn shear_at(&self, x_m: f64) -> f64 {
        self.shear_with(self.reactions(), x_m)
    }

    fn moment_at(&self, x_m: f64) -> f64 {
        self.moment_with(self.reactions(), x_m)
    }

    /// Elastic curve between the supports; overhangs read zero.
    fn deflection_at(&self, x_m: f64) -> f64 {
        let span = self.span_m();
        let (a0, a1) = (self.left_support_m, self.right_support_m);
        if self.ei <= 0.0 || span <= 0.0 || x_m < a0 || x_m > a1 {
            return 0.0;
        }
        let x = x_m - a0;
        let tolerance = span * 1e-9;

        self.loads
            .iter()
            .map(|load| match *load {
                MemberLoad::Point {
                    magnitude_n,
                    position_m,
                } => {
                    let a = position_m - a0;
                    if a < 0.0 || a > span {
                        0.0
                    } else {
                        point_load_deflection(magnitude_n, a, span, x, self.ei)
                    }
                }
                MemberLoad::Uniform {
                    magnitude_n_per_m,
                    start_m,
                    end_m,
                } => {
                    let (s, e) = ((start_m - a0).max(0.0), (end_m - a0).min(span));
                    if e <= s {
                        0.0
                    } else if s <= tolerance && e >= span - tolerance {
                        uniform_load_deflection(magnitude_n_per_m, span, x, self.ei)
                    } else {
                        partial_uniform_deflection(magnitude_n_per_m, s, e, span, x, self.ei)
                    }
                }
            })
            .sum()
    }
}

/// A beam-mode model together with the quantities the pipeline reports.
#[derive(Debug, Clone)]
pub(crate) struct BeamSetup {
    pub model: BeamModel,
    pub length_m: f64,
    pub total_applied_load_n: f64,
}

/// Translate a beam-mode snapshot into a [`BeamModel`].
///
/// Invalid loads are skipped, uniform loads are clipped to the supports and
/// distributed loads only count toward the total; each of these is reported
/// through `warnings`.
pub(crate) fn build_beam_model(
    input: &AnalysisInput,
    ei: f64,
    warnings: &mut Vec<SolveWarning>,
) -> BeamSetup {
    let (length_m, a0, a1) = input.geometry.beam_supports_m();
    let mut model = BeamModel::new(a0, a1, ei);

    if model.span_m() <= 0.0 {
        warnings.push(SolveWarning::DegenerateSpan {
            span_mm: m_to_mm(model.span_m()),
        });
    }
    if !input.sections.is_empty() {
        warnings.push(SolveWarning::SectionsIgnored {
            count: input.sections.len(),
        });
    }

    let mut total_applied_load_n = 0.0;

    for (index, load) in input.loads.iter().enumerate() {
        if let Err(e) = load.validate() {
            warnings.push(SolveWarning::InvalidLoadSkipped {
                index,
                reason: e.to_string(),
            });
            continue;
        }
        total_applied_load_n += load.total_force_n();

        match load.kind {
            LoadKind::Point => {
                let x = mm_to_m(load.start_position_mm);
                if x < a0 || x > a1 {
                    warnings.push(SolveWarning::LoadOutsideSpan {
                        index,
                        position_mm: load.start_position_mm,
                    });
                }
                model.add_load(MemberLoad::point(load.magnitude_n(), x));
            }
            LoadKind::Uniform => {
                let Some((start_mm, end_mm)) = load.extent_mm() else {
                    continue;
                };
                let (start, end) = (mm_to_m(start_mm), mm_to_m(end_mm));
                if start < a0 || end > a1 {
                    warnings.push(SolveWarning::LoadOutsideSpan {
                        index,
                        position_mm: start_mm,
                    });
                }
                let (clipped_start, clipped_end) = (start.max(a0), end.min(a1));
                if clipped_end > clipped_start {
                    model.add_load(MemberLoad::uniform(
                        load.magnitude_n(),
                        clipped_start,
                        clipped_end,
                    ));
                }
            }
            LoadKind::Distributed => {
                warnings.push(SolveWarning::DistributedLoadNotModeled { index });
            }
        }
    }

    BeamSetup {
        model,
        length_m,
        total_applied_load_n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::beam::{uniform_load_max_deflection, uniform_load_max_moment};
    use approx::assert_relative_eq;

    const EI: f64 = 210.0e9 * 8.0e-6;

    #[test]
    fn test_point_load_reactions() {
        let mut beam = BeamModel::new(0.0, 1.0, EI);
        beam.add_load(MemberLoad::point(1000.0, 0.3));
        let (r1, r2) = beam.reactions();
        assert_relative_eq!(r1, 700.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_centered_point_load() {
        let mut beam = BeamModel::new(0.0, 1.0, EI);
        beam.add_load(MemberLoad::point(1000.0, 0.5));
        let analysis = beam.analyze(1.0, 100);

        assert_eq!(analysis.reaction_left_n, 500.0);
        assert_eq!(analysis.reaction_right_n, 500.0);
        assert_eq!(analysis.max_shear_force_n, 500.0);
        assert_relative_eq!(analysis.max_bending_moment_nm, 250.0, max_relative = 1e-12);
        assert_relative_eq!(analysis.max_moment_position_m, 0.5);
    }

    #[test]
    fn test_uniform_full_span_extrema() {
        let (w, l) = (2000.0, 3.0);
        let mut beam = BeamModel::new(0.0, l, EI);
        beam.add_load(MemberLoad::uniform(w, 0.0, l));
        let analysis = beam.analyze(l, 100);

        assert_relative_eq!(analysis.max_shear_force_n, w * l / 2.0, max_relative = 1e-12);
        assert_relative_eq!(
            analysis.max_bending_moment_nm,
            uniform_load_max_moment(w, l),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            analysis.max_deflection_m,
            uniform_load_max_deflection(w, l, EI),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_moment_closes_at_supports() {
        let mut beam = BeamModel::new(0.2, 1.8, EI);
        beam.add_load(MemberLoad::point(400.0, 0.7));
        beam.add_load(MemberLoad::uniform(300.0, 0.5, 1.5));

        assert_eq!(beam.moment_at(0.2), 0.0);
        assert!(beam.moment_at(1.8).abs() < 1e-9);
        // Beyond the right support nothing is loaded
        assert!(beam.moment_at(2.0).abs() < 1e-9);
        assert!(beam.shear_at(2.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_uniform_deflects() {
        let mut beam = BeamModel::new(0.0, 2.0, EI);
        beam.add_load(MemberLoad::uniform(1000.0, 0.5, 1.0));
        let d = beam.deflection_at(0.8);
        assert!(d > 0.0);

        // Splitting the load in two halves gives the same curve
        let mut halves = BeamModel::new(0.0, 2.0, EI);
        halves.add_load(MemberLoad::uniform(1000.0, 0.5, 0.75));
        halves.add_load(MemberLoad::uniform(1000.0, 0.75, 1.0));
        assert_relative_eq!(halves.deflection_at(0.8), d, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_stiffness_disables_deflection() {
        let mut beam = BeamModel::new(0.0, 1.0, 0.0);
        beam.add_load(MemberLoad::point(1000.0, 0.5));
        assert_eq!(beam.deflection_at(0.5), 0.0);
        assert_eq!(beam.analyze(1.0, 10).max_deflection_m, 0.0);
    }

    #[test]
    fn test_degenerate_span_has_no_reactions() {
        let mut beam = BeamModel::new(1.0, 1.0, EI);
        beam.add_load(MemberLoad::point(1000.0, 0.5));
        assert_eq!(beam.reactions(), (0.0, 0.0));
    }

    #[test]
    fn test_critical_positions_include_zero_shear() {
        // Asymmetric partial load: zero shear inside the loaded segment
        let mut beam = BeamModel::new(0.0, 4.0, EI);
        beam.add_load(MemberLoad::uniform(1000.0, 1.0, 3.0));
        beam.add_load(MemberLoad::point(500.0, 3.5));

        let (r1, _) = beam.reactions();
        let expected = 1.0 + r1 / 1000.0;
        let positions = beam.critical_positions(4.0);
        assert!(positions.iter().any(|x| (x - expected).abs() < 1e-9));
    }
}
