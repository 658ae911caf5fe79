//! Four-Corner Base Frame
//!
//! A rectangular frame in plan (`L × W`) resting on four corner supports:
//!
//! ```text
//!   y
//!   W  R3 ─────────── R4
//!      │               │
//!      │               │
//!   0  R1 ─────────── R2
//!      0               L   x
//! ```
//!
//! Every load and section weight is reduced to a resultant at a plan
//! centroid and shared between the corners with the bilinear lever rule:
//! a corner takes the area of the rectangle between the centroid and the
//! diagonally opposite corner, over `L·W`. The nearest corner takes the
//! largest share and the four shares always sum to the weight.
//!
//! Member forces come from one critical member: the longer frame side
//! carrying a quarter of the applied load as a full-span uniform load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::simple_beam::{BeamModel, MemberLoad};
use super::warnings::SolveWarning;
use super::{AnalysisInput, SolverSettings};
use crate::loads::{Load, LoadKind};
use crate::units::{mm_to_m, GRAVITY};
use crate::validation::validate_positive;

/// Number of members sharing the load in frame mode
pub const FRAME_MEMBERS: usize = 4;

/// Support reactions at the four corners (N).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerReactions {
    /// (0, 0)
    pub r1_n: f64,
    /// (L, 0)
    pub r2_n: f64,
    /// (0, W)
    pub r3_n: f64,
    /// (L, W)
    pub r4_n: f64,
}

impl CornerReactions {
    /// Accumulate another set of reactions.
    pub fn add(&mut self, other: CornerReactions) {
        self.r1_n += other.r1_n;
        self.r2_n += other.r2_n;
        self.r3_n += other.r3_n;
        self.r4_n += other.r4_n;
    }

    /// Add `weight_n / 4` to every corner.
    pub fn add_equal_share(&mut self, weight_n: f64) {
        let share = weight_n / 4.0;
        self.add(CornerReactions {
            r1_n: share,
            r2_n: share,
            r3_n: share,
            r4_n: share,
        });
    }

    /// Largest corner reaction
    pub fn max(&self) -> f64 {
        self.r1_n.max(self.r2_n).max(self.r3_n).max(self.r4_n)
    }

    /// Sum of all four reactions
    pub fn total(&self) -> f64 {
        self.r1_n + self.r2_n + self.r3_n + self.r4_n
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.r1_n, self.r2_n, self.r3_n, self.r4_n]
    }
}

/// Share `weight_n` acting at `(cx, cy)` between the corners of an
/// `length × width` plan (metres). The centroid is clamped into the plan.
///
/// A non-positive plan area splits the weight equally.
pub fn distribute_to_corners(weight_n: f64, cx: f64, cy: f64, length: f64, width: f64) -> CornerReactions {
    let plan_area = length * width;
    if plan_area <= 0.0 {
        let mut corners = CornerReactions::default();
        corners.add_equal_share(weight_n);
        return corners;
    }

    let cx = cx.clamp(0.0, length);
    let cy = cy.clamp(0.0, width);
    let per_area = weight_n / plan_area;

    CornerReactions {
        r1_n: per_area * (length - cx) * (width - cy),
        r2_n: per_area * cx * (width - cy),
        r3_n: per_area * (length - cx) * cy,
        r4_n: per_area * cx * cy,
    }
}

/// Weight (N) and plan centroid (m) of one load on a frame `width` wide.
fn load_resultant(load: &Load, width: f64) -> (f64, f64, f64) {
    let weight = load.total_force_n();
    let start = mm_to_m(load.start_position_mm);
    let mid_width = width / 2.0;

    match load.kind {
        LoadKind::Point => (weight, start, mid_width),
        LoadKind::Uniform => {
            let cx = load
                .extent_mm()
                .map(|(s, e)| mm_to_m((s + e) / 2.0))
                .unwrap_or(start);
            (weight, cx, mid_width)
        }
        LoadKind::Distributed => match load.patch_mm() {
            Some((length_mm, width_mm)) => {
                let cx = start + mm_to_m(length_mm) / 2.0;
                let cy = load
                    .lateral_position_mm
                    .filter(|v| v.is_finite())
                    .map(|lateral| mm_to_m(lateral + width_mm / 2.0))
                    .unwrap_or(mid_width);
                (weight, cx, cy)
            }
            None => (weight, start, mid_width),
        },
    }
}

/// Frame-mode quantities the pipeline reports.
#[derive(Debug, Clone)]
pub(crate) struct FrameSetup {
    pub corners: CornerReactions,
    pub total_applied_load_n: f64,
    pub self_weight_n: f64,
    pub load_per_beam_n: f64,
    pub critical_length_m: f64,
    pub model: BeamModel,
}

/// Reduce a frame-mode snapshot to corner reactions and its critical member.
pub(crate) fn build_frame(
    input: &AnalysisInput,
    area_m2: f64,
    ei: f64,
    settings: &SolverSettings,
    warnings: &mut Vec<SolveWarning>,
) -> FrameSetup {
    let (length, width) = input.geometry.frame_plan_m();
    let mut corners = CornerReactions::default();
    let mut total_applied_load_n = 0.0;

    let known_sections: HashSet<_> = input.sections.iter().map(|s| s.id).collect();

    for (index, load) in input.loads.iter().enumerate() {
        if let Err(e) = load.validate() {
            warnings.push(SolveWarning::InvalidLoadSkipped {
                index,
                reason: e.to_string(),
            });
            continue;
        }
        if let Some(section_id) = load.section_id {
            if !known_sections.contains(&section_id) {
                warnings.push(SolveWarning::UnknownSection { index, section_id });
            }
        }

        let (weight, cx, cy) = load_resultant(load, width);
        total_applied_load_n += weight;
        corners.add(distribute_to_corners(weight, cx, cy, length, width));
    }

    for (index, section) in input.sections.iter().enumerate() {
        if let Err(e) = section.validate() {
            warnings.push(SolveWarning::InvalidSectionSkipped {
                index,
                reason: e.to_string(),
            });
            continue;
        }
        let weight = section.total_weight_n();
        total_applied_load_n += weight;
        corners.add(distribute_to_corners(
            weight,
            mm_to_m(section.centroid_mm()),
            width / 2.0,
            length,
            width,
        ));
    }

    let self_weight_n = if settings.include_frame_self_weight {
        let density = validate_positive(input.material.density_kg_m3, 0.0);
        2.0 * (length + width) * area_m2 * density * GRAVITY
    } else {
        0.0
    };
    corners.add_equal_share(self_weight_n);

    let critical_length_m = length.max(width);
    let load_per_beam_n = total_applied_load_n / FRAME_MEMBERS as f64;
    let mut model = BeamModel::new(0.0, critical_length_m, ei);
    if critical_length_m > 0.0 {
        model.add_load(MemberLoad::uniform(
            load_per_beam_n / critical_length_m,
            0.0,
            critical_length_m,
        ));
    }

    FrameSetup {
        corners,
        total_applied_load_n,
        self_weight_n,
        load_per_beam_n,
        critical_length_m,
        model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centred_load_splits_equally() {
        let r = distribute_to_corners(1000.0, 1.0, 0.5, 2.0, 1.0);
        for value in r.as_array() {
            assert_relative_eq!(value, 250.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_nearest_corner_takes_largest_share() {
        // Quarter point nearest R1: 3/4 · 3/4 of the weight
        let r = distribute_to_corners(1600.0, 0.5, 0.25, 2.0, 1.0);
        assert_relative_eq!(r.r1_n, 900.0, max_relative = 1e-12);
        assert_relative_eq!(r.r2_n, 300.0, max_relative = 1e-12);
        assert_relative_eq!(r.r3_n, 300.0, max_relative = 1e-12);
        assert_relative_eq!(r.r4_n, 100.0, max_relative = 1e-12);
        assert_eq!(r.max(), r.r1_n);
    }

    #[test]
    fn test_shares_sum_to_weight() {
        for &(cx, cy) in &[(0.0, 0.0), (0.3, 0.9), (1.7, 0.1), (2.0, 1.0)] {
            let r = distribute_to_corners(777.0, cx, cy, 2.0, 1.0);
            assert_relative_eq!(r.total(), 777.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_centroid_clamped_into_plan() {
        let outside = distribute_to_corners(100.0, -5.0, 9.0, 2.0, 1.0);
        let corner = distribute_to_corners(100.0, 0.0, 1.0, 2.0, 1.0);
        assert_eq!(outside, corner);
        assert_relative_eq!(outside.r3_n, 100.0);
    }

    #[test]
    fn test_degenerate_plan_splits_equally() {
        let r = distribute_to_corners(400.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(r.as_array(), [100.0; 4]);
    }
}
