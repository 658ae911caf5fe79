//! # Structural Calculations
//!
//! One pure pipeline turns an [`AnalysisInput`] snapshot into a
//! [`Solution`]:
//!
//! ```text
//! input ─► guards/units ─► section properties ─► simple beam | base frame
//!       ─► stress & safety ─► Results + DiagramSeries + warnings
//! ```
//!
//! [`solve`] never fails. Unusable numbers fall back to defaults and
//! unusable loads are skipped; each such decision is reported as a
//! [`SolveWarning`]. Nothing is cached between calls, so solving the same
//! snapshot twice gives bit-identical output.
//!
//! ## Available Analyses
//!
//! - [`simple_beam`] - Two supports, optional overhangs, point and uniform loads
//! - [`base_frame`] - Rectangular frame on four corner supports
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::{solve, AnalysisInput, Geometry};
//! use statics_core::loads::Load;
//! use statics_core::units::ForceUnit;
//!
//! let mut input = AnalysisInput::simple_beam("B-1", Geometry::beam(1000.0, 0.0, 1000.0));
//! input.loads.push(Load::point(1000.0, ForceUnit::Newtons, 500.0));
//!
//! let solution = solve(&input);
//! assert_eq!(solution.results.max_shear_force_n, 500.0);
//! assert!((solution.results.max_bending_moment_nm - 250.0).abs() < 1e-9);
//! ```

pub mod base_frame;
pub mod diagrams;
pub mod simple_beam;
pub mod stress;
pub mod warnings;

use serde::{Deserialize, Serialize};

use crate::cross_section::CrossSection;
use crate::loads::{Load, Section};
use crate::materials::Material;
use crate::units::{m_to_mm, mm_to_m};
use crate::validation::{validate_number, validate_positive};

pub use crate::settings::SolverSettings;
pub use base_frame::{distribute_to_corners, CornerReactions};
pub use diagrams::{DiagramSeries, ResponseCurves};
pub use simple_beam::{BeamModel, MemberAnalysis, MemberLoad};
pub use stress::StressCheck;
pub use warnings::SolveWarning;

/// Fallback beam length (mm)
pub const DEFAULT_BEAM_LENGTH_MM: f64 = 1000.0;
/// Fallback frame length along x (mm)
pub const DEFAULT_FRAME_LENGTH_MM: f64 = 2000.0;
/// Fallback frame width along y (mm)
pub const DEFAULT_FRAME_WIDTH_MM: f64 = 1000.0;

/// Which structure a snapshot describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalysisMode {
    #[default]
    SimpleBeam,
    BaseFrame,
}

impl AnalysisMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisMode::SimpleBeam => "Simple beam",
            AnalysisMode::BaseFrame => "Base frame",
        }
    }
}

/// Member and frame dimensions (mm).
///
/// Beam fields are read in [`AnalysisMode::SimpleBeam`], frame fields in
/// [`AnalysisMode::BaseFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Overall beam length, overhangs included
    pub beam_length_mm: f64,
    /// Pin support position
    pub left_support_mm: f64,
    /// Roller support position
    pub right_support_mm: f64,
    /// Frame plan length (x)
    pub frame_length_mm: f64,
    /// Frame plan width (y)
    pub frame_width_mm: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            beam_length_mm: DEFAULT_BEAM_LENGTH_MM,
            left_support_mm: 0.0,
            right_support_mm: DEFAULT_BEAM_LENGTH_MM,
            frame_length_mm: DEFAULT_FRAME_LENGTH_MM,
            frame_width_mm: DEFAULT_FRAME_WIDTH_MM,
        }
    }
}

impl Geometry {
    /// Beam geometry with default frame dimensions
    pub fn beam(length_mm: f64, left_support_mm: f64, right_support_mm: f64) -> Self {
        Geometry {
            beam_length_mm: length_mm,
            left_support_mm,
            right_support_mm,
            ..Geometry::default()
        }
    }

    /// Frame geometry with default beam dimensions
    pub fn frame(length_mm: f64, width_mm: f64) -> Self {
        Geometry {
            frame_length_mm: length_mm,
            frame_width_mm: width_mm,
            ..Geometry::default()
        }
    }

    /// `(length, left support, right support)` in metres, guarded.
    ///
    /// An unusable right support falls back to the beam length.
    pub fn beam_supports_m(&self) -> (f64, f64, f64) {
        let length = validate_positive(self.beam_length_mm, DEFAULT_BEAM_LENGTH_MM);
        let left = validate_number(self.left_support_mm, 0.0);
        let right = validate_number(self.right_support_mm, length);
        (mm_to_m(length), mm_to_m(left), mm_to_m(right))
    }

    /// `(length, width)` of the frame plan in metres, guarded.
    pub fn frame_plan_m(&self) -> (f64, f64) {
        (
            mm_to_m(validate_positive(self.frame_length_mm, DEFAULT_FRAME_LENGTH_MM)),
            mm_to_m(validate_positive(self.frame_width_mm, DEFAULT_FRAME_WIDTH_MM)),
        )
    }
}

/// One complete input snapshot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Skid frame",
///   "mode": "BaseFrame",
///   "geometry": { "frame_length_mm": 2400.0, "frame_width_mm": 1200.0 },
///   "cross_section": { "type": "CChannel", "height": 100.0, "flange_width": 50.0,
///                      "flange_thickness": 8.5, "web_thickness": 6.0 },
///   "material": { "name": "S235", "yield_strength_mpa": 235.0, "elastic_modulus_gpa": 210.0,
///                 "density_kg_m3": 7850.0, "poissons_ratio": 0.3, "thermal_expansion": 1.2e-5 },
///   "loads": [ { "kind": "Point", "magnitude": 150.0, "unit": "kg", "start_position_mm": 600.0 } ],
///   "sections": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub cross_section: CrossSection,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub loads: Vec<Load>,
    /// Weighted frame sections; ignored in beam mode
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl AnalysisInput {
    /// Unloaded beam with the default section and material
    pub fn simple_beam(label: impl Into<String>, geometry: Geometry) -> Self {
        AnalysisInput {
            label: label.into(),
            mode: AnalysisMode::SimpleBeam,
            geometry,
            cross_section: CrossSection::default(),
            material: Material::default(),
            loads: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Unloaded frame with the default section and material
    pub fn base_frame(label: impl Into<String>, geometry: Geometry) -> Self {
        AnalysisInput {
            mode: AnalysisMode::BaseFrame,
            ..AnalysisInput::simple_beam(label, geometry)
        }
    }
}

/// Scalar results of one solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub mode: AnalysisMode,

    // Load bookkeeping
    /// Sum of all applied loads and section weights (N), frame self weight excluded
    pub total_applied_load_n: f64,
    /// Members sharing the load: 1 for a beam, 4 for a frame
    pub total_beams: usize,
    /// `total_applied_load_n / total_beams` (N)
    pub load_per_beam_n: f64,

    // Member forces
    /// Left support reaction of the analysed member (N)
    pub reaction_left_n: f64,
    /// Right support reaction of the analysed member (N)
    pub reaction_right_n: f64,
    /// max(|R1|, |R2|) (N)
    pub max_shear_force_n: f64,
    /// Largest |M| (N·m)
    pub max_bending_moment_nm: f64,
    /// Where the largest |M| occurs (mm)
    pub max_moment_position_mm: f64,

    // Stresses
    pub max_normal_stress_mpa: f64,
    pub max_shear_stress_mpa: f64,
    /// fy/σ; 0 without a yield strength, infinite when unstressed
    /// (`null` in JSON)
    #[serde(with = "stress::unbounded")]
    pub safety_factor: f64,

    // Section
    pub cross_section_area_m2: f64,
    pub moment_of_inertia_m4: f64,
    pub section_modulus_m3: f64,

    // Frame supports
    /// Largest corner reaction (N); 0 in beam mode
    pub corner_reaction_force_n: f64,
    /// All four corner reactions; zero in beam mode
    pub corner_reactions: CornerReactions,
    /// Frame member self weight added to the corners (N)
    pub frame_self_weight_n: f64,

    // Deflection
    /// Largest |δ| (m)
    pub max_deflection_m: f64,
    /// Where the largest |δ| occurs (mm)
    pub max_deflection_position_mm: f64,
}

/// Everything a solve produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub results: Results,
    pub diagrams: DiagramSeries,
    pub warnings: Vec<SolveWarning>,
}

/// Solve with [`SolverSettings::default`].
pub fn solve(input: &AnalysisInput) -> Solution {
    solve_with(input, &SolverSettings::default())
}

/// Solve one snapshot.
pub fn solve_with(input: &AnalysisInput, settings: &SolverSettings) -> Solution {
    let mut warnings = Vec::new();
    let samples = settings.diagram_samples.max(2);

    let section = input.cross_section.properties();
    let e_pa = input.material.elastic_modulus_pa();
    let ei = if e_pa > 0.0 && section.moment_of_inertia_m4 > 0.0 {
        e_pa * section.moment_of_inertia_m4
    } else {
        warnings.push(SolveWarning::DeflectionDisabled);
        0.0
    };

    let (member, total_applied_load_n, total_beams, load_per_beam_n, corners, self_weight_n) =
        match input.mode {
            AnalysisMode::SimpleBeam => {
                let setup = simple_beam::build_beam_model(input, ei, &mut warnings);
                let member = setup.model.analyze(setup.length_m, samples);
                (
                    member,
                    setup.total_applied_load_n,
                    1,
                    setup.total_applied_load_n,
                    CornerReactions::default(),
                    0.0,
                )
            }
            AnalysisMode::BaseFrame => {
                let setup = base_frame::build_frame(input, section.area_m2, ei, settings, &mut warnings);
                let member = setup.model.analyze(setup.critical_length_m, samples);
                (
                    member,
                    setup.total_applied_load_n,
                    base_frame::FRAME_MEMBERS,
                    setup.load_per_beam_n,
                    setup.corners,
                    setup.self_weight_n,
                )
            }
        };

    let check = stress::evaluate(
        member.max_bending_moment_nm,
        member.max_shear_force_n,
        &section,
        validate_number(input.material.yield_strength_mpa, 0.0),
        &mut warnings,
    );

    let results = Results {
        mode: input.mode,
        total_applied_load_n,
        total_beams,
        load_per_beam_n,
        reaction_left_n: member.reaction_left_n,
        reaction_right_n: member.reaction_right_n,
        max_shear_force_n: member.max_shear_force_n,
        max_bending_moment_nm: member.max_bending_moment_nm,
        max_moment_position_mm: m_to_mm(member.max_moment_position_m),
        max_normal_stress_mpa: check.max_normal_stress_mpa,
        max_shear_stress_mpa: check.max_shear_stress_mpa,
        safety_factor: check.safety_factor,
        cross_section_area_m2: section.area_m2,
        moment_of_inertia_m4: section.moment_of_inertia_m4,
        section_modulus_m3: section.section_modulus_m3,
        corner_reaction_force_n: if input.mode == AnalysisMode::BaseFrame {
            corners.max()
        } else {
            0.0
        },
        corner_reactions: corners,
        frame_self_weight_n: self_weight_n,
        max_deflection_m: member.max_deflection_m,
        max_deflection_position_mm: m_to_mm(member.max_deflection_position_m),
    };

    Solution {
        results,
        diagrams: member.diagrams,
        warnings,
    }
}
