//! Non-fatal solve diagnostics.
//!
//! A solve always returns complete results. Whenever it skips an input,
//! ignores part of one, or falls back to a degenerate policy it records a
//! [`SolveWarning`] so the caller can tell "zero because nothing is loaded"
//! from "zero because the input was unusable".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum SolveWarning {
    /// A load failed its authoring checks and was left out entirely
    InvalidLoadSkipped { index: usize, reason: String },

    /// A section failed its authoring checks and was left out entirely
    InvalidSectionSkipped { index: usize, reason: String },

    /// Beam mode: a distributed load counts toward the total applied load only
    DistributedLoadNotModeled { index: usize },

    /// Beam mode: (part of) a load lies outside the supports.
    /// Point loads keep their reactions but add no deflection; uniform loads
    /// are clipped to the span.
    LoadOutsideSpan { index: usize, position_mm: f64 },

    /// A load references a section id that is not in the section list
    UnknownSection { index: usize, section_id: Uuid },

    /// Beam mode: sections only apply to the base frame
    SectionsIgnored { count: usize },

    /// Support span is zero or negative; reactions are left at zero
    DegenerateSpan { span_mm: f64 },

    /// E or I is not positive; deflection is reported as zero
    DeflectionDisabled,

    /// Section modulus is zero; normal stress is reported as zero
    ZeroSectionModulus,

    /// Cross-section area is zero; shear stress is reported as zero
    ZeroArea,
}

impl SolveWarning {
    /// Short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            SolveWarning::InvalidLoadSkipped { .. } => "INVALID_LOAD_SKIPPED",
            SolveWarning::InvalidSectionSkipped { .. } => "INVALID_SECTION_SKIPPED",
            SolveWarning::DistributedLoadNotModeled { .. } => "DISTRIBUTED_LOAD_NOT_MODELED",
            SolveWarning::LoadOutsideSpan { .. } => "LOAD_OUTSIDE_SPAN",
            SolveWarning::UnknownSection { .. } => "UNKNOWN_SECTION",
            SolveWarning::SectionsIgnored { .. } => "SECTIONS_IGNORED",
            SolveWarning::DegenerateSpan { .. } => "DEGENERATE_SPAN",
            SolveWarning::DeflectionDisabled => "DEFLECTION_DISABLED",
            SolveWarning::ZeroSectionModulus => "ZERO_SECTION_MODULUS",
            SolveWarning::ZeroArea => "ZERO_AREA",
        }
    }
}

impl std::fmt::Display for SolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveWarning::InvalidLoadSkipped { index, reason } => {
                write!(f, "load #{} skipped: {}", index + 1, reason)
            }
            SolveWarning::InvalidSectionSkipped { index, reason } => {
                write!(f, "section #{} skipped: {}", index + 1, reason)
            }
            SolveWarning::DistributedLoadNotModeled { index } => write!(
                f,
                "load #{}: distributed loads on a beam count toward the total only",
                index + 1
            ),
            SolveWarning::LoadOutsideSpan { index, position_mm } => write!(
                f,
                "load #{} at {} mm extends beyond the supports",
                index + 1,
                position_mm
            ),
            SolveWarning::UnknownSection { index, section_id } => {
                write!(f, "load #{} references unknown section {}", index + 1, section_id)
            }
            SolveWarning::SectionsIgnored { count } => {
                write!(f, "{} section(s) ignored outside base frame mode", count)
            }
            SolveWarning::DegenerateSpan { span_mm } => {
                write!(f, "support span {} mm is not positive; reactions are zero", span_mm)
            }
            SolveWarning::DeflectionDisabled => {
                f.write_str("elastic modulus or moment of inertia is not positive; deflection is zero")
            }
            SolveWarning::ZeroSectionModulus => {
                f.write_str("section modulus is zero; normal stress is zero")
            }
            SolveWarning::ZeroArea => f.write_str("cross-section area is zero; shear stress is zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let w = SolveWarning::DistributedLoadNotModeled { index: 0 };
        assert!(w.to_string().starts_with("load #1"));
        assert_eq!(w.code(), "DISTRIBUTED_LOAD_NOT_MODELED");
    }

    #[test]
    fn test_serialization_tag() {
        let json = serde_json::to_string(&SolveWarning::DeflectionDisabled).unwrap();
        assert_eq!(json, r#"{"type":"DeflectionDisabled"}"#);
    }
}
