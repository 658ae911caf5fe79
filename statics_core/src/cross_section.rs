//! # Cross-Sections
//!
//! Member cross-section shapes and their bending properties.
//!
//! Dimensions are authored in millimetres. [`CrossSection::properties`]
//! guards every dimension with [`validate_positive`], converts to metres and
//! evaluates the formulas in [`crate::equations::section`].
//!
//! ## JSON Example
//!
//! ```json
//! { "type": "IBeam", "height": 200.0, "flange_width": 100.0,
//!   "flange_thickness": 10.0, "web_thickness": 6.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use statics_core::cross_section::CrossSection;
//!
//! let props = CrossSection::Rectangular { width: 100.0, height: 218.0 }.properties();
//! assert!((props.area_m2 - 0.0218).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    circular_area, circular_moment_of_inertia, flanged_area, flanged_moment_of_inertia,
    rectangular_area, rectangular_moment_of_inertia, symmetric_section_modulus,
};
use crate::units::mm_to_m;
use crate::validation::validate_positive;

/// Fallback rectangle width (mm)
pub const DEFAULT_RECT_WIDTH_MM: f64 = 100.0;
/// Fallback rectangle height (mm)
pub const DEFAULT_RECT_HEIGHT_MM: f64 = 218.0;
/// Fallback flanged-section depth (mm)
pub const DEFAULT_FLANGED_HEIGHT_MM: f64 = 200.0;
/// Fallback flange width (mm)
pub const DEFAULT_FLANGE_WIDTH_MM: f64 = 100.0;
/// Fallback flange thickness (mm)
pub const DEFAULT_FLANGE_THICKNESS_MM: f64 = 10.0;
/// Fallback web thickness (mm)
pub const DEFAULT_WEB_THICKNESS_MM: f64 = 6.0;
/// Fallback circle diameter (mm)
pub const DEFAULT_DIAMETER_MM: f64 = 100.0;

/// Member cross-section, all dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSection {
    /// Solid rectangle
    Rectangular { width: f64, height: f64 },
    /// Doubly symmetric I-beam
    IBeam {
        height: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    /// Channel; uses the I-beam formulas (shear-centre offset not modelled)
    CChannel {
        height: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    /// Solid round bar
    Circular { diameter: f64 },
}

impl Default for CrossSection {
    fn default() -> Self {
        CrossSection::Rectangular {
            width: DEFAULT_RECT_WIDTH_MM,
            height: DEFAULT_RECT_HEIGHT_MM,
        }
    }
}

/// Bending properties of a cross-section in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Strong-axis moment of inertia (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Elastic section modulus (m³)
    pub section_modulus_m3: f64,
}

impl CrossSection {
    /// Compute area, moment of inertia and section modulus.
    ///
    /// Non-finite or non-positive dimensions are replaced by the module's
    /// fallback constants before conversion.
    pub fn properties(&self) -> SectionProperties {
        match *self {
            CrossSection::Rectangular { width, height } => {
                let w = mm_to_m(validate_positive(width, DEFAULT_RECT_WIDTH_MM));
                let h = mm_to_m(validate_positive(height, DEFAULT_RECT_HEIGHT_MM));
                let i = rectangular_moment_of_inertia(w, h);
                SectionProperties {
                    area_m2: rectangular_area(w, h),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: symmetric_section_modulus(i, h),
                }
            }
            CrossSection::IBeam {
                height,
                flange_width,
                flange_thickness,
                web_thickness,
            }
            | CrossSection::CChannel {
                height,
                flange_width,
                flange_thickness,
                web_thickness,
            } => {
                let h = mm_to_m(validate_positive(height, DEFAULT_FLANGED_HEIGHT_MM));
                let bf = mm_to_m(validate_positive(flange_width, DEFAULT_FLANGE_WIDTH_MM));
                let tf = mm_to_m(validate_positive(flange_thickness, DEFAULT_FLANGE_THICKNESS_MM));
                let tw = mm_to_m(validate_positive(web_thickness, DEFAULT_WEB_THICKNESS_MM));
                let i = flanged_moment_of_inertia(h, bf, tf, tw);
                SectionProperties {
                    area_m2: flanged_area(h, bf, tf, tw),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: symmetric_section_modulus(i, h),
                }
            }
            CrossSection::Circular { diameter } => {
                let d = mm_to_m(validate_positive(diameter, DEFAULT_DIAMETER_MM));
                let i = circular_moment_of_inertia(d);
                SectionProperties {
                    area_m2: circular_area(d),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: symmetric_section_modulus(i, d),
                }
            }
        }
    }

    /// Display name of the shape
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::IBeam { .. } => "I-Beam",
            CrossSection::CChannel { .. } => "C-Channel",
            CrossSection::Circular { .. } => "Circular",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flanged(h: f64) -> (CrossSection, CrossSection) {
        (
            CrossSection::IBeam {
                height: h,
                flange_width: 100.0,
                flange_thickness: 10.0,
                web_thickness: 6.0,
            },
            CrossSection::CChannel {
                height: h,
                flange_width: 100.0,
                flange_thickness: 10.0,
                web_thickness: 6.0,
            },
        )
    }

    #[test]
    fn test_rectangular_inertia_exact() {
        let props = CrossSection::Rectangular {
            width: 100.0,
            height: 218.0,
        }
        .properties();
        let expected = 0.100 * 0.218_f64.powi(3) / 12.0;
        assert!((props.moment_of_inertia_m4 - expected).abs() < 1e-9);
        assert_relative_eq!(props.section_modulus_m3, expected / 0.109, max_relative = 1e-12);
    }

    #[test]
    fn test_channel_matches_ibeam() {
        let (ibeam, channel) = flanged(200.0);
        assert_eq!(ibeam.properties(), channel.properties());
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        let bad = CrossSection::Rectangular {
            width: f64::NAN,
            height: -5.0,
        };
        assert_eq!(bad.properties(), CrossSection::default().properties());
    }

    #[test]
    fn test_circular_properties() {
        let props = CrossSection::Circular { diameter: 50.0 }.properties();
        assert_relative_eq!(
            props.moment_of_inertia_m4,
            std::f64::consts::PI * 0.05_f64.powi(4) / 64.0,
            max_relative = 1e-12
        );
        assert!(props.section_modulus_m3 > 0.0);
    }

    #[test]
    fn test_serialization_tag() {
        let (ibeam, _) = flanged(300.0);
        let json = serde_json::to_string(&ibeam).unwrap();
        assert!(json.contains("\"type\":\"IBeam\""));
        let back: CrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ibeam);
    }
}
