//! Stress & safety check.
//!
//! Bending stress σ = M/S, average-to-peak shear τ = 1.5·V/A (rectangular
//! web approximation), and the yield safety factor fy/σ.

use serde::{Deserialize, Serialize};

use super::warnings::SolveWarning;
use crate::cross_section::SectionProperties;
use crate::units::PA_PER_MPA;

/// Peak stresses and the resulting margin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressCheck {
    /// σ = M/S (MPa)
    pub max_normal_stress_mpa: f64,
    /// τ = 1.5·V/A (MPa)
    pub max_shear_stress_mpa: f64,
    /// fy/σ; 0 without a yield strength, infinite when unstressed
    #[serde(with = "unbounded")]
    pub safety_factor: f64,
}

/// Evaluate stresses for a moment (N·m) and shear (N) on `section`.
///
/// A zero section modulus or area yields zero stress and a warning.
pub fn evaluate(
    max_moment_nm: f64,
    max_shear_n: f64,
    section: &SectionProperties,
    yield_strength_mpa: f64,
    warnings: &mut Vec<SolveWarning>,
) -> StressCheck {
    let max_normal_stress_mpa = if section.section_modulus_m3 > 0.0 {
        max_moment_nm / section.section_modulus_m3 / PA_PER_MPA
    } else {
        warnings.push(SolveWarning::ZeroSectionModulus);
        0.0
    };

    let max_shear_stress_mpa = if section.area_m2 > 0.0 {
        1.5 * max_shear_n / section.area_m2 / PA_PER_MPA
    } else {
        warnings.push(SolveWarning::ZeroArea);
        0.0
    };

    StressCheck {
        max_normal_stress_mpa,
        max_shear_stress_mpa,
        safety_factor: safety_factor(yield_strength_mpa, max_normal_stress_mpa),
    }
}

/// fy/σ when a yield strength is known, else 0.
pub fn safety_factor(yield_strength_mpa: f64, stress_mpa: f64) -> f64 {
    if yield_strength_mpa.is_nan() || yield_strength_mpa <= 0.0 {
        return 0.0;
    }
    if stress_mpa == 0.0 {
        return f64::INFINITY;
    }
    yield_strength_mpa / stress_mpa.abs()
}

/// Serde adapter for ratios that may be infinite.
///
/// JSON has no infinity, so `+∞` is written as `null` and read back from it.
pub mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::INFINITY {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn section(area: f64, modulus: f64) -> SectionProperties {
        SectionProperties {
            area_m2: area,
            moment_of_inertia_m4: 0.0,
            section_modulus_m3: modulus,
        }
    }

    #[test]
    fn test_stresses_and_margin() {
        let mut warnings = Vec::new();
        let check = evaluate(250.0, 500.0, &section(0.0218, 7.92e-4), 235.0, &mut warnings);

        assert_relative_eq!(check.max_normal_stress_mpa, 250.0 / 7.92e-4 / 1e6, max_relative = 1e-12);
        assert_relative_eq!(check.max_shear_stress_mpa, 750.0 / 0.0218 / 1e6, max_relative = 1e-12);
        assert_relative_eq!(check.safety_factor, 235.0 / check.max_normal_stress_mpa, max_relative = 1e-12);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_section_warns() {
        let mut warnings = Vec::new();
        let check = evaluate(250.0, 500.0, &section(0.0, 0.0), 235.0, &mut warnings);
        assert_eq!(check.max_normal_stress_mpa, 0.0);
        assert_eq!(check.max_shear_stress_mpa, 0.0);
        assert_eq!(warnings, vec![SolveWarning::ZeroSectionModulus, SolveWarning::ZeroArea]);
    }

    #[test]
    fn test_safety_factor_policy() {
        assert_eq!(safety_factor(0.0, 100.0), 0.0);
        assert_eq!(safety_factor(-5.0, 100.0), 0.0);
        assert_eq!(safety_factor(f64::NAN, 100.0), 0.0);
        assert_eq!(safety_factor(235.0, 0.0), f64::INFINITY);
        assert_eq!(safety_factor(200.0, 100.0), 2.0);
    }

    #[test]
    fn test_unstressed_margin_survives_json() {
        let check = StressCheck {
            max_normal_stress_mpa: 0.0,
            max_shear_stress_mpa: 0.0,
            safety_factor: f64::INFINITY,
        };
        let json = serde_json::to_string(&check).unwrap();
        assert!(json.contains("\"safety_factor\":null"));

        let back: StressCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, check);

        let finite: StressCheck = serde_json::from_str(
            r#"{"max_normal_stress_mpa":100.0,"max_shear_stress_mpa":1.0,"safety_factor":2.35}"#,
        )
        .unwrap();
        assert_eq!(finite.safety_factor, 2.35);
    }
}
