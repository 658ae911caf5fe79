//! # Materials
//!
//! Isotropic material records and the catalog they are picked from.
//!
//! The solver never consults a catalog: the caller resolves a [`Material`]
//! (from [`MaterialCatalog::standard`], a catalog of its own, or by hand)
//! and passes it in with the rest of the input snapshot.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::materials::MaterialCatalog;
//!
//! let steel = MaterialCatalog::standard().get("Structural Steel S235").unwrap();
//! assert_eq!(steel.yield_strength_mpa, 235.0);
//! assert_eq!(steel.elastic_modulus_pa(), 210.0e9);
//! ```

pub mod catalog;

pub use catalog::{MaterialCatalog, CUSTOM_MATERIAL_NAME};

use serde::{Deserialize, Serialize};

use crate::units::PA_PER_GPA;
use crate::validation::validate_number;

/// Isotropic material properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Structural Steel S235",
///   "yield_strength_mpa": 235.0,
///   "elastic_modulus_gpa": 210.0,
///   "density_kg_m3": 7850.0,
///   "poissons_ratio": 0.3,
///   "thermal_expansion": 1.2e-5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name (catalog key)
    pub name: String,
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Young's modulus (GPa)
    pub elastic_modulus_gpa: f64,
    /// Mass density (kg/m³)
    pub density_kg_m3: f64,
    /// Poisson's ratio
    pub poissons_ratio: f64,
    /// Linear thermal expansion coefficient (1/K)
    pub thermal_expansion: f64,
}

impl Material {
    /// Create a material record.
    pub fn new(
        name: impl Into<String>,
        yield_strength_mpa: f64,
        elastic_modulus_gpa: f64,
        density_kg_m3: f64,
        poissons_ratio: f64,
        thermal_expansion: f64,
    ) -> Self {
        Material {
            name: name.into(),
            yield_strength_mpa,
            elastic_modulus_gpa,
            density_kg_m3,
            poissons_ratio,
            thermal_expansion,
        }
    }

    /// An all-zero "Custom" material, the editable catalog entry.
    pub fn custom() -> Self {
        Material::new(CUSTOM_MATERIAL_NAME, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Young's modulus in pascals, 0 when not a finite number.
    pub fn elastic_modulus_pa(&self) -> f64 {
        validate_number(self.elastic_modulus_gpa, 0.0) * PA_PER_GPA
    }
}

impl Default for Material {
    fn default() -> Self {
        MaterialCatalog::standard()
            .entries()
            .first()
            .cloned()
            .unwrap_or_else(Material::custom)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (fy = {} MPa, E = {} GPa)",
            self.name, self.yield_strength_mpa, self.elastic_modulus_gpa
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        let mat = Material::new("Test", 250.0, 200.0, 7850.0, 0.3, 1.2e-5);
        assert_eq!(mat.elastic_modulus_pa(), 200.0e9);
    }

    #[test]
    fn test_custom_is_zeroed() {
        let mat = Material::custom();
        assert_eq!(mat.name, CUSTOM_MATERIAL_NAME);
        assert_eq!(mat.elastic_modulus_pa(), 0.0);
        assert_eq!(mat.density_kg_m3, 0.0);
    }

    #[test]
    fn test_non_finite_modulus() {
        let mut mat = Material::custom();
        mat.elastic_modulus_gpa = f64::NAN;
        assert_eq!(mat.elastic_modulus_pa(), 0.0);
    }

    #[test]
    fn test_default_is_first_preset() {
        let mat = Material::default();
        assert_eq!(mat, MaterialCatalog::standard().entries()[0]);
    }

    #[test]
    fn test_material_serialization() {
        let mat = Material::default();
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("yield_strength_mpa"));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }
}
