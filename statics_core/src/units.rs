//! # Unit Types
//!
//! Force units accepted on input, plus the millimetre/metre newtypes that
//! carry authored geometry into solver units.
//!
//! ## Conventions
//!
//! - Geometry is authored in millimetres and solved in metres
//! - Forces are authored as N, kg or lbs and solved in newtons
//! - Stress is reported in MPa, elastic modulus authored in GPa
//!
//! ## Example
//!
//! ```rust
//! use statics_core::units::{to_newtons, ForceUnit, Meters, Millimeters};
//!
//! let span: Meters = Millimeters(1500.0).into();
//! assert_eq!(span.0, 1.5);
//!
//! assert!((to_newtons(10.0, ForceUnit::Kilograms) - 98.1).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Standard gravity used for mass-to-force conversion (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Newtons per pound-force
pub const NEWTONS_PER_POUND: f64 = 4.44822;

/// Pascals per megapascal
pub const PA_PER_MPA: f64 = 1e6;

/// Pascals per gigapascal
pub const PA_PER_GPA: f64 = 1e9;

// ============================================================================
// Force Units
// ============================================================================

/// Unit tag carried by every authored load magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Newtons
    #[default]
    #[serde(rename = "N")]
    Newtons,
    /// Kilograms (mass, converted through standard gravity)
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds-force
    #[serde(rename = "lbs")]
    Pounds,
}

impl ForceUnit {
    /// Multiplier that turns a magnitude in this unit into newtons
    pub fn newton_factor(self) -> f64 {
        match self {
            ForceUnit::Newtons => 1.0,
            ForceUnit::Kilograms => GRAVITY,
            ForceUnit::Pounds => NEWTONS_PER_POUND,
        }
    }

    /// Short symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newtons => "N",
            ForceUnit::Kilograms => "kg",
            ForceUnit::Pounds => "lbs",
        }
    }
}

impl std::fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a unit-tagged magnitude to newtons.
///
/// kg → N multiplies by 9.81, lbs → N by 4.44822, N is unchanged.
pub fn to_newtons(magnitude: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newtons => magnitude,
        other => magnitude * other.newton_factor(),
    }
}

// ============================================================================
// Length Newtypes
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

/// Millimetres to metres on raw values
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    Meters::from(Millimeters(mm)).0
}

/// Metres to millimetres on raw values
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_newtons() {
        assert_eq!(to_newtons(100.0, ForceUnit::Newtons), 100.0);
        assert!((to_newtons(100.0, ForceUnit::Kilograms) - 981.0).abs() < 1e-9);
        assert!((to_newtons(100.0, ForceUnit::Pounds) - 444.822).abs() < 1e-9);
    }

    #[test]
    fn test_length_conversion() {
        let m: Meters = Millimeters(250.0).into();
        assert_eq!(m.0, 0.25);
        assert_eq!(m_to_mm(mm_to_m(1234.0)), 1234.0);
    }

    #[test]
    fn test_unit_serialization() {
        assert_eq!(serde_json::to_string(&ForceUnit::Pounds).unwrap(), "\"lbs\"");
        let unit: ForceUnit = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(unit, ForceUnit::Kilograms);
    }
}
