//! Weighted frame sections.
//!
//! A section is a stretch of the base frame carrying equipment: its casing
//! weight plus the primary load it supports. Sections may overlap and need
//! not cover the frame contiguously.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::units::{to_newtons, ForceUnit};
use crate::validation::validate_number;

/// A weighted stretch of the base frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique id, referenced by [`super::Load::section_id`]
    pub id: Uuid,
    /// Start along the frame length (mm)
    pub start_position_mm: f64,
    /// End along the frame length (mm)
    pub end_position_mm: f64,
    /// Casing self weight
    #[serde(default)]
    pub casing_weight: f64,
    #[serde(default)]
    pub casing_weight_unit: ForceUnit,
    /// Load carried by the section
    #[serde(default)]
    pub primary_load: f64,
    #[serde(default)]
    pub primary_load_unit: ForceUnit,
    /// Optional label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Section {
    /// New unweighted section with a fresh id.
    pub fn new(start_position_mm: f64, end_position_mm: f64) -> Self {
        Section {
            id: Uuid::new_v4(),
            start_position_mm,
            end_position_mm,
            casing_weight: 0.0,
            casing_weight_unit: ForceUnit::Newtons,
            primary_load: 0.0,
            primary_load_unit: ForceUnit::Newtons,
            name: None,
        }
    }

    pub fn with_casing_weight(mut self, weight: f64, unit: ForceUnit) -> Self {
        self.casing_weight = weight;
        self.casing_weight_unit = unit;
        self
    }

    pub fn with_primary_load(mut self, load: f64, unit: ForceUnit) -> Self {
        self.primary_load = load;
        self.primary_load_unit = unit;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check `end > start` with finite positions.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.start_position_mm.is_finite() || !self.end_position_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "position",
                format!("{}..{}", self.start_position_mm, self.end_position_mm),
                "Section positions must be finite numbers",
            ));
        }
        if self.end_position_mm <= self.start_position_mm {
            return Err(CalcError::invalid_input(
                "end_position_mm",
                self.end_position_mm.to_string(),
                "End position must be greater than start position",
            ));
        }
        Ok(())
    }

    /// Casing weight plus primary load, in newtons.
    pub fn total_weight_n(&self) -> f64 {
        to_newtons(validate_number(self.casing_weight, 0.0), self.casing_weight_unit)
            + to_newtons(validate_number(self.primary_load, 0.0), self.primary_load_unit)
    }

    /// Midpoint along the frame length (mm).
    pub fn centroid_mm(&self) -> f64 {
        (self.start_position_mm + self.end_position_mm) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_weight_mixed_units() {
        let section = Section::new(0.0, 1000.0)
            .with_casing_weight(10.0, ForceUnit::Kilograms)
            .with_primary_load(100.0, ForceUnit::Pounds);
        let expected = 98.1 + 444.822;
        assert!((section.total_weight_n() - expected).abs() < 1e-9);
        assert_eq!(section.centroid_mm(), 500.0);
    }

    #[test]
    fn test_validate() {
        assert!(Section::new(0.0, 10.0).validate().is_ok());
        assert!(Section::new(10.0, 10.0).validate().is_err());
        assert!(Section::new(f64::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Section::new(0.0, 1.0).id, Section::new(0.0, 1.0).id);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let section = Section::new(100.0, 900.0)
            .with_casing_weight(25.0, ForceUnit::Kilograms)
            .with_name("Pump skid");
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"casing_weight_unit\":\"kg\""));
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }
}
