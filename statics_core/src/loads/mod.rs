//! # Loads
//!
//! Applied loads and the frame's weighted sections.
//!
//! - [`Load`] - Point, uniform and distributed (area) loads, unit-tagged
//! - [`Section`] - A frame segment carrying casing weight and a primary load
//!
//! Magnitudes stay in their authored unit until a solver asks for newtons
//! through [`Load::magnitude_n`] / [`Section::total_weight_n`].
//!
//! ## Example
//!
//! ```rust
//! use statics_core::loads::Load;
//! use statics_core::units::ForceUnit;
//!
//! let crate_load = Load::point(50.0, ForceUnit::Kilograms, 750.0).with_name("Pump");
//! assert!((crate_load.total_force_n() - 490.5).abs() < 1e-9);
//!
//! let rail = Load::uniform(200.0, ForceUnit::Newtons, 0.0, 2000.0);
//! assert!(rail.validate().is_ok());
//! assert!((rail.total_force_n() - 400.0).abs() < 1e-9);
//! ```

pub mod section;

pub use section::Section;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::units::{mm_to_m, to_newtons, ForceUnit};
use crate::validation::{finite_or_none, validate_number};

/// How a load is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    /// Concentrated force at `start_position_mm`
    Point,
    /// Force per metre between `start_position_mm` and `end_position_mm`
    Uniform,
    /// Force per square metre over an area
    Distributed,
}

impl LoadKind {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point",
            LoadKind::Uniform => "Uniform",
            LoadKind::Distributed => "Distributed",
        }
    }
}

/// One applied load.
///
/// ## JSON Example
///
/// ```json
/// {
///   "kind": "Distributed",
///   "magnitude": 250.0,
///   "unit": "kg",
///   "start_position_mm": 400.0,
///   "load_length_mm": 600.0,
///   "load_width_mm": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Load distribution
    pub kind: LoadKind,

    /// Magnitude in `unit` (per metre for Uniform, per m² for Distributed)
    pub magnitude: f64,

    /// Unit of `magnitude`
    #[serde(default)]
    pub unit: ForceUnit,

    /// Position along the member (mm); start of the loaded extent
    pub start_position_mm: f64,

    /// End of a Uniform load (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_position_mm: Option<f64>,

    /// Loaded area of a Distributed load in beam mode (m²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,

    /// Patch length along the frame of a Distributed load (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_length_mm: Option<f64>,

    /// Patch width across the frame of a Distributed load (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_width_mm: Option<f64>,

    /// Offset of the patch's near edge across the frame (mm).
    /// When absent the patch is centred on the frame width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lateral_position_mm: Option<f64>,

    /// Optional label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Section this load belongs to (frame mode bookkeeping)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<Uuid>,
}

impl Load {
    fn with_kind(kind: LoadKind, magnitude: f64, unit: ForceUnit, start_position_mm: f64) -> Self {
        Load {
            kind,
            magnitude,
            unit,
            start_position_mm,
            end_position_mm: None,
            area_m2: None,
            load_length_mm: None,
            load_width_mm: None,
            lateral_position_mm: None,
            name: None,
            section_id: None,
        }
    }

    /// Concentrated load at `position_mm`.
    pub fn point(magnitude: f64, unit: ForceUnit, position_mm: f64) -> Self {
        Load::with_kind(LoadKind::Point, magnitude, unit, position_mm)
    }

    /// Uniform line load (per metre) from `start_mm` to `end_mm`.
    pub fn uniform(magnitude: f64, unit: ForceUnit, start_mm: f64, end_mm: f64) -> Self {
        let mut load = Load::with_kind(LoadKind::Uniform, magnitude, unit, start_mm);
        load.end_position_mm = Some(end_mm);
        load
    }

    /// Area load (per m²) given by its total area.
    pub fn distributed_area(magnitude: f64, unit: ForceUnit, position_mm: f64, area_m2: f64) -> Self {
        let mut load = Load::with_kind(LoadKind::Distributed, magnitude, unit, position_mm);
        load.area_m2 = Some(area_m2);
        load
    }

    /// Area load (per m²) over a rectangular patch starting at `start_mm`.
    pub fn distributed_patch(
        magnitude: f64,
        unit: ForceUnit,
        start_mm: f64,
        length_mm: f64,
        width_mm: f64,
    ) -> Self {
        let mut load = Load::with_kind(LoadKind::Distributed, magnitude, unit, start_mm);
        load.load_length_mm = Some(length_mm);
        load.load_width_mm = Some(width_mm);
        load
    }

    /// Set the label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach to a section
    pub fn in_section(mut self, section_id: Uuid) -> Self {
        self.section_id = Some(section_id);
        self
    }

    /// Place a distributed patch's near edge across the frame
    pub fn at_lateral(mut self, lateral_position_mm: f64) -> Self {
        self.lateral_position_mm = Some(lateral_position_mm);
        self
    }

    /// Display label, falling back to the kind name
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.kind.display_name())
    }

    /// Check the authoring invariants for this load's kind.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.magnitude.is_finite() {
            return Err(CalcError::invalid_input(
                "magnitude",
                self.magnitude.to_string(),
                "Magnitude must be a finite number",
            ));
        }
        if !self.start_position_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "start_position_mm",
                self.start_position_mm.to_string(),
                "Position must be a finite number",
            ));
        }
        match self.kind {
            LoadKind::Point => Ok(()),
            LoadKind::Uniform => {
                let end = finite_or_none(self.end_position_mm)
                    .ok_or_else(|| CalcError::missing_field("end_position_mm"))?;
                if end <= self.start_position_mm {
                    return Err(CalcError::invalid_input(
                        "end_position_mm",
                        end.to_string(),
                        "End position must be greater than start position",
                    ));
                }
                Ok(())
            }
            LoadKind::Distributed => {
                if self.loaded_area_m2().is_none() {
                    return Err(CalcError::missing_field(
                        "area_m2 (or load_length_mm and load_width_mm)",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Magnitude converted to newtons (per metre / per m² where applicable).
    pub fn magnitude_n(&self) -> f64 {
        to_newtons(validate_number(self.magnitude, 0.0), self.unit)
    }

    /// Uniform extent `(start, end)` in millimetres.
    pub fn extent_mm(&self) -> Option<(f64, f64)> {
        match self.kind {
            LoadKind::Uniform => {
                let end = finite_or_none(self.end_position_mm)?;
                (end > self.start_position_mm).then_some((self.start_position_mm, end))
            }
            _ => None,
        }
    }

    /// Patch dimensions `(length, width)` in millimetres, when both are positive.
    pub fn patch_mm(&self) -> Option<(f64, f64)> {
        let length = finite_or_none(self.load_length_mm).filter(|v| *v > 0.0)?;
        let width = finite_or_none(self.load_width_mm).filter(|v| *v > 0.0)?;
        Some((length, width))
    }

    /// Loaded area of a Distributed load (m²): the patch if given, else `area_m2`.
    pub fn loaded_area_m2(&self) -> Option<f64> {
        match self.patch_mm() {
            Some((length, width)) => Some(mm_to_m(length) * mm_to_m(width)),
            None => finite_or_none(self.area_m2).filter(|a| *a > 0.0),
        }
    }

    /// Resultant force in newtons; 0 when the load is malformed.
    pub fn total_force_n(&self) -> f64 {
        let magnitude = self.magnitude_n();
        match self.kind {
            LoadKind::Point => magnitude,
            LoadKind::Uniform => self
                .extent_mm()
                .map(|(start, end)| magnitude * mm_to_m(end - start))
                .unwrap_or(0.0),
            LoadKind::Distributed => self
                .loaded_area_m2()
                .map(|area| magnitude * area)
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_force() {
        let load = Load::point(100.0, ForceUnit::Pounds, 0.0);
        assert!((load.total_force_n() - 444.822).abs() < 1e-9);
        assert!(load.validate().is_ok());
    }

    #[test]
    fn test_uniform_requires_increasing_extent() {
        let backwards = Load::uniform(10.0, ForceUnit::Newtons, 500.0, 100.0);
        let err = backwards.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(backwards.total_force_n(), 0.0);

        let mut open = Load::uniform(10.0, ForceUnit::Newtons, 0.0, 100.0);
        open.end_position_mm = None;
        assert_eq!(open.validate().unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_distributed_requires_area() {
        let mut load = Load::distributed_area(100.0, ForceUnit::Newtons, 0.0, 0.5);
        assert!(load.validate().is_ok());
        assert!((load.total_force_n() - 50.0).abs() < 1e-12);

        load.area_m2 = None;
        assert!(load.validate().is_err());

        load.load_length_mm = Some(1000.0);
        assert!(load.validate().is_err());
        load.load_width_mm = Some(500.0);
        assert!(load.validate().is_ok());
    }

    #[test]
    fn test_patch_overrides_area() {
        let mut load = Load::distributed_patch(10.0, ForceUnit::Kilograms, 0.0, 2000.0, 1000.0);
        load.area_m2 = Some(99.0);
        assert_eq!(load.loaded_area_m2(), Some(2.0));
        assert!((load.total_force_n() - 196.2).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_magnitude_rejected() {
        let load = Load::point(f64::NAN, ForceUnit::Newtons, 10.0);
        assert!(load.validate().is_err());
        assert_eq!(load.total_force_n(), 0.0);
    }

    #[test]
    fn test_label() {
        assert_eq!(Load::point(1.0, ForceUnit::Newtons, 0.0).label(), "Point");
        assert_eq!(Load::point(1.0, ForceUnit::Newtons, 0.0).with_name("Motor").label(), "Motor");
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{ "kind": "Point", "magnitude": 12.0, "start_position_mm": 30.0 }"#;
        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load.unit, ForceUnit::Newtons);
        assert!(load.end_position_mm.is_none());

        let out = serde_json::to_string(&load).unwrap();
        assert!(!out.contains("area_m2"));
    }
}
