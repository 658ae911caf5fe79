//! # statics_core - Structural Statics Engine
//!
//! Internal forces, stresses, safety margins and deflection curves for two
//! idealized structures:
//!
//! - a simply supported beam (with optional overhangs) under point and
//!   uniform loads;
//! - a rectangular base frame on four corner supports under point, uniform
//!   and area loads plus weighted sections.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`solve`] is a pure function of one input snapshot
//! - **JSON-First**: every input and result implements Serialize/Deserialize
//! - **Never fails**: bad numbers fall back to defaults and every such
//!   decision is reported as a structured [`SolveWarning`]
//!
//! ## Quick Start
//!
//! ```rust
//! use statics_core::calculations::{AnalysisInput, Geometry};
//! use statics_core::loads::Load;
//! use statics_core::units::ForceUnit;
//!
//! let mut input = AnalysisInput::base_frame("Skid", Geometry::frame(2000.0, 1000.0));
//! input.loads.push(Load::point(120.0, ForceUnit::Kilograms, 1000.0));
//!
//! let solution = statics_core::solve(&input);
//! let corners = solution.results.corner_reactions;
//! assert!((corners.r1_n - corners.r4_n).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Solver pipeline, beam and frame analyses, diagrams
//! - [`cross_section`] - Section shapes and their bending properties
//! - [`equations`] - Closed-form section and beam formulas
//! - [`loads`] - Loads and weighted frame sections
//! - [`materials`] - Material records and the preset catalog
//! - [`project`] / [`file_io`] - Project documents with atomic saves
//! - [`settings`] - Solver settings
//! - [`units`] / [`validation`] - Unit conversion and input guards
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod cross_section;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod project;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, solve_with, AnalysisInput, AnalysisMode, Results, Solution, SolveWarning};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{Project, ProjectMetadata};
pub use settings::SolverSettings;
