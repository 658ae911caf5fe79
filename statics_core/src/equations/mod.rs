//! # Structural Mechanics Equations
//!
//! Closed-form formulas used by the solvers, kept in one place so they can be
//! checked against references independently of the solver plumbing.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, deflection)
//! - [`section`] - Cross-section properties (A, I, S)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod section;

pub use beam::{
    partial_uniform_deflection,
    point_load_deflection,
    point_load_reactions,
    uniform_load_deflection,
    uniform_load_max_deflection,
    uniform_load_max_moment,
};

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    flanged_area,
    flanged_moment_of_inertia,
    flanged_web_height,
    rectangular_area,
    rectangular_moment_of_inertia,
    symmetric_section_modulus,
};
