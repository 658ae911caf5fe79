//! # Cross-Section Property Formulas
//!
//! Area, moment of inertia and elastic section modulus for the four shapes
//! the solver supports. Inputs are in metres, outputs in m², m⁴ and m³.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia about the strong (horizontal) centroidal axis
//! - `S` = Elastic section modulus, `I / c` with `c` the extreme-fibre distance
//! - `h` = Overall depth, `w`/`bf` = width / flange width
//! - `tf` = Flange thickness, `tw` = Web thickness

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Area of a solid rectangle.
///
/// # Formula
/// A = w × h
#[inline]
pub fn rectangular_area(w: f64, h: f64) -> f64 {
    w * h
}

/// Moment of inertia of a solid rectangle about its horizontal centroidal axis.
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          w
/// ```
///
/// # Formula
/// I = w·h³/12
///
/// # Example
/// ```rust
/// use statics_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.100, 0.218);
/// assert!((i - 0.100 * 0.218_f64.powi(3) / 12.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(w: f64, h: f64) -> f64 {
    w * h.powi(3) / 12.0
}

// =============================================================================
// FLANGED SECTIONS (I-BEAM, C-CHANNEL)
// =============================================================================

/// Clear web height between the flanges, never negative.
#[inline]
pub fn flanged_web_height(h: f64, tf: f64) -> f64 {
    (h - 2.0 * tf).max(0.0)
}

/// Area of a doubly flanged section.
///
/// ```text
///    ┌───────bf───────┐
///    └──────┐  ┌──────┘ tf
///           │tw│
///           │  │   h
///    ┌──────┘  └──────┐
///    └────────────────┘ tf
/// ```
///
/// # Formula
/// A = 2·bf·tf + (h − 2tf)·tw
#[inline]
pub fn flanged_area(h: f64, bf: f64, tf: f64, tw: f64) -> f64 {
    2.0 * bf * tf + flanged_web_height(h, tf) * tw
}

/// Moment of inertia of a doubly flanged section about the strong axis.
///
/// Each flange contributes its own `bf·tf³/12` plus the parallel-axis term
/// `bf·tf·d²` with `d = (h − tf)/2`; the web adds `tw·(h − 2tf)³/12`.
///
/// # Formula
/// I = 2·(bf·tf³/12 + bf·tf·d²) + tw·(h − 2tf)³/12
///
/// The same expression is used for channels: the channel's offset shear
/// centre is not modelled, so a C-channel with the same plate sizes reads
/// the same I as an I-beam.
#[inline]
pub fn flanged_moment_of_inertia(h: f64, bf: f64, tf: f64, tw: f64) -> f64 {
    let flange_self = bf * tf.powi(3) / 12.0;
    let d = (h - tf) / 2.0;
    let flange = flange_self + bf * tf * d * d;
    let web = tw * flanged_web_height(h, tf).powi(3) / 12.0;
    2.0 * flange + web
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Area of a solid circle of diameter `d`.
///
/// # Formula
/// A = π(d/2)²
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * (d / 2.0).powi(2)
}

/// Moment of inertia of a solid circle of diameter `d`.
///
/// # Formula
/// I = π·d⁴/64
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Elastic section modulus `S = I / c` for a section symmetric about its
/// bending axis, with `c = depth / 2`.
///
/// Returns 0 for a non-positive depth.
#[inline]
pub fn symmetric_section_modulus(i: f64, depth: f64) -> f64 {
    if depth <= 0.0 {
        0.0
    } else {
        i / (depth / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_properties() {
        let (w, h) = (0.100, 0.218);
        assert_relative_eq!(rectangular_area(w, h), 0.0218, epsilon = 1e-12);

        let i = rectangular_moment_of_inertia(w, h);
        assert!((i - 0.100 * 0.218_f64.powi(3) / 12.0).abs() < 1e-9);

        // S = I/(h/2) = w·h²/6
        let s = symmetric_section_modulus(i, h);
        assert_relative_eq!(s, w * h * h / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_flanged_properties() {
        // 200 deep, 100 wide, 10 flanges, 6 web (metres)
        let (h, bf, tf, tw) = (0.200, 0.100, 0.010, 0.006);

        let a = flanged_area(h, bf, tf, tw);
        assert_relative_eq!(a, 2.0 * 0.1 * 0.01 + 0.18 * 0.006, max_relative = 1e-12);

        // Flange: 0.1·0.01³/12 + 0.1·0.01·0.095² ; web: 0.006·0.18³/12
        let expected = 2.0 * (0.1 * 1e-6 / 12.0 + 0.001 * 0.095 * 0.095)
            + 0.006 * 0.18_f64.powi(3) / 12.0;
        let i = flanged_moment_of_inertia(h, bf, tf, tw);
        assert_relative_eq!(i, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_flanged_web_clamped() {
        // Flanges thicker than half the depth leave no web
        assert_eq!(flanged_web_height(0.010, 0.010), 0.0);
        let i = flanged_moment_of_inertia(0.010, 0.1, 0.010, 0.006);
        assert!(i > 0.0);
    }

    #[test]
    fn test_circular_properties() {
        let d = 0.1;
        assert_relative_eq!(circular_area(d), PI * 0.0025, max_relative = 1e-12);
        let i = circular_moment_of_inertia(d);
        assert_relative_eq!(i, PI * 1e-4 / 64.0, max_relative = 1e-12);
        assert_relative_eq!(symmetric_section_modulus(i, d), PI * d.powi(3) / 32.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_depth_modulus() {
        assert_eq!(symmetric_section_modulus(1.0, 0.0), 0.0);
    }
}
