//! # Simply-Supported Beam Formulas
//!
//! Closed-form elastic results for a pin-roller beam of span `L`, with `x`
//! and load positions measured from the left support. Units are whatever the
//! caller passes consistently; the solvers use N, m and Pa.
//!
//! ## Notation
//!
//! - `L` = Span, `x` = Position from the left support
//! - `a` = Load position from the left support, `b = L − a`
//! - `P` = Point load, `w` = Uniform intensity (force per length)
//! - `EI` = Flexural rigidity
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Reactions: Positive upward
//! - Moment: Positive sagging
//! - Deflection: Positive downward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// POINT LOAD
// =============================================================================

/// Reactions for point load P at position a on span L.
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P·b/L
/// - R2 = P·a/L
///
/// A load outside `[0, L]` gives one negative (hold-down) reaction; the pair
/// still sums to P.
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    (p * b / l, p * a / l)
}

/// Deflection at x for point load P at position a.
///
/// # Formulas (Roark's Table 8.1, Case 1a)
///
/// For x ≤ a:
/// ```text
/// δ(x) = P·b·x·(L² − b² − x²) / (6·L·EI)
/// ```
///
/// For x > a:
/// ```text
/// δ(x) = P·a·(L − x)·(2Lx − x² − a²) / (6·L·EI)
/// ```
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, ei: f64) -> f64 {
    let b = l - a;
    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * l * ei)
    } else {
        p * a * (l - x) * (2.0 * l * x - x * x - a * a) / (6.0 * l * ei)
    }
}

// =============================================================================
// FULL-SPAN UNIFORM LOAD
// =============================================================================

/// Maximum moment for a full-span uniform load.
///
/// # Formula
/// M_max = wL²/8 (at midspan)
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Deflection at x for a uniform load w over the whole span.
///
/// # Formula (Roark's Table 8.1, Case 2e)
/// ```text
/// δ(x) = w·x·(L³ − 2Lx² + x³) / (24·EI)
/// ```
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei)
}

/// Midspan deflection for a full-span uniform load.
///
/// # Formula
/// δ_max = 5wL⁴/(384·EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, ei: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * ei)
}

// =============================================================================
// PARTIAL-SPAN UNIFORM LOAD
// =============================================================================

/// Deflection at x for a uniform load w between `start` and `end`.
///
/// Integrates the point-load influence line over the loaded extent. On each
/// side of `x` the influence is a cubic in the load position, so Simpson's
/// rule on `[start, x]` and `[x, end]` is exact (Roark's Case 2a).
pub fn partial_uniform_deflection(w: f64, start: f64, end: f64, l: f64, x: f64, ei: f64) -> f64 {
    if end <= start {
        return 0.0;
    }
    let split = x.clamp(start, end);
    let influence = |a: f64| point_load_deflection(w, a, l, x, ei);

    [(start, split), (split, end)]
        .into_iter()
        .filter(|(lo, hi)| hi > lo)
        .map(|(lo, hi)| {
            let mid = (lo + hi) / 2.0;
            (hi - lo) / 6.0 * (influence(lo) + 4.0 * influence(mid) + influence(hi))
        })
        .sum()
}
