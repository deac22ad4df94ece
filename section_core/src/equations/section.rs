//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of the primitive shapes the section
//! strategies are assembled from: solid rectangles and annuli, plus the
//! parallel-axis and centroid rules that combine them.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area
//! - `W` = Plastic section modulus (first moment of both half-areas)
//! - `b` = Dimension parallel to the bending axis
//! - `d` = Dimension perpendicular to the bending axis
//! - `Ro`, `Ri` = Outer and inner radius of an annulus
//!
//! Depth coordinates are measured downward from the top face of a section.
//!
//! ## References
//!
//! - EN 1993-1-1 §6.2.5: Bending moment resistance
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

use std::f64::consts::PI;

use crate::units::{Mm, Mm4};

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a rectangle: A = b × d
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// // 300 × 20 flange plate
/// assert_eq!(rectangular_area(300.0, 20.0), 6000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Second moment of a rectangle about its own centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// // 10 × 760 web plate
/// let i = rectangular_moment_of_inertia(10.0, 760.0);
/// assert!((i - 365_813_333.33).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Plastic section modulus of a rectangle about its mid-depth axis
///
/// Each half (b × d/2) acts at d/4 from the axis.
///
/// # Formula
/// W = bd²/4
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_plastic_modulus;
///
/// // UPE flange about the weak axis: tf = 15, b = 100
/// assert_eq!(rectangular_plastic_modulus(15.0, 100.0), 37_500.0);
/// ```
#[inline]
pub fn rectangular_plastic_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 4.0
}

/// First moment of a rectangle's area about a horizontal axis, taking
/// distances as absolute values.
///
/// The rectangle spans depths `top..bottom` with width `b`. When the axis cuts
/// the rectangle, the parts above and below are summed separately; this is
/// the contribution of the rectangle to a plastic modulus about that axis.
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangle_first_moment_about;
///
/// // Axis through mid-depth reproduces bd²/4
/// let q = rectangle_first_moment_about(10.0, 0.0, 100.0, 50.0);
/// assert!((q - 25_000.0).abs() < 1e-9);
/// ```
pub fn rectangle_first_moment_about(b: f64, top: f64, bottom: f64, axis: f64) -> f64 {
    if axis <= top {
        b * (bottom - top) * ((top + bottom) / 2.0 - axis)
    } else if axis >= bottom {
        b * (bottom - top) * (axis - (top + bottom) / 2.0)
    } else {
        let above = axis - top;
        let below = bottom - axis;
        b * (above.powi(2) + below.powi(2)) / 2.0
    }
}

// =============================================================================
// COMBINATION RULES
// =============================================================================

/// Parallel-axis (Steiner) theorem: I = I_local + A·d²
///
/// # Example
/// ```rust
/// use section_core::equations::section::parallel_axis;
///
/// assert_eq!(parallel_axis(200_000.0, 6000.0, 290.0), 200_000.0 + 6000.0 * 290.0 * 290.0);
/// ```
#[inline]
pub fn parallel_axis(local_inertia: f64, area: f64, offset: f64) -> f64 {
    local_inertia + area * offset.powi(2)
}

/// Elastic section modulus W = I / c, for extreme-fibre distance `c`
///
/// # Example
/// ```rust
/// use section_core::equations::section::elastic_modulus;
///
/// assert_eq!(elastic_modulus(1.2e8, 150.0), 8.0e5);
/// ```
#[inline]
pub fn elastic_modulus(inertia_mm4: f64, fibre_mm: f64) -> f64 {
    (Mm4(inertia_mm4) / Mm(fibre_mm)).value()
}

/// Area-weighted centroid of `(area, position)` parts.
///
/// Returns `None` when the total area is not positive.
pub fn centroid(parts: &[(f64, f64)]) -> Option<f64> {
    let total: f64 = parts.iter().map(|(a, _)| a).sum();
    if total <= 0.0 {
        return None;
    }
    let moment: f64 = parts.iter().map(|(a, y)| a * y).sum();
    Some(moment / total)
}

// =============================================================================
// ANNULUS (CIRCULAR HOLLOW SECTION)
// =============================================================================

/// Annulus area: A = π(Ro² − Ri²)
#[inline]
pub fn annulus_area(ro: f64, ri: f64) -> f64 {
    PI * (ro.powi(2) - ri.powi(2))
}

/// Annulus second moment about any diameter: I = π/4 (Ro⁴ − Ri⁴)
#[inline]
pub fn annulus_moment_of_inertia(ro: f64, ri: f64) -> f64 {
    PI / 4.0 * (ro.powi(4) - ri.powi(4))
}

/// Annulus plastic modulus about any diameter: W = 4/3 (Ro³ − Ri³)
#[inline]
pub fn annulus_plastic_modulus(ro: f64, ri: f64) -> f64 {
    4.0 / 3.0 * (ro.powi(3) - ri.powi(3))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
