//! # Unit Types
//!
//! Type-safe wrappers for the SI engineering units used by the section engine.
//! These are plain f64 newtypes so JSON output stays clean (just numbers).
//!
//! ## Unit System
//!
//! - Length: millimetres (mm)
//! - Section modulus / second moment: mm³, mm⁴
//! - Stress: megapascals (MPa = N/mm²)
//! - Moment: newton-millimetres (N·mm) internally, kilonewton-metres (kN·m) for reporting
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::{KnM, Mm3, Mpa, NMm};
//!
//! let moment: NMm = Mpa(355.0) * Mm3(1.0e6);
//! let reported: KnM = moment.into();
//! assert!((reported.0 - 355.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f64);

/// Section modulus (or first moment of area) in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Second moment of area in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

// ============================================================================
// Moment
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

/// Moment in kilonewton-metres (1 kN·m = 10⁶ N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1.0e6)
    }
}

/// fy × W: stress times section modulus gives a moment.
impl Mul<Mm3> for Mpa {
    type Output = NMm;
    fn mul(self, rhs: Mm3) -> NMm {
        NMm(self.0 * rhs.0)
    }
}

/// I / c: second moment over fibre distance gives a section modulus.
impl Div<Mm> for Mm4 {
    type Output = Mm3;
    fn div(self, rhs: Mm) -> Mm3 {
        Mm3(self.0 / rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Mm);
impl_arithmetic!(Mm3);
impl_arithmetic!(Mm4);
impl_arithmetic!(Mpa);
impl_arithmetic!(NMm);
impl_arithmetic!(KnM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nmm_to_knm() {
        let m = NMm(1_478_220_000.0);
        let knm: KnM = m.into();
        assert!((knm.0 - 1478.22).abs() < 1e-9);
    }

    #[test]
    fn test_stress_times_modulus() {
        let m = Mpa(355.0) * Mm3(2.0e6);
        assert_eq!(m, NMm(7.1e8));
    }

    #[test]
    fn test_inertia_over_fibre() {
        let w = Mm4(1.2e8) / Mm(150.0);
        assert!((w.0 - 8.0e5).abs() < 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        let a = Mm(10.0);
        let b = Mm(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let fy = Mpa(355.0);
        let json = serde_json::to_string(&fy).unwrap();
        assert_eq!(json, "355.0");

        let roundtrip: Mpa = serde_json::from_str(&json).unwrap();
        assert_eq!(fy, roundtrip);
    }
}
