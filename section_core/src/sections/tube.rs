//! # Circular Hollow Section (CHS)
//!
//! Closed-form annulus properties. By symmetry every diametral axis is a
//! principal axis, so one second moment and one plastic modulus serve both
//! bending directions.

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    annulus_area, annulus_moment_of_inertia, annulus_plastic_modulus, elastic_modulus,
};
use crate::errors::{require_positive, CalcError, CalcResult};

/// Circular hollow section defined by outer diameter and wall thickness.
///
/// ## JSON Example
///
/// ```json
/// { "outer_diameter_mm": 323.0, "wall_thickness_mm": 12.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tube {
    /// Outer diameter D
    pub outer_diameter_mm: f64,
    /// Wall thickness t (0 < t < D/2)
    pub wall_thickness_mm: f64,
}

impl Tube {
    /// Create a validated tube.
    ///
    /// ```rust
    /// use section_core::sections::Tube;
    ///
    /// let tube = Tube::new(323.0, 12.0).unwrap();
    /// assert_eq!(tube.inner_radius_mm(), 149.5);
    ///
    /// assert!(Tube::new(323.0, 161.5).is_err());
    /// ```
    pub fn new(outer_diameter_mm: f64, wall_thickness_mm: f64) -> CalcResult<Self> {
        let tube = Tube {
            outer_diameter_mm,
            wall_thickness_mm,
        };
        tube.validate()?;
        Ok(tube)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("outer_diameter_mm", self.outer_diameter_mm)?;
        require_positive("wall_thickness_mm", self.wall_thickness_mm)?;
        if self.wall_thickness_mm >= self.outer_radius_mm() {
            return Err(CalcError::invalid_geometry(
                "wall_thickness_mm",
                self.wall_thickness_mm.to_string(),
                format!(
                    "Wall thickness must be less than the outer radius ({} mm)",
                    self.outer_radius_mm()
                ),
            ));
        }
        Ok(())
    }

    /// Ro = D/2
    pub fn outer_radius_mm(&self) -> f64 {
        self.outer_diameter_mm / 2.0
    }

    /// Ri = Ro − t
    pub fn inner_radius_mm(&self) -> f64 {
        self.outer_radius_mm() - self.wall_thickness_mm
    }

    /// A = π(Ro² − Ri²)
    pub fn area_mm2(&self) -> f64 {
        annulus_area(self.outer_radius_mm(), self.inner_radius_mm())
    }

    /// I = π/4 (Ro⁴ − Ri⁴), same about every diameter
    pub fn second_moment_mm4(&self) -> f64 {
        annulus_moment_of_inertia(self.outer_radius_mm(), self.inner_radius_mm())
    }

    /// Wp = 4/3 (Ro³ − Ri³), same about every diameter
    pub fn plastic_modulus_mm3(&self) -> f64 {
        annulus_plastic_modulus(self.outer_radius_mm(), self.inner_radius_mm())
    }

    /// We = I / Ro
    pub fn elastic_modulus_mm3(&self) -> f64 {
        elastic_modulus(self.second_moment_mm4(), self.outer_radius_mm())
    }
}

impl Default for Tube {
    /// CHS 323.9-class tube used by the reference composite sections
    fn default() -> Self {
        Tube {
            outer_diameter_mm: 323.0,
            wall_thickness_mm: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_reference_tube() {
        let tube = Tube::new(323.0, 12.0).unwrap();
        assert_relative_eq!(tube.outer_radius_mm(), 161.5);
        assert_relative_eq!(tube.inner_radius_mm(), 149.5);
        // π·(161.5² − 149.5²) = π·3732
        assert_relative_eq!(tube.area_mm2(), 11_724.42, max_relative = 1e-4);
        assert_relative_eq!(tube.second_moment_mm4(), 1.4196e8, max_relative = 1e-4);
        assert_relative_eq!(tube.plastic_modulus_mm3(), 1_161_228.0, max_relative = 1e-12);
    }

    #[test]
    fn test_wall_at_or_beyond_radius_is_rejected() {
        let err = Tube::new(323.0, 161.5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert!(Tube::new(323.0, 200.0).is_err());
        assert!(Tube::new(323.0, 0.0).is_err());
        assert!(Tube::new(-323.0, 12.0).is_err());
    }

    #[test]
    fn test_random_tubes_are_positive_and_smaller_than_disk() {
        let mut rng = StdRng::seed_from_u64(0x7B);
        for _ in 0..500 {
            let d: f64 = rng.gen_range(20.0..1500.0);
            let t: f64 = rng.gen_range(0.5..(d / 2.0 - 0.01));
            let tube = Tube::new(d, t).unwrap();
            let ro = tube.outer_radius_mm();

            assert!(tube.area_mm2() > 0.0);
            assert!(tube.second_moment_mm4() > 0.0);
            assert!(tube.plastic_modulus_mm3() > 0.0);
            assert!(tube.area_mm2() < PI * ro * ro);
            assert!(tube.plastic_modulus_mm3() >= tube.elastic_modulus_mm3());
        }
    }
}
