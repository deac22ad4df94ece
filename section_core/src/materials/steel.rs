//! Structural Steel Material
//!
//! Only the yield stress enters the capacity calculation: moments are
//! `fy × W`. Named grades follow EN 10025 nominal yield values for
//! thicknesses up to 16 mm.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Mpa;

/// Structural steel grades with a nominal yield stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// fy = 235 MPa
    S235,
    /// fy = 275 MPa
    S275,
    /// fy = 355 MPa
    S355,
}

impl SteelGrade {
    /// All grades for selection lists
    pub const ALL: [SteelGrade; 3] = [SteelGrade::S235, SteelGrade::S275, SteelGrade::S355];

    /// Nominal yield stress
    pub fn yield_stress(&self) -> Mpa {
        match self {
            SteelGrade::S235 => Mpa(235.0),
            SteelGrade::S275 => Mpa(275.0),
            SteelGrade::S355 => Mpa(355.0),
        }
    }

    /// Parse from common string representations ("S355", "s 355", "355")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "S235" | "235" => Ok(SteelGrade::S235),
            "S275" | "275" => Ok(SteelGrade::S275),
            "S355" | "355" => Ok(SteelGrade::S355),
            _ => Err(CalcError::invalid_input("grade", s, "Unknown steel grade")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
        }
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::S355
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material model for capacity conversion (yield stress only).
///
/// ## JSON Example
///
/// ```json
/// { "yield_stress_mpa": 355.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Yield stress fy in MPa (N/mm²)
    pub yield_stress_mpa: f64,
}

impl Material {
    /// Material with the nominal yield stress of a named grade
    pub fn from_grade(grade: SteelGrade) -> Self {
        Material {
            yield_stress_mpa: grade.yield_stress().value(),
        }
    }

    /// Material with an arbitrary yield stress.
    ///
    /// ```rust
    /// use section_core::materials::Material;
    ///
    /// assert!(Material::custom(460.0).is_ok());
    /// assert!(Material::custom(0.0).is_err());
    /// ```
    pub fn custom(yield_stress_mpa: f64) -> CalcResult<Self> {
        let material = Material { yield_stress_mpa };
        material.validate()?;
        Ok(material)
    }

    /// Validate that the yield stress is a positive, finite number.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.yield_stress_mpa.is_finite() && self.yield_stress_mpa > 0.0) {
            return Err(CalcError::invalid_input(
                "yield_stress_mpa",
                self.yield_stress_mpa.to_string(),
                "Yield stress must be positive",
            ));
        }
        Ok(())
    }

    /// Yield stress as a typed value
    pub fn yield_stress(&self) -> Mpa {
        Mpa(self.yield_stress_mpa)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::from_grade(SteelGrade::default())
    }
}
