//! Rolled Channel Catalog (UPE)
//!
//! Catalog constants for parallel-flange channels and the handful of moduli
//! derived from them. Consuming code only sees [`ChannelProfile`], so another
//! catalog size (or a custom profile) drops in without changes downstream.
//!
//! ## Axis Convention
//!
//! - **Strong axis**: parallel to the flanges, bending about it uses `h`.
//! - **Weak axis**: parallel to the web, bending about it uses `b`.
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::{ChannelProfile, ChannelSize};
//!
//! let upe = ChannelProfile::catalog(ChannelSize::Upe300);
//! assert_eq!(upe.elastic_modulus_strong_mm3(), 216_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{elastic_modulus, rectangular_plastic_modulus};
use crate::errors::{require_positive, CalcError, CalcResult};

/// Empirical Wp/We ratio for channels about the strong axis (range 1.10–1.15)
pub const CHANNEL_SHAPE_FACTOR_ESTIMATE: f64 = 1.12;

/// Cataloged channel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelSize {
    /// UPE 300 parallel-flange channel
    #[serde(rename = "UPE300")]
    Upe300,
}

impl ChannelSize {
    /// All cataloged sizes
    pub const ALL: [ChannelSize; 1] = [ChannelSize::Upe300];

    /// Catalog designation
    pub fn designation(&self) -> &'static str {
        match self {
            ChannelSize::Upe300 => "UPE300",
        }
    }

    /// Look up a size by designation ("UPE300", "upe 300", "UPE-300")
    pub fn from_designation(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '_', '-'], "");
        Self::ALL
            .into_iter()
            .find(|size| size.designation() == normalized)
            .ok_or_else(|| CalcError::unknown_profile(s))
    }
}

impl std::fmt::Display for ChannelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

/// Geometric and stiffness constants of one channel profile.
///
/// All lengths in mm, areas in mm², second moments in mm⁴.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// Catalog designation (or a user label for custom profiles)
    pub designation: String,
    /// Cross-sectional area A
    pub area_mm2: f64,
    /// Second moment about the strong axis
    pub strong_axis_inertia_mm4: f64,
    /// Second moment about the weak axis
    pub weak_axis_inertia_mm4: f64,
    /// Overall height h
    pub height_mm: f64,
    /// Flange width b
    pub flange_width_mm: f64,
    /// Flange thickness tf
    pub flange_thickness_mm: f64,
    /// Web thickness tw
    pub web_thickness_mm: f64,
    /// Clear web height between flanges hi (≈ h − 2·tf)
    pub clear_web_height_mm: f64,
    /// Distance from the back face of the web to the centroid
    pub back_to_centroid_mm: f64,
}

impl ChannelProfile {
    /// Catalog constants for a cataloged size
    pub fn catalog(size: ChannelSize) -> Self {
        match size {
            ChannelSize::Upe300 => ChannelProfile {
                designation: size.designation().to_string(),
                area_mm2: 5660.0,
                strong_axis_inertia_mm4: 3.24e7,
                weak_axis_inertia_mm4: 1.52e6,
                height_mm: 300.0,
                flange_width_mm: 100.0,
                flange_thickness_mm: 15.0,
                web_thickness_mm: 9.5,
                clear_web_height_mm: 270.0,
                back_to_centroid_mm: 27.5,
            },
        }
    }

    /// Look up a cataloged profile by designation
    pub fn lookup(designation: &str) -> CalcResult<Self> {
        ChannelSize::from_designation(designation).map(Self::catalog)
    }

    /// Validate custom constants (catalog entries are valid by construction).
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("area_mm2", self.area_mm2)?;
        require_positive("strong_axis_inertia_mm4", self.strong_axis_inertia_mm4)?;
        require_positive("weak_axis_inertia_mm4", self.weak_axis_inertia_mm4)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("flange_width_mm", self.flange_width_mm)?;
        require_positive("flange_thickness_mm", self.flange_thickness_mm)?;
        require_positive("web_thickness_mm", self.web_thickness_mm)?;
        require_positive("clear_web_height_mm", self.clear_web_height_mm)?;
        require_positive("back_to_centroid_mm", self.back_to_centroid_mm)?;
        if self.clear_web_height_mm >= self.height_mm {
            return Err(CalcError::invalid_geometry(
                "clear_web_height_mm",
                self.clear_web_height_mm.to_string(),
                "Clear web height must be less than the overall height",
            ));
        }
        Ok(())
    }

    /// Elastic section modulus about the strong axis: Ix / (h/2)
    pub fn elastic_modulus_strong_mm3(&self) -> f64 {
        elastic_modulus(self.strong_axis_inertia_mm4, self.height_mm / 2.0)
    }

    /// Strong-axis plastic modulus estimated from the elastic modulus
    /// (`CHANNEL_SHAPE_FACTOR_ESTIMATE × We`).
    pub fn plastic_modulus_strong_estimate_mm3(&self) -> f64 {
        CHANNEL_SHAPE_FACTOR_ESTIMATE * self.elastic_modulus_strong_mm3()
    }

    /// Weak-axis plastic modulus from the flange + web rectangle split:
    /// 2·(tf·b²/4) + hi·tw²/4
    pub fn plastic_modulus_weak_exact_mm3(&self) -> f64 {
        2.0 * rectangular_plastic_modulus(self.flange_thickness_mm, self.flange_width_mm)
            + rectangular_plastic_modulus(self.clear_web_height_mm, self.web_thickness_mm)
    }
}

impl Default for ChannelProfile {
    fn default() -> Self {
        ChannelProfile::catalog(ChannelSize::Upe300)
    }
}
