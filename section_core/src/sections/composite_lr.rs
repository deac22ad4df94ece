//! # CHS + 2 Channels, Left-Right
//!
//! A circular hollow section flanked by two channels, backs facing the tube,
//! one on each side at the tube's mid-height. The combined section is
//! symmetric about both axes, so the centroid is the tube centre.
//!
//! ```text
//!        ┌─┐    ╭───╮    ┌─┐
//!        │ │   │     │   │ │
//!   ─────┤ ├───│  +  │───┤ ├─────  x
//!        │ │   │     │   │ │
//!        └─┘    ╰───╯    └─┘
//!        |<-x_c->|
//! ```
//!
//! Channels are offset horizontally, so only Iy picks up a Steiner term.

use serde::{Deserialize, Serialize};

use crate::equations::section::{elastic_modulus, parallel_axis};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ChannelProfile, Material};
use crate::sections::record::{AxisModuli, CapacityRecord};
use crate::sections::tube::Tube;
use crate::sections::SectionStrategy;

/// Default clear gap between tube surface and channel back (mm)
pub const DEFAULT_GAP_BACK_MM: f64 = 28.9;

/// Input for the tube + two side channels composite.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "CHS+2×UPE L-R",
///   "tube": { "outer_diameter_mm": 323.0, "wall_thickness_mm": 12.0 },
///   "channel": { "designation": "UPE300", "area_mm2": 5660.0, "...": "..." },
///   "gap_back_mm": 28.9,
///   "material": { "yield_stress_mpa": 355.0 },
///   "channel_plastic_modulus_override_mm3": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLRSection {
    /// User label for this section
    pub label: String,
    pub tube: Tube,
    #[serde(default)]
    pub channel: ChannelProfile,
    /// Clear gap from the tube outer face to the channel back face (≥ 0)
    pub gap_back_mm: f64,
    #[serde(default)]
    pub material: Material,
    /// Exact strong-axis plastic modulus of one channel, when known.
    /// Without it the catalog estimate (1.12 × We) is used.
    #[serde(default)]
    pub channel_plastic_modulus_override_mm3: Option<f64>,
}

impl CompositeLRSection {
    /// Create a section with the default gap and material
    pub fn new(tube: Tube, channel: ChannelProfile) -> Self {
        CompositeLRSection {
            label: "CHS+2×UPE L-R".to_string(),
            tube,
            channel,
            gap_back_mm: DEFAULT_GAP_BACK_MM,
            material: Material::default(),
            channel_plastic_modulus_override_mm3: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.tube.validate()?;
        self.channel.validate()?;
        if !(self.gap_back_mm.is_finite() && self.gap_back_mm >= 0.0) {
            return Err(CalcError::invalid_geometry(
                "gap_back_mm",
                self.gap_back_mm.to_string(),
                "Gap must be zero or positive",
            ));
        }
        if let Some(wp) = self.channel_plastic_modulus_override_mm3 {
            if !(wp.is_finite() && wp > 0.0) {
                return Err(CalcError::invalid_input(
                    "channel_plastic_modulus_override_mm3",
                    wp.to_string(),
                    "Plastic modulus override must be positive",
                ));
            }
        }
        self.material.validate()
    }

    /// Horizontal distance from tube centre to channel centroid:
    /// x_c = Ro + gap + e
    pub fn centroid_offset_mm(&self) -> f64 {
        self.tube.outer_radius_mm() + self.gap_back_mm + self.channel.back_to_centroid_mm
    }

    /// Strong-axis plastic modulus of one channel: the override if given,
    /// otherwise the catalog estimate.
    pub fn channel_plastic_modulus_mm3(&self) -> f64 {
        self.channel_plastic_modulus_override_mm3
            .unwrap_or_else(|| self.channel.plastic_modulus_strong_estimate_mm3())
    }
}

impl Default for CompositeLRSection {
    fn default() -> Self {
        CompositeLRSection::new(Tube::default(), ChannelProfile::default())
    }
}

impl SectionStrategy for CompositeLRSection {
    fn label(&self) -> &str {
        &self.label
    }

    fn compute(&self) -> CalcResult<CapacityRecord> {
        self.validate()?;

        let ro = self.tube.outer_radius_mm();
        let x_c = self.centroid_offset_mm();
        let ch = &self.channel;
        log::debug!("{}: channel centroid offset x_c = {:.3} mm", self.label, x_c);

        let area = self.tube.area_mm2() + 2.0 * ch.area_mm2;
        let ix = self.tube.second_moment_mm4() + 2.0 * ch.strong_axis_inertia_mm4;
        let iy = self.tube.second_moment_mm4()
            + 2.0 * parallel_axis(ch.weak_axis_inertia_mm4, ch.area_mm2, x_c);

        let c_x = ro.max(ch.height_mm / 2.0);
        let c_y = (ro + self.gap_back_mm).max(x_c + ch.flange_width_mm / 2.0);
        log::debug!("{}: extreme fibres c_x = {:.3} mm, c_y = {:.3} mm", self.label, c_x, c_y);

        if self.channel_plastic_modulus_override_mm3.is_none() {
            log::debug!(
                "{}: no channel Wp override, using {:.2} × We estimate",
                self.label,
                crate::materials::CHANNEL_SHAPE_FACTOR_ESTIMATE
            );
        }
        let wp_tube = self.tube.plastic_modulus_mm3();

        let x = AxisModuli {
            elastic_mm3: elastic_modulus(ix, c_x),
            plastic_mm3: wp_tube + 2.0 * self.channel_plastic_modulus_mm3(),
        };
        let y = AxisModuli {
            elastic_mm3: elastic_modulus(iy, c_y),
            plastic_mm3: wp_tube + 2.0 * ch.area_mm2 * x_c,
        };

        CapacityRecord::from_moduli(&self.label, area, ix, iy, x, y, &self.material)
            .map(|record| record.with_x_offset(x_c))
    }

    fn notes(&self) -> Vec<String> {
        vec![
            "CG is at the tube centre by left-right symmetry (x & y).".to_string(),
            "Steiner affects Iy via A·x_c²; Ix only sums local Ix.".to_string(),
            "c_x = max(Ro, h/2); c_y = max(Ro + gap, x_c + b/2).".to_string(),
        ]
    }
}
