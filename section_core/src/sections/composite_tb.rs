//! # CHS + 2 Channels, Top-Bottom
//!
//! Same parts as the left-right composite, rotated: one channel above and one
//! below the tube, centroids at ±y_c on the vertical centreline. Only Ix picks
//! up a Steiner term.

use serde::{Deserialize, Serialize};

use crate::equations::section::{elastic_modulus, parallel_axis};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{ChannelProfile, Material};
use crate::sections::record::{AxisModuli, CapacityRecord};
use crate::sections::tube::Tube;
use crate::sections::SectionStrategy;

/// Default vertical offset from tube centre to channel centroid (mm)
pub const DEFAULT_CENTROID_OFFSET_MM: f64 = 190.4;

/// Input for the tube + top/bottom channels composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeTBSection {
    /// User label for this section
    pub label: String,
    pub tube: Tube,
    #[serde(default)]
    pub channel: ChannelProfile,
    /// Tube centre to channel centroid distance y_c (> 0)
    pub centroid_offset_mm: f64,
    #[serde(default)]
    pub material: Material,
}

impl CompositeTBSection {
    /// Create a section with the default offset and material
    pub fn new(tube: Tube, channel: ChannelProfile) -> Self {
        CompositeTBSection {
            label: "CHS+2×UPE T-B".to_string(),
            tube,
            channel,
            centroid_offset_mm: DEFAULT_CENTROID_OFFSET_MM,
            material: Material::default(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.tube.validate()?;
        self.channel.validate()?;
        require_positive("centroid_offset_mm", self.centroid_offset_mm)?;
        self.material.validate()
    }
}

impl Default for CompositeTBSection {
    fn default() -> Self {
        CompositeTBSection::new(Tube::default(), ChannelProfile::default())
    }
}

impl SectionStrategy for CompositeTBSection {
    fn label(&self) -> &str {
        &self.label
    }

    fn compute(&self) -> CalcResult<CapacityRecord> {
        self.validate()?;

        let ro = self.tube.outer_radius_mm();
        let y_c = self.centroid_offset_mm;
        let ch = &self.channel;

        let area = self.tube.area_mm2() + 2.0 * ch.area_mm2;
        let ix = self.tube.second_moment_mm4()
            + 2.0 * parallel_axis(ch.strong_axis_inertia_mm4, ch.area_mm2, y_c);
        let iy = self.tube.second_moment_mm4() + 2.0 * ch.weak_axis_inertia_mm4;
        log::debug!("{}: Ix = {:.6e} mm⁴ (Steiner on y_c = {} mm), Iy = {:.6e} mm⁴", self.label, ix, y_c, iy);

        let c_x = ro.max(y_c + ch.height_mm / 2.0);
        let c_y = ro.max(ch.flange_width_mm / 2.0);

        let wp_tube = self.tube.plastic_modulus_mm3();
        let x = AxisModuli {
            elastic_mm3: elastic_modulus(ix, c_x),
            plastic_mm3: wp_tube + 2.0 * ch.area_mm2 * y_c,
        };
        let y = AxisModuli {
            elastic_mm3: elastic_modulus(iy, c_y),
            plastic_mm3: wp_tube + 2.0 * ch.plastic_modulus_weak_exact_mm3(),
        };

        CapacityRecord::from_moduli(&self.label, area, ix, iy, x, y, &self.material)
            .map(|record| record.with_y_offset(y_c))
    }

    fn notes(&self) -> Vec<String> {
        vec![
            "By top-bottom symmetry the global CG is at the tube centre (0,0).".to_string(),
            "Ix gets Steiner (A·y_c²); Iy does not (no x-offset).".to_string(),
            "c_x = max(Ro, y_c + h/2); c_y = max(Ro, b/2).".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::composite_lr::CompositeLRSection;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_reference_section() {
        let r = CompositeTBSection::default().compute().unwrap();
        assert_eq!(r.y_c_mm, Some(190.4));
        assert_eq!(r.x_c_mm, None);
        assert_relative_eq!(r.ix_mm4, 617_135_239.92, max_relative = 1e-9);
        assert_relative_eq!(r.iy_mm4, 145_000_788.72, max_relative = 1e-9);
        // c_x = 190.4 + 150 = 340.4 (top channel governs), c_y = Ro
        assert_relative_eq!(r.we_x_mm3, 1_812_970.7401, max_relative = 1e-9);
        assert_relative_eq!(r.we_y_mm3, 897_837.7011, max_relative = 1e-9);
        assert_relative_eq!(r.wp_x_mm3, 3_316_556.0, max_relative = 1e-12);
        assert_relative_eq!(r.wp_y_mm3, 1_323_411.75, max_relative = 1e-12);
        assert_relative_eq!(r.shape_x, 1.8293, max_relative = 1e-4);
    }

    #[test]
    fn test_mirrors_left_right_composite() {
        // With a channel of equal inertias and equal offsets, the two layouts
        // are the same section rotated by 90°.
        let mut channel = ChannelProfile::default();
        channel.designation = "Square-ish".to_string();
        channel.weak_axis_inertia_mm4 = channel.strong_axis_inertia_mm4;

        let lr = CompositeLRSection::new(Tube::default(), channel.clone());
        let mut tb = CompositeTBSection::new(Tube::default(), channel);
        tb.centroid_offset_mm = lr.centroid_offset_mm();

        let r_lr = lr.compute().unwrap();
        let r_tb = tb.compute().unwrap();
        assert_relative_eq!(r_lr.ix_mm4, r_tb.iy_mm4, max_relative = 1e-12);
        assert_relative_eq!(r_lr.iy_mm4, r_tb.ix_mm4, max_relative = 1e-12);
        assert_relative_eq!(r_lr.area_mm2, r_tb.area_mm2);
    }

    #[test]
    fn test_offset_must_be_positive() {
        let mut s = CompositeTBSection::default();
        s.centroid_offset_mm = 0.0;
        assert_eq!(s.compute().unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_random_geometries_shape_factor_at_least_one() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let d: f64 = rng.gen_range(100.0..900.0);
            let t: f64 = rng.gen_range(3.0..(d / 4.0));
            let mut s = CompositeTBSection::new(Tube::new(d, t).unwrap(), ChannelProfile::default());
            s.centroid_offset_mm = d / 2.0 + rng.gen_range(0.0..200.0) + 15.0;
            let r = s.compute().unwrap();
            assert!(r.shape_x >= 1.0, "shape_x = {} for {:?}", r.shape_x, s);
            assert!(r.shape_y >= 1.0, "shape_y = {} for {:?}", r.shape_y, s);
        }
    }
}
