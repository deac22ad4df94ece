//! # Built-up I Section
//!
//! Welded I-section made of three plates: top flange, web, bottom flange.
//! The flanges may differ, so the section is symmetric about the vertical
//! axis only.
//!
//! ## Method
//!
//! 1. Plate areas and the centroid depth (area-weighted mean from the top face)
//! 2. Ix by parallel-axis summation, Iy as the plain sum of plate Iy
//! 3. We_x from the governing (farther) extreme fibre, We_y from the wider flange
//! 4. Plastic neutral axis by the equal-area rule, Wp_x as the sum of first
//!    moments on both sides of it
//! 5. Wp_y = Σ t·b²/4 (no offsets: all plates share the vertical centreline)
//!
//! ## Example
//!
//! ```rust
//! use section_core::sections::{BuiltUpISection, SectionStrategy};
//!
//! let section = BuiltUpISection::default();
//! let record = section.compute().unwrap();
//! assert!((record.wp_x_mm3 - 4_164_000.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    centroid, elastic_modulus, parallel_axis, rectangle_first_moment_about, rectangular_area,
    rectangular_moment_of_inertia, rectangular_plastic_modulus,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::Material;
use crate::sections::record::{AxisModuli, CapacityRecord};
use crate::sections::SectionStrategy;

/// Input for an asymmetric built-up I-section. Dimensions in mm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Built-up I",
///   "top_flange_width_mm": 300.0,
///   "top_flange_thickness_mm": 20.0,
///   "bottom_flange_width_mm": 100.0,
///   "bottom_flange_thickness_mm": 20.0,
///   "web_thickness_mm": 10.0,
///   "overall_height_mm": 800.0,
///   "material": { "yield_stress_mpa": 355.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltUpISection {
    /// User label for this section
    pub label: String,
    pub top_flange_width_mm: f64,
    pub top_flange_thickness_mm: f64,
    pub bottom_flange_width_mm: f64,
    pub bottom_flange_thickness_mm: f64,
    pub web_thickness_mm: f64,
    /// Overall height H, outer face to outer face
    pub overall_height_mm: f64,
    #[serde(default)]
    pub material: Material,
}

/// Which plate the plastic neutral axis falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasticAxisLocation {
    TopFlange,
    Web,
    BottomFlange,
}

/// A horizontal plate spanning depths `top..bottom` from the top face
#[derive(Debug, Clone, Copy)]
struct Plate {
    width: f64,
    top: f64,
    bottom: f64,
}

impl Plate {
    fn thickness(&self) -> f64 {
        self.bottom - self.top
    }

    fn area(&self) -> f64 {
        rectangular_area(self.width, self.thickness())
    }

    fn mid_depth(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

impl BuiltUpISection {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("top_flange_width_mm", self.top_flange_width_mm)?;
        require_positive("top_flange_thickness_mm", self.top_flange_thickness_mm)?;
        require_positive("bottom_flange_width_mm", self.bottom_flange_width_mm)?;
        require_positive("bottom_flange_thickness_mm", self.bottom_flange_thickness_mm)?;
        require_positive("web_thickness_mm", self.web_thickness_mm)?;
        require_positive("overall_height_mm", self.overall_height_mm)?;
        if self.web_height_mm() <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "overall_height_mm",
                self.overall_height_mm.to_string(),
                format!(
                    "Height must exceed the sum of flange thicknesses ({} mm)",
                    self.top_flange_thickness_mm + self.bottom_flange_thickness_mm
                ),
            ));
        }
        self.material.validate()
    }

    /// Clear web height between the flanges
    pub fn web_height_mm(&self) -> f64 {
        self.overall_height_mm - self.top_flange_thickness_mm - self.bottom_flange_thickness_mm
    }

    /// Top flange, web, bottom flange (in that order)
    fn plates(&self) -> [Plate; 3] {
        let web_bottom = self.overall_height_mm - self.bottom_flange_thickness_mm;
        [
            Plate {
                width: self.top_flange_width_mm,
                top: 0.0,
                bottom: self.top_flange_thickness_mm,
            },
            Plate {
                width: self.web_thickness_mm,
                top: self.top_flange_thickness_mm,
                bottom: web_bottom,
            },
            Plate {
                width: self.bottom_flange_width_mm,
                top: web_bottom,
                bottom: self.overall_height_mm,
            },
        ]
    }

    /// Total area (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.plates().iter().map(Plate::area).sum()
    }

    /// Depth of the elastic centroid below the top face (mm)
    pub fn centroid_from_top_mm(&self) -> CalcResult<f64> {
        let parts: Vec<(f64, f64)> = self.plates().iter().map(|p| (p.area(), p.mid_depth())).collect();
        centroid(&parts).ok_or_else(|| CalcError::internal("Built-up I has no area"))
    }

    /// Depth of the plastic neutral axis below the top face (mm) and the
    /// plate it lies in.
    ///
    /// The axis splits the area into equal halves. It is searched top-down:
    /// top flange, then web, then bottom flange.
    pub fn plastic_neutral_axis_mm(&self) -> (f64, PlasticAxisLocation) {
        let [top, web, bottom] = self.plates();
        let half = self.area_mm2() / 2.0;

        if top.area() >= half {
            (half / top.width, PlasticAxisLocation::TopFlange)
        } else if top.area() + web.area() >= half {
            (web.top + (half - top.area()) / web.width, PlasticAxisLocation::Web)
        } else {
            (bottom.bottom - half / bottom.width, PlasticAxisLocation::BottomFlange)
        }
    }

    /// Ix about the horizontal centroidal axis (mm⁴)
    fn ix_mm4(&self, ybar: f64) -> f64 {
        self.plates()
            .iter()
            .map(|p| {
                let local = rectangular_moment_of_inertia(p.width, p.thickness());
                parallel_axis(local, p.area(), p.mid_depth() - ybar)
            })
            .sum()
    }

    /// Iy about the vertical centreline (mm⁴)
    fn iy_mm4(&self) -> f64 {
        self.plates()
            .iter()
            .map(|p| rectangular_moment_of_inertia(p.thickness(), p.width))
            .sum()
    }

    fn wp_x_mm3(&self, pna: f64) -> f64 {
        self.plates()
            .iter()
            .map(|p| rectangle_first_moment_about(p.width, p.top, p.bottom, pna))
            .sum()
    }

    fn wp_y_mm3(&self) -> f64 {
        self.plates()
            .iter()
            .map(|p| rectangular_plastic_modulus(p.thickness(), p.width))
            .sum()
    }

    /// Half the wider flange: the extreme fibre for y-bending. The web is
    /// not considered, so a web thicker than both flanges is not covered.
    fn y_fibre_mm(&self) -> f64 {
        self.top_flange_width_mm.max(self.bottom_flange_width_mm) / 2.0
    }
}

impl Default for BuiltUpISection {
    fn default() -> Self {
        BuiltUpISection {
            label: "Built-up I".to_string(),
            top_flange_width_mm: 300.0,
            top_flange_thickness_mm: 20.0,
            bottom_flange_width_mm: 100.0,
            bottom_flange_thickness_mm: 20.0,
            web_thickness_mm: 10.0,
            overall_height_mm: 800.0,
            material: Material::default(),
        }
    }
}

impl SectionStrategy for BuiltUpISection {
    fn label(&self) -> &str {
        &self.label
    }

    fn compute(&self) -> CalcResult<CapacityRecord> {
        self.validate()?;

        let area = self.area_mm2();
        let ybar = self.centroid_from_top_mm()?;
        let c_top = ybar;
        let c_bottom = self.overall_height_mm - ybar;
        log::debug!("{}: A = {:.1} mm², centroid {:.3} mm below top face", self.label, area, ybar);

        let ix = self.ix_mm4(ybar);
        let iy = self.iy_mm4();
        log::debug!("{}: Ix = {:.6e} mm⁴ (Steiner), Iy = {:.6e} mm⁴", self.label, ix, iy);

        let we_x = elastic_modulus(ix, c_top.max(c_bottom));
        let we_y = elastic_modulus(iy, self.y_fibre_mm());

        let (pna, location) = self.plastic_neutral_axis_mm();
        log::debug!("{}: plastic neutral axis {:.3} mm below top face ({:?})", self.label, pna, location);

        let x = AxisModuli {
            elastic_mm3: we_x,
            plastic_mm3: self.wp_x_mm3(pna),
        };
        let y = AxisModuli {
            elastic_mm3: we_y,
            plastic_mm3: self.wp_y_mm3(),
        };

        CapacityRecord::from_moduli(&self.label, area, ix, iy, x, y, &self.material)
    }

    fn notes(&self) -> Vec<String> {
        vec![
            "Built-up I: compute plate areas and centroid (needed for Ix).".to_string(),
            "Parallel-axis (Steiner) for Ix about the centroidal x-axis.".to_string(),
            "We_x uses the farther extreme fibre (smaller modulus governs).".to_string(),
            "Plastic neutral axis (x): balance compression and tension areas.".to_string(),
        ]
    }
}
