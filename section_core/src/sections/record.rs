//! # Capacity Record
//!
//! The flat output of every section strategy. Records serialize with the
//! column keys used by the CSV export (`A_mm2`, `We_x_mm3`, `Mp_x_kNm`, ...),
//! so JSON and CSV output carry the same names.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::units::{KnM, Mm3};

/// Preferred column order for tabular export. Keys not listed here follow
/// in alphabetical order.
pub const PREFERRED_COLUMNS: [&str; 16] = [
    "section", "A_mm2",
    "Ix_mm4", "Iy_mm4",
    "We_x_mm3", "Wp_x_mm3", "Me_x_kNm", "Mp_x_kNm", "shape_x",
    "We_y_mm3", "Wp_y_mm3", "Me_y_kNm", "Mp_y_kNm", "shape_y",
    "x_c_mm", "y_c_mm",
];

/// Tolerance on the shape-factor sanity check
const SHAPE_FACTOR_TOLERANCE: f64 = 1e-9;

/// Elastic and plastic modulus about one bending axis (mm³)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisModuli {
    /// Governing elastic modulus We
    pub elastic_mm3: f64,
    /// Plastic modulus Wp
    pub plastic_mm3: f64,
}

/// Bending capacities and section properties of one cross-section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "section": "CHS+2×UPE L-R",
///   "A_mm2": 23044.42,
///   "Ix_mm4": 206760788.7,
///   "Iy_mm4": 682479029.9,
///   "We_x_mm3": 1280252.6,
///   "Wp_x_mm3": 1645068.0,
///   "Me_x_kNm": 454.49,
///   "Mp_x_kNm": 584.00,
///   "shape_x": 1.285,
///   "We_y_mm3": 2547514.1,
///   "Wp_y_mm3": 3627856.0,
///   "Me_y_kNm": 904.37,
///   "Mp_y_kNm": 1287.89,
///   "shape_y": 1.424,
///   "x_c_mm": 217.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRecord {
    /// Section label
    pub section: String,

    /// Gross area (mm²)
    #[serde(rename = "A_mm2")]
    pub area_mm2: f64,

    /// Second moment about the horizontal centroidal axis (mm⁴)
    #[serde(rename = "Ix_mm4")]
    pub ix_mm4: f64,

    /// Second moment about the vertical centroidal axis (mm⁴)
    #[serde(rename = "Iy_mm4")]
    pub iy_mm4: f64,

    /// Governing elastic modulus, x-axis (mm³)
    #[serde(rename = "We_x_mm3")]
    pub we_x_mm3: f64,

    /// Plastic modulus, x-axis (mm³)
    #[serde(rename = "Wp_x_mm3")]
    pub wp_x_mm3: f64,

    /// First-yield moment fy·We_x (kN·m)
    #[serde(rename = "Me_x_kNm")]
    pub me_x_knm: f64,

    /// Plastic moment fy·Wp_x (kN·m)
    #[serde(rename = "Mp_x_kNm")]
    pub mp_x_knm: f64,

    /// Wp_x / We_x
    pub shape_x: f64,

    /// Governing elastic modulus, y-axis (mm³)
    #[serde(rename = "We_y_mm3")]
    pub we_y_mm3: f64,

    /// Plastic modulus, y-axis (mm³)
    #[serde(rename = "Wp_y_mm3")]
    pub wp_y_mm3: f64,

    /// First-yield moment fy·We_y (kN·m)
    #[serde(rename = "Me_y_kNm")]
    pub me_y_knm: f64,

    /// Plastic moment fy·Wp_y (kN·m)
    #[serde(rename = "Mp_y_kNm")]
    pub mp_y_knm: f64,

    /// Wp_y / We_y
    pub shape_y: f64,

    /// Horizontal channel centroid offset from the tube centre (left-right composites)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_c_mm: Option<f64>,

    /// Vertical channel centroid offset from the tube centre (top-bottom composites)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_c_mm: Option<f64>,
}

/// One cell of a flattened record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for RecordValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordValue::Text(s) => write!(f, "{}", s),
            // Shortest repr that parses back to the same f64
            RecordValue::Number(v) => write!(f, "{}", v),
        }
    }
}

impl CapacityRecord {
    /// Assemble a record from the section properties and per-axis moduli.
    ///
    /// Moments are fy × W converted from N·mm to kN·m. A zero elastic
    /// modulus means an extreme-fibre distance slipped through validation,
    /// which is reported as an internal error.
    pub fn from_moduli(
        section: impl Into<String>,
        area_mm2: f64,
        ix_mm4: f64,
        iy_mm4: f64,
        x: AxisModuli,
        y: AxisModuli,
        material: &Material,
    ) -> CalcResult<Self> {
        let section = section.into();
        for (axis, moduli) in [("x", x), ("y", y)] {
            if !(moduli.elastic_mm3.is_finite() && moduli.elastic_mm3 > 0.0) {
                return Err(CalcError::internal(format!(
                    "{}: elastic modulus about {} is {} (extreme fibre distance must be positive)",
                    section, axis, moduli.elastic_mm3
                )));
            }
        }

        let fy = material.yield_stress();
        let moment = |w: f64| -> f64 { KnM::from(fy * Mm3(w)).value() };

        let record = CapacityRecord {
            area_mm2,
            ix_mm4,
            iy_mm4,
            we_x_mm3: x.elastic_mm3,
            wp_x_mm3: x.plastic_mm3,
            me_x_knm: moment(x.elastic_mm3),
            mp_x_knm: moment(x.plastic_mm3),
            shape_x: x.plastic_mm3 / x.elastic_mm3,
            we_y_mm3: y.elastic_mm3,
            wp_y_mm3: y.plastic_mm3,
            me_y_knm: moment(y.elastic_mm3),
            mp_y_knm: moment(y.plastic_mm3),
            shape_y: y.plastic_mm3 / y.elastic_mm3,
            x_c_mm: None,
            y_c_mm: None,
            section,
        };

        if !record.is_plausible() {
            log::warn!(
                "{}: shape factor below 1.0 (x = {:.4}, y = {:.4}); check the input geometry",
                record.section,
                record.shape_x,
                record.shape_y
            );
        }

        Ok(record)
    }

    /// Attach the horizontal channel offset
    pub fn with_x_offset(mut self, x_c_mm: f64) -> Self {
        self.x_c_mm = Some(x_c_mm);
        self
    }

    /// Attach the vertical channel offset
    pub fn with_y_offset(mut self, y_c_mm: f64) -> Self {
        self.y_c_mm = Some(y_c_mm);
        self
    }

    /// Plastic modulus should never be less than the elastic one.
    pub fn is_plausible(&self) -> bool {
        self.shape_x >= 1.0 - SHAPE_FACTOR_TOLERANCE && self.shape_y >= 1.0 - SHAPE_FACTOR_TOLERANCE
    }

    /// Flatten to `(column key, value)` pairs. Offset columns appear only
    /// when present.
    pub fn fields(&self) -> Vec<(&'static str, RecordValue)> {
        use RecordValue::{Number, Text};

        let mut fields = vec![
            ("section", Text(self.section.clone())),
            ("A_mm2", Number(self.area_mm2)),
            ("Ix_mm4", Number(self.ix_mm4)),
            ("Iy_mm4", Number(self.iy_mm4)),
            ("We_x_mm3", Number(self.we_x_mm3)),
            ("Wp_x_mm3", Number(self.wp_x_mm3)),
            ("Me_x_kNm", Number(self.me_x_knm)),
            ("Mp_x_kNm", Number(self.mp_x_knm)),
            ("shape_x", Number(self.shape_x)),
            ("We_y_mm3", Number(self.we_y_mm3)),
            ("Wp_y_mm3", Number(self.wp_y_mm3)),
            ("Me_y_kNm", Number(self.me_y_knm)),
            ("Mp_y_kNm", Number(self.mp_y_knm)),
            ("shape_y", Number(self.shape_y)),
        ];
        if let Some(x_c) = self.x_c_mm {
            fields.push(("x_c_mm", Number(x_c)));
        }
        if let Some(y_c) = self.y_c_mm {
            fields.push(("y_c_mm", Number(y_c)));
        }
        fields
    }

    /// Look up a single flattened value by column key
    pub fn get(&self, key: &str) -> Option<RecordValue> {
        self.fields().into_iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CapacityRecord {
        CapacityRecord::from_moduli(
            "Sample",
            1000.0,
            2.0e6,
            1.0e6,
            AxisModuli { elastic_mm3: 1.0e5, plastic_mm3: 1.5e5 },
            AxisModuli { elastic_mm3: 5.0e4, plastic_mm3: 6.0e4 },
            &Material::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_moments_in_knm() {
        let r = sample();
        // 355 × 1e5 N·mm = 35.5 kN·m
        assert_relative_eq!(r.me_x_knm, 35.5, max_relative = 1e-12);
        assert_relative_eq!(r.mp_x_knm, 53.25, max_relative = 1e-12);
        assert_relative_eq!(r.shape_x, 1.5);
        assert_relative_eq!(r.shape_y, 1.2);
        assert!(r.is_plausible());
    }

    #[test]
    fn test_zero_elastic_modulus_is_internal_error() {
        let err = CapacityRecord::from_moduli(
            "Broken",
            1.0,
            1.0,
            1.0,
            AxisModuli { elastic_mm3: 0.0, plastic_mm3: 1.0 },
            AxisModuli { elastic_mm3: 1.0, plastic_mm3: 1.0 },
            &Material::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_implausible_shape_factor_still_returns_record() {
        let r = CapacityRecord::from_moduli(
            "Odd",
            1.0,
            1.0,
            1.0,
            AxisModuli { elastic_mm3: 2.0, plastic_mm3: 1.0 },
            AxisModuli { elastic_mm3: 1.0, plastic_mm3: 1.0 },
            &Material::default(),
        )
        .unwrap();
        assert!(!r.is_plausible());
    }

    #[test]
    fn test_fields_follow_preferred_order() {
        let r = sample().with_y_offset(190.4);
        let keys: Vec<&str> = r.fields().iter().map(|(k, _)| *k).collect();
        let expected: Vec<&str> = PREFERRED_COLUMNS.iter().copied().filter(|k| *k != "x_c_mm").collect();
        assert_eq!(keys, expected);
        assert_eq!(r.get("y_c_mm"), Some(RecordValue::Number(190.4)));
        assert_eq!(r.get("x_c_mm"), None);
    }

    #[test]
    fn test_json_uses_column_keys() {
        let r = sample().with_x_offset(217.9);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["A_mm2"], 1000.0);
        assert_eq!(json["x_c_mm"], 217.9);
        assert!(json.get("y_c_mm").is_none());

        let roundtrip: CapacityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, r);
    }
}
