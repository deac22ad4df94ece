//! # Section Property Engine
//!
//! Each supported cross-section is a value type implementing
//! [`SectionStrategy`]. Computing one is a pure function of its inputs:
//!
//! - `validate()` - reject impossible geometry before anything is derived
//! - `compute() -> CalcResult<CapacityRecord>` - section properties and capacities
//!
//! Shared primitives ([`Tube`], [`ChannelProfile`](crate::materials::ChannelProfile))
//! are composed into the sections, not inherited.
//!
//! ## Available Sections
//!
//! - [`built_up_i`] - Asymmetric welded I-section
//! - [`composite_lr`] - CHS with two channels left and right
//! - [`composite_tb`] - CHS with two channels top and bottom
//!
//! ## Example
//!
//! ```rust
//! use section_core::sections::{Section, SectionStrategy};
//!
//! for section in Section::documented_defaults() {
//!     let record = section.compute().unwrap();
//!     assert!(record.is_plausible());
//! }
//! ```

pub mod built_up_i;
pub mod composite_lr;
pub mod composite_tb;
pub mod record;
pub mod tube;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use built_up_i::{BuiltUpISection, PlasticAxisLocation};
pub use composite_lr::CompositeLRSection;
pub use composite_tb::CompositeTBSection;
pub use record::{AxisModuli, CapacityRecord, RecordValue, PREFERRED_COLUMNS};
pub use tube::Tube;

/// A cross-section that can produce a capacity record.
pub trait SectionStrategy {
    /// User label, carried into the record
    fn label(&self) -> &str;

    /// Compute section properties and bending capacities.
    fn compute(&self) -> CalcResult<CapacityRecord>;

    /// Short explanations of the method, for verbose reports.
    fn notes(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Enum wrapper for all section types.
///
/// Lets a project hold a heterogeneous list of sections with a clean
/// `"type"`-tagged JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Section {
    /// Asymmetric built-up I
    BuiltUpI(BuiltUpISection),
    /// CHS + 2 channels, left-right
    CompositeLR(CompositeLRSection),
    /// CHS + 2 channels, top-bottom
    CompositeTB(CompositeTBSection),
}

impl Section {
    /// Get the section type as a string
    pub fn section_type(&self) -> &'static str {
        match self {
            Section::BuiltUpI(_) => "Built-up I",
            Section::CompositeLR(_) => "CHS + 2 channels (L-R)",
            Section::CompositeTB(_) => "CHS + 2 channels (T-B)",
        }
    }

    /// The three reference sections: 300/100 × 20 built-up I (H = 800),
    /// CHS 323 × 12 with 2 × UPE300 left-right (gap 28.9) and top-bottom
    /// (y_c = 190.4), all S355.
    pub fn documented_defaults() -> Vec<Section> {
        vec![
            Section::BuiltUpI(BuiltUpISection::default()),
            Section::CompositeLR(CompositeLRSection::default()),
            Section::CompositeTB(CompositeTBSection::default()),
        ]
    }

    fn strategy(&self) -> &dyn SectionStrategy {
        match self {
            Section::BuiltUpI(s) => s,
            Section::CompositeLR(s) => s,
            Section::CompositeTB(s) => s,
        }
    }
}

impl SectionStrategy for Section {
    fn label(&self) -> &str {
        self.strategy().label()
    }

    fn compute(&self) -> CalcResult<CapacityRecord> {
        self.strategy().compute()
    }

    fn notes(&self) -> Vec<String> {
        self.strategy().notes()
    }
}

impl From<BuiltUpISection> for Section {
    fn from(s: BuiltUpISection) -> Self {
        Section::BuiltUpI(s)
    }
}

impl From<CompositeLRSection> for Section {
    fn from(s: CompositeLRSection) -> Self {
        Section::CompositeLR(s)
    }
}

impl From<CompositeTBSection> for Section {
    fn from(s: CompositeTBSection) -> Self {
        Section::CompositeTB(s)
    }
}
