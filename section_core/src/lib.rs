//! # section_core - Steel Section Capacity Engine
//!
//! `section_core` computes cross-section properties and bending capacities for
//! three fabricated steel sections: a welded built-up I, and a circular hollow
//! section flanked by two UPE channels either left-right or top-bottom.
//! Every result is a flat [`CapacityRecord`] that serializes to JSON and
//! flattens to CSV.
//!
//! ## Design Philosophy
//!
//! - **Pure math**: Section strategies take geometry and return records
//! - **JSON-First**: Inputs, records and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Reporting apart**: Console and export code only consumes records
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::sections::{BuiltUpISection, SectionStrategy};
//!
//! let record = BuiltUpISection::default().compute().unwrap();
//! assert!(record.shape_x > 1.0);
//!
//! let json = serde_json::to_string_pretty(&record).unwrap();
//! assert!(json.contains("\"Mp_x_kNm\""));
//! ```
//!
//! ## Modules
//!
//! - [`sections`] - Section strategies and the capacity record
//! - [`equations`] - Closed-form area, inertia and plastic modulus helpers
//! - [`materials`] - Steel grades and the channel catalog
//! - [`report`] - Console rendering and CSV/XLSX/JSON export
//! - [`project`] - Project container, metadata, and settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod report;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use materials::{ChannelProfile, Material, SteelGrade};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use report::{ReportSettings, Reporter};
pub use sections::{CapacityRecord, Section, SectionStrategy};
