//! # Reporting and Export
//!
//! Turns capacity records into console text and export files. The engine
//! never depends on this module; it only consumes finished records.
//!
//! All switches (verbose narration, which files to write, where) live in
//! [`ReportSettings`] and are handed to a [`Reporter`] at construction.
//!
//! ## Modules
//!
//! - [`console`] - Boxed key/value summaries
//! - [`csv_export`] - Union-of-keys CSV flattening and read-back
//! - [`xlsx_export`] - Styled "Summary" spreadsheet
//! - [`paths`] - Export folder discovery
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::report::{Reporter, ReportSettings};
//! use section_core::sections::{Section, SectionStrategy};
//!
//! let reporter = Reporter::new(ReportSettings::default());
//! let mut records = Vec::new();
//! for section in Section::documented_defaults() {
//!     let record = section.compute()?;
//!     println!("{}", reporter.render(&section, &record));
//!     records.push(record);
//! }
//! for path in reporter.export(&records)? {
//!     println!("saved {}", path.display());
//! }
//! # Ok::<(), section_core::errors::CalcError>(())
//! ```

pub mod console;
pub mod csv_export;
pub mod paths;
pub mod xlsx_export;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::file_io::write_locked;
use crate::sections::{CapacityRecord, SectionStrategy};

pub use csv_export::{column_order, read_csv_rows, to_csv_string};
pub use paths::find_export_dir;
pub use xlsx_export::to_xlsx_bytes;

/// Default export file name, without extension
pub const DEFAULT_FILE_STEM: &str = "sections_results";

/// Console and export options.
///
/// ## JSON Example
///
/// ```json
/// { "verbose": true, "write_csv": true, "write_xlsx": true, "write_json": false, "file_stem": "sections_results" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Print method explanations under each section header
    pub verbose: bool,
    /// Write `<stem>.csv`
    pub write_csv: bool,
    /// Write `<stem>.xlsx`
    pub write_xlsx: bool,
    /// Write `<stem>.json`
    pub write_json: bool,
    /// Export file name without extension
    pub file_stem: String,
    /// Export folder; discovered when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            verbose: true,
            write_csv: true,
            write_xlsx: true,
            write_json: false,
            file_stem: DEFAULT_FILE_STEM.to_string(),
            export_dir: None,
        }
    }
}

/// Formats and exports records according to fixed settings.
#[derive(Debug, Clone)]
pub struct Reporter {
    settings: ReportSettings,
    export_dir: PathBuf,
}

impl Reporter {
    /// Create a reporter, resolving the export folder once.
    pub fn new(settings: ReportSettings) -> Self {
        let export_dir = settings.export_dir.clone().unwrap_or_else(find_export_dir);
        Reporter { settings, export_dir }
    }

    /// Settings this reporter was built with
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Folder exports are written to
    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }

    /// Target path of the CSV export
    pub fn csv_path(&self) -> PathBuf {
        self.export_dir.join(format!("{}.csv", self.settings.file_stem))
    }

    /// Target path of the spreadsheet export
    pub fn xlsx_path(&self) -> PathBuf {
        self.export_dir.join(format!("{}.xlsx", self.settings.file_stem))
    }

    /// Target path of the JSON export
    pub fn json_path(&self) -> PathBuf {
        self.export_dir.join(format!("{}.json", self.settings.file_stem))
    }

    /// Console block for one computed section
    pub fn render(&self, section: &dyn SectionStrategy, record: &CapacityRecord) -> String {
        let notes = self.settings.verbose.then(|| section.notes());
        console::render_section(section.label(), record, notes.as_deref())
    }

    /// Write the enabled export files. Returns the paths written, in
    /// CSV, XLSX, JSON order; nothing is written for an empty slice.
    pub fn export(&self, records: &[CapacityRecord]) -> CalcResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        if records.is_empty() {
            log::info!("no records to export");
            return Ok(written);
        }

        if self.settings.write_csv {
            let path = self.csv_path();
            write_locked(&path, to_csv_string(records)?.as_bytes())?;
            log::info!("saved CSV to {}", path.display());
            written.push(path);
        }

        if self.settings.write_xlsx {
            let path = self.xlsx_path();
            write_locked(&path, &to_xlsx_bytes(records)?)?;
            log::info!("saved XLSX to {}", path.display());
            written.push(path);
        }

        if self.settings.write_json {
            let path = self.json_path();
            let json = serde_json::to_string_pretty(records)
                .map_err(|e| CalcError::serialization(e.to_string()))?;
            write_locked(&path, json.as_bytes())?;
            log::info!("saved JSON to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{BuiltUpISection, Section};
    use approx::assert_relative_eq;
    use std::fs;

    fn settings_in(dir: &std::path::Path) -> ReportSettings {
        ReportSettings {
            export_dir: Some(dir.to_path_buf()),
            ..ReportSettings::default()
        }
    }

    fn reference_records() -> Vec<CapacityRecord> {
        Section::documented_defaults()
            .iter()
            .map(|s| s.compute().unwrap())
            .collect()
    }

    #[test]
    fn test_export_csv_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(ReportSettings {
            write_json: true,
            ..settings_in(dir.path())
        });

        let records = reference_records();
        let written = reporter.export(&records).unwrap();
        assert_eq!(
            written,
            vec![
                dir.path().join("sections_results.csv"),
                dir.path().join("sections_results.xlsx"),
                dir.path().join("sections_results.json"),
            ]
        );

        let rows = read_csv_rows(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["x_c_mm"], "217.9");

        assert!(fs::read(&written[1]).unwrap().starts_with(b"PK"));

        let parsed: Vec<CapacityRecord> = serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
        assert_eq!(parsed.len(), records.len());
        for (p, r) in parsed.iter().zip(&records) {
            assert_eq!(p.section, r.section);
            assert_relative_eq!(p.mp_x_knm, r.mp_x_knm, max_relative = 1e-12);
            assert_eq!(p.y_c_mm, r.y_c_mm);
        }
    }

    #[test]
    fn test_export_respects_switches() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(ReportSettings {
            write_csv: false,
            write_xlsx: false,
            ..settings_in(dir.path())
        });
        assert!(reporter.export(&reference_records()).unwrap().is_empty());
        assert!(!reporter.csv_path().exists());
        assert!(!reporter.xlsx_path().exists());
    }

    #[test]
    fn test_export_into_new_folder() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("exports");
        let reporter = Reporter::new(settings_in(&target));

        let written = reporter.export(&reference_records()).unwrap();
        assert_eq!(written, vec![target.join("sections_results.csv"), target.join("sections_results.xlsx")]);
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(settings_in(dir.path()));
        assert!(reporter.export(&[]).unwrap().is_empty());
        assert!(!reporter.csv_path().exists());
    }

    #[test]
    fn test_render_verbose_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let section = BuiltUpISection::default();
        let record = section.compute().unwrap();

        let verbose = Reporter::new(settings_in(dir.path()));
        assert!(verbose.render(&section, &record).contains('•'));

        let quiet = Reporter::new(ReportSettings {
            verbose: false,
            ..settings_in(dir.path())
        });
        assert!(!quiet.render(&section, &record).contains('•'));
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: ReportSettings = serde_json::from_str(r#"{ "write_json": true }"#).unwrap();
        assert!(settings.verbose);
        assert!(settings.write_xlsx);
        assert!(settings.write_json);
        assert_eq!(settings.file_stem, DEFAULT_FILE_STEM);
    }
}
