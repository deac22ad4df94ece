//! # Project Data Structures
//!
//! The `Project` struct is the root container for a batch of sections.
//! Projects serialize to human-readable JSON and double as the run
//! configuration for the CLI.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (report options)
//! └── items: Vec<SectionEntry> (sections in report order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use section_core::project::Project;
//!
//! let project = Project::with_documented_sections("Jane Engineer", "25-042", "ACME Corp");
//! let records: Vec<_> = project.compute_all().into_iter().collect::<Result<_, _>>().unwrap();
//! assert_eq!(records.len(), 3);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CalcResult;
use crate::materials::{Material, SteelGrade};
use crate::report::ReportSettings;
use crate::sections::{CapacityRecord, Section, SectionStrategy};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings
    #[serde(default)]
    pub settings: GlobalSettings,

    /// Sections in report order
    pub items: Vec<SectionEntry>,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version for compatibility checking
    pub version: String,
    /// Responsible engineer
    pub engineer: String,
    /// Job/project number (e.g., "25-001")
    pub job_id: String,
    /// Client name
    pub client: String,
    /// When the project was created
    pub created: DateTime<Utc>,
    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Console and export options
    #[serde(default)]
    pub report: ReportSettings,
}

/// A section with a stable identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: Uuid,
    pub section: Section,
}

impl Project {
    /// Create a new empty project.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: Vec::new(),
        }
    }

    /// Create a project holding the three reference sections.
    pub fn with_documented_sections(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let mut project = Project::new(engineer, job_id, client);
        for section in Section::documented_defaults() {
            project.add_section(section);
        }
        project
    }

    /// Append a section. Returns the UUID assigned to it.
    pub fn add_section(&mut self, section: impl Into<Section>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(SectionEntry {
            id,
            section: section.into(),
        });
        self.touch();
        id
    }

    /// Remove a section by UUID.
    pub fn remove_section(&mut self, id: &Uuid) -> Option<Section> {
        let index = self.items.iter().position(|entry| &entry.id == id)?;
        let entry = self.items.remove(index);
        self.touch();
        Some(entry.section)
    }

    /// Get a section by UUID.
    pub fn get_section(&self, id: &Uuid) -> Option<&Section> {
        self.items
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| &entry.section)
    }

    /// Set every section's material to a named grade.
    pub fn set_grade(&mut self, grade: SteelGrade) {
        let material = Material::from_grade(grade);
        for entry in &mut self.items {
            match &mut entry.section {
                Section::BuiltUpI(s) => s.material = material,
                Section::CompositeLR(s) => s.material = material,
                Section::CompositeTB(s) => s.material = material,
            }
        }
        self.touch();
    }

    /// Compute every section in order. One failing section does not stop
    /// the others.
    pub fn compute_all(&self) -> Vec<CalcResult<CapacityRecord>> {
        self.items.iter().map(|entry| entry.section.compute()).collect()
    }

    /// Update the modified timestamp
    fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::BuiltUpISection;

    #[test]
    fn test_new_project() {
        let project = Project::new("John Doe", "25-001", "Client Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.meta.engineer, "John Doe");
        assert!(project.items.is_empty());
    }

    #[test]
    fn test_add_get_remove() {
        let mut project = Project::new("E", "J", "C");
        let id = project.add_section(BuiltUpISection::default());
        assert!(project.get_section(&id).is_some());

        let removed = project.remove_section(&id).unwrap();
        assert_eq!(removed.label(), "Built-up I");
        assert!(project.get_section(&id).is_none());
        assert!(project.remove_section(&id).is_none());
    }

    #[test]
    fn test_compute_all_keeps_order_and_isolates_failures() {
        let mut project = Project::with_documented_sections("E", "J", "C");
        let broken = BuiltUpISection {
            label: "Broken".to_string(),
            overall_height_mm: 30.0,
            ..BuiltUpISection::default()
        };
        project.add_section(broken);

        let results = project.compute_all();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().section, "Built-up I");
        assert_eq!(results[2].as_ref().unwrap().section, "CHS+2×UPE T-B");
        assert_eq!(results[3].as_ref().unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_set_grade_scales_capacities() {
        let mut project = Project::with_documented_sections("E", "J", "C");
        let before: Vec<f64> = project.compute_all().into_iter().map(|r| r.unwrap().mp_x_knm).collect();

        project.set_grade(SteelGrade::S235);
        let after: Vec<f64> = project.compute_all().into_iter().map(|r| r.unwrap().mp_x_knm).collect();

        for (b, a) in before.iter().zip(&after) {
            assert!((a / b - 235.0 / 355.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let project = Project::with_documented_sections("E", "J", "C");
        let json = serde_json::to_string_pretty(&project).unwrap();
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.items, project.items);
        assert_eq!(roundtrip.settings, project.settings);
    }
}
