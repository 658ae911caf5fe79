//! # Project Documents
//!
//! A `Project` groups named analysis snapshots with the settings used to
//! solve them. Projects serialize to human-readable JSON; see
//! [`crate::file_io`] for saving and loading.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (schema version, engineer, job info, timestamps)
//! ├── settings: SolverSettings
//! └── analyses: HashMap<Uuid, AnalysisInput>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::{AnalysisInput, Geometry};
//! use statics_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let id = project.add_analysis(AnalysisInput::simple_beam("B-1", Geometry::default()));
//!
//! let solution = project.solve(&id).unwrap();
//! assert_eq!(solution.results.total_applied_load_n, 0.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{solve_with, AnalysisInput, Solution};
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Settings applied to every solve in this project
    #[serde(default)]
    pub settings: SolverSettings,

    /// All analyses, keyed by UUID
    #[serde(default)]
    pub analyses: HashMap<Uuid, AnalysisInput>,
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
            settings: SolverSettings::default(),
            analyses: HashMap::new(),
        }
    }

    /// Add an analysis and return its new id.
    pub fn add_analysis(&mut self, input: AnalysisInput) -> Uuid {
        let id = Uuid::new_v4();
        self.analyses.insert(id, input);
        self.touch();
        id
    }

    /// Remove an analysis by id.
    pub fn remove_analysis(&mut self, id: &Uuid) -> Option<AnalysisInput> {
        let removed = self.analyses.remove(id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn get_analysis(&self, id: &Uuid) -> Option<&AnalysisInput> {
        self.analyses.get(id)
    }

    /// Mutable access; marks the project as modified when found.
    pub fn get_analysis_mut(&mut self, id: &Uuid) -> Option<&mut AnalysisInput> {
        if self.analyses.contains_key(id) {
            self.meta.modified = Utc::now();
            self.analyses.get_mut(id)
        } else {
            None
        }
    }

    /// Analyses sorted by label, for stable listings
    pub fn analyses_by_label(&self) -> Vec<(&Uuid, &AnalysisInput)> {
        let mut entries: Vec<_> = self.analyses.iter().collect();
        entries.sort_by(|a, b| a.1.label.cmp(&b.1.label).then(a.0.cmp(b.0)));
        entries
    }

    /// Solve one analysis with this project's settings.
    pub fn solve(&self, id: &Uuid) -> CalcResult<Solution> {
        let input = self.get_analysis(id).ok_or_else(|| CalcError::AnalysisNotFound {
            id: id.to_string(),
        })?;
        Ok(solve_with(input, &self.settings))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
