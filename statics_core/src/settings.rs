//! Solver settings stored with each project.

use serde::{Deserialize, Serialize};

use crate::calculations::diagrams::DEFAULT_DIAGRAM_SAMPLES;

/// Knobs that change how a snapshot is solved.
///
/// Missing fields take their defaults when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Samples per diagram curve (at least 2)
    pub diagram_samples: usize,

    /// Add the frame members' own weight to the corner reactions
    pub include_frame_self_weight: bool,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            diagram_samples: DEFAULT_DIAGRAM_SAMPLES,
            include_frame_self_weight: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.diagram_samples, 100);
        assert!(settings.include_frame_self_weight);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SolverSettings =
            serde_json::from_str(r#"{ "include_frame_self_weight": false }"#).unwrap();
        assert!(!settings.include_frame_self_weight);
        assert_eq!(settings.diagram_samples, 100);
    }

    #[test]
    fn test_retired_fields_are_ignored() {
        let settings: SolverSettings =
            serde_json::from_str(r#"{ "diagram_samples": 40, "partial_uniform_segments": 50 }"#).unwrap();
        assert_eq!(settings.diagram_samples, 40);
        assert!(settings.include_frame_self_weight);
    }
}
