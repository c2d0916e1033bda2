//! Public output types for handlergen command responses.
//!
//! These are returned by the generator and serialized by the CLI into the
//! `data` field of the JSON envelope.

use serde::{Deserialize, Serialize};

// ============================================================================
// Artifact Emission
// ============================================================================

/// What happened to one artifact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactOutcome {
    Created,
    Overwritten,
    Skipped,
    Planned,
}

/// Result for a single generated artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactResult {
    pub class_name: String,
    pub qualified_name: String,
    pub path: String,
    pub outcome: ArtifactOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Counts per outcome across one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummary {
    pub created: u32,
    pub overwritten: u32,
    pub skipped: u32,
    pub planned: u32,
}

impl GenerateSummary {
    pub fn record(&mut self, outcome: ArtifactOutcome) {
        match outcome {
            ArtifactOutcome::Created => self.created += 1,
            ArtifactOutcome::Overwritten => self.overwritten += 1,
            ArtifactOutcome::Skipped => self.skipped += 1,
            ArtifactOutcome::Planned => self.planned += 1,
        }
    }

    pub fn written(&self) -> u32 {
        self.created + self.overwritten
    }
}

/// Full result of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub namespace: String,
    pub base_type: String,
    pub dry_run: bool,
    pub artifacts: Vec<ArtifactResult>,
    pub summary: GenerateSummary,
}

impl GenerateOutput {
    pub fn new(namespace: String, base_type: String, dry_run: bool) -> Self {
        Self {
            namespace,
            base_type,
            dry_run,
            artifacts: Vec::new(),
            summary: GenerateSummary::default(),
        }
    }

    pub fn push(&mut self, result: ArtifactResult) {
        self.summary.record(result.outcome);
        self.artifacts.push(result);
    }
}
