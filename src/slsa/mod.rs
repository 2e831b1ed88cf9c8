//! # SLSA Provenance v0.1
//!
//! This module provides the predicate half of a build provenance statement,
//! following the SLSA provenance v0.1 model as emitted for GitHub Actions
//! workflows:
//!
//! - **builder**: who ran the build (the repository plus a hosted or
//!   self-hosted runner suffix)
//! - **metadata**: the run identifier, completeness claims and finish time
//! - **recipe**: which workflow ran and with which dispatch inputs
//! - **materials**: the source commit the build started from
//!
//! At this level the statement is written unsigned. Signing and envelope
//! wrapping are left to higher assurance levels.
//!
//! ## Key Components
//!
//! - [`generators`] - Constructors for each predicate part
//! - [`cli`] - Statement assembly from a GitHub context and the full
//!   enumerate, build, write pipeline
//! - [`PROVENANCE_PREDICATE_TYPE_V01`] - predicate type URI
//!
//! ## Examples
//!
//! ```no_run
//! use gha_provenance::github::RunnerKind;
//! use gha_provenance::slsa::cli::generate_build_provenance;
//! use gha_provenance::ProvenanceConfig;
//! use std::path::PathBuf;
//!
//! let config = ProvenanceConfig {
//!     artifact_path: PathBuf::from("dist"),
//!     output_path: PathBuf::from("build.provenance"),
//!     github_context: r#"{"repository":"o/r","sha":"abc123","run_id":"7","workflow":"CI"}"#.to_string(),
//!     runner_context: r#"{"os":"Linux"}"#.to_string(),
//!     runner_kind: RunnerKind::Hosted,
//!     record_environment: false,
//! };
//!
//! generate_build_provenance(&config).unwrap();
//! ```

pub mod cli;
pub mod generators;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::github::AnyContext;
use crate::in_toto::DigestSet;

/// The SLSA v0.1 provenance predicate type URI.
///
/// ```
/// use gha_provenance::slsa::PROVENANCE_PREDICATE_TYPE_V01;
///
/// assert_eq!(PROVENANCE_PREDICATE_TYPE_V01, "https://in-toto.io/Provenance/v0.1");
/// ```
pub const PROVENANCE_PREDICATE_TYPE_V01: &str = "https://in-toto.io/Provenance/v0.1";

/// Recipe type for a GitHub Actions workflow run.
pub const GITHUB_ACTIONS_WORKFLOW_RECIPE_TYPE: &str =
    "https://github.com/Attestations/GitHubActionsWorkflow@v1";

/// Builder id suffix for GitHub-hosted runners.
pub const GITHUB_HOSTED_ID_SUFFIX: &str = "/Attestations/GitHubHostedActions@v1";

/// Builder id suffix for self-hosted runners.
pub const SELF_HOSTED_ID_SUFFIX: &str = "/Attestations/SelfHostedActions@v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub builder: Builder,
    pub metadata: Metadata,
    pub recipe: Recipe,
    pub materials: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    pub id: String,
}

// buildStartedOn is not part of the model: a workflow step cannot observe
// when its own run started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub build_invocation_id: String,
    pub completeness: Completeness,
    pub reproducible: bool,
    pub build_finished_on: String,
}

/// Whether each field is claimed to be exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completeness {
    pub arguments: bool,
    pub environment: bool,
    pub materials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub defined_in_material: usize,
    pub entry_point: String,
    /// Opaque pass-through; `null` when the trigger carried no inputs.
    pub arguments: Value,
    pub environment: Option<AnyContext>,
}

/// A material the build consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uri: String,
    pub digest: DigestSet,
}
