//! # gha-provenance
//!
//! Build provenance for GitHub Actions workflows.
//!
//! Given the path of a build's outputs and the workflow's `github` and
//! `runner` contexts, this crate produces an in-toto Statement v0.1 carrying
//! a SLSA Provenance v0.1 predicate: every output file's SHA-256 digest bound
//! to the repository, commit, workflow run and runner that produced it. The
//! statement is written unsigned.
//!
//! ## Quick Start
//!
//! In a workflow step:
//! ```bash
//! gha-provenance \
//!     --artifact_path=dist \
//!     --output_path=build.provenance \
//!     --github_context='${{ toJSON(github) }}' \
//!     --runner_context='${{ toJSON(runner) }}'
//! ```
//!
//! ## Pipeline
//!
//! - [`subjects`] walks and hashes the artifact path
//! - [`slsa::cli::build_statement`] maps the contexts onto the provenance model
//! - [`slsa::cli::generate_build_provenance`] runs both, echoes the document
//!   and writes it out

pub mod cli;
pub mod error;
pub mod github;
pub mod hash;
pub mod in_toto;
pub mod slsa;
pub mod subjects;
#[cfg(test)]
mod tests;
pub mod utils;

use std::path::PathBuf;

use github::RunnerKind;

// Re-export error types
pub use error::{Error, Result};

/// Default destination for the provenance document.
pub const DEFAULT_OUTPUT_PATH: &str = "build.provenance";

/// Everything one provenance run needs.
#[derive(Debug, Clone)]
pub struct ProvenanceConfig {
    /// File or directory to hash
    pub artifact_path: PathBuf,
    /// Where the JSON document is written
    pub output_path: PathBuf,
    /// Serialized `${{ github }}` context
    pub github_context: String,
    /// Serialized `${{ runner }}` context
    pub runner_context: String,
    /// Selects the builder identity suffix
    pub runner_kind: RunnerKind,
    /// Embed the (redacted) contexts as `recipe.environment`
    pub record_environment: bool,
}

impl ProvenanceConfig {
    /// Reject empty required values before any work begins.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("artifact_path", self.artifact_path.as_os_str().is_empty()),
            ("output_path", self.output_path.as_os_str().is_empty()),
            ("github_context", self.github_context.trim().is_empty()),
            ("runner_context", self.runner_context.trim().is_empty()),
        ];

        for (flag, missing) in required {
            if missing {
                return Err(Error::Validation(format!(
                    "No value found for required flag: --{flag}"
                )));
            }
        }

        Ok(())
    }
}

/// Initialize logging for the CLI
///
/// Logging is controlled through `RUST_LOG` and written to stderr, leaving
/// stdout to the provenance echo.
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}
