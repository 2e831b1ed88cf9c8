use clap::Args;
use std::path::PathBuf;

use crate::DEFAULT_OUTPUT_PATH;

// Flag names keep their underscore spelling; existing workflows pass them verbatim.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// The file or dir path of the artifacts for which provenance should be generated
    #[arg(long = "artifact_path")]
    pub artifact_path: PathBuf,

    /// The path to which the generated provenance should be written
    #[arg(long = "output_path", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// The '${github}' context value
    #[arg(long = "github_context")]
    pub github_context: String,

    /// The '${runner}' context value
    #[arg(long = "runner_context")]
    pub runner_context: String,

    /// Record the redacted github and runner contexts as the recipe environment
    #[arg(long = "record_environment", default_value = "false")]
    pub record_environment: bool,
}
