use crate::ProvenanceConfig;
use crate::error::{Error, Result};
use crate::github::{AnyContext, GitHubContext, RunnerContext, RunnerKind};
use crate::in_toto::{self, Statement, Subject};
use crate::slsa::{self, generators};
use crate::subjects;
use crate::utils::safe_create_file;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use std::io::Write;
use std::path::Path;

/// Label printed ahead of the document on stdout.
pub const STDOUT_LABEL: &str = "Provenance:";

/// Build the provenance statement for `subject` from the workflow contexts.
///
/// Returns the statement together with its serialized form: pretty-printed
/// JSON, fields in declaration order, no trailing newline. The builder never
/// touches process state; the hosted signal and the clock are passed in.
///
/// Known imprecision at this level:
/// - re-runs of a workflow run share a build invocation id
/// - the entry point is the workflow name, which need not be unique in a
///   repository
pub fn build_statement(
    subject: Vec<Subject>,
    github_context: &str,
    runner_context: &str,
    runner_kind: RunnerKind,
    record_environment: bool,
    finished_on: DateTime<Utc>,
) -> Result<(Statement, Vec<u8>)> {
    // parse() redacts the token before anything else sees the context
    let github = GitHubContext::parse(github_context)?;
    let runner = RunnerContext::parse(runner_context)?;

    let repo_uri = generators::make_repo_uri(&github.repository);

    let builder = generators::make_builder_v01(&format!(
        "{repo_uri}{}",
        runner_kind.builder_id_suffix()
    ));

    let build_metadata = generators::make_build_metadata_v01(
        &format!("{repo_uri}/actions/runs/{}", github.run_id),
        &finished_on.to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    let arguments = github.event_inputs()?;
    let environment = if record_environment {
        Some(AnyContext {
            github: github.clone(),
            runner,
        })
    } else {
        None
    };
    let recipe = generators::make_recipe_v01(&github.workflow, arguments, environment);

    let materials = vec![generators::make_git_material_v01(&repo_uri, &github.sha)];

    let provenance =
        generators::generate_build_provenance_v01(builder, build_metadata, recipe, materials);

    let statement = in_toto::generate_statement_v01(
        subject,
        slsa::PROVENANCE_PREDICATE_TYPE_V01,
        provenance,
    );

    let payload =
        serde_json::to_vec_pretty(&statement).map_err(|e| Error::Serialization(e.to_string()))?;

    info!(
        "Built provenance for {} with {} subject(s)",
        statement.predicate.metadata.build_invocation_id,
        statement.subject.len()
    );

    Ok((statement, payload))
}

/// Enumerate, build, echo and write the provenance document.
pub fn generate_build_provenance(config: &ProvenanceConfig) -> Result<Statement> {
    generate_build_provenance_at(config, Utc::now())
}

/// [`generate_build_provenance`] with a fixed finish time.
pub fn generate_build_provenance_at(
    config: &ProvenanceConfig,
    finished_on: DateTime<Utc>,
) -> Result<Statement> {
    config.validate()?;

    let subject = subjects::enumerate(&config.artifact_path)?;
    if subject.is_empty() {
        warn!(
            "No files found under {}; provenance will have no subjects",
            config.artifact_path.display()
        );
    }

    let (statement, payload) = build_statement(
        subject,
        &config.github_context,
        &config.runner_context,
        config.runner_kind,
        config.record_environment,
        finished_on,
    )?;

    println!("{STDOUT_LABEL}\n{}", String::from_utf8_lossy(&payload));

    write_provenance(&config.output_path, &payload)?;
    info!("Provenance written to {}", config.output_path.display());

    Ok(statement)
}

/// Write `payload` to `path`, replacing any existing file.
pub fn write_provenance(path: &Path, payload: &[u8]) -> Result<()> {
    let to_write_error = |e: Error| match e {
        Error::Io(source) => Error::Write {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    };

    let mut file = safe_create_file(path, false).map_err(to_write_error)?;
    file.write_all(payload)
        .and_then(|_| file.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}
