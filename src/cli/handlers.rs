use crate::ProvenanceConfig;
use crate::error::Result;
use crate::github::{HOSTED_SIGNAL_ENV, RunnerKind};
use crate::slsa;

use super::commands::GenerateArgs;

pub fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let hosted_signal = std::env::var(HOSTED_SIGNAL_ENV).ok();
    let config = make_config(args, hosted_signal.as_deref());

    slsa::cli::generate_build_provenance(&config)?;

    Ok(())
}

/// Combine parsed flags with the hosted-runner signal.
pub fn make_config(args: GenerateArgs, hosted_signal: Option<&str>) -> ProvenanceConfig {
    ProvenanceConfig {
        artifact_path: args.artifact_path,
        output_path: args.output_path,
        github_context: args.github_context,
        runner_context: args.runner_context,
        runner_kind: RunnerKind::from_env_value(hosted_signal),
        record_environment: args.record_environment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> GenerateArgs {
        GenerateArgs {
            artifact_path: PathBuf::from("dist"),
            output_path: PathBuf::from("build.provenance"),
            github_context: "{}".to_string(),
            runner_context: "{}".to_string(),
            record_environment: false,
        }
    }

    #[test]
    fn test_make_config_hosted() {
        let config = make_config(args(), Some("true"));
        assert_eq!(config.runner_kind, RunnerKind::Hosted);
        assert_eq!(config.artifact_path, PathBuf::from("dist"));
    }

    #[test]
    fn test_make_config_self_hosted() {
        assert_eq!(
            make_config(args(), None).runner_kind,
            RunnerKind::SelfHosted
        );
        assert_eq!(
            make_config(args(), Some("")).runner_kind,
            RunnerKind::SelfHosted
        );
    }
}
