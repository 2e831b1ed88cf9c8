use crate::ProvenanceConfig;
use crate::error::Result;
use crate::github::RunnerKind;
use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GITHUB_CONTEXT: &str =
    r#"{"repository":"o/r","sha":"abc123","run_id":"7","workflow":"CI"}"#;
pub const RUNNER_CONTEXT: &str = r#"{"os":"Linux"}"#;

/// Bytes of the single artifact in [`ArtifactWorkspace::with_single_output`].
pub const OUT_BIN: &[u8] = b"\x7fELF\x02\x01\x01\x00known bytes";

/// A temporary build workspace: `dist/` for artifacts, provenance next to it.
pub struct ArtifactWorkspace {
    pub dir: TempDir,
}

impl ArtifactWorkspace {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("dist"))?;
        Ok(Self { dir })
    }

    pub fn with_single_output() -> Result<Self> {
        let workspace = Self::new()?;
        workspace.add_artifact("out.bin", OUT_BIN)?;
        Ok(workspace)
    }

    pub fn dist(&self) -> PathBuf {
        self.dir.path().join("dist")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("build.provenance")
    }

    pub fn add_artifact(&self, relative: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.dist().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn config(&self, artifact_path: &Path, github_context: &str) -> ProvenanceConfig {
        ProvenanceConfig {
            artifact_path: artifact_path.to_path_buf(),
            output_path: self.output_path(),
            github_context: github_context.to_string(),
            runner_context: RUNNER_CONTEXT.to_string(),
            runner_kind: RunnerKind::Hosted,
            record_environment: false,
        }
    }
}

pub fn frozen_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
}
