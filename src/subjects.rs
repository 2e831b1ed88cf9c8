//! # Subject enumeration
//!
//! Turns an artifact path (a single file or a directory tree) into the list
//! of in-toto subjects for the statement: one entry per regular file, named by
//! its slash-separated path relative to the artifact path and identified by
//! its SHA-256 digest.
//!
//! Before walking, every component of the artifact path is stat'ed from the
//! outermost down. A dangling symlink anywhere along the way is reported as
//! [`Error::BrokenSymlink`] rather than surfacing later as an opaque walk
//! failure or, worse, as a silently empty subject list.
//!
//! ## Examples
//!
//! ```no_run
//! use gha_provenance::subjects::enumerate;
//!
//! for subject in enumerate("dist")? {
//!     println!("{} {}", subject.name, subject.digest["sha256"]);
//! }
//! # Ok::<(), gha_provenance::error::Error>(())
//! ```

use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::hash;
use crate::in_toto::Subject;
use crate::utils::is_symlink;

/// Hash every regular file reachable from `root`.
///
/// Traversal is pre-order with entries sorted by file name inside each
/// directory, so the result is stable for an unchanged tree. Symlinks are
/// followed; a dangling link or a link cycle inside the tree aborts the walk.
/// Any failure discards everything hashed so far.
pub fn enumerate(root: impl AsRef<Path>) -> Result<Vec<Subject>> {
    let root = root.as_ref();
    check_ancestors(root)?;

    let mut subjects = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = subject_name(root, entry.path())?;
        let digest = hash::file_digest_set(entry.path()).map_err(|e| match e {
            Error::Io(source) => Error::Traversal {
                path: entry.path().to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!("Hashed subject {name}");

        subjects.push(Subject { name, digest });
    }

    info!(
        "Enumerated {} subject(s) under {}",
        subjects.len(),
        root.display()
    );

    Ok(subjects)
}

/// Stat `root` and each of its ancestors, outermost first.
///
/// Fails with [`Error::BrokenSymlink`] naming the first component that is a
/// symlink to a missing target. Other stat failures are returned as
/// [`Error::Traversal`] for that component.
pub fn check_ancestors(root: &Path) -> Result<()> {
    let mut chain: Vec<&Path> = root
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    chain.reverse();

    for path in chain {
        if let Err(e) = fs::metadata(path) {
            if e.kind() == ErrorKind::NotFound && is_symlink(path)? {
                return Err(Error::BrokenSymlink {
                    path: path.to_path_buf(),
                });
            }
            return Err(Error::Traversal {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    Ok(())
}

/// Name for the subject at `path` found while walking `root`.
///
/// When `root` is the file itself, its base name is used so the subject name
/// is never empty.
fn subject_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::Validation(format!(
            "Path '{}' should be prefixed with '{}'",
            path.display(),
            root.display()
        ))
    })?;

    if relative.as_os_str().is_empty() {
        return base_name(root);
    }

    Ok(to_slash(relative))
}

fn base_name(path: &Path) -> Result<String> {
    // `file_name` is None for paths ending in `..`; resolve those first.
    let resolved: PathBuf = match path.file_name() {
        Some(_) => path.to_path_buf(),
        None => fs::canonicalize(path)?,
    };

    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Validation(format!("No file name in path: {}", path.display())))
}

fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
