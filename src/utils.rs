use crate::error::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Mode for files written by this tool. Provenance is data, never executable.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// Open a file for reading, following symbolic links.
///
/// The returned handle is meant to be consumed and dropped by the caller right away.
pub fn safe_open_file(path: &Path) -> Result<File> {
    Ok(File::open(path)?)
}

/// Create (or truncate) a file for writing with a non-executable mode.
///
/// When `allow_symlink` is false an existing symbolic link at `path` is rejected
/// instead of being written through.
pub fn safe_create_file(path: &Path, allow_symlink: bool) -> Result<File> {
    if !allow_symlink && is_symlink(path)? {
        return Err(Error::Validation(format!(
            "Refusing to write through symlink: {}",
            path.display()
        )));
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    Ok(options.open(path)?)
}

/// `true` if `path` exists and is a symbolic link (dangling or not).
pub fn is_symlink(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_symlink()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}
