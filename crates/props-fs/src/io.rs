//! Whole-file reads and atomic replacement of output documents

use std::fs::{self, File, OpenOptions, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Replace `path` with `content` in one step.
///
/// The bytes go to a sibling temp file which is then renamed over the
/// target, so readers see either the old or the new document. An existing
/// target stays locked for the duration and its permissions carry over.
/// The temp file is removed whenever the replacement fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let existing = lock_existing(path)?;
    let permissions = match &existing {
        Some(file) => Some(
            file.metadata()
                .map_err(|e| Error::io(path, e))?
                .permissions(),
        ),
        None => None,
    };

    let temp_path = temp_path_for(path);
    let replaced = write_temp(&temp_path, content, permissions)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| Error::io(path, e)));

    if let Err(err) = replaced {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Open and exclusively lock the current target, if there is one.
///
/// The lock lives as long as the returned handle.
fn lock_existing(path: &Path) -> Result<Option<File>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    Ok(Some(file))
}

// Same directory keeps the rename on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn write_temp(temp_path: &Path, content: &[u8], permissions: Option<Permissions>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    file.write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }
    file.sync_all().map_err(|e| Error::io(temp_path, e))
}

/// Read a whole file as UTF-8 text.
///
/// A missing file is reported as [`Error::NotFound`] rather than a generic
/// I/O error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(path, e),
    })
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
