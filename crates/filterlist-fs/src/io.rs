//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a published artifact is never observed
/// half-written. Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let written = write_locked(&mut temp_file, content, &temp_path, &native_path)
        .and_then(|()| {
            drop(temp_file);
            fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
        });

    if let Err(e) = written {
        // The temp file must not outlive a failed write
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            tracing::warn!(
                path = %temp_path.display(),
                error = %cleanup,
                "Could not remove temp file"
            );
        }
        return Err(e);
    }

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

fn write_locked(
    file: &mut File,
    content: &[u8],
    temp_path: &Path,
    target: &Path,
) -> Result<()> {
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    file.write_all(content).map_err(|e| Error::io(temp_path, e))?;
    file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content from a file, returning `None` if it does not exist.
///
/// Any other failure (permissions, invalid UTF-8) is still an error.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// List regular files directly inside `dir` whose extension equals
/// `extension`, sorted by path.
///
/// The listing is not recursive. Dotfiles are included.
pub fn list_files(dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let candidate = NormalizedPath::new(entry.path());
        if candidate.extension() == Some(extension) {
            files.push(candidate);
        }
    }

    files.sort();
    Ok(files)
}
