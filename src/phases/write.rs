//! Phase 5: Writing to Disk
//!
//! This is the final phase of the generation pipeline. Its only
//! responsibility is to replace the artifact on disk with the newly built one
//! without ever exposing a partially written file.
//!
//! ## Process
//!
//! 1.  **Create Temporary File**: A temporary file is created in the
//!     destination's own directory, so the final rename never crosses a
//!     filesystem boundary.
//!
//! 2.  **Write Content**: The prologue, declarations, definitions and
//!     epilogue are streamed into the temporary file, which is then flushed
//!     and synced.
//!
//! 3.  **Atomic Replace**: The temporary file is renamed over the
//!     destination.
//!
//! If any step fails, the temporary file is deleted when its handle is
//! dropped and the previous destination file, if any, is left untouched.

use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use super::Artifact;
use crate::error::{Error, Result};

/// Execute Phase 5: atomically write `artifact` to `destination`.
///
/// Returns the number of bytes written. The destination's directory must
/// already exist.
pub fn execute(artifact: &Artifact, destination: &Path) -> Result<u64> {
    let directory = destination_dir(destination);
    let write_error = |message: String| Error::Write {
        path: destination.display().to_string(),
        message,
    };

    let mut temp = NamedTempFile::new_in(directory).map_err(|e| {
        write_error(format!(
            "Failed to create temporary file in '{}': {}",
            directory.display(),
            e
        ))
    })?;
    debug!("Writing artifact to temporary file {}", temp.path().display());

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        artifact
            .write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| write_error(format!("Failed to write artifact content: {}", e)))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| write_error(format!("Failed to sync artifact content: {}", e)))?;

    let bytes = temp
        .as_file()
        .metadata()
        .map_err(|e| write_error(format!("Failed to read artifact size: {}", e)))?
        .len();

    // On failure the returned handle is dropped, which removes the temporary file.
    temp.persist(destination)
        .map_err(|e| write_error(format!("Failed to replace destination: {}", e.error)))?;

    Ok(bytes)
}

/// Directory the destination lives in; `.` for a bare file name.
pub fn destination_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
