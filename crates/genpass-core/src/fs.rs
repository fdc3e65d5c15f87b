//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a temporary sibling and a rename.
///
/// Parent directories are created as needed. Readers see either the old
/// file or the new one, never a partial write.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the temporary file
/// cannot be written, or the rename fails even after the fallback attempt.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp_path = temp_sibling(destination);
    if let Err(err) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    rename_with_fallback(&temp_path, destination)
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "genpass".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

/// Rename a file, with fallback for platforms where rename fails if the target exists.
///
/// If the rename ultimately fails, the temp file is cleaned up.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
