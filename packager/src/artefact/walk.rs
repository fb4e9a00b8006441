//! Deterministic file discovery under the packaging root.

use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;
use std::io;

/// Collect every regular file reachable from `path`.
///
/// A file yields itself; a directory yields its files depth-first with
/// entries sorted by name at every level; anything else (including a missing
/// path) yields nothing. Symbolic links to files are included, symbolic
/// links to directories are not descended into.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] naming the directory that cannot be read
/// or that contains a name which is not valid UTF-8.
pub fn collect_files(path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    if path.is_file() {
        files.push(path.to_owned());
    } else if path.is_dir() {
        walk_dir(path, &mut files)?;
    } else {
        trace!("collect_files: skipping {path}: not a file or directory");
    }
    Ok(files)
}

fn walk_dir(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    let mut entries = dir
        .read_dir_utf8()
        .and_then(|listing| listing.collect::<io::Result<Vec<_>>>())
        .map_err(|e| PackagerError::io(dir, e))?;
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    for entry in entries {
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| PackagerError::io(entry_path, e))?;
        if file_type.is_dir() {
            walk_dir(entry_path, files)?;
        } else if entry_path.is_file() {
            files.push(entry_path.to_owned());
        }
    }
    Ok(())
}
