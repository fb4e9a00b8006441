//! Zip archive creation for PCM packages.
//!
//! Archives are reproducible: members are written in sorted order with a
//! fixed timestamp and fixed permissions, so identical inputs always give
//! byte-identical output.

use super::layout::member_paths;
use super::walk::collect_files;
use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use log::{debug, trace};
use std::fs;
use std::io;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Deflate effort used for every member.
const DEFLATE_LEVEL: i64 = 9;

/// Unix mode recorded for every member.
const MEMBER_PERMISSIONS: u32 = 0o644;

/// Write the package archive for `root` to `output_path`.
///
/// Every regular file under each packaged top-level entry is added under
/// its root-relative, forward-slash member name. Top-level entries that are
/// neither a file nor a directory are skipped. Returns the member names in
/// the order they were written.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] if a source file cannot be read or the
/// output cannot be created, and [`PackagerError::Zip`] if the zip writer
/// fails.
pub fn create_archive(output_path: &Utf8Path, root: &Utf8Path) -> Result<Vec<String>> {
    let mut sources = Vec::new();
    for member in member_paths(root) {
        let files = collect_files(&member)?;
        sources.extend(files);
    }

    let output = fs::File::create(output_path).map_err(|e| PackagerError::io(output_path, e))?;
    let mut writer = ZipWriter::new(output);
    let options = member_options();
    let mut names = Vec::with_capacity(sources.len());

    for source in &sources {
        let name = member_name(root, source)?;
        trace!("create_archive: adding {name}");
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| PackagerError::zip(output_path, e))?;
        let mut input = fs::File::open(source).map_err(|e| PackagerError::io(source, e))?;
        io::copy(&mut input, &mut writer).map_err(|e| PackagerError::io(source, e))?;
        names.push(name);
    }

    writer
        .finish()
        .map_err(|e| PackagerError::zip(output_path, e))?;
    debug!("create_archive: wrote {} members to {output_path}", names.len());
    Ok(names)
}

/// Member name for `path`: relative to `root`, joined with forward slashes.
///
/// # Errors
///
/// Returns [`PackagerError::OutsideRoot`] if `path` is not under `root`.
pub fn member_name(root: &Utf8Path, path: &Utf8Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| PackagerError::OutsideRoot {
            path: path.to_owned(),
            root: root.to_owned(),
        })?;
    let parts: Vec<&str> = relative.components().map(|c| c.as_str()).collect();
    Ok(parts.join("/"))
}

fn member_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(DEFLATE_LEVEL))
        .last_modified_time(DateTime::default())
        .unix_permissions(MEMBER_PERMISSIONS)
}

/// Read the member names of an existing archive, in stored order.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] if the archive cannot be opened and
/// [`PackagerError::Zip`] if it is not a readable zip file.
pub fn list_members(archive_path: &Utf8Path) -> Result<Vec<String>> {
    let file = fs::File::open(archive_path).map_err(|e| PackagerError::io(archive_path, e))?;
    let archive =
        zip::ZipArchive::new(file).map_err(|e| PackagerError::zip(archive_path, e))?;
    Ok((0..archive.len())
        .filter_map(|index| archive.name_for_index(index))
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
