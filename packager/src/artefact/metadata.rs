//! The in-archive `metadata.json` document.
//!
//! A shipped archive only ever describes the one version it contains, so
//! the document's `versions` list is replaced outright on every run.

use super::json_document::{read_document, write_document};
use crate::error::{DocumentShapeError, PackagerError, Result};
use camino::Utf8Path;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// The single version record carried inside the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataVersion {
    /// Package version string.
    pub version: String,
    /// Release status label, normally `stable`.
    pub status: String,
    /// Minimum KiCad version the package targets.
    pub kicad_version: String,
}

/// Replace `document["versions"]` with a list holding only `record`.
///
/// All other keys are left untouched.
///
/// # Errors
///
/// Returns [`DocumentShapeError::NotAnObject`] if `document` is not a JSON
/// object.
pub fn replace_versions(
    document: &mut Value,
    record: &MetadataVersion,
) -> std::result::Result<(), DocumentShapeError> {
    let object = document
        .as_object_mut()
        .ok_or(DocumentShapeError::NotAnObject)?;
    let entry = serde_json::json!({
        "version": record.version,
        "status": record.status,
        "kicad_version": record.kicad_version,
    });
    object.insert("versions".to_owned(), Value::Array(vec![entry]));
    Ok(())
}

/// Rewrite the metadata document at `path` so it claims only `record`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not a JSON object,
/// or cannot be written back.
pub fn update_metadata(path: &Utf8Path, record: &MetadataVersion) -> Result<()> {
    let mut document = read_document(path)?;
    replace_versions(&mut document, record).map_err(|source| PackagerError::DocumentShape {
        path: path.to_owned(),
        source,
    })?;
    write_document(path, &document)?;
    debug!("update_metadata: {path} now claims version {}", record.version);
    Ok(())
}
