//! The release manifest (`docs/packages.json`).
//!
//! The manifest lists every published version of the package together with
//! its download metadata. Packaging upserts one entry keyed by version
//! string: an existing entry is replaced where it stands, a new version is
//! appended. Only `packages[0].versions` is ever modified.

use super::json_document::{read_document, write_document};
use super::sha256_digest::Sha256Digest;
use crate::error::{DocumentShapeError, PackagerError, Result};
use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One version record in the release manifest.
///
/// Field order matches the order written to `packages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Package version string; unique within the manifest.
    pub version: String,
    /// Release status label, normally `stable`.
    pub status: String,
    /// Minimum KiCad version the package targets.
    pub kicad_version: String,
    /// Where PCM downloads the archive from.
    pub download_url: String,
    /// SHA-256 of the archive.
    pub download_sha256: Sha256Digest,
    /// Compressed archive size in bytes.
    pub download_size: u64,
    /// Total uncompressed size of the packaged files in bytes.
    pub install_size: u64,
}

impl VersionEntry {
    /// The JSON object written into the manifest for this entry.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "version": self.version,
            "status": self.status,
            "kicad_version": self.kicad_version,
            "download_url": self.download_url,
            "download_sha256": self.download_sha256.as_str(),
            "download_size": self.download_size,
            "install_size": self.install_size,
        })
    }
}

/// What an upsert did to the version list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An entry with the same version was overwritten at this index.
    Replaced(usize),
    /// No entry matched; the new entry was appended at this index.
    Appended(usize),
}

impl UpsertOutcome {
    /// Index of the written entry in the version list.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Replaced(index) | Self::Appended(index) => index,
        }
    }
}

/// Upsert `entry` into `packages[0].versions` of a manifest document.
///
/// Entries without a string `version` field never match. A package with no
/// `versions` key gets a new list.
///
/// # Errors
///
/// Returns a [`DocumentShapeError`] if the document has no non-empty
/// `packages` array, if `packages[0]` is not an object, or if its
/// `versions` value is not an array.
pub fn upsert_version(
    document: &mut Value,
    entry: &VersionEntry,
) -> std::result::Result<UpsertOutcome, DocumentShapeError> {
    let packages = document
        .as_object_mut()
        .ok_or(DocumentShapeError::NotAnObject)?
        .get_mut("packages")
        .and_then(Value::as_array_mut)
        .ok_or(DocumentShapeError::MissingPackages)?;
    let package = packages
        .first_mut()
        .ok_or(DocumentShapeError::NoPackages)?
        .as_object_mut()
        .ok_or(DocumentShapeError::PackageNotAnObject)?;
    let versions = package
        .entry("versions")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or(DocumentShapeError::VersionsNotAnArray)?;

    let record = entry.to_value();
    let existing = versions.iter().position(|candidate| {
        candidate.get("version").and_then(Value::as_str) == Some(entry.version.as_str())
    });

    Ok(match existing {
        Some(index) => {
            if let Some(slot) = versions.get_mut(index) {
                *slot = record;
            }
            UpsertOutcome::Replaced(index)
        }
        None => {
            versions.push(record);
            UpsertOutcome::Appended(versions.len() - 1)
        }
    })
}

/// Upsert `entry` into the manifest file at `path` and write it back.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, parsed, or written, or
/// does not have the expected structure.
pub fn update_manifest(path: &Utf8Path, entry: &VersionEntry) -> Result<UpsertOutcome> {
    let mut document = read_document(path)?;
    let outcome = upsert_version(&mut document, entry).map_err(|source| {
        PackagerError::DocumentShape {
            path: path.to_owned(),
            source,
        }
    })?;
    write_document(path, &document)?;
    debug!("update_manifest: {outcome:?} version {} in {path}", entry.version);
    Ok(outcome)
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
