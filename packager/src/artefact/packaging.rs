//! End-to-end packaging of a KiCad library for PCM.
//!
//! Orchestrates: stamp the in-archive metadata with the version, measure the
//! install size, write the archive, hash it, upsert the release manifest,
//! then validate the archive's structure.

use super::archive::create_archive;
use super::layout::{METADATA_FILE, member_paths};
use super::manifest::{UpsertOutcome, VersionEntry, update_manifest};
use super::metadata::{MetadataVersion, update_metadata};
use super::naming::ArchiveName;
use super::sha256_digest::{Sha256Digest, compute_sha256};
use super::size::install_size;
use super::validation::{ValidationReport, validate_archive};
use super::version::{PackageVersion, ReleaseTag};
use crate::config::PackagerConfig;
use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs;

/// Input parameters for [`package_library`].
#[derive(Debug, Clone)]
pub struct PackageParams {
    /// Library root holding `metadata.json` and the asset directories.
    pub root: Utf8PathBuf,
    /// Version being packaged.
    pub version: PackageVersion,
    /// Release tag the archive will be published under.
    pub tag: ReleaseTag,
    /// Directory the archive is written to.
    pub output_dir: Utf8PathBuf,
    /// The release manifest to upsert into.
    pub packages_json: Utf8PathBuf,
    /// Per-library release settings.
    pub config: PackagerConfig,
}

/// Output produced by [`package_library`].
#[derive(Debug, Clone)]
pub struct PackageOutput {
    /// Path to the created archive.
    pub archive_path: Utf8PathBuf,
    /// Path to the rewritten in-archive metadata document.
    pub metadata_path: Utf8PathBuf,
    /// Path to the updated release manifest.
    pub packages_json: Utf8PathBuf,
    /// The version entry written to the release manifest.
    pub entry: VersionEntry,
    /// Whether the manifest entry replaced an existing one.
    pub manifest_update: UpsertOutcome,
    /// Structural validation of the written archive.
    pub report: ValidationReport,
}

impl PackageOutput {
    /// SHA-256 of the archive.
    #[must_use]
    pub fn sha256(&self) -> &Sha256Digest {
        &self.entry.download_sha256
    }
}

/// Package the library described by `params`.
///
/// The archive is always written when the run succeeds; structural problems
/// are reported in [`PackageOutput::report`] rather than as errors.
///
/// # Errors
///
/// Returns a [`PackagerError`] for any I/O, JSON, or zip failure, including
/// a missing `metadata.json` or release manifest, and
/// [`PackagerError::OutputInsidePackage`] when the output directory lies
/// under a packaged directory.
pub fn package_library(params: &PackageParams) -> Result<PackageOutput> {
    ensure_output_outside_members(&params.root, &params.output_dir)?;
    let config = &params.config;
    let metadata_path = params.root.join(METADATA_FILE);
    update_metadata(
        &metadata_path,
        &MetadataVersion {
            version: params.version.as_str().to_owned(),
            status: config.status.clone(),
            kicad_version: config.kicad_version.clone(),
        },
    )?;

    let inputs = member_paths(&params.root);
    let install_size = install_size(&inputs)?;
    debug!("package_library: install size {install_size} bytes");

    let name = ArchiveName::new(&config.archive_stem, &params.version);
    let archive_path = params.output_dir.join(name.filename());
    create_archive(&archive_path, &params.root)?;

    let download_size = fs::metadata(&archive_path)
        .map_err(|e| PackagerError::io(&archive_path, e))?
        .len();
    let sha256 = compute_sha256(&archive_path).map_err(|e| PackagerError::io(&archive_path, e))?;
    debug!("package_library: {archive_path} is {download_size} bytes, sha256 {sha256}");

    let entry = VersionEntry {
        version: params.version.as_str().to_owned(),
        status: config.status.clone(),
        kicad_version: config.kicad_version.clone(),
        download_url: name.download_url(&config.repository_url, &params.tag),
        download_sha256: sha256,
        download_size,
        install_size,
    };
    let manifest_update = update_manifest(&params.packages_json, &entry)?;

    let report = validate_archive(&archive_path)?;

    Ok(PackageOutput {
        archive_path,
        metadata_path,
        packages_json: params.packages_json.clone(),
        entry,
        manifest_update,
        report,
    })
}

/// Reject an output directory under any packaged path.
///
/// Both sides are canonicalized so `symbols/../symbols/out` and symlinked
/// roots are caught too.
fn ensure_output_outside_members(root: &Utf8Path, output_dir: &Utf8Path) -> Result<()> {
    let root = root
        .canonicalize_utf8()
        .map_err(|e| PackagerError::io(root, e))?;
    let output = output_dir
        .canonicalize_utf8()
        .map_err(|e| PackagerError::io(output_dir, e))?;
    match member_paths(&root)
        .into_iter()
        .find(|member| output.starts_with(member))
    {
        Some(member) => Err(PackagerError::OutputInsidePackage {
            output_dir: output_dir.to_owned(),
            member,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "packaging_tests.rs"]
mod tests;
