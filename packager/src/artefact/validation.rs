//! Structural checks on a finished package archive.
//!
//! Problems found here are warnings: the archive is already on disk by the
//! time validation runs, so the caller reports them and carries on.

use super::archive::list_members;
use super::layout::{METADATA_FILE, REQUIRED_PREFIXES};
use crate::error::Result;
use camino::Utf8Path;
use log::warn;
use std::fmt;

/// A structural problem with a package archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A required member file is absent.
    MissingFile(&'static str),
    /// No member name starts with a required directory prefix.
    MissingDirectory(&'static str),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(name) => write!(f, "Missing required file: {name}"),
            Self::MissingDirectory(prefix) => write!(f, "Missing required directory: {prefix}"),
        }
    }
}

/// Outcome of validating an archive's member list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Number of members in the archive.
    pub member_count: usize,
    /// Every problem found, in check order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Returns `true` when no warnings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check a list of member names against the package layout.
///
/// # Examples
///
/// ```
/// use pulsar_pcm::artefact::validation::{ValidationWarning, validate_members};
///
/// let report = validate_members(&["metadata.json", "symbols/x.kicad_sym"]);
/// assert_eq!(report.member_count, 2);
/// assert_eq!(
///     report.warnings,
///     [ValidationWarning::MissingDirectory("footprints/")]
/// );
/// ```
#[must_use]
pub fn validate_members<S: AsRef<str>>(names: &[S]) -> ValidationReport {
    let mut warnings = Vec::new();
    if !names.iter().any(|name| name.as_ref() == METADATA_FILE) {
        warnings.push(ValidationWarning::MissingFile(METADATA_FILE));
    }
    for prefix in REQUIRED_PREFIXES {
        if !names.iter().any(|name| name.as_ref().starts_with(prefix)) {
            warnings.push(ValidationWarning::MissingDirectory(prefix));
        }
    }
    ValidationReport {
        member_count: names.len(),
        warnings,
    }
}

/// Read the archive at `archive_path` and validate its member list.
///
/// # Errors
///
/// Returns an error only if the archive itself cannot be read; structural
/// problems are reported in the returned [`ValidationReport`].
pub fn validate_archive(archive_path: &Utf8Path) -> Result<ValidationReport> {
    let names = list_members(archive_path)?;
    let report = validate_members(&names);
    for warning in &report.warnings {
        warn!("{archive_path}: {warning}");
    }
    Ok(report)
}
