//! Console output for the packager CLI.
//!
//! Progress and summary lines are for people, not scripts; nothing here is a
//! stable format.

use crate::artefact::manifest::UpsertOutcome;
use crate::artefact::packaging::{PackageOutput, PackageParams};
use std::io::{self, Write};

/// Format a byte count with comma thousands separators.
///
/// # Examples
///
/// ```
/// use pulsar_pcm::output::group_thousands;
///
/// assert_eq!(group_thousands(1_234_567), "1,234,567");
/// assert_eq!(group_thousands(999), "999");
/// ```
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Write the banner printed before packaging starts.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_header(out: &mut dyn Write, params: &PackageParams) -> io::Result<()> {
    writeln!(out, "Packaging PULSAR KiCad Library v{}...", params.version)?;
    writeln!(out, "  Repository root: {}", params.root)
}

/// Write the archive summary, manifest update, and validation results.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary(
    out: &mut dyn Write,
    params: &PackageParams,
    output: &PackageOutput,
) -> io::Result<()> {
    writeln!(out, "Updated {}", output.metadata_path)?;
    writeln!(out)?;
    writeln!(out, "  Output:        {}", output.archive_path)?;
    writeln!(out, "  SHA256:        {}", output.sha256())?;
    writeln!(
        out,
        "  Download size: {} bytes",
        group_thousands(output.entry.download_size)
    )?;
    writeln!(
        out,
        "  Install size:  {} bytes",
        group_thousands(output.entry.install_size)
    )?;
    let action = match output.manifest_update {
        UpsertOutcome::Replaced(_) => "replaced",
        UpsertOutcome::Appended(_) => "added",
    };
    writeln!(
        out,
        "Updated {} ({action} version {})",
        output.packages_json, output.entry.version
    )?;

    writeln!(out)?;
    writeln!(out, "Validating ZIP structure...")?;
    for warning in &output.report.warnings {
        writeln!(out, "  WARNING: {warning}")?;
    }
    writeln!(
        out,
        "  Archive contains {} files",
        output.report.member_count
    )?;
    if output.report.is_clean() {
        writeln!(out, "  Structure looks good!")?;
    } else {
        writeln!(out, "  WARNING: Archive may have issues")?;
    }

    let archive_name = output
        .archive_path
        .file_name()
        .unwrap_or(output.archive_path.as_str());
    writeln!(out)?;
    writeln!(
        out,
        "Done! Upload {archive_name} as a GitHub Release asset for tag {}",
        params.tag
    )
}
