//! Archive filename and download URL policy.
//!
//! Archives are named `<stem>-<version>.zip` and published as release
//! assets, so the download URL is derived from the repository URL, the
//! release tag, and the archive filename.

use super::version::{PackageVersion, ReleaseTag};
use std::fmt;

/// The filename of a package archive.
///
/// # Examples
///
/// ```
/// use pulsar_pcm::artefact::naming::ArchiveName;
/// use pulsar_pcm::artefact::version::PackageVersion;
///
/// let version = PackageVersion::try_from("2.0.0").expect("valid version");
/// let name = ArchiveName::new("PULSAR-KiCad-Lib", &version);
/// assert_eq!(name.filename(), "PULSAR-KiCad-Lib-2.0.0.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    stem: String,
    version: PackageVersion,
}

impl ArchiveName {
    /// Create the archive name for `version` using `stem`.
    #[must_use]
    pub fn new(stem: &str, version: &PackageVersion) -> Self {
        Self {
            stem: stem.to_owned(),
            version: version.clone(),
        }
    }

    /// The archive filename, including the `.zip` extension.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}-{}.zip", self.stem, self.version)
    }

    /// The release-asset URL for this archive.
    ///
    /// `repository_url` must not end with a slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use pulsar_pcm::artefact::naming::ArchiveName;
    /// use pulsar_pcm::artefact::version::{PackageVersion, ReleaseTag};
    ///
    /// let version = PackageVersion::try_from("1.0.0").expect("valid version");
    /// let tag = ReleaseTag::for_version(&version);
    /// let url = ArchiveName::new("Lib", &version).download_url("https://example.com/o/r", &tag);
    /// assert_eq!(url, "https://example.com/o/r/releases/download/v1.0.0/Lib-1.0.0.zip");
    /// ```
    #[must_use]
    pub fn download_url(&self, repository_url: &str, tag: &ReleaseTag) -> String {
        format!("{repository_url}/releases/download/{tag}/{}", self.filename())
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename())
    }
}
