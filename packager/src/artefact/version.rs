//! Package version and release tag newtypes.
//!
//! Both values end up inside the archive filename and the download URL, so
//! they are restricted to characters that are safe in a single path segment.

use super::error::{ArtefactError, Result};
use std::fmt;

/// Version packaged when none is given on the command line.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// A validated package version string such as `1.0.0`.
///
/// # Examples
///
/// ```
/// use pulsar_pcm::artefact::version::PackageVersion;
///
/// let version = PackageVersion::try_from("2.0.0").expect("valid version");
/// assert_eq!(version.as_str(), "2.0.0");
/// assert!(PackageVersion::try_from("2.0 beta").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion(String);

impl PackageVersion {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PackageVersion {
    type Error = ArtefactError;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_from(value.to_owned())
    }
}

impl TryFrom<String> for PackageVersion {
    type Error = ArtefactError;

    fn try_from(value: String) -> Result<Self> {
        match segment_violation(&value) {
            Some(reason) => Err(ArtefactError::InvalidVersion { value, reason }),
            None => Ok(Self(value)),
        }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated release tag such as `v1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// The conventional tag for `version`: the version prefixed with `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pulsar_pcm::artefact::version::{PackageVersion, ReleaseTag};
    ///
    /// let version = PackageVersion::try_from("1.2.3").expect("valid version");
    /// assert_eq!(ReleaseTag::for_version(&version).as_str(), "v1.2.3");
    /// ```
    #[must_use]
    pub fn for_version(version: &PackageVersion) -> Self {
        // A valid version stays a valid segment with a leading `v`.
        Self(format!("v{version}"))
    }

    /// Return the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ReleaseTag {
    type Error = ArtefactError;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_from(value.to_owned())
    }
}

impl TryFrom<String> for ReleaseTag {
    type Error = ArtefactError;

    fn try_from(value: String) -> Result<Self> {
        match segment_violation(&value) {
            Some(reason) => Err(ArtefactError::InvalidReleaseTag { value, reason }),
            None => Ok(Self(value)),
        }
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Describe why `value` cannot be used as a single path or URL segment.
fn segment_violation(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("must not be empty".to_owned());
    }
    if value.contains("..") {
        return Some("must not contain '..'".to_owned());
    }
    value
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '?' | '#'))
        .map(|bad| format!("contains disallowed character {bad:?}"))
}
