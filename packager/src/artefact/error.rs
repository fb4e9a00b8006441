//! Error types for release identifiers and digests.
//!
//! Each variant names the rejected input and the constraint it broke.

use thiserror::Error;

/// Errors arising from invalid artefact-related values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtefactError {
    /// A package version string is empty or unsafe to embed in a filename.
    #[error("invalid package version \"{value}\": {reason}")]
    InvalidVersion {
        /// The rejected version string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A release tag is empty or unsafe to embed in a download URL.
    #[error("invalid release tag \"{value}\": {reason}")]
    InvalidReleaseTag {
        /// The rejected tag string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A SHA-256 digest is not a valid 64-character hex string.
    #[error("invalid SHA-256 digest: {reason}")]
    InvalidSha256Digest {
        /// Description of the validation failure.
        reason: String,
    },
}

/// Result type alias using [`ArtefactError`].
pub type Result<T> = std::result::Result<T, ArtefactError>;
