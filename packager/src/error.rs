//! Error types for the PCM packager.
//!
//! Every fatal failure carries the path it concerns so the one-line
//! diagnostic printed by the binary is enough to find the culprit.

use crate::artefact::error::ArtefactError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// A JSON document does not have the shape the packager edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentShapeError {
    /// The top-level value is not a JSON object.
    #[error("top-level value is not an object")]
    NotAnObject,

    /// The manifest has no `packages` array.
    #[error("missing \"packages\" array")]
    MissingPackages,

    /// The manifest's `packages` array is empty.
    #[error("\"packages\" array is empty")]
    NoPackages,

    /// The first package record is not a JSON object.
    #[error("\"packages[0]\" is not an object")]
    PackageNotAnObject,

    /// An existing `versions` value is not an array.
    #[error("\"versions\" is not an array")]
    VersionsNotAnArray,
}

/// Fatal errors that abort a packaging run.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// Reading, writing, or walking a path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or serialized.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The document path.
        path: Utf8PathBuf,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON document parsed but has the wrong structure.
    #[error("unexpected structure in {path}: {source}")]
    DocumentShape {
        /// The document path.
        path: Utf8PathBuf,
        /// Which structural expectation failed.
        #[source]
        source: DocumentShapeError,
    },

    /// Writing or reading the zip archive failed.
    #[error("archive error on {path}: {source}")]
    Zip {
        /// The archive path.
        path: Utf8PathBuf,
        /// The underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// The configuration file path.
        path: Utf8PathBuf,
        /// The underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(Utf8PathBuf),

    /// A file selected for the archive lies outside the packaging root.
    #[error("{path} is not inside the packaging root {root}")]
    OutsideRoot {
        /// The offending file.
        path: Utf8PathBuf,
        /// The packaging root.
        root: Utf8PathBuf,
    },

    /// The output directory lies inside a directory that gets packaged, so
    /// the archive would be packed into itself on the next run.
    #[error("output directory {output_dir} is inside packaged directory {member}")]
    OutputInsidePackage {
        /// The requested output directory.
        output_dir: Utf8PathBuf,
        /// The packaged directory containing it.
        member: Utf8PathBuf,
    },

    /// A version, tag, or digest failed validation.
    #[error(transparent)]
    Artefact(#[from] ArtefactError),

    /// Console output could not be written.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PackagerError {
    /// Wrap an I/O error with the path it concerns.
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a zip error with the archive path it concerns.
    pub(crate) fn zip(path: impl Into<Utf8PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;
