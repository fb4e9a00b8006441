//! PULSAR KiCad library packager.
//!
//! Builds the zip archive that the KiCad Plugin and Content Manager (PCM)
//! installs, and keeps the release manifest (`docs/packages.json`) in step
//! with it. The `pulsar-pcm-package` binary is a thin wrapper around this
//! crate.
//!
//! # Modules
//!
//! - [`artefact`] - Archive creation, hashing, and manifest maintenance
//! - [`cli`] - Command-line argument definitions and resolution
//! - [`config`] - Optional `pcm-package.toml` release settings
//! - [`error`] - Fatal error types
//! - [`output`] - Console progress and summary formatting

pub mod artefact;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
