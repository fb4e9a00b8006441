//! Archive building, hashing, and release manifest maintenance.
//!
//! # Sub-modules
//!
//! - [`archive`] - Reproducible zip creation and member listing.
//! - [`error`] - Validation errors for versions, tags, and digests.
//! - [`json_document`] - Order-preserving JSON document I/O.
//! - [`layout`] - Fixed package layout (members, required prefixes).
//! - [`manifest`] - Release manifest version upserts.
//! - [`metadata`] - In-archive `metadata.json` rewriting.
//! - [`naming`] - Archive filename and download URL policy.
//! - [`packaging`] - The end-to-end packaging pipeline.
//! - [`sha256_digest`] - SHA-256 digest newtype and file hashing.
//! - [`size`] - Install size accounting.
//! - [`validation`] - Structural archive checks.
//! - [`version`] - Package version and release tag newtypes.
//! - [`walk`] - Deterministic file discovery.

pub mod archive;
pub mod error;
pub mod json_document;
pub mod layout;
pub mod manifest;
pub mod metadata;
pub mod naming;
pub mod packaging;
pub mod sha256_digest;
pub mod size;
pub mod validation;
pub mod version;
pub mod walk;
