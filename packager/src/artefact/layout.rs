//! Fixed layout of a PCM library package.
//!
//! The archive always draws from the same five top-level entries under the
//! library root. The release manifest lives under `docs/`.

use camino::{Utf8Path, Utf8PathBuf};

/// The in-archive metadata document, stored at the archive root.
pub const METADATA_FILE: &str = "metadata.json";

/// Top-level entries packaged into the archive, in archive order.
pub const ARCHIVE_MEMBERS: [&str; 5] = [
    METADATA_FILE,
    "resources",
    "symbols",
    "footprints",
    "3dmodels",
];

/// Member name prefixes a usable package must contain at least once.
pub const REQUIRED_PREFIXES: [&str; 2] = ["symbols/", "footprints/"];

/// Location of the release manifest relative to the library root.
pub const PACKAGES_JSON: &str = "docs/packages.json";

/// Absolute (or root-relative) paths of every top-level archive input.
#[must_use]
pub fn member_paths(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    ARCHIVE_MEMBERS
        .iter()
        .map(|member| root.join(member))
        .collect()
}
