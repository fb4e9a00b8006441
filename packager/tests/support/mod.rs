//! Test support for packager behavioural tests.
//!
//! Builds throwaway library trees laid out the way the packager expects.

use camino::{Utf8Path, Utf8PathBuf};
use pulsar_pcm::artefact::packaging::PackageParams;
use pulsar_pcm::artefact::version::{PackageVersion, ReleaseTag};
use pulsar_pcm::config::PackagerConfig;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// The four library files from the canonical end-to-end scenario.
pub const LIBRARY_FILES: [&str; 4] = [
    "metadata.json",
    "resources/icon.png",
    "symbols/x.kicad_sym",
    "footprints/PULSAR.pretty/y.kicad_mod",
];

/// A library root inside a temporary directory.
pub struct LibraryTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl LibraryTree {
    /// Create an empty library root.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
        Self { _dir: dir, root }
    }

    /// Create a library holding the four canonical files.
    pub fn complete() -> Self {
        let tree = Self::empty();
        tree.write(
            "metadata.json",
            &json!({"name": "PULSAR KiCad Library", "versions": []}).to_string(),
        );
        tree.write("resources/icon.png", "icon");
        tree.write("symbols/x.kicad_sym", "(kicad_symbol_lib)");
        tree.write("footprints/PULSAR.pretty/y.kicad_mod", "(footprint y)");
        tree
    }

    /// The library root.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, contents).expect("write");
    }

    /// Write `docs/packages.json` with one package listing `versions`.
    pub fn write_manifest(&self, versions: &[&str]) {
        let entries: Vec<Value> = versions
            .iter()
            .map(|version| json!({"version": version, "status": "stable", "kicad_version": "8.0"}))
            .collect();
        let manifest = json!({
            "$schema": "https://go.kicad.org/pcm/schemas/v1",
            "packages": [{"name": "PULSAR KiCad Library", "versions": entries}],
        });
        self.write("docs/packages.json", &manifest.to_string());
    }

    /// Parse a JSON document under the root.
    pub fn read_json(&self, relative: &str) -> Value {
        let contents = fs::read_to_string(self.root.join(relative)).expect("read");
        serde_json::from_str(&contents).expect("valid JSON")
    }

    /// Packaging parameters for `version` with default settings.
    pub fn params(&self, version: &str) -> PackageParams {
        let version = PackageVersion::try_from(version).expect("valid version");
        PackageParams {
            root: self.root.clone(),
            tag: ReleaseTag::for_version(&version),
            version,
            output_dir: self.root.clone(),
            packages_json: self.root.join("docs/packages.json"),
            config: PackagerConfig::default(),
        }
    }
}
