//! CLI argument definitions for the PCM packager.
//!
//! The binary has a single command. `--version` names the package version
//! being built, so clap's automatic version flag is not enabled.

use crate::artefact::layout::PACKAGES_JSON;
use crate::artefact::packaging::PackageParams;
use crate::artefact::version::{DEFAULT_VERSION, PackageVersion, ReleaseTag};
use crate::config::PackagerConfig;
use crate::error::{PackagerError, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use std::fs;

/// Package the PULSAR KiCad library for the KiCad Plugin and Content Manager.
#[derive(Parser, Debug, Clone)]
#[command(name = "pulsar-pcm-package")]
#[command(about = "Package the PULSAR KiCad library for the KiCad Plugin and Content Manager")]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package version 1.2.0 for tag v1.2.0:\n",
    "    $ pulsar-pcm-package --version 1.2.0\n\n",
    "  Package a release candidate under a custom tag:\n",
    "    $ pulsar-pcm-package --version 2.0.0-rc.1 --tag rc-2026-10\n\n",
    "Upload the resulting zip as a release asset for the tag afterwards.",
))]
pub struct Cli {
    /// Package version string (e.g. "1.0.0").
    #[arg(long, value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Release tag the archive is published under [default: v<VERSION>].
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Library root containing metadata.json, symbols/, footprints/, etc.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Directory the archive is written to [default: the library root].
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Release manifest to update [default: <ROOT>/docs/packages.json].
    #[arg(long, value_name = "FILE")]
    pub packages_json: Option<Utf8PathBuf>,

    /// Configuration file [default: <ROOT>/pcm-package.toml when present].
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    /// Validate the arguments and resolve defaults into packaging parameters.
    ///
    /// The root is canonicalized and the output directory is created if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid version or tag, a root that does not
    /// exist, an output directory that cannot be created, or an unreadable
    /// configuration file.
    pub fn resolve(&self) -> Result<PackageParams> {
        let version = PackageVersion::try_from(self.version.as_str())?;
        let tag = match self.tag.as_deref() {
            Some(tag) => ReleaseTag::try_from(tag)?,
            None => ReleaseTag::for_version(&version),
        };

        let root = self
            .root
            .canonicalize_utf8()
            .map_err(|e| PackagerError::io(&self.root, e))?;
        let output_dir = self.output_dir.clone().unwrap_or_else(|| root.clone());
        fs::create_dir_all(&output_dir).map_err(|e| PackagerError::io(&output_dir, e))?;
        let packages_json = self
            .packages_json
            .clone()
            .unwrap_or_else(|| root.join(PACKAGES_JSON));
        let config = PackagerConfig::load(self.config.as_deref(), &root)?;

        Ok(PackageParams {
            root,
            version,
            tag,
            output_dir,
            packages_json,
            config,
        })
    }
}
