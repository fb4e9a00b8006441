//! Packager configuration loaded from `pcm-package.toml`.
//!
//! Every setting has a default matching the PULSAR library release, so the
//! file is optional. When present it lives at the library root, or wherever
//! `--config` points.

use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use std::fs;

/// Name of the configuration file looked up at the library root.
pub const CONFIG_FILE: &str = "pcm-package.toml";

/// Release settings that are fixed per library rather than per run.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PackagerConfig {
    /// Repository URL that release assets are published under.
    pub repository_url: String,
    /// Archive filename stem; archives are named `<stem>-<version>.zip`.
    pub archive_stem: String,
    /// KiCad version recorded in every version entry.
    pub kicad_version: String,
    /// Status label recorded in every version entry.
    pub status: String,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            repository_url: "https://github.com/Alex-C-EE/PULSAR-KiCad-Lib".to_owned(),
            archive_stem: "PULSAR-KiCad-Lib".to_owned(),
            kicad_version: "8.0".to_owned(),
            status: "stable".to_owned(),
        }
    }
}

impl PackagerConfig {
    /// Parses configuration from TOML source.
    ///
    /// Missing keys keep their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns the TOML parser's error for malformed input or unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use pulsar_pcm::config::PackagerConfig;
    ///
    /// let config = PackagerConfig::from_toml_str("kicad_version = \"9.0\"\n")
    ///     .expect("valid configuration");
    /// assert_eq!(config.kicad_version, "9.0");
    /// assert_eq!(config.status, "stable");
    /// ```
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(source)?;
        let trimmed_len = config.repository_url.trim_end_matches('/').len();
        config.repository_url.truncate(trimmed_len);
        Ok(config)
    }

    /// Loads configuration for a packaging run.
    ///
    /// An explicit `path` must exist. Without one, `<root>/pcm-package.toml`
    /// is read when present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::ConfigNotFound`] for a missing explicit file,
    /// [`PackagerError::Io`] if the file cannot be read, and
    /// [`PackagerError::Config`] if it does not parse.
    pub fn load(path: Option<&Utf8Path>, root: &Utf8Path) -> Result<Self> {
        let candidate: Utf8PathBuf = match path {
            Some(explicit) if !explicit.is_file() => {
                return Err(PackagerError::ConfigNotFound(explicit.to_owned()));
            }
            Some(explicit) => explicit.to_owned(),
            None => root.join(CONFIG_FILE),
        };

        if !candidate.is_file() {
            debug!("config: {candidate} not found, using defaults");
            return Ok(Self::default());
        }

        let source = fs::read_to_string(&candidate).map_err(|e| PackagerError::io(&candidate, e))?;
        let config = Self::from_toml_str(&source).map_err(|source| PackagerError::Config {
            path: candidate.clone(),
            source: Box::new(source),
        })?;
        debug!("config: loaded {candidate}");
        Ok(config)
    }
}
