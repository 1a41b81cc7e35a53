//! Configuration file support for sbom-merge.
//!
//! Provides TOML-based configuration through `sbom-merge.toml` files,
//! including data structures, file loading, and the CLI > config > default
//! path resolution used by both stages.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::{FilterArgs, MergeArgs};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-merge.toml";

/// Well-known default paths for the filter stage
pub const DEFAULT_MANIFEST: &str = "/tmp/python-packages.txt";
pub const DEFAULT_PIP_LICENSES: &str = "/tmp/python-licenses.json";
pub const DEFAULT_RAW_SBOM: &str = "/tmp/python-sbom.json";
pub const DEFAULT_FILTERED_SBOM: &str = "/tmp/python-filtered.json";

/// Well-known default paths for the merge stage
pub const DEFAULT_JS_LICENSE_DIR: &str = "/tmp";
pub const DEFAULT_JS_SBOM_DIR: &str = "/tmp";
pub const DEFAULT_COMBINED_SBOM: &str = "sboms/sbom.json";

/// Filename prefixes used for fragment discovery in the merge stage
pub const JS_LICENSE_REPORT_PREFIX: &str = "js-licenses-";
pub const JS_SBOM_FRAGMENT_PREFIX: &str = "js-sbom-";
pub const FRAGMENT_SUFFIX: &str = ".json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub filter: Option<FilterSection>,
    pub merge: Option<MergeSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// `[filter]` section of the configuration file.
#[derive(Debug, Deserialize, Default)]
pub struct FilterSection {
    pub manifest: Option<PathBuf>,
    pub licenses: Option<PathBuf>,
    pub sbom: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// `[merge]` section of the configuration file.
#[derive(Debug, Deserialize, Default)]
pub struct MergeSection {
    pub python_sbom: Option<PathBuf>,
    pub js_license_dir: Option<PathBuf>,
    pub js_sbom_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Resolved input and output paths for the filter stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    pub manifest: PathBuf,
    pub licenses: PathBuf,
    pub sbom: PathBuf,
    pub output: PathBuf,
}

impl FilterSettings {
    /// Resolves each path as CLI flag > config file > built-in default.
    pub fn resolve(args: &FilterArgs, section: Option<&FilterSection>) -> Self {
        Self {
            manifest: resolve_path(
                args.manifest.as_ref(),
                section.and_then(|s| s.manifest.as_ref()),
                DEFAULT_MANIFEST,
            ),
            licenses: resolve_path(
                args.licenses.as_ref(),
                section.and_then(|s| s.licenses.as_ref()),
                DEFAULT_PIP_LICENSES,
            ),
            sbom: resolve_path(
                args.sbom.as_ref(),
                section.and_then(|s| s.sbom.as_ref()),
                DEFAULT_RAW_SBOM,
            ),
            output: resolve_path(
                args.output.as_ref(),
                section.and_then(|s| s.output.as_ref()),
                DEFAULT_FILTERED_SBOM,
            ),
        }
    }
}

/// Resolved input and output paths for the merge stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    pub python_sbom: PathBuf,
    pub js_license_dir: PathBuf,
    pub js_sbom_dir: PathBuf,
    pub output: PathBuf,
}

impl MergeSettings {
    /// Resolves each path as CLI flag > config file > built-in default.
    pub fn resolve(args: &MergeArgs, section: Option<&MergeSection>) -> Self {
        Self {
            python_sbom: resolve_path(
                args.python_sbom.as_ref(),
                section.and_then(|s| s.python_sbom.as_ref()),
                DEFAULT_FILTERED_SBOM,
            ),
            js_license_dir: resolve_path(
                args.js_license_dir.as_ref(),
                section.and_then(|s| s.js_license_dir.as_ref()),
                DEFAULT_JS_LICENSE_DIR,
            ),
            js_sbom_dir: resolve_path(
                args.js_sbom_dir.as_ref(),
                section.and_then(|s| s.js_sbom_dir.as_ref()),
                DEFAULT_JS_SBOM_DIR,
            ),
            output: resolve_path(
                args.output.as_ref(),
                section.and_then(|s| s.output.as_ref()),
                DEFAULT_COMBINED_SBOM,
            ),
        }
    }
}

fn resolve_path(cli: Option<&PathBuf>, config: Option<&PathBuf>, default: &str) -> PathBuf {
    cli.or(config)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}
