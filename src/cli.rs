use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aggregate per-ecosystem SBOM fragments into one CycloneDX document
#[derive(Parser, Debug)]
#[command(name = "sbom-merge")]
#[command(version)]
#[command(about = "Aggregate per-ecosystem SBOM fragments into one license-enriched CycloneDX document", long_about = None)]
pub struct Args {
    /// Path to a sbom-merge.toml configuration file
    /// (auto-discovered in the working directory when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter a raw Python SBOM down to installed packages and enrich licenses
    Filter(FilterArgs),
    /// Merge the filtered Python SBOM with JavaScript fragments and deduplicate
    Merge(MergeArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Freeze-style manifest of installed packages (name==version lines)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// pip-licenses JSON report used for license enrichment
    #[arg(long)]
    pub licenses: Option<PathBuf>,

    /// Raw CycloneDX SBOM to filter
    #[arg(long)]
    pub sbom: Option<PathBuf>,

    /// Output path for the filtered SBOM
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Default)]
pub struct MergeArgs {
    /// Previously filtered Python SBOM
    #[arg(long)]
    pub python_sbom: Option<PathBuf>,

    /// Directory scanned for license-checker reports (js-licenses-*.json)
    #[arg(long)]
    pub js_license_dir: Option<PathBuf>,

    /// Directory scanned for JavaScript SBOM fragments (js-sbom-*.json)
    #[arg(long)]
    pub js_sbom_dir: Option<PathBuf>,

    /// Output path for the combined SBOM
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
