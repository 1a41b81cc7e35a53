use crate::sbom_aggregation::domain::InstalledPackages;
use crate::shared::Result;
use std::path::Path;

/// InstalledManifestReader port for loading the installed-package manifest
///
/// The manifest is a primary input of the filter stage: an unreadable file
/// aborts the stage, while malformed individual lines are skipped by the
/// parser without signaling failure.
pub trait InstalledManifestReader {
    /// Reads and parses the freeze-style manifest at `path`
    ///
    /// # Errors
    /// Returns an error when the file does not exist or cannot be read.
    fn read_installed(&self, path: &Path) -> Result<InstalledPackages>;
}
