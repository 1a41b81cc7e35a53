use crate::sbom_aggregation::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading CycloneDX documents
pub trait SbomReader {
    /// Reads and parses the SBOM at `path`
    ///
    /// # Errors
    /// Returns an error when the file is missing, unreadable, or not a
    /// valid JSON document.
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument>;

    /// Reads the SBOM at `path`, treating a missing file as `None`.
    /// A file that exists but cannot be parsed is still an error.
    fn read_sbom_if_exists(&self, path: &Path) -> Result<Option<SbomDocument>>;
}
