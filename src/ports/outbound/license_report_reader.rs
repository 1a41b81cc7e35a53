use crate::sbom_aggregation::domain::LicenseMap;
use std::path::{Path, PathBuf};

/// LicenseReportReader port for loading license lookup tables
///
/// License reports are auxiliary inputs: enrichment is best-effort, so a
/// missing or unparsable report degrades to an empty map instead of failing
/// the stage. The two methods reflect the two report formats with their
/// divergent key conventions.
pub trait LicenseReportReader {
    /// Loads a pip-licenses report (flat-record list form).
    /// Missing or invalid files yield an empty map.
    fn read_pip_licenses(&self, path: &Path) -> LicenseMap;

    /// Loads and merges license-checker reports (mapping form) in the given
    /// order; later files overwrite earlier entries. Unreadable or invalid
    /// files are skipped.
    fn read_license_checker_reports(&self, paths: &[PathBuf]) -> LicenseMap;
}
