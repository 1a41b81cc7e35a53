use std::path::PathBuf;

/// FilterRequest - Internal request DTO for the filter stage
#[derive(Debug, Clone)]
pub struct FilterRequest {
    /// Freeze-style manifest listing the installed packages
    pub manifest_path: PathBuf,
    /// pip-licenses JSON report (auxiliary; may be absent)
    pub license_report_path: PathBuf,
    /// Raw CycloneDX SBOM to filter
    pub sbom_path: PathBuf,
}

impl FilterRequest {
    pub fn new(manifest_path: PathBuf, license_report_path: PathBuf, sbom_path: PathBuf) -> Self {
        Self {
            manifest_path,
            license_report_path,
            sbom_path,
        }
    }
}
