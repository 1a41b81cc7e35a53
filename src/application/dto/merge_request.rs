use std::path::PathBuf;

/// MergeRequest - Internal request DTO for the merge stage
///
/// The caller performs fragment discovery; the use case itself only sees
/// explicit path lists and stays testable with synthetic inputs.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Previously filtered Python SBOM (missing file contributes nothing)
    pub filtered_sbom_path: PathBuf,
    /// license-checker reports, in discovery order
    pub license_report_paths: Vec<PathBuf>,
    /// JavaScript SBOM fragments, in discovery order
    pub fragment_paths: Vec<PathBuf>,
}

impl MergeRequest {
    pub fn new(
        filtered_sbom_path: PathBuf,
        license_report_paths: Vec<PathBuf>,
        fragment_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            filtered_sbom_path,
            license_report_paths,
            fragment_paths,
        }
    }
}
