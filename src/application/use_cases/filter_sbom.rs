use crate::application::dto::{FilterRequest, FilterResponse};
use crate::ports::outbound::{
    InstalledManifestReader, LicenseReportReader, ProgressReporter, SbomReader,
};
use crate::sbom_aggregation::services::ComponentFilter;
use crate::shared::Result;

/// FilterSbomUseCase - Core use case for the filter stage
///
/// Reduces a raw Python SBOM to the library components that are actually
/// installed, attaching license identifiers from a pip-licenses report where
/// the scanner left the field empty. Infrastructure is injected through
/// generic ports.
///
/// # Type Parameters
/// * `MR` - InstalledManifestReader implementation
/// * `LR` - LicenseReportReader implementation
/// * `SR` - SbomReader implementation
/// * `PR` - ProgressReporter implementation
pub struct FilterSbomUseCase<MR, LR, SR, PR> {
    manifest_reader: MR,
    license_reader: LR,
    sbom_reader: SR,
    progress_reporter: PR,
}

impl<MR, LR, SR, PR> FilterSbomUseCase<MR, LR, SR, PR>
where
    MR: InstalledManifestReader,
    LR: LicenseReportReader,
    SR: SbomReader,
    PR: ProgressReporter,
{
    /// Creates a new FilterSbomUseCase with injected dependencies
    pub fn new(manifest_reader: MR, license_reader: LR, sbom_reader: SR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            license_reader,
            sbom_reader,
            progress_reporter,
        }
    }

    /// Executes the filter stage
    ///
    /// # Arguments
    /// * `request` - Input paths for the stage
    ///
    /// # Returns
    /// FilterResponse containing the filtered document and the retained count
    ///
    /// # Errors
    /// Returns an error when the manifest or the raw SBOM cannot be read;
    /// a missing or invalid license report only disables enrichment.
    pub fn execute(&self, request: FilterRequest) -> Result<FilterResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading installed packages from: {}",
            request.manifest_path.display()
        ));

        let installed = self.manifest_reader.read_installed(&request.manifest_path)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} installed package(s)", installed.len()));

        let licenses = self.license_reader.read_pip_licenses(&request.license_report_path);
        if licenses.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No usable license report at {}; components will not be enriched.",
                request.license_report_path.display()
            ));
        } else {
            self.progress_reporter
                .report(&format!("📄 Loaded {} license record(s)", licenses.len()));
        }

        let mut sbom = self.sbom_reader.read_sbom(&request.sbom_path)?;
        let total = sbom.components.len();

        let filter = ComponentFilter::new(&installed, &licenses);
        let components = std::mem::take(&mut sbom.components);
        let document = sbom.with_components(filter.filter(components));
        let retained = document.components.len();

        self.progress_reporter.report_completion(&format!(
            "✅ Retained {} of {} component(s)",
            retained, total
        ));

        Ok(FilterResponse::new(document, retained))
    }
}
