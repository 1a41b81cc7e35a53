use crate::application::dto::{MergeRequest, MergeResponse};
use crate::ports::outbound::{LicenseReportReader, ProgressReporter, SbomReader};
use crate::sbom_aggregation::domain::{CombinedBom, Component, LicenseMap};
use crate::sbom_aggregation::services::{Deduplicator, NpmLicenseEnricher, SbomStatistics};
use crate::shared::Result;

/// MergeSbomsUseCase - Core use case for the merge stage
///
/// Concatenates the filtered Python components with every JavaScript
/// fragment's components (in that order), enriches npm components from
/// license-checker reports, deduplicates by purl, and wraps the result in
/// a fresh CycloneDX header together with summary statistics.
///
/// # Type Parameters
/// * `LR` - LicenseReportReader implementation
/// * `SR` - SbomReader implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeSbomsUseCase<LR, SR, PR> {
    license_reader: LR,
    sbom_reader: SR,
    progress_reporter: PR,
}

impl<LR, SR, PR> MergeSbomsUseCase<LR, SR, PR>
where
    LR: LicenseReportReader,
    SR: SbomReader,
    PR: ProgressReporter,
{
    /// Creates a new MergeSbomsUseCase with injected dependencies
    pub fn new(license_reader: LR, sbom_reader: SR, progress_reporter: PR) -> Self {
        Self {
            license_reader,
            sbom_reader,
            progress_reporter,
        }
    }

    /// Executes the merge stage
    ///
    /// # Arguments
    /// * `request` - Input paths for the stage; fragment lists are supplied
    ///   by the caller in discovery order
    ///
    /// # Returns
    /// MergeResponse containing the combined document and its statistics
    ///
    /// # Errors
    /// Returns an error when a fragment exists but cannot be parsed. A
    /// missing filtered SBOM and missing/invalid license reports degrade
    /// to empty inputs.
    pub fn execute(&self, request: MergeRequest) -> Result<MergeResponse> {
        let js_licenses = self
            .license_reader
            .read_license_checker_reports(&request.license_report_paths);
        self.progress_reporter.report(&format!(
            "📄 Loaded {} JavaScript license record(s) from {} report(s)",
            js_licenses.len(),
            request.license_report_paths.len()
        ));

        let python_components = self.load_python_components(&request)?;
        let js_components = self.load_js_components(&request, &js_licenses)?;

        let mut all = python_components;
        all.extend(js_components);
        let before = all.len();

        let unique = Deduplicator::dedupe(all);
        let dropped = before - unique.len();
        if dropped > 0 {
            self.progress_reporter
                .report(&format!("🔁 Dropped {} duplicate component(s)", dropped));
        }

        let statistics = SbomStatistics::compute(&unique);
        self.progress_reporter.report_completion(&format!(
            "✅ Merge complete: {} component(s)",
            statistics.total
        ));

        Ok(MergeResponse::new(CombinedBom::new(unique), statistics))
    }

    /// Loads the previously filtered Python components.
    /// A missing file contributes zero components.
    fn load_python_components(&self, request: &MergeRequest) -> Result<Vec<Component>> {
        match self
            .sbom_reader
            .read_sbom_if_exists(&request.filtered_sbom_path)?
        {
            Some(doc) => {
                self.progress_reporter.report(&format!(
                    "🐍 Loaded {} Python component(s)",
                    doc.components.len()
                ));
                Ok(doc.components)
            }
            None => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Filtered Python SBOM not found at {}; merging without Python components.",
                    request.filtered_sbom_path.display()
                ));
                Ok(Vec::new())
            }
        }
    }

    /// Loads every JavaScript fragment's components verbatim and enriches
    /// missing license fields from the license-checker map.
    fn load_js_components(
        &self,
        request: &MergeRequest,
        js_licenses: &LicenseMap,
    ) -> Result<Vec<Component>> {
        let mut components = Vec::new();
        for path in &request.fragment_paths {
            let doc = self.sbom_reader.read_sbom(path)?;
            components.extend(doc.components);
        }

        let enricher = NpmLicenseEnricher::new(js_licenses);
        let attached = enricher.enrich_all(&mut components);

        self.progress_reporter.report(&format!(
            "🟨 Loaded {} JavaScript component(s) from {} fragment(s), enriched {}",
            components.len(),
            request.fragment_paths.len(),
            attached
        ));

        Ok(components)
    }
}
