use crate::sbom_aggregation::domain::CombinedBom;
use crate::sbom_aggregation::services::SbomStatistics;

/// MergeResponse - Internal response DTO from the merge stage
#[derive(Debug, Clone)]
pub struct MergeResponse {
    /// The combined, deduplicated document with a fresh CycloneDX header
    pub bom: CombinedBom,
    /// Summary counters over the combined component list
    pub statistics: SbomStatistics,
}

impl MergeResponse {
    pub fn new(bom: CombinedBom, statistics: SbomStatistics) -> Self {
        Self { bom, statistics }
    }
}
