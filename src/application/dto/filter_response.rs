use crate::sbom_aggregation::domain::SbomDocument;

/// FilterResponse - Internal response DTO from the filter stage
#[derive(Debug, Clone)]
pub struct FilterResponse {
    /// The input document with its component list filtered and enriched;
    /// the header the scanner wrote is preserved
    pub document: SbomDocument,
    /// Number of components that survived the filter
    pub retained: usize,
}

impl FilterResponse {
    pub fn new(document: SbomDocument, retained: usize) -> Self {
        Self { document, retained }
    }
}
