use sbom_merge::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Mock SbomReader serving in-memory documents keyed by path
#[derive(Default)]
pub struct MockSbomReader {
    documents: HashMap<PathBuf, SbomDocument>,
    broken: HashSet<PathBuf>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, document: serde_json::Value) -> Self {
        let parsed: SbomDocument =
            serde_json::from_value(document).expect("mock SBOM document must be valid");
        self.documents.insert(PathBuf::from(path), parsed);
        self
    }

    /// Registers a path whose document exists but fails to parse
    pub fn with_broken_document(mut self, path: &str) -> Self {
        self.broken.insert(PathBuf::from(path));
        self
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        if self.broken.contains(path) {
            return Err(anyhow::anyhow!(
                "Failed to parse SBOM file: {}",
                path.display()
            ));
        }
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("SBOM file not found: {}", path.display()))
    }

    fn read_sbom_if_exists(&self, path: &Path) -> Result<Option<SbomDocument>> {
        if self.broken.contains(path) {
            return Err(anyhow::anyhow!(
                "Failed to parse SBOM file: {}",
                path.display()
            ));
        }
        Ok(self.documents.get(path).cloned())
    }
}
