use sbom_merge::prelude::*;
use std::path::Path;

/// Mock InstalledManifestReader serving fixed manifest content
pub struct MockManifestReader {
    content: Option<String>,
}

impl MockManifestReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    pub fn with_failure() -> Self {
        Self { content: None }
    }
}

impl InstalledManifestReader for MockManifestReader {
    fn read_installed(&self, path: &Path) -> Result<InstalledPackages> {
        match &self.content {
            Some(content) => Ok(InstalledPackages::parse(content)),
            None => Err(anyhow::anyhow!(
                "Installed-package manifest not found: {}",
                path.display()
            )),
        }
    }
}
