use sbom_merge::prelude::*;
use std::path::{Path, PathBuf};

/// Mock LicenseReportReader serving fixed license maps
#[derive(Default)]
pub struct MockLicenseReportReader {
    pip: LicenseMap,
    checker: LicenseMap,
}

impl MockLicenseReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pip_license(mut self, name: &str, license: &str) -> Self {
        self.pip.insert(
            PackageKey::from_pypi_name(name),
            LicenseRecord::new(Some(license.to_string()), None, None),
        );
        self
    }

    pub fn with_checker_license(mut self, name: &str, license: &str) -> Self {
        self.checker.insert(
            PackageKey::from_npm_name(name),
            LicenseRecord::new(Some(license.to_string()), None, None),
        );
        self
    }
}

impl LicenseReportReader for MockLicenseReportReader {
    fn read_pip_licenses(&self, _path: &Path) -> LicenseMap {
        self.pip.clone()
    }

    fn read_license_checker_reports(&self, _paths: &[PathBuf]) -> LicenseMap {
        self.checker.clone()
    }
}
