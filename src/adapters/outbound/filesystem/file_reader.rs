use crate::ports::outbound::{InstalledManifestReader, LicenseReportReader, SbomReader};
use crate::sbom_aggregation::domain::{InstalledPackages, LicenseMap, SbomDocument};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading pipeline inputs from the file system
///
/// This adapter implements the InstalledManifestReader, LicenseReportReader,
/// and SbomReader ports, and provides fragment discovery for the merge stage.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Lists the files in `dir` whose name starts with `prefix` and ends
    /// with `suffix`, sorted lexicographically so discovery order is
    /// deterministic. A missing directory yields no matches.
    pub fn discover(&self, dir: &Path, prefix: &str, suffix: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut matches: Vec<PathBuf> = entries
            .flatten()
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with(prefix) && name.ends_with(suffix))
            })
            .map(|entry| entry.path())
            .collect();
        matches.sort();
        matches
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InstalledManifestReader for FileSystemReader {
    fn read_installed(&self, path: &Path) -> Result<InstalledPackages> {
        if !path.exists() {
            return Err(SbomError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Manifest \"{}\" does not exist.\n   \
                     Generate it first (e.g. pip freeze > {}) or point --manifest at the correct file.",
                    path.display(),
                    path.display()
                ),
            }
            .into());
        }

        let content = self
            .safe_read_file(path, "installed-package manifest")
            .map_err(|e| SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(InstalledPackages::parse(&content))
    }
}

impl LicenseReportReader for FileSystemReader {
    fn read_pip_licenses(&self, path: &Path) -> LicenseMap {
        let Ok(content) = self.safe_read_file(path, "license report") else {
            return LicenseMap::new();
        };

        LicenseMap::from_pip_licenses_json(&content).unwrap_or_default()
    }

    fn read_license_checker_reports(&self, paths: &[PathBuf]) -> LicenseMap {
        let mut map = LicenseMap::new();
        for path in paths {
            let Ok(content) = self.safe_read_file(path, "license report") else {
                continue;
            };
            // invalid reports are skipped; entries merged so far are kept
            let _ = map.merge_license_checker_json(&content);
        }
        map
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        if !path.exists() {
            return Err(SbomError::SbomNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "SBOM \"{}\" does not exist.\n   \
                     Run the scanner that produces it, or point the stage at the correct file.",
                    path.display()
                ),
            }
            .into());
        }

        let content =
            self.safe_read_file(path, "SBOM")
                .map_err(|e| SbomError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_sbom_if_exists(&self, path: &Path) -> Result<Option<SbomDocument>> {
        if !path.exists() {
            return Ok(None);
        }
        self.read_sbom(path).map(Some)
    }
}
