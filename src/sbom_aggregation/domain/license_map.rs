use super::PackageKey;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Sentinel used by both report formats to mark an unknown license
const UNKNOWN_LICENSE: &str = "UNKNOWN";

/// License descriptor parsed from an external report.
///
/// The report formats use the literal string "UNKNOWN" (or an empty string)
/// as an absence marker; that sentinel is folded into `None` here at the
/// parse boundary so the rest of the pipeline never compares sentinel
/// strings. Author and URL are retained for completeness but are never
/// propagated into the SBOM.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseRecord {
    license: Option<String>,
    author: Option<String>,
    url: Option<String>,
}

impl LicenseRecord {
    pub fn new(license: Option<String>, author: Option<String>, url: Option<String>) -> Self {
        Self {
            license: license.as_deref().and_then(clean_license),
            author,
            url,
        }
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Folds sentinel and empty values into `None`
fn clean_license(raw: &str) -> Option<String> {
    if raw.is_empty() || raw == UNKNOWN_LICENSE {
        None
    } else {
        Some(raw.to_string())
    }
}

/// One record of a pip-licenses JSON report (flat-record list form)
#[derive(Debug, Deserialize)]
struct PipLicensesRecord {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "License", default)]
    license: Option<String>,
    #[serde(rename = "Author", default)]
    author: Option<String>,
    #[serde(rename = "URL", default)]
    url: Option<String>,
}

/// One value of a license-checker JSON report (mapping form)
#[derive(Debug, Deserialize)]
struct LicenseCheckerRecord {
    #[serde(default)]
    licenses: Option<serde_json::Value>,
}

/// Lookup table from normalized package key to license descriptor.
///
/// Duplicate keys overwrite: within one report the last record wins, and
/// across several license-checker reports the last file wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseMap {
    entries: HashMap<PackageKey, LicenseRecord>,
}

impl LicenseMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: PackageKey, record: LicenseRecord) {
        self.entries.insert(key, record);
    }

    /// The license identifier for `key`, when the map knows a usable one
    pub fn license_for(&self, key: &PackageKey) -> Option<&str> {
        self.entries.get(key).and_then(LicenseRecord::license)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a pip-licenses report: a flat list of records with
    /// `Name`/`License`/`Author`/`URL` fields. Keys follow the PyPI
    /// normalization convention.
    ///
    /// # Errors
    /// Returns an error when the content is not valid JSON of the expected
    /// shape; callers treat that as an empty map (enrichment is best-effort).
    pub fn from_pip_licenses_json(content: &str) -> Result<Self> {
        let records: Vec<PipLicensesRecord> = serde_json::from_str(content)?;

        let mut map = Self::new();
        for record in records {
            map.insert(
                PackageKey::from_pypi_name(&record.name),
                LicenseRecord::new(record.license, record.author, record.url),
            );
        }
        Ok(map)
    }

    /// Merges a license-checker report into this map: a mapping from a
    /// possibly version-suffixed `name@version` key to a record with a
    /// `licenses` field. Keys follow the npm convention (version suffix cut,
    /// separators untouched); non-string license values are treated as
    /// unknown.
    ///
    /// # Errors
    /// Returns an error when the content is not valid JSON of the expected
    /// shape; callers skip the report and keep what was merged so far.
    pub fn merge_license_checker_json(&mut self, content: &str) -> Result<()> {
        let records: HashMap<String, LicenseCheckerRecord> = serde_json::from_str(content)?;

        for (key, record) in records {
            let license = record
                .licenses
                .as_ref()
                .and_then(serde_json::Value::as_str)
                .map(String::from);
            self.insert(
                PackageKey::from_npm_name(&key),
                LicenseRecord::new(license, None, None),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_folds_unknown_sentinel() {
        let record = LicenseRecord::new(Some("UNKNOWN".to_string()), None, None);
        assert_eq!(record.license(), None);
    }

    #[test]
    fn test_record_folds_empty_string() {
        let record = LicenseRecord::new(Some(String::new()), None, None);
        assert_eq!(record.license(), None);
    }

    #[test]
    fn test_record_keeps_real_license() {
        let record = LicenseRecord::new(Some("MIT".to_string()), None, None);
        assert_eq!(record.license(), Some("MIT"));
    }

    #[test]
    fn test_from_pip_licenses_json() {
        let content = r#"[
            {"Name": "requests", "License": "Apache-2.0", "Author": "Kenneth Reitz", "URL": "https://requests.readthedocs.io"},
            {"Name": "Typing-Extensions", "License": "PSF-2.0"}
        ]"#;

        let map = LicenseMap::from_pip_licenses_json(content).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.license_for(&PackageKey::from_pypi_name("requests")),
            Some("Apache-2.0")
        );
        // key normalization: hyphen/case spelling differences collapse
        assert_eq!(
            map.license_for(&PackageKey::from_pypi_name("typing_extensions")),
            Some("PSF-2.0")
        );
    }

    #[test]
    fn test_from_pip_licenses_json_keeps_author_and_url() {
        let content = r#"[
            {"Name": "requests", "License": "Apache-2.0", "Author": "Kenneth Reitz", "URL": "https://requests.readthedocs.io"}
        ]"#;

        let map = LicenseMap::from_pip_licenses_json(content).unwrap();
        let record = map
            .entries
            .get(&PackageKey::from_pypi_name("requests"))
            .unwrap();
        assert_eq!(record.author(), Some("Kenneth Reitz"));
        assert_eq!(record.url(), Some("https://requests.readthedocs.io"));
    }

    #[test]
    fn test_from_pip_licenses_json_unknown_is_absent() {
        let content = r#"[{"Name": "mystery", "License": "UNKNOWN"}]"#;

        let map = LicenseMap::from_pip_licenses_json(content).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.license_for(&PackageKey::from_pypi_name("mystery")), None);
    }

    #[test]
    fn test_from_pip_licenses_json_invalid() {
        assert!(LicenseMap::from_pip_licenses_json("not json").is_err());
        assert!(LicenseMap::from_pip_licenses_json("{\"Name\": \"x\"}").is_err());
    }

    #[test]
    fn test_merge_license_checker_json() {
        let mut map = LicenseMap::new();
        map.merge_license_checker_json(
            r#"{
                "lodash@4.17.21": {"licenses": "MIT", "repository": "https://github.com/lodash/lodash"},
                "left-pad": {"licenses": "WTFPL"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            map.license_for(&PackageKey::from_npm_name("lodash")),
            Some("MIT")
        );
        assert_eq!(
            map.license_for(&PackageKey::from_npm_name("left-pad")),
            Some("WTFPL")
        );
    }

    #[test]
    fn test_merge_license_checker_keeps_separators() {
        let mut map = LicenseMap::new();
        map.merge_license_checker_json(r#"{"left-pad@1.3.0": {"licenses": "WTFPL"}}"#)
            .unwrap();

        // npm keys are not rewritten to underscores
        assert_eq!(
            map.license_for(&PackageKey::from_npm_name("left-pad")),
            Some("WTFPL")
        );
        assert_eq!(map.license_for(&PackageKey::from_pypi_name("left-pad")), None);
    }

    #[test]
    fn test_merge_license_checker_non_string_license() {
        let mut map = LicenseMap::new();
        map.merge_license_checker_json(r#"{"odd@1.0.0": {"licenses": ["MIT", "ISC"]}}"#)
            .unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.license_for(&PackageKey::from_npm_name("odd")), None);
    }

    #[test]
    fn test_merge_license_checker_missing_licenses_field() {
        let mut map = LicenseMap::new();
        map.merge_license_checker_json(r#"{"bare@1.0.0": {}}"#).unwrap();

        assert_eq!(map.license_for(&PackageKey::from_npm_name("bare")), None);
    }

    #[test]
    fn test_merge_later_report_overwrites() {
        let mut map = LicenseMap::new();
        map.merge_license_checker_json(r#"{"lodash@4.17.20": {"licenses": "MIT"}}"#)
            .unwrap();
        map.merge_license_checker_json(r#"{"lodash@4.17.21": {"licenses": "UNKNOWN"}}"#)
            .unwrap();

        // the later report wins, even when it knows less
        assert_eq!(map.license_for(&PackageKey::from_npm_name("lodash")), None);
    }

    #[test]
    fn test_merge_license_checker_invalid() {
        let mut map = LicenseMap::new();
        assert!(map.merge_license_checker_json("[]").is_err());
        assert!(map.merge_license_checker_json("{{{").is_err());
    }
}
