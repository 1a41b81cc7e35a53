use super::PackageKey;
use std::collections::HashSet;

/// The set of packages present in a freeze-style manifest.
///
/// The manifest lists one `name==version` pin per line. Lines without the
/// `==` separator (comments, editable installs, blank lines) carry no pin
/// and are skipped without incident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    names: HashSet<PackageKey>,
}

impl InstalledPackages {
    /// Parses manifest content into the set of normalized package keys
    pub fn parse(manifest: &str) -> Self {
        let mut names = HashSet::new();
        for line in manifest.lines() {
            if let Some((name, _version)) = line.split_once("==") {
                names.insert(PackageKey::from_pypi_name(name));
            }
        }
        Self { names }
    }

    pub fn contains(&self, key: &PackageKey) -> bool {
        self.names.contains(key)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
