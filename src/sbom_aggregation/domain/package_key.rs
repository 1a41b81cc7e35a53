/// NewType wrapper for a normalized package lookup key
///
/// Manifest formats spell the same package differently (case, separators),
/// so all cross-referencing between manifests, license reports, and purls
/// goes through a `PackageKey` built with the ecosystem's own convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageKey(String);

impl PackageKey {
    /// Builds a key from a Python package name.
    ///
    /// PyPI treats hyphens and underscores as interchangeable and names as
    /// case-insensitive, so the key is folded to lowercase with underscores.
    pub fn from_pypi_name(name: &str) -> Self {
        Self(name.to_lowercase().replace('-', "_"))
    }

    /// Builds a key from an npm package name or a `name@version` report key.
    ///
    /// npm names are case-sensitive and keep their separators; only a
    /// `@version` suffix is cut, at the first `@`. A scoped name that still
    /// carries its leading `@` therefore collapses to an empty key.
    pub fn from_npm_name(name: &str) -> Self {
        match name.split_once('@') {
            Some((base, _)) => Self(base.to_string()),
            None => Self(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
