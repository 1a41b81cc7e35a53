/// Package ecosystems recognized by the aggregation pipeline.
///
/// An ecosystem is identified by the namespace prefix of a Package URL
/// (`pkg:pypi/...`, `pkg:npm/...`). Components from any other namespace are
/// carried through untouched but never classified or enriched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    PyPi,
    Npm,
}

impl Ecosystem {
    /// The purl namespace prefix for this ecosystem
    pub fn purl_prefix(self) -> &'static str {
        match self {
            Ecosystem::PyPi => "pkg:pypi/",
            Ecosystem::Npm => "pkg:npm/",
        }
    }

    /// Classifies a purl string by its namespace prefix
    pub fn of(purl: &str) -> Option<Ecosystem> {
        if purl.starts_with(Ecosystem::PyPi.purl_prefix()) {
            Some(Ecosystem::PyPi)
        } else if purl.starts_with(Ecosystem::Npm.purl_prefix()) {
            Some(Ecosystem::Npm)
        } else {
            None
        }
    }
}

/// Extracts the bare package name from a purl of the given ecosystem:
/// the portion after the namespace prefix, cut before any `@version`.
///
/// Returns `None` when the purl does not carry the ecosystem's prefix.
pub fn bare_name(purl: &str, ecosystem: Ecosystem) -> Option<&str> {
    let rest = purl.strip_prefix(ecosystem.purl_prefix())?;
    rest.split('@').next()
}
