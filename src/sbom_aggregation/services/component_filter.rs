use crate::sbom_aggregation::domain::{
    purl, Component, Ecosystem, InstalledPackages, LicenseMap, PackageKey,
};

/// ComponentFilter - Reduces a raw Python SBOM to its installed libraries
///
/// A component survives iff it is a library, its purl carries the
/// `pkg:pypi/` prefix, and its normalized bare name appears in the
/// installed set. Survivors lacking license data get a single identifier
/// entry when the license map knows one; existing license data is never
/// overwritten. Input order is preserved.
pub struct ComponentFilter<'a> {
    installed: &'a InstalledPackages,
    licenses: &'a LicenseMap,
}

impl<'a> ComponentFilter<'a> {
    pub fn new(installed: &'a InstalledPackages, licenses: &'a LicenseMap) -> Self {
        Self {
            installed,
            licenses,
        }
    }

    /// Filters components and enriches missing license fields
    pub fn filter(&self, components: Vec<Component>) -> Vec<Component> {
        components
            .into_iter()
            .filter_map(|comp| self.retain(comp))
            .collect()
    }

    fn retain(&self, mut comp: Component) -> Option<Component> {
        if !comp.is_library() {
            return None;
        }

        let name = purl::bare_name(comp.purl_str(), Ecosystem::PyPi)?.to_string();
        let key = PackageKey::from_pypi_name(&name);
        if !self.installed.contains(&key) {
            return None;
        }

        if !comp.has_license() {
            if let Some(id) = self.licenses.license_for(&key) {
                comp.attach_license(id);
            }
        }

        Some(comp)
    }
}
