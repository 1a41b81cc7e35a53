use crate::sbom_aggregation::domain::{purl, Component, Ecosystem, LicenseMap, PackageKey};

/// NpmLicenseEnricher - Attaches license-checker data to npm components
///
/// Components that arrived without license data and whose purl carries the
/// `pkg:npm/` prefix are looked up by bare name, matched verbatim (npm names
/// keep their case and separators). Components from other namespaces, and
/// components that already carry license data, are left untouched.
pub struct NpmLicenseEnricher<'a> {
    licenses: &'a LicenseMap,
}

impl<'a> NpmLicenseEnricher<'a> {
    pub fn new(licenses: &'a LicenseMap) -> Self {
        Self { licenses }
    }

    /// Enriches every eligible component in place; returns how many
    /// components received a license entry
    pub fn enrich_all(&self, components: &mut [Component]) -> usize {
        let mut attached = 0;
        for comp in components.iter_mut() {
            if self.enrich(comp) {
                attached += 1;
            }
        }
        attached
    }

    /// Enriches a single component; returns whether a license was attached
    pub fn enrich(&self, comp: &mut Component) -> bool {
        if comp.has_license() {
            return false;
        }

        let Some(name) = purl::bare_name(comp.purl_str(), Ecosystem::Npm) else {
            return false;
        };
        let key = PackageKey::from_npm_name(name);

        match self.licenses.license_for(&key) {
            Some(id) => {
                let id = id.to_string();
                comp.attach_license(&id);
                true
            }
            None => false,
        }
    }
}
