pub mod component;
pub mod installed;
pub mod license_map;
pub mod package_key;
pub mod purl;
pub mod sbom;

pub use component::{Component, LicenseEntry, LicenseRef};
pub use installed::InstalledPackages;
pub use license_map::{LicenseMap, LicenseRecord};
pub use package_key::PackageKey;
pub use purl::Ecosystem;
pub use sbom::{CombinedBom, SbomDocument};
