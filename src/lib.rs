//! sbom-merge - SBOM aggregation tool for multi-ecosystem projects
//!
//! This library aggregates per-ecosystem SBOM fragments into a single
//! deduplicated, license-enriched CycloneDX document, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_aggregation`): Pure data model and aggregation services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_merge::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemReader::new();
//! let license_reader = FileSystemReader::new();
//! let sbom_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = FilterSbomUseCase::new(
//!     manifest_reader,
//!     license_reader,
//!     sbom_reader,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = FilterRequest::new(
//!     PathBuf::from("/tmp/python-packages.txt"),
//!     PathBuf::from("/tmp/python-licenses.json"),
//!     PathBuf::from("/tmp/python-sbom.json"),
//! );
//! let response = use_case.execute(request)?;
//! println!("Python: {} packages", response.retained);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_aggregation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{FilterRequest, FilterResponse, MergeRequest, MergeResponse};
    pub use crate::application::use_cases::{FilterSbomUseCase, MergeSbomsUseCase};
    pub use crate::ports::outbound::{
        InstalledManifestReader, LicenseReportReader, OutputPresenter, ProgressReporter,
        SbomReader,
    };
    pub use crate::sbom_aggregation::domain::{
        CombinedBom, Component, Ecosystem, InstalledPackages, LicenseEntry, LicenseMap,
        LicenseRecord, PackageKey, SbomDocument,
    };
    pub use crate::sbom_aggregation::services::{
        ComponentFilter, Deduplicator, NpmLicenseEnricher, SbomStatistics,
    };
    pub use crate::shared::Result;
}
