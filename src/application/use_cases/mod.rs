/// Use cases module containing application business logic orchestration
mod filter_sbom;
mod merge_sboms;

pub use filter_sbom::FilterSbomUseCase;
pub use merge_sboms::MergeSbomsUseCase;
