mod component_normalizer;
mod component_search;
mod format_validator;
mod sbom_loader;

pub use component_normalizer::ComponentNormalizer;
pub use component_search::ComponentSearch;
pub use format_validator::FormatValidator;
pub use sbom_loader::SbomLoader;
