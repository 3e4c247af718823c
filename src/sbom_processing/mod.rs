//! Domain layer: the CycloneDX document model and the pure services that
//! load, validate, normalize and search it.
pub mod domain;
pub mod services;
