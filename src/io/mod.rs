//! File system locations used by prme
pub mod paths;

pub use paths::{CatalogLocator, PrmePaths};
