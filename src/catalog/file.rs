//! Catalog backed by a file that is re-read on every lookup

use std::path::PathBuf;
use tracing::debug;

use super::{CatalogDocument, CatalogProvider, StarterTemplate};
use crate::Result;

/// Catalog that reloads its YAML file for each query.
///
/// Edits made to the file while the wizard is open are picked up by the next
/// lookup. A file that becomes unreadable mid-session surfaces as
/// `CatalogUnavailable` from that lookup only.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<CatalogDocument> {
        debug!("Loading catalog from {}", self.path.display());
        CatalogDocument::from_path(&self.path)
    }
}

impl CatalogProvider for FileCatalog {
    fn list_languages(&self) -> Result<Vec<String>> {
        self.load()?.list_languages()
    }

    fn list_templates(&self, language: &str, app_type: &str) -> Result<Vec<StarterTemplate>> {
        self.load()?.list_templates(language, app_type)
    }
}
