//! Starter template catalog
//!
//! The catalog maps a language to a set of application types, and each
//! (language, application type) pair to an ordered list of starter templates.
//!
//! ```text
//! templs.yml
//!     │
//!     ├── Go
//!     │    ├── cli      ← [basic-cli, cobra-cli]
//!     │    └── web_app  ← [...]
//!     └── Rust
//!          └── ...
//! ```
//!
//! The wizard only talks to the [`CatalogProvider`] trait so it can be driven
//! by an in-memory document in tests and by a file on disk in production.

mod document;
mod file;

pub use document::{CatalogDocument, LanguageEntry};
pub use file::FileCatalog;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::{PrmeError, Result};

/// A named project skeleton that can be cloned into a new directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarterTemplate {
    /// Display name, e.g. `basic-cli`
    pub name: String,

    /// Where the skeleton lives (a git URL or local repository path)
    #[serde(rename = "repo", alias = "source")]
    pub source_location: String,

    /// Optional one-line description shown under the highlighted entry
    #[serde(default)]
    pub description: Option<String>,
}

impl StarterTemplate {
    pub fn new(name: impl Into<String>, source_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_location: source_location.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Application categories offered by the wizard.
///
/// This list is fixed for the life of the program and is not read from the
/// catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppType {
    WebApp,
    Cli,
    Backend,
    Mobile,
    BrowserExtension,
    Static,
    Config,
}

impl AppType {
    /// Every app type, in display order
    pub const ALL: [AppType; 7] = [
        AppType::WebApp,
        AppType::Cli,
        AppType::Backend,
        AppType::Mobile,
        AppType::BrowserExtension,
        AppType::Static,
        AppType::Config,
    ];

    /// Key used in the catalog document
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::WebApp => "web_app",
            AppType::Cli => "cli",
            AppType::Backend => "backend",
            AppType::Mobile => "mobile",
            AppType::BrowserExtension => "browser_extension",
            AppType::Static => "static",
            AppType::Config => "config",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = PrmeError;

    fn from_str(s: &str) -> Result<Self> {
        AppType::ALL
            .into_iter()
            .find(|app_type| app_type.as_str() == s)
            .ok_or_else(|| PrmeError::AppTypeNotFound(s.to_string()))
    }
}

/// Source of the choices offered at each wizard step
pub trait CatalogProvider {
    /// Supported languages, sorted by name
    fn list_languages(&self) -> Result<Vec<String>>;

    /// Fixed application types, in display order
    fn list_app_types(&self) -> Vec<String> {
        AppType::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }

    /// Starter templates for a language and application type.
    ///
    /// Returns an empty list, not an error, when the pair is valid but has no
    /// templates.
    fn list_templates(&self, language: &str, app_type: &str) -> Result<Vec<StarterTemplate>>;
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for &T {
    fn list_languages(&self) -> Result<Vec<String>> {
        (**self).list_languages()
    }

    fn list_app_types(&self) -> Vec<String> {
        (**self).list_app_types()
    }

    fn list_templates(&self, language: &str, app_type: &str) -> Result<Vec<StarterTemplate>> {
        (**self).list_templates(language, app_type)
    }
}
