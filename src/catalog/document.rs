//! In-memory catalog parsed from a YAML document

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::{AppType, CatalogProvider, StarterTemplate};
use crate::{PrmeError, Result};

/// Starter templates for one language, grouped by app type
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    #[serde(default)]
    pub web_app: Vec<StarterTemplate>,

    #[serde(default)]
    pub cli: Vec<StarterTemplate>,

    #[serde(default)]
    pub backend: Vec<StarterTemplate>,

    #[serde(default)]
    pub mobile: Vec<StarterTemplate>,

    #[serde(default)]
    pub browser_extension: Vec<StarterTemplate>,

    #[serde(default)]
    pub r#static: Vec<StarterTemplate>,

    #[serde(default)]
    pub config: Vec<StarterTemplate>,
}

impl LanguageEntry {
    /// Templates registered under an app type
    pub fn templates(&self, app_type: AppType) -> &[StarterTemplate] {
        match app_type {
            AppType::WebApp => &self.web_app,
            AppType::Cli => &self.cli,
            AppType::Backend => &self.backend,
            AppType::Mobile => &self.mobile,
            AppType::BrowserExtension => &self.browser_extension,
            AppType::Static => &self.r#static,
            AppType::Config => &self.config,
        }
    }

    /// Mutable access used when building catalogs programmatically
    pub fn templates_mut(&mut self, app_type: AppType) -> &mut Vec<StarterTemplate> {
        match app_type {
            AppType::WebApp => &mut self.web_app,
            AppType::Cli => &mut self.cli,
            AppType::Backend => &mut self.backend,
            AppType::Mobile => &mut self.mobile,
            AppType::BrowserExtension => &mut self.browser_extension,
            AppType::Static => &mut self.r#static,
            AppType::Config => &mut self.config,
        }
    }
}

/// A parsed catalog (templs.yml).
///
/// Languages are keyed by name; a `BTreeMap` keeps them sorted, which is the
/// order the wizard lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDocument {
    pub languages: BTreeMap<String, LanguageEntry>,
}

// A language key with no body (`Zig:`) parses as null; treat it as empty.
#[derive(Deserialize)]
#[serde(transparent)]
struct RawDocument(Option<BTreeMap<String, Option<LanguageEntry>>>);

impl CatalogDocument {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Self::new());
        }

        let RawDocument(raw) = serde_yaml_ng::from_str(content).map_err(|e| {
            PrmeError::CatalogUnavailable(format!("Failed to parse catalog YAML: {}", e))
        })?;

        let languages = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(name, entry)| (name, entry.unwrap_or_default()))
            .collect();

        Ok(Self { languages })
    }

    /// Read and parse a catalog file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrmeError::CatalogUnavailable(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Register a template, creating the language entry if needed
    pub fn add_template(&mut self, language: &str, app_type: AppType, template: StarterTemplate) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .templates_mut(app_type)
            .push(template);
    }
}

impl CatalogProvider for CatalogDocument {
    fn list_languages(&self) -> Result<Vec<String>> {
        Ok(self.languages.keys().cloned().collect())
    }

    fn list_templates(&self, language: &str, app_type: &str) -> Result<Vec<StarterTemplate>> {
        let entry = self
            .languages
            .get(language)
            .ok_or_else(|| PrmeError::LanguageNotFound(language.to_string()))?;
        let app_type: AppType = app_type.parse()?;
        Ok(entry.templates(app_type).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
Rust:
  cli:
    - name: clap-cli
      repo: https://github.com/example/rust-clap-cli
Go:
  cli:
    - name: basic-cli
      repo: https://github.com/example/go-basic-cli
      description: Minimal CLI using the standard flag package
    - name: cobra-cli
      repo: https://github.com/example/go-cobra-cli
  web_app:
    - name: gin-web
      repo: https://github.com/example/go-gin-web
  desktop:
    - name: ignored
      repo: nowhere
Zig:
"#;

    #[test]
    fn test_languages_are_sorted() {
        let doc = CatalogDocument::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(doc.list_languages().unwrap(), vec!["Go", "Rust", "Zig"]);
    }

    #[test]
    fn test_templates_keep_document_order() {
        let doc = CatalogDocument::from_yaml_str(SAMPLE).unwrap();
        let templates = doc.list_templates("Go", "cli").unwrap();

        assert_eq!(
            templates,
            vec![
                StarterTemplate::new("basic-cli", "https://github.com/example/go-basic-cli")
                    .with_description("Minimal CLI using the standard flag package"),
                StarterTemplate::new("cobra-cli", "https://github.com/example/go-cobra-cli"),
            ]
        );
    }

    #[test]
    fn test_missing_app_type_is_empty_not_error() {
        let doc = CatalogDocument::from_yaml_str(SAMPLE).unwrap();
        assert!(doc.list_templates("Go", "mobile").unwrap().is_empty());
        assert!(doc.list_templates("Zig", "cli").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_language() {
        let doc = CatalogDocument::from_yaml_str(SAMPLE).unwrap();
        let err = doc.list_templates("Cobol", "cli").unwrap_err();
        assert!(matches!(err, PrmeError::LanguageNotFound(ref l) if l == "Cobol"));
    }

    #[test]
    fn test_unknown_app_type_for_known_language() {
        let doc = CatalogDocument::from_yaml_str(SAMPLE).unwrap();
        let err = doc.list_templates("Go", "desktop").unwrap_err();
        assert!(matches!(err, PrmeError::AppTypeNotFound(ref t) if t == "desktop"));
    }

    #[test]
    fn test_malformed_yaml_is_catalog_unavailable() {
        let err = CatalogDocument::from_yaml_str("Go: [unterminated").unwrap_err();
        assert!(matches!(err, PrmeError::CatalogUnavailable(_)));
    }

    #[test]
    fn test_empty_document_has_no_languages() {
        let doc = CatalogDocument::from_yaml_str("").unwrap();
        assert!(doc.list_languages().unwrap().is_empty());
    }

    #[test]
    fn test_add_template_matches_parsed_document() {
        let mut doc = CatalogDocument::new();
        doc.add_template(
            "Python",
            AppType::Backend,
            StarterTemplate::new("fastapi", "https://github.com/example/fastapi"),
        );

        let parsed = CatalogDocument::from_yaml_str(
            "Python:\n  backend:\n    - name: fastapi\n      repo: https://github.com/example/fastapi\n",
        )
        .unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(doc.list_templates("Python", "backend").unwrap().len(), 1);
    }
}
