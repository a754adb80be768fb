use crate::{PrmeError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file
pub const CATALOG_ENV_VAR: &str = "PRME_CATALOG";

/// Catalog location relative to the working directory
pub const LOCAL_CATALOG: &str = "templates/templs.yml";

/// File name of the catalog in the user config directory
pub const USER_CATALOG_FILE: &str = "templates.yml";

/// Path management for prme configuration files
#[derive(Debug, Clone)]
pub struct PrmePaths {
    /// User configuration directory (e.g. ~/.config/prme)
    pub config_dir: PathBuf,
}

impl PrmePaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "prme").ok_or_else(|| {
            PrmeError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths rooted at a specific directory
    pub fn for_config_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Get the user-level catalog file path
    pub fn user_catalog_file(&self) -> PathBuf {
        self.config_dir.join(USER_CATALOG_FILE)
    }
}

/// Where to look for the template catalog, in priority order
#[derive(Debug, Clone, Default)]
pub struct CatalogLocator {
    /// Path given on the command line
    pub explicit: Option<PathBuf>,
    /// Value of `PRME_CATALOG`
    pub from_env: Option<PathBuf>,
    /// Directory the wizard runs in
    pub working_dir: PathBuf,
    /// User config paths, if they could be determined
    pub paths: Option<PrmePaths>,
}

impl CatalogLocator {
    /// Build a locator from the process environment
    pub fn from_env(explicit: Option<PathBuf>, working_dir: PathBuf) -> Self {
        let from_env = std::env::var_os(CATALOG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            explicit,
            from_env,
            working_dir,
            paths: PrmePaths::new().ok(),
        }
    }

    /// Candidate paths, highest priority first
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = &self.explicit {
            candidates.push(path.clone());
        }
        if let Some(path) = &self.from_env {
            candidates.push(path.clone());
        }
        candidates.push(self.working_dir.join(LOCAL_CATALOG));
        if let Some(paths) = &self.paths {
            candidates.push(paths.user_catalog_file());
        }
        candidates
    }

    /// Resolve the catalog file.
    ///
    /// An explicit path or `PRME_CATALOG` must exist when given; they do not
    /// fall through to the defaults.
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = self.explicit.as_ref().or(self.from_env.as_ref()) {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(PrmeError::Path(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let candidates = self.candidates();
        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }

        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(PrmeError::Path(format!(
            "No template catalog found (looked in: {})",
            tried
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "Go:\n  cli: []\n").unwrap();
    }

    #[test]
    fn test_prme_paths_creation() {
        let paths = PrmePaths::new();
        assert!(paths.is_ok());
        assert!(paths.unwrap().user_catalog_file().ends_with("templates.yml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("mine.yml");
        write_catalog(&explicit);
        write_catalog(&dir.path().join(LOCAL_CATALOG));

        let locator = CatalogLocator {
            explicit: Some(explicit.clone()),
            from_env: Some(dir.path().join("env.yml")),
            working_dir: dir.path().to_path_buf(),
            paths: None,
        };
        assert_eq!(locator.locate().unwrap(), explicit);
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_through() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir.path().join(LOCAL_CATALOG));

        let locator = CatalogLocator {
            explicit: Some(dir.path().join("missing.yml")),
            working_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(locator.locate(), Err(PrmeError::Path(_))));
    }

    #[test]
    fn test_env_path_before_local_catalog() {
        let dir = TempDir::new().unwrap();
        let env_path = dir.path().join("env.yml");
        write_catalog(&env_path);
        write_catalog(&dir.path().join(LOCAL_CATALOG));

        let locator = CatalogLocator {
            from_env: Some(env_path.clone()),
            working_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert_eq!(locator.locate().unwrap(), env_path);
    }

    #[test]
    fn test_local_then_user_catalog() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("config");
        let user_catalog = config_dir.join(USER_CATALOG_FILE);
        write_catalog(&user_catalog);

        let locator = CatalogLocator {
            working_dir: dir.path().join("project"),
            paths: Some(PrmePaths::for_config_dir(&config_dir)),
            ..Default::default()
        };
        assert_eq!(locator.locate().unwrap(), user_catalog);

        let local = dir.path().join("project").join(LOCAL_CATALOG);
        write_catalog(&local);
        assert_eq!(locator.locate().unwrap(), local);
    }

    #[test]
    fn test_nothing_found_lists_candidates() {
        let dir = TempDir::new().unwrap();
        let locator = CatalogLocator {
            working_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let err = locator.locate().unwrap_err();
        assert!(err.to_string().contains("templates/templs.yml"));
    }
}
