//! Producing a project on disk from a starter template

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::{PrmeError, Result};

/// What to create and where, emitted by the wizard once the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeRequest {
    pub source_location: String,
    pub destination: PathBuf,
}

/// Creates a project from a template source
pub trait Materializer {
    fn materialize(&self, source_location: &str, destination: &Path) -> Result<()>;
}

/// Clones the template repository with the `git` CLI.
///
/// Output from git is passed straight through to the terminal.
#[derive(Debug, Clone)]
pub struct GitMaterializer {
    program: PathBuf,
}

impl GitMaterializer {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer for GitMaterializer {
    fn materialize(&self, source_location: &str, destination: &Path) -> Result<()> {
        ensure_destination_free(destination)?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("clone")
            .arg(source_location)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        info!(
            "Cloning {} into {}",
            source_location,
            destination.display()
        );
        debug!("git command: {:?}", cmd);

        let status = cmd.status().map_err(|e| {
            PrmeError::Materialization(format!(
                "Failed to run {}: {}",
                self.program.display(),
                e
            ))
        })?;

        if !status.success() {
            return Err(PrmeError::Materialization(format!(
                "git clone of {} exited with {}",
                source_location, status
            )));
        }

        Ok(())
    }
}

/// A destination may be absent or an empty directory, nothing else
fn ensure_destination_free(destination: &Path) -> Result<()> {
    if !destination.exists() {
        return Ok(());
    }
    if !destination.is_dir() {
        return Err(PrmeError::Materialization(format!(
            "{} already exists and is not a directory",
            destination.display()
        )));
    }
    let mut entries = std::fs::read_dir(destination)?;
    if entries.next().is_some() {
        return Err(PrmeError::Materialization(format!(
            "{} already exists and is not empty",
            destination.display()
        )));
    }
    Ok(())
}

/// Directory name for a project: trimmed, last path component only.
///
/// Returns `None` when nothing usable is left (blank, `/`, `..`).
pub fn project_dir_name(project_name: &str) -> Option<String> {
    let trimmed = project_name.trim();
    Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_dir_name_trims_and_takes_base() {
        assert_eq!(project_dir_name("myapp"), Some("myapp".to_string()));
        assert_eq!(project_dir_name("  myapp  "), Some("myapp".to_string()));
        assert_eq!(project_dir_name("nested/dir/myapp"), Some("myapp".to_string()));
        assert_eq!(project_dir_name("myapp/"), Some("myapp".to_string()));
    }

    #[test]
    fn test_project_dir_name_rejects_unusable_names() {
        assert_eq!(project_dir_name("   "), None);
        assert_eq!(project_dir_name("/"), None);
        assert_eq!(project_dir_name(".."), None);
    }

    #[test]
    fn test_destination_must_be_free() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_destination_free(&dir.path().join("new")).is_ok());
        assert!(ensure_destination_free(dir.path()).is_ok());

        std::fs::write(dir.path().join("file.txt"), "x").unwrap();
        let err = ensure_destination_free(dir.path()).unwrap_err();
        assert!(matches!(err, PrmeError::Materialization(_)));

        let err = ensure_destination_free(&dir.path().join("file.txt")).unwrap_err();
        assert!(matches!(err, PrmeError::Materialization(_)));
    }

    #[test]
    fn test_missing_git_binary_is_materialization_failure() {
        let dir = TempDir::new().unwrap();
        let git = GitMaterializer::with_program(dir.path().join("no-such-git"));

        let err = git
            .materialize("https://example.com/repo.git", &dir.path().join("out"))
            .unwrap_err();
        assert!(matches!(err, PrmeError::Materialization(_)));
    }
}
