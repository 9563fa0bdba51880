//! Filesystem operations used by generation plans

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use pyinit_core::ProjectConfig;
use tracing::debug;

use crate::error::{Error, Result};
use crate::templates::TemplateRegistry;

/// Empty file that makes a directory an importable package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// What kind of artifact was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Directory,
    Marker,
    File,
}

/// One created path, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: Utf8PathBuf,
    pub kind: ArtifactKind,
}

/// Everything a generation run created, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: Utf8PathBuf,
    pub plan: String,
    pub artifacts: Vec<Artifact>,
}

impl GenerationReport {
    /// Whether `path` (relative to the root) was created
    pub fn contains(&self, path: &str) -> bool {
        self.artifacts.iter().any(|a| a.path == path)
    }

    /// Number of regular files written, markers included
    pub fn file_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.kind != ArtifactKind::Directory)
            .count()
    }

    pub fn dir_count(&self) -> usize {
        self.artifacts.len() - self.file_count()
    }
}

/// Write access to one project tree.
///
/// Every operation takes a path relative to the project root and records
/// what it created.
pub struct Scaffold<'a> {
    root: Utf8PathBuf,
    config: &'a ProjectConfig,
    registry: &'a TemplateRegistry,
    artifacts: Vec<Artifact>,
}

impl<'a> Scaffold<'a> {
    pub fn new(config: &'a ProjectConfig, registry: &'a TemplateRegistry) -> Self {
        Self {
            root: config.project_path.clone(),
            config,
            registry,
            artifacts: Vec::new(),
        }
    }

    /// Name of the main package directory
    pub fn main_dir(&self) -> &str {
        &self.config.main_dir_name
    }

    /// Create the project root itself; it may already exist
    pub fn create_root(&mut self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| Error::io(self.root.as_str(), e))?;
        debug!("Created project root {}", self.root);
        self.record(Utf8Path::new("."), ArtifactKind::Directory);
        Ok(())
    }

    /// Create a directory (and any missing parents)
    pub fn create_dir(&mut self, relative: impl AsRef<Utf8Path>) -> Result<()> {
        let relative = relative.as_ref();
        let path = self.root.join(relative);
        fs::create_dir_all(&path).map_err(|e| Error::io(path.as_str(), e))?;
        debug!("Created directory {}", path);
        self.record(relative, ArtifactKind::Directory);
        Ok(())
    }

    /// Write an empty package marker into `dir`
    pub fn marker(&mut self, dir: impl AsRef<Utf8Path>) -> Result<()> {
        let relative = dir.as_ref().join(PACKAGE_MARKER);
        let path = self.root.join(&relative);
        fs::write(&path, "").map_err(|e| Error::io(path.as_str(), e))?;
        self.record(&relative, ArtifactKind::Marker);
        Ok(())
    }

    /// Create `dir` as a package: the directory plus its marker file
    pub fn package(&mut self, dir: impl AsRef<Utf8Path>) -> Result<()> {
        let dir = dir.as_ref();
        self.create_dir(dir)?;
        self.marker(dir)
    }

    /// Render `template` and write it to `relative` in one operation
    pub fn render(&mut self, template: &str, relative: impl AsRef<Utf8Path>) -> Result<()> {
        let relative = relative.as_ref();
        let content = self.registry.render(template, self.config)?;
        let path = self.root.join(relative);
        fs::write(&path, content).map_err(|e| Error::io(path.as_str(), e))?;
        debug!("Rendered {} -> {}", template, path);
        self.record(relative, ArtifactKind::File);
        Ok(())
    }

    fn record(&mut self, relative: &Utf8Path, kind: ArtifactKind) {
        self.artifacts.push(Artifact {
            path: relative.to_path_buf(),
            kind,
        });
    }

    /// Artifacts created so far
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}
