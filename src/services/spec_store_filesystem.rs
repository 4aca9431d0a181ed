use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DEPLOYMENT_CONFIG_FILE, README_FILE};
use crate::ports::SpecStore;

/// Filesystem-based spec store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemSpecStore {
    spec_dir: PathBuf,
}

impl FilesystemSpecStore {
    /// Create a spec store for the given directory.
    pub fn new(spec_dir: PathBuf) -> Self {
        Self { spec_dir }
    }

    /// Resolve a spec directory relative to the current working directory.
    pub fn current(spec_dir: &str) -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.join(spec_dir)))
    }

    fn config_path(&self) -> PathBuf {
        self.spec_dir.join(DEPLOYMENT_CONFIG_FILE)
    }

    fn write_failed(path: &Path, source: io::Error) -> AppError {
        AppError::WriteFile { path: path.display().to_string(), source }
    }
}

impl SpecStore for FilesystemSpecStore {
    fn spec_path(&self) -> &Path {
        &self.spec_dir
    }

    fn create_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.spec_dir).map_err(|source| AppError::DirectoryCreate {
            path: self.spec_dir.display().to_string(),
            source,
        })
    }

    fn config_exists(&self) -> bool {
        self.config_path().exists()
    }

    fn write_readme(&self, content: &str) -> Result<(), AppError> {
        let path = self.spec_dir.join(README_FILE);
        fs::write(&path, content).map_err(|source| Self::write_failed(&path, source))
    }

    fn write_config(&self, content: &str) -> Result<(), AppError> {
        let path = self.config_path();

        // create_new closes the check-then-write race: whichever init loses
        // sees AlreadyExists instead of overwriting the winner's UID.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| {
                if source.kind() == io::ErrorKind::AlreadyExists {
                    AppError::ConfigExists { dir: self.spec_dir.display().to_string() }
                } else {
                    Self::write_failed(&path, source)
                }
            })?;

        file.write_all(content.as_bytes()).map_err(|source| Self::write_failed(&path, source))
    }
}
