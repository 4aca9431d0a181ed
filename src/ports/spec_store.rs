use std::path::Path;

use crate::domain::AppError;

/// Storage for a spec directory and its artifacts.
pub trait SpecStore {
    /// Path of the spec directory, for display and error context.
    fn spec_path(&self) -> &Path;

    /// Create the spec directory and any missing parents.
    ///
    /// Succeeds silently if the directory already exists.
    fn create_dir(&self) -> Result<(), AppError>;

    /// Whether a deployment config already exists in the spec directory.
    fn config_exists(&self) -> bool;

    /// Write the README, overwriting any prior content.
    fn write_readme(&self, content: &str) -> Result<(), AppError>;

    /// Write the deployment config.
    ///
    /// Fails with `ConfigExists` if the file is already present, so a
    /// concurrent init cannot clobber an existing UID.
    fn write_config(&self, content: &str) -> Result<(), AppError>;
}
