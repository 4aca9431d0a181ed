use std::io;

use thiserror::Error;

/// Library-wide error type for fspec operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Spec directory could not be created.
    #[error("create spec directory '{path}'")]
    DirectoryCreate {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A deployment config already exists in the target directory.
    #[error("spec deployment config already exists in directory '{dir}'")]
    ConfigExists { dir: String },

    /// Deployment config could not be serialized to YAML.
    #[error("error writing deployment config")]
    Serialization(#[from] serde_yaml::Error),

    /// An artifact file could not be written.
    #[error("write '{path}'")]
    WriteFile {
        path: String,
        #[source]
        source: io::Error,
    },
}
