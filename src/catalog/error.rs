// ABOUTME: Error types for template catalog loading and lookup
// ABOUTME: Defines specific error types for catalog module operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read template directory {dir}: {source}")]
    DirectoryUnreadable {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read template file {file}: {source}")]
    FileUnreadable {
        file: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed template definition in {file}: {source}")]
    Malformed {
        file: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Template '{name}' not found")]
    NotFound { name: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
