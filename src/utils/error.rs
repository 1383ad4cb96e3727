use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration is not valid JSON: {0}")]
    ConfigMalformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid module name {name:?}: {reason}")]
    InvalidModuleName { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
