use std::path::PathBuf;

use thiserror::Error;

/// CLI統一エラー型
#[derive(Debug, Error)]
pub enum DedevsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch '{name}' from registry (status: {status}): {message}")]
    RegistryFetch {
        name: String,
        status: u16,
        message: String,
    },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid component name: '{0}'")]
    InvalidComponentName(String),

    #[error("Dependency installation failed: {0}")]
    DependencyInstall(String),

    #[error("Scaffold command failed for '{name}': {message}")]
    ScaffoldInstall { name: String, message: String },

    #[error("File operation failed on {path}: {message}")]
    FileOperation { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DedevsError>;

impl DedevsError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            DedevsError::Network(_) => true,
            DedevsError::RegistryFetch { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}
