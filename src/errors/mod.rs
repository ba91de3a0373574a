pub mod codes;
pub mod compose;
pub mod preflight;

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::compose::ComposeError;
use crate::errors::preflight::PreflightError;

pub type LauncherResult<T> = Result<T, LauncherError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Preflight(#[from] PreflightError),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

impl HasErrorCode for LauncherError {
    fn error_code(&self) -> &'static str {
        match self {
            LauncherError::Config(e) => e.error_code(),
            LauncherError::Preflight(e) => e.error_code(),
            LauncherError::Compose(e) => e.error_code(),
        }
    }
}
