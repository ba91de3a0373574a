use thiserror::Error;

pub const DOCKER_INSTALL_URL: &str = "https://docs.docker.com/get-docker/";
pub const COMPOSE_INSTALL_URL: &str = "https://docs.docker.com/compose/install/";

/// A precondition that did not hold. Nothing has been started when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error("Docker is not installed ('{tool}' not found). Please install Docker first: {}", DOCKER_INSTALL_URL)]
    DockerNotInstalled { tool: String },

    #[error("Docker Compose is not installed (neither '{tool}' nor '{docker} compose' is available). Please install Docker Compose first: {}", COMPOSE_INSTALL_URL)]
    ComposeNotInstalled { tool: String, docker: String },

    #[error("Docker daemon is not running or not reachable. Please start Docker and try again")]
    DaemonUnreachable,

    #[error("Compose file not found at {path}")]
    ComposeFileMissing { path: String },
}

impl PreflightError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            PreflightError::DockerNotInstalled { .. } => ErrorCode::DOCKER_NOT_INSTALLED,
            PreflightError::ComposeNotInstalled { .. } => ErrorCode::COMPOSE_NOT_INSTALLED,
            PreflightError::DaemonUnreachable => ErrorCode::DAEMON_UNREACHABLE,
            PreflightError::ComposeFileMissing { .. } => ErrorCode::COMPOSE_FILE_MISSING,
        }
    }
}
