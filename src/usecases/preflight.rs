use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ComposeConfig;
use crate::errors::preflight::PreflightError;
use crate::models::compose::{ComposeProgram, ComposeTarget};
use crate::repositories::container_client::ContainerClient;
use crate::repositories::tool_locator::ToolLocator;

/// Non-mutating checks that must all pass before anything is started.
///
/// Checks run in a fixed order: docker, compose tool, daemon, compose file.
/// The first failure ends the run.
#[derive(Debug)]
pub struct Preflight<T, D>
where
    T: ToolLocator,
    D: ContainerClient,
{
    tool_locator: Arc<T>,
    container_client: Arc<D>,
    compose_config: ComposeConfig,
}

impl<T, D> Preflight<T, D>
where
    T: ToolLocator,
    D: ContainerClient,
{
    pub fn new(tool_locator: Arc<T>, container_client: Arc<D>, compose_config: ComposeConfig) -> Self {
        Self {
            tool_locator,
            container_client,
            compose_config,
        }
    }

    pub fn tool_available(&self, tool: &str) -> bool {
        self.tool_locator.locate(tool).is_some()
    }

    pub async fn daemon_live(&self) -> bool {
        match self.container_client.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Docker daemon did not answer: {:#}", e);
                false
            }
        }
    }

    /// A directory at `path` does not count.
    pub fn file_exists(path: &Path) -> bool {
        path.is_file()
    }

    pub async fn check(&self) -> Result<ComposeTarget, PreflightError> {
        let docker = &self.compose_config.docker_binary;
        if !self.tool_available(docker) {
            return Err(PreflightError::DockerNotInstalled {
                tool: docker.clone(),
            });
        }

        let program = self.resolve_compose_program()?;

        if !self.daemon_live().await {
            return Err(PreflightError::DaemonUnreachable);
        }

        let file = &self.compose_config.file;
        if !Self::file_exists(file) {
            return Err(PreflightError::ComposeFileMissing {
                path: file.display().to_string(),
            });
        }

        info!(
            compose = %program,
            file = %file.display(),
            "Preflight checks passed"
        );

        Ok(ComposeTarget::new(program, file.clone()))
    }

    /// Prefers a standalone `docker-compose`; falls back to the `docker compose` plugin.
    ///
    /// Programs are kept by their configured name and resolved on `PATH` when run.
    fn resolve_compose_program(&self) -> Result<ComposeProgram, PreflightError> {
        let standalone = &self.compose_config.compose_binary;
        let docker = &self.compose_config.docker_binary;

        if self.tool_available(standalone) {
            debug!(tool = %standalone, "Using standalone compose binary");
            return Ok(ComposeProgram::Standalone(PathBuf::from(standalone)));
        }

        let docker = PathBuf::from(docker);
        if self.tool_locator.supports_subcommand(&docker, "compose") {
            debug!(docker = %docker.display(), "Using docker compose plugin");
            return Ok(ComposeProgram::Plugin(docker));
        }

        Err(PreflightError::ComposeNotInstalled {
            tool: standalone.clone(),
            docker: self.compose_config.docker_binary.clone(),
        })
    }
}
