use anyhow::{Context, Result};
use async_trait::async_trait;
use bollard::Docker;
use tracing::debug;

use crate::repositories::container_client::ContainerClient;

/// Talks to the local Docker Engine API (`DOCKER_HOST` or the platform socket).
#[derive(Debug, Clone, Default)]
pub struct DockerClient;

impl DockerClient {
    pub fn new() -> DockerClient {
        Self
    }

    fn connect(&self) -> Result<Docker> {
        Docker::connect_with_local_defaults().context("Connecting to the Docker daemon")
    }
}

#[async_trait]
impl ContainerClient for DockerClient {
    async fn ping(&self) -> Result<()> {
        debug!("Pinging Docker daemon");
        let docker = self.connect()?;
        let reply = docker
            .ping()
            .await
            .context("Pinging the Docker daemon")?;
        debug!(reply = %reply, "Docker daemon answered");

        Ok(())
    }
}
