use std::sync::Arc;
use tracing::{error, info};

use crate::config::{Config, ServiceConfig};
use crate::errors::LauncherResult;
use crate::models::launch::{LaunchSummary, ServiceStatus};
use crate::repositories::compose_client::ComposeClient;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::tool_locator::ToolLocator;
use crate::usecases::preflight::Preflight;

/// Preflight followed by a single delegated compose call.
pub struct LauncherUsecase<T, C, D>
where
    T: ToolLocator,
    C: ComposeClient,
    D: ContainerClient,
{
    preflight: Preflight<T, D>,
    compose_client: Arc<C>,
    service: ServiceConfig,
}

impl<T, C, D> LauncherUsecase<T, C, D>
where
    T: ToolLocator,
    C: ComposeClient,
    D: ContainerClient,
{
    pub fn new(
        tool_locator: Arc<T>,
        compose_client: Arc<C>,
        container_client: Arc<D>,
        config: &Config,
    ) -> Self {
        Self {
            preflight: Preflight::new(tool_locator, container_client, config.compose.clone()),
            compose_client,
            service: config.service.clone(),
        }
    }

    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    pub async fn up(&self) -> LauncherResult<LaunchSummary> {
        let target = self.preflight.check().await?;

        info!("Starting {} with {}", self.service.name, target.program);
        self.compose_client.up(&target).inspect_err(|e| {
            error!("Failed to start {}: {}", self.service.name, e);
        })?;

        info!("{} started", self.service.name);
        Ok(LaunchSummary::from(&self.service))
    }

    pub async fn down(&self) -> LauncherResult<()> {
        let target = self.preflight.check().await?;

        info!("Stopping {} with {}", self.service.name, target.program);
        self.compose_client.down(&target)?;

        Ok(())
    }

    pub async fn status(&self) -> LauncherResult<ServiceStatus> {
        let target = self.preflight.check().await?;
        let containers = self.compose_client.list_containers(&target)?;

        Ok(ServiceStatus {
            service: self.service.name.clone(),
            containers,
        })
    }
}
