use crate::config::ServiceConfig;
use crate::models::compose::{Container, ContainerState};

/// What the operator is told once the services are up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    pub service: String,
    pub browser_url: String,
    pub bolt_url: String,
    pub username: String,
    pub password: String,
}

impl From<&ServiceConfig> for LaunchSummary {
    fn from(service: &ServiceConfig) -> Self {
        LaunchSummary {
            service: service.name.clone(),
            browser_url: service.browser_url.clone(),
            bolt_url: service.bolt_url.clone(),
            username: service.username.clone(),
            password: service.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub service: String,
    pub containers: Vec<Container>,
}

impl ServiceStatus {
    pub fn summary(&self) -> String {
        build_container_status_string(&self.containers)
    }
}

pub fn build_container_status_string(containers: &[Container]) -> String {
    let total = containers.len();
    let running = containers
        .iter()
        .filter(|c| c.state == ContainerState::Running)
        .count();

    match running {
        0 => "Exited".to_string(),
        _ => format!("Running ({}/{})", running, total),
    }
}
