pub mod cli;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use std::io;
use std::sync::Arc;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, ServiceConfig};
use crate::errors::LauncherError;
use crate::handlers::command::handle_command;
use crate::handlers::error::{report_error, EXIT_FAILURE};
use crate::repositories::docker_client::DockerClient;
use crate::repositories::docker_compose_client::DockerComposeClient;
use crate::repositories::tool_locator::PathToolLocator;
use crate::telemetry::initialize_telemetry_with_configuration;
use crate::usecases::launcher::LauncherUsecase;

/// Loads configuration, applies CLI overrides, runs the command and returns its exit status.
pub async fn start(cli: Cli) -> u8 {
    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = LauncherError::from(e);
            // Config failed to load, so the operator sees the default service name.
            return report_error(&mut io::stderr().lock(), &err, &ServiceConfig::default())
                .unwrap_or(EXIT_FAILURE);
        }
    };
    apply_overrides(&mut config, &cli);

    // Held until the command finishes so exporters flush on drop.
    let _telemetry = match initialize_telemetry_with_configuration(&config.telemetry) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging could not be initialised: {:#}", e);
            None
        }
    };
    debug!(
        command = ?cli.command(),
        compose_file = %config.compose.file.display(),
        "Starting"
    );

    let usecase = LauncherUsecase::new(
        Arc::new(PathToolLocator),
        Arc::new(DockerComposeClient::new()),
        Arc::new(DockerClient::new()),
        &config,
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    handle_command(&usecase, cli.command(), &mut stdout.lock(), &mut stderr.lock()).await
}

pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(file) = &cli.compose_file {
        config.compose.file = file.clone();
    }
    if cli.verbose {
        config.telemetry.log_level = "debug".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn given_compose_file_and_verbose_flags_when_applied_then_config_is_overridden() {
        let cli = Cli::try_parse_from(["neo4j-launcher", "-v", "-f", "other/compose.yaml"]).unwrap();
        let mut config = Config::default();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.compose.file, PathBuf::from("other/compose.yaml"));
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn given_no_flags_when_applied_then_config_is_unchanged() {
        let cli = Cli::try_parse_from(["neo4j-launcher"]).unwrap();
        let mut config = Config::default();

        apply_overrides(&mut config, &cli);

        assert_eq!(config, Config::default());
    }
}
