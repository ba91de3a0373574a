use std::io::{self, Write};
use tracing::error;

use crate::cli::Command;
use crate::handlers::error::{report_error, EXIT_FAILURE, EXIT_SUCCESS};
use crate::models::launch::{LaunchSummary, ServiceStatus};
use crate::repositories::compose_client::ComposeClient;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::tool_locator::ToolLocator;
use crate::usecases::launcher::LauncherUsecase;

/// Runs `command` and writes the operator-facing result. Returns the process exit status.
pub async fn handle_command<T, C, D, O, E>(
    usecase: &LauncherUsecase<T, C, D>,
    command: Command,
    out: &mut O,
    err_out: &mut E,
) -> u8
where
    T: ToolLocator,
    C: ComposeClient,
    D: ContainerClient,
    O: Write,
    E: Write,
{
    let written = match command {
        Command::Up => match usecase.up().await {
            Ok(summary) => write_launch_summary(out, &summary).map(|_| EXIT_SUCCESS),
            Err(e) => report_error(err_out, &e, usecase.service()),
        },
        Command::Down => match usecase.down().await {
            Ok(()) => writeln!(out, "{} stopped.", usecase.service().name).map(|_| EXIT_SUCCESS),
            Err(e) => report_error(err_out, &e, usecase.service()),
        },
        Command::Status => match usecase.status().await {
            Ok(status) => write_service_status(out, &status).map(|_| EXIT_SUCCESS),
            Err(e) => report_error(err_out, &e, usecase.service()),
        },
    };

    match written {
        Ok(status) => status,
        Err(e) => {
            error!("Failed to write output: {}", e);
            EXIT_FAILURE
        }
    }
}

fn write_launch_summary<W: Write>(out: &mut W, summary: &LaunchSummary) -> io::Result<()> {
    writeln!(out, "{} started successfully.", summary.service)?;
    writeln!(out, "Browser: {}", summary.browser_url)?;
    writeln!(out, "Bolt:    {}", summary.bolt_url)?;
    writeln!(
        out,
        "Default credentials: {} / {}",
        summary.username, summary.password
    )
}

fn write_service_status<W: Write>(out: &mut W, status: &ServiceStatus) -> io::Result<()> {
    writeln!(out, "{}: {}", status.service, status.summary())?;
    for container in &status.containers {
        writeln!(out, "  {:<30} {}", container.name, container.state)?;
    }
    Ok(())
}
