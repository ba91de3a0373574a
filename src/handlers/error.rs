use std::io::{self, Write};

use crate::config::ServiceConfig;
use crate::errors::compose::ComposeError;
use crate::errors::{HasErrorCode, LauncherError};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Every failure is fatal and maps to the same status.
pub fn exit_status(_err: &LauncherError) -> u8 {
    EXIT_FAILURE
}

/// The message shown to the operator for `err`.
///
/// Compose failures get a generic pointer to the container logs; the detailed
/// reason is already in the log output.
pub fn operator_message(err: &LauncherError, service: &ServiceConfig) -> String {
    match err {
        LauncherError::Compose(ComposeError::UpFailed { program, path, .. }) => format!(
            "Failed to start {}. Check the logs with `{} -f {} logs` for details.",
            service.name, program, path
        ),
        LauncherError::Compose(ComposeError::DownFailed { program, path, .. }) => format!(
            "Failed to stop {}. Check the logs with `{} -f {} logs` for details.",
            service.name, program, path
        ),
        other => other.to_string(),
    }
}

pub fn report_error<W: Write>(
    err_out: &mut W,
    err: &LauncherError,
    service: &ServiceConfig,
) -> io::Result<u8> {
    writeln!(
        err_out,
        "Error: {} ({})",
        operator_message(err, service),
        err.error_code()
    )?;
    Ok(exit_status(err))
}
