use mockall::automock;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Finds external executables on the host.
#[automock]
pub trait ToolLocator {
    /// Resolves `tool` on `PATH`, or as a path when it contains a separator.
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    /// Whether `<program> <subcommand> version` exits successfully.
    fn supports_subcommand(&self, program: &Path, subcommand: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct PathToolLocator;

impl ToolLocator for PathToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        match which::which(tool) {
            Ok(path) => {
                debug!(tool, path = %path.display(), "Resolved tool");
                Some(path)
            }
            Err(e) => {
                debug!(tool, error = %e, "Tool not found");
                None
            }
        }
    }

    fn supports_subcommand(&self, program: &Path, subcommand: &str) -> bool {
        let status = Command::new(program)
            .args([subcommand, "version"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(program = %program.display(), subcommand, error = %e, "Probe failed to run");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nonexistent_tool_when_locate_then_return_none() {
        let locator = PathToolLocator;

        let actual = locator.locate("definitely-not-an-installed-tool-3f9a1c");

        assert!(actual.is_none());
    }

    #[test]
    fn given_nonexistent_program_when_probing_subcommand_then_return_false() {
        let locator = PathToolLocator;

        let actual = locator.supports_subcommand(
            Path::new("/nonexistent/bin/definitely-not-docker"),
            "compose",
        );

        assert!(!actual);
    }
}
