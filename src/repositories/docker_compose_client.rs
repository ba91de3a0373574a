use anyhow::Context;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, error, info};

use crate::errors::compose::ComposeError;
use crate::models::compose::{ComposeTarget, Container, ContainerState};
use crate::repositories::compose_client::ComposeClient;

/// Runs the compose CLI next to the compose file.
#[derive(Debug, Clone, Default)]
pub struct DockerComposeClient;

impl DockerComposeClient {
    pub fn new() -> DockerComposeClient {
        DockerComposeClient
    }

    fn execute_compose_command(
        &self,
        target: &ComposeTarget,
        args: &[&OsStr],
        working_dir: &Path,
    ) -> Result<Output, std::io::Error> {
        debug!(
            program = %target.program.executable().display(),
            ?args,
            working_dir = %working_dir.display(),
            "Executing compose command"
        );

        Command::new(target.program.executable())
            .args(target.program.leading_args())
            .args(args)
            .current_dir(working_dir)
            .output()
    }

    fn validate_compose_file_exists_and_not_directory(
        &self,
        file_path: &Path,
    ) -> Result<(), ComposeError> {
        if !file_path.is_file() {
            return Err(ComposeError::ComposeFileNotFound {
                path: file_path.display().to_string(),
            });
        }

        Ok(())
    }

    /// Splits the compose file into the directory compose runs in and the name passed to `-f`.
    /// Only a bare file name maps to the current directory.
    fn get_working_dir_and_file_name_from<'a>(
        &self,
        compose_file_path: &'a Path,
    ) -> Result<(&'a Path, &'a OsStr), ComposeError> {
        let not_found = || {
            error!(
                "Could not split compose file path: {}",
                compose_file_path.display()
            );
            ComposeError::ComposeFileNotFound {
                path: compose_file_path.display().to_string(),
            }
        };

        let working_dir = match compose_file_path.parent() {
            Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
            Some(dir) => dir,
            None => return Err(not_found()),
        };
        let filename = compose_file_path.file_name().ok_or_else(not_found)?;

        Ok((working_dir, filename))
    }

    /// Runs `<compose> -f <file> <subcommand...>` and hands back stdout, or a
    /// failure reason built from stderr.
    fn run_checked(&self, target: &ComposeTarget, subcommand: &[&str]) -> Result<String, String> {
        let (working_dir, filename) = self
            .get_working_dir_and_file_name_from(&target.file)
            .map_err(|e| e.to_string())?;

        let mut args: Vec<&OsStr> = vec![OsStr::new("-f"), filename];
        args.extend(subcommand.iter().map(OsStr::new));

        let output = self
            .execute_compose_command(target, &args, working_dir)
            .with_context(|| {
                format!(
                    "Executing '{} {}' using '{}'",
                    target.program,
                    subcommand.join(" "),
                    target.file_display()
                )
            })
            .map_err(|e| format!("Failed to execute {} command: {:#}", target.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "{} {} exited with {}: {}",
                target.program,
                subcommand.join(" "),
                output.status,
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn ensure_file(&self, target: &ComposeTarget) -> Result<(), ComposeError> {
        self.validate_compose_file_exists_and_not_directory(&target.file)
            .inspect_err(|e| error!("{}", e))
    }

    fn parse_ps_output(&self, stdout: &str, path: &str) -> Result<Vec<Container>, ComposeError> {
        let trimmed = stdout.trim();

        // Older compose releases print a single JSON array instead of one object per line.
        if trimmed.starts_with('[') {
            let values: Vec<serde_json::Value> = serde_json::from_str(trimmed)
                .with_context(|| format!("Parsing container JSON array from file '{}'", path))
                .map_err(|e| self.list_failed(path, format!("Failed to parse compose output: {:#}", e)))?;

            return values
                .iter()
                .map(|value| self.container_from_value(value, path))
                .collect();
        }

        trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_container_json(line, path))
            .collect()
    }

    fn parse_container_json(&self, json_line: &str, path: &str) -> Result<Container, ComposeError> {
        let value: serde_json::Value = serde_json::from_str(json_line)
            .with_context(|| format!("Parsing container JSON from file '{}'", path))
            .map_err(|e| self.list_failed(path, format!("Failed to parse compose output: {:#}", e)))?;

        self.container_from_value(&value, path)
    }

    fn container_from_value(
        &self,
        value: &serde_json::Value,
        path: &str,
    ) -> Result<Container, ComposeError> {
        let name = self.extract_json_string_field(value, "Name", path)?;
        let state_str = self.extract_json_string_field(value, "State", path)?;
        let state = self.parse_container_state(&state_str, path)?;

        Ok(Container { name, state })
    }

    fn extract_json_string_field(
        &self,
        json: &serde_json::Value,
        field: &str,
        path: &str,
    ) -> Result<String, ComposeError> {
        json.get(field)
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| {
                self.list_failed(path, format!("Missing '{}' field in compose output", field))
            })
    }

    fn parse_container_state(&self, state_str: &str, path: &str) -> Result<ContainerState, ComposeError> {
        match state_str.to_ascii_lowercase().as_str() {
            "paused" => Ok(ContainerState::Paused),
            "restarting" => Ok(ContainerState::Restarting),
            "removing" => Ok(ContainerState::Removing),
            "running" => Ok(ContainerState::Running),
            "dead" => Ok(ContainerState::Dead),
            "created" => Ok(ContainerState::Created),
            "exited" => Ok(ContainerState::Exited),
            other => Err(self.list_failed(path, format!("Unknown container state: {}", other))),
        }
    }

    fn list_failed(&self, path: &str, reason: String) -> ComposeError {
        error!("Compose operation failed: {}", reason);
        ComposeError::ListContainersFailed {
            path: path.to_string(),
            reason,
        }
    }
}

impl ComposeClient for DockerComposeClient {
    fn up(&self, target: &ComposeTarget) -> Result<(), ComposeError> {
        info!("Running {} up using {}", target.program, target.file_display());
        self.ensure_file(target)?;

        self.run_checked(target, &["up", "-d"]).map_err(|reason| {
            error!("Compose up failed: {}", reason);
            ComposeError::UpFailed {
                program: target.program.to_string(),
                path: target.file_display(),
                reason,
            }
        })?;

        Ok(())
    }

    fn down(&self, target: &ComposeTarget) -> Result<(), ComposeError> {
        info!("Running {} down using {}", target.program, target.file_display());
        self.ensure_file(target)?;

        self.run_checked(target, &["down"]).map_err(|reason| {
            error!("Compose down failed: {}", reason);
            ComposeError::DownFailed {
                program: target.program.to_string(),
                path: target.file_display(),
                reason,
            }
        })?;

        Ok(())
    }

    fn list_containers(&self, target: &ComposeTarget) -> Result<Vec<Container>, ComposeError> {
        info!("Listing containers using {}", target.file_display());
        self.ensure_file(target)?;

        let path = target.file_display();
        let stdout = self
            .run_checked(target, &["ps", "--all", "--format", "json"])
            .map_err(|reason| self.list_failed(&path, reason))?;

        self.parse_ps_output(&stdout, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::models::compose::ComposeProgram;

    fn target_for(file: impl Into<PathBuf>) -> ComposeTarget {
        ComposeTarget::new(
            ComposeProgram::Plugin(PathBuf::from("/nonexistent/bin/docker")),
            file,
        )
    }

    #[test]
    fn given_bare_file_name_when_splitting_path_then_working_dir_is_current_dir() {
        let client = DockerComposeClient::new();

        let (dir, file) = client
            .get_working_dir_and_file_name_from(Path::new("docker-compose.yml"))
            .unwrap();

        assert_eq!(dir, Path::new("."));
        assert_eq!(file, OsStr::new("docker-compose.yml"));
    }

    #[test]
    fn given_nested_path_when_splitting_path_then_parent_is_working_dir() {
        let client = DockerComposeClient::new();

        let (dir, file) = client
            .get_working_dir_and_file_name_from(Path::new(
                "cookbook/integrations/neo4j/docker-compose.yml",
            ))
            .unwrap();

        assert_eq!(dir, Path::new("cookbook/integrations/neo4j"));
        assert_eq!(file, OsStr::new("docker-compose.yml"));
    }

    #[cfg(unix)]
    #[test]
    fn given_non_utf8_directory_when_splitting_path_then_keep_that_directory() {
        use std::os::unix::ffi::OsStrExt;

        let client = DockerComposeClient::new();
        let path = Path::new(OsStr::from_bytes(b"/tmp/neo\xFF4j/docker-compose.yml"));

        let (dir, file) = client.get_working_dir_and_file_name_from(path).unwrap();

        assert_eq!(dir, Path::new(OsStr::from_bytes(b"/tmp/neo\xFF4j")));
        assert_ne!(dir, Path::new("."));
        assert_eq!(file, OsStr::new("docker-compose.yml"));
    }

    #[test]
    fn given_root_path_when_splitting_path_then_return_file_not_found() {
        let client = DockerComposeClient::new();

        let result = client.get_working_dir_and_file_name_from(Path::new("/"));

        assert!(matches!(result, Err(ComposeError::ComposeFileNotFound { .. })));
    }

    #[test]
    fn given_json_lines_when_parsing_ps_output_then_return_containers() {
        let client = DockerComposeClient::new();
        let stdout = concat!(
            r#"{"Name":"neo4j","State":"running","Service":"neo4j"}"#,
            "\n\n",
            r#"{"Name":"neo4j-init","State":"exited","Service":"init"}"#,
            "\n"
        );

        let containers = client.parse_ps_output(stdout, "docker-compose.yml").unwrap();

        assert_eq!(
            containers,
            vec![
                Container {
                    name: "neo4j".to_string(),
                    state: ContainerState::Running
                },
                Container {
                    name: "neo4j-init".to_string(),
                    state: ContainerState::Exited
                },
            ]
        );
    }

    #[test]
    fn given_json_array_when_parsing_ps_output_then_return_containers() {
        let client = DockerComposeClient::new();
        let stdout = r#"[{"Name":"neo4j","State":"paused"}]"#;

        let containers = client.parse_ps_output(stdout, "docker-compose.yml").unwrap();

        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].state, ContainerState::Paused);
    }

    #[test]
    fn given_empty_output_when_parsing_ps_output_then_return_empty_list() {
        let client = DockerComposeClient::new();

        let containers = client.parse_ps_output("\n", "docker-compose.yml").unwrap();

        assert!(containers.is_empty());
    }

    #[test]
    fn given_unknown_state_when_parsing_ps_output_then_return_list_error() {
        let client = DockerComposeClient::new();
        let stdout = r#"{"Name":"neo4j","State":"hibernating"}"#;

        let result = client.parse_ps_output(stdout, "docker-compose.yml");

        assert!(matches!(
            result,
            Err(ComposeError::ListContainersFailed { reason, .. }) if reason.contains("hibernating")
        ));
    }

    #[test]
    fn given_missing_name_field_when_parsing_ps_output_then_return_list_error() {
        let client = DockerComposeClient::new();
        let stdout = r#"{"State":"running"}"#;

        let result = client.parse_ps_output(stdout, "docker-compose.yml");

        assert!(matches!(
            result,
            Err(ComposeError::ListContainersFailed { reason, .. }) if reason.contains("'Name'")
        ));
    }

    #[test]
    fn given_missing_compose_file_when_up_then_return_file_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("docker-compose.yml");
        let client = DockerComposeClient::new();

        let result = client.up(&target_for(&file));

        assert_eq!(
            result,
            Err(ComposeError::ComposeFileNotFound {
                path: file.display().to_string()
            })
        );
    }

    #[test]
    fn given_directory_instead_of_file_when_down_then_return_file_not_found() {
        let tmp = TempDir::new().unwrap();
        let client = DockerComposeClient::new();

        let result = client.down(&target_for(tmp.path()));

        assert!(matches!(result, Err(ComposeError::ComposeFileNotFound { .. })));
    }

    #[test]
    fn given_unrunnable_program_when_up_then_return_up_failed() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("docker-compose.yml");
        fs::write(&file, "services: {}\n").unwrap();
        let client = DockerComposeClient::new();

        let result = client.up(&target_for(&file));

        assert!(matches!(
            result,
            Err(ComposeError::UpFailed { path, .. }) if path == file.display().to_string()
        ));
    }

    #[cfg(unix)]
    fn stub_compose(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let program = dir.join("fake-compose");
        fs::write(&program, format!("#!/bin/sh\n{}", script)).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
        program
    }

    #[cfg(unix)]
    #[test]
    fn given_compose_exits_non_zero_when_up_then_return_up_failed_with_stderr() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("docker-compose.yml");
        fs::write(&file, "services: {}\n").unwrap();
        let program = stub_compose(
            tmp.path(),
            "echo \"pull access denied for neo4j\" >&2\nexit 1\n",
        );
        let target = ComposeTarget::new(ComposeProgram::Standalone(program), &file);
        let client = DockerComposeClient::new();

        let result = client.up(&target);

        match result {
            Err(ComposeError::UpFailed {
                program,
                path,
                reason,
            }) => {
                assert_eq!(program, "fake-compose");
                assert_eq!(path, file.display().to_string());
                assert!(reason.contains("pull access denied for neo4j"));
            }
            other => panic!("expected UpFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn given_compose_succeeds_when_up_then_run_detached_in_compose_file_directory() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("neo4j");
        fs::create_dir(&project_dir).unwrap();
        let file = project_dir.join("docker-compose.yml");
        fs::write(&file, "services: {}\n").unwrap();
        let record = tmp.path().join("invocation.txt");
        let program = stub_compose(
            tmp.path(),
            &format!("echo \"$(pwd -P) $*\" > '{}'\n", record.display()),
        );
        let target = ComposeTarget::new(ComposeProgram::Standalone(program), &file);
        let client = DockerComposeClient::new();

        client.up(&target).unwrap();

        let invocation = fs::read_to_string(&record).unwrap();
        let expected_dir = project_dir.canonicalize().unwrap();
        assert_eq!(
            invocation.trim(),
            format!("{} -f docker-compose.yml up -d", expected_dir.display())
        );
    }
}
