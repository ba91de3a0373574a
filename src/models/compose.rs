use std::fmt;
use std::path::{Path, PathBuf};

/// The compose tool found on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeProgram {
    /// The `docker-compose` binary.
    Standalone(PathBuf),
    /// The `docker` binary invoked as `docker compose`.
    Plugin(PathBuf),
}

impl ComposeProgram {
    pub fn executable(&self) -> &Path {
        match self {
            ComposeProgram::Standalone(path) | ComposeProgram::Plugin(path) => path,
        }
    }

    /// Arguments that precede every compose subcommand.
    pub fn leading_args(&self) -> &'static [&'static str] {
        match self {
            ComposeProgram::Standalone(_) => &[],
            ComposeProgram::Plugin(_) => &["compose"],
        }
    }
}

/// Shown as the command an operator would type, e.g. `docker compose`.
impl fmt::Display for ComposeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let executable = self.executable();
        let name = executable
            .file_name()
            .unwrap_or(executable.as_os_str())
            .to_string_lossy();
        match self {
            ComposeProgram::Standalone(_) => write!(f, "{}", name),
            ComposeProgram::Plugin(_) => write!(f, "{} compose", name),
        }
    }
}

/// A compose program paired with a compose file that passed preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeTarget {
    pub program: ComposeProgram,
    pub file: PathBuf,
}

impl ComposeTarget {
    pub fn new(program: ComposeProgram, file: impl Into<PathBuf>) -> Self {
        Self {
            program,
            file: file.into(),
        }
    }

    pub fn file_display(&self) -> String {
        self.file.display().to_string()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Container {
    pub name: String,
    pub state: ContainerState,
}

/// Parsed from the `State` field of `compose ps --format json`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ContainerState {
    Created,
    Dead,
    Exited,
    Paused,
    Removing,
    Restarting,
    Running,
}

impl ContainerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Created => "created",
            ContainerState::Dead => "dead",
            ContainerState::Exited => "exited",
            ContainerState::Paused => "paused",
            ContainerState::Removing => "removing",
            ContainerState::Restarting => "restarting",
            ContainerState::Running => "running",
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
