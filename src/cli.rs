use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "neo4j-launcher",
    version,
    about = "Start the Neo4j container used by the agent demo",
    long_about = "Checks that Docker, Docker Compose and the Docker daemon are available, then runs \
                  `compose up -d` on the Neo4j compose file.\nRunning without a subcommand is the same as `up`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// YAML configuration file
    #[arg(short, long, env = "NEO4J_LAUNCHER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Compose file to use instead of the configured one
    #[arg(short = 'f', long, env = "NEO4J_LAUNCHER_COMPOSE_FILE", global = true)]
    pub compose_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the services in detached mode (default)
    Up,
    /// Stop and remove the services
    Down,
    /// Show the state of the service containers
    Status,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_arguments_when_parsed_then_command_is_up() {
        let cli = Cli::try_parse_from(["neo4j-launcher"]).unwrap();

        assert_eq!(cli.command(), Command::Up);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn given_status_with_compose_file_when_parsed_then_both_are_captured() {
        let cli =
            Cli::try_parse_from(["neo4j-launcher", "status", "-f", "deploy/compose.yml"]).unwrap();

        assert_eq!(cli.command(), Command::Status);
        assert_eq!(cli.compose_file, Some(PathBuf::from("deploy/compose.yml")));
    }

    #[test]
    fn given_unknown_subcommand_when_parsed_then_return_error() {
        let result = Cli::try_parse_from(["neo4j-launcher", "restart"]);

        assert!(result.is_err());
    }
}
