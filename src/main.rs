use clap::Parser;
use std::process::ExitCode;

use neo4j_launcher::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ExitCode::from(neo4j_launcher::start(cli).await)
}
