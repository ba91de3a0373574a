use serde::Deserialize;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_COMPOSE_FILE: &str = "cookbook/integrations/neo4j/docker-compose.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ConfigError::Io(_) => ErrorCode::CONFIG_READ_FAILED,
            ConfigError::Yaml(_) => ErrorCode::CONFIG_PARSE_FAILED,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ComposeConfig {
    pub file: PathBuf,
    pub docker_binary: String,
    pub compose_binary: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            docker_binary: "docker".to_string(),
            compose_binary: "docker-compose".to_string(),
        }
    }
}

/// Connection details announced to the operator once the service is up.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub browser_url: String,
    pub bolt_url: String,
    pub username: String,
    pub password: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "Neo4j".to_string(),
            browser_url: "http://localhost:7474".to_string(),
            bolt_url: "bolt://localhost:7687".to_string(),
            username: "neo4j".to_string(),
            password: "phi-neo4j".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub log_level: String,
    pub excluded_modules: Vec<String>,
    pub service_name: String,
    pub otlp_endpoint: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_level: "warn".to_string(),
            excluded_modules: vec![
                "h2".to_string(),
                "hyper".to_string(),
                "tonic".to_string(),
                "tower".to_string(),
            ],
            service_name: env!("CARGO_PKG_NAME").to_string(),
            otlp_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub compose: ComposeConfig,
    pub service: ServiceConfig,
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file: File = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Reads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
