use super::api_config::{ApiConfig, ConfigError};
use crate::cli::Cli;

pub struct AppConfig {
    pub api: ApiConfig,
    pub token: Option<String>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::parse(&cli.api_url)?,
            token: cli.token.clone(),
        })
    }
}
