use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_api_url: {0}")]
    InvalidApiUrl(#[from] url::ParseError),
    #[error("config.unsupported_scheme: {0}")]
    UnsupportedScheme(String),
}

/// Exercise backend location.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Validates the origin given on the command line or in `EXERCISES_API_URL`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self { base_url: url })
    }
}
