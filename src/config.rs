use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const PLACEHOLDER_API_KEY: &str = "your_elevenlabs_api_key_here";
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// `None` when unset, empty, or still the sample placeholder.
    pub api_key: Option<String>,
    pub base_url: String,
    pub public_dir: PathBuf,
    /// `None` disables the provider request timeout.
    pub provider_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_number("PORT", var("PORT"), 3000)?;
        let addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, port)))?;

        let timeout_secs: u64 = parse_number("PROVIDER_TIMEOUT_SECS", var("PROVIDER_TIMEOUT_SECS"), 60)?;

        Ok(Self {
            addr,
            api_key: var("ELEVENLABS_API_KEY").filter(|key| key != PLACEHOLDER_API_KEY),
            base_url: var("ELEVENLABS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            public_dir: var("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()).into(),
            provider_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.public_dir.join("audio")
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
