use crate::{env_optional, env_or_default, ConfigError, FromEnv};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Listen address for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` and `PORT`; a blank `PORT` counts as unset.
    fn from_env() -> Result<Self, ConfigError> {
        let port = match env_optional("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{e} (got {raw:?})"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: env_or_default("HOST", DEFAULT_HOST),
            port,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
