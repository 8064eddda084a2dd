use std::env;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const CONTAINER_FRONTEND_DIR: &str = "/usr/src/app/frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("API_UPSTREAM must be an http or https URL, got {0:?}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub api_upstream: Option<Url>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = match (lookup("FRONTEND_DIR"), lookup("CARGO_MANIFEST_DIR")) {
            (Some(dir), _) => PathBuf::from(dir),
            (None, Some(manifest_dir)) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
            (None, None) => PathBuf::from(CONTAINER_FRONTEND_DIR),
        };

        let api_upstream = match lookup("API_UPSTREAM").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(parse_upstream(&raw)?),
            None => None,
        };

        Ok(Self {
            host,
            port,
            frontend_dir,
            api_upstream,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_upstream(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUpstream(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::InvalidUpstream(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.frontend_dir, PathBuf::from(CONTAINER_FRONTEND_DIR));
        assert!(config.api_upstream.is_none());
    }

    #[test]
    fn test_manifest_dir_fallback() {
        let config = config_from(&[("CARGO_MANIFEST_DIR", "/work/backend")]).unwrap();
        assert_eq!(config.frontend_dir, PathBuf::from("/work/backend/../frontend/dist"));
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "5000"),
            ("FRONTEND_DIR", "/srv/dist"),
            ("API_UPSTREAM", "http://detector:8000"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/dist"));
        assert_eq!(
            config.api_upstream.map(|u| u.to_string()),
            Some("http://detector:8000/".to_string())
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_upstream_must_be_http() {
        assert!(matches!(
            config_from(&[("API_UPSTREAM", "ftp://detector")]),
            Err(ConfigError::InvalidUpstream(_))
        ));
        assert!(matches!(
            config_from(&[("API_UPSTREAM", "not a url")]),
            Err(ConfigError::InvalidUpstream(_))
        ));
        assert!(config_from(&[("API_UPSTREAM", "  ")]).unwrap().api_upstream.is_none());
    }
}
