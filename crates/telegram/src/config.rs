//! Process configuration read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

use extractor::{PairingMode, UnknownPairingMode};
use thiserror::Error;

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const FALLBACK_TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const HOSTNAME_VAR: &str = "RENDER_EXTERNAL_HOSTNAME";
pub const PORT_VAR: &str = "PORT";
pub const PAIRING_VAR: &str = "LINKBOT_PAIRING";
pub const WORK_DIR_VAR: &str = "LINKBOT_WORK_DIR";

pub const DEFAULT_PORT: u16 = 8443;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOT_TOKEN must be set")]
    MissingToken,
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("Webhook URL is invalid: {0}")]
    InvalidWebhookUrl(String),
    #[error(transparent)]
    Pairing(#[from] UnknownPairingMode),
}

/// How updates reach the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Long polling, nothing exposed to the network
    Polling,
    /// Telegram pushes updates to `url`, served on `listen`
    Webhook { listen: SocketAddr, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub mode: Mode,
    pub pairing: PairingMode,
    pub work_dir: PathBuf,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = var(TOKEN_VAR)
            .or_else(|| var(FALLBACK_TOKEN_VAR))
            .ok_or(ConfigError::MissingToken)?;

        let mode = match var(HOSTNAME_VAR) {
            Some(host) => {
                let port = match var(PORT_VAR) {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(raw))?,
                    None => DEFAULT_PORT,
                };
                Mode::Webhook {
                    listen: SocketAddr::from(([0, 0, 0, 0], port)),
                    url: format!("https://{}/{}", host.trim(), token),
                }
            }
            None => Mode::Polling,
        };

        let pairing = match var(PAIRING_VAR) {
            Some(raw) => raw.parse()?,
            None => PairingMode::default(),
        };

        let work_dir = var(WORK_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("linkbot"));

        Ok(Config {
            token,
            mode,
            pairing,
            work_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_token() {
        assert_eq!(load(&[]), Err(ConfigError::MissingToken));
        assert_eq!(load(&[(TOKEN_VAR, "  ")]), Err(ConfigError::MissingToken));
    }

    #[test]
    fn test_polling_defaults() {
        let config = load(&[(TOKEN_VAR, "123:abc")]).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.mode, Mode::Polling);
        assert_eq!(config.pairing, PairingMode::Positional);
        assert!(config.work_dir.ends_with("linkbot"));
    }

    #[test]
    fn test_fallback_token() {
        let config = load(&[(FALLBACK_TOKEN_VAR, "456:def")]).unwrap();
        assert_eq!(config.token, "456:def");
    }

    #[test]
    fn test_webhook_mode() {
        let config = load(&[
            (TOKEN_VAR, "123:abc"),
            (HOSTNAME_VAR, "linkbot.onrender.com"),
            (PORT_VAR, "10000"),
        ])
        .unwrap();
        assert_eq!(
            config.mode,
            Mode::Webhook {
                listen: "0.0.0.0:10000".parse().unwrap(),
                url: "https://linkbot.onrender.com/123:abc".to_string(),
            }
        );
    }

    #[test]
    fn test_webhook_default_port() {
        let config = load(&[(TOKEN_VAR, "t"), (HOSTNAME_VAR, "example.org")]).unwrap();
        match config.mode {
            Mode::Webhook { listen, .. } => assert_eq!(listen.port(), DEFAULT_PORT),
            Mode::Polling => panic!("expected webhook mode"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let result = load(&[(TOKEN_VAR, "t"), (HOSTNAME_VAR, "h"), (PORT_VAR, "http")]);
        assert_eq!(result, Err(ConfigError::InvalidPort("http".to_string())));
    }

    #[test]
    fn test_pairing_and_work_dir() {
        let config = load(&[
            (TOKEN_VAR, "t"),
            (PAIRING_VAR, "proximity"),
            (WORK_DIR_VAR, "/var/tmp/links"),
        ])
        .unwrap();
        assert_eq!(config.pairing, PairingMode::Proximity);
        assert_eq!(config.work_dir, PathBuf::from("/var/tmp/links"));

        assert!(matches!(
            load(&[(TOKEN_VAR, "t"), (PAIRING_VAR, "fuzzy")]),
            Err(ConfigError::Pairing(_))
        ));
    }
}
