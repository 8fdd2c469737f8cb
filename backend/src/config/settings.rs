use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set when CONTACT_TO is set")]
    Missing(&'static str),
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    BindAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// `None` means submissions are only logged.
    pub smtp: Option<SmtpConfig>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::BindAddr(bind_raw.clone()))?;

        let static_dir = PathBuf::from(
            get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
        );

        let smtp = match get("CONTACT_TO") {
            Some(to) => {
                let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
                Some(SmtpConfig {
                    host: require("SMTP_HOST")?,
                    username: require("SMTP_USERNAME")?,
                    password: require("SMTP_PASSWORD")?,
                    from: get("CONTACT_FROM").unwrap_or_else(|| to.clone()),
                    to,
                })
            }
            None => None,
        };

        Ok(Config {
            bind_addr,
            static_dir,
            smtp,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}
