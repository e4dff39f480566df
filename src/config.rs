//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FILEPATH_ROOT: &str = "./app";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got `{0}`")]
    InvalidPort(String),
}

/// Deployment mode. Only [`Platform::Dev`] may wipe stored data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Platform {
    Dev,
    #[default]
    Production,
}

impl Platform {
    /// `"dev"` is dev mode. Anything else, including nothing, is production.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dev") => Self::Dev,
            _ => Self::Production,
        }
    }

    pub fn is_dev(self) -> bool {
        self == Self::Dev
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres connection string. `None` runs against the in-memory store.
    pub database_url: Option<String>,
    pub platform: Platform,
    pub port: u16,
    /// Directory served under `/app/`.
    pub filepath_root: PathBuf,
}

impl Config {
    /// Reads `DATABASE_URL`, `PLATFORM`, `PORT` and `FILEPATH_ROOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(p) if p != 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").filter(|s| !s.is_empty()),
            platform: Platform::parse(get("PLATFORM").as_deref()),
            port,
            filepath_root: get("FILEPATH_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILEPATH_ROOT)),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.platform, Platform::Production);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.filepath_root, PathBuf::from("./app"));
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_everything() {
        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/chirpy"),
            ("PLATFORM", "dev"),
            ("PORT", "9000"),
            ("FILEPATH_ROOT", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/chirpy"));
        assert!(cfg.platform.is_dev());
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.filepath_root, PathBuf::from("/srv/www"));
    }

    #[test]
    fn platform_other_than_dev_is_production() {
        assert_eq!(Platform::parse(Some("DEV")), Platform::Production);
        assert_eq!(Platform::parse(Some("prod")), Platform::Production);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
        assert!(Config::from_lookup(lookup(&[("PORT", "0")])).is_err());
    }
}
