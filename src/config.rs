use std::env;
use config::{Environment, File};
use serde::Deserialize;
use thiserror::Error;
use crate::logging::LogLevel;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("No search API bearer tokens configured (set BEARER_TOKENS1.. or TWEETPULSE_BEARER_TOKENS)")]
    NoCredentials,

    #[error("max_results must be between 10 and 100, got {0}")]
    InvalidMaxResults(u32),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default)]
    pub bearer_tokens: Vec<String>,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_web_host")]
    pub web_host: String,
    #[serde(default = "default_web_port")]
    pub web_port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_database_path() -> String {
    "tweetpulse.db".to_string()
}

fn default_search_url() -> String {
    "https://api.twitter.com/2/tweets/search/recent".to_string()
}

fn default_max_results() -> u32 {
    25
}

fn default_language() -> String {
    "en".to_string()
}

fn default_web_host() -> String {
    "127.0.0.1".to_string()
}

fn default_web_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "templates".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: default_database_path(),
            bearer_tokens: Vec::new(),
            search_url: default_search_url(),
            max_results: default_max_results(),
            language: default_language(),
            web_host: default_web_host(),
            web_port: default_web_port(),
            static_dir: default_static_dir(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    const CONFIG_PATH: &'static str = "tweetpulse";
    const ENV_PREFIX: &'static str = "TWEETPULSE";
    const NUMBERED_TOKEN_VAR: &'static str = "BEARER_TOKENS";

    /// Loads `.env`, then `tweetpulse.toml` (optional), then `TWEETPULSE_*`
    /// variables, then the numbered `BEARER_TOKENS{n}` variables.
    pub fn new() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(File::with_name(Self::CONFIG_PATH).required(false))
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("bearer_tokens"),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;

        if let Ok(path) = env::var("DATABASE_PATH") {
            config.database_path = path;
        }
        config.bearer_tokens.extend(Self::numbered_tokens(|key| env::var(key).ok()));
        config.normalize_tokens();

        Ok(config)
    }

    /// Reads `BEARER_TOKENS1`, `BEARER_TOKENS2`, ... until the first gap.
    fn numbered_tokens<F>(lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        (1..)
            .map(|i| lookup(&format!("{}{}", Self::NUMBERED_TOKEN_VAR, i)))
            .take_while(Option::is_some)
            .flatten()
            .collect()
    }

    fn normalize_tokens(&mut self) {
        self.bearer_tokens = self.bearer_tokens
            .iter()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bearer_tokens.is_empty() {
            return Err(ConfigError::NoCredentials);
        }
        if !(10..=100).contains(&self.max_results) {
            return Err(ConfigError::InvalidMaxResults(self.max_results));
        }
        Ok(())
    }

    pub fn web_address(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn numbered_tokens_stop_at_first_gap() {
        let vars: HashMap<&str, &str> = [
            ("BEARER_TOKENS1", "one"),
            ("BEARER_TOKENS2", "two"),
            ("BEARER_TOKENS4", "four"),
        ].into_iter().collect();

        let tokens = Config::numbered_tokens(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(tokens, vec!["one", "two"]);
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let mut config = Config {
            bearer_tokens: vec![" a ".into(), "".into(), "   ".into(), "b".into()],
            ..Config::default()
        };
        config.normalize_tokens();
        assert_eq!(config.bearer_tokens, vec!["a", "b"]);
    }

    #[test]
    fn validate_requires_credentials() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::NoCredentials)));

        let config = Config { bearer_tokens: vec!["t".into()], ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_page_size() {
        let config = Config {
            bearer_tokens: vec!["t".into()],
            max_results: 500,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMaxResults(500))));
    }

    #[test]
    fn defaults_match_search_api_usage() {
        let config = Config::default();
        assert_eq!(config.max_results, 25);
        assert_eq!(config.language, "en");
        assert_eq!(config.web_address(), "127.0.0.1:5000");
    }
}
