//! Configuration management for the contact bot.
//!
//! Every setting is optional and read from the environment (or a `.env`
//! file, if present). With nothing set the bot keeps names case-sensitive and
//! logs only errors.

use crate::error::{ConfigError, ConfigResult};
use std::borrow::Cow;
use std::env;
use std::str::FromStr;

/// How contact names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// `Alice` and `alice` are different contacts.
    #[default]
    CaseSensitive,
    /// Names are lowercased before every store and lookup.
    CaseInsensitive,
}

impl NamePolicy {
    /// Map a name as typed to the key it is stored and looked up under.
    pub fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::CaseSensitive => Cow::Borrowed(name),
            Self::CaseInsensitive => Cow::Owned(name.to_lowercase()),
        }
    }
}

impl FromStr for NamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::CaseSensitive),
            "insensitive" => Ok(Self::CaseInsensitive),
            other => Err(format!(
                "Must be 'sensitive' or 'insensitive', got: {}",
                other
            )),
        }
    }
}

/// Configuration for the contact bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Name comparison policy (default: case-sensitive)
    pub name_policy: NamePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_NAME_CASE`: `sensitive` or `insensitive` (default: "sensitive")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let name_policy = match env::var("CONTACT_NAME_CASE") {
            Ok(val) => val
                .parse::<NamePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_NAME_CASE".to_string(),
                    reason,
                })?,
            Err(_) => NamePolicy::default(),
        };

        Ok(Config {
            log_level,
            name_policy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            name_policy: NamePolicy::default(),
        }
    }
}
