use std::env;

use thiserror::Error;

pub const DEFAULT_SHEET_ID: &str = "1vxVGzTkjGr0rzm0rr70HnOIE6BsThAiCooCPzYFbQvw";
pub const DEFAULT_SHEET_NAME: &str = "Oasis Song Data";
pub const DEFAULT_SHEET_RANGE: &str = "A2:E55";
pub const DEFAULT_FALLBACK_TITLE: &str = "Wonderwall";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub sheet_id: String,
    pub sheet_name: String,
    pub range: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sheet: SheetConfig,
    pub spotify: Option<SpotifyCredentials>,
    pub fallback_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: SheetConfig {
                sheet_id: DEFAULT_SHEET_ID.to_string(),
                sheet_name: DEFAULT_SHEET_NAME.to_string(),
                range: DEFAULT_SHEET_RANGE.to_string(),
            },
            spotify: None,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up
    /// a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default),
            }
        };

        let sheet = SheetConfig {
            sheet_id: read("SONGLE_SHEET_ID", defaults.sheet.sheet_id)?,
            sheet_name: read("SONGLE_SHEET_NAME", defaults.sheet.sheet_name)?,
            range: read("SONGLE_SHEET_RANGE", defaults.sheet.range)?,
        };
        let fallback_title = read("SONGLE_FALLBACK_TITLE", defaults.fallback_title)?;

        let spotify = match (
            lookup("SPOTIFY_CLIENT_ID").filter(|v| !v.trim().is_empty()),
            lookup("SPOTIFY_CLIENT_SECRET").filter(|v| !v.trim().is_empty()),
        ) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id: client_id.trim().to_string(),
                client_secret: client_secret.trim().to_string(),
            }),
            _ => None,
        };

        Ok(Self {
            sheet,
            spotify,
            fallback_title,
        })
    }
}
