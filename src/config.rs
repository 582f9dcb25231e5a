use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{configuration_error, Error};
use crate::external::currency::Locale;

pub const LOCALE_VAR: &str = "RIDESHARE_LOCALE";
pub const OUTPUT_VAR: &str = "RIDESHARE_OUTPUT";
pub const LOG_LEVEL_VAR: &str = "RIDESHARE_LOG_LEVEL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(configuration_error(format!(
                "{} must be 'text' or 'json', got '{}'",
                OUTPUT_VAR,
                s.trim()
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub locale: Locale,
    pub output: OutputFormat,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            output: OutputFormat::default(),
            log_level: Level::WARN,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        let mut values = Vec::new();

        for key in [LOCALE_VAR, OUTPUT_VAR, LOG_LEVEL_VAR] {
            match env::var(key) {
                Ok(value) => values.push((key, value)),
                Err(env::VarError::NotPresent) => {}
                Err(err) => return Err(err.into()),
            }
        }

        Self::from_lookup(|key: &str| {
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(locale) = lookup(LOCALE_VAR) {
            settings.locale = locale.parse()?;
        }

        if let Some(output) = lookup(OUTPUT_VAR) {
            settings.output = output.parse()?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            settings.log_level = level.trim().parse().map_err(|_| {
                configuration_error(format!(
                    "{} must be one of error, warn, info, debug, trace; got '{}'",
                    LOG_LEVEL_VAR,
                    level.trim()
                ))
            })?;
        }

        Ok(settings)
    }
}
