//! Settings management module
//!
//! Reads generator and session settings from environment variables,
//! falling back to built-in defaults.

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::types::GenerationOptions;

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LABEL: &str = "Unspecified site";
/// Day/month/year, the single display locale.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub const ENV_DEFAULT_LENGTH: &str = "PWD_DEFAULT_LENGTH";
pub const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub const ENV_MAX_LENGTH: &str = "PWD_MAX_LENGTH";
pub const ENV_DEFAULT_LABEL: &str = "PWD_DEFAULT_LABEL";
pub const ENV_DATE_FORMAT: &str = "PWD_DATE_FORMAT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("Invalid length bounds: min {min}, max {max}")]
    InvalidBounds { min: usize, max: usize },
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),
}

/// Generator and session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Length offered before the user moves the slider.
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Label stored when an entry is saved without one.
    pub default_label: String,
    /// `chrono` format string for entry dates.
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            default_label: DEFAULT_LABEL.to_string(),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_DEFAULT_LENGTH` (default 16)
    /// - `PWD_MIN_LENGTH` (default 4)
    /// - `PWD_MAX_LENGTH` (default 64)
    /// - `PWD_DEFAULT_LABEL` (default `Unspecified site`)
    /// - `PWD_DATE_FORMAT` (default `%d/%m/%Y`)
    ///
    /// Unset or empty variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A length variable is not a non-negative integer
    /// - `min` is zero or greater than `max`
    /// - The date format has an unknown strftime specifier
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let min_length = read_usize(ENV_MIN_LENGTH)?.unwrap_or(defaults.min_length);
        let max_length = read_usize(ENV_MAX_LENGTH)?.unwrap_or(defaults.max_length);

        if min_length == 0 || min_length > max_length {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Settings rejected: length bounds {}..={}",
                min_length,
                max_length
            );
            return Err(ConfigError::InvalidBounds {
                min: min_length,
                max: max_length,
            });
        }

        let default_length = read_usize(ENV_DEFAULT_LENGTH)?
            .unwrap_or(defaults.default_length)
            .clamp(min_length, max_length);

        let date_format = read_string(ENV_DATE_FORMAT).unwrap_or(defaults.date_format);
        if !is_valid_date_format(&date_format) {
            #[cfg(feature = "tracing")]
            tracing::error!("Settings rejected: date format {:?}", date_format);
            return Err(ConfigError::InvalidDateFormat(date_format));
        }

        let settings = Settings {
            default_length,
            min_length,
            max_length,
            default_label: read_string(ENV_DEFAULT_LABEL).unwrap_or(defaults.default_label),
            date_format,
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Settings loaded: length {} in {}..={}",
            settings.default_length,
            settings.min_length,
            settings.max_length
        );

        Ok(settings)
    }

    /// Brings a requested length within the configured bounds.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_length, self.max_length)
    }

    /// Options with every class selected and the default length.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions::all(self.default_length)
    }
}

/// `true` if every specifier in `format` is one `chrono` can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn read_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_usize(key: &'static str) -> Result<Option<usize>, ConfigError> {
    match read_string(key) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
