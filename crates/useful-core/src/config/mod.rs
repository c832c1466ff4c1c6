use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, CONFIG_FILE_STEM, DAYS_PER_WEEK, DEFAULT_DECIMAL_SEPARATOR,
    DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE, ENV_KEY_SEPARATOR, ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub text: TextConfig,
    pub logging: LoggingConfig,
}

/// Day a calendar week starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA time zone name, e.g. `Europe/Kyiv`.
    pub timezone: String,
    pub first_weekday: WeekStart,
    /// How many days of a year's (or month's) first partial week must fall
    /// inside it for that week to count as week 1.
    pub minimum_days_in_first_week: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub decimal_separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `useful.toml` into a `Settings`. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_KEY_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        tracing::debug!(file = CONFIG_FILE_NAME, settings = ?settings, "Configuration loaded");

        Ok(settings)
    }

    /// ## Summary
    /// Builds `Settings` from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document does not parse or fails validation.
    pub fn from_toml(document: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.first_weekday", "sunday")?
            .set_default("calendar.minimum_days_in_first_week", 1)?
            .set_default("text.decimal_separator", DEFAULT_DECIMAL_SEPARATOR)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Checks the values `serde` cannot constrain on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        self.calendar.validate()?;
        self.text.validate()
    }
}

impl CalendarConfig {
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the time zone is blank or the minimum
    /// day count is not within a week.
    pub fn validate(&self) -> CoreResult<()> {
        if self.timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "calendar.timezone must not be empty".to_string(),
            ));
        }
        if !(1..=DAYS_PER_WEEK).contains(&self.minimum_days_in_first_week) {
            return Err(CoreError::ConfigError(format!(
                "calendar.minimum_days_in_first_week must be between 1 and {DAYS_PER_WEEK}, got {}",
                self.minimum_days_in_first_week
            )));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            first_weekday: WeekStart::Sunday,
            minimum_days_in_first_week: 1,
        }
    }
}

impl TextConfig {
    /// ## Summary
    /// Returns the configured decimal separator as a single character.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` unless the separator is exactly one character.
    pub fn decimal_separator(&self) -> CoreResult<char> {
        let mut chars = self.decimal_separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() => Ok(c),
            _ => Err(CoreError::ConfigError(format!(
                "text.decimal_separator must be a single non-digit character, got {:?}",
                self.decimal_separator
            ))),
        }
    }

    /// ## Errors
    /// See [`TextConfig::decimal_separator`].
    pub fn validate(&self) -> CoreResult<()> {
        self.decimal_separator().map(|_| ())
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR.to_string(),
        }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
