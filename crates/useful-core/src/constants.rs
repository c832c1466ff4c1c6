/// Prefix for environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "USEFUL";

/// Separator between nested keys in environment variable names,
/// e.g. `USEFUL_CALENDAR__TIMEZONE`.
pub const ENV_KEY_SEPARATOR: &str = "__";

pub const CONFIG_FILE_STEM: &str = "useful";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DECIMAL_SEPARATOR: &str = ".";

/// Upper bound accepted for a week's minimum day count (a full week).
pub const DAYS_PER_WEEK: u8 = 7;
