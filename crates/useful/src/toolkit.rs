use useful_core::config::Settings;
use useful_temporal::parse;
use useful_temporal::{FieldAccessor, Instant, TemporalResult, ZonedCalendar};
use useful_text::NumberFormat;
use useful_text::inspect;

/// Capabilities built once from [`Settings`] and shared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolkit {
    calendar: ZonedCalendar,
    number_format: NumberFormat,
}

impl Toolkit {
    #[must_use]
    pub const fn new(calendar: ZonedCalendar, number_format: NumberFormat) -> Self {
        Self {
            calendar,
            number_format,
        }
    }

    /// ## Summary
    /// Builds the configured calendar and number format.
    ///
    /// ## Errors
    /// Returns an error if the time zone is unknown or a section fails validation.
    pub fn from_settings(settings: &Settings) -> TemporalResult<Self> {
        let calendar = ZonedCalendar::from_config(&settings.calendar)?;
        let number_format = NumberFormat::from_config(&settings.text)?;

        tracing::debug!(
            tz = %calendar.timezone(),
            decimal_separator = %number_format.decimal_separator(),
            "Toolkit configured"
        );

        Ok(Self::new(calendar, number_format))
    }

    #[must_use]
    pub const fn calendar(&self) -> &ZonedCalendar {
        &self.calendar
    }

    #[must_use]
    pub const fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    #[must_use]
    pub const fn fields(&self) -> FieldAccessor<'_, ZonedCalendar> {
        FieldAccessor::new(&self.calendar)
    }

    #[must_use]
    pub fn parse_date(&self, s: &str) -> Option<Instant> {
        parse::parse_date(s, &self.calendar)
    }

    #[must_use]
    pub fn parse_date_time(&self, s: &str) -> Option<Instant> {
        parse::parse_date_time(s, &self.calendar)
    }

    #[must_use]
    pub fn to_float(&self, s: &str) -> Option<f64> {
        inspect::to_float(s, &self.number_format)
    }
}
