//! Parsing wall-clock date strings into instants.
//!
//! Strings are read as local times in the calendar's zone and resolved the
//! same way calendar arithmetic resolves them (see
//! [`ZonedCalendar::instant_from_local`]).

use chrono::{NaiveDate, NaiveDateTime};

use crate::Instant;
use crate::calendar::ZonedCalendar;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// "2007-06-29" at local midnight.
#[must_use]
pub fn parse_date(s: &str, calendar: &ZonedCalendar) -> Option<Instant> {
    let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()?;
    calendar.instant_from_local(date.and_hms_opt(0, 0, 0)?)
}

/// "2007-06-29 14:23:09" as a local time.
#[must_use]
pub fn parse_date_time(s: &str, calendar: &ZonedCalendar) -> Option<Instant> {
    let local = NaiveDateTime::parse_from_str(s.trim(), DATE_TIME_FORMAT).ok()?;
    calendar.instant_from_local(local)
}

/// Parses `s` with a `strftime`-style `format`.
///
/// Formats without a time of day resolve to local midnight.
#[must_use]
pub fn parse_with_format(s: &str, format: &str, calendar: &ZonedCalendar) -> Option<Instant> {
    let local = match NaiveDateTime::parse_from_str(s, format) {
        Ok(local) => local,
        Err(_) => NaiveDate::parse_from_str(s, format).ok()?.and_hms_opt(0, 0, 0)?,
    };
    calendar.instant_from_local(local)
}
