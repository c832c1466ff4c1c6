//! Gregorian calendar in a fixed IANA time zone.

use std::ops::Range;
use std::str::FromStr;

use chrono::{
    Datelike, Days, LocalResult, Months, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use useful_core::config::{CalendarConfig, WeekStart};
use useful_core::constants::DAYS_PER_WEEK;
use useful_core::error::CoreError;

use super::{Calendar, Components, Unit};
use crate::Instant;
use crate::error::{TemporalError, TemporalResult};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Proleptic Gregorian calendar evaluated in a single time zone.
///
/// Week numbering follows the configured first weekday and the minimum number
/// of days the first week of a year or month must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedCalendar {
    tz: Tz,
    first_weekday: Weekday,
    minimum_days_in_first_week: u8,
}

impl ZonedCalendar {
    /// Weeks start on Sunday and any partial first week counts as week 1.
    #[must_use]
    pub const fn gregorian(tz: Tz) -> Self {
        Self {
            tz,
            first_weekday: Weekday::Sun,
            minimum_days_in_first_week: 1,
        }
    }

    /// ISO 8601 weeks: Monday first, week 1 holds at least four days.
    #[must_use]
    pub const fn iso8601(tz: Tz) -> Self {
        Self {
            tz,
            first_weekday: Weekday::Mon,
            minimum_days_in_first_week: 4,
        }
    }

    /// ## Errors
    /// Returns an error if `minimum_days_in_first_week` is not between 1 and 7.
    pub fn new(tz: Tz, first_weekday: Weekday, minimum_days_in_first_week: u8) -> TemporalResult<Self> {
        if !(1..=DAYS_PER_WEEK).contains(&minimum_days_in_first_week) {
            return Err(CoreError::InvalidInput(format!(
                "minimum days in first week must be between 1 and {DAYS_PER_WEEK}, got {minimum_days_in_first_week}"
            ))
            .into());
        }
        Ok(Self {
            tz,
            first_weekday,
            minimum_days_in_first_week,
        })
    }

    /// ## Summary
    /// Builds a calendar from the `calendar` configuration section.
    ///
    /// ## Errors
    /// Returns `TemporalError::UnknownTimezone` if the zone name is not a known
    /// IANA identifier, or a validation error for the week settings.
    pub fn from_config(config: &CalendarConfig) -> TemporalResult<Self> {
        let tz = Tz::from_str(config.timezone.trim())
            .map_err(|_e| TemporalError::UnknownTimezone(config.timezone.clone()))?;
        Self::new(
            tz,
            weekday_from(config.first_weekday),
            config.minimum_days_in_first_week,
        )
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    #[must_use]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    #[must_use]
    pub const fn minimum_days_in_first_week(&self) -> u8 {
        self.minimum_days_in_first_week
    }

    /// Wall-clock date and time of `instant` in this calendar's zone.
    #[must_use]
    pub fn local(&self, instant: Instant) -> NaiveDateTime {
        instant.as_utc().with_timezone(&self.tz).naive_local()
    }

    /// ## Summary
    /// Resolves a wall-clock time in this calendar's zone to an instant.
    ///
    /// Ambiguous times (DST fold) resolve to the earlier instant. Times inside
    /// a DST gap are moved forward by the length of the gap.
    #[must_use]
    pub fn instant_from_local(&self, local: NaiveDateTime) -> Option<Instant> {
        match self.tz.from_local_datetime(&local) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                Some(Instant::from(dt.with_timezone(&Utc)))
            }
            LocalResult::None => {
                // Interpret with the offset in force before the gap.
                let before = local.checked_sub_signed(TimeDelta::days(1))?;
                let offset = self.tz.offset_from_utc_datetime(&before).fix();
                let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(
                    offset.local_minus_utc(),
                )))?;
                tracing::debug!(%local, tz = %self.tz, "Local time falls in a DST gap, moving forward");
                Some(Instant::from(utc.and_utc()))
            }
        }
    }

    /// Days between `weekday` and the start of the week containing it.
    fn days_into_week(&self, weekday: Weekday) -> i64 {
        let start = i64::from(self.first_weekday.num_days_from_sunday());
        let day = i64::from(weekday.num_days_from_sunday());
        (day - start).rem_euclid(7)
    }

    /// Whether a first partial week whose first day is `offset` days into the
    /// week holds enough days to count as week 1.
    fn counts_as_first_week(&self, offset: i64) -> bool {
        7 - offset >= i64::from(self.minimum_days_in_first_week)
    }

    /// Week number of `date` counted from `start`, which may yield 0.
    fn week_number(&self, date: NaiveDate, start: NaiveDate) -> i64 {
        let offset = self.days_into_week(start.weekday());
        let days = date.signed_duration_since(start).num_days();
        (days + offset) / 7 + i64::from(self.counts_as_first_week(offset))
    }

    fn week_of_month(&self, date: NaiveDate) -> i64 {
        date.with_day(1)
            .map_or(0, |first| self.week_number(date, first))
    }

    fn week_of_year(&self, date: NaiveDate) -> i64 {
        let Some(jan1) = NaiveDate::from_ymd_opt(date.year(), 1, 1) else {
            return 0;
        };

        // Late December days may already belong to week 1 of the next year.
        let next_week_one = date
            .year()
            .checked_add(1)
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(|next_jan1| {
                let offset = self.days_into_week(next_jan1.weekday());
                if self.counts_as_first_week(offset) {
                    next_jan1.checked_sub_days(Days::new(offset.unsigned_abs()))
                } else {
                    None
                }
            });
        if next_week_one.is_some_and(|week_start| date >= week_start) {
            return 1;
        }

        let week = self.week_number(date, jan1);
        if week > 0 {
            return week;
        }

        // Week 0 is the last week of the previous year.
        jan1.pred_opt()
            .and_then(|dec31| {
                NaiveDate::from_ymd_opt(dec31.year(), 1, 1).map(|start| self.week_number(dec31, start))
            })
            .unwrap_or(week)
    }

    fn add_months(&self, instant: Instant, months: i64) -> Option<Instant> {
        let local = self.local(instant);
        let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        let shifted = if months >= 0 {
            local.checked_add_months(count)?
        } else {
            local.checked_sub_months(count)?
        };
        self.instant_from_local(shifted)
    }

    fn add_days(&self, instant: Instant, days: i64) -> Option<Instant> {
        let local = self.local(instant);
        let count = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            local.checked_add_days(count)?
        } else {
            local.checked_sub_days(count)?
        };
        self.instant_from_local(shifted)
    }
}

impl Calendar for ZonedCalendar {
    fn decompose(&self, instant: Instant) -> Components {
        let local = self.local(instant);
        let date = local.date();

        Components {
            year: i64::from(local.year()),
            month: i64::from(local.month()),
            day: i64::from(local.day()),
            hour: i64::from(local.hour()),
            minute: i64::from(local.minute()),
            second: i64::from(local.second()),
            nanosecond: i64::from(local.nanosecond()).min(NANOS_PER_SECOND - 1),
            weekday: i64::from(local.weekday().num_days_from_sunday()) + 1,
            week_of_year: self.week_of_year(date),
            week_of_month: self.week_of_month(date),
        }
    }

    fn range(&self, field: Unit, within: Unit, instant: Instant) -> Option<Range<i64>> {
        match (field, within) {
            (Unit::Month, Unit::Year) => Some(1..self.months_in_year() + 1),
            (Unit::Day, Unit::Month) => {
                let local = self.local(instant);
                let days = days_in_month(local.year(), local.month())?;
                Some(1..days + 1)
            }
            (Unit::Day, Unit::Year) => {
                let year = self.local(instant).year();
                let days = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                    366
                } else {
                    365
                };
                Some(1..days + 1)
            }
            (Unit::Weekday, Unit::WeekOfYear | Unit::WeekOfMonth) => Some(1..8),
            (Unit::Hour, Unit::Day) => Some(0..24),
            (Unit::Minute, Unit::Hour) | (Unit::Second, Unit::Minute) => Some(0..60),
            (Unit::Nanosecond, Unit::Second) => Some(0..NANOS_PER_SECOND),
            _ => None,
        }
    }

    fn add(&self, instant: Instant, amount: i64, unit: Unit) -> Option<Instant> {
        tracing::trace!(%instant, amount, %unit, "Calendar add");

        match unit {
            Unit::Year => self.add_months(instant, amount.checked_mul(12)?),
            Unit::Month => self.add_months(instant, amount),
            Unit::Day | Unit::Weekday => self.add_days(instant, amount),
            Unit::WeekOfYear | Unit::WeekOfMonth => self.add_days(instant, amount.checked_mul(7)?),
            Unit::Hour => instant.checked_add(TimeDelta::try_hours(amount)?),
            Unit::Minute => instant.checked_add(TimeDelta::try_minutes(amount)?),
            Unit::Second => instant.checked_add(TimeDelta::try_seconds(amount)?),
            Unit::Nanosecond => instant.checked_add(TimeDelta::nanoseconds(amount)),
        }
    }
}

fn days_in_month(year: i32, month: u32) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.signed_duration_since(first).num_days())
}

const fn weekday_from(start: WeekStart) -> Weekday {
    match start {
        WeekStart::Sunday => Weekday::Sun,
        WeekStart::Monday => Weekday::Mon,
        WeekStart::Tuesday => Weekday::Tue,
        WeekStart::Wednesday => Weekday::Wed,
        WeekStart::Thursday => Weekday::Thu,
        WeekStart::Friday => Weekday::Fri,
        WeekStart::Saturday => Weekday::Sat,
    }
}
