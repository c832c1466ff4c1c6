//! Component-wise get/set of calendar fields on an [`Instant`].
//!
//! ## Summary
//! Setters never overwrite a field directly. They validate the new value
//! against the range the calendar reports for the *current* instant, compute
//! the difference to the current value in the field's own unit, and ask the
//! calendar to add that difference. Anything the calendar cannot do leaves
//! the instant as it was.
//!
//! ## Failure policy
//! `set`/`set_*` and `with` ignore invalid values silently (logged at
//! `debug`). `try_set` reports why a value was rejected.

use std::fmt;

use crate::Instant;
use crate::calendar::{Calendar, Unit};
use crate::error::{TemporalError, TemporalResult};

#[cfg(test)]
mod tests;

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Settable calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Nanosecond,
    Millisecond,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Nanosecond,
        Self::Millisecond,
    ];

    /// Calendar unit the field is read from and added in.
    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Self::Year => Unit::Year,
            Self::Month => Unit::Month,
            Self::Day => Unit::Day,
            Self::Hour => Unit::Hour,
            Self::Minute => Unit::Minute,
            Self::Second => Unit::Second,
            Self::Nanosecond | Self::Millisecond => Unit::Nanosecond,
        }
    }

    /// Unit whose range bounds this field, `None` for the unbounded year.
    #[must_use]
    pub const fn container(self) -> Option<Unit> {
        match self {
            Self::Year => None,
            Self::Month => Some(Unit::Year),
            Self::Day => Some(Unit::Month),
            Self::Hour => Some(Unit::Day),
            Self::Minute => Some(Unit::Hour),
            Self::Second => Some(Unit::Minute),
            Self::Nanosecond | Self::Millisecond => Some(Unit::Second),
        }
    }

    /// Number of `unit()` steps in one step of this field.
    #[must_use]
    pub const fn scale(self) -> i64 {
        match self {
            Self::Millisecond => NANOS_PER_MILLI,
            _ => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Nanosecond => "nanosecond",
            Self::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level view of instants under a borrowed calendar.
#[derive(Debug)]
pub struct FieldAccessor<'a, C: Calendar + ?Sized> {
    calendar: &'a C,
}

impl<C: Calendar + ?Sized> Clone for FieldAccessor<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Calendar + ?Sized> Copy for FieldAccessor<'_, C> {}

macro_rules! field_accessors {
    ($($field:ident: $get:ident, $set:ident;)*) => {
        $(
            #[must_use]
            pub fn $get(&self, instant: Instant) -> i64 {
                self.get(instant, Field::$field)
            }

            pub fn $set(&self, instant: &mut Instant, value: i64) {
                self.set(instant, Field::$field, value);
            }
        )*
    };
}

impl<'a, C: Calendar + ?Sized> FieldAccessor<'a, C> {
    #[must_use]
    pub const fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    #[must_use]
    pub const fn calendar(&self) -> &'a C {
        self.calendar
    }

    /// Current value of `field` for `instant`.
    #[must_use]
    pub fn get(&self, instant: Instant, field: Field) -> i64 {
        let parts = self.calendar.decompose(instant);
        parts.get(field.unit()) / field.scale()
    }

    /// ## Summary
    /// Returns `instant` with `field` changed to `value`.
    ///
    /// ## Errors
    /// - `TemporalError::FieldOutOfRange` if `value` is outside the range the
    ///   calendar allows for `field` at `instant` (years must be positive).
    /// - `TemporalError::CalendarOverflow` if the calendar cannot apply the
    ///   resulting delta.
    pub fn try_set(&self, instant: Instant, field: Field, value: i64) -> TemporalResult<Instant> {
        let out_of_range = || TemporalError::FieldOutOfRange { field, value };

        let target = value.checked_mul(field.scale()).ok_or_else(out_of_range)?;
        let valid = match field.container() {
            None => target > 0,
            Some(within) => self
                .calendar
                .range(field.unit(), within, instant)
                .is_some_and(|range| range.contains(&target)),
        };
        if !valid {
            return Err(out_of_range());
        }

        let current = self.calendar.decompose(instant).get(field.unit());
        let delta = target
            .checked_sub(current)
            .ok_or(TemporalError::CalendarOverflow { field, delta: i64::MAX })?;
        if delta == 0 {
            return Ok(instant);
        }

        self.calendar
            .add(instant, delta, field.unit())
            .ok_or(TemporalError::CalendarOverflow { field, delta })
    }

    /// Like [`FieldAccessor::try_set`], returning `instant` unchanged on failure.
    #[must_use]
    pub fn with(&self, instant: Instant, field: Field, value: i64) -> Instant {
        match self.try_set(instant, field, value) {
            Ok(updated) => updated,
            Err(e) => {
                tracing::debug!(error = %e, %instant, "Ignoring field update");
                instant
            }
        }
    }

    /// Sets `field` on `instant` in place; invalid values are ignored.
    pub fn set(&self, instant: &mut Instant, field: Field, value: i64) {
        *instant = self.with(*instant, field, value);
    }

    field_accessors! {
        Year: year, set_year;
        Month: month, set_month;
        Day: day, set_day;
        Hour: hour, set_hour;
        Minute: minute, set_minute;
        Second: second, set_second;
        Nanosecond: nanosecond, set_nanosecond;
        Millisecond: millisecond, set_millisecond;
    }

    /// 1 (Sunday) through 7 (Saturday).
    #[must_use]
    pub fn weekday(&self, instant: Instant) -> i64 {
        self.calendar.decompose(instant).weekday
    }

    #[must_use]
    pub fn week_of_year(&self, instant: Instant) -> i64 {
        self.calendar.decompose(instant).week_of_year
    }

    #[must_use]
    pub fn week_of_month(&self, instant: Instant) -> i64 {
        self.calendar.decompose(instant).week_of_month
    }

    /// Quarter of the year, `ceil(month / (months_in_year / 4))`.
    #[must_use]
    pub fn quarter(&self, instant: Instant) -> i64 {
        let months = self.calendar.months_in_year();
        if months <= 0 {
            return 0;
        }
        let month = self.calendar.decompose(instant).month;
        (month * 4 + months - 1) / months
    }
}
