//! Calendar capability consumed by the field accessors.
//!
//! ## Summary
//! A [`Calendar`] turns an [`Instant`] into named fields, reports which values
//! a field may take in the context of a particular instant, and adds an amount
//! of some unit to an instant. Nothing else in this crate does calendar math.

use std::fmt;
use std::ops::Range;

use crate::Instant;

mod zoned;


pub use zoned::ZonedCalendar;

/// Calendar units, used both as decomposed fields and as addition units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Nanosecond,
    Weekday,
    WeekOfYear,
    WeekOfMonth,
}

impl Unit {
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
            Self::Weekday => "weekday",
            Self::WeekOfYear => "week of year",
            Self::WeekOfMonth => "week of month",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An instant broken down into calendar fields.
///
/// `weekday` runs from 1 (Sunday) to 7 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
    pub weekday: i64,
    pub week_of_year: i64,
    pub week_of_month: i64,
}

impl Components {
    #[must_use]
    pub const fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year => self.year,
            Unit::Month => self.month,
            Unit::Day => self.day,
            Unit::Hour => self.hour,
            Unit::Minute => self.minute,
            Unit::Second => self.second,
            Unit::Nanosecond => self.nanosecond,
            Unit::Weekday => self.weekday,
            Unit::WeekOfYear => self.week_of_year,
            Unit::WeekOfMonth => self.week_of_month,
        }
    }
}

/// Calendar arithmetic over instants.
///
/// Implementations are passed explicitly to every accessor; there is no
/// process-wide default calendar.
pub trait Calendar {
    /// Decomposes `instant` into calendar fields.
    fn decompose(&self, instant: Instant) -> Components;

    /// Half-open range of values `field` can take inside the `within` unit
    /// containing `instant`, or `None` if the pair is not supported.
    fn range(&self, field: Unit, within: Unit, instant: Instant) -> Option<Range<i64>>;

    /// Adds `amount` of `unit` to `instant`; `None` if the result is not representable.
    fn add(&self, instant: Instant, amount: i64, unit: Unit) -> Option<Instant>;

    /// Number of months in a year, used for quarter computation.
    fn months_in_year(&self) -> i64 {
        12
    }
}

impl<C: Calendar + ?Sized> Calendar for &C {
    fn decompose(&self, instant: Instant) -> Components {
        (**self).decompose(instant)
    }

    fn range(&self, field: Unit, within: Unit, instant: Instant) -> Option<Range<i64>> {
        (**self).range(field, within, instant)
    }

    fn add(&self, instant: Instant, amount: i64, unit: Unit) -> Option<Instant> {
        (**self).add(instant, amount, unit)
    }

    fn months_in_year(&self) -> i64 {
        (**self).months_in_year()
    }
}
