use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// An immutable point in time with nanosecond precision.
///
/// Carries no calendar or time zone; field values only exist relative to a
/// [`Calendar`](crate::Calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub const UNIX_EPOCH: Self = Self(DateTime::UNIX_EPOCH);

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Builds an instant from seconds and nanoseconds since the Unix epoch.
    ///
    /// Returns `None` if the value is out of range or `nanos` is not below one second.
    #[must_use]
    pub fn from_unix(seconds: i64, nanos: u32) -> Option<Self> {
        if nanos >= 1_000_000_000 {
            return None;
        }
        DateTime::from_timestamp(seconds, nanos).map(Self)
    }

    #[must_use]
    pub const fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub const fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    #[must_use]
    pub fn subsec_nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    /// Elapsed-time addition; `None` on overflow.
    #[must_use]
    pub fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(value: Instant) -> Self {
        value.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
