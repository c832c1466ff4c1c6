//! Calendar field access over opaque instants.
//!
//! ## Overview
//!
//! An [`Instant`] is a bare point in time. Calendar fields (year, month, day,
//! hour, ...) only exist relative to a [`Calendar`], which is always passed in
//! explicitly. [`FieldAccessor`] reads those fields and changes them by asking
//! the calendar to add the difference between the new and the current value,
//! so month changes on the 31st clamp to the end of the shorter month instead
//! of overflowing into the next one.
//!
//! ```rust
//! use chrono_tz::Tz;
//! use useful_temporal::{FieldAccessor, Instant, ZonedCalendar};
//!
//! let calendar = ZonedCalendar::gregorian(Tz::UTC);
//! let fields = FieldAccessor::new(&calendar);
//!
//! // 2023-01-31T00:00:00Z
//! let mut instant = Instant::from_unix(1_675_123_200, 0).unwrap();
//! fields.set_month(&mut instant, 2);
//! assert_eq!(fields.day(instant), 28);
//!
//! // Out-of-range values are ignored.
//! fields.set_day(&mut instant, 31);
//! assert_eq!(fields.day(instant), 28);
//! ```
//!
//! ## Submodules
//!
//! - [`calendar`] - the `Calendar` capability and the zoned Gregorian implementation
//! - [`field`] - field accessors
//! - [`parse`] - date string parsing

pub mod calendar;
pub mod error;
pub mod field;
mod instant;
pub mod parse;

pub use calendar::{Calendar, Components, Unit, ZonedCalendar};
pub use error::{TemporalError, TemporalResult};
pub use field::{Field, FieldAccessor};
pub use instant::Instant;
