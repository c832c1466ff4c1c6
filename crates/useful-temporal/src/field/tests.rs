//! Tests for field accessors.

use std::cell::RefCell;
use std::ops::Range;

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::*;
use crate::calendar::{Components, ZonedCalendar};

fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> Instant {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_nano_opt(h, mi, s, nanos))
        .expect("valid fixture date");
    Instant::from(naive.and_utc())
}

fn fixture() -> Instant {
    utc(2024, 1, 31, 10, 20, 30, 123_456_789)
}

const UTC: ZonedCalendar = ZonedCalendar::gregorian(Tz::UTC);

#[test]
fn getters_read_decomposition() {
    let fields = FieldAccessor::new(&UTC);
    let instant = fixture();

    assert_eq!(fields.year(instant), 2024);
    assert_eq!(fields.month(instant), 1);
    assert_eq!(fields.day(instant), 31);
    assert_eq!(fields.hour(instant), 10);
    assert_eq!(fields.minute(instant), 20);
    assert_eq!(fields.second(instant), 30);
    assert_eq!(fields.nanosecond(instant), 123_456_789);
    assert_eq!(fields.millisecond(instant), 123);
    assert_eq!(fields.weekday(instant), 4);
    assert_eq!(fields.week_of_year(instant), 5);
    assert_eq!(fields.week_of_month(instant), 5);
}

#[test]
fn setting_day_changes_only_the_day() {
    let fields = FieldAccessor::new(&UTC);
    let mut instant = fixture();

    fields.set_day(&mut instant, 15);

    assert_eq!(instant, utc(2024, 1, 15, 10, 20, 30, 123_456_789));
}

#[test_log::test]
fn invalid_day_is_ignored() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    for day in [0, 32, -1, i64::MAX] {
        let mut instant = original;
        fields.set_day(&mut instant, day);
        assert_eq!(instant, original, "day {day} should be ignored");
    }

    let mut plain_feb = utc(2023, 2, 10, 0, 0, 0, 0);
    fields.set_day(&mut plain_feb, 29);
    assert_eq!(plain_feb, utc(2023, 2, 10, 0, 0, 0, 0));

    let mut leap_feb = utc(2024, 2, 10, 0, 0, 0, 0);
    fields.set_day(&mut leap_feb, 29);
    assert_eq!(leap_feb, utc(2024, 2, 29, 0, 0, 0, 0));
}

#[test]
fn month_change_rolls_back_to_month_end() {
    let fields = FieldAccessor::new(&UTC);

    let mut leap = fixture();
    fields.set_month(&mut leap, 2);
    assert_eq!(leap, utc(2024, 2, 29, 10, 20, 30, 123_456_789));

    let mut plain = utc(2023, 1, 31, 6, 0, 0, 0);
    fields.set_month(&mut plain, 2);
    assert_eq!(plain, utc(2023, 2, 28, 6, 0, 0, 0));

    let mut backwards = utc(2023, 12, 31, 6, 0, 0, 0);
    fields.set_month(&mut backwards, 9);
    assert_eq!(backwards, utc(2023, 9, 30, 6, 0, 0, 0));
}

#[test]
fn invalid_month_is_ignored() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    assert_eq!(fields.with(original, Field::Month, 0), original);
    assert_eq!(fields.with(original, Field::Month, 13), original);
}

#[test]
fn year_must_be_positive() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    assert_eq!(fields.with(original, Field::Year, 0), original);
    assert_eq!(fields.with(original, Field::Year, -5), original);
    assert_eq!(
        fields.with(original, Field::Year, 2000),
        utc(2000, 1, 31, 10, 20, 30, 123_456_789)
    );

    let mut leap_day = utc(2024, 2, 29, 0, 0, 0, 0);
    fields.set_year(&mut leap_day, 2025);
    assert_eq!(leap_day, utc(2025, 2, 28, 0, 0, 0, 0));
}

#[test]
fn time_fields_validate_their_ranges() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    assert_eq!(
        fields.with(original, Field::Hour, 23),
        utc(2024, 1, 31, 23, 20, 30, 123_456_789)
    );
    assert_eq!(fields.with(original, Field::Hour, 24), original);
    assert_eq!(fields.with(original, Field::Hour, -1), original);

    assert_eq!(
        fields.with(original, Field::Minute, 0),
        utc(2024, 1, 31, 10, 0, 30, 123_456_789)
    );
    assert_eq!(fields.with(original, Field::Minute, 60), original);

    assert_eq!(
        fields.with(original, Field::Second, 59),
        utc(2024, 1, 31, 10, 20, 59, 123_456_789)
    );
    assert_eq!(fields.with(original, Field::Second, 60), original);
}

#[test]
fn sub_second_fields() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    assert_eq!(
        fields.with(original, Field::Nanosecond, 5),
        utc(2024, 1, 31, 10, 20, 30, 5)
    );
    assert_eq!(fields.with(original, Field::Nanosecond, 1_000_000_000), original);

    let mut instant = original;
    fields.set_millisecond(&mut instant, 500);
    assert_eq!(instant, utc(2024, 1, 31, 10, 20, 30, 500_000_000));
    assert_eq!(fields.millisecond(instant), 500);

    fields.set_millisecond(&mut instant, 1000);
    assert_eq!(instant, utc(2024, 1, 31, 10, 20, 30, 500_000_000));
    fields.set_millisecond(&mut instant, i64::MAX);
    assert_eq!(instant, utc(2024, 1, 31, 10, 20, 30, 500_000_000));
}

#[test]
fn setting_current_value_is_identity() {
    let fields = FieldAccessor::new(&UTC);
    // Whole milliseconds, so the millisecond field also reads back exactly.
    let original = utc(2024, 1, 31, 10, 20, 30, 123_000_000);

    for field in Field::ALL {
        let value = fields.get(original, field);
        assert_eq!(fields.try_set(original, field, value), Ok(original), "{field}");
    }
}

#[test]
fn try_set_reports_failures() {
    let fields = FieldAccessor::new(&UTC);
    let original = fixture();

    assert_eq!(
        fields.try_set(original, Field::Day, 32),
        Err(TemporalError::FieldOutOfRange {
            field: Field::Day,
            value: 32
        })
    );
    assert_eq!(
        fields.try_set(original, Field::Year, i64::MAX),
        Err(TemporalError::CalendarOverflow {
            field: Field::Year,
            delta: i64::MAX - 2024
        })
    );
}

#[test]
fn quarter_of_year() {
    let fields = FieldAccessor::new(&UTC);

    let quarters: Vec<i64> = (1..=12)
        .map(|month| fields.quarter(utc(2024, month, 1, 0, 0, 0, 0)))
        .collect();
    assert_eq!(quarters, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
}

#[test]
fn hour_delta_is_elapsed_time_across_dst() {
    let new_york = ZonedCalendar::gregorian(Tz::America__New_York);
    let fields = FieldAccessor::new(&new_york);
    // Midnight EST on the day clocks spring forward.
    let mut instant = utc(2024, 3, 10, 5, 0, 0, 0);

    fields.set_hour(&mut instant, 5);

    // Five elapsed hours cross the skipped hour, so the wall clock reads 06:00.
    assert_eq!(instant, utc(2024, 3, 10, 10, 0, 0, 0));
    assert_eq!(fields.hour(instant), 6);
}

/// Calendar stub recording every addition it is asked to perform.
struct RecordingCalendar {
    parts: Components,
    fail: bool,
    calls: RefCell<Vec<(i64, Unit)>>,
}

impl RecordingCalendar {
    fn new(fail: bool) -> Self {
        Self {
            parts: Components {
                year: 2020,
                month: 6,
                day: 15,
                hour: 12,
                minute: 30,
                second: 45,
                nanosecond: 250_000_000,
                weekday: 2,
                week_of_year: 25,
                week_of_month: 3,
            },
            fail,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Calendar for RecordingCalendar {
    fn decompose(&self, _instant: Instant) -> Components {
        self.parts
    }

    fn range(&self, field: Unit, _within: Unit, _instant: Instant) -> Option<Range<i64>> {
        match field {
            Unit::Month => Some(1..13),
            Unit::Day => Some(1..31),
            Unit::Nanosecond => Some(0..1_000_000_000),
            _ => None,
        }
    }

    fn add(&self, instant: Instant, amount: i64, unit: Unit) -> Option<Instant> {
        self.calls.borrow_mut().push((amount, unit));
        if self.fail {
            return None;
        }
        instant.checked_add(chrono::TimeDelta::seconds(1))
    }
}

#[test]
fn setters_delegate_deltas_to_the_calendar() {
    let calendar = RecordingCalendar::new(false);
    let fields = FieldAccessor::new(&calendar);
    let mut instant = Instant::UNIX_EPOCH;

    fields.set_month(&mut instant, 2);
    fields.set_day(&mut instant, 20);
    fields.set_year(&mut instant, 2023);
    fields.set_millisecond(&mut instant, 750);

    assert_eq!(
        *calendar.calls.borrow(),
        vec![
            (-4, Unit::Month),
            (5, Unit::Day),
            (3, Unit::Year),
            (500_000_000, Unit::Nanosecond),
        ]
    );
    assert_eq!(instant.unix_seconds(), 4);
}

#[test]
fn unsupported_range_leaves_instant_unchanged() {
    let calendar = RecordingCalendar::new(false);
    let fields = FieldAccessor::new(&calendar);
    let mut instant = Instant::UNIX_EPOCH;

    // The stub reports no hour range, so nothing is validated and nothing added.
    fields.set_hour(&mut instant, 1);

    assert_eq!(instant, Instant::UNIX_EPOCH);
    assert!(calendar.calls.borrow().is_empty());
}

#[test]
fn failed_addition_leaves_instant_unchanged() {
    let calendar = RecordingCalendar::new(true);
    let fields = FieldAccessor::new(&calendar);
    let mut instant = Instant::UNIX_EPOCH;

    fields.set_day(&mut instant, 1);

    assert_eq!(instant, Instant::UNIX_EPOCH);
    assert_eq!(*calendar.calls.borrow(), vec![(-14, Unit::Day)]);
}

#[test]
fn accessor_works_through_trait_objects() {
    let calendar: &dyn Calendar = &UTC;
    let fields = FieldAccessor::new(calendar);

    assert_eq!(fields.day(fixture()), 31);
}
