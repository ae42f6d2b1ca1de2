// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::civil::{Date, DateTime};
use jiff::{Timestamp, ToSpan, Zoned};

use crate::ClockTime;

/// The instant being measured, with calendar accessors in its own time zone.
///
/// All boundaries are produced as epoch milliseconds so the handlers can work with
/// plain integer arithmetic. Boundaries outside the civil range supported by `jiff`
/// saturate at the range limits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Moment<'a> {
    zoned: &'a Zoned,
    millis: i64,
}

impl<'a> Moment<'a> {
    pub(crate) fn new(zoned: &'a Zoned) -> Self {
        Self {
            zoned,
            millis: zoned.timestamp().as_millisecond(),
        }
    }

    /// Epoch milliseconds of the instant.
    pub(crate) const fn millis(&self) -> i64 {
        self.millis
    }

    pub(crate) fn today(&self) -> Date {
        self.zoned.date()
    }

    pub(crate) fn year(&self) -> i32 {
        i32::from(self.zoned.year())
    }

    /// Milliseconds since the top of the current local hour.
    pub(crate) fn since_hour_start(&self) -> i64 {
        let minutes = i64::from(self.zoned.minute());
        let seconds = minutes * 60 + i64::from(self.zoned.second());
        seconds * 1000 + i64::from(self.zoned.millisecond())
    }

    /// Day of the week, 0 for Sunday through 6 for Saturday.
    pub(crate) fn weekday(&self) -> i8 {
        self.zoned.weekday().to_sunday_zero_offset()
    }

    /// Epoch milliseconds of a civil datetime interpreted in the instant's time zone.
    ///
    /// Gaps and folds resolve the way wall clocks usually do: a skipped time moves
    /// forward, a repeated time picks the earlier occurrence.
    fn local(&self, datetime: DateTime) -> i64 {
        self.zoned
            .time_zone()
            .to_ambiguous_timestamp(datetime)
            .compatible()
            .map_or_else(|_| saturated(i32::from(datetime.year())), |ts| ts.as_millisecond())
    }

    pub(crate) fn midnight(&self, date: Date) -> i64 {
        self.local(date.to_datetime(jiff::civil::Time::midnight()))
    }

    pub(crate) fn at(&self, date: Date, time: ClockTime) -> i64 {
        self.local(date.to_datetime(time.to_civil()))
    }

    /// Midnight `days` days after `date`. Spans across a DST change are 23 or 25 hours per day.
    pub(crate) fn midnight_after(&self, date: Date, days: i64) -> i64 {
        date.checked_add(days.days())
            .map_or_else(|_| saturated(i32::from(date.year()) + 1), |next| self.midnight(next))
    }

    /// Midnight of the first day of the month after the one starting at `first`.
    pub(crate) fn next_month_start(&self, first: Date) -> i64 {
        first
            .checked_add(1.month())
            .map_or_else(|_| saturated(i32::from(first.year()) + 1), |next| self.midnight(next))
    }

    /// Midnight of January 1st of `year`.
    pub(crate) fn year_start(&self, year: i32) -> i64 {
        i16::try_from(year)
            .ok()
            .and_then(|y| Date::new(y, 1, 1).ok())
            .map_or_else(|| saturated(year), |date| self.midnight(date))
    }
}

/// Shifts a date by a signed number of days.
pub(crate) fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(days.days())
}

fn saturated(year: i32) -> i64 {
    if year < 1970 {
        Timestamp::MIN.as_millisecond()
    } else {
        Timestamp::MAX.as_millisecond()
    }
}
