// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Finer-grained views of the work day and the work week.

use jiff::Zoned;
use jiff::civil::{Date, Weekday};

use crate::moment::Moment;
use crate::periods::{WorkWeek, span_progress};
use crate::{ClockTime, WorkdaySettings};

/// Length of a work-day block in minutes.
pub const BLOCK_MINUTES: u16 = 30;

/// Where a slice of time stands relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Entirely in the past.
    Elapsed,
    /// Contains now.
    Current,
    /// Not started yet.
    Future,
}

/// A slice of the configured work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkBlock {
    /// First minute of the block.
    pub start: ClockTime,
    /// End of the block, exclusive.
    pub end: ClockTime,
    /// Position relative to now.
    pub status: Status,
}

/// One enabled day of the current work week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkweekDay {
    /// Calendar date of the day.
    pub date: Date,
    /// Day of the week.
    pub weekday: Weekday,
    /// Position relative to today.
    pub status: Status,
    /// Completion in whole percent: 100 for past days, 0 for future days.
    pub percentage: i32,
}

/// Splits today's work day into [`BLOCK_MINUTES`] blocks.
///
/// The last block is shorter when the work day is not a whole number of blocks.
/// Returns nothing when the end time does not come after the start time.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
/// use timeleft::breakdown::{Status, workday_blocks};
/// use timeleft::WorkdaySettings;
///
/// let now = date(2024, 3, 13).at(10, 10, 0, 0).to_zoned(TimeZone::UTC)?;
/// let blocks = workday_blocks(&now, &WorkdaySettings::default());
///
/// assert_eq!(blocks.len(), 14);
/// assert_eq!(blocks[1].status, Status::Elapsed);
/// assert_eq!(blocks[2].status, Status::Current);
/// assert_eq!(blocks[3].status, Status::Future);
/// # Ok::<(), jiff::Error>(())
/// ```
#[must_use]
pub fn workday_blocks(now: &Zoned, settings: &WorkdaySettings) -> Vec<WorkBlock> {
    let moment = Moment::new(now);
    let today = moment.today();
    let first = settings.start().minutes_since_midnight();
    let last = settings.end().minutes_since_midnight();

    (first..last)
        .step_by(usize::from(BLOCK_MINUTES))
        .map(|minutes| {
            let start = ClockTime::from_minutes(minutes);
            let end = ClockTime::from_minutes((minutes + BLOCK_MINUTES).min(last));
            let status = status(
                moment.millis(),
                moment.at(today, start),
                moment.at(today, end),
            );
            WorkBlock { start, end, status }
        })
        .collect()
}

/// Lists the enabled days of the current work week with their completion.
///
/// Returns nothing when no weekday is enabled.
#[must_use]
pub fn workweek_days(now: &Zoned, settings: &WorkdaySettings) -> Vec<WorkweekDay> {
    let moment = Moment::new(now);
    let today = moment.today();

    let Some(week) = WorkWeek::current(today, settings.workdays()) else {
        return Vec::new();
    };

    week.days(settings.workdays())
        .map(|date| {
            let (status, percentage) = match date.cmp(&today) {
                std::cmp::Ordering::Less => (Status::Elapsed, 100),
                std::cmp::Ordering::Greater => (Status::Future, 0),
                std::cmp::Ordering::Equal => {
                    let (fraction, _) = span_progress(
                        moment.millis(),
                        moment.at(today, settings.start()),
                        moment.at(today, settings.end()),
                    );
                    (Status::Current, percent(fraction))
                }
            };

            WorkweekDay {
                date,
                weekday: date.weekday(),
                status,
                percentage,
            }
        })
        .collect()
}

const fn status(now: i64, start: i64, end: i64) -> Status {
    if now >= end {
        Status::Elapsed
    } else if now >= start {
        Status::Current
    } else {
        Status::Future
    }
}

#[expect(clippy::cast_possible_truncation, reason = "the fraction is within 0..=1")]
fn percent(fraction: f64) -> i32 {
    (fraction * 100.0).floor() as i32
}
