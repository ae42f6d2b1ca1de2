// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::{Moment, add_days};
use crate::{Unit, WorkdaySettings, Workdays};

/// The calendar days spanned by the current work week.
///
/// The week runs from the most recent occurrence of the earliest enabled weekday
/// through the latest enabled weekday after it, with weekday numbers counted
/// from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkWeek {
    first: Date,
    last: Date,
}

impl WorkWeek {
    /// Returns `None` when no weekday is enabled.
    pub(crate) fn current(today: Date, workdays: &Workdays) -> Option<Self> {
        let mut enabled = workdays.enabled().map(Weekday::to_sunday_zero_offset);
        let earliest = enabled.next()?;
        let latest = enabled.last().unwrap_or(earliest);

        let weekday = today.weekday().to_sunday_zero_offset();
        let back = if weekday >= earliest {
            weekday - earliest
        } else {
            7 - (earliest - weekday)
        };

        let first = add_days(today, -i64::from(back));
        let last = add_days(first, i64::from(latest - earliest));
        Some(Self { first, last })
    }

    pub(crate) const fn first(self) -> Date {
        self.first
    }

    pub(crate) const fn last(self) -> Date {
        self.last
    }

    /// Enabled dates of the week in calendar order.
    pub(crate) fn days(self, workdays: &Workdays) -> impl Iterator<Item = Date> + '_ {
        self.first
            .series(1.day())
            .take_while(move |day| *day <= self.last)
            .filter(move |day| workdays.is_enabled(day.weekday()))
    }
}

pub(super) fn measure(now: &Moment<'_>, settings: &WorkdaySettings) -> Measurement {
    let Some(week) = WorkWeek::current(now.today(), settings.workdays()) else {
        return Measurement::new(0.0, [(Unit::Minutes, 0), (Unit::Hours, 0), (Unit::Days, 0)]);
    };

    let start = now.at(week.first(), settings.start());
    let end = now.at(week.last(), settings.end());

    let elapsed = if now.millis() < start {
        0.0
    } else if now.millis() >= end {
        1.0
    } else {
        fraction(worked(now, week, settings), 0, end - start)
    };

    let left = Countdown::until(now.millis(), end).non_negative();

    Measurement::new(
        elapsed,
        [
            (Unit::Minutes, left.minutes()),
            (Unit::Hours, left.hours()),
            (Unit::Days, left.days()),
        ],
    )
}

/// Working milliseconds elapsed this week, up to `now`.
fn worked(now: &Moment<'_>, week: WorkWeek, settings: &WorkdaySettings) -> i64 {
    let today = now.today();

    week.days(settings.workdays())
        .take_while(|day| *day <= today)
        .map(|day| {
            let day_start = now.at(day, settings.start());
            let day_end = now.at(day, settings.end());
            let until = if day == today { now.millis().min(day_end) } else { day_end };
            (until - day_start).max(0)
        })
        .sum()
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::super::test_support::*;
    use super::WorkWeek;
    use crate::{PeriodType, Unit, WorkdaySettings, Workdays};

    const HOUR: f64 = 3_600_000.0;

    // Monday 09:00 to Friday 16:00.
    const MON_FRI_SPAN: f64 = 4.0 * 24.0 * HOUR + 7.0 * HOUR;

    #[test]
    fn no_enabled_days_reports_zero() {
        let settings = WorkdaySettings::default().with_workdays(Workdays::none());
        let now = utc(2024, 3, 13, 12, 0, 0, 0);

        let m = measure(PeriodType::Workweek, &now, &settings);

        assert!(m.fraction.abs() < f64::EPSILON);
        assert_eq!(spec(&m, Unit::Minutes), "0");
        assert_eq!(spec(&m, Unit::Hours), "0");
        assert_eq!(spec(&m, Unit::Days), "0");
    }

    #[test]
    fn accumulates_working_time_only() {
        // Wednesday 12:00: two full days of 7 h plus 3 h today.
        let now = utc(2024, 3, 13, 12, 0, 0, 0);
        let m = measure(PeriodType::Workweek, &now, &WorkdaySettings::default());

        assert!((m.fraction - 17.0 * HOUR / MON_FRI_SPAN).abs() < 1e-12);
        // Until Friday 16:00: 2 days and 4 hours.
        assert_eq!(spec(&m, Unit::Days), "2");
        assert_eq!(spec(&m, Unit::Hours), "52");
    }

    #[test]
    fn before_first_day_start() {
        let now = utc(2024, 3, 11, 8, 0, 0, 0);
        let m = measure(PeriodType::Workweek, &now, &WorkdaySettings::default());

        assert!(m.fraction.abs() < f64::EPSILON);
    }

    #[test]
    fn weekend_after_end_is_complete() {
        let now = utc(2024, 3, 16, 10, 0, 0, 0);
        let m = measure(PeriodType::Workweek, &now, &WorkdaySettings::default());

        assert!((m.fraction - 1.0).abs() < f64::EPSILON);
        assert_eq!(spec(&m, Unit::Minutes), "0");
        assert_eq!(spec(&m, Unit::Days), "0");
    }

    #[test]
    fn remaining_time_is_clamped_at_zero_after_week_end() {
        // Friday 16:00 is the end; an hour later the raw difference would be -60 minutes.
        let settings = WorkdaySettings::default();
        let at_end = measure(PeriodType::Workweek, &utc(2024, 3, 15, 16, 0, 0, 0), &settings);
        let hour_later = measure(PeriodType::Workweek, &utc(2024, 3, 15, 17, 0, 0, 0), &settings);

        for m in [&at_end, &hour_later] {
            assert!((m.fraction - 1.0).abs() < f64::EPSILON);
            assert_eq!(spec(m, Unit::Minutes), "0");
            assert_eq!(spec(m, Unit::Hours), "0");
            assert_eq!(spec(m, Unit::Days), "0");
        }
    }

    #[test]
    fn current_week_bounds() {
        let workdays = Workdays::default();

        let week = WorkWeek::current(date(2024, 3, 13), &workdays).unwrap();
        assert_eq!(week.first(), date(2024, 3, 11));
        assert_eq!(week.last(), date(2024, 3, 15));

        // Sunday still belongs to the Monday to Friday week just finished.
        let week = WorkWeek::current(date(2024, 3, 17), &workdays).unwrap();
        assert_eq!(week.first(), date(2024, 3, 11));
    }

    #[test]
    fn skips_disabled_days_inside_the_week() {
        let mut workdays = Workdays::default();
        workdays.wednesday = false;

        let week = WorkWeek::current(date(2024, 3, 14), &workdays).unwrap();
        let days: Vec<_> = week.days(&workdays).collect();

        assert_eq!(
            days,
            [date(2024, 3, 11), date(2024, 3, 12), date(2024, 3, 14), date(2024, 3, 15)]
        );
    }

    #[test]
    fn sunday_enabled_anchors_on_sunday() {
        let workdays = Workdays {
            sunday: true,
            ..Workdays::none()
        };

        let week = WorkWeek::current(date(2024, 3, 13), &workdays).unwrap();

        assert_eq!(week.first(), date(2024, 3, 10));
        assert_eq!(week.last(), date(2024, 3, 10));
    }
}
