// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, settings: &WorkdaySettings) -> Measurement {
    let today = now.today();
    let start = now.at(today, settings.start());
    let end = now.at(today, settings.end());
    let (fraction, left) = span_progress(now.millis(), start, end);

    Measurement::new(fraction, [(Unit::Minutes, left.minutes()), (Unit::Hours, left.hours())])
}

/// Progress through one working span.
///
/// Before the span nothing has elapsed and the whole span remains; after it
/// everything has elapsed and nothing remains.
pub(crate) fn span_progress(now: i64, start: i64, end: i64) -> (f64, Countdown) {
    if now < start {
        (0.0, Countdown::until(start, end))
    } else if now >= end {
        (1.0, Countdown::from_millis(0))
    } else {
        (fraction(now, start, end), Countdown::until(now, end))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::span_progress;
    use crate::{ClockTime, PeriodType, Unit, WorkdaySettings};

    #[test]
    fn before_start_reports_full_span() {
        let now = utc(2024, 3, 14, 7, 45, 0, 0);
        let m = measure(PeriodType::Workday, &now, &WorkdaySettings::default());

        assert!(m.fraction.abs() < f64::EPSILON);
        assert_eq!(spec(&m, Unit::Hours), "7");
        assert_eq!(spec(&m, Unit::Minutes), "420");
    }

    #[test]
    fn during_work() {
        let now = utc(2024, 3, 14, 12, 30, 0, 0);
        let m = measure(PeriodType::Workday, &now, &WorkdaySettings::default());

        assert!((m.fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(spec(&m, Unit::Minutes), "210");
        assert_eq!(spec(&m, Unit::Hours), "3");
    }

    #[test]
    fn at_end_is_complete() {
        let now = utc(2024, 3, 14, 16, 0, 0, 0);
        let m = measure(PeriodType::Workday, &now, &WorkdaySettings::default());

        assert!((m.fraction - 1.0).abs() < f64::EPSILON);
        assert_eq!(spec(&m, Unit::Minutes), "0");
        assert_eq!(spec(&m, Unit::Hours), "0");
    }

    #[test]
    fn custom_hours_with_minutes() {
        let settings = WorkdaySettings::default()
            .with_start(ClockTime::new(8, 30).unwrap())
            .with_end(ClockTime::new(17, 15).unwrap());
        let now = utc(2024, 3, 14, 17, 0, 0, 0);

        let m = measure(PeriodType::Workday, &now, &settings);

        assert_eq!(spec(&m, Unit::Minutes), "15");
        assert_eq!(spec(&m, Unit::Hours), "0");
    }

    #[test]
    fn empty_span_never_divides() {
        assert!(span_progress(5, 10, 10).0.abs() < f64::EPSILON);
        assert!((span_progress(10, 10, 10).0 - 1.0).abs() < f64::EPSILON);
        assert_eq!(span_progress(15, 10, 10).1.millis(), 0);
    }
}
