// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let (first, next) = bounds(now.year());
    let start = now.year_start(first);
    let end = now.year_start(next);
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Weeks, left.weeks()),
            (Unit::Months, left.months()),
            (Unit::Years, left.years()),
        ],
    )
}

/// First year of the decade containing `year` and first year of the next one.
///
/// Decades run from a year ending in 1 through the following year ending in 0.
const fn bounds(year: i32) -> (i32, i32) {
    match year.rem_euclid(10) {
        1 => (year, year + 10),
        0 => (year - 9, year + 1),
        digit => (year - (digit - 1), year + (11 - digit)),
    }
}
