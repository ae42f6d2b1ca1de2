// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let year = now.year();
    let start = now.year_start(year);
    let end = now.year_start(year + 1);
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Days, left.days()),
            (Unit::Weeks, left.weeks()),
            (Unit::Months, left.months()),
        ],
    )
}
