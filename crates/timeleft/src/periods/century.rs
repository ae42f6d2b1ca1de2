// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

const FIRST_YEAR: i32 = 2001;
const NEXT_YEAR: i32 = 2101;

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let start = now.year_start(FIRST_YEAR);
    let end = now.year_start(NEXT_YEAR);
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Months, left.months()),
            (Unit::Years, left.years()),
            (Unit::Decades, left.decades()),
        ],
    )
}
