// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let first = now.today().first_of_month();
    let start = now.midnight(first);
    let end = now.next_month_start(first);
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Minutes, left.minutes()),
            (Unit::Hours, left.hours()),
            (Unit::Days, left.days()),
        ],
    )
}
