// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::{Moment, add_days};
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    // Sunday closes the week that began six days earlier.
    let back = match now.weekday() {
        0 => 6,
        weekday => weekday - 1,
    };
    let monday = add_days(now.today(), -i64::from(back));
    let start = now.midnight(monday);
    let end = now.midnight_after(monday, 7);
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
