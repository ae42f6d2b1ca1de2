// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let start = now.midnight(now.today());
    let end = now.midnight_after(now.today(), 1);
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Seconds, left.seconds()),
            (Unit::Minutes, left.minutes()),
            (Unit::Hours, left.hours()),
        ],
    )
}
