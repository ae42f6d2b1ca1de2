// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{HOUR_MS, Measurement, fraction};
use crate::countdown::Countdown;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

// Truncating in the current offset keeps a repeated hour after a DST change intact.
pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let start = now.millis() - now.since_hour_start();
    let end = start + HOUR_MS;
    let left = Countdown::until(now.millis(), end);

    Measurement::new(
        fraction(now.millis(), start, end),
        [
            (Unit::Milliseconds, left.millis()),
            (Unit::Seconds, left.seconds()),
            (Unit::Minutes, left.minutes()),
        ],
    )
}
