// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::Measurement;
use crate::moment::Moment;
use crate::{Unit, WorkdaySettings};

const FIRST_YEAR: i32 = 2001;
const NEXT_YEAR: i32 = 3001;

// Counted in whole years and left unclamped outside the window.
pub(super) fn measure(now: &Moment<'_>, _settings: &WorkdaySettings) -> Measurement {
    let year = now.year();
    let years = i64::from(NEXT_YEAR - year);

    Measurement::new(
        f64::from(year - FIRST_YEAR) / f64::from(NEXT_YEAR - FIRST_YEAR),
        [
            (Unit::Years, years),
            (Unit::Decades, years.div_euclid(10)),
            (Unit::Centuries, years.div_euclid(100)),
        ],
    )
}
