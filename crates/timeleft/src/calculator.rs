// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Zoned;

use crate::moment::Moment;
use crate::periods::handler;
use crate::{PeriodType, TimeItem, TimeItems, WorkdaySettings};

/// Computes the progress of every period at `now`.
///
/// Calendar fields are read in the time zone attached to `now`. The result depends
/// only on the arguments, so identical inputs always produce identical output.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
/// use timeleft::{PeriodType, Unit, WorkdaySettings, calculate};
///
/// // Wednesday, 08:00, one hour before the default work day starts.
/// let now = date(2024, 3, 13).at(8, 0, 0, 0).to_zoned(TimeZone::UTC)?;
/// let items = calculate(&now, &WorkdaySettings::default());
///
/// let workday = &items[PeriodType::Workday];
/// assert_eq!(workday.percentage(), 0);
/// assert_eq!(workday.specs().get(Unit::Hours), Some("7"));
/// # Ok::<(), jiff::Error>(())
/// ```
#[must_use]
pub fn calculate(now: &Zoned, settings: &WorkdaySettings) -> TimeItems {
    let moment = Moment::new(now);
    TimeItems::new(PeriodType::ALL.map(|kind| item(kind, &moment, settings)))
}

/// Computes the progress of a single period at `now`.
///
/// Equivalent to indexing the output of [`calculate`] with `kind`.
#[must_use]
pub fn measure(kind: PeriodType, now: &Zoned, settings: &WorkdaySettings) -> TimeItem {
    item(kind, &Moment::new(now), settings)
}

fn item(kind: PeriodType, moment: &Moment<'_>, settings: &WorkdaySettings) -> TimeItem {
    let measurement = handler(kind)(moment, settings);
    TimeItem::new(kind, measurement.fraction, measurement.specs)
}
