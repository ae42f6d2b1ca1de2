// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! One boundary algorithm per [`PeriodType`], dispatched through a lookup table.

mod century;
mod day;
mod decade;
mod hour;
mod millennium;
mod month;
mod week;
mod workday;
mod workweek;
mod year;

pub(crate) use workday::span_progress;
pub(crate) use workweek::WorkWeek;

use crate::moment::Moment;
use crate::{PeriodType, Specs, Unit, WorkdaySettings};

pub(crate) const HOUR_MS: i64 = 3_600_000;

/// Raw output of a handler, before percentage rounding.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Measurement {
    pub(crate) fraction: f64,
    pub(crate) specs: Specs,
}

impl Measurement {
    fn new(fraction: f64, specs: impl IntoIterator<Item = (Unit, i64)>) -> Self {
        Self {
            fraction,
            specs: specs.into_iter().collect(),
        }
    }
}

pub(crate) type Handler = fn(&Moment<'_>, &WorkdaySettings) -> Measurement;

const HANDLERS: [Handler; PeriodType::COUNT] = [
    hour::measure,
    day::measure,
    workday::measure,
    week::measure,
    workweek::measure,
    month::measure,
    year::measure,
    decade::measure,
    century::measure,
    millennium::measure,
];

/// Returns the boundary algorithm of `kind`.
pub(crate) const fn handler(kind: PeriodType) -> Handler {
    HANDLERS[kind.index()]
}

/// Share of `[start, end)` elapsed at `now`.
#[expect(clippy::cast_precision_loss, reason = "millisecond spans stay far below 2^52")]
fn fraction(now: i64, start: i64, end: i64) -> f64 {
    (now - start) as f64 / (end - start) as f64
}
