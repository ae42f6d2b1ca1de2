// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::float_cmp,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! How much of the hour, day, work day, week, work week, month, year, decade,
//! century and millennium has passed, and how much is left.
//!
//! The heart of the crate is [`calculate`], a pure function from an instant and a
//! [`WorkdaySettings`] snapshot to one [`TimeItem`] per [`PeriodType`]. Each item
//! carries the elapsed share of its period as a whole percentage and a few
//! "time remaining" figures in units suited to the period's length.
//!
//! # Periods
//!
//! | Period      | Boundaries                                                | Remaining in  |
//! |-------------|-----------------------------------------------------------|---------------|
//! | hour        | top of the current clock hour, one hour long              | ms, s, m      |
//! | day         | local midnight to the next local midnight                 | s, m, h       |
//! | work day    | today's configured start and end time                     | m, h          |
//! | week        | Monday midnight to the next Monday midnight               | m, h, d       |
//! | work week   | first through last enabled weekday, working hours only    | m, h, d       |
//! | month       | first of this month to first of next month                | m, h, d       |
//! | year        | January 1st to January 1st                                | d, w, mo      |
//! | decade      | a year ending in 1 through the next year ending in 0      | w, mo, y      |
//! | century     | 2001 through 2100                                         | mo, y, de     |
//! | millennium  | 2001 through 3000, counted in whole years                 | y, de, c      |
//!
//! Remaining figures are derived from each other by floor division: a month is
//! 30 days and a year is 12 such months.
//!
//! # Time zones
//!
//! Every calendar field is read in the time zone attached to the [`jiff::Zoned`]
//! passed in. Boundaries that would fall outside the civil range supported by
//! `jiff` saturate at the range limits.
//!
//! # Example
//!
//! ```
//! use jiff::civil::date;
//! use jiff::tz::TimeZone;
//! use timeleft::{PeriodType, Unit, WorkdaySettings, calculate};
//!
//! let now = date(2024, 3, 14).at(0, 0, 0, 0).to_zoned(TimeZone::UTC)?;
//! let items = calculate(&now, &WorkdaySettings::default());
//!
//! let day = &items[PeriodType::Day];
//! assert_eq!(day.percentage(), 0);
//! assert_eq!(day.specs().get(Unit::Seconds), Some("86,400"));
//! assert_eq!(day.specs().get(Unit::Hours), Some("24"));
//! # Ok::<(), jiff::Error>(())
//! ```
//!
//! # Settings
//!
//! [`WorkdaySettings`] is persisted as a JSON document through
//! [`store::SettingsStore`], which never fails toward its caller: unreadable or
//! invalid data falls back to defaults and write failures are logged with
//! `tracing`.
//!
//! # Presentation helpers
//!
//! [`ProgressColors`] maps a percentage to a blue-to-red palette, and the
//! [`breakdown`] module splits the work day into half-hour blocks and the work
//! week into days.

pub mod breakdown;
mod calculator;
mod color;
mod countdown;
mod error;
mod moment;
mod period_type;
mod periods;
mod settings;
mod specs;
pub mod store;
#[cfg(test)]
mod testing;
mod time_item;

pub use calculator::{calculate, measure};
pub use color::{ProgressColors, Rgb};
pub use error::{SettingsError, StoreError};
pub use period_type::{PeriodType, UnknownPeriodType};
pub use settings::{ClockTime, VisibleCards, WorkdaySettings, Workdays};
pub use specs::{Specs, Unit, group_thousands};
pub use time_item::{TimeItem, TimeItems};
