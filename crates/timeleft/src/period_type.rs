// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The calendar periods tracked by the calculator.
///
/// The set is closed and ordered; [`PeriodType::ALL`] lists the variants in display order,
/// which is also the order used by [`next`][Self::next] and [`previous`][Self::previous].
///
/// # Examples
///
/// ```
/// use timeleft::PeriodType;
///
/// assert_eq!(PeriodType::Workweek.title(), "Work Week");
/// assert_eq!("decade".parse::<PeriodType>()?, PeriodType::Decade);
/// assert_eq!(PeriodType::Millennium.next(), PeriodType::Hour);
/// # Ok::<(), timeleft::UnknownPeriodType>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// The current clock hour.
    Hour,
    /// The current calendar day.
    Day,
    /// Today's configured working hours.
    Workday,
    /// The current Monday-anchored week.
    Week,
    /// The configured working days of the current week.
    Workweek,
    /// The current calendar month.
    Month,
    /// The current calendar year.
    Year,
    /// The current decade, counted from a year ending in 1.
    Decade,
    /// The 21st century.
    Century,
    /// The 3rd millennium.
    #[serde(alias = "millenium")]
    Millennium,
}

impl PeriodType {
    /// Number of period types.
    pub const COUNT: usize = 10;

    /// All period types in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hour,
        Self::Day,
        Self::Workday,
        Self::Week,
        Self::Workweek,
        Self::Month,
        Self::Year,
        Self::Decade,
        Self::Century,
        Self::Millennium,
    ];

    /// Returns the lowercase identifier used in persisted settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Workday => "workday",
            Self::Week => "week",
            Self::Workweek => "workweek",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
            Self::Millennium => "millennium",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Workday => "Work Day",
            Self::Week => "Week",
            Self::Workweek => "Work Week",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::Decade => "Decade",
            Self::Century => "Century",
            Self::Millennium => "Millennium",
        }
    }

    /// Position of this type in [`PeriodType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The type following this one, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The type preceding this one, wrapping from the first to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no [`PeriodType`].
#[ohno::error]
pub struct UnknownPeriodType;

impl FromStr for PeriodType {
    type Err = UnknownPeriodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "millenium" {
            return Ok(Self::Millennium);
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPeriodType::caused_by(format!("unknown period type '{s}'")))
    }
}
