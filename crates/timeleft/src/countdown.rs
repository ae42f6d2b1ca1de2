// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Remaining time, broken down by successive floor division.
///
/// Every unit is derived from the previous one rather than from the milliseconds
/// directly, so `hours` is `minutes / 60` and never rounds differently from the
/// minute figure shown next to it. Months are 30 days and years 12 such months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Countdown(i64);

impl Countdown {
    pub(crate) const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub(crate) const fn until(now: i64, end: i64) -> Self {
        Self(end.saturating_sub(now))
    }

    /// Clamps an overdue countdown to zero.
    pub(crate) const fn non_negative(self) -> Self {
        if self.0 < 0 { Self(0) } else { self }
    }

    pub(crate) const fn millis(self) -> i64 {
        self.0
    }

    pub(crate) const fn seconds(self) -> i64 {
        self.0.div_euclid(1000)
    }

    pub(crate) const fn minutes(self) -> i64 {
        self.seconds().div_euclid(60)
    }

    pub(crate) const fn hours(self) -> i64 {
        self.minutes().div_euclid(60)
    }

    pub(crate) const fn days(self) -> i64 {
        self.hours().div_euclid(24)
    }

    pub(crate) const fn weeks(self) -> i64 {
        self.days().div_euclid(7)
    }

    pub(crate) const fn months(self) -> i64 {
        self.days().div_euclid(30)
    }

    pub(crate) const fn years(self) -> i64 {
        self.months().div_euclid(12)
    }

    pub(crate) const fn decades(self) -> i64 {
        self.years().div_euclid(10)
    }
}
