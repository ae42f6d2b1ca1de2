// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Unit of a remaining-time figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Milliseconds, `ms`.
    Milliseconds,
    /// Seconds, `s`.
    Seconds,
    /// Minutes, `m`.
    Minutes,
    /// Hours, `h`.
    Hours,
    /// Days, `d`.
    Days,
    /// Weeks, `w`.
    Weeks,
    /// Months of 30 days, `mo`.
    Months,
    /// Years of 12 such months, `y`.
    Years,
    /// Decades, `de`.
    Decades,
    /// Centuries, `c`.
    Centuries,
}

impl Unit {
    /// The short code shown next to the figure.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Weeks => "w",
            Self::Months => "mo",
            Self::Years => "y",
            Self::Decades => "de",
            Self::Centuries => "c",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ordered remaining-time figures of a period, keyed by [`Unit`].
///
/// Values are already formatted with thousands separators, e.g. `"1,440"`.
///
/// # Examples
///
/// ```
/// use timeleft::{Specs, Unit};
///
/// let specs = Specs::from_iter([(Unit::Minutes, 1440), (Unit::Hours, 24)]);
///
/// assert_eq!(specs.get(Unit::Minutes), Some("1,440"));
/// assert_eq!(specs.code("h"), Some("24"));
/// assert_eq!(specs.get(Unit::Days), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specs {
    entries: Vec<(Unit, String)>,
}

impl Specs {
    /// Returns the figure for `unit`, if this period reports it.
    #[must_use]
    pub fn get(&self, unit: Unit) -> Option<&str> {
        self.entries.iter().find(|(u, _)| *u == unit).map(|(_, v)| v.as_str())
    }

    /// Returns the figure for a short unit code such as `"mo"`.
    #[must_use]
    pub fn code(&self, code: &str) -> Option<&str> {
        self.entries.iter().find(|(u, _)| u.code() == code).map(|(_, v)| v.as_str())
    }

    /// Iterates the figures in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, &str)> {
        self.entries.iter().map(|(u, v)| (*u, v.as_str()))
    }

    /// Number of figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no figures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Specs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (unit, value) in &self.entries {
            map.serialize_entry(unit.code(), value)?;
        }
        map.end()
    }
}

impl FromIterator<(Unit, i64)> for Specs {
    fn from_iter<T: IntoIterator<Item = (Unit, i64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(unit, value)| (unit, group_thousands(value))).collect(),
        }
    }
}

/// Formats an integer with `,` between groups of three digits.
///
/// ```
/// assert_eq!(timeleft::group_thousands(86_400), "86,400");
/// assert_eq!(timeleft::group_thousands(-1_234), "-1,234");
/// assert_eq!(timeleft::group_thousands(999), "999");
/// ```
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
