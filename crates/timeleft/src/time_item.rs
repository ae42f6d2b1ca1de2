// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::Index;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{PeriodType, Specs, VisibleCards};

/// Progress of one period at one instant.
///
/// Serializes as `{"type", "title", "percentage", "specs"}`, with `specs` keyed by
/// unit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeItem {
    kind: PeriodType,
    percentage: i32,
    specs: Specs,
}

impl TimeItem {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fractions are bounded by the calendar range, far below i32::MAX percent"
    )]
    pub(crate) fn new(kind: PeriodType, fraction: f64, specs: Specs) -> Self {
        Self {
            kind,
            percentage: (fraction * 100.0).floor() as i32,
            specs,
        }
    }

    /// The period this item describes.
    #[must_use]
    pub const fn kind(&self) -> PeriodType {
        self.kind
    }

    /// Display label of the period.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Elapsed share of the period in whole percent.
    ///
    /// Always in `0..=100` except for [`PeriodType::Millennium`] outside the years
    /// 2001 to 3001.
    #[must_use]
    pub const fn percentage(&self) -> i32 {
        self.percentage
    }

    /// Remaining-time figures.
    #[must_use]
    pub const fn specs(&self) -> &Specs {
        &self.specs
    }
}

impl Serialize for TimeItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut item = serializer.serialize_struct("TimeItem", 4)?;
        item.serialize_field("type", &self.kind)?;
        item.serialize_field("title", self.title())?;
        item.serialize_field("percentage", &self.percentage)?;
        item.serialize_field("specs", &self.specs)?;
        item.end()
    }
}

/// The progress of every period at one instant, indexed by [`PeriodType`].
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use jiff::tz::TimeZone;
/// use timeleft::{PeriodType, WorkdaySettings, calculate};
///
/// let now = "2024-03-14T00:00:00Z".parse::<Timestamp>()?.to_zoned(TimeZone::UTC);
/// let items = calculate(&now, &WorkdaySettings::default());
///
/// assert_eq!(items[PeriodType::Day].percentage(), 0);
/// assert_eq!(items.iter().count(), PeriodType::COUNT);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeItems([TimeItem; PeriodType::COUNT]);

impl TimeItems {
    pub(crate) const fn new(items: [TimeItem; PeriodType::COUNT]) -> Self {
        Self(items)
    }

    /// Returns the item of `kind`.
    #[must_use]
    pub const fn get(&self, kind: PeriodType) -> &TimeItem {
        &self.0[kind.index()]
    }

    /// Iterates all items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeItem> {
        self.0.iter()
    }

    /// Iterates the items whose period is visible.
    pub fn visible<'a>(&'a self, cards: &'a VisibleCards) -> impl Iterator<Item = &'a TimeItem> {
        self.0.iter().filter(|item| cards.is_visible(item.kind))
    }
}

impl Index<PeriodType> for TimeItems {
    type Output = TimeItem;

    fn index(&self, kind: PeriodType) -> &Self::Output {
        self.get(kind)
    }
}

impl<'a> IntoIterator for &'a TimeItems {
    type Item = &'a TimeItem;
    type IntoIter = std::slice::Iter<'a, TimeItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Unit;

    #[test]
    fn percentage_floors() {
        assert_eq!(TimeItem::new(PeriodType::Hour, 0.999_999_7, Specs::default()).percentage(), 99);
        assert_eq!(TimeItem::new(PeriodType::Hour, 0.0, Specs::default()).percentage(), 0);
        assert_eq!(TimeItem::new(PeriodType::Hour, 1.0, Specs::default()).percentage(), 100);
        assert_eq!(TimeItem::new(PeriodType::Millennium, -0.001, Specs::default()).percentage(), -1);
    }

    #[test]
    fn serializes_with_unit_codes() {
        let specs = Specs::from_iter([(Unit::Minutes, 1440), (Unit::Hours, 24)]);
        let item = TimeItem::new(PeriodType::Workday, 0.25, specs);

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "type": "workday",
                "title": "Work Day",
                "percentage": 25,
                "specs": {"m": "1,440", "h": "24"},
            })
        );
    }

    #[test]
    fn items_serialize_in_display_order() {
        let items = TimeItems::new(PeriodType::ALL.map(|kind| TimeItem::new(kind, 0.0, Specs::default())));
        let value = serde_json::to_value(&items).unwrap();
        let kinds: Vec<_> = value.as_array().unwrap().iter().map(|item| item["type"].clone()).collect();

        assert_eq!(kinds.len(), PeriodType::COUNT);
        assert_eq!(kinds[0], "hour");
        assert_eq!(kinds[9], "millennium");
    }

    #[test]
    fn title_follows_kind() {
        let item = TimeItem::new(PeriodType::Workday, 0.5, Specs::default());

        assert_eq!(item.title(), "Work Day");
        assert_eq!(item.kind(), PeriodType::Workday);
    }

    #[test]
    fn visible_filters_hidden_periods() {
        let items = TimeItems::new(PeriodType::ALL.map(|kind| TimeItem::new(kind, 0.0, Specs::default())));
        let mut cards = VisibleCards::default();
        cards.set(PeriodType::Century, false);
        cards.set(PeriodType::Hour, false);

        let kinds: Vec<_> = items.visible(&cards).map(TimeItem::kind).collect();

        assert_eq!(kinds.len(), PeriodType::COUNT - 2);
        assert!(!kinds.contains(&PeriodType::Century));
        assert!(!kinds.contains(&PeriodType::Hour));
        assert_eq!(items[PeriodType::Year].kind(), PeriodType::Year);
    }
}
