// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use jiff::civil::{Time, Weekday};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{PeriodType, SettingsError};

/// A wall-clock time of day with minute precision.
///
/// The hour is always in `0..=23` and the minute in `0..=59`.
///
/// # Examples
///
/// ```
/// use timeleft::ClockTime;
///
/// let start = ClockTime::new(9, 30)?;
///
/// assert_eq!(start.to_string(), "09:30");
/// assert_eq!(start.minutes_since_midnight(), 570);
/// # Ok::<(), timeleft::SettingsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour` is 24 or more, or `minute` is 60 or more.
    pub fn new(hour: u8, minute: u8) -> Result<Self, SettingsError> {
        if hour > 23 {
            return Err(SettingsError::caused_by(format!("hour {hour} is outside 0..=23")));
        }

        if minute > 59 {
            return Err(SettingsError::caused_by(format!("minute {minute} is outside 0..=59")));
        }

        Ok(Self { hour, minute })
    }

    /// The hour, `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The minute, `0..=59`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Creates a clock time from minutes since midnight, clamped to `23:59`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "values are below 24 and 60 after clamping")]
    pub const fn from_minutes(minutes: u16) -> Self {
        let minutes = if minutes > 1439 { 1439 } else { minutes };

        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    #[expect(clippy::cast_possible_wrap, reason = "hour and minute are validated to fit in i8")]
    pub(crate) const fn to_civil(self) -> Time {
        jiff::civil::time(self.hour as i8, self.minute as i8, 0, 0)
    }

    const fn nine_am() -> Self {
        Self { hour: 9, minute: 0 }
    }

    const fn four_pm() -> Self {
        Self { hour: 16, minute: 0 }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Which days of the week are working days.
///
/// Defaults to Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[expect(clippy::struct_excessive_bools, reason = "one flag per weekday is the natural shape")]
pub struct Workdays {
    /// Monday is a working day.
    pub monday: bool,
    /// Tuesday is a working day.
    pub tuesday: bool,
    /// Wednesday is a working day.
    pub wednesday: bool,
    /// Thursday is a working day.
    pub thursday: bool,
    /// Friday is a working day.
    pub friday: bool,
    /// Saturday is a working day.
    pub saturday: bool,
    /// Sunday is a working day.
    pub sunday: bool,
}

impl Workdays {
    /// No working days at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
        }
    }

    /// Returns `true` if `weekday` is a working day.
    #[must_use]
    pub const fn is_enabled(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    /// Marks `weekday` as a working day or not.
    pub const fn set(&mut self, weekday: Weekday, enabled: bool) {
        let flag = match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        };
        *flag = enabled;
    }

    /// Iterates the working days from Sunday to Saturday.
    pub fn enabled(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST.into_iter().filter(|day| self.is_enabled(*day))
    }

    /// Returns `true` if at least one day is a working day.
    #[must_use]
    pub fn any(&self) -> bool {
        self.enabled().next().is_some()
    }

    fn merge(value: Option<&Value>) -> Self {
        let mut workdays = Self::default();

        if let Some(Value::Object(map)) = value {
            for day in SUNDAY_FIRST {
                if let Some(Value::Bool(enabled)) = map.get(weekday_key(day)) {
                    workdays.set(day, *enabled);
                }
            }
        }

        workdays
    }
}

impl Default for Workdays {
    fn default() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
        }
    }
}

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
        Weekday::Sunday => "sunday",
    }
}

/// Which periods the presentation layer shows.
///
/// The calculator always computes every period; this only filters what is rendered.
/// All periods are visible by default.
///
/// # Examples
///
/// ```
/// use timeleft::{PeriodType, VisibleCards};
///
/// let mut cards = VisibleCards::default();
/// cards.set(PeriodType::Millennium, false);
///
/// assert!(cards.is_visible(PeriodType::Hour));
/// assert!(!cards.is_visible(PeriodType::Millennium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleCards([bool; PeriodType::COUNT]);

impl VisibleCards {
    /// Returns `true` if `kind` should be shown.
    #[must_use]
    pub const fn is_visible(&self, kind: PeriodType) -> bool {
        self.0[kind.index()]
    }

    /// Shows or hides `kind`.
    pub const fn set(&mut self, kind: PeriodType, visible: bool) {
        self.0[kind.index()] = visible;
    }

    fn merge(value: Option<&Value>) -> Self {
        let mut cards = Self::default();

        if let Some(Value::Object(map)) = value {
            for (key, flag) in map {
                if let (Ok(kind), Value::Bool(visible)) = (key.parse::<PeriodType>(), flag) {
                    cards.set(kind, *visible);
                }
            }
        }

        cards
    }
}

impl Default for VisibleCards {
    fn default() -> Self {
        Self([true; PeriodType::COUNT])
    }
}

impl Serialize for VisibleCards {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PeriodType::COUNT))?;
        for kind in PeriodType::ALL {
            map.serialize_entry(kind.as_str(), &self.is_visible(kind))?;
        }
        map.end()
    }
}

/// User configuration read by the calculator.
///
/// Holds the working hours, the working days, and the period visibility flags.
/// The persisted form is a JSON object:
///
/// ```json
/// {
///   "startHour": 9, "startMinute": 0, "endHour": 16, "endMinute": 0,
///   "workdays": { "monday": true, "tuesday": true, "...": "..." },
///   "visibleCards": { "hour": true, "day": true, "...": "..." }
/// }
/// ```
///
/// Deserialization is lenient: every missing or invalid field takes its default
/// individually, so a partially valid document keeps all of its valid parts.
///
/// # Examples
///
/// ```
/// use timeleft::{ClockTime, WorkdaySettings};
///
/// let settings: WorkdaySettings =
///     serde_json::from_str(r#"{ "startHour": 8, "startMinute": 30, "endHour": 99 }"#)?;
///
/// assert_eq!(settings.start(), ClockTime::new(8, 30)?);
/// assert_eq!(settings.end(), ClockTime::new(16, 0)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdaySettings {
    start: ClockTime,
    end: ClockTime,
    workdays: Workdays,
    visible_cards: VisibleCards,
}

impl WorkdaySettings {
    /// Creates settings with all periods visible.
    #[must_use]
    pub fn new(start: ClockTime, end: ClockTime, workdays: Workdays) -> Self {
        Self {
            start,
            end,
            workdays,
            visible_cards: VisibleCards::default(),
        }
    }

    /// Start of the working day.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    /// End of the working day.
    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// The working days.
    #[must_use]
    pub const fn workdays(&self) -> &Workdays {
        &self.workdays
    }

    /// The period visibility flags.
    #[must_use]
    pub const fn visible_cards(&self) -> &VisibleCards {
        &self.visible_cards
    }

    /// Replaces the start of the working day.
    #[must_use]
    pub const fn with_start(mut self, start: ClockTime) -> Self {
        self.start = start;
        self
    }

    /// Replaces the end of the working day.
    #[must_use]
    pub const fn with_end(mut self, end: ClockTime) -> Self {
        self.end = end;
        self
    }

    /// Replaces the working days.
    #[must_use]
    pub const fn with_workdays(mut self, workdays: Workdays) -> Self {
        self.workdays = workdays;
        self
    }

    /// Replaces the visibility flags.
    #[must_use]
    pub const fn with_visible_cards(mut self, visible_cards: VisibleCards) -> Self {
        self.visible_cards = visible_cards;
        self
    }

    /// Builds settings from a JSON value, taking the default for every field that is
    /// missing or invalid.
    ///
    /// Clock fields must be integers in range; weekday and visibility flags must be
    /// booleans. Anything that is not a JSON object yields the defaults.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();

        let field = |name: &str, max: u8| -> Option<u8> {
            value
                .get(name)
                .and_then(Value::as_u64)
                .and_then(|v| u8::try_from(v).ok())
                .filter(|v| *v <= max)
        };

        let start = ClockTime {
            hour: field("startHour", 23).unwrap_or(defaults.start.hour),
            minute: field("startMinute", 59).unwrap_or(defaults.start.minute),
        };
        let end = ClockTime {
            hour: field("endHour", 23).unwrap_or(defaults.end.hour),
            minute: field("endMinute", 59).unwrap_or(defaults.end.minute),
        };

        Self {
            start,
            end,
            workdays: Workdays::merge(value.get("workdays")),
            visible_cards: VisibleCards::merge(value.get("visibleCards")),
        }
    }
}

impl Default for WorkdaySettings {
    fn default() -> Self {
        Self::new(ClockTime::nine_am(), ClockTime::four_pm(), Workdays::default())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireSettings<'a> {
    start_hour: u8,
    start_minute: u8,
    end_hour: u8,
    end_minute: u8,
    workdays: &'a Workdays,
    visible_cards: &'a VisibleCards,
}

impl Serialize for WorkdaySettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireSettings {
            start_hour: self.start.hour,
            start_minute: self.start.minute,
            end_hour: self.end.hour,
            end_minute: self.end.minute,
            workdays: &self.workdays,
            visible_cards: &self.visible_cards,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkdaySettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn clock_time_rejects_out_of_range() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert!(ClockTime::new(24, 0).unwrap_err().to_string().contains("hour 24"));
        assert!(ClockTime::new(0, 60).unwrap_err().to_string().contains("minute 60"));
    }

    #[test]
    fn clock_time_from_minutes_clamps() {
        assert_eq!(ClockTime::from_minutes(570), ClockTime::new(9, 30).unwrap());
        assert_eq!(ClockTime::from_minutes(5000), ClockTime::new(23, 59).unwrap());
    }

    #[test]
    fn defaults() {
        let settings = WorkdaySettings::default();

        assert_eq!(settings.start().to_string(), "09:00");
        assert_eq!(settings.end().to_string(), "16:00");
        assert!(settings.workdays().is_enabled(Weekday::Monday));
        assert!(settings.workdays().is_enabled(Weekday::Friday));
        assert!(!settings.workdays().is_enabled(Weekday::Saturday));
        assert!(!settings.workdays().is_enabled(Weekday::Sunday));
        assert!(PeriodType::ALL.into_iter().all(|kind| settings.visible_cards().is_visible(kind)));
    }

    #[test]
    fn enabled_iterates_sunday_first() {
        let mut workdays = Workdays::none();
        workdays.set(Weekday::Saturday, true);
        workdays.set(Weekday::Sunday, true);
        workdays.set(Weekday::Wednesday, true);

        let days: Vec<_> = workdays.enabled().collect();

        assert_eq!(days, [Weekday::Sunday, Weekday::Wednesday, Weekday::Saturday]);
        assert!(workdays.any());
        assert!(!Workdays::none().any());
    }

    #[test]
    fn serializes_wire_shape() {
        let value = serde_json::to_value(WorkdaySettings::default()).unwrap();

        assert_eq!(value["startHour"], 9);
        assert_eq!(value["startMinute"], 0);
        assert_eq!(value["endHour"], 16);
        assert_eq!(value["endMinute"], 0);
        assert_eq!(value["workdays"]["monday"], true);
        assert_eq!(value["workdays"]["sunday"], false);
        assert_eq!(value["visibleCards"]["millennium"], true);
        assert_eq!(value["visibleCards"].as_object().unwrap().len(), PeriodType::COUNT);
    }

    #[test]
    fn from_value_merges_per_field() {
        let value = json!({
            "startHour": 7,
            "startMinute": 75,
            "endHour": "18",
            "endMinute": 45,
            "workdays": { "saturday": true, "monday": "yes" },
            "visibleCards": { "millenium": false, "decade": 1, "fortnight": false }
        });

        let settings = WorkdaySettings::from_value(&value);

        assert_eq!(settings.start(), ClockTime::new(7, 0).unwrap());
        assert_eq!(settings.end(), ClockTime::new(16, 45).unwrap());
        assert!(settings.workdays().is_enabled(Weekday::Saturday));
        assert!(settings.workdays().is_enabled(Weekday::Monday));
        assert!(!settings.visible_cards().is_visible(PeriodType::Millennium));
        assert!(settings.visible_cards().is_visible(PeriodType::Decade));
    }

    #[test]
    fn from_value_rejects_negative_and_fractional_numbers() {
        let value = json!({ "startHour": -1, "endHour": 17.5 });

        let settings = WorkdaySettings::from_value(&value);

        assert_eq!(settings, WorkdaySettings::default());
    }

    #[test]
    fn from_value_non_object_is_default() {
        assert_eq!(WorkdaySettings::from_value(&json!([1, 2, 3])), WorkdaySettings::default());
        assert_eq!(WorkdaySettings::from_value(&Value::Null), WorkdaySettings::default());
    }

    #[test]
    fn serde_round_trip() {
        let mut workdays = Workdays::none();
        workdays.set(Weekday::Tuesday, true);
        let mut cards = VisibleCards::default();
        cards.set(PeriodType::Century, false);

        let settings = WorkdaySettings::new(ClockTime::new(6, 15).unwrap(), ClockTime::new(14, 5).unwrap(), workdays)
            .with_visible_cards(cards);

        let text = serde_json::to_string(&settings).unwrap();
        let parsed: WorkdaySettings = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, settings);
    }
}
