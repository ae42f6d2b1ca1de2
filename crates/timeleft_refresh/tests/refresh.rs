// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Driving the refresh loop with a controlled clock.

use std::time::{Duration, SystemTime};

use jiff::civil::date;
use jiff::tz::TimeZone;
use tick::ClockControl;
use timeleft::{ClockTime, PeriodType, Unit, WorkdaySettings};
use timeleft_refresh::{DEFAULT_PERIOD, RefreshDriver};
use tokio::sync::watch;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

fn control_at(hour: i8, minute: i8) -> ClockControl {
    let instant = date(2024, 3, 14)
        .at(hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid instant");
    ClockControl::new_at(SystemTime::from(instant.timestamp()))
}

/// Lets the refresh task run until it waits on its timer.
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn first_set_is_published_on_activation() {
    let control = control_at(12, 0);
    let (_settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());

    let active = RefreshDriver::new(control.to_clock(), settings_rx)
        .time_zone(TimeZone::UTC)
        .activate();

    let items = active.latest();
    assert_eq!(items[PeriodType::Day].percentage(), 50);
    assert_eq!(items.iter().count(), PeriodType::COUNT);
}

#[tokio::test]
async fn recomputes_on_every_tick() {
    let control = control_at(12, 0);
    let (_settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());
    let active = RefreshDriver::new(control.to_clock(), settings_rx)
        .time_zone(TimeZone::UTC)
        .activate();
    let mut items = active.subscribe();

    settle().await;
    control.advance(Duration::from_secs(30 * 60));

    timeout(WAIT, items.changed())
        .await
        .expect("tick within timeout")
        .expect("driver still active");

    let latest = items.borrow_and_update().clone();
    assert_eq!(latest[PeriodType::Hour].percentage(), 50);
    assert_eq!(latest[PeriodType::Hour].specs().get(Unit::Minutes), Some("30"));
}

#[tokio::test]
async fn slow_reader_sees_only_newest_set() {
    let control = control_at(12, 0);
    let (_settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());
    let active = RefreshDriver::new(control.to_clock(), settings_rx)
        .period(DEFAULT_PERIOD)
        .time_zone(TimeZone::UTC)
        .activate();
    let mut items = active.subscribe();

    for _ in 0..3 {
        settle().await;
        control.advance(Duration::from_secs(15 * 60));
    }
    settle().await;

    timeout(WAIT, items.changed())
        .await
        .expect("tick within timeout")
        .expect("driver still active");

    assert_eq!(items.borrow_and_update()[PeriodType::Hour].percentage(), 75);
    assert!(!items.has_changed().expect("driver still active"));
}

#[tokio::test]
async fn saved_settings_apply_on_next_tick() {
    let control = control_at(12, 0);
    let (settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());
    let active = RefreshDriver::new(control.to_clock(), settings_rx)
        .time_zone(TimeZone::UTC)
        .activate();
    let mut items = active.subscribe();

    assert_eq!(active.latest()[PeriodType::Workday].percentage(), 42);

    settings_tx.send_replace(WorkdaySettings::default().with_start(ClockTime::new(11, 0).expect("valid time")));
    settle().await;
    control.advance(DEFAULT_PERIOD);

    timeout(WAIT, items.changed())
        .await
        .expect("tick within timeout")
        .expect("driver still active");

    // One hour into a five hour day.
    assert_eq!(items.borrow_and_update()[PeriodType::Workday].percentage(), 20);
}

#[tokio::test]
async fn dropping_the_guard_stops_publication() {
    let control = control_at(12, 0);
    let (_settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());
    let active = RefreshDriver::new(control.to_clock(), settings_rx)
        .time_zone(TimeZone::UTC)
        .activate();
    let mut items = active.subscribe();

    settle().await;
    drop(active);

    let closed = timeout(WAIT, items.changed()).await.expect("closed within timeout");
    assert!(closed.is_err());

    control.advance(Duration::from_secs(60));
    settle().await;

    assert_eq!(items.borrow()[PeriodType::Hour].percentage(), 0);
}
