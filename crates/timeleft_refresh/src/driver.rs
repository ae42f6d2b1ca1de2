// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use futures_util::StreamExt;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use tick::{Clock, PeriodicTimer};
use timeleft::{TimeItems, WorkdaySettings, calculate};
use tokio::sync::watch;

use crate::ActiveRefresh;

/// How often results are recomputed unless configured otherwise.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(40);

/// Recomputes [`TimeItems`] on a fixed interval.
///
/// The driver is inert until [`activate`][Self::activate] is called. Settings are
/// read from a watch channel at every tick, so a newly published
/// [`WorkdaySettings`] value takes effect on the next recomputation.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use jiff::tz::TimeZone;
/// use tick::Clock;
/// use timeleft::WorkdaySettings;
/// use timeleft_refresh::RefreshDriver;
/// use tokio::sync::watch;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (_settings_tx, settings_rx) = watch::channel(WorkdaySettings::default());
///
/// let active = RefreshDriver::new(Clock::new_tokio(), settings_rx)
///     .period(Duration::from_millis(100))
///     .time_zone(TimeZone::UTC)
///     .activate();
///
/// let mut items = active.subscribe();
/// items.changed().await.unwrap();
/// println!("{}%", items.borrow()[timeleft::PeriodType::Day].percentage());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RefreshDriver {
    clock: Clock,
    settings: watch::Receiver<WorkdaySettings>,
    period: Duration,
    time_zone: TimeZone,
}

impl RefreshDriver {
    /// Creates a driver ticking every [`DEFAULT_PERIOD`] in the system time zone.
    #[must_use]
    pub fn new(clock: Clock, settings: watch::Receiver<WorkdaySettings>) -> Self {
        Self {
            clock,
            settings,
            period: DEFAULT_PERIOD,
            time_zone: TimeZone::system(),
        }
    }

    /// Sets the recomputation interval.
    #[must_use]
    pub const fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Sets the time zone in which calendar periods are evaluated.
    #[must_use]
    pub fn time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Computes the results for the current clock time and settings.
    #[must_use]
    pub fn snapshot(&self) -> TimeItems {
        let settings = self.settings.borrow().clone();
        calculate(&self.now(), &settings)
    }

    /// Publishes a first result set right away and starts the periodic task.
    ///
    /// Recomputation stops when the returned guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn activate(self) -> ActiveRefresh {
        let (publisher, items) = watch::channel(Arc::new(self.snapshot()));
        let mut timer = PeriodicTimer::new(&self.clock, self.period);

        tracing::debug!(refresh.period_ms = self.period.as_millis(), "timeleft.refresh.activate");

        let task = tokio::spawn(async move {
            while timer.next().await.is_some() {
                publisher.send_replace(Arc::new(self.snapshot()));
            }
        });

        ActiveRefresh::new(items, task)
    }

    fn now(&self) -> Zoned {
        timestamp(self.clock.system_time()).to_zoned(self.time_zone.clone())
    }
}

/// Converts a clock reading, saturating outside the range `jiff` supports.
fn timestamp(time: SystemTime) -> Timestamp {
    Timestamp::try_from(time).unwrap_or_else(|error| {
        tracing::warn!(refresh.error = %error, "timeleft.refresh.clock");
        if time < SystemTime::UNIX_EPOCH {
            Timestamp::MIN
        } else {
            Timestamp::MAX
        }
    })
}
