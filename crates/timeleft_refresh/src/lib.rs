// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, reason = "allow these lints in tests to improve the readability of the tests")
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Keeps [`timeleft`] results fresh on a timer.
//!
//! A [`RefreshDriver`] computes one [`TimeItems`](timeleft::TimeItems) set as soon
//! as it is activated and then recomputes on a fixed interval, 40 ms by default.
//! Results are published through a [`tokio::sync::watch`] channel, so readers
//! always see the newest complete set and never a backlog.
//!
//! Time comes from a [`tick::Clock`]. In production that is usually
//! [`Clock::new_tokio`](tick::Clock::new_tokio); in tests a
//! `tick::ClockControl` makes every tick deterministic.
//!
//! The loop lives exactly as long as the [`ActiveRefresh`] guard returned by
//! [`RefreshDriver::activate`]. Dropping the guard stops the task and releases its
//! timer.

mod active;
mod driver;

pub use active::ActiveRefresh;
pub use driver::{DEFAULT_PERIOD, RefreshDriver};
