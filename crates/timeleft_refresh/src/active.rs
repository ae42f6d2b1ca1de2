// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use timeleft::TimeItems;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A running refresh loop, stopped when dropped.
///
/// Publication is last-write-wins: a receiver that falls behind observes only the
/// newest result set. Every published set is one complete calculator output.
#[derive(Debug)]
pub struct ActiveRefresh {
    items: watch::Receiver<Arc<TimeItems>>,
    task: JoinHandle<()>,
}

impl ActiveRefresh {
    pub(crate) const fn new(items: watch::Receiver<Arc<TimeItems>>, task: JoinHandle<()>) -> Self {
        Self { items, task }
    }

    /// The most recently published result set.
    #[must_use]
    pub fn latest(&self) -> Arc<TimeItems> {
        Arc::clone(&self.items.borrow())
    }

    /// A receiver notified on every publication.
    ///
    /// The receiver reports the channel as closed once the guard is dropped and the
    /// refresh task has stopped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<TimeItems>> {
        let mut items = self.items.clone();
        items.mark_unchanged();
        items
    }
}

impl Drop for ActiveRefresh {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("timeleft.refresh.deactivate");
    }
}
