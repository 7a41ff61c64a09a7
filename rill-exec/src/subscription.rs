// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Result, RillError};
use tokio::task::JoinHandle;

/// Handle to an active subscription.
///
/// Delivery runs on a background task. Dropping the handle detaches it:
/// elements keep flowing to the subscriber until the sequence completes.
/// [`join`](Self::join) is the structured way to wait for completion.
#[derive(Debug)]
#[must_use = "dropping a Subscription detaches it; join it to wait for completion"]
pub struct Subscription {
    task: JoinHandle<usize>,
}

impl Subscription {
    pub(crate) const fn new(task: JoinHandle<usize>) -> Self {
        Self { task }
    }

    /// Stops delivery. Elements not yet handed to the subscriber are dropped.
    pub fn dispose(&self) {
        debug!("disposing subscription");
        self.task.abort();
    }

    /// Returns `true` once delivery has finished, was disposed, or panicked.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the sequence to complete and returns how many elements were delivered.
    ///
    /// # Errors
    ///
    /// - [`RillError::SubscriptionCancelled`] if the subscription was disposed first
    /// - [`RillError::SubscriberPanicked`] if the subscriber callback panicked
    pub async fn join(self) -> Result<usize> {
        self.task.await.map_err(|error| {
            if error.is_cancelled() {
                RillError::SubscriptionCancelled
            } else {
                warn!("subscriber panicked: {}", error);
                RillError::subscriber_panicked(error.to_string())
            }
        })
    }
}
