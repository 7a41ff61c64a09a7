// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::subscription::Subscription;
use futures::stream::{Stream, StreamExt};
use rill_core::{Result, RillError};
use tokio::runtime::Handle;

/// Extension trait providing push-style subscription for streams.
///
/// Implemented for every `Stream + Send + 'static`, which includes
/// `rill_stream::Sequence`.
pub trait SubscribeExt: Stream + Sized {
    /// Starts delivering elements to `on_next` on a background task.
    ///
    /// The calling flow is never blocked: `subscribe` returns as soon as the
    /// delivery task is spawned on the current tokio runtime. `on_next` is
    /// invoked once per element, in order, and never concurrently with itself.
    ///
    /// # Errors
    ///
    /// Returns [`RillError::RuntimeUnavailable`] when called outside a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_exec::SubscribeExt;
    /// use futures::stream;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> rill_core::Result<()> {
    /// let total = Arc::new(AtomicUsize::new(0));
    /// let sum = total.clone();
    ///
    /// let subscription = stream::iter(vec![1, 2, 3]).subscribe(move |n| {
    ///     sum.fetch_add(n, Ordering::SeqCst);
    /// })?;
    ///
    /// assert_eq!(subscription.join().await?, 3);
    /// assert_eq!(total.load(Ordering::SeqCst), 6);
    /// # Ok(())
    /// # }
    /// ```
    fn subscribe<F>(self, on_next: F) -> Result<Subscription>
    where
        F: FnMut(Self::Item) + Send + 'static;
}

impl<S> SubscribeExt for S
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    fn subscribe<F>(self, mut on_next: F) -> Result<Subscription>
    where
        F: FnMut(Self::Item) + Send + 'static,
    {
        let handle = Handle::try_current()
            .map_err(|error| RillError::runtime_unavailable(error.to_string()))?;

        let task = handle.spawn(async move {
            let mut stream = Box::pin(self);
            let mut delivered = 0usize;

            debug!("subscription started");
            while let Some(item) = stream.next().await {
                on_next(item);
                delivered += 1;
            }
            debug!("subscription completed after {} elements", delivered);

            delivered
        });

        Ok(Subscription::new(task))
    }
}
