// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic countdown latch.
//!
//! A `CountDownLatch` starts at a fixed count and releases every waiter once
//! `count_down()` has been called that many times. It can be awaited from any
//! async runtime or waited on from a plain thread.

use crate::{Result, RillError};
use event_listener::{Event, EventListener, Listener};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

/// One-shot countdown latch.
///
/// Clones share the same counter. Once the count reaches zero the latch stays
/// released forever; further `count_down()` calls are no-ops.
///
/// # Example
///
/// ```
/// use rill_core::CountDownLatch;
///
/// # #[tokio::main]
/// # async fn main() {
/// let latch = CountDownLatch::new(1);
/// let signal = latch.clone();
///
/// tokio::spawn(async move {
///     signal.count_down();
/// });
///
/// latch.wait().await;
/// assert!(latch.is_released());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CountDownLatch {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    count: AtomicUsize,
    event: Event,
}

impl CountDownLatch {
    /// Create a latch that releases after `count` calls to [`count_down`](Self::count_down).
    ///
    /// A latch created with a count of zero is already released.
    pub fn new(count: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                count: AtomicUsize::new(count),
                event: Event::new(),
            }),
        }
    }

    /// Decrement the count, releasing all waiters when it reaches zero.
    pub fn count_down(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            });

        if previous == Ok(1) {
            self.inner.event.notify(usize::MAX);
        }
    }

    /// Remaining count before release.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    /// Check if the latch has reached zero (non-blocking).
    pub fn is_released(&self) -> bool {
        self.count() == 0
    }

    /// Wait asynchronously until the latch is released.
    ///
    /// There is no upper bound on the wait: a producer that never counts down
    /// leaves the returned future pending forever.
    pub fn wait(&self) -> Released<'_> {
        Released {
            latch: self,
            listener: None,
        }
    }

    /// Block the calling thread until the latch is released.
    ///
    /// Must not be called from inside a single-threaded async runtime: the
    /// task that would count down could never run.
    pub fn wait_blocking(&self) {
        loop {
            if self.is_released() {
                return;
            }

            let listener = self.listen();
            if self.is_released() {
                return;
            }
            listener.wait();
        }
    }

    /// Block the calling thread until the latch is released or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`RillError::Timeout`] if the latch is still held after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;

        loop {
            if self.is_released() {
                return Ok(());
            }

            let listener = self.listen();
            if self.is_released() {
                return Ok(());
            }

            if listener.wait_deadline(deadline).is_none() && !self.is_released() {
                return Err(RillError::timeout(format!(
                    "latch still at {} after {:?}",
                    self.count(),
                    timeout
                )));
            }
        }
    }

    fn listen(&self) -> EventListener {
        self.inner.event.listen()
    }
}

/// Future returned by [`CountDownLatch::wait()`].
pub struct Released<'a> {
    latch: &'a CountDownLatch,
    listener: Option<EventListener>,
}

impl Future for Released<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if this.latch.is_released() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Register, then loop to re-check the count before parking.
                None => this.listener = Some(this.latch.listen()),
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => this.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}
