// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::delay_elements::DelayElements;
use crate::on_complete::OnComplete;
use futures::future::ready;
use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt};
use rill_solo::SoloValue;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// A lazy, finite, ordered sequence of values.
///
/// Operators only describe work. Elements flow once the sequence is polled,
/// either by subscribing (see `rill_exec::SubscribeExt`), by awaiting one of
/// the [`SoloValue`] reductions, or by using it directly as a [`Stream`].
/// A consumed sequence cannot be restarted; build a new one instead.
///
/// # Examples
///
/// ```rust
/// use rill_stream::Sequence;
///
/// let lengths = Sequence::of(["Julio", "Carolin", "Nayeli", "Fabiana"])
///     .filter(|name| name.len() > 5)
///     .map(str::len)
///     .collect_list()
///     .blocking_get();
///
/// assert_eq!(lengths, Some(vec![7, 6, 7]));
/// ```
#[must_use = "a Sequence does nothing until it is subscribed or polled"]
pub struct Sequence<T> {
    inner: BoxStream<'static, T>,
}

impl<T> Sequence<T>
where
    T: Send + 'static,
{
    /// Creates a sequence that emits `values` in order, then completes.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_stream(stream::iter(values))
    }

    /// Creates a sequence that completes without emitting.
    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// Wraps any stream as a sequence.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self {
            inner: stream.boxed(),
        }
    }

    /// Emits the value of `solo`, if any, then completes.
    pub fn from_solo(solo: SoloValue<T>) -> Self {
        Self::from_stream(stream::once(solo.get()).filter_map(ready))
    }

    /// Transforms every element with `f`, preserving order and count.
    pub fn map<U, F>(self, f: F) -> Sequence<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        Sequence::from_stream(self.inner.map(f))
    }

    /// Keeps only elements for which `predicate` holds, in their original order.
    ///
    /// Rejecting every element yields an empty sequence, not an error.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        Self::from_stream(
            self.inner
                .filter_map(move |item| ready(predicate(&item).then_some(item))),
        )
    }

    /// Runs a side effect for every element without changing it.
    pub fn tap<F>(self, mut f: F) -> Self
    where
        F: FnMut(&T) + Send + 'static,
    {
        Self::from_stream(self.inner.map(move |item| {
            f(&item);
            item
        }))
    }

    /// Delays each element by `duration`, measured from when it is pulled.
    ///
    /// Delivery moves onto the tokio timer; the sequence has to be driven from
    /// inside a tokio runtime. At most
    /// [`MAX_IN_FLIGHT`](crate::delay_elements::MAX_IN_FLIGHT) elements wait
    /// at once.
    pub fn delay_elements(self, duration: Duration) -> Self {
        Self::from_stream(DelayElements::new(self.inner, duration))
    }

    /// Registers `callback` to run exactly once after the last element.
    ///
    /// An empty sequence runs it as soon as it is polled.
    pub fn on_complete<F>(self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::from_stream(OnComplete::new(self.inner, callback))
    }

    /// The first element, or absent if the sequence is empty.
    pub fn first(mut self) -> SoloValue<T> {
        SoloValue::from_optional(async move { self.inner.next().await })
    }

    /// All elements, in order, once the sequence completes.
    pub fn collect_list(self) -> SoloValue<Vec<T>> {
        SoloValue::from_future(self.inner.collect::<Vec<_>>())
    }

    /// Number of elements emitted before completion.
    pub fn count(self) -> SoloValue<usize> {
        SoloValue::from_future(self.inner.count())
    }
}

impl<T> Stream for Sequence<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> From<SoloValue<T>> for Sequence<T>
where
    T: Send + 'static,
{
    fn from(solo: SoloValue<T>) -> Self {
        Self::from_solo(solo)
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}
