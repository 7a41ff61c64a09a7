// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-element delay for sequences.

use futures::stream::FuturesOrdered;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{sleep, Sleep};

/// Upper bound on elements waiting out their delay at once.
pub const MAX_IN_FLIGHT: usize = 64;

/// Stream adapter that holds back every element for a fixed duration.
///
/// Each element starts its own timer as soon as it is pulled from upstream, so
/// delays are measured independently rather than accumulated. Elements that
/// arrive together are released together, still in arrival order. Timers come
/// from tokio, so the adapter must be polled inside a tokio runtime.
///
/// At most [`MAX_IN_FLIGHT`] elements are held at once. While the buffer is
/// full upstream is left alone, so an endless source still emits.
#[pin_project]
pub struct DelayElements<S>
where
    S: Stream,
{
    #[pin]
    stream: S,
    duration: Duration,
    in_flight: FuturesOrdered<DelayFuture<S::Item>>,
    upstream_done: bool,
}

impl<S> DelayElements<S>
where
    S: Stream,
{
    pub fn new(stream: S, duration: Duration) -> Self {
        Self {
            stream,
            duration,
            in_flight: FuturesOrdered::new(),
            upstream_done: false,
        }
    }
}

#[pin_project]
struct DelayFuture<T> {
    #[pin]
    delay: Sleep,
    value: Option<T>,
}

impl<T> Future for DelayFuture<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.delay.poll(cx) {
            Poll::Ready(()) => match this.value.take() {
                Some(value) => Poll::Ready(value),
                None => unreachable!("DelayFuture polled after completion"),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<S> Stream for DelayElements<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if !*this.upstream_done {
            while this.in_flight.len() < MAX_IN_FLIGHT {
                match this.stream.as_mut().poll_next(cx) {
                    Poll::Ready(Some(value)) => {
                        trace!("delaying element by {:?}", this.duration);
                        this.in_flight.push_back(DelayFuture {
                            delay: sleep(*this.duration),
                            value: Some(value),
                        });
                    }
                    Poll::Ready(None) => {
                        *this.upstream_done = true;
                        break;
                    }
                    Poll::Pending => break,
                }
            }
        }

        match this.in_flight.poll_next_unpin(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(item)),
            Poll::Ready(None) if *this.upstream_done => Poll::Ready(None),
            Poll::Ready(None) | Poll::Pending => Poll::Pending,
        }
    }
}
