// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Completion callback for sequences.

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream adapter that runs a callback once upstream is exhausted.
///
/// The callback fires exactly once, on the first `Ready(None)` from upstream,
/// before that end-of-stream is forwarded. A stream dropped before it ends
/// never fires the callback.
#[pin_project]
pub struct OnComplete<S, F> {
    #[pin]
    stream: S,
    callback: Option<F>,
}

impl<S, F> OnComplete<S, F> {
    pub const fn new(stream: S, callback: F) -> Self {
        Self {
            stream,
            callback: Some(callback),
        }
    }
}

impl<S, F> Stream for OnComplete<S, F>
where
    S: Stream,
    F: FnOnce(),
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if this.callback.is_none() {
            return Poll::Ready(None);
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(None) => {
                if let Some(callback) = this.callback.take() {
                    trace!("sequence completed, running completion callback");
                    callback();
                }
                Poll::Ready(None)
            }
            other => other,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.callback.is_none() {
            (0, Some(0))
        } else {
            self.stream.size_hint()
        }
    }
}
