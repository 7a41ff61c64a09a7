// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared sink that records every item handed to it.
///
/// Clones share the same buffer, so one clone can move into a subscriber
/// callback while the test keeps another for assertions.
///
/// ```rust
/// use rill_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let mut sink = recorder.sink();
/// sink(1);
/// sink(2);
/// assert_eq!(recorder.snapshot(), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Returns a callback that records each item it receives.
    pub fn sink(&self) -> impl FnMut(T) + Send + 'static
    where
        T: Send + 'static,
    {
        let recorder = self.clone();
        move |item| recorder.record(item)
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.lock().clone()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
