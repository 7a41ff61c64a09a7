// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic;
use std::thread;
use tokio::runtime::{Builder, Handle, RuntimeFlavor};
use tokio::task::block_in_place;

/// A deferred container for zero or one value.
///
/// Nothing runs until the value is retrieved with [`blocking_get`](Self::blocking_get)
/// or by awaiting the container. Operators such as [`map`](Self::map) and
/// [`filter`](Self::filter) only describe work; they are applied at retrieval.
///
/// Absence is always reported as `None`, so a filtered-out value has to be
/// matched before use.
///
/// # Examples
///
/// ```
/// use rill_solo::SoloValue;
///
/// let greeting = SoloValue::of("Carolin")
///     .map(|name| format!("My name is {name}"))
///     .blocking_get();
/// assert_eq!(greeting.as_deref(), Some("My name is Carolin"));
///
/// let absent = SoloValue::of(7).filter(|n| n % 2 == 0).blocking_get();
/// assert_eq!(absent, None);
/// ```
#[must_use = "a SoloValue does nothing until it is retrieved"]
pub struct SoloValue<T> {
    inner: BoxFuture<'static, Option<T>>,
}

impl<T> SoloValue<T>
where
    T: Send + 'static,
{
    /// Creates a container that yields exactly `value`.
    pub fn of(value: T) -> Self {
        Self::from_optional(async move { Some(value) })
    }

    /// Creates a container that yields nothing.
    pub fn empty() -> Self {
        Self::from_optional(async { None })
    }

    /// Creates a container that yields the output of `future`.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::from_optional(future.map(Some))
    }

    /// Creates a container from a future that may produce no value.
    pub fn from_optional<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            inner: future.boxed(),
        }
    }

    /// Transforms the eventual value with `f`.
    ///
    /// `f` runs at most once, at retrieval, and only if a value is present.
    pub fn map<U, F>(self, f: F) -> SoloValue<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        SoloValue::from_optional(self.inner.map(move |value| value.map(f)))
    }

    /// Keeps the eventual value only if `predicate` holds.
    ///
    /// A failing predicate turns the container empty; it is not an error.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_optional(self.inner.map(move |value| value.filter(predicate)))
    }

    /// Substitutes `fallback` when the container resolves to nothing.
    pub fn default_if_empty(self, fallback: T) -> Self {
        Self::from_optional(self.inner.map(move |value| value.or(Some(fallback))))
    }

    /// Resolves the container, blocking the calling thread until done.
    ///
    /// The value is driven on a tokio runtime so timer-based containers (for
    /// example the first element of a delayed sequence) make progress from
    /// any caller:
    ///
    /// - outside a runtime, on a private current-thread runtime;
    /// - inside a multi-thread runtime, in place via `block_in_place`;
    /// - inside a current-thread runtime, on a helper thread with its own
    ///   runtime, since that runtime cannot be blocked on from within.
    ///
    /// There is no timeout. A container that waits on work only the blocked
    /// current-thread runtime could run never resolves.
    pub fn blocking_get(self) -> Option<T> {
        trace!("blocking on solo value");
        let value = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                block_in_place(move || handle.block_on(self.inner))
            }
            Ok(_) => {
                let inner = self.inner;
                match thread::spawn(move || block_on_private_runtime(inner)).join() {
                    Ok(value) => value,
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
            Err(_) => block_on_private_runtime(self.inner),
        };
        if value.is_none() {
            debug!("solo value resolved to absent");
        }
        value
    }

    /// Resolves the container asynchronously.
    pub async fn get(self) -> Option<T> {
        self.inner.await
    }
}

fn block_on_private_runtime<T>(future: BoxFuture<'static, Option<T>>) -> Option<T> {
    match Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime.block_on(future),
        Err(error) => {
            warn!("could not start a runtime for blocking_get, timers will not fire: {}", error);
            futures::executor::block_on(future)
        }
    }
}

impl<T> IntoFuture for SoloValue<T> {
    type Output = Option<T>;
    type IntoFuture = BoxFuture<'static, Option<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<T> fmt::Debug for SoloValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoloValue").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolves_to_none() {
        assert_eq!(SoloValue::<u8>::empty().blocking_get(), None);
    }

    #[test]
    fn test_default_if_empty_keeps_present_value() {
        assert_eq!(SoloValue::of(1).default_if_empty(2).blocking_get(), Some(1));
    }
}
