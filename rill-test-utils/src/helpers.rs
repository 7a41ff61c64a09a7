// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber.
///
/// Honors `RUST_LOG` and defaults to `info`. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits up to `timeout_ms` for the next element.
///
/// Returns `None` if the stream ended or nothing arrived in time.
pub async fn next_within<S, T>(stream: &mut S, timeout_ms: u64) -> Option<T>
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => item,
        _ = sleep(Duration::from_millis(timeout_ms)) => None,
    }
}

pub async fn expect_next<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = T> + Unpin,
    T: PartialEq + std::fmt::Debug,
{
    let item = stream.next().await.expect("expected next item");
    assert_eq!(item, expected);
}
