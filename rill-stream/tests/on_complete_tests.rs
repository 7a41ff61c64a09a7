// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rill_core::CountDownLatch;
use rill_stream::Sequence;
use rill_test_utils::test_data::people;
use rill_test_utils::Recorder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn counting_callback() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    (calls, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_callback_runs_once_after_last_element() {
    // Arrange
    let events = Recorder::new();
    let on_element = events.clone();
    let on_done = events.clone();

    // Act
    let count = Sequence::of(people())
        .tap(move |person| on_element.record(person.first_name.clone()))
        .on_complete(move || on_done.record("complete".to_string()))
        .count()
        .blocking_get();

    // Assert
    assert_eq!(count, Some(4));
    assert_eq!(
        events.snapshot(),
        vec!["Julio", "Carolin", "Nayeli", "Fabiana", "complete"]
    );
}

#[test]
fn test_callback_runs_for_empty_sequence() {
    let (calls, callback) = counting_callback();

    let count = Sequence::<u8>::empty()
        .on_complete(callback)
        .count()
        .blocking_get();

    assert_eq!(count, Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_callback_not_repeated_when_polled_after_end() {
    let (calls, callback) = counting_callback();
    let mut sequence = Sequence::of(vec![1, 2]).on_complete(callback);

    while sequence.next().await.is_some() {}
    assert_eq!(sequence.next().await, None);
    assert_eq!(sequence.next().await, None);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_callback_skipped_when_dropped_early() {
    let (calls, callback) = counting_callback();

    let first = Sequence::of(people()).on_complete(callback).first().await;

    assert!(first.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_callback_releases_latch_after_delayed_elements() -> anyhow::Result<()> {
    // Arrange
    let latch = CountDownLatch::new(1);
    let signal = latch.clone();
    let delivered = Recorder::new();
    let sink = delivered.clone();

    let sequence = Sequence::of(people())
        .delay_elements(Duration::from_secs(1))
        .tap(move |person| sink.record(person.clone()))
        .on_complete(move || signal.count_down());

    // Act
    let driver = tokio::spawn(sequence.count().get());
    latch.wait().await;

    // Assert
    assert_eq!(delivered.snapshot(), people());
    assert_eq!(driver.await?, Some(4));

    Ok(())
}
