// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rill_stream::delay_elements::MAX_IN_FLIGHT;
use rill_stream::Sequence;
use rill_test_utils::test_data::{people, person_carolin, person_julio};
use rill_test_utils::{assert_no_element_emitted, next_within};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_delay_holds_elements_until_duration_elapses() {
    // Arrange
    let mut delayed = Sequence::of(vec![person_julio(), person_carolin()])
        .delay_elements(Duration::from_secs(1));

    // Assert - nothing before the delay
    assert_no_element_emitted(&mut delayed, 900).await;

    // Assert - both arrive once the delay has elapsed
    assert_eq!(next_within(&mut delayed, 200).await, Some(person_julio()));
    assert_eq!(next_within(&mut delayed, 10).await, Some(person_carolin()));
    assert_eq!(delayed.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_delays_are_measured_independently_per_element() {
    // Arrange
    let started = Instant::now();

    // Act
    let emitted = Sequence::of(people())
        .delay_elements(Duration::from_secs(1))
        .collect_list()
        .await
        .unwrap_or_default();

    // Assert - four synchronous elements all become due after one delay
    let elapsed = started.elapsed();
    assert_eq!(emitted, people());
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_delay_preserves_order_of_channel_elements() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = futures::channel::mpsc::unbounded();
    let mut delayed = Sequence::from_stream(rx).delay_elements(Duration::from_millis(100));

    // Act
    tx.unbounded_send(1)?;
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.unbounded_send(2)?;
    drop(tx);

    // Assert
    let started = Instant::now();
    assert_eq!(delayed.next().await, Some(1));
    assert_eq!(delayed.next().await, Some(2));
    assert_eq!(delayed.next().await, None);
    assert!(started.elapsed() >= Duration::from_millis(100));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_on_empty_sequence_completes_immediately() {
    let started = Instant::now();

    let emitted = Sequence::<u32>::empty()
        .delay_elements(Duration::from_secs(5))
        .collect_list()
        .await;

    assert_eq!(emitted, Some(Vec::new()));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn test_filter_after_delay_keeps_order() {
    let names: Vec<String> = Sequence::of(people())
        .delay_elements(Duration::from_secs(1))
        .filter(|person| person.first_name.contains('y'))
        .map(|person| person.first_name)
        .collect_list()
        .await
        .unwrap_or_default();

    assert_eq!(names, vec!["Nayeli"]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_emits_from_endless_source() {
    // Arrange
    let delayed = Sequence::of(0u64..).delay_elements(Duration::from_millis(10));

    // Act
    let emitted: Vec<u64> = delayed.take(3).collect().await;

    // Assert
    assert_eq!(emitted, vec![0, 1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_pulls_again_once_buffer_drains() {
    // Arrange
    let total = MAX_IN_FLIGHT + 10;
    let started = Instant::now();

    // Act
    let emitted = Sequence::of(0..total)
        .delay_elements(Duration::from_secs(1))
        .collect_list()
        .await
        .unwrap_or_default();

    // Assert - the overflow waits for room, then serves its own delay
    let elapsed = started.elapsed();
    assert_eq!(emitted, (0..total).collect::<Vec<_>>());
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
}

#[test]
fn test_blocking_get_on_delayed_sequence_outside_runtime() {
    let first = Sequence::of(people())
        .delay_elements(Duration::from_millis(10))
        .first()
        .blocking_get();

    assert_eq!(first, Some(person_julio()));
}

#[tokio::test]
async fn test_blocking_get_on_delayed_sequence_inside_runtime() {
    let count = Sequence::of(people())
        .delay_elements(Duration::from_millis(10))
        .count()
        .blocking_get();

    assert_eq!(count, Some(4));
}
