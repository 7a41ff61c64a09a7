// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rill
//!
//! A minimal reactive toolkit built on `futures` and `tokio`.
//!
//! ## Overview
//!
//! - [`SoloValue<T>`] - zero or one deferred value, resolved with
//!   [`SoloValue::blocking_get`] or by awaiting it
//! - [`Sequence<T>`] - ordered, finite, lazy sequence with `map`, `filter`,
//!   `delay_elements` and `on_complete`
//! - [`SubscribeExt::subscribe`] - push delivery on a background task, returning a
//!   joinable [`Subscription`]
//! - [`CountDownLatch`] - wait for asynchronous completion from any flow
//!
//! ## Quick Start
//!
//! ```rust
//! use rill::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> rill::Result<()> {
//! let upper = SoloValue::of("julio").map(str::to_uppercase).blocking_get();
//! assert_eq!(upper.as_deref(), Some("JULIO"));
//!
//! let latch = CountDownLatch::new(1);
//! let done = latch.clone();
//!
//! let subscription = Sequence::of(["Julio", "Carolin"])
//!     .delay_elements(Duration::from_millis(10))
//!     .on_complete(move || done.count_down())
//!     .subscribe(|name| println!("My name is {name}"))?;
//!
//! latch.wait().await;
//! assert_eq!(subscription.join().await?, 2);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use rill_core::{CountDownLatch, Result, RillError};
pub use rill_exec::{SubscribeExt, Subscription};
pub use rill_solo::SoloValue;
pub use rill_stream::Sequence;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CountDownLatch, Sequence, SoloValue, SubscribeExt, Subscription};
}
