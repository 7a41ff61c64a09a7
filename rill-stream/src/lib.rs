// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Multi-value sequences for rill.
//!
//! # Overview
//!
//! - **[`Sequence<T>`]** - lazy, ordered, finite sequence implementing [`futures::Stream`]
//! - **[`DelayElements`]** - per-element delay adapter backed by the tokio timer
//! - **[`OnComplete`]** - adapter that fires a callback once upstream ends
//!
//! # Example
//!
//! ```rust
//! use rill_stream::Sequence;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let completed = Arc::new(AtomicBool::new(false));
//! let flag = completed.clone();
//!
//! let count = Sequence::of(1..=4)
//!     .filter(|n| n % 2 == 0)
//!     .on_complete(move || flag.store(true, Ordering::SeqCst))
//!     .count()
//!     .blocking_get();
//!
//! assert_eq!(count, Some(2));
//! assert!(completed.load(Ordering::SeqCst));
//! ```

#[macro_use]
mod logging;

pub mod delay_elements;
pub mod on_complete;
pub mod sequence;

pub use self::delay_elements::DelayElements;
pub use self::on_complete::OnComplete;
pub use self::sequence::Sequence;
