// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by every rill crate.
//!
//! - [`RillError`] and the [`Result`] alias used across the workspace
//! - [`CountDownLatch`], a one-shot counter that releases waiters once it reaches zero

pub mod count_down_latch;
pub mod rill_error;

pub use self::count_down_latch::{CountDownLatch, Released};
pub use self::rill_error::{Result, RillError};
