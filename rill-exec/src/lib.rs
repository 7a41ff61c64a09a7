// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Push-style subscriptions.
//!
//! [`SubscribeExt::subscribe`] drives any stream on a tokio task and hands
//! each element to a callback. The returned [`Subscription`] can be joined,
//! disposed, or simply dropped to let delivery run detached.

#[macro_use]
mod logging;

pub mod subscribe;
pub mod subscription;

pub use self::subscribe::SubscribeExt;
pub use self::subscription::Subscription;
