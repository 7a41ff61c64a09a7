// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Single-value deferred container.
//!
//! [`SoloValue`] holds zero or one value produced lazily. It can be resolved
//! synchronously with [`SoloValue::blocking_get`] or awaited.

#[macro_use]
mod logging;

pub mod solo_value;

pub use self::solo_value::SoloValue;
