// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rill workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Test Fixtures
//!
//! - [`Person`] - first and last name with a greeting
//! - [`PersonCommand`] - wraps a `Person` produced by a transformation
//! - [`test_data`] - the four named people used across the suites
//!
//! ```rust
//! use rill_test_utils::test_data::{people, person_julio};
//!
//! assert_eq!(person_julio().say_my_name(), "My name is Julio Chacón");
//! assert_eq!(people().len(), 4);
//! ```
//!
//! # Helpers
//!
//! - [`Recorder`] - shared sink for subscriber callbacks
//! - [`init_test_logging`] - `tracing-subscriber` setup honoring `RUST_LOG`
//! - [`tracing`] - re-exported for logging from test bodies
//! - [`assert_no_element_emitted`], [`next_within`] - timed stream assertions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod person_command;
pub mod recorder;
pub mod test_data;

pub use helpers::{assert_no_element_emitted, expect_next, init_test_logging, next_within};
pub use person::Person;
pub use person_command::PersonCommand;
pub use recorder::Recorder;

// Re-exported so suites log through the same `tracing` the subscriber listens to
pub use tracing;
