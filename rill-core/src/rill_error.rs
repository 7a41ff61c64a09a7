// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rill reactive toolkit
//!
//! Absent values are never errors: a `SoloValue` that resolves to nothing
//! yields `None`. [`RillError`] covers the failure modes of driving values and
//! sequences: subscribing without a runtime, joining a disposed or panicked
//! subscription, and bounded waits that elapse.
//!
//! # Examples
//!
//! ```
//! use rill_core::{Result, RillError};
//!
//! fn subscribe_now() -> Result<()> {
//!     Err(RillError::runtime_unavailable("no tokio runtime on this thread"))
//! }
//!
//! assert!(subscribe_now().is_err());
//! ```

/// Root error type for all rill operations
#[derive(Debug, thiserror::Error)]
pub enum RillError {
    /// A subscription was requested outside of an async runtime
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Why the runtime could not be reached
        context: String,
    },

    /// The subscription was disposed before delivery finished
    #[error("Subscription cancelled before completion")]
    SubscriptionCancelled,

    /// The subscriber callback panicked while handling an element
    #[error("Subscriber panicked: {context}")]
    SubscriberPanicked {
        /// Panic payload rendered as text, when available
        context: String,
    },

    /// A bounded wait elapsed before the awaited signal arrived
    #[error("Timeout error: {context}")]
    Timeout {
        /// What was being waited on and for how long
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RillError {
    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Create a subscriber-panicked error with the given context
    pub fn subscriber_panicked(context: impl Into<String>) -> Self {
        Self::SubscriberPanicked {
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context
    pub fn timeout(context: impl Into<String>) -> Self {
        Self::Timeout {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error ended a subscription early
    ///
    /// Cancellation and subscriber panics both stop delivery before the
    /// sequence completes.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::SubscriptionCancelled | Self::SubscriberPanicked { .. }
        )
    }
}

/// Specialized Result type for rill operations
pub type Result<T> = std::result::Result<T, RillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_display_includes_context() {
        let error = RillError::timeout("latch after 10ms");
        assert_eq!(error.to_string(), "Timeout error: latch after 10ms");
    }

    #[test]
    fn test_user_error_keeps_source() {
        let error = RillError::user_error(Boom);
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn test_terminal_classification() {
        assert!(RillError::SubscriptionCancelled.is_terminal());
        assert!(RillError::subscriber_panicked("oops").is_terminal());
        assert!(!RillError::runtime_unavailable("none").is_terminal());
        assert!(!RillError::timeout("late").is_terminal());
    }
}
