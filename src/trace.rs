//! Tracing support for outcomes.
//!
//! This module provides the [`OutcomeTracingExt`] observer, which records an
//! outcome as a `tracing` event and hands it back unchanged. Feature-gated
//! behind `#[cfg(feature = "tracing")]`.
//!
//! With the feature on, the status-inferring constructors and adaptation
//! also emit `debug` events when they reject their input.

use crate::outcome::Outcome;
use crate::reason::Reason;

/// Extension trait for recording outcomes as tracing events.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait OutcomeTracingExt: Sized {
    /// Record this outcome and return it unchanged.
    ///
    /// Successful outcomes are recorded at `DEBUG`, failed ones at `WARN`
    /// together with the first error message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::trace::OutcomeTracingExt;
    /// use verdict::{Error, IntoOutcome, Outcome};
    ///
    /// let outcome = Outcome::fail("guest", [Error::create("user not found")])
    ///     .trace_outcome("load_user")
    ///     .on_fail(|| "anonymous".into_success());
    ///
    /// assert_eq!(*outcome.value(), "anonymous");
    /// ```
    fn trace_outcome(self, step: &str) -> Self;
}

impl<T> OutcomeTracingExt for Outcome<T> {
    fn trace_outcome(self, step: &str) -> Self {
        let value_type = self.value_type();
        if self.is_success() {
            tracing::debug!(
                step,
                value_type,
                successes = self.successes().count(),
                "outcome succeeded"
            );
        } else {
            tracing::warn!(
                step,
                value_type,
                errors = self.errors().count(),
                first_error = self.errors().next().map(Reason::message).unwrap_or(""),
                "outcome failed"
            );
        }
        self
    }
}
