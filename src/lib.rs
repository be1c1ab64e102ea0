//! # Verdict
//!
//! Outcome values with structured reasons and fluent success/failure
//! combinators.
//!
//! An [`Outcome<T>`] is a value, a success flag, and an ordered list of
//! [`Reason`]s explaining that flag. Unlike `Result`, the value is present on
//! both branches, so a failed outcome can still carry a partial result or a
//! placeholder. Pipelines are built from two families of combinators:
//!
//! - **`when_*`** observe an outcome and hand it back unchanged
//! - **`on_*`** replace an outcome with the one a callback produces
//!
//! Every combinator has an `_async` twin, available both on a resolved
//! outcome and on any future that resolves to one (via [`OutcomeFutureExt`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use verdict::{Error, IntoOutcome, Outcome, Success};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port, [Success::create("parsed")]),
//!         Err(_) => Outcome::fail(0, [Error::create(format!("not a port: {raw}"))]),
//!     }
//! }
//!
//! let mut rejected = Vec::new();
//! let port = parse_port("http")
//!     .when_fail_outcome(|o| rejected.extend(o.errors().map(|e| e.message().to_string())))
//!     .on_fail(|| 8080.into_success())
//!     .into_value();
//!
//! assert_eq!(port, 8080);
//! assert_eq!(rejected, vec!["not a port: http"]);
//! ```
//!
//! ## Async pipelines
//!
//! ```rust
//! use verdict::{IntoOutcome, Outcome, OutcomeFutureExt};
//!
//! async fn fetch(id: u32) -> Outcome<String> {
//!     format!("user-{id}").into_success()
//! }
//!
//! # tokio_test::block_on(async {
//! let name = fetch(7)
//!     .on_success_value_async(|name| async move { name.to_uppercase().into_success() })
//!     .await;
//! assert_eq!(name.value(), "USER-7");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapt;
pub mod collect;
pub mod combinators;
pub mod error;
pub mod outcome;
pub mod reason;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use collect::{collect_failures, collect_successes, partition_outcomes, OutcomeIteratorExt};
pub use combinators::OutcomeFutureExt;
pub use error::{OutcomeError, StatusConflict};
pub use outcome::{IntoOutcome, Outcome};
pub use reason::{Error, Metadata, MetadataValue, Reason, Role, Success};

#[cfg(feature = "tracing")]
pub use trace::OutcomeTracingExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collect::OutcomeIteratorExt;
    pub use crate::combinators::OutcomeFutureExt;
    pub use crate::error::OutcomeError;
    pub use crate::outcome::{IntoOutcome, Outcome};
    pub use crate::reason::{Error, Reason, Success};

    #[cfg(feature = "tracing")]
    pub use crate::trace::OutcomeTracingExt;
}
