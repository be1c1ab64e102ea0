//! Fluent combinators over [`Outcome`](crate::Outcome)
//!
//! Two families, split by intent:
//!
//! - **`when_*`** observe. The callback runs only when its branch is taken,
//!   returns `()`, and the outcome is handed back unchanged. Use these for
//!   logging, metrics and other side effects.
//! - **`on_*`** transform. The callback runs only when its branch is taken and
//!   its outcome replaces the original; otherwise the original passes through.
//!   `on_any` always runs.
//!
//! Each family comes in three callback shapes: no argument, the value
//! (`*_value`), or the whole outcome (`*_outcome`).
//!
//! Every combinator has an `_async` twin, available both on a held
//! [`Outcome`](crate::Outcome) and, through [`OutcomeFutureExt`], on any future
//! resolving to one. The future receiver is awaited first, then the branch is
//! evaluated exactly as in the synchronous version.
//!
//! # Examples
//!
//! ```
//! use verdict::{Error, IntoOutcome, Outcome};
//!
//! let mut audit = Vec::new();
//!
//! let outcome = 10
//!     .into_success()
//!     .when_success_value(|v| audit.push(format!("got {}", v)))
//!     .on_success_value(|v| {
//!         if v > 5 {
//!             Outcome::fail(v, [Error::create("too large")])
//!         } else {
//!             v.into_success()
//!         }
//!     })
//!     .on_fail_value(|v| (v / 2).into_success());
//!
//! assert_eq!(audit, vec!["got 10"]);
//! assert!(outcome.is_success());
//! assert_eq!(*outcome.value(), 5);
//! ```
//!
//! ## Async
//!
//! ```
//! use verdict::{IntoOutcome, OutcomeFutureExt};
//!
//! # tokio_test::block_on(async {
//! let outcome = async { 2.into_success() }
//!     .on_success_value_async(|v| async move { (v * 10).into_success() })
//!     .on_success_value_async(|v| async move { (v + 1).into_success() })
//!     .await;
//!
//! assert_eq!(*outcome.value(), 21);
//! # });
//! ```

mod future;
mod held;
mod sync;

pub use future::OutcomeFutureExt;
