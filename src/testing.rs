//! Testing utilities and helpers for outcomes
//!
//! This module provides assertion macros for code that returns
//! [`Outcome`](crate::Outcome)s and, with the `proptest` feature, `Arbitrary`
//! implementations for property-based testing.
//!
//! # Examples
//!
//! ```rust
//! use verdict::{assert_outcome_errors, assert_outcome_failure, assert_outcome_success};
//! use verdict::{Error, IntoOutcome, Outcome};
//!
//! assert_outcome_success!(42.into_success());
//! assert_outcome_failure!(42.into_fail());
//!
//! let failed = Outcome::fail(0, [Error::create("too small"), Error::create("odd")]);
//! assert_outcome_errors!(failed, ["too small", "odd"]);
//! ```

/// Assert that an outcome succeeded.
///
/// Panics with the error messages if the outcome failed.
///
/// # Example
///
/// ```rust
/// use verdict::{IntoOutcome, assert_outcome_success};
///
/// assert_outcome_success!("ok".into_success());
/// ```
#[macro_export]
macro_rules! assert_outcome_success {
    ($outcome:expr) => {
        match &$outcome {
            outcome if outcome.is_success() => {}
            outcome => {
                panic!(
                    "Expected successful Outcome, got failure with errors: {:?}",
                    outcome
                        .errors()
                        .map($crate::Reason::message)
                        .collect::<::std::vec::Vec<_>>()
                );
            }
        }
    };
}

/// Assert that an outcome failed.
///
/// Panics with the carried value if the outcome succeeded.
///
/// # Example
///
/// ```rust
/// use verdict::{IntoOutcome, assert_outcome_failure};
///
/// assert_outcome_failure!("nope".into_fail());
/// ```
#[macro_export]
macro_rules! assert_outcome_failure {
    ($outcome:expr) => {
        match &$outcome {
            outcome if outcome.is_failure() => {}
            outcome => {
                panic!("Expected failed Outcome, got success: {:?}", outcome.value());
            }
        }
    };
}

/// Assert that an outcome failed with exactly the given error messages, in order.
///
/// # Example
///
/// ```rust
/// use verdict::{Error, Outcome, assert_outcome_errors};
///
/// let outcome = Outcome::fail((), [Error::create("a"), Error::create("b")]);
/// assert_outcome_errors!(outcome, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_outcome_errors {
    ($outcome:expr, $expected:expr) => {
        match &$outcome {
            outcome if outcome.is_failure() => {
                let messages = outcome
                    .errors()
                    .map($crate::Reason::message)
                    .collect::<::std::vec::Vec<_>>();
                assert_eq!(messages, $expected);
            }
            outcome => {
                panic!(
                    "Expected failed Outcome with errors {:?}, got success: {:?}",
                    $expected,
                    outcome.value()
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Metadata, MetadataValue, Outcome, Reason, Role};

#[cfg(feature = "proptest")]
impl Arbitrary for Role {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Role::Error), Just(Role::Success)].boxed()
    }
}

#[cfg(feature = "proptest")]
fn metadata_strategy() -> impl Strategy<Value = Metadata> {
    let value = prop_oneof![
        any::<bool>().prop_map(MetadataValue::Bool),
        any::<i64>().prop_map(MetadataValue::Int),
        "[a-z]{0,8}".prop_map(MetadataValue::Text),
    ];
    prop::collection::btree_map("[a-z]{1,6}", value, 0..4)
}

#[cfg(feature = "proptest")]
impl Arbitrary for Reason {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<Role>(), "[a-z ]{0,16}", metadata_strategy())
            .prop_map(|(role, message, metadata)| Reason::new(role, message, metadata))
            .boxed()
    }
}

/// Generates outcomes whose reasons always agree with their status.
#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        (
            any_with::<T>(args),
            any::<bool>(),
            prop::collection::vec(("[a-z ]{0,16}", metadata_strategy()), 0..4),
        )
            .prop_map(|(value, is_success, reasons)| {
                let role = if is_success { Role::Success } else { Role::Error };
                let reasons = reasons
                    .into_iter()
                    .map(|(message, metadata)| Reason::new(role, message, metadata))
                    .collect();
                Outcome::from_parts(is_success, value, reasons)
            })
            .boxed()
    }
}
