//! Runtime-checked adaptation of untyped values into outcomes
//!
//! When a value arrives as `Box<dyn Any>` (plugin boundaries, heterogeneous
//! registries, message buses), [`Outcome::try_adapt`] checks its concrete type
//! against `T` and wraps it. The check is a `downcast`, never an unchecked
//! cast.
//!
//! Adaptation never panics or returns an error type. `Ok` carries a
//! successful outcome; `Err` carries a failed one whose value is
//! `T::default()`.
//!
//! # Examples
//!
//! ```
//! use std::any::Any;
//! use verdict::Outcome;
//!
//! let candidate: Box<dyn Any> = Box::new(String::from("hello"));
//! let outcome = Outcome::<String>::try_adapt(Some(candidate)).unwrap();
//! assert_eq!(outcome.value(), "hello");
//!
//! let wrong: Box<dyn Any> = Box::new(42u32);
//! let failed = Outcome::<String>::try_adapt(Some(wrong)).unwrap_err();
//! assert_eq!(failed.errors().next().unwrap().message(), "Type mismatch");
//! ```

use std::any::Any;

use crate::outcome::Outcome;
use crate::reason::Error;

/// Message of the Error reason attached when a candidate has the wrong type.
pub const TYPE_MISMATCH: &str = "Type mismatch";

impl<T: Default + 'static> Outcome<T> {
    /// Adapt an untyped candidate into an outcome of `T`.
    ///
    /// * `Some` candidate of exactly type `T`: `Ok` with a successful outcome
    ///   wrapping it, no reasons.
    /// * `Some` candidate of any other type: `Err` with a failed outcome
    ///   carrying one Error reason, [`TYPE_MISMATCH`].
    /// * `None`: `Err` with a failed outcome and no reasons.
    ///
    /// Failed outcomes carry `T::default()` as their value, so only types
    /// implementing [`Default`] can be adapted.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::Outcome;
    ///
    /// let failed = Outcome::<i64>::try_adapt(None).unwrap_err();
    /// assert!(failed.is_failure());
    /// assert_eq!(failed.errors().count(), 0);
    /// assert_eq!(*failed.value(), 0);
    /// ```
    pub fn try_adapt(candidate: Option<Box<dyn Any>>) -> Result<Self, Self> {
        let Some(candidate) = candidate else {
            return Err(Self::from_parts(false, T::default(), Vec::new()));
        };

        match candidate.downcast::<T>() {
            Ok(value) => Ok(Self::from_parts(true, *value, Vec::new())),
            Err(_) => {
                trace_mismatch::<T>();
                Err(Self::fail(T::default(), [Error::create(TYPE_MISMATCH)]))
            }
        }
    }

    /// Adapt an untyped candidate, recording a message for the taken branch.
    ///
    /// Branches exactly like [`Outcome::try_adapt`], but also stores a message
    /// in the legacy [`message`](Outcome::message) field. Only the callback
    /// for the taken branch is invoked. On a type mismatch the `on_fail`
    /// message also replaces [`TYPE_MISMATCH`] as the Error reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use verdict::Outcome;
    ///
    /// let candidate: Box<dyn Any> = Box::new(3.5f64);
    /// let outcome = Outcome::<f64>::try_adapt_with(
    ///     Some(candidate),
    ///     || "parsed".to_string(),
    ///     || unreachable!(),
    /// )
    /// .unwrap();
    /// assert_eq!(outcome.message(), Some("parsed"));
    /// ```
    pub fn try_adapt_with<S, F>(
        candidate: Option<Box<dyn Any>>,
        on_success: S,
        on_fail: F,
    ) -> Result<Self, Self>
    where
        S: FnOnce() -> String,
        F: FnOnce() -> String,
    {
        let Some(candidate) = candidate else {
            return Err(Self::from_parts(false, T::default(), Vec::new()).with_message(on_fail()));
        };

        match candidate.downcast::<T>() {
            Ok(value) => Ok(Self::from_parts(true, *value, Vec::new()).with_message(on_success())),
            Err(_) => {
                trace_mismatch::<T>();
                let message = on_fail();
                Err(Self::fail(T::default(), [Error::create(message.clone())]).with_message(message))
            }
        }
    }
}

fn trace_mismatch<T>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        expected = std::any::type_name::<T>(),
        "adaptation rejected candidate: type mismatch"
    );
}
