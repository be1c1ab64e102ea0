//! The `Outcome` type: a value, a status, and the reasons behind it
//!
//! Unlike `Result`, an [`Outcome`] always carries a value, even when it
//! failed. The value might be a partial result or a caller-supplied
//! placeholder. Alongside it travels an ordered list of [`Reason`]s explaining
//! the status.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use verdict::{Error, Outcome, Success};
//!
//! let saved = Outcome::success(42, [Success::create("row inserted")]);
//! assert!(saved.is_success());
//! assert!(saved.has_successes());
//!
//! let rejected = Outcome::fail(0, [Error::create("duplicate key")]);
//! assert!(rejected.is_failure());
//! assert_eq!(rejected.errors().next().unwrap().message(), "duplicate key");
//! ```
//!
//! ## Inferring the status from reasons
//!
//! ```
//! use verdict::{Error, Outcome, Reason};
//!
//! let reasons: Vec<Reason> = vec![Error::create("a").into(), Error::create("b").into()];
//! let outcome = Outcome::from_reasons("draft", reasons).unwrap();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.errors().count(), 2);
//! ```

use std::any::TypeId;
use std::error::Error as StdError;

use crate::error::{OutcomeError, StatusConflict};
use crate::reason::{Error, Reason, Role, Success};

/// A value paired with a success flag and the reasons behind it.
///
/// Outcomes are immutable: every combinator either hands back the same
/// outcome or a new one. The success flag is fixed at construction and the
/// reasons always agree with it, since [`Outcome::success`] only accepts
/// [`Success`] reasons and [`Outcome::fail`] only accepts [`Error`] reasons.
///
/// An optional scalar message is kept for callers that still consume the
/// older single-message shape; see [`Outcome::message`].
///
/// # Type Parameters
///
/// * `T` - The type of the carried value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "OutcomeRepr<T>")
)]
pub struct Outcome<T> {
    pub(crate) is_success: bool,
    pub(crate) value: T,
    pub(crate) reasons: Vec<Reason>,
    pub(crate) message: Option<String>,
}

impl<T> Outcome<T> {
    pub(crate) fn from_parts(is_success: bool, value: T, reasons: Vec<Reason>) -> Self {
        Outcome {
            is_success,
            value,
            reasons,
            message: None,
        }
    }

    /// Create a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Outcome, Success};
    ///
    /// let outcome = Outcome::success("saved", [Success::create("written to disk")]);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.reasons().len(), 1);
    /// ```
    pub fn success<I>(value: T, reasons: I) -> Self
    where
        I: IntoIterator<Item = Success>,
    {
        Self::from_parts(true, value, reasons.into_iter().map(Reason::from).collect())
    }

    /// Create a failed outcome.
    ///
    /// The value is still carried; use a placeholder if there is nothing
    /// meaningful to return.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Error, Outcome};
    ///
    /// let outcome = Outcome::fail(-1, [Error::create("not found")]);
    /// assert!(outcome.is_failure());
    /// assert_eq!(*outcome.value(), -1);
    /// ```
    pub fn fail<I>(value: T, reasons: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::from_parts(false, value, reasons.into_iter().map(Reason::from).collect())
    }

    /// Create an outcome whose status is inferred from its reasons.
    ///
    /// All reasons must share a role: only Success reasons give a successful
    /// outcome, only Error reasons a failed one.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] with [`StatusConflict::Mixed`]
    /// when both roles are present, and with [`StatusConflict::Empty`] when
    /// there are no reasons at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Outcome, OutcomeError, Reason, Success};
    /// use verdict::error::StatusConflict;
    ///
    /// let outcome = Outcome::from_reasons(7, vec![Reason::from(Success::create("ok"))]).unwrap();
    /// assert!(outcome.is_success());
    ///
    /// let err = Outcome::from_reasons(7, Vec::<Reason>::new()).unwrap_err();
    /// assert_eq!(err, OutcomeError::InvalidState(StatusConflict::Empty));
    /// ```
    pub fn from_reasons<I>(value: T, reasons: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator<Item = Reason>,
    {
        let (successes, errors): (Vec<Reason>, Vec<Reason>) =
            reasons.into_iter().partition(Reason::is_success);

        match (successes.is_empty(), errors.is_empty()) {
            (false, false) => Err(reject(StatusConflict::Mixed)),
            (true, true) => Err(reject(StatusConflict::Empty)),
            (false, true) => Ok(Self::from_parts(true, value, successes)),
            (true, false) => Ok(Self::from_parts(false, value, errors)),
        }
    }

    /// Create a failed outcome describing `error`.
    ///
    /// The single Error reason holds the error's `Debug` representation, its
    /// message, and every cause in its `source()` chain, one per line. A `&dyn Error`
    /// is described by its concrete type's `Debug` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use verdict::Outcome;
    ///
    /// let err = io::Error::new(io::ErrorKind::Other, "disk full");
    /// let outcome = Outcome::from_error(Vec::<u8>::new(), &err);
    ///
    /// assert!(outcome.is_failure());
    /// assert!(outcome.errors().next().unwrap().message().contains("disk full"));
    /// ```
    pub fn from_error<E>(value: T, error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        Self::fail(value, [Error::create(describe_error(error))])
    }

    /// Create an outcome from an optional value and an explicit status.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NullArgument`] when `value` is `None`, and
    /// [`OutcomeError::InvalidState`] with [`StatusConflict::RoleMismatch`]
    /// when any reason's role disagrees with `is_success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Outcome, Reason};
    ///
    /// let outcome = Outcome::from_value(Some("cfg"), false, vec![Reason::error("missing key")]).unwrap();
    /// assert!(outcome.is_failure());
    ///
    /// assert!(Outcome::<&str>::from_value(None, true, Vec::new()).is_err());
    /// ```
    pub fn from_value<I>(value: Option<T>, is_success: bool, reasons: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator<Item = Reason>,
    {
        let Some(value) = value else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                value_type = std::any::type_name::<T>(),
                "rejected outcome: value is absent"
            );
            return Err(OutcomeError::NullArgument { parameter: "value" });
        };

        let expected = if is_success { Role::Success } else { Role::Error };
        let reasons: Vec<Reason> = reasons.into_iter().collect();
        if reasons.iter().any(|reason| reason.role() != expected) {
            return Err(reject(StatusConflict::RoleMismatch));
        }

        Ok(Self::from_parts(is_success, value, reasons))
    }

    /// Attach the legacy scalar message.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// let outcome = 1.into_success().with_message("imported");
    /// assert_eq!(outcome.message(), Some("imported"));
    /// ```
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Outcome {
            message: Some(message.into()),
            ..self
        }
    }

    /// Check if this outcome succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Check if this outcome failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// The carried value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the outcome and return its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume the outcome and return status, value and reasons.
    pub fn into_parts(self) -> (bool, T, Vec<Reason>) {
        (self.is_success, self.value, self.reasons)
    }

    /// All reasons, in the order they were supplied.
    #[inline]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// The Error-tagged reasons.
    pub fn errors(&self) -> impl Iterator<Item = &Reason> + '_ {
        self.reasons.iter().filter(|reason| reason.is_error())
    }

    /// The Success-tagged reasons.
    pub fn successes(&self) -> impl Iterator<Item = &Reason> + '_ {
        self.reasons.iter().filter(|reason| reason.is_success())
    }

    /// Check if any Error reason is attached.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Check if any Success reason is attached.
    pub fn has_successes(&self) -> bool {
        self.successes().next().is_some()
    }

    /// The legacy scalar message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Name of the carried value's type.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// assert_eq!(5u8.into_success().value_type(), "u8");
    /// ```
    pub fn value_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T: 'static> Outcome<T> {
    /// The `TypeId` of the carried value's type.
    pub fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

fn reject(conflict: StatusConflict) -> OutcomeError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%conflict, "rejected outcome: status cannot be determined");
    OutcomeError::InvalidState(conflict)
}

fn describe_error<E>(error: &E) -> String
where
    E: StdError + ?Sized,
{
    let mut description = format!("{:?}: {}", error, error);
    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    description
}

/// Conversion of any value into an [`Outcome`] wrapping it.
///
/// Implemented for every type.
///
/// # Examples
///
/// ```
/// use verdict::{Error, IntoOutcome};
///
/// let ok = "config".into_success();
/// assert!(ok.is_success());
///
/// let failed = "config".into_fail_with([Error::create("unreadable")]);
/// assert!(failed.has_errors());
/// ```
pub trait IntoOutcome: Sized {
    /// Wrap `self` in a successful outcome with no reasons.
    fn into_success(self) -> Outcome<Self> {
        Outcome::from_parts(true, self, Vec::new())
    }

    /// Wrap `self` in a failed outcome with no reasons.
    fn into_fail(self) -> Outcome<Self> {
        Outcome::from_parts(false, self, Vec::new())
    }

    /// Wrap `self` in a successful outcome with the given reasons.
    fn into_success_with<I>(self, reasons: I) -> Outcome<Self>
    where
        I: IntoIterator<Item = Success>,
    {
        Outcome::success(self, reasons)
    }

    /// Wrap `self` in a failed outcome with the given reasons.
    fn into_fail_with<I>(self, reasons: I) -> Outcome<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        Outcome::fail(self, reasons)
    }
}

impl<T> IntoOutcome for T {}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OutcomeRepr<T> {
    is_success: bool,
    value: T,
    #[serde(default)]
    reasons: Vec<Reason>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<OutcomeRepr<T>> for Outcome<T> {
    type Error = OutcomeError;

    fn try_from(repr: OutcomeRepr<T>) -> Result<Self, OutcomeError> {
        let outcome = Outcome::from_value(Some(repr.value), repr.is_success, repr.reasons)?;
        Ok(Outcome {
            message: repr.message,
            ..outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        inner: fmt::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "render failed")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_success_with_reasons() {
        let outcome = Outcome::success("v", [Success::create("created")]);
        assert!(outcome.is_success());
        assert!(outcome.has_successes());
        assert!(!outcome.has_errors());
        assert_eq!(outcome.successes().count(), 1);
        assert_eq!(outcome.errors().count(), 0);
    }

    #[test]
    fn test_fail_with_reasons() {
        let outcome = Outcome::fail("v", [Error::create("error test")]);
        assert!(outcome.is_failure());
        assert!(outcome.has_errors());
        assert!(!outcome.has_successes());
        assert_eq!(outcome.errors().next(), Some(&Reason::error("error test")));
        assert_eq!(outcome.successes().next(), None);
    }

    #[test]
    fn test_fail_keeps_value() {
        let outcome = Outcome::fail(vec![1, 2], Vec::new());
        assert_eq!(outcome.value(), &vec![1, 2]);
        assert!(outcome.reasons().is_empty());
    }

    #[test]
    fn test_from_reasons_only_errors() {
        let outcome = Outcome::from_reasons(1, vec![Reason::error("e1"), Reason::error("e2")]).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(
            outcome.errors().map(Reason::message).collect::<Vec<_>>(),
            vec!["e1", "e2"]
        );
    }

    #[test]
    fn test_from_reasons_only_successes() {
        let outcome = Outcome::from_reasons(1, vec![Reason::success("s")]).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.successes().next(), Some(&Reason::success("s")));
    }

    #[test]
    fn test_from_reasons_empty() {
        let err = Outcome::from_reasons(1, Vec::new()).unwrap_err();
        assert_eq!(err, OutcomeError::InvalidState(StatusConflict::Empty));
        assert_eq!(
            err.to_string(),
            "the status cannot be determined: reasons has no Success or Error items"
        );
    }

    #[test]
    fn test_from_reasons_mixed() {
        let err = Outcome::from_reasons(1, vec![Reason::error("e"), Reason::success("s")])
            .unwrap_err();
        assert_eq!(err, OutcomeError::InvalidState(StatusConflict::Mixed));
    }

    #[test]
    fn test_from_error_describes_chain() {
        let err = Wrapped { inner: fmt::Error };
        let outcome = Outcome::from_error(0, &err);

        assert!(outcome.is_failure());
        assert_eq!(outcome.errors().count(), 1);
        let message = outcome.errors().next().unwrap().message().to_string();
        assert!(message.starts_with("Wrapped { inner: Error }"));
        assert!(message.contains("render failed"));
        assert!(message.contains("caused by: an error occurred when formatting an argument"));
    }

    #[derive(Debug)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "disk full")
        }
    }

    impl StdError for DiskFull {}

    #[test]
    fn test_from_error_accepts_trait_objects() {
        let err: Box<dyn StdError> = "plain".into();
        let outcome = Outcome::from_error((), err.as_ref());
        assert!(outcome.errors().next().unwrap().message().ends_with("plain"));
    }

    #[test]
    fn test_from_error_names_concrete_type_behind_trait_object() {
        let err: Box<dyn StdError> = Box::new(DiskFull);
        let outcome = Outcome::from_error((), err.as_ref());

        let message = outcome.errors().next().unwrap().message();
        assert_eq!(message, "DiskFull: disk full");
        assert!(!message.contains("dyn"));
    }

    #[test]
    fn test_from_value_failure_without_reasons() {
        let outcome = Outcome::from_value(Some("fake"), false, Vec::new()).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors().count(), 0);
    }

    #[test]
    fn test_from_value_success_with_reasons() {
        let outcome = Outcome::from_value(Some(3), true, vec![Reason::success("Success reason")]).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.successes().next().unwrap().message(), "Success reason");
    }

    #[test]
    fn test_from_value_none() {
        let err = Outcome::<i32>::from_value(None, true, vec![Reason::success("s")]).unwrap_err();
        assert_eq!(err, OutcomeError::NullArgument { parameter: "value" });
    }

    #[test]
    fn test_from_value_role_mismatch() {
        let err = Outcome::from_value(Some(1), true, vec![Reason::error("e")]).unwrap_err();
        assert_eq!(err, OutcomeError::InvalidState(StatusConflict::RoleMismatch));
    }

    #[test]
    fn test_value_type() {
        struct FakeObject;
        let outcome = FakeObject.into_success();
        assert_eq!(outcome.value_type(), std::any::type_name::<FakeObject>());
        assert_eq!(outcome.value_type_id(), TypeId::of::<FakeObject>());
    }

    #[test]
    fn test_with_message_keeps_everything_else() {
        let outcome = Outcome::fail(1, [Error::create("e")]).with_message("legacy");
        assert_eq!(outcome.message(), Some("legacy"));
        assert!(outcome.is_failure());
        assert_eq!(outcome.reasons(), &[Reason::error("e")]);
    }

    #[test]
    fn test_into_outcome() {
        assert!(5.into_success().is_success());
        assert!(5.into_fail().is_failure());
        assert_eq!(5.into_fail().message(), None);
        assert!(5.into_success_with([Success::create("s")]).has_successes());
        assert!(5.into_fail_with([Error::create("e")]).has_errors());
    }

    #[test]
    fn test_into_parts() {
        let (is_success, value, reasons) = Outcome::success(9, [Success::create("s")]).into_parts();
        assert!(is_success);
        assert_eq!(value, 9);
        assert_eq!(reasons, vec![Reason::success("s")]);
    }

    #[test]
    fn test_structural_equality() {
        let a = Outcome::fail(1, [Error::create_with("e", [("k", 1)])]);
        let b = Outcome::fail(1, [Error::create_with("e", [("k", 1)])]);
        assert_eq!(a, b);
        assert_ne!(a, Outcome::fail(2, [Error::create_with("e", [("k", 1)])]));
    }
}
