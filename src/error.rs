//! Errors raised while constructing outcomes
//!
//! Most of this crate never fails: combinators pass outcomes through and
//! adaptation reports a mismatch as a failed [`Outcome`](crate::Outcome). The
//! only hard errors come from the constructors that have to *infer* a status
//! from their input, and those are collected here.
//!
//! # Examples
//!
//! ```
//! use verdict::{Error, Outcome, OutcomeError, Reason, Success};
//! use verdict::error::StatusConflict;
//!
//! let reasons: Vec<Reason> = vec![Error::create("e").into(), Success::create("s").into()];
//! let err = Outcome::from_reasons(1, reasons).unwrap_err();
//!
//! assert_eq!(err, OutcomeError::InvalidState(StatusConflict::Mixed));
//! assert_eq!(
//!     err.to_string(),
//!     "the status cannot be determined: reasons has both Success and Error items"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Why a set of reasons could not be turned into a success or failure status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusConflict {
    /// Both Success and Error reasons were supplied.
    Mixed,
    /// Neither Success nor Error reasons were supplied.
    Empty,
    /// A reason's role disagrees with an explicitly declared status.
    RoleMismatch,
}

impl fmt::Display for StatusConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusConflict::Mixed => write!(f, "reasons has both Success and Error items"),
            StatusConflict::Empty => write!(f, "reasons has no Success or Error items"),
            StatusConflict::RoleMismatch => {
                write!(f, "a reason's role does not match the declared status")
            }
        }
    }
}

/// Error returned by the status-inferring constructors of [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use verdict::{Outcome, OutcomeError, Reason};
///
/// let err = Outcome::<i32>::from_value(None, true, Vec::<Reason>::new()).unwrap_err();
/// assert_eq!(err, OutcomeError::NullArgument { parameter: "value" });
/// assert_eq!(err.to_string(), "argument `value` is absent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// A required argument was absent.
    NullArgument {
        /// Name of the missing argument.
        parameter: &'static str,
    },
    /// The supplied reasons cannot determine a consistent status.
    InvalidState(StatusConflict),
}

impl OutcomeError {
    /// Returns the status conflict, if this is an `InvalidState` error.
    pub fn conflict(&self) -> Option<StatusConflict> {
        match self {
            OutcomeError::InvalidState(conflict) => Some(*conflict),
            OutcomeError::NullArgument { .. } => None,
        }
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeError::NullArgument { parameter } => {
                write!(f, "argument `{}` is absent", parameter)
            }
            OutcomeError::InvalidState(conflict) => {
                write!(f, "the status cannot be determined: {}", conflict)
            }
        }
    }
}

impl StdError for OutcomeError {}

impl From<StatusConflict> for OutcomeError {
    fn from(conflict: StatusConflict) -> Self {
        OutcomeError::InvalidState(conflict)
    }
}
