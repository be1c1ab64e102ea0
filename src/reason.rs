//! Structured reasons attached to an outcome
//!
//! A [`Reason`] explains *why* an [`Outcome`](crate::Outcome) ended up the way
//! it did: a human-readable message plus free-form key/value metadata, tagged
//! with a [`Role`]. The two roles have typed wrappers, [`Error`] and
//! [`Success`], so that constructors can insist on reasons of the right kind.
//!
//! # Examples
//!
//! ```
//! use verdict::{Error, Reason, Role, Success};
//!
//! let err = Error::create_with("user not found", [("user_id", 42)]);
//! assert_eq!(err.message(), "user not found");
//! assert_eq!(err.role(), Role::Error);
//!
//! // Role takes part in equality
//! let as_error: Reason = Error::create("done").into();
//! let as_success: Reason = Success::create("done").into();
//! assert_ne!(as_error, as_success);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Metadata attached to a reason, keyed by name.
///
/// Keys are unique and compared independently of insertion order.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
///
/// Floats compare by bit pattern, which keeps `Eq` and `Hash` lawful
/// (`NaN == NaN`, `0.0 != -0.0`). Numeric variants never compare equal across
/// variants, so `Int(1) != UInt(1)`.
///
/// With the `serde` feature, values serialize externally tagged
/// (`{"UInt": 5}`), so the variant survives a round trip.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetadataValue {
    /// No value
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    UInt(u64),
    /// A floating point number
    Float(f64),
    /// A string
    Text(String),
    /// An ordered list of values
    List(Vec<MetadataValue>),
    /// A nested map
    Map(Metadata),
}

impl MetadataValue {
    /// Returns the string slice if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, MetadataValue::Null)
    }
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        use MetadataValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Text(a), Text(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MetadataValue {}

impl Hash for MetadataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            MetadataValue::Null => {}
            MetadataValue::Bool(b) => b.hash(state),
            MetadataValue::Int(n) => n.hash(state),
            MetadataValue::UInt(n) => n.hash(state),
            MetadataValue::Float(x) => x.to_bits().hash(state),
            MetadataValue::Text(s) => s.hash(state),
            MetadataValue::List(items) => items.hash(state),
            MetadataValue::Map(map) => map.hash(state),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Null => write!(f, "null"),
            MetadataValue::Bool(b) => write!(f, "{}", b),
            MetadataValue::Int(n) => write!(f, "{}", n),
            MetadataValue::UInt(n) => write!(f, "{}", n),
            MetadataValue::Float(x) => write!(f, "{}", x),
            MetadataValue::Text(s) => write!(f, "{}", s),
            MetadataValue::List(items) => f.debug_list().entries(items).finish(),
            MetadataValue::Map(map) => f.debug_map().entries(map).finish(),
        }
    }
}

macro_rules! impl_from_for_metadata_value {
    ($($ty:ty => $variant:ident as $target:ty),+ $(,)?) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_for_metadata_value!(
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => Text as String,
    &str => Text as String,
);

impl From<usize> for MetadataValue {
    fn from(value: usize) -> Self {
        MetadataValue::UInt(value as u64)
    }
}

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(values: Vec<T>) -> Self {
        MetadataValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MetadataValue>> From<Option<T>> for MetadataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(MetadataValue::Null, Into::into)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(map: Metadata) -> Self {
        MetadataValue::Map(map)
    }
}

/// The role a reason plays: explaining a failure or a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// The reason explains a failure
    Error,
    /// The reason explains a success
    Success,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Error => write!(f, "Error"),
            Role::Success => write!(f, "Success"),
        }
    }
}

/// A message plus metadata, tagged with the [`Role`] it plays.
///
/// Reasons are immutable once built. Two reasons are equal when their roles
/// and messages are equal and their metadata holds the same key/value pairs,
/// regardless of the order they were supplied in.
///
/// # Examples
///
/// ```
/// use verdict::{Reason, Role};
///
/// let a = Reason::new(Role::Error, "boom", [("a", 1), ("b", 2)]);
/// let b = Reason::new(Role::Error, "boom", [("b", 2), ("a", 1)]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reason {
    role: Role,
    message: String,
    metadata: Metadata,
}

impl Reason {
    /// Create a reason with the given role, message and metadata.
    pub fn new<I, K, V>(role: Role, message: impl Into<String>, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        Reason {
            role,
            message: message.into(),
            metadata: metadata
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn bare(role: Role, message: impl Into<String>) -> Self {
        Reason {
            role,
            message: message.into(),
            metadata: Metadata::new(),
        }
    }

    /// Shorthand for an Error-tagged reason with no metadata.
    pub fn error(message: impl Into<String>) -> Self {
        Reason::bare(Role::Error, message)
    }

    /// Shorthand for a Success-tagged reason with no metadata.
    pub fn success(message: impl Into<String>) -> Self {
        Reason::bare(Role::Success, message)
    }

    /// The role this reason plays.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attached metadata.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a single metadata entry.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Check if this reason explains a failure.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.role == Role::Error
    }

    /// Check if this reason explains a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.role == Role::Success
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

macro_rules! role_reason {
    ($(#[$meta:meta])* $name:ident => $role:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "Reason", into = "Reason")
        )]
        pub struct $name(Reason);

        impl $name {
            /// Create a reason with the given message and no metadata.
            pub fn create(message: impl Into<String>) -> Self {
                $name(Reason::bare($role, message))
            }

            /// Create a reason with the given message and a snapshot of `metadata`.
            pub fn create_with<I, K, V>(message: impl Into<String>, metadata: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<MetadataValue>,
            {
                $name(Reason::new($role, message, metadata))
            }

            /// Unwrap into the underlying role-tagged [`Reason`].
            pub fn into_reason(self) -> Reason {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Reason;

            fn deref(&self) -> &Reason {
                &self.0
            }
        }

        impl AsRef<Reason> for $name {
            fn as_ref(&self) -> &Reason {
                &self.0
            }
        }

        impl From<$name> for Reason {
            fn from(reason: $name) -> Reason {
                reason.0
            }
        }

        impl TryFrom<Reason> for $name {
            type Error = Reason;

            /// Succeeds only when the reason carries the matching role.
            fn try_from(reason: Reason) -> Result<Self, Reason> {
                if reason.role == $role {
                    Ok($name(reason))
                } else {
                    Err(reason)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

role_reason!(
    /// A reason explaining a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::Error;
    ///
    /// let a = Error::create_with("timeout", [("attempt", 3)]);
    /// let b = Error::create_with("timeout", [("attempt", 3)]);
    /// assert_eq!(a, b);
    /// assert!(a.metadata().contains_key("attempt"));
    /// ```
    Error => Role::Error
);

role_reason!(
    /// A reason explaining a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::Success;
    ///
    /// let s = Success::create("user created");
    /// assert!(s.is_success());
    /// assert!(s.metadata().is_empty());
    /// ```
    Success => Role::Success
);
