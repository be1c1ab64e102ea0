//! Synchronous `when_*` / `on_*` combinators.

use crate::outcome::Outcome;

impl<T> Outcome<T> {
    // ========== Observe ==========

    /// Run `f` if this outcome succeeded, then return it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// let mut hits = 0;
    /// let outcome = 1.into_success().when_success(|| hits += 1);
    /// assert_eq!(hits, 1);
    /// assert_eq!(outcome, 1.into_success());
    /// ```
    #[inline]
    pub fn when_success<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success {
            f();
        }
        self
    }

    /// Run `f` with the value if this outcome succeeded, then return it unchanged.
    #[inline]
    pub fn when_success_value<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if self.is_success {
            f(&self.value);
        }
        self
    }

    /// Run `f` with the whole outcome if it succeeded, then return it unchanged.
    #[inline]
    pub fn when_success_outcome<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_success {
            f(&self);
        }
        self
    }

    /// Run `f` if this outcome failed, then return it unchanged.
    #[inline]
    pub fn when_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if !self.is_success {
            f();
        }
        self
    }

    /// Run `f` with the value if this outcome failed, then return it unchanged.
    #[inline]
    pub fn when_fail_value<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if !self.is_success {
            f(&self.value);
        }
        self
    }

    /// Run `f` with the whole outcome if it failed, then return it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Error, Outcome};
    ///
    /// let mut seen = Vec::new();
    /// Outcome::fail(0, [Error::create("timeout")])
    ///     .when_fail_outcome(|o| seen.extend(o.errors().map(|e| e.message().to_string())));
    /// assert_eq!(seen, vec!["timeout"]);
    /// ```
    #[inline]
    pub fn when_fail_outcome<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if !self.is_success {
            f(&self);
        }
        self
    }

    /// Run exactly one of the callbacks depending on the status, then return
    /// the outcome unchanged.
    #[inline]
    pub fn when_match<S, F>(self, on_success: S, on_fail: F) -> Self
    where
        S: FnOnce(),
        F: FnOnce(),
    {
        if self.is_success {
            on_success();
        } else {
            on_fail();
        }
        self
    }

    /// Like [`when_match`](Outcome::when_match), passing the value.
    #[inline]
    pub fn when_match_value<S, F>(self, on_success: S, on_fail: F) -> Self
    where
        S: FnOnce(&T),
        F: FnOnce(&T),
    {
        if self.is_success {
            on_success(&self.value);
        } else {
            on_fail(&self.value);
        }
        self
    }

    /// Like [`when_match`](Outcome::when_match), passing the whole outcome.
    #[inline]
    pub fn when_match_outcome<S, F>(self, on_success: S, on_fail: F) -> Self
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        if self.is_success {
            on_success(&self);
        } else {
            on_fail(&self);
        }
        self
    }

    // ========== Transform ==========

    /// Replace a successful outcome with the one produced by `f`.
    ///
    /// A failed outcome is returned unchanged and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// assert_eq!(1.into_success().on_success(|| 2.into_success()), 2.into_success());
    /// assert_eq!(1.into_fail().on_success(|| 2.into_success()), 1.into_fail());
    /// ```
    #[inline]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success {
            f()
        } else {
            self
        }
    }

    /// Replace a successful outcome with `f(value)`.
    #[inline]
    pub fn on_success_value<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        if self.is_success {
            f(self.value)
        } else {
            self
        }
    }

    /// Replace a successful outcome with `f(outcome)`.
    #[inline]
    pub fn on_success_outcome<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_success {
            f(self)
        } else {
            self
        }
    }

    /// Replace a failed outcome with the one produced by `f`.
    ///
    /// A successful outcome is returned unchanged and `f` is not called.
    #[inline]
    pub fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success {
            self
        } else {
            f()
        }
    }

    /// Replace a failed outcome with `f(value)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// let recovered = "".into_fail().on_fail_value(|_| "fallback".into_success());
    /// assert_eq!(*recovered.value(), "fallback");
    /// ```
    #[inline]
    pub fn on_fail_value<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        if self.is_success {
            self
        } else {
            f(self.value)
        }
    }

    /// Replace a failed outcome with `f(outcome)`.
    #[inline]
    pub fn on_fail_outcome<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_success {
            self
        } else {
            f(self)
        }
    }

    /// Replace this outcome with the one produced by `f`, whatever its status.
    #[inline]
    pub fn on_any<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        f()
    }

    /// Replace this outcome with `f(outcome)`, whatever its status.
    #[inline]
    pub fn on_any_outcome<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }
}
