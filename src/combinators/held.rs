//! Async twins of the combinators, for an outcome that is already resolved.
//!
//! The `when_*_async` observers take plain callbacks and return a future that
//! is ready immediately, so they can start or continue an async pipeline.
//! The `on_*_async` transformers take callbacks returning futures, and await
//! the callback only on the taken branch.

use std::future::Future;

use futures::future::{ready, Ready};

use crate::outcome::Outcome;

impl<T> Outcome<T> {
    // ========== Observe ==========

    /// Async twin of [`when_success`](Outcome::when_success).
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let mut hits = 0;
    /// let outcome = 1.into_success().when_success_async(|| hits += 1).await;
    /// assert_eq!(hits, 1);
    /// assert!(outcome.is_success());
    /// # });
    /// ```
    pub fn when_success_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(),
    {
        ready(self.when_success(f))
    }

    /// Async twin of [`when_success_value`](Outcome::when_success_value).
    pub fn when_success_value_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(&T),
    {
        ready(self.when_success_value(f))
    }

    /// Async twin of [`when_success_outcome`](Outcome::when_success_outcome).
    pub fn when_success_outcome_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(&Self),
    {
        ready(self.when_success_outcome(f))
    }

    /// Async twin of [`when_fail`](Outcome::when_fail).
    pub fn when_fail_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(),
    {
        ready(self.when_fail(f))
    }

    /// Async twin of [`when_fail_value`](Outcome::when_fail_value).
    pub fn when_fail_value_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(&T),
    {
        ready(self.when_fail_value(f))
    }

    /// Async twin of [`when_fail_outcome`](Outcome::when_fail_outcome).
    pub fn when_fail_outcome_async<F>(self, f: F) -> Ready<Self>
    where
        F: FnOnce(&Self),
    {
        ready(self.when_fail_outcome(f))
    }

    /// Async twin of [`when_match`](Outcome::when_match).
    pub fn when_match_async<S, F>(self, on_success: S, on_fail: F) -> Ready<Self>
    where
        S: FnOnce(),
        F: FnOnce(),
    {
        ready(self.when_match(on_success, on_fail))
    }

    /// Async twin of [`when_match_value`](Outcome::when_match_value).
    pub fn when_match_value_async<S, F>(self, on_success: S, on_fail: F) -> Ready<Self>
    where
        S: FnOnce(&T),
        F: FnOnce(&T),
    {
        ready(self.when_match_value(on_success, on_fail))
    }

    /// Async twin of [`when_match_outcome`](Outcome::when_match_outcome).
    pub fn when_match_outcome_async<S, F>(self, on_success: S, on_fail: F) -> Ready<Self>
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        ready(self.when_match_outcome(on_success, on_fail))
    }

    // ========== Transform ==========

    /// Replace a successful outcome with the one `f` resolves to.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::IntoOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = 1
    ///     .into_success()
    ///     .on_success_async(|| async { 2.into_success() })
    ///     .await;
    /// assert_eq!(*outcome.value(), 2);
    /// # });
    /// ```
    pub async fn on_success_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            f().await
        } else {
            self
        }
    }

    /// Replace a successful outcome with the one `f(value)` resolves to.
    pub async fn on_success_value_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            f(self.value).await
        } else {
            self
        }
    }

    /// Replace a successful outcome with the one `f(outcome)` resolves to.
    pub async fn on_success_outcome_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            f(self).await
        } else {
            self
        }
    }

    /// Replace a failed outcome with the one `f` resolves to.
    pub async fn on_fail_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            self
        } else {
            f().await
        }
    }

    /// Replace a failed outcome with the one `f(value)` resolves to.
    pub async fn on_fail_value_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            self
        } else {
            f(self.value).await
        }
    }

    /// Replace a failed outcome with the one `f(outcome)` resolves to.
    pub async fn on_fail_outcome_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success {
            self
        } else {
            f(self).await
        }
    }

    /// Replace this outcome with the one `f` resolves to, whatever its status.
    pub async fn on_any_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        f().await
    }

    /// Replace this outcome with the one `f(outcome)` resolves to, whatever its status.
    pub async fn on_any_outcome_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        f(self).await
    }
}

#[cfg(test)]
mod tests {
    use crate::reason::Error;
    use crate::{IntoOutcome, Outcome};
    use std::cell::Cell;

    #[tokio::test]
    async fn test_when_success_async_on_held_success() {
        let mut invoked = false;
        let outcome = "success".into_success().when_success_async(|| invoked = true).await;
        assert!(invoked);
        assert_eq!(*outcome.value(), "success");
    }

    #[tokio::test]
    async fn test_when_fail_async_skips_success() {
        let mut invoked = false;
        let outcome = "success"
            .into_success()
            .when_fail_value_async(|_| invoked = true)
            .await;
        assert!(!invoked);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_when_match_variants_async() {
        let calls = Cell::new((0, 0));
        let bump_ok = || calls.set((calls.get().0 + 1, calls.get().1));
        let bump_ko = || calls.set((calls.get().0, calls.get().1 + 1));

        1.into_success().when_match_async(bump_ok, bump_ko).await;
        1.into_fail()
            .when_match_value_async(|_| bump_ok(), |_| bump_ko())
            .await;
        1.into_fail()
            .when_match_outcome_async(|_| bump_ok(), |_| bump_ko())
            .await;

        assert_eq!(calls.get(), (1, 2));
    }

    #[tokio::test]
    async fn test_when_outcome_async_returns_original() {
        let original = Outcome::fail(5, [Error::create("e")]);
        let mut errors = 0;
        let returned = original
            .clone()
            .when_fail_outcome_async(|o| errors = o.errors().count())
            .await
            .when_success_outcome_async(|_| panic!("not a success"))
            .await;
        assert_eq!(errors, 1);
        assert_eq!(returned, original);
    }

    #[tokio::test]
    async fn test_on_success_async_runs_only_on_success() {
        let calls = Cell::new(0);
        let f = || async {
            calls.set(calls.get() + 1);
            10.into_success()
        };

        let replaced = 1.into_success().on_success_async(f).await;
        let kept = 1.into_fail().on_success_async(f).await;

        assert_eq!(calls.get(), 1);
        assert_eq!(*replaced.value(), 10);
        assert_eq!(kept, 1.into_fail());
    }

    #[tokio::test]
    async fn test_on_fail_value_async_recovers() {
        let outcome = 3
            .into_fail()
            .on_fail_value_async(|v| async move { (v * 2).into_success() })
            .await;
        assert_eq!(outcome, 6.into_success());
    }

    #[tokio::test]
    async fn test_on_outcome_async_variants() {
        let outcome = Outcome::fail(1, [Error::create("e")])
            .on_success_outcome_async(|_| async { 100.into_fail() })
            .await
            .on_fail_outcome_async(|o| async move { (*o.value() + 1).into_success() })
            .await
            .on_success_value_async(|v| async move { (v + 1).into_success() })
            .await
            .on_fail_async(|| async { 100.into_fail() })
            .await;
        assert_eq!(outcome, 3.into_success());
    }

    #[tokio::test]
    async fn test_on_any_async_always_runs() {
        let outcome = 1.into_success().on_any_async(|| async { 0.into_fail() }).await;
        assert!(outcome.is_failure());

        let outcome = 1
            .into_fail()
            .on_any_outcome_async(|o| async move { (*o.value() + 1).into_success() })
            .await;
        assert_eq!(outcome, 2.into_success());
    }
}
