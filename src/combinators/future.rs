//! Combinators on futures that resolve to an outcome.

use std::future::Future;

use crate::outcome::Outcome;

/// Extension trait adding the `_async` combinators to any future of an
/// [`Outcome`].
///
/// Every method first awaits the receiver, then branches exactly like its
/// synchronous counterpart. Nothing runs until the returned future is
/// polled, and each callback runs at most once. Chained calls observe
/// strictly in call order, since each step awaits the previous one.
///
/// This trait is implemented for every `Future<Output = Outcome<T>>`; you
/// never need to implement it yourself.
///
/// # Example
///
/// ```
/// use verdict::{Error, Outcome, OutcomeFutureExt};
///
/// async fn load(id: u32) -> Outcome<u32> {
///     if id == 0 {
///         Outcome::fail(id, [Error::create("id must be positive")])
///     } else {
///         Outcome::success(id, [])
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let mut failures = Vec::new();
/// let outcome = load(0)
///     .when_fail_outcome_async(|o| failures.push(o.errors().count()))
///     .on_fail_async(|| load(1))
///     .await;
///
/// assert_eq!(failures, vec![1]);
/// assert!(outcome.is_success());
/// # });
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    // ========== Observe ==========

    /// Await the outcome, then run `f` if it succeeded.
    fn when_success_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.when_success(f) }
    }

    /// Await the outcome, then run `f` with its value if it succeeded.
    fn when_success_value_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.when_success_value(f) }
    }

    /// Await the outcome, then run `f` with it if it succeeded.
    fn when_success_outcome_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Outcome<T>),
    {
        async move { self.await.when_success_outcome(f) }
    }

    /// Await the outcome, then run `f` if it failed.
    fn when_fail_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.when_fail(f) }
    }

    /// Await the outcome, then run `f` with its value if it failed.
    fn when_fail_value_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.when_fail_value(f) }
    }

    /// Await the outcome, then run `f` with it if it failed.
    fn when_fail_outcome_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Outcome<T>),
    {
        async move { self.await.when_fail_outcome(f) }
    }

    /// Await the outcome, then run exactly one of the callbacks.
    fn when_match_async<S, F>(self, on_success: S, on_fail: F) -> impl Future<Output = Outcome<T>>
    where
        S: FnOnce(),
        F: FnOnce(),
    {
        async move { self.await.when_match(on_success, on_fail) }
    }

    /// Await the outcome, then run exactly one of the callbacks with its value.
    fn when_match_value_async<S, F>(
        self,
        on_success: S,
        on_fail: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        S: FnOnce(&T),
        F: FnOnce(&T),
    {
        async move { self.await.when_match_value(on_success, on_fail) }
    }

    /// Await the outcome, then run exactly one of the callbacks with it.
    fn when_match_outcome_async<S, F>(
        self,
        on_success: S,
        on_fail: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        S: FnOnce(&Outcome<T>),
        F: FnOnce(&Outcome<T>),
    {
        async move { self.await.when_match_outcome(on_success, on_fail) }
    }

    // ========== Transform ==========

    /// Await the outcome; if it succeeded, replace it with what `f` resolves to.
    fn on_success_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_success_async(f).await }
    }

    /// Await the outcome; if it succeeded, replace it with what `f(value)` resolves to.
    fn on_success_value_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_success_value_async(f).await }
    }

    /// Await the outcome; if it succeeded, replace it with what `f(outcome)` resolves to.
    fn on_success_outcome_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_success_outcome_async(f).await }
    }

    /// Await the outcome; if it failed, replace it with what `f` resolves to.
    fn on_fail_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_fail_async(f).await }
    }

    /// Await the outcome; if it failed, replace it with what `f(value)` resolves to.
    fn on_fail_value_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_fail_value_async(f).await }
    }

    /// Await the outcome; if it failed, replace it with what `f(outcome)` resolves to.
    fn on_fail_outcome_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_fail_outcome_async(f).await }
    }

    /// Await the outcome, then replace it with what `f` resolves to.
    ///
    /// The receiver is still awaited before `f` runs, so any work it does
    /// completes first.
    fn on_any_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_any_async(f).await }
    }

    /// Await the outcome, then replace it with what `f(outcome)` resolves to.
    fn on_any_outcome_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.on_any_outcome_async(f).await }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::{Error, Success};
    use crate::IntoOutcome;
    use futures::future::ready;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_when_success_async_awaits_receiver_first() {
        let resolved = AtomicBool::new(false);
        let observed_after_resolve = AtomicBool::new(false);

        let outcome = async {
            tokio::task::yield_now().await;
            resolved.store(true, Ordering::SeqCst);
            1.into_success()
        }
        .when_success_async(|| {
            observed_after_resolve.store(resolved.load(Ordering::SeqCst), Ordering::SeqCst)
        })
        .await;

        assert!(outcome.is_success());
        assert!(observed_after_resolve.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_nothing_runs_until_polled() {
        let invoked = AtomicBool::new(false);
        let pending =
            ready(1.into_success()).when_success_async(|| invoked.store(true, Ordering::SeqCst));
        assert!(!invoked.load(Ordering::SeqCst));
        pending.await;
        assert!(invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_when_variants_on_future() {
        let log = RefCell::new(Vec::new());

        ready(Outcome::fail(2, [Error::create("e")]))
            .when_success_async(|| log.borrow_mut().push("success".to_string()))
            .when_fail_async(|| log.borrow_mut().push("fail".to_string()))
            .when_fail_value_async(|v| log.borrow_mut().push(format!("fail value {}", v)))
            .when_success_value_async(|v| log.borrow_mut().push(format!("success value {}", v)))
            .when_fail_outcome_async(|o| log.borrow_mut().push(format!("errors {}", o.errors().count())))
            .when_success_outcome_async(|_| log.borrow_mut().push("success outcome".to_string()))
            .when_match_async(
                || log.borrow_mut().push("match ok".to_string()),
                || log.borrow_mut().push("match ko".to_string()),
            )
            .when_match_value_async(
                |v| log.borrow_mut().push(format!("match ok {}", v)),
                |v| log.borrow_mut().push(format!("match ko {}", v)),
            )
            .when_match_outcome_async(
                |_| log.borrow_mut().push("match outcome ok".to_string()),
                |_| log.borrow_mut().push("match outcome ko".to_string()),
            )
            .await;

        assert_eq!(
            log.into_inner(),
            vec![
                "fail",
                "fail value 2",
                "errors 1",
                "match ko",
                "match ko 2",
                "match outcome ko",
            ]
        );
    }

    #[tokio::test]
    async fn test_on_success_async_only_after_success() {
        let calls = RefCell::new(0);
        let outcome = ready(Outcome::fail(1, [Error::create("e")]))
            .on_success_async(|| async {
                *calls.borrow_mut() += 1;
                9.into_success()
            })
            .await;

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(outcome, Outcome::fail(1, [Error::create("e")]));
    }

    #[tokio::test]
    async fn test_on_variants_chain_in_order() {
        let trail = RefCell::new(Vec::new());

        let outcome = async { 1.into_success() }
            .on_success_value_async(|v| async move { (v + 1).into_fail() })
            .when_fail_value_async(|v| trail.borrow_mut().push(*v))
            .on_fail_outcome_async(|o| async move {
                Outcome::success(*o.value() * 10, [Success::create("recovered")])
            })
            .when_success_value_async(|v| trail.borrow_mut().push(*v))
            .on_success_outcome_async(|o| async move { o })
            .on_fail_value_async(|_| async { 0.into_fail() })
            .on_fail_async(|| async { 0.into_fail() })
            .await;

        assert_eq!(trail.into_inner(), vec![2, 20]);
        assert_eq!(outcome, Outcome::success(20, [Success::create("recovered")]));
    }

    #[tokio::test]
    async fn test_on_any_async_on_future_always_runs() {
        let outcome = ready(1.into_fail())
            .on_any_async(|| async { 5.into_success() })
            .on_any_outcome_async(|o| async move { (*o.value() + 1).into_fail() })
            .await;
        assert_eq!(outcome, 6.into_fail());
    }

    #[tokio::test]
    async fn test_chain_over_spawned_task() {
        let handle = tokio::spawn(async { 21.into_success() });
        let outcome = async move { handle.await.expect("task panicked") }
            .on_success_value_async(|v| async move { (v * 2).into_success() })
            .await;
        assert_eq!(*outcome.value(), 42);
    }
}
