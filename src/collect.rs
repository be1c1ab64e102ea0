//! Collecting values out of sequences of outcomes
//!
//! These helpers split a sequence of [`Outcome`]s by status and keep only the
//! values, preserving input order. The returned adapters are lazy: nothing
//! is consumed until they are iterated. They are `Clone` whenever the source
//! iterator is, so a restartable source gives a restartable result.
//!
//! # Examples
//!
//! ```
//! use verdict::{IntoOutcome, collect::{collect_failures, collect_successes}};
//!
//! let outcomes = vec![1.into_success(), 2.into_fail(), 3.into_success()];
//!
//! let ok: Vec<_> = collect_successes(outcomes.clone()).collect();
//! let failed: Vec<_> = collect_failures(outcomes).collect();
//!
//! assert_eq!(ok, vec![1, 3]);
//! assert_eq!(failed, vec![2]);
//! ```

use std::iter::FusedIterator;

use crate::outcome::Outcome;

/// Lazy iterator over the values of successful outcomes.
///
/// Created by [`collect_successes`] or [`OutcomeIteratorExt::collect_successes`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Successes<I> {
    inner: I,
}

/// Lazy iterator over the values of failed outcomes.
///
/// Created by [`collect_failures`] or [`OutcomeIteratorExt::collect_failures`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Failures<I> {
    inner: I,
}

fn next_with_status<T, I>(inner: &mut I, is_success: bool) -> Option<T>
where
    I: Iterator<Item = Outcome<T>>,
{
    inner
        .find(|outcome| outcome.is_success == is_success)
        .map(Outcome::into_value)
}

fn next_back_with_status<T, I>(inner: &mut I, is_success: bool) -> Option<T>
where
    I: DoubleEndedIterator<Item = Outcome<T>>,
{
    inner
        .rfind(|outcome| outcome.is_success == is_success)
        .map(Outcome::into_value)
}

impl<T, I> Iterator for Successes<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        next_with_status(&mut self.inner, true)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T, I> DoubleEndedIterator for Successes<I>
where
    I: DoubleEndedIterator<Item = Outcome<T>>,
{
    fn next_back(&mut self) -> Option<T> {
        next_back_with_status(&mut self.inner, true)
    }
}

impl<T, I> FusedIterator for Successes<I> where I: FusedIterator<Item = Outcome<T>> {}

impl<T, I> Iterator for Failures<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        next_with_status(&mut self.inner, false)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T, I> DoubleEndedIterator for Failures<I>
where
    I: DoubleEndedIterator<Item = Outcome<T>>,
{
    fn next_back(&mut self) -> Option<T> {
        next_back_with_status(&mut self.inner, false)
    }
}

impl<T, I> FusedIterator for Failures<I> where I: FusedIterator<Item = Outcome<T>> {}

/// Yield the values of the successful outcomes, in order.
///
/// # Examples
///
/// ```
/// use verdict::{IntoOutcome, collect::collect_successes};
///
/// let values: Vec<_> = collect_successes(vec!["a".into_success(), "b".into_fail()]).collect();
/// assert_eq!(values, vec!["a"]);
/// ```
pub fn collect_successes<T, I>(outcomes: I) -> Successes<I::IntoIter>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    Successes {
        inner: outcomes.into_iter(),
    }
}

/// Yield the values of the failed outcomes, in order.
pub fn collect_failures<T, I>(outcomes: I) -> Failures<I::IntoIter>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    Failures {
        inner: outcomes.into_iter(),
    }
}

/// Split outcomes into `(success values, failure values)` in a single pass.
///
/// # Examples
///
/// ```
/// use verdict::{IntoOutcome, collect::partition_outcomes};
///
/// let (ok, failed) = partition_outcomes(vec![1.into_fail(), 2.into_success(), 3.into_fail()]);
/// assert_eq!(ok, vec![2]);
/// assert_eq!(failed, vec![1, 3]);
/// ```
pub fn partition_outcomes<T, I>(outcomes: I) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        if outcome.is_success {
            successes.push(outcome.value);
        } else {
            failures.push(outcome.value);
        }
    }
    (successes, failures)
}

/// Iterator methods for sequences of outcomes.
///
/// Implemented for every iterator over [`Outcome`]s.
///
/// # Examples
///
/// ```
/// use verdict::{IntoOutcome, OutcomeIteratorExt};
///
/// let outcomes = vec![1.into_success(), 2.into_fail(), 3.into_success()];
/// let total: i32 = outcomes.into_iter().collect_successes().sum();
/// assert_eq!(total, 4);
/// ```
pub trait OutcomeIteratorExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Lazily yield the values of the successful outcomes.
    fn collect_successes(self) -> Successes<Self> {
        Successes { inner: self }
    }

    /// Lazily yield the values of the failed outcomes.
    fn collect_failures(self) -> Failures<Self> {
        Failures { inner: self }
    }

    /// Split into `(success values, failure values)`.
    fn partition_outcomes(self) -> (Vec<T>, Vec<T>) {
        partition_outcomes(self)
    }
}

impl<T, I> OutcomeIteratorExt<T> for I where I: Iterator<Item = Outcome<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::Error;
    use crate::IntoOutcome;
    use std::cell::Cell;

    fn sample() -> Vec<Outcome<i32>> {
        vec![1.into_success(), 2.into_fail(), 3.into_success()]
    }

    #[test]
    fn test_collect_successes_in_order() {
        let values: Vec<_> = collect_successes(sample()).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_collect_failures() {
        let values: Vec<_> = collect_failures(sample()).collect();
        assert_eq!(values, vec![2]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(collect_successes(Vec::<Outcome<i32>>::new()).count(), 0);
        assert_eq!(collect_failures(Vec::<Outcome<i32>>::new()).count(), 0);
    }

    #[test]
    fn test_failure_values_keep_placeholders() {
        let outcomes = vec![Outcome::fail("", [Error::create("missing")]), "x".into_success()];
        let values: Vec<_> = collect_failures(outcomes).collect();
        assert_eq!(values, vec![""]);
    }

    #[test]
    fn test_is_lazy() {
        let pulled = Cell::new(0);
        let source = sample().into_iter().inspect(|_| pulled.set(pulled.get() + 1));

        let mut successes = collect_successes(source);
        assert_eq!(pulled.get(), 0);

        assert_eq!(successes.next(), Some(1));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_restartable_when_source_is_clone() {
        let successes = collect_successes(sample());
        let first: Vec<_> = successes.clone().collect();
        let second: Vec<_> = successes.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_double_ended() {
        let values: Vec<_> = collect_successes(sample()).rev().collect();
        assert_eq!(values, vec![3, 1]);
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let successes = collect_successes(sample());
        assert_eq!(successes.size_hint(), (0, Some(3)));
    }

    #[test]
    fn test_partition() {
        let (ok, failed) = partition_outcomes(sample());
        assert_eq!(ok, vec![1, 3]);
        assert_eq!(failed, vec![2]);
    }

    #[test]
    fn test_extension_trait() {
        assert_eq!(sample().into_iter().collect_successes().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(sample().into_iter().collect_failures().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sample().into_iter().partition_outcomes(), (vec![1, 3], vec![2]));
    }
}
