// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential asynchronous mapping over ordinary collections.

use async_trait::async_trait;
use std::future::Future;

/// Extension trait providing one-at-a-time asynchronous mapping for anything
/// that implements [`IntoIterator`].
///
/// An alternative to `futures::future::join_all` and similar fan-out
/// combinators for situations where true concurrency is not desirable: the
/// asynchronous operation shares an exclusive resource, must respect an
/// external rate limit, or has side effects that must be observed in input
/// order.
#[async_trait]
pub trait AwaitEachExt: IntoIterator + Sized {
    /// Awaits an asynchronous operation on each element, one element at a
    /// time, collecting the results in input order.
    ///
    /// # Behavior
    ///
    /// - Elements are visited in the source's natural iteration order
    /// - Each operation is awaited to completion before the next one is
    ///   created, so at most one operation is ever in flight
    /// - Results are appended in arrival order, which equals input order
    /// - An empty source completes immediately without invoking `operation`
    ///
    /// The source must be finite; an infinite sequence never completes.
    ///
    /// # Arguments
    ///
    /// * `operation` - An async function invoked once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::AwaitEachExt;
    ///
    /// # async fn example() {
    /// let doubled = vec![1, 2, 3].await_each(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, [2, 4, 6]);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`try_await_each`](AwaitEachExt::try_await_each) - Stops at the first error
    async fn await_each<F, Fut, R>(self, operation: F) -> Vec<R>
    where
        Self: Send,
        Self::IntoIter: Send,
        Self::Item: Send,
        F: FnMut(Self::Item) -> Fut + Send,
        Fut: Future<Output = R> + Send,
        R: Send;

    /// Awaits a fallible asynchronous operation on each element, one element
    /// at a time, stopping at the first failure.
    ///
    /// # Behavior
    ///
    /// - Sequencing is identical to [`await_each`](AwaitEachExt::await_each)
    /// - On success the result holds one output per input element, in input
    ///   order
    /// - The first `Err` is returned to the caller unchanged; elements after
    ///   the failing one are never visited and results accumulated so far are
    ///   dropped
    ///
    /// # Errors
    ///
    /// Whatever error `operation` produces, verbatim. No retrying, no
    /// wrapping, no partial results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::AwaitEachExt;
    ///
    /// # async fn example() {
    /// let outcome: Result<Vec<i32>, &str> = vec![1, 2, 3]
    ///     .try_await_each(|x| async move {
    ///         if x == 2 { Err("boom") } else { Ok(x * 10) }
    ///     })
    ///     .await;
    ///
    /// assert_eq!(outcome, Err("boom"));
    /// # }
    /// ```
    async fn try_await_each<F, Fut, R, E>(self, operation: F) -> Result<Vec<R>, E>
    where
        Self: Send,
        Self::IntoIter: Send,
        Self::Item: Send,
        F: FnMut(Self::Item) -> Fut + Send,
        Fut: Future<Output = Result<R, E>> + Send,
        R: Send,
        E: Send;
}

#[async_trait]
impl<I> AwaitEachExt for I
where
    I: IntoIterator,
{
    async fn await_each<F, Fut, R>(self, mut operation: F) -> Vec<R>
    where
        Self: Send,
        Self::IntoIter: Send,
        Self::Item: Send,
        F: FnMut(Self::Item) -> Fut + Send,
        Fut: Future<Output = R> + Send,
        R: Send,
    {
        let iter = self.into_iter();
        let mut results = Vec::with_capacity(iter.size_hint().0);
        for item in iter {
            results.push(operation(item).await);
            trace!("await_each: completed operation {}", results.len());
        }
        results
    }

    async fn try_await_each<F, Fut, R, E>(self, mut operation: F) -> Result<Vec<R>, E>
    where
        Self: Send,
        Self::IntoIter: Send,
        Self::Item: Send,
        F: FnMut(Self::Item) -> Fut + Send,
        Fut: Future<Output = Result<R, E>> + Send,
        R: Send,
        E: Send,
    {
        let iter = self.into_iter();
        let mut results = Vec::with_capacity(iter.size_hint().0);
        for item in iter {
            results.push(operation(item).await?);
            trace!("try_await_each: completed operation {}", results.len());
        }
        Ok(results)
    }
}
