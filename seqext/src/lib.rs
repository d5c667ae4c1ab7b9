// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequence-processing extensions for ordinary collections.
//!
//! This crate provides two small, independent extension traits for anything
//! that implements [`IntoIterator`]:
//!
//! - **[`await_each`](AwaitEachExt::await_each)** /
//!   **[`try_await_each`](AwaitEachExt::try_await_each)**: applies an
//!   asynchronous operation to each element strictly one at a time, awaiting
//!   every operation before the next one is created, and collects the results
//!   in input order.
//! - **[`as_list`](AsListExt::as_list)**: converts a sequence into a
//!   [`Vec`], handing back the existing backing storage when the input is
//!   already list-shaped instead of copying it.
//!
//! # Sequential Await Explained
//!
//! `await_each` is a deliberate alternative to fan-out combinators such as
//! `futures::future::join_all`: it trades throughput for predictability.
//! No element's operation starts before the previous element's operation has
//! fully resolved, so at most one operation is ever in flight. Use it when
//! the operation shares an exclusive resource, is subject to an external rate
//! limit, or must observe its side effects in input order.
//!
//! ```rust
//! use seqext::AwaitEachExt;
//!
//! # async fn example() {
//! let ids = vec![1, 2, 3];
//! let loaded = ids.await_each(|id| async move { id * 10 }).await;
//! assert_eq!(loaded, [10, 20, 30]);
//! # }
//! ```
//!
//! The fallible flavor stops at the first error and returns it verbatim;
//! elements after the failing one are never visited and results accumulated
//! before it are dropped:
//!
//! ```rust
//! use seqext::AwaitEachExt;
//!
//! # async fn example() {
//! let outcome: Result<Vec<i32>, &str> = vec![1, 2, 3]
//!     .try_await_each(|id| async move {
//!         if id == 2 { Err("boom") } else { Ok(id * 10) }
//!     })
//!     .await;
//! assert_eq!(outcome, Err("boom"));
//! # }
//! ```
//!
//! # List Coercion Explained
//!
//! `as_list` is for the case where a value has to be stored or passed around
//! as a generic sequence but is usually a `Vec` underneath. Unlike
//! `Iterator::collect`, which always allocates a fresh `Vec`, `as_list`
//! checks the input's actual shape first and reuses its storage when it can:
//!
//! ```rust
//! use seqext::AsListExt;
//!
//! let items = vec![1, 2, 3];
//! let address = items.as_ptr();
//!
//! let list = items.as_list();
//! assert_eq!(list.as_ptr(), address); // same allocation, no copy
//! ```
//!
//! Lazy sequences are enumerated exactly once into a new `Vec`:
//!
//! ```rust
//! use seqext::AsListExt;
//!
//! let squares = (1..=4).map(|x| x * x).as_list();
//! assert_eq!(squares, [1, 4, 9, 16]);
//! ```
//!
//! # Feature Flags
//!
//! - `tracing`: emits `trace`-level events from both operators via the
//!   [`tracing`](https://docs.rs/tracing) crate. Off by default; when
//!   disabled the call sites compile to nothing.

#[macro_use]
mod logging;

pub mod as_list;
pub mod await_each;
pub mod prelude;

pub use as_list::AsListExt;
pub use await_each::AwaitEachExt;
