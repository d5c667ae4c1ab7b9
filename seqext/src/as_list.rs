// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Copy-avoiding conversion of generic sequences into a `Vec`.

use std::any::Any;
use std::collections::VecDeque;

/// Extension trait providing the `as_list` conversion for anything that
/// implements [`IntoIterator`].
///
/// Not to be confused with [`Iterator::collect`], which always builds a
/// separate `Vec` regardless of the source type. `as_list` is more suitable
/// when the sequence is expected to be a `Vec` already but has to be stored
/// or passed around behind a generic sequence bound.
pub trait AsListExt: IntoIterator + Sized {
    /// Returns the sequence as an ordered, indexable list.
    ///
    /// # Behavior
    ///
    /// The input's shape is checked at runtime before anything is copied:
    ///
    /// - A [`Vec`] is returned unchanged: same allocation, observable via
    ///   pointer identity
    /// - A [`Box<[T]>`](Box) or [`VecDeque`] is converted in place, reusing
    ///   its allocation without copying elements
    /// - Anything else is enumerated exactly once, in its natural order,
    ///   into a newly allocated `Vec`
    ///
    /// Either way, enumerating the result yields exactly the input's
    /// elements in the input's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::AsListExt;
    ///
    /// // Already a list: handed back without copying.
    /// let items = vec!["a", "b"];
    /// let address = items.as_ptr();
    /// assert_eq!(items.as_list().as_ptr(), address);
    ///
    /// // Lazy sequence: materialized once.
    /// let evens = (0..10).filter(|x| x % 2 == 0).as_list();
    /// assert_eq!(evens, [0, 2, 4, 6, 8]);
    /// ```
    fn as_list(self) -> Vec<Self::Item>;
}

impl<I> AsListExt for I
where
    I: IntoIterator + 'static,
    I::Item: 'static,
{
    fn as_list(self) -> Vec<I::Item> {
        // Runtime capability check against the list-shaped std sequence
        // types. The `Option` slot lets a `&mut dyn Any` probe move the
        // collection out by value on a match.
        let mut slot = Some(self);
        let probe: &mut dyn Any = &mut slot;

        if let Some(list) = probe.downcast_mut::<Option<Vec<I::Item>>>() {
            trace!("as_list: input is already a Vec, reusing it");
            return list.take().unwrap_or_default();
        }
        if let Some(boxed) = probe.downcast_mut::<Option<Box<[I::Item]>>>() {
            trace!("as_list: unboxing slice in place");
            return boxed.take().map_or_else(Vec::new, |boxed| boxed.into_vec());
        }
        if let Some(deque) = probe.downcast_mut::<Option<VecDeque<I::Item>>>() {
            trace!("as_list: making deque storage contiguous");
            return deque.take().map_or_else(Vec::new, Vec::from);
        }

        trace!("as_list: materializing a new list");
        slot.map_or_else(Vec::new, |collection| collection.into_iter().collect())
    }
}
