//! Two-way partitions of a sequence.
//!
//! `split_while` cuts once: everything from the first failing element onward goes
//! right, even elements that would pass again. `split_with` classifies every element
//! independently, so left/right membership may interleave.

use crate::fold::reduce;

/// Split at the first element for which `predicate` is false.
pub fn split_while<'a, E, F>(seq: &'a [E], mut predicate: F) -> (Vec<E>, Vec<E>)
where
    E: Clone,
    F: FnMut(&'a E) -> bool,
{
    let (left, right, _) = reduce(
        seq,
        |element, (mut left, mut right, in_left): (Vec<E>, Vec<E>, bool)| {
            // Once flipped to the right partition the predicate is no longer consulted.
            let in_left = in_left && predicate(element);
            if in_left {
                left.push(element.clone());
            } else {
                right.push(element.clone());
            }
            (left, right, in_left)
        },
        (Vec::new(), Vec::new(), true),
    );
    (left, right)
}

/// Partition into `(matching, non_matching)`; equivalent to `(filter, reject)`.
pub fn split_with<'a, E, F>(seq: &'a [E], mut predicate: F) -> (Vec<E>, Vec<E>)
where
    E: Clone,
    F: FnMut(&'a E) -> bool,
{
    reduce(
        seq,
        |element, (mut left, mut right): (Vec<E>, Vec<E>)| {
            if predicate(element) {
                left.push(element.clone());
            } else {
                right.push(element.clone());
            }
            (left, right)
        },
        (Vec::new(), Vec::new()),
    )
}
