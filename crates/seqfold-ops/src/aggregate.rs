//! Terminating aggregations: counts, arithmetic folds, membership and quantifiers.

use std::convert::identity;
use std::ops::{Add, Mul};

use seqfold_core::error::{Error, Result};
use seqfold_core::reduction::Reduction;

use crate::fold::{reduce, reduce_while};

pub fn count<E>(seq: &[E]) -> usize {
    seq.len()
}

/// Number of elements satisfying `predicate`.
pub fn count_by<'a, E, F>(seq: &'a [E], mut predicate: F) -> usize
where
    F: FnMut(&'a E) -> bool,
{
    reduce(
        seq,
        |element, n| if predicate(element) { n + 1 } else { n },
        0,
    )
}

/// Seed with the first element's key and fold the rest with `combine`.
/// Fails with `EmptyInput { op }` when there is no first element.
fn fold_keys<'a, E, N, F, C>(
    seq: &'a [E],
    op: &'static str,
    mut selector: F,
    combine: C,
) -> Result<N>
where
    F: FnMut(&'a E) -> N,
    C: Fn(N, N) -> N,
{
    let (first, rest) = seq.split_first().ok_or(Error::EmptyInput { op })?;
    let seed = selector(first);
    Ok(reduce(rest, |element, acc| combine(acc, selector(element)), seed))
}

/// Sum of `selector` over the sequence. The sequence must be non-empty.
pub fn sum_by<'a, E, N, F>(seq: &'a [E], selector: F) -> Result<N>
where
    N: Add<Output = N>,
    F: FnMut(&'a E) -> N,
{
    fold_keys(seq, "sum", selector, |acc, n| acc + n)
}

pub fn sum<E>(seq: &[E]) -> Result<E>
where
    E: Clone + Add<Output = E>,
{
    sum_by(seq, E::clone)
}

/// Product of `selector` over the sequence. The sequence must be non-empty.
pub fn product_by<'a, E, N, F>(seq: &'a [E], selector: F) -> Result<N>
where
    N: Mul<Output = N>,
    F: FnMut(&'a E) -> N,
{
    fold_keys(seq, "product", selector, |acc, n| acc * n)
}

pub fn product<E>(seq: &[E]) -> Result<E>
where
    E: Clone + Mul<Output = E>,
{
    product_by(seq, E::clone)
}

/// True as soon as some element's key equals `needle`'s key; the rest is not visited.
pub fn is_member_by<'a, E, K, F>(seq: &'a [E], needle: &'a E, mut selector: F) -> bool
where
    K: PartialEq,
    F: FnMut(&'a E) -> K,
{
    let target = selector(needle);
    reduce_while(
        seq,
        |element, _| {
            if selector(element) == target {
                (Reduction::Halt, true)
            } else {
                (Reduction::Cont, false)
            }
        },
        false,
    )
}

pub fn is_member<E: PartialEq>(seq: &[E], needle: &E) -> bool {
    is_member_by(seq, needle, identity)
}

/// True when every element satisfies `predicate`; halts on the first failure.
///
/// An empty sequence is vacuously true.
pub fn all<'a, E, F>(seq: &'a [E], mut predicate: F) -> bool
where
    F: FnMut(&'a E) -> bool,
{
    reduce_while(
        seq,
        |element, _| {
            if predicate(element) {
                (Reduction::Cont, true)
            } else {
                (Reduction::Halt, false)
            }
        },
        true,
    )
}

/// True as soon as one element satisfies `predicate`; false on an empty sequence.
pub fn any<'a, E, F>(seq: &'a [E], mut predicate: F) -> bool
where
    F: FnMut(&'a E) -> bool,
{
    reduce_while(
        seq,
        |element, _| {
            if predicate(element) {
                (Reduction::Halt, true)
            } else {
                (Reduction::Cont, false)
            }
        },
        false,
    )
}
