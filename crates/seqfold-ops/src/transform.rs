//! Order-preserving combinators. Each one is a fold that accumulates a new `Vec`.

use seqfold_core::reduction::Reduction;

use crate::fold::{reduce, reduce_while, try_reduce};

/// Apply `transform` to every element. Output length equals input length.
pub fn map<'a, E, U, F>(seq: &'a [E], mut transform: F) -> Vec<U>
where
    F: FnMut(&'a E) -> U,
{
    reduce(
        seq,
        |element, mut out: Vec<U>| {
            out.push(transform(element));
            out
        },
        Vec::with_capacity(seq.len()),
    )
}

/// Fallible [`map`]: the first error aborts and is returned, with no partial output.
pub fn try_map<'a, E, U, X, F>(seq: &'a [E], mut transform: F) -> Result<Vec<U>, X>
where
    F: FnMut(&'a E) -> Result<U, X>,
{
    try_reduce(
        seq,
        |element, mut out: Vec<U>| {
            out.push(transform(element)?);
            Ok(out)
        },
        Vec::with_capacity(seq.len()),
    )
}

/// Keep the elements for which `predicate` holds, in their original order.
pub fn filter<'a, E, F>(seq: &'a [E], mut predicate: F) -> Vec<E>
where
    E: Clone,
    F: FnMut(&'a E) -> bool,
{
    reduce(
        seq,
        |element, mut out: Vec<E>| {
            if predicate(element) {
                out.push(element.clone());
            }
            out
        },
        Vec::new(),
    )
}

/// Keep the elements for which `predicate` does not hold.
pub fn reject<'a, E, F>(seq: &'a [E], mut predicate: F) -> Vec<E>
where
    E: Clone,
    F: FnMut(&'a E) -> bool,
{
    filter(seq, |element| !predicate(element))
}

/// Concatenate the results of `transform` for every element. Empty results add nothing.
pub fn flat_map<'a, E, I, F>(seq: &'a [E], mut transform: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&'a E) -> I,
{
    reduce(
        seq,
        |element, mut out: Vec<I::Item>| {
            out.extend(transform(element));
            out
        },
        Vec::new(),
    )
}

/// `left` followed by `right`, always in a freshly allocated `Vec`.
pub fn concat<E: Clone>(left: &[E], right: &[E]) -> Vec<E> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(left);
    reduce(
        right,
        |element, mut out: Vec<E>| {
            out.push(element.clone());
            out
        },
        out,
    )
}

/// Element at `index`, or `default` when the index is past the end. Never fails.
pub fn at<E: Clone>(seq: &[E], index: usize, default: E) -> E {
    seq.get(index).cloned().unwrap_or(default)
}

/// The first `n` elements (all of them when `n` exceeds the length, none when `n == 0`).
pub fn take<E: Clone>(seq: &[E], n: usize) -> Vec<E> {
    reduce_while(
        seq,
        |element, mut out: Vec<E>| {
            if out.len() >= n {
                return (Reduction::Halt, out);
            }
            out.push(element.clone());
            let signal = if out.len() >= n {
                Reduction::Halt
            } else {
                Reduction::Cont
            };
            (signal, out)
        },
        Vec::with_capacity(n.min(seq.len())),
    )
}

/// Leading elements while `predicate` holds. Stops at the first failure without
/// looking at anything after it.
pub fn take_while<'a, E, F>(seq: &'a [E], mut predicate: F) -> Vec<E>
where
    E: Clone,
    F: FnMut(&'a E) -> bool,
{
    reduce_while(
        seq,
        |element, mut out: Vec<E>| {
            if !predicate(element) {
                return (Reduction::Halt, out);
            }
            out.push(element.clone());
            (Reduction::Cont, out)
        },
        Vec::new(),
    )
}
