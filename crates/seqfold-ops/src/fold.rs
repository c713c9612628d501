//! Fold engine: the short-circuiting left fold and its specializations.
//!
//! Traversal is strictly in index order. A step returning [`Reduction::Halt`] stops
//! the walk right there; later elements are never visited. On an empty sequence the
//! initial accumulator comes back untouched and the step is never called.

use seqfold_core::reduction::Reduction;

/// Fold `seq` left to right, letting `step` halt the traversal early.
///
/// The step receives the current element and the accumulator by value and returns the
/// signal together with the next accumulator. The accumulator returned alongside a
/// `Halt` is the result.
pub fn reduce_while<'a, E, A, F>(seq: &'a [E], mut step: F, init: A) -> A
where
    F: FnMut(&'a E, A) -> (Reduction, A),
{
    let mut acc = init;
    for (_index, element) in seq.iter().enumerate() {
        let (signal, next) = step(element, acc);
        acc = next;
        if signal.is_halt() {
            #[cfg(feature = "tracing")]
            tracing::trace!(index = _index, len = seq.len(), "reduce_while halted");
            return acc;
        }
    }
    acc
}

/// Non-short-circuiting fold: `reduce_while` with every signal forced to `Cont`.
pub fn reduce<'a, E, A, F>(seq: &'a [E], mut step: F, init: A) -> A
where
    F: FnMut(&'a E, A) -> A,
{
    reduce_while(seq, |element, acc| (Reduction::Cont, step(element, acc)), init)
}

/// Fallible `reduce_while`. The first `Err` from `step` halts the traversal and is
/// returned as-is; no partial accumulator escapes.
pub fn try_reduce_while<'a, E, A, X, F>(seq: &'a [E], mut step: F, init: A) -> Result<A, X>
where
    F: FnMut(&'a E, A) -> Result<(Reduction, A), X>,
{
    reduce_while(
        seq,
        |element, acc: Result<A, X>| match acc {
            Ok(acc) => match step(element, acc) {
                Ok((signal, next)) => (signal, Ok(next)),
                Err(e) => (Reduction::Halt, Err(e)),
            },
            // Unreachable in practice: an Err always halts.
            Err(e) => (Reduction::Halt, Err(e)),
        },
        Ok(init),
    )
}

/// Fallible `reduce`.
pub fn try_reduce<'a, E, A, X, F>(seq: &'a [E], mut step: F, init: A) -> Result<A, X>
where
    F: FnMut(&'a E, A) -> Result<A, X>,
{
    try_reduce_while(
        seq,
        |element, acc| step(element, acc).map(|next| (Reduction::Cont, next)),
        init,
    )
}

/// Invoke `effect` on every element in order.
pub fn each<'a, E, F>(seq: &'a [E], mut effect: F)
where
    F: FnMut(&'a E),
{
    reduce(seq, |element, ()| effect(element), ())
}

/// Like [`each`], but also passes the element's index. The index is the fold
/// accumulator: it starts at 0 and the step returns `index + 1`.
pub fn for_each<'a, E, F>(seq: &'a [E], mut effect: F)
where
    F: FnMut(usize, &'a E),
{
    reduce(
        seq,
        |element, index| {
            effect(index, element);
            index + 1
        },
        0usize,
    );
}
