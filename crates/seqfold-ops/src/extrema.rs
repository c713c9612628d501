//! Minimum and maximum, plain and by key.
//!
//! All of these seed the fold with the first element, so they fail with
//! `EmptyInput` on an empty sequence. Keys compare with `PartialOrd`: an element only
//! replaces the current extreme when strictly smaller (or larger), so ties keep the
//! earliest element and a NaN key never displaces anything. The flip side: a NaN in
//! the first position is never displaced either, and comes back as both min and max.

use std::convert::identity;

use seqfold_core::error::{Error, Result};

use crate::fold::reduce;

pub fn min_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> Result<&'a E>
where
    K: PartialOrd,
    F: FnMut(&'a E) -> K,
{
    let (first, rest) = seq.split_first().ok_or(Error::EmptyInput { op: "min" })?;
    let init = (first, selector(first));
    let (best, _) = reduce(
        rest,
        |element, (best, best_key)| {
            let key = selector(element);
            if key < best_key {
                (element, key)
            } else {
                (best, best_key)
            }
        },
        init,
    );
    Ok(best)
}

pub fn max_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> Result<&'a E>
where
    K: PartialOrd,
    F: FnMut(&'a E) -> K,
{
    let (first, rest) = seq.split_first().ok_or(Error::EmptyInput { op: "max" })?;
    let init = (first, selector(first));
    let (best, _) = reduce(
        rest,
        |element, (best, best_key)| {
            let key = selector(element);
            if key > best_key {
                (element, key)
            } else {
                (best, best_key)
            }
        },
        init,
    );
    Ok(best)
}

/// Minimum and maximum in a single pass, as `(min, max)`.
pub fn min_max_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> Result<(&'a E, &'a E)>
where
    K: PartialOrd,
    F: FnMut(&'a E) -> K,
{
    let (first, rest) = seq.split_first().ok_or(Error::EmptyInput { op: "min_max" })?;
    let init = ((first, selector(first)), (first, selector(first)));
    let ((min, _), (max, _)) = reduce(
        rest,
        |element, (lo, hi)| {
            let key = selector(element);
            if key < lo.1 {
                ((element, key), hi)
            } else if key > hi.1 {
                (lo, (element, key))
            } else {
                (lo, hi)
            }
        },
        init,
    );
    Ok((min, max))
}

pub fn min<E: PartialOrd>(seq: &[E]) -> Result<&E> {
    min_by(seq, identity)
}

pub fn max<E: PartialOrd>(seq: &[E]) -> Result<&E> {
    max_by(seq, identity)
}

pub fn min_max<E: PartialOrd>(seq: &[E]) -> Result<(&E, &E)> {
    min_max_by(seq, identity)
}
