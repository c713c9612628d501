//! First-seen de-duplication.
//!
//! Membership is checked linearly against the keys seen so far, so keys only need
//! `PartialEq` (no hashing or ordering).

use std::convert::identity;

use crate::fold::reduce;

/// Keep the first element for each distinct key, in first-seen order.
pub fn uniq_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> Vec<E>
where
    E: Clone,
    K: PartialEq,
    F: FnMut(&'a E) -> K,
{
    let (_, out) = reduce(
        seq,
        |element, (mut seen, mut out): (Vec<K>, Vec<E>)| {
            let key = selector(element);
            if !seen.contains(&key) {
                seen.push(key);
                out.push(element.clone());
            }
            (seen, out)
        },
        (Vec::new(), Vec::new()),
    );
    out
}

pub fn uniq<E>(seq: &[E]) -> Vec<E>
where
    E: Clone + PartialEq,
{
    uniq_by(seq, identity)
}
