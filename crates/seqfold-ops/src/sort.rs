//! Stable ordering.
//!
//! Sorting works on references into the input and clones once at the end, so
//! selectors see the caller's elements with the input lifetime (and `identity` works).

use std::cmp::Ordering;
use std::convert::identity;

use seqfold_core::order::Order;

/// Total order over `PartialOrd` keys. A key that is not comparable even with itself
/// (NaN) ranks after every comparable key; such keys are equal among themselves.
fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => {
            let a_ordered = a.partial_cmp(a).is_some();
            let b_ordered = b.partial_cmp(b).is_some();
            b_ordered.cmp(&a_ordered)
        }
    }
}

/// Stable sort by `selector`. Equal keys keep their input order in both directions.
pub fn sort_by<'a, E, K, F>(seq: &'a [E], mut selector: F, order: Order) -> Vec<E>
where
    E: Clone,
    K: PartialOrd,
    F: FnMut(&'a E) -> K,
{
    let mut refs: Vec<&'a E> = seq.iter().collect();
    refs.sort_by(|a, b| {
        let ka = selector(*a);
        let kb = selector(*b);
        order.apply(compare_keys(&ka, &kb))
    });
    refs.into_iter().cloned().collect()
}

pub fn sort<E>(seq: &[E], order: Order) -> Vec<E>
where
    E: Clone + PartialOrd,
{
    sort_by(seq, identity, order)
}

/// New sequence in reversed index order.
pub fn reverse<E: Clone>(seq: &[E]) -> Vec<E> {
    seq.iter().rev().cloned().collect()
}
