//! Keyed aggregations. Output maps have no key ordering guarantee.

use std::collections::HashMap;
use std::hash::Hash;

use crate::fold::reduce;

/// Occurrence count per selector key.
pub fn frequencies_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&'a E) -> K,
{
    reduce(
        seq,
        |element, mut counts: HashMap<K, usize>| {
            *counts.entry(selector(element)).or_insert(0) += 1;
            counts
        },
        HashMap::new(),
    )
}

pub fn frequencies<E>(seq: &[E]) -> HashMap<E, usize>
where
    E: Clone + Eq + Hash,
{
    frequencies_by(seq, E::clone)
}

/// Elements bucketed by selector key; each bucket keeps input order.
pub fn group_by<'a, E, K, F>(seq: &'a [E], mut selector: F) -> HashMap<K, Vec<E>>
where
    E: Clone,
    K: Eq + Hash,
    F: FnMut(&'a E) -> K,
{
    reduce(
        seq,
        |element, mut groups: HashMap<K, Vec<E>>| {
            groups
                .entry(selector(element))
                .or_default()
                .push(element.clone());
            groups
        },
        HashMap::new(),
    )
}
