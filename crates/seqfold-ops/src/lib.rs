#![forbid(unsafe_code)]
//! seqfold-ops: the fold engine and every operation derived from it.
//!
//! Design intent:
//! - `fold::reduce_while` is the only traversal loop and the only place early
//!   termination happens. Everything else is a step function handed to it.
//! - Inputs are borrowed slices and are never mutated; sequence outputs are fresh `Vec`s.
//! - Selectors are bound to the input's lifetime, so `std::convert::identity` works as
//!   a selector and each plain variant is its `-by` variant with the identity selector.
//! - Randomness is always an explicit generator: a per-call seeded one, the calling
//!   thread's generator, or a caller-owned [`Sampler`].

pub mod aggregate;
pub mod extrema;
pub mod fold;
pub mod group;
pub mod sample;
pub mod sort;
pub mod split;
pub mod transform;
pub mod uniq;

pub use aggregate::{
    all, any, count, count_by, is_member, is_member_by, product, product_by, sum, sum_by,
};
pub use extrema::{max, max_by, min, min_by, min_max, min_max_by};
pub use fold::{each, for_each, reduce, reduce_while, try_reduce, try_reduce_while};
pub use group::{frequencies, frequencies_by, group_by};
pub use sample::{random, random_with, shuffle, shuffle_with, Sampler};
pub use sort::{reverse, sort, sort_by};
pub use split::{split_while, split_with};
pub use transform::{at, concat, filter, flat_map, map, reject, take, take_while, try_map};
pub use uniq::{uniq, uniq_by};

pub use seqfold_core::prelude::*;
