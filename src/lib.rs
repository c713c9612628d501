#![forbid(unsafe_code)]
//! seqfold: a short-circuiting fold primitive and the sequence toolkit built on it.
//!
//! This facade re-exports `seqfold-ops` (operations) and `seqfold-core` (shared types).
//! Enable the `tracing` feature to get trace events from the fold engine and sampler.

pub use seqfold_core;
pub use seqfold_ops;

pub use seqfold_ops::*;
