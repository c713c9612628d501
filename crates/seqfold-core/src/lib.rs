#![forbid(unsafe_code)]
//! seqfold-core: shared vocabulary for the seqfold operations.
//!
//! Design intent:
//! - No algorithms live here; `seqfold-ops` owns traversal and every derived operation.
//! - No randomness either. Seeds and sampling config are plain data so any crate can
//!   carry them without pulling a generator implementation.

pub mod config;
pub mod error;
pub mod order;
pub mod prelude;
pub mod reduction;
pub mod seed;

pub use config::SampleConfig;
pub use error::{Error, Result};
pub use order::Order;
pub use reduction::Reduction;
pub use seed::Seed;
