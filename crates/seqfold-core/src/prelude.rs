//! Convenient re-exports for downstream crates.

pub use crate::config::SampleConfig;
pub use crate::error::{Error, Result};
pub use crate::order::Order;
pub use crate::reduction::Reduction;
pub use crate::seed::Seed;
