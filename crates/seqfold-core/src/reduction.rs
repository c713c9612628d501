//! Signal returned by a fold step alongside the updated accumulator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reduction {
    /// Keep traversing.
    Cont,
    /// Stop after this element and return the accumulator as-is.
    Halt,
}

impl Reduction {
    pub fn is_halt(self) -> bool {
        matches!(self, Reduction::Halt)
    }
}
