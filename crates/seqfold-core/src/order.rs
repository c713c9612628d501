//! Sort direction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    /// Orient an ascending comparison result. `Equal` stays `Equal`, which is what
    /// keeps descending sorts stable.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}
