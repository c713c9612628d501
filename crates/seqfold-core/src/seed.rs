//! Seeds for deterministic sampling.
//!
//! A seed is just a `u64`. Textual labels ("nightly-run") are accepted too and
//! mapped to a `u64` through blake3, so the same label always yields the same seed.

use std::fmt;
use std::str::FromStr;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    pub fn new(value: u64) -> Self {
        Seed(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse a decimal `u64`, or hash any other non-blank label.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Config("seed must not be empty".into()));
        }
        match text.parse::<u64>() {
            Ok(v) => Ok(Seed(v)),
            Err(_) => Ok(Seed::from_label(text)),
        }
    }

    /// Derive a seed from the first 8 bytes (little-endian) of the label's blake3 digest.
    pub fn from_label(label: &str) -> Self {
        let mut h = Hasher::new();
        h.update(label.as_bytes());
        let digest = h.finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest.as_bytes()[..8]);
        Seed(u64::from_le_bytes(word))
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Seed::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
