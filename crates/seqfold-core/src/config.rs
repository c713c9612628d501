//! Sampling configuration that callers can serialize/deserialize or pull from the env.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::seed::Seed;

/// Environment variable consulted by [`SampleConfig::from_env`].
pub const SEED_ENV: &str = "SEQFOLD_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Optional seed for deterministic `random`/`shuffle`. `None` means entropy-seeded.
    #[serde(default)]
    pub seed: Option<Seed>,
}

impl SampleConfig {
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQFOLD_SEED`: decimal `u64` or any label (hashed into a seed)
    ///
    /// Unparseable values are ignored; use [`SampleConfig::try_from_env`] to surface them.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var(SEED_ENV) {
            cfg.seed = Some(Seed::parse(&s)?);
        }

        Ok(cfg)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }
}
