//! Random selection and shuffling with an explicit generator.
//!
//! There is no process-wide generator. Callers either:
//! - pass `Some(seed)` to [`random`]/[`shuffle`] for a fresh, reproducible generator per call,
//! - pass `None` to use the calling thread's generator,
//! - inject their own `Rng` via [`random_with`]/[`shuffle_with`], or
//! - keep a [`Sampler`] whose stream advances across calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seqfold_core::config::SampleConfig;
use seqfold_core::error::{Error, Result};
use seqfold_core::seed::Seed;

/// Uniformly pick one element using `rng`.
pub fn random_with<'a, E, R>(seq: &'a [E], rng: &mut R) -> Result<&'a E>
where
    R: Rng + ?Sized,
{
    if seq.is_empty() {
        return Err(Error::EmptyInput { op: "random" });
    }
    let index = rng.gen_range(0..seq.len());
    #[cfg(feature = "tracing")]
    tracing::trace!(index, len = seq.len(), "random pick");
    seq.get(index).ok_or(Error::EmptyInput { op: "random" })
}

/// Fisher–Yates shuffle into a new `Vec`, walking from the last index down.
pub fn shuffle_with<E, R>(seq: &[E], rng: &mut R) -> Vec<E>
where
    E: Clone,
    R: Rng + ?Sized,
{
    let mut out = seq.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len = out.len(), "shuffled");
    out
}

/// Uniformly pick one element. With a seed the pick is reproducible for that seed and
/// sequence length; without one it draws from the thread's generator.
pub fn random<E>(seq: &[E], seed: Option<u64>) -> Result<&E> {
    match seed {
        Some(seed) => random_with(seq, &mut StdRng::seed_from_u64(seed)),
        None => random_with(seq, &mut rand::thread_rng()),
    }
}

/// Shuffled copy of `seq`, with the same seeding contract as [`random`].
pub fn shuffle<E: Clone>(seq: &[E], seed: Option<u64>) -> Vec<E> {
    match seed {
        Some(seed) => shuffle_with(seq, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_with(seq, &mut rand::thread_rng()),
    }
}

/// Owned generator whose state advances across calls.
///
/// Two samplers built from the same seed produce the same sequence of picks and
/// permutations. A `Sampler` is `Send`, so it can move between threads, but it is not
/// shared: each thread that needs one gets its own.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: Option<Seed>,
}

impl Sampler {
    fn new(rng: StdRng, seed: Option<Seed>) -> Self {
        #[cfg(feature = "tracing")]
        {
            match seed {
                Some(seed) => tracing::trace!(%seed, "sampler created"),
                None => tracing::trace!("sampler created from entropy"),
            }
        }
        Self { rng, seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_seed(Seed::new(seed))
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(StdRng::seed_from_u64(seed.value()), Some(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), None)
    }

    /// Seeded when the config carries a seed, entropy-seeded otherwise.
    pub fn from_config(cfg: &SampleConfig) -> Self {
        match cfg.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this sampler started from, if any.
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    pub fn random<'a, E>(&mut self, seq: &'a [E]) -> Result<&'a E> {
        random_with(seq, &mut self.rng)
    }

    pub fn shuffle<E: Clone>(&mut self, seq: &[E]) -> Vec<E> {
        shuffle_with(seq, &mut self.rng)
    }

    /// Borrow the underlying generator, e.g. to drive `random_with` directly.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
