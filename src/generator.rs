//! Password generator - draws characters from the selected alphabets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secrecy::SecretString;
use thiserror::Error;

use crate::types::GenerationOptions;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid generation options: {0}")]
    InvalidOptions(&'static str),
}

/// Source of uniformly distributed indices.
///
/// Generation only ever asks for an index into the pool, so tests can swap
/// in a scripted source and assert exact output.
pub trait RandomSource {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// General-purpose thread-local generator. Not intended for secrets that
/// need a cryptographic guarantee.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible source seeded from a fixed value.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Generates a password from the given options.
///
/// Each position is drawn independently and uniformly from the pool built by
/// [`GenerationOptions::pool`].
///
/// # Errors
///
/// Returns [`GenerateError::InvalidOptions`] if no character class is
/// selected or if `length` is zero. There is no fallback alphabet.
pub fn generate<R: RandomSource + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<SecretString, GenerateError> {
    if !options.has_any_class() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation refused: no character class selected");
        return Err(GenerateError::InvalidOptions(
            "select at least one character class",
        ));
    }
    if options.length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation refused: zero length");
        return Err(GenerateError::InvalidOptions("length must be at least 1"));
    }

    let pool = options.pool();
    let password: String = (0..options.length)
        .map(|_| pool[rng.next_index(pool.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password of {} chars from a pool of {}",
        options.length,
        pool.len()
    );

    Ok(SecretString::new(password.into()))
}
