//! Randomness as an injected capability.
//!
//! The engine never computes probabilities itself; the fairness of a
//! shuffle reduces entirely to the fairness of the provider behind this
//! trait. Any uniform source fits: a cryptographic RNG, a seeded PRNG, or
//! an external entropy service bridged by the caller. A provider may fail,
//! in which case the deal it was feeding is aborted.

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::errors::EngineError;

/// Source of uniform, independent samples. Called once per card during a
/// shuffle and once for trump selection.
pub trait RandomnessProvider {
    fn next_sample(&mut self) -> Result<u64, EngineError>;
}

impl<P: RandomnessProvider + ?Sized> RandomnessProvider for &mut P {
    fn next_sample(&mut self) -> Result<u64, EngineError> {
        (**self).next_sample()
    }
}

/// Adapter exposing any `rand` RNG as a provider. Infallible.
#[derive(Debug)]
pub struct RngProvider<R: RngCore>(R);

impl<R: RngCore> RngProvider<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore> RandomnessProvider for RngProvider<R> {
    fn next_sample(&mut self) -> Result<u64, EngineError> {
        Ok(self.0.next_u64())
    }
}

/// Deterministic ChaCha8-backed provider for reproducible deals.
#[derive(Debug, Clone)]
pub struct SeededProvider(ChaCha8Rng);

impl SeededProvider {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomnessProvider for SeededProvider {
    fn next_sample(&mut self) -> Result<u64, EngineError> {
        Ok(self.0.next_u64())
    }
}

/// Replays a fixed sample sequence, then fails. Used to script shuffles in
/// tests and to exercise the provider-failure path.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    samples: Vec<u64>,
    cursor: usize,
}

impl ScriptedProvider {
    pub fn new(samples: Vec<u64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomnessProvider for ScriptedProvider {
    fn next_sample(&mut self) -> Result<u64, EngineError> {
        match self.samples.get(self.cursor) {
            Some(&s) => {
                self.cursor += 1;
                Ok(s)
            }
            None => Err(EngineError::Randomness(
                "scripted provider exhausted".to_string(),
            )),
        }
    }
}
