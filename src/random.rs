//! Random source abstraction.
//!
//! The GA only needs two primitives: a fair coin flip for initialization
//! and sampling distinct indices for mutation. [`RandomSource`] captures
//! exactly those so tests can script them, while every [`rand::Rng`]
//! implements it for free.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness consumed by the GA operators.
pub trait RandomSource {
    /// Draws a uniformly random bit.
    fn next_bit(&mut self) -> bool;

    /// Draws `amount` distinct indices from `0..length`, uniformly and
    /// without replacement. Order is the draw order.
    ///
    /// # Panics
    /// Implementations may panic if `amount > length`.
    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_bit(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(self, length, amount).into_vec()
    }
}

/// Creates the engine's default RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Scripted random source for unit tests.
///
/// Bits cycle through `bits` (all `false` when empty); index samples are
/// prefixes of `order`.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    pub bits: Vec<bool>,
    pub bits_drawn: usize,
    pub order: Vec<usize>,
    pub last_amount: Option<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    /// Bits from a `'0'`/`'1'` string; whitespace is ignored.
    pub fn from_bits(pattern: &str) -> Self {
        Self {
            bits: pattern
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c == '1')
                .collect(),
            bits_drawn: 0,
            order: Vec::new(),
            last_amount: None,
        }
    }

    pub fn from_order(order: Vec<usize>) -> Self {
        Self {
            order,
            ..Self::from_bits("")
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_bit(&mut self) -> bool {
        let b = if self.bits.is_empty() {
            false
        } else {
            self.bits[self.bits_drawn % self.bits.len()]
        };
        self.bits_drawn += 1;
        b
    }

    fn sample_indices(&mut self, _length: usize, amount: usize) -> Vec<usize> {
        self.last_amount = Some(amount);
        self.order[..amount].to_vec()
    }
}
