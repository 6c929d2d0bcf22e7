//! Suppliers of per-block error positions.
//!
//! The run draws one position per block from a [`PositionSource`]. Keeping the
//! source injectable lets tests and the CLI replay fixed sequences, while the
//! default draws uniformly from `1..=8` with a seedable ChaCha generator.

use crate::cs::ecc::bits::{ErrorPosition, BLOCK_BITS};
use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Supplies the error position for the next block.
pub trait PositionSource {
    /// Draw the position for the next block
    fn next_position(&mut self) -> ErrorPosition;
}

impl<F> PositionSource for F
where
    F: FnMut() -> ErrorPosition,
{
    fn next_position(&mut self) -> ErrorPosition {
        self()
    }
}

/// Uniform random positions, one independent draw per block.
#[derive(Debug, Clone)]
pub struct RandomPositions<R = ChaCha20Rng> {
    rng: R,
}

impl RandomPositions<ChaCha20Rng> {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Seed deterministically; equal seeds give equal sequences
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPositions<R> {
    /// Draw positions from a caller supplied generator
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PositionSource for RandomPositions<R> {
    fn next_position(&mut self) -> ErrorPosition {
        ErrorPosition::ALL[self.rng.gen_range(0..BLOCK_BITS)]
    }
}

/// Replays a fixed list of positions, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct FixedPositions {
    positions: Vec<ErrorPosition>,
    next: usize,
}

impl FixedPositions {
    /// Create a cycling source; the list must not be empty.
    pub fn new(positions: Vec<ErrorPosition>) -> Result<Self> {
        if positions.is_empty() {
            return Err(Error::InvalidInput(
                "at least one error position is required".to_string(),
            ));
        }
        Ok(Self { positions, next: 0 })
    }

    /// Parse a comma separated list such as `1,2,8`.
    pub fn parse(list: &str) -> Result<Self> {
        let positions = list
            .split(',')
            .filter(|item| !item.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ErrorPosition>>>()?;
        Self::new(positions)
    }

    /// The positions this source cycles through
    pub fn positions(&self) -> &[ErrorPosition] {
        &self.positions
    }
}

impl PositionSource for FixedPositions {
    fn next_position(&mut self) -> ErrorPosition {
        let position = self.positions[self.next];
        self.next = (self.next + 1) % self.positions.len();
        position
    }
}
