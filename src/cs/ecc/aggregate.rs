//! Concatenation of block results into payload-wide strings and statistics.

use crate::cs::ecc::bits::{bits_to_string, BLOCK_BITS};
use crate::cs::ecc::block::BlockResult;
use bitvec::prelude::*;

/// Payload-wide view of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    original: BitVec<u8, Msb0>,
    received: BitVec<u8, Msb0>,
    corrected: BitVec<u8, Msb0>,
    matching_bits: usize,
}

impl Summary {
    /// Concatenated original blocks as a '0'/'1' string
    pub fn original(&self) -> String {
        bits_to_string(&self.original)
    }

    /// Concatenated received blocks as a '0'/'1' string
    pub fn received(&self) -> String {
        bits_to_string(&self.received)
    }

    /// Concatenated corrected blocks as a '0'/'1' string
    pub fn corrected(&self) -> String {
        bits_to_string(&self.corrected)
    }

    /// Whether the corrected string equals the original string
    pub fn all_corrected(&self) -> bool {
        self.original == self.corrected
    }

    /// Number of positions where original and corrected agree
    pub fn matching_bits(&self) -> usize {
        self.matching_bits
    }

    /// Total number of bits compared
    pub fn total_bits(&self) -> usize {
        self.original.len()
    }
}

/// Concatenate `results` in order and compare original against corrected.
pub fn aggregate(results: &[BlockResult]) -> Summary {
    let capacity = results.len() * BLOCK_BITS;
    let mut original = BitVec::<u8, Msb0>::with_capacity(capacity);
    let mut received = BitVec::<u8, Msb0>::with_capacity(capacity);
    let mut corrected = BitVec::<u8, Msb0>::with_capacity(capacity);

    for result in results {
        original.extend_from_bitslice(result.original().bits());
        received.extend_from_bitslice(result.received().bits());
        corrected.extend_from_bitslice(result.corrected().bits());
    }

    let matching_bits = original
        .iter()
        .by_vals()
        .zip(corrected.iter().by_vals())
        .filter(|(a, b)| a == b)
        .count();

    Summary {
        original,
        received,
        corrected,
        matching_bits,
    }
}
