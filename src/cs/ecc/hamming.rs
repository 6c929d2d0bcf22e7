//! Hamming(7,4) parity and syndrome math.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! The (7,4) variant spreads 4 data bits and 3 parity bits over 7 positions and can correct any
//! single-bit error.
//!
//! Positions are written 1-indexed in the literature and 0-indexed here:
//!
//! ```text
//! index     0   1   2   3   4   5   6
//! position  1   2   3   4   5   6   7
//! role      p1  p2  d0  p4  d1  d2  d3
//! ```
//!
//! Correction is syndrome-only: the three checks are evaluated directly on the
//! received word and their weighted sum names the bit to flip. The parity bits
//! from [`calculate_parity_bits`] are only ever written into a word by [`encode`];
//! [`correct`] never compares against them.
//!
//! # Example
//! ```
//! use hamming128::cs::ecc::hamming::{correct, encode, syndrome};
//!
//! let word = encode(0b1011);
//! assert!(syndrome(&word).is_zero());
//!
//! let damaged = word.flip(4).unwrap();
//! assert_eq!(syndrome(&damaged).value(), 5);
//! assert_eq!(correct(damaged), word);
//! ```

use crate::error::{Error, Result};
use bitvec::prelude::*;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Number of bits in a Hamming(7,4) code word
pub const CODE_WORD_BITS: usize = 7;

/// Indices (0-based) that carry data bits, in data order d0..d3
const DATA_INDICES: [usize; 4] = [2, 4, 5, 6];

/// The 7-bit Hamming portion of a block.
///
/// Stored MSB-first in a single byte; the lowest bit of the byte is unused and
/// always zero, so two words with the same 7 bits compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeWord(u8);

impl CodeWord {
    /// Mask selecting the seven code word bits of the backing byte
    const MASK: u8 = 0b1111_1110;

    /// Build a code word from its seven bits, index 0 first.
    pub fn from_bits(bits: [bool; CODE_WORD_BITS]) -> Self {
        let mut raw = 0u8;
        let view = raw.view_bits_mut::<Msb0>();
        for (index, bit) in bits.into_iter().enumerate() {
            view.set(index, bit);
        }
        CodeWord(raw)
    }

    /// Build a code word from the top seven bits of `byte`.
    pub(crate) fn from_raw(byte: u8) -> Self {
        CodeWord(byte & Self::MASK)
    }

    /// The backing byte, code word bits in the top seven positions.
    pub(crate) fn raw(self) -> u8 {
        self.0
    }

    /// View the seven bits, index 0 first.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.0.view_bits::<Msb0>()[..CODE_WORD_BITS]
    }

    /// Read the bit at 0-based `index`, if it is within the word.
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits().get(index).map(|bit| *bit)
    }

    /// Return a copy with the bit at 0-based `index` inverted.
    ///
    /// # Arguments
    ///
    /// * `index` - 0-based bit index, below 7
    ///
    /// # Returns
    ///
    /// The flipped word, or `Error::InvalidInput` if `index` is out of range
    pub fn flip(self, index: usize) -> Result<Self> {
        if index >= CODE_WORD_BITS {
            return Err(Error::InvalidInput(format!(
                "code word index {} out of range",
                index
            )));
        }
        Ok(self.toggle(index))
    }

    /// Invert the bit at `index`; callers guarantee `index < 7`.
    fn toggle(self, index: usize) -> Self {
        let mut raw = self.0;
        let bits = raw.view_bits_mut::<Msb0>();
        let current = bits[index];
        bits.set(index, !current);
        CodeWord(raw)
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits().iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for CodeWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bits = [false; CODE_WORD_BITS];
        if s.chars().count() != CODE_WORD_BITS {
            return Err(Error::InvalidInput(format!(
                "code word must be {} bits, got {:?}",
                CODE_WORD_BITS, s
            )));
        }
        for (slot, c) in bits.iter_mut().zip(s.chars()) {
            *slot = match c {
                '0' => false,
                '1' => true,
                other => {
                    return Err(Error::InvalidInput(format!(
                        "unexpected character {:?} in code word",
                        other
                    )))
                }
            };
        }
        Ok(CodeWord::from_bits(bits))
    }
}

/// Parity bits p1, p2 and p4 computed over the data positions of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParityBits {
    /// Covers indices 2, 4, 6
    pub p1: bool,
    /// Covers indices 2, 5, 6
    pub p2: bool,
    /// Covers indices 4, 5, 6
    pub p4: bool,
}

/// Result of the three parity checks on a received word.
///
/// `value()` is `s1 + 2*s2 + 4*s3`: 0 when every check passes, otherwise the
/// 1-indexed position of the bit a single error would have flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Syndrome(u8);

impl Syndrome {
    /// Integer value in `0..=7`
    pub fn value(self) -> u8 {
        self.0
    }

    /// True when all three checks pass
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// 0-based index of the bit to flip, if any
    pub fn error_index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            pos => Some(pos as usize - 1),
        }
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute parity bits p1, p2, p4 from the data positions of `word`.
///
/// The values at indices 0, 1 and 3 are ignored.
pub fn calculate_parity_bits(word: &CodeWord) -> ParityBits {
    let r = word.bits();
    ParityBits {
        p1: r[2] ^ r[4] ^ r[6],
        p2: r[2] ^ r[5] ^ r[6],
        p4: r[4] ^ r[5] ^ r[6],
    }
}

/// Evaluate the three parity checks on a received word.
pub fn syndrome(word: &CodeWord) -> Syndrome {
    let r = word.bits();
    let s1 = r[0] ^ r[2] ^ r[4] ^ r[6];
    let s2 = r[1] ^ r[2] ^ r[5] ^ r[6];
    let s3 = r[3] ^ r[4] ^ r[5] ^ r[6];
    Syndrome(s1 as u8 + 2 * s2 as u8 + 4 * s3 as u8)
}

/// Correct at most one flipped bit in `word`.
///
/// A zero syndrome returns the word unchanged. Otherwise the bit the syndrome
/// names is inverted. For a valid code word with one flipped bit this restores
/// the original exactly; anything else yields some other word.
pub fn correct(word: CodeWord) -> CodeWord {
    let syndrome = syndrome(&word);
    trace!("code word {} has syndrome {}", word, syndrome);
    match syndrome.error_index() {
        None => word,
        Some(index) => word.toggle(index),
    }
}

/// Encode the low four bits of `nibble` (MSB first) into a valid code word.
pub fn encode(nibble: u8) -> CodeWord {
    let data = nibble.view_bits::<Msb0>();
    let mut bits = [false; CODE_WORD_BITS];
    for (offset, &index) in DATA_INDICES.iter().enumerate() {
        bits[index] = data[4 + offset];
    }

    let parity = calculate_parity_bits(&CodeWord::from_bits(bits));
    bits[0] = parity.p1;
    bits[1] = parity.p2;
    bits[3] = parity.p4;
    CodeWord::from_bits(bits)
}

/// Correct `word` and extract its four data bits.
///
/// Returns the data nibble together with the syndrome observed before
/// correction.
pub fn decode(word: CodeWord) -> (u8, Syndrome) {
    let observed = syndrome(&word);
    let corrected = correct(word);
    let mut nibble = 0u8;
    for &index in DATA_INDICES.iter() {
        nibble = (nibble << 1) | corrected.bits()[index] as u8;
    }
    (nibble, observed)
}
