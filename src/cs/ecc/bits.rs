//! Bit-string types: the 128-bit payload, its 8-bit blocks and error positions.
//!
//! Every type stores its bits MSB-first (`Msb0`), so bit 1 of a block is the
//! most significant bit of its byte and the first character when rendered.

use crate::cs::ecc::hamming::CodeWord;
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Bits in the full payload
pub const PAYLOAD_BITS: usize = 128;

/// Bits in one block
pub const BLOCK_BITS: usize = 8;

/// Number of blocks in a payload
pub const BLOCK_COUNT: usize = PAYLOAD_BITS / BLOCK_BITS;

/// Render a bit slice as a string of '0' and '1' characters.
pub fn bits_to_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Fill `out` from a string of '0'/'1' characters.
///
/// On failure returns the first character outside the binary alphabet, or
/// `None` if the alphabet was fine and only the length was wrong.
fn read_bits(
    text: &str,
    out: &mut BitSlice<u8, Msb0>,
) -> std::result::Result<(), Option<char>> {
    let invalid = text.chars().find(|c| !matches!(c, '0' | '1'));
    if invalid.is_some() || text.len() != out.len() {
        return Err(invalid);
    }
    for (index, c) in text.chars().enumerate() {
        out.set(index, c == '1');
    }
    Ok(())
}

/// 1-indexed position of the bit to corrupt within a block.
///
/// Positions 1–7 fall in the Hamming portion; 8 is the extension bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorPosition(u8);

impl ErrorPosition {
    /// The extension (8th) bit
    pub const EXTENSION: ErrorPosition = ErrorPosition(8);

    /// Every position, ascending
    pub const ALL: [ErrorPosition; BLOCK_BITS] = [
        ErrorPosition(1),
        ErrorPosition(2),
        ErrorPosition(3),
        ErrorPosition(4),
        ErrorPosition(5),
        ErrorPosition(6),
        ErrorPosition(7),
        ErrorPosition(8),
    ];

    /// Create a position, rejecting anything outside `1..=8`.
    pub fn new(position: u8) -> Result<Self> {
        if (1..=BLOCK_BITS as u8).contains(&position) {
            Ok(ErrorPosition(position))
        } else {
            Err(Error::InvalidErrorPosition(position))
        }
    }

    /// The 1-indexed position
    pub fn get(self) -> u8 {
        self.0
    }

    /// The 0-indexed bit offset within a block
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Whether this position targets the extension bit
    pub fn is_extension(self) -> bool {
        self == Self::EXTENSION
    }

    /// All eight positions in ascending order
    pub fn all() -> impl Iterator<Item = ErrorPosition> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for ErrorPosition {
    type Error = Error;

    fn try_from(position: u8) -> Result<Self> {
        ErrorPosition::new(position)
    }
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ErrorPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let position: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("not an error position: {:?}", s)))?;
        ErrorPosition::new(position)
    }
}

/// An 8-bit block: seven Hamming bits followed by the extension bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block(u8);

impl Block {
    /// Create a block from a byte; bit 1 is the most significant bit.
    pub fn from_byte(byte: u8) -> Self {
        Block(byte)
    }

    /// The block as a byte
    pub fn byte(self) -> u8 {
        self.0
    }

    /// View the eight bits, bit 1 first.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        self.0.view_bits::<Msb0>()
    }

    pub(crate) fn bits_mut(&mut self) -> &mut BitSlice<u8, Msb0> {
        self.0.view_bits_mut::<Msb0>()
    }

    /// Read the bit at a 1-indexed position.
    pub fn bit(&self, position: ErrorPosition) -> bool {
        self.bits()[position.index()]
    }

    /// The 7-bit Hamming portion (positions 1–7)
    pub fn code_word(&self) -> CodeWord {
        CodeWord::from_raw(self.0)
    }

    /// The extension bit (position 8)
    pub fn extension_bit(&self) -> bool {
        self.bit(ErrorPosition::EXTENSION)
    }

    /// Replace positions 1–7, keeping the extension bit.
    pub fn with_code_word(self, word: CodeWord) -> Self {
        Block(word.raw() | (self.0 & 1))
    }

    /// Replace the extension bit, keeping positions 1–7.
    pub fn with_extension_bit(mut self, bit: bool) -> Self {
        self.bits_mut().set(ErrorPosition::EXTENSION.index(), bit);
        self
    }

    /// Number of positions at which the two blocks agree (0–8)
    pub fn matching_bits(&self, other: &Block) -> usize {
        (self.0 ^ other.0).count_zeros() as usize
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits_to_string(self.bits()))
    }
}

impl FromStr for Block {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut block = Block::default();
        read_bits(s, block.bits_mut())
            .map_err(|_| Error::InvalidInput(format!("block must be 8 bits, got {:?}", s)))?;
        Ok(block)
    }
}

/// The full 128-bit payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Payload([u8; BLOCK_COUNT]);

impl Payload {
    /// Create a payload from 16 bytes, one per block.
    pub fn from_bytes(bytes: [u8; BLOCK_COUNT]) -> Self {
        Payload(bytes)
    }

    /// Reassemble a payload from its blocks.
    pub fn from_blocks(blocks: [Block; BLOCK_COUNT]) -> Self {
        Payload(blocks.map(Block::byte))
    }

    /// Parse 32 hex characters.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = [0u8; BLOCK_COUNT];
        hex::decode_to_slice(text.trim(), &mut bytes)?;
        Ok(Payload(bytes))
    }

    /// Render as 32 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The payload bytes, one per block
    pub fn as_bytes(&self) -> &[u8; BLOCK_COUNT] {
        &self.0
    }

    /// View the 128 bits in document order.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        self.0.view_bits::<Msb0>()
    }

    /// Split into 16 blocks; block `i` covers bits `[8i, 8i + 8)`.
    pub fn blocks(&self) -> [Block; BLOCK_COUNT] {
        self.0.map(Block::from_byte)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits_to_string(self.bits()))
    }
}

impl FromStr for Payload {
    type Err = Error;

    /// Validate and parse exactly 128 '0'/'1' characters.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::MissingInput);
        }
        let mut bytes = [0u8; BLOCK_COUNT];
        read_bits(s, bytes.view_bits_mut::<Msb0>()).map_err(|invalid| Error::MalformedInput {
            length: s.chars().count(),
            invalid,
        })?;
        Ok(Payload(bytes))
    }
}
