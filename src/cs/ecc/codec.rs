//! Byte-oriented Hamming(7,4) codec over 8-bit blocks.
//!
//! Each data byte becomes two blocks, high nibble first. A block holds one
//! encoded code word in positions 1–7 and a zero extension bit. Decoding
//! corrects each code word through its syndrome and ignores the extension bit.

use crate::cs::ecc::bits::{Block, Payload, BLOCK_COUNT};
use crate::cs::ecc::hamming::{decode, encode};
use crate::cs::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::debug;

/// Number of data bytes that fill one payload
pub const PAYLOAD_DATA_BYTES: usize = BLOCK_COUNT / 2;

/// Hamming(7,4) codec packing one nibble per block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCodec;

impl BlockCodec {
    /// Creates a new block codec
    ///
    /// # Returns
    ///
    /// A codec that packs one nibble into each 8-bit block
    pub fn new() -> Self {
        BlockCodec
    }

    /// Encode a single nibble into a block with a clear extension bit.
    pub fn encode_nibble(&self, nibble: u8) -> Block {
        Block::default().with_code_word(encode(nibble & 0x0F))
    }

    /// Encode exactly eight data bytes into a full payload of valid code words.
    pub fn encode_payload(&self, data: [u8; PAYLOAD_DATA_BYTES]) -> Payload {
        let mut blocks = [Block::default(); BLOCK_COUNT];
        for (pair, byte) in blocks.chunks_exact_mut(2).zip(data) {
            pair[0] = self.encode_nibble(byte >> 4);
            pair[1] = self.encode_nibble(byte);
        }
        Payload::from_blocks(blocks)
    }

    /// Decode a full payload back into its eight data bytes.
    pub fn decode_payload(&self, payload: &Payload) -> [u8; PAYLOAD_DATA_BYTES] {
        let mut data = [0u8; PAYLOAD_DATA_BYTES];
        for (byte, pair) in data.iter_mut().zip(payload.blocks().chunks_exact(2)) {
            *byte = self.decode_pair(pair[0], pair[1]);
        }
        data
    }

    fn decode_pair(&self, high: Block, low: Block) -> u8 {
        let (high, high_syndrome) = decode(high.code_word());
        let (low, low_syndrome) = decode(low.code_word());
        if !high_syndrome.is_zero() || !low_syndrome.is_zero() {
            debug!(
                "corrected byte with syndromes {} and {}",
                high_syndrome, low_syndrome
            );
        }
        (high << 4) | low
    }
}

impl ErrorCorrection for BlockCodec {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data
            .iter()
            .flat_map(|&byte| [self.encode_nibble(byte >> 4), self.encode_nibble(byte)])
            .map(Block::byte)
            .collect())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "encoded data must hold two blocks per byte, got {} blocks",
                data.len()
            )));
        }
        Ok(data
            .chunks_exact(2)
            .map(|pair| self.decode_pair(Block::from_byte(pair[0]), Block::from_byte(pair[1])))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::bits::ErrorPosition;
    use crate::cs::ecc::hamming::syndrome;
    use crate::cs::ecc::injector::inject_error;

    #[test]
    fn test_encode_decode_no_errors() {
        let codec = BlockCodec::new();
        let data = b"Test data for Hamming code";
        let encoded = codec.encode(data).unwrap();
        assert_eq!(encoded.len(), data.len() * 2);
        assert_eq!(codec.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_single_error_per_block_corrected() {
        let codec = BlockCodec::new();
        let data = b"Test";
        let mut encoded = codec.encode(data).unwrap();
        for (i, byte) in encoded.iter_mut().enumerate() {
            let position = ErrorPosition::new((i % 8) as u8 + 1).unwrap();
            *byte = inject_error(Block::from_byte(*byte), position).byte();
        }
        assert_eq!(codec.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_odd_block_count_rejected() {
        let codec = BlockCodec::new();
        assert!(matches!(
            codec.decode(&[0, 0, 0]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let codec = BlockCodec::new();
        assert!(codec.encode(&[]).unwrap().is_empty());
        assert!(codec.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_payload_of_code_words() {
        let codec = BlockCodec::new();
        let data = *b"hamming!";
        let payload = codec.encode_payload(data);
        for block in payload.blocks() {
            assert!(syndrome(&block.code_word()).is_zero());
            assert!(!block.extension_bit());
        }
        assert_eq!(codec.decode_payload(&payload), data);
    }
}
