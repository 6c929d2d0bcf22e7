//! Error correction for a 128-bit payload of 8-bit Hamming blocks.
//!
//! This module provides:
//! - Bit-string types for the payload, its blocks and error positions
//! - Hamming(7,4) parity, syndrome and single-error correction
//! - Error injection driven by an injectable position source
//! - Per-block processing and payload-wide aggregation
//! - A byte codec implementing [`ErrorCorrection`]
//!
//! # Block Layout
//!
//! Positions 1–7 of each block follow the classical Hamming(7,4) layout
//! (parity at 1, 2, 4; data at 3, 5, 6, 7). Position 8 is an extension bit
//! that is only restored when it was the injected fault.
//!
//! # Examples
//!
//! ```rust
//! use hamming128::cs::ecc::bits::{Block, ErrorPosition};
//! use hamming128::cs::ecc::block::process_block;
//!
//! let original: Block = "01010101".parse().unwrap();
//! let out = process_block(original, ErrorPosition::new(6).unwrap());
//! assert_eq!(out.received.to_string(), "01010001");
//! assert_eq!(out.corrected, original);
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod aggregate;
pub mod bits;
pub mod block;
pub mod codec;
pub mod hamming;
pub mod injector;
pub mod positions;
pub mod run;

pub use aggregate::{aggregate, Summary};
pub use bits::{Block, ErrorPosition, Payload, BLOCK_BITS, BLOCK_COUNT, PAYLOAD_BITS};
pub use block::{process_block, split_into_blocks, BlockResult, ProcessedBlock};
pub use codec::BlockCodec;
pub use hamming::{calculate_parity_bits, correct, syndrome, CodeWord, ParityBits, Syndrome};
pub use injector::inject_error;
pub use positions::{FixedPositions, PositionSource, RandomPositions};
pub use run::{process_code, process_input, Report};
