//! Single-bit error injection.

use crate::cs::ecc::bits::{Block, ErrorPosition};

/// Simulate a transmission fault by inverting the bit at `position`.
///
/// Every other bit of the block is left untouched.
///
/// # Example
/// ```
/// use hamming128::cs::ecc::bits::{Block, ErrorPosition};
/// use hamming128::cs::ecc::injector::inject_error;
///
/// let block: Block = "00000000".parse().unwrap();
/// let received = inject_error(block, ErrorPosition::new(3).unwrap());
/// assert_eq!(received.to_string(), "00100000");
/// ```
pub fn inject_error(block: Block, position: ErrorPosition) -> Block {
    let mut received = block;
    let index = position.index();
    let bits = received.bits_mut();
    let current = bits[index];
    bits.set(index, !current);
    received
}
