//! Per-block processing: split the payload, inject one error, correct it.

use crate::cs::ecc::bits::{Block, ErrorPosition, Payload, BLOCK_COUNT};
use crate::cs::ecc::hamming::{calculate_parity_bits, correct};
use crate::cs::ecc::injector::inject_error;
use log::trace;

/// Split a payload into its 16 blocks in document order.
pub fn split_into_blocks(payload: &Payload) -> [Block; BLOCK_COUNT] {
    payload.blocks()
}

/// The three stages of one block passing through the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedBlock {
    /// Block before the fault
    pub original: Block,
    /// Block after the fault
    pub received: Block,
    /// Block after correction
    pub corrected: Block,
}

/// Inject an error at `position` and run correction over the result.
///
/// Positions 1–7 are repaired through the syndrome of the Hamming portion. The
/// extension bit is only flipped back when it was itself the injected fault;
/// otherwise it passes through as received.
pub fn process_block(original: Block, position: ErrorPosition) -> ProcessedBlock {
    let received = inject_error(original, position);
    let received_word = received.code_word();
    trace!(
        "block {} -> {}, parity {:?}",
        original,
        received,
        calculate_parity_bits(&received_word)
    );

    let extension = if position.is_extension() {
        !received.extension_bit()
    } else {
        received.extension_bit()
    };
    let corrected = received
        .with_code_word(correct(received_word))
        .with_extension_bit(extension);

    ProcessedBlock {
        original,
        received,
        corrected,
    }
}

/// Outcome for one block of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockResult {
    index: usize,
    position: ErrorPosition,
    blocks: ProcessedBlock,
}

impl BlockResult {
    /// Record the outcome for one block.
    ///
    /// # Arguments
    ///
    /// * `index` - Block number, starting at 1
    /// * `position` - Error position injected into the block
    /// * `blocks` - Original, received and corrected stages of the block
    pub fn new(index: usize, position: ErrorPosition, blocks: ProcessedBlock) -> Self {
        Self {
            index,
            position,
            blocks,
        }
    }

    /// Block number, starting at 1
    pub fn index(&self) -> usize {
        self.index
    }

    /// Injected error position
    pub fn error_position(&self) -> ErrorPosition {
        self.position
    }

    /// Block as it was before the fault
    pub fn original(&self) -> Block {
        self.blocks.original
    }

    /// Block with the injected fault
    pub fn received(&self) -> Block {
        self.blocks.received
    }

    /// Block after syndrome correction and the extension bit rule
    pub fn corrected(&self) -> Block {
        self.blocks.corrected
    }

    /// Whether correction restored the block exactly
    pub fn is_restored(&self) -> bool {
        self.blocks.original == self.blocks.corrected
    }
}
