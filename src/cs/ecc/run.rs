//! One "Process Code" run over a full payload.
//!
//! A run splits the payload into blocks, draws one error position per block,
//! processes each block and aggregates the results. Every run allocates its
//! own values; nothing is shared between runs.
//!
//! # Example
//! ```
//! use hamming128::cs::ecc::positions::FixedPositions;
//! use hamming128::cs::ecc::run::process_input;
//!
//! let mut positions = FixedPositions::parse("1,2,3,4,5,6,7,8").unwrap();
//! let report = process_input(&"0".repeat(128), &mut positions).unwrap();
//! assert!(report.summary().all_corrected());
//! assert_eq!(report.summary().matching_bits(), 128);
//! ```

use crate::cs::ecc::aggregate::{aggregate, Summary};
use crate::cs::ecc::bits::Payload;
use crate::cs::ecc::block::{process_block, split_into_blocks, BlockResult};
use crate::cs::ecc::positions::PositionSource;
use crate::error::Result;
use log::{debug, warn};
use std::fmt;

/// Per-block results of a run together with their summary.
#[derive(Debug, Clone)]
pub struct Report {
    blocks: Vec<BlockResult>,
    summary: Summary,
}

impl Report {
    /// Block results in payload order
    pub fn blocks(&self) -> &[BlockResult] {
        &self.blocks
    }

    /// Payload-wide strings and match statistics
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// The pass/fail line shown after the final strings
    pub fn verdict(&self) -> &'static str {
        if self.summary.all_corrected() {
            "All errors successfully corrected! Final code matches original."
        } else {
            "Error correction failed! Final code does not match original."
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block-wise Results")?;
        writeln!(
            f,
            "{:>8}  {:<8}  {:>18}  {:<9}",
            "Block No", "Original", "Error Bit Position", "Corrected"
        )?;
        for block in &self.blocks {
            writeln!(
                f,
                "{:>8}  {:<8}  {:>18}  {:<9}",
                block.index(),
                block.original().to_string(),
                block.error_position().get(),
                block.corrected().to_string()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Final Results")?;
        writeln!(f, "Original 128-bit code: {}", self.summary.original())?;
        writeln!(f, "Corrected 128-bit code: {}", self.summary.corrected())?;
        writeln!(f, "{}", self.verdict())?;
        write!(
            f,
            "Successfully corrected {} out of {} bits",
            self.summary.matching_bits(),
            self.summary.total_bits()
        )
    }
}

/// Process a validated payload, drawing one position per block from `positions`.
pub fn process_code<S>(payload: &Payload, positions: &mut S) -> Report
where
    S: PositionSource + ?Sized,
{
    debug!("processing payload {}", payload.to_hex());

    let blocks: Vec<BlockResult> = split_into_blocks(payload)
        .into_iter()
        .enumerate()
        .map(|(i, original)| {
            let position = positions.next_position();
            let processed = process_block(original, position);
            debug!(
                "block {:>2}: {} error at {} -> {}",
                i + 1,
                processed.original,
                position,
                processed.corrected
            );
            BlockResult::new(i + 1, position, processed)
        })
        .collect();

    let summary = aggregate(&blocks);
    if !summary.all_corrected() {
        warn!(
            "correction left {} of {} bits wrong",
            summary.total_bits() - summary.matching_bits(),
            summary.total_bits()
        );
    }

    Report { blocks, summary }
}

/// Validate `input` and process it.
///
/// Surrounding whitespace is ignored. Empty or malformed input is rejected
/// before any position is drawn.
pub fn process_input<S>(input: &str, positions: &mut S) -> Result<Report>
where
    S: PositionSource + ?Sized,
{
    let payload: Payload = input.trim().parse()?;
    Ok(process_code(&payload, positions))
}
