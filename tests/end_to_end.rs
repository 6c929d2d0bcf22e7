//! End-to-end runs over full 128-bit payloads.

use hamming128::cs::ecc::bits::{ErrorPosition, Payload, BLOCK_COUNT};
use hamming128::cs::ecc::codec::BlockCodec;
use hamming128::cs::ecc::positions::{FixedPositions, RandomPositions};
use hamming128::cs::ecc::run::{process_code, process_input};
use hamming128::Error;

#[test]
fn test_all_zero_payload_with_every_position() {
    let input = "0".repeat(128);
    let mut positions = FixedPositions::parse("1,2,3,4,5,6,7,8").unwrap();
    let report = process_input(&input, &mut positions).unwrap();

    let drawn: Vec<u8> = report
        .blocks()
        .iter()
        .map(|b| b.error_position().get())
        .collect();
    assert_eq!(drawn, vec![1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8]);

    let summary = report.summary();
    assert_eq!(summary.original(), input);
    assert_eq!(summary.corrected(), input);
    assert!(summary.all_corrected());
    assert_eq!(summary.matching_bits(), 128);
    assert!(report
        .to_string()
        .ends_with("Successfully corrected 128 out of 128 bits"));
}

#[test]
fn test_alternating_payload_extension_faults() {
    let input = "01".repeat(64);
    let mut positions = FixedPositions::new(vec![ErrorPosition::EXTENSION]).unwrap();
    let report = process_input(&input, &mut positions).unwrap();

    for block in report.blocks() {
        assert_ne!(block.received().extension_bit(), block.original().extension_bit());
        assert_eq!(block.corrected().extension_bit(), block.original().extension_bit());
    }
    assert_eq!(report.summary().corrected(), input);
    assert!(report.summary().all_corrected());
}

#[test]
fn test_short_input_rejected_before_processing() {
    let input = "0".repeat(127);
    let mut drawn = 0usize;
    let mut positions = || {
        drawn += 1;
        ErrorPosition::EXTENSION
    };
    let err = process_input(&input, &mut positions).unwrap_err();
    assert_eq!(err.to_string(), "Please enter exactly 128 bits (0s and 1s)");
    assert!(err.is_validation());
    assert_eq!(drawn, 0);
}

#[test]
fn test_empty_and_non_binary_input() {
    let mut positions = RandomPositions::with_seed(1);
    let err = process_input("", &mut positions).unwrap_err();
    assert_eq!(err.to_string(), "Please enter the 128-bit code");

    let input = format!("{}x", "1".repeat(127));
    let err = process_input(&input, &mut positions).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { invalid: Some('x'), .. }));
}

#[test]
fn test_random_positions_on_code_word_payload() {
    let codec = BlockCodec::new();
    for seed in 0..32 {
        let payload = codec.encode_payload(*b"12345678");
        let mut positions = RandomPositions::with_seed(seed);
        let report = process_code(&payload, &mut positions);
        assert_eq!(report.blocks().len(), BLOCK_COUNT);
        assert!(report.summary().all_corrected(), "seed {} failed", seed);
        let corrected: Payload = report.summary().corrected().parse().unwrap();
        assert_eq!(codec.decode_payload(&corrected), *b"12345678");
    }
}

#[test]
fn test_received_differs_by_one_bit_per_block() {
    let payload = Payload::from_hex("0123456789abcdeffedcba9876543210").unwrap();
    let mut positions = RandomPositions::with_seed(99);
    let report = process_code(&payload, &mut positions);
    for block in report.blocks() {
        let diff = block.original().byte() ^ block.received().byte();
        assert_eq!(diff.count_ones(), 1);
        assert_eq!(
            diff.leading_zeros() + 1,
            block.error_position().get() as u32
        );
    }
}
