use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamming128::cs::ecc::bits::{Block, ErrorPosition};
use hamming128::cs::ecc::block::process_block;
use hamming128::cs::ecc::codec::BlockCodec;
use hamming128::cs::ecc::positions::RandomPositions;
use hamming128::cs::ecc::run::process_code;

fn bench_process_block(c: &mut Criterion) {
    let block: Block = "01100110".parse().unwrap();
    let position = ErrorPosition::new(5).unwrap();
    c.bench_function("process_block", |b| {
        b.iter(|| process_block(black_box(block), black_box(position)))
    });
}

fn bench_process_code(c: &mut Criterion) {
    let payload = BlockCodec::new().encode_payload(*b"criterio");
    let mut positions = RandomPositions::with_seed(42);
    c.bench_function("process_code", |b| {
        b.iter(|| process_code(black_box(&payload), &mut positions))
    });
}

criterion_group!(benches, bench_process_block, bench_process_code);
criterion_main!(benches);
