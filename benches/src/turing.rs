//! Turing benchmark
use benches::{criterion_group_bench, Benchmarker};
use criterion::{criterion_main, BenchmarkId, Throughput};

use turing::{
    cipher::StreamCipher, Padding, Turing, TuringCore, TuringTransform, Variant, BLOCK_SIZE,
};

const KB: usize = 1024;
const KEY: &[u8] = b"test key 128bits";
const IV: &[u8] = &[0; 8];

fn bench_apply_keystream(c: &mut Benchmarker) {
    for variant in Variant::ALL {
        let mut group = c.benchmark_group(variant.name());

        for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
            let mut buf = vec![0u8; *size];

            group.throughput(Throughput::Bytes(*size as u64));

            group.bench_function(BenchmarkId::new("apply_keystream", size), |b| {
                let core = TuringCore::new(KEY, IV, variant).unwrap();
                let mut cipher = Turing::from_core(core);
                b.iter(|| cipher.apply_keystream(&mut buf));
            });
        }

        group.finish();
    }
}

fn bench_transform_block(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("turing-transform");

    // Whole blocks only, roughly 16 KiB per call.
    let size = (16 * KB / BLOCK_SIZE) * BLOCK_SIZE;
    let clear = vec![0u8; size];
    let mut cipher = vec![0u8; size];

    group.throughput(Throughput::Bytes(size as u64));

    for variant in Variant::ALL {
        group.bench_function(BenchmarkId::new("transform_block", variant), |b| {
            let mut t = TuringTransform::new(KEY, IV, Padding::Zeros, variant).unwrap();
            b.iter(|| t.transform_block(&clear, 0, size, &mut cipher, 0).unwrap());
        });
    }

    group.finish();
}

criterion_group_bench!(benches_apply_keystream, bench_apply_keystream);
criterion_group_bench!(benches_transform_block, bench_transform_block);
criterion_main!(benches_apply_keystream, benches_transform_block);
