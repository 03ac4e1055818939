//! Performance benchmarks for filterbank construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use melbank::{create_mel_filterbanks, MelFilterbank};

fn bench_create_mel_filterbanks(c: &mut Criterion) {
    c.bench_function("create_mel_filterbanks_26x2048", |b| {
        b.iter(|| {
            let _ = create_mel_filterbanks(black_box(26), black_box(2048), black_box(44100));
        });
    });

    c.bench_function("create_mel_filterbanks_128x4096", |b| {
        b.iter(|| {
            let _ = create_mel_filterbanks(black_box(128), black_box(4096), black_box(48000));
        });
    });
}

fn bench_apply(c: &mut Criterion) {
    let bank = MelFilterbank::new(26, 2048, 44100).unwrap();
    let spectrum = vec![0.5f64; bank.num_bins()];

    c.bench_function("filterbank_apply_26x1025", |b| {
        b.iter(|| {
            let _ = bank.apply(black_box(&spectrum));
        });
    });
}

criterion_group!(benches, bench_create_mel_filterbanks, bench_apply);
criterion_main!(benches);
