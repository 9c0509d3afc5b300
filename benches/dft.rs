use {
    criterion::{criterion_group, criterion_main, Benchmark, Criterion},
    ndarray::{arr1, Array1, IxDyn},
    signal_dft::dft::dft,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench(
        "dft",
        Benchmark::new("rank4_real", |b| {
            let x = (0..60)
                .map(|v| v as f64)
                .collect::<Array1<f64>>()
                .into_shape(IxDyn(&[2, 3, 2, 5]))
                .unwrap();
            let lengths = [arr1(&[4_i64]), arr1(&[5_i64]), arr1(&[6_i64])];

            b.iter(|| {
                for le in lengths.iter() {
                    dft(&x, le, true, false).unwrap();
                }
            })
        }),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
