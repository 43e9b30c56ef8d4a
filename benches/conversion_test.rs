use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huekit::Rgba;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;

fn random_colors(n: usize) -> Vec<Rgba> {
    let mut rng = StdRng::seed_from_u64(0x00e4_9a42);
    (0..n)
        .map(|_| Rgba::rgb(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

pub fn bench_hex_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_parsing");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1000, 10000].iter() {
        let inputs: Vec<String> = random_colors(*size)
            .iter()
            .map(|color| format!("#{}", color.to_hex()))
            .collect();

        group.bench_with_input(BenchmarkId::new("from_hex", size), &inputs, |b, inputs| {
            b.iter(|| {
                for hex in inputs {
                    black_box(Rgba::from_hex(hex).unwrap());
                }
            });
        });
    }
    group.finish();
}

pub fn bench_hex_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_formatting");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1000, 10000].iter() {
        let colors = random_colors(*size);

        group.bench_with_input(BenchmarkId::new("to_hex", size), &colors, |b, colors| {
            b.iter(|| {
                for color in colors {
                    black_box(color.to_hex());
                }
            });
        });
    }
    group.finish();
}

pub fn bench_hsl_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsl_round_trip");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1000, 10000].iter() {
        let colors = random_colors(*size);

        group.bench_with_input(
            BenchmarkId::new("to_hsla_to_rgba", size),
            &colors,
            |b, colors| {
                b.iter(|| {
                    for color in colors {
                        black_box(color.to_hsla().to_rgba());
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10));
    targets = bench_hex_parsing, bench_hex_formatting, bench_hsl_round_trip
);
criterion_main!(benches);
