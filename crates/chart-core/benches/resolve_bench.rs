use chart_core::{path_points, resolve, PlotRect, SampleSeries};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> SampleSeries {
    let values = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect::<Vec<_>>();
    SampleSeries::load(values).expect("generated series is valid")
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let rect = PlotRect::new(1024.0, 320.0);
    for &n in &[1_000usize, 100_000usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &series, |b, s| {
            let mut x = 0.0f64;
            b.iter(|| {
                x = (x + 7.3) % rect.width;
                black_box(resolve(s, rect, black_box(x)));
            });
        });
    }
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_points");
    let rect = PlotRect::new(1024.0, 320.0);
    for &n in &[1_000usize, 100_000usize] {
        let series = gen_series(n);
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(path_points(&series, rect, false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_path);
criterion_main!(benches);
