use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use wallcarver::{
    generators,
    units::{Height, Width},
};

fn bench_recursive_backtracker_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(0xdead_beef);

    c.bench_function("recursive_backtracker_32", move |b| {
        b.iter(|| generators::carve_perfect_maze(Width(32), Height(32), &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(0xdead_beef);

    c.bench_function("recursive_backtracker_128", move |b| {
        b.iter(|| generators::carve_perfect_maze(Width(128), Height(128), &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_32,
    bench_recursive_backtracker_128
);
criterion_main!(benches);
