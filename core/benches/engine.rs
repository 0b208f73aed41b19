use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use desmina_core::{
    BoardConfig, BoardEngine, Minefield, MinefieldGenerator, RandomMinefieldGenerator,
};

fn generation(c: &mut Criterion) {
    let config = BoardConfig::new(200, 4000).unwrap();
    c.bench_function("generate 200x200 with 4000 mines", |b| {
        b.iter(|| RandomMinefieldGenerator::new(black_box(7)).generate(&config))
    });
}

fn flood_fill(c: &mut Criterion) {
    let minefield = Minefield::with_mines(200, &[(0, 0)]).unwrap();
    c.bench_function("flood reveal 200x200", |b| {
        b.iter(|| {
            let mut engine = BoardEngine::new(minefield.clone());
            engine.reveal(black_box((150, 150))).unwrap()
        })
    });
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
