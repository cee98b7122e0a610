use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use memoria_core::{BoardGenerator, GameConfig, RandomBoardGenerator};

fn bench_generate(c: &mut Criterion) {
    for grid_size in [4u8, 6, 16] {
        let config = GameConfig {
            grid_size,
            ..GameConfig::default()
        };
        c.bench_function(&format!("generate_{0}x{0}", grid_size), |b| {
            let mut generator = RandomBoardGenerator::new(42);
            b.iter(|| black_box(generator.generate(&config)));
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
