//! Benchmarks for full plate generation

use criterion::{Criterion, criterion_group, criterion_main};
use gbipg::algorithm::PlateGenerator;
use gbipg::io::configuration::PlateConfig;
use gbipg::spatial::Canvas;
use gbipg::spatial::mask::{BLACK, WHITE};
use std::hint::black_box;

fn disk_mask(size: usize, radius: f64) -> Canvas {
    let mut canvas = Canvas::new(size, size, WHITE);
    let c = (size / 2) as i32;
    canvas.draw_disk([c, c], radius, BLACK);
    canvas
}

fn small_config() -> Option<PlateConfig> {
    let mut config = PlateConfig::with_size(200).ok()?;
    config.target_fill_ratio = 0.5;
    config.crevice_iteration_ceiling = 150_000;
    Some(config)
}

fn bench_full_generation(c: &mut Criterion) {
    let Some(config) = small_config() else {
        return;
    };
    let mask = disk_mask(config.width, 30.0);

    c.bench_function("generate_200px_plate", |b| {
        b.iter(|| {
            let Ok(mut generator) =
                PlateGenerator::new(mask.clone(), config.clone(), black_box(42))
            else {
                return;
            };
            black_box(generator.run());
        });
    });
}

fn bench_seed_placement(c: &mut Criterion) {
    let Some(config) = small_config() else {
        return;
    };
    let mask = disk_mask(config.width, 30.0);

    c.bench_function("place_seeds_200px", |b| {
        b.iter(|| {
            let Ok(mut generator) =
                PlateGenerator::new(mask.clone(), config.clone(), black_box(42))
            else {
                return;
            };
            black_box(generator.place_seeds());
        });
    });
}

criterion_group!(benches, bench_full_generation, bench_seed_placement);
criterion_main!(benches);
