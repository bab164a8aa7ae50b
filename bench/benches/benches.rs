use criterion::{Criterion, criterion_group, criterion_main};
use pixel_noise::{
    NoiseField, Preset, ScaledSampler,
    grid::{flatten2, normalize2, sample_preset_grid},
};
use std::hint::black_box;

const SIZE: usize = 256;
const SEED: f64 = 2025.0;

fn bench_reseed(c: &mut Criterion) {
    c.bench_function("NoiseField reseed", |b| {
        let mut field = NoiseField::new();
        let mut seed = SEED;
        b.iter(|| {
            seed += 1.0;
            field.seed(black_box(seed));
        })
    });
}

fn bench_sample_grid(c: &mut Criterion) {
    c.bench_function("NoiseField sample 256x256", |b| {
        let field = NoiseField::with_seed(SEED);
        b.iter(|| {
            let mut total = 0.0;
            for y in 0..SIZE {
                for x in 0..SIZE {
                    total += field.sample(x as f64 * 0.05, y as f64 * 0.05);
                }
            }
            black_box(total)
        })
    });
}

fn bench_presets(c: &mut Criterion) {
    let sampler = ScaledSampler::new(NoiseField::with_seed(SEED));
    for preset in Preset::ALL {
        c.bench_function(&format!("{preset} frame + normalize + flatten"), |b| {
            b.iter(|| {
                let mut grid = sample_preset_grid(&sampler, preset, SIZE, SIZE, black_box(42.0));
                normalize2(&mut grid);
                black_box(flatten2(&grid))
            })
        });
    }
}

criterion_group!(noise_benchmarks, bench_reseed, bench_sample_grid, bench_presets);
criterion_main!(noise_benchmarks);
