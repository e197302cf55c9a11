use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seamcarve::{calculate_energy, energy_to_vertical_seam, seamcarve, PixelGrid};

fn noise(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503));
        [(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
    })
}

fn carve_benchmark(c: &mut Criterion) {
    let grid = noise(320, 240);
    c.bench_function("energy 320x240", |b| {
        b.iter(|| calculate_energy(black_box(&grid)))
    });
    let energy = calculate_energy(&grid).unwrap();
    c.bench_function("seam 320x240", |b| {
        b.iter(|| energy_to_vertical_seam(black_box(&energy)))
    });
    c.bench_function("carve 10x10 from 320x240", |b| {
        b.iter(|| seamcarve(black_box(&grid), 10, 10))
    });
}

criterion_group!(benches, carve_benchmark);
criterion_main!(benches);
