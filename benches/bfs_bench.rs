use criterion::{criterion_group, criterion_main, Criterion};
use grid_bfs::{encode_input, find_path, Cell, GridConfig, SearchContext, BUFFER_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_scenarios(config: &GridConfig, rng: &mut StdRng, n: usize) -> Vec<(Cell, Cell)> {
    let mut point = || {
        Cell::new(
            rng.gen_range(0..=config.height),
            rng.gen_range(0..=config.width),
        )
    };
    (0..n).map(|_| (point(), point())).collect()
}

fn random_obstacles(config: GridConfig, rng: &mut StdRng, density: f64) -> GridConfig {
    let mut config = config;
    for row in 0..=config.height {
        for col in 0..=config.width {
            if rng.gen_bool(density) {
                config.obstacles.insert(Cell::new(row, col));
            }
        }
    }
    config
}

fn grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for allow_diag in [false, true] {
        for size in [64u8, 255] {
            let base = GridConfig::new(size, size, Cell::default(), Cell::default())
                .with_diagonal(allow_diag);
            let mut config = random_obstacles(base, &mut rng, 0.2);
            let scenarios = random_scenarios(&config, &mut rng, 20);
            let mut context = SearchContext::with_capacity(config.cell_count());
            let diag_str = if allow_diag { "8-grid" } else { "4-grid" };

            c.bench_function(format!("random {size}x{size}, {diag_str}").as_str(), |b| {
                b.iter(|| {
                    for &(start, end) in &scenarios {
                        config.start = start;
                        config.end = end;
                        black_box(config.shortest_path_with(&mut context));
                    }
                })
            });
        }
    }
}

fn byte_interface_bench(c: &mut Criterion) {
    let config = GridConfig::new(60, 60, Cell::new(1, 1), Cell::new(60, 60))
        .with_obstacles((2..60).map(|row| Cell::new(row, 30)));
    let input = encode_input(&config);
    let mut output = vec![0u8; BUFFER_SIZE];
    c.bench_function("find_path 60x60 wall", |b| {
        b.iter(|| black_box(find_path(black_box(&input), &mut output)))
    });
}

criterion_group!(benches, grid_bench, byte_interface_bench);
criterion_main!(benches);
