//! Step throughput: serial vs rayon evolution on growing boards

use std::time::Instant;

use life_board::domain::{Grid, LifeLikeRule};
use rand::{SeedableRng, rngs::StdRng};

fn random_board(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size);
    grid.scatter(size * size * 3 / 10, &mut rng);
    grid
}

fn time_steps(size: usize, iterations: u32, parallel: bool) -> f64 {
    let rule = LifeLikeRule::conway();
    let mut grid = random_board(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = if parallel { grid.evolve_parallel(&rule) } else { grid.evolve(&rule) };
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Step benchmark (ms per generation) ===\n");
    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Rayon", "Speedup");
    println!("{:-<50}", "");

    for size in [60, 100, 250, 500, 1000, 2000] {
        let iterations = if size >= 1000 { 5 } else { 20 };
        let serial = time_steps(size, iterations, false);
        let parallel = time_steps(size, iterations, true);
        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial,
            parallel,
            serial / parallel
        );
    }
}
