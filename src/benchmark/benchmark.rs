use std::time::Instant;

use crate::configuration::config::StepOrder;
use crate::simulation::engine::Engine;
use crate::simulation::states::{Body, Universe};
use crate::simulation::vector::{Position, Velocity, Vector};

const SIDE: f64 = 2000.0;
const RADIUS: f64 = 2.0;

/// Time one tick with the all-pairs scan against the grid broad phase
/// for growing N, both update orders
pub fn bench_collision_scan() {
    let ns = [200, 400, 800, 1600, 3200];

    println!("N,order,direct_ms,grid_ms");

    for n in ns {
        for order in [StepOrder::Sequential, StepOrder::Snapshot] {
            let template = make_universe(n);

            let direct = Engine { order, broad_phase: None };
            let grid = Engine { order, broad_phase: Some(4.0 * RADIUS + 2.0) };

            let ms_direct = time_steps(&direct, template.clone(), steps_for(n));
            let ms_grid = time_steps(&grid, template, steps_for(n));

            println!("{},{:?},{:.6},{:.6}", n, order, ms_direct, ms_grid);
        }
    }
}

/// Small N: average over a few steps to smooth noise
fn steps_for(n: usize) -> usize {
    if n <= 800 { 5 } else { 1 }
}

fn time_steps(engine: &Engine, mut universe: Universe, steps: usize) -> f64 {
    // Warm-up
    if let Err(e) = engine.step(&mut universe) {
        println!("warm-up step failed: {e}");
        return f64::NAN;
    }

    let t0 = Instant::now();
    for _ in 0..steps {
        if let Err(e) = engine.step(&mut universe) {
            println!("step failed: {e}");
            return f64::NAN;
        }
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Helper to build a bounded universe of size `n`
fn make_universe(n: usize) -> Universe {
    let mut universe = Universe::new(Vector::new(SIDE, SIDE, 0.0), false);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = Position::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * SIDE,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * SIDE,
            0.0,
        );
        let velocity = Velocity::new((i_f * 0.11).cos(), (i_f * 0.07).sin(), 0.0);
        universe.add(Body::new(position, velocity, 1.0, RADIUS));
    }

    universe
}
