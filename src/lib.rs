pub mod config;
pub mod error;
pub mod grid;
pub mod life;
pub mod render;
pub mod rng;

use std::time::Instant;

use log::debug;

use config::Params;
use error::LifeError;
use grid::Grid;
use life::LifeGrid;

/// A completed run: every generation from the initial grid onward.
pub struct Simulation {
    pub rows: usize,
    pub columns: usize,
    /// RNG seed that produced the initial grid.
    pub seed: u64,
    pub generations: Vec<Grid<bool>>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

pub fn simulate(params: &Params) -> Result<(Simulation, Vec<Timing>), LifeError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Seed the starting grid
    let t = Instant::now();
    let seed = match params.seed {
        Some(seed) => seed,
        None => rng::entropy_seed()?,
    };
    let life = LifeGrid::with_seed(params.rows, params.columns, params.seeds, seed)?;
    timings.push(Timing {
        name: "seed",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Step forward
    let t = Instant::now();
    let generations: Vec<Grid<bool>> = life.run(params.steps);
    for (i, g) in generations.iter().enumerate() {
        debug!("generation {i}: {} live", g.population());
    }
    timings.push(Timing {
        name: "step",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });

    let sim = Simulation {
        rows: life.rows(),
        columns: life.columns(),
        seed,
        generations,
    };

    Ok((sim, timings))
}
