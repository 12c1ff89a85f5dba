use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};

use life::config::Params;
use life::grid::Grid;
use life::render;

const CELL_PX: usize = 16;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let params = match Params::from_args(&args) {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let out_dir: Option<PathBuf> = args.get(5).map(PathBuf::from);

    info!(
        "Simulating {}x{} grid with {} seeds for {} steps",
        params.rows, params.columns, params.seeds, params.steps
    );

    let (sim, timings) = match life::simulate(&params) {
        Ok(run) => run,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!("rng seed {}", sim.seed);

    for t in &timings {
        info!("  {:20} {:8.3} ms", t.name, t.ms);
    }

    for (i, g) in sim.generations.iter().enumerate() {
        if i == 0 {
            println!("Initial state:\n");
        } else {
            println!("Iteration {i}:\n");
        }
        println!("{}\n", render::text(g));
    }

    if let Some(dir) = out_dir {
        if let Err(e) = save_pngs(&dir, &sim.generations) {
            error!("failed to write images to {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn save_pngs(dir: &Path, generations: &[Grid<bool>]) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    for (i, g) in generations.iter().enumerate() {
        let (w, h) = render::image_size(g, CELL_PX);
        let path = dir.join(format!("generation_{i:03}.png"));
        image::save_buffer(&path, &render::rgba(g, CELL_PX), w as u32, h as u32, image::ColorType::Rgba8)?;
        info!("Saved {}", path.display());
    }
    Ok(())
}
