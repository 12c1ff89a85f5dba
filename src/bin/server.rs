use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use life::config::Params;
use life::error::LifeError;
use life::grid::Grid;
use life::render;

const MAX_STEPS: usize = 1000;
const MAX_CELL_PX: usize = 64;
const DEFAULT_CELL_PX: usize = 16;
const MAX_CELLS: i64 = 65_536;
/// Cells summed over every returned generation.
const MAX_TOTAL_CELLS: i64 = 10_000_000;
/// Pixels in one rendered generation.
const MAX_PIXELS: i64 = 4_194_304;

#[derive(Deserialize)]
struct SimulateRequest {
    rows: Option<i64>,
    columns: Option<i64>,
    seeds: Option<i64>,
    steps: Option<usize>,
    seed: Option<u64>,
    cell_px: Option<usize>,
}

#[derive(Serialize)]
struct SimulateResponse {
    rows: usize,
    columns: usize,
    seed: u64,
    generations: Vec<Generation>,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct Generation {
    index: usize,
    population: usize,
    cells: Vec<Vec<&'static str>>,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, msg: impl ToString) -> ApiError {
    (status, Json(ErrorBody { error: msg.to_string() }))
}

fn encode_png(grid: &Grid<bool>, cell_px: usize) -> Result<String, image::ImageError> {
    let (w, h) = render::image_size(grid, cell_px);
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &render::rgba(grid, cell_px),
        w as u32,
        h as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

fn status_for(err: &LifeError) -> StatusCode {
    match err {
        LifeError::Entropy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Reject boards too large to simulate and render in one request.
/// Non-positive dimensions pass through so `simulate` reports them.
fn check_limits(params: &Params, cell_px: usize) -> Result<(), String> {
    if params.rows < 1 || params.columns < 1 {
        return Ok(());
    }
    let cells = params.rows.saturating_mul(params.columns);
    if cells > MAX_CELLS {
        return Err(format!(
            "board {}x{} exceeds {MAX_CELLS} cells",
            params.rows, params.columns
        ));
    }
    let generations = params.steps as i64 + 1;
    if cells * generations > MAX_TOTAL_CELLS {
        return Err(format!(
            "{generations} generations of {cells} cells exceed {MAX_TOTAL_CELLS} cells"
        ));
    }
    let px = cell_px as i64;
    if cells * px * px > MAX_PIXELS {
        return Err(format!(
            "image at {cell_px}px per cell exceeds {MAX_PIXELS} pixels"
        ));
    }
    Ok(())
}

async fn simulate_handler(Json(req): Json<SimulateRequest>) -> Result<Json<SimulateResponse>, ApiError> {
    let defaults = Params::default();
    let params = Params {
        rows: req.rows.unwrap_or(defaults.rows),
        columns: req.columns.unwrap_or(defaults.columns),
        seeds: req.seeds.unwrap_or(defaults.seeds),
        steps: req.steps.unwrap_or(defaults.steps).min(MAX_STEPS),
        seed: req.seed,
    };
    let cell_px = req.cell_px.unwrap_or(DEFAULT_CELL_PX).clamp(1, MAX_CELL_PX);
    if let Err(msg) = check_limits(&params, cell_px) {
        warn!("rejected request: {msg}");
        return Err(api_error(StatusCode::BAD_REQUEST, msg));
    }

    let result = tokio::task::spawn_blocking(move || -> Result<SimulateResponse, ApiError> {
        let (sim, timings) =
            life::simulate(&params).map_err(|e| api_error(status_for(&e), e))?;

        let generations = sim
            .generations
            .iter()
            .enumerate()
            .map(|(index, g)| {
                Ok(Generation {
                    index,
                    population: g.population(),
                    cells: render::symbols(g),
                    data_url: encode_png(g, cell_px)
                        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        Ok(SimulateResponse {
            rows: sim.rows,
            columns: sim.columns,
            seed: sim.seed,
            generations,
            timings: timing_entries,
        })
    })
    .await
    .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            if err.0.is_server_error() {
                error!("simulate failed: {}", err.1.error);
            } else {
                warn!("simulate rejected: {}", err.1.error);
            }
            Err(err)
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = Router::new()
        .route("/api/simulate", post(simulate_handler))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("life server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
