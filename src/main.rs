//! Headless Dynasty run
//!
//! Simulates the default walker system, assembles its line geometry and
//! logs what a renderer would upload. Set `DYNASTY_SEED` for a reproducible
//! run.

use dynasty::{Session, SessionError};
use walker_physics::{interaction_law_label, relation_model_label};
use walker_simulation::{FixedSeeds, SimulationParameters};

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var("DYNASTY_SEED").ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring DYNASTY_SEED={:?}: {}", raw, e);
            None
        }
    }
}

fn run() -> Result<(), SessionError> {
    let params = SimulationParameters::default();
    log::info!(
        "Simulating {} walkers over {} iterations ({}, {})",
        params.count,
        params.iterations,
        interaction_law_label(params.interaction_law),
        relation_model_label(params.relation_model)
    );

    let mut session = match seed_from_env() {
        Some(seed) => Session::with_seed_provider(params, FixedSeeds::new(seed))?,
        None => Session::new(params)?,
    };
    let seeds = session.system().seeds();
    log::info!(
        "✓ Seeds: start positions {}, relation mask {}, relation matrix {}",
        seeds.start_positions,
        seeds.relation_mask,
        seeds.relation_matrix
    );

    session.refresh_geometry()?;
    let buffers = session.buffers();
    log::info!("✓ Geometry assembled");
    log::info!("  Vertices: {}", buffers.vertex_count());
    log::info!("  Ring indexes: {}", buffers.rings_indexes.len());
    log::info!("  Edge indexes: {}", buffers.edges_indexes.len());
    log::info!("  Total size: {} bytes", buffers.byte_len());

    if let Some((lo, hi)) = session.system().positions().bounds() {
        log::info!(
            "  Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
            lo.x,
            lo.y,
            lo.z,
            hi.x,
            hi.y,
            hi.z
        );
    }
    Ok(())
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
