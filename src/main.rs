//! Assemble momentum equations of a lid driven cavity at rest
//!
//! cargo run --release -- --nx 80 --ny 80 --reynolds 100
//!
//! or read the discretization parameters from json
//!
//! cargo run --release -- --config params.json --ny 80
use clap::Parser;
use rustcavity::functions::{column_range, norm_l2_f64};
use rustcavity::layout::StaggeredLayout;
use rustcavity::momentum::{assemble_par, Momentum, WallValues, XMomentum, YMomentum};
use rustcavity::params::DiscretizationParams;
use std::sync::Arc;
use std::time::Instant;

/// Momentum coefficients of a lid driven cavity
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Pressure cells in x direction
    #[arg(long, default_value_t = 80)]
    nx: usize,
    /// Pressure cells in y direction
    #[arg(long, default_value_t = 80)]
    ny: usize,
    /// Reynolds number
    #[arg(long, default_value_t = 100.)]
    reynolds: f64,
    /// Lid velocity
    #[arg(long, default_value_t = 1.)]
    lid: f64,
    /// Json file with discretization parameters (overrides nx and reynolds)
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let params = match &cli.config {
        Some(path) => DiscretizationParams::from_json(&std::fs::read_to_string(path)?)?,
        None => DiscretizationParams::lid_driven_cavity(cli.nx, cli.ny, cli.reynolds)?,
    };
    let layout = StaggeredLayout::from_params(&params, cli.ny)?;
    log::info!(
        "cavity {} x {}, rho = {}, gamma = {:e}",
        layout.nx,
        layout.ny,
        params.rho,
        params.gamma
    );

    let params = Arc::new(params);
    let (u, v, p) = (layout.zeros_u(), layout.zeros_v(), layout.zeros_p());
    let equations: [(&str, Momentum, Vec<_>, WallValues); 2] = [
        (
            "x-momentum",
            XMomentum::new(params.clone()).into(),
            layout.cells_u(),
            WallValues::lid(cli.lid),
        ),
        (
            "y-momentum",
            YMomentum::new(params).into(),
            layout.cells_v(),
            WallValues::default(),
        ),
    ];

    for (name, assembler, cells, walls) in &equations {
        let timer = Instant::now();
        let rows = assemble_par(assembler, cells, walls, &u.view(), &v.view(), &p.view())?;
        let elapsed = timer.elapsed();
        if let Some((lo, hi)) = column_range(&rows, 0) {
            log::info!(
                "{}: {} rows in {:?}, Ap in [{:e}, {:e}], |B| = {:e}",
                name,
                rows.nrows(),
                elapsed,
                lo,
                hi,
                norm_l2_f64(&rows.column(6))
            );
        }
    }
    Ok(())
}
