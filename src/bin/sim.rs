use battlegrid::{init_logging, Board, ShipPlacer, BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <runs>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let runs: u32 = args[2].parse()?;
    if runs == 0 {
        anyhow::bail!("runs must be at least 1");
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let placer = ShipPlacer::new();
    let mut board = Board::new();
    let fleet_cells: usize = placer.fleet().iter().map(|def| def.length()).sum();

    let mut heat = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    let mut total_draws = 0u64;
    let mut max_draws = 0u32;
    let mut restarts = 0u64;

    for _ in 0..runs {
        let report = placer.place_fleet(&mut board, &mut rng)?;
        total_draws += u64::from(report.draws);
        max_draws = max_draws.max(report.draws);
        restarts += u64::from(report.restarts);
        for coord in board.occupancy().iter() {
            heat[coord.row()][coord.col()] += 1;
        }
    }

    let result = json!({
        "runs": runs,
        "fleet_cells": fleet_cells,
        "mean_draws": total_draws as f64 / f64::from(runs),
        "max_draws": max_draws,
        "restarts": restarts,
        "heat": heat,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
