use std::collections::HashSet;

use battlegrid::{
    Board, BoardError, Coord, Orientation, PlacementLimits, Reveal, ShipDef, ShipPlacer, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

static TOO_LONG: [ShipDef; 1] = [ShipDef::new("Barge", 11)];
// 110 cells never fit on a 100-cell board.
static OVERFULL: [ShipDef; 11] = [ShipDef::new("Wall", 10); 11];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fleet_fills_seventeen_cells_without_overlap(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let report = ShipPlacer::new().place_fleet(&mut board, &mut rng).unwrap();

        prop_assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(report.ships.len(), FLEET.len());

        let mut seen = HashSet::new();
        for ship in &report.ships {
            for cell in ship.cells() {
                prop_assert!(seen.insert(cell), "cell {} covered twice", cell);
                prop_assert!(board.cell(cell).occupied);
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn ships_are_straight_contiguous_runs(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let report = ShipPlacer::new().place_fleet(&mut board, &mut rng).unwrap();

        for (ship, def) in report.ships.iter().zip(FLEET.iter()) {
            prop_assert_eq!(ship.ship(), *def);
            let cells: Vec<Coord> = ship.cells().collect();
            prop_assert_eq!(cells.len(), def.length());
            let origin = ship.origin();
            for (i, c) in cells.iter().enumerate() {
                match ship.orientation() {
                    Orientation::Horizontal => {
                        prop_assert_eq!(c.row(), origin.row());
                        prop_assert_eq!(c.col(), origin.col() + i);
                    }
                    Orientation::Vertical => {
                        prop_assert_eq!(c.col(), origin.col());
                        prop_assert_eq!(c.row(), origin.row() + i);
                    }
                }
                prop_assert!(c.row() < 10 && c.col() < 10);
            }
        }
    }

    #[test]
    fn placement_starts_from_a_cleared_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let placer = ShipPlacer::new();
        placer.place_fleet(&mut board, &mut rng).unwrap();
        for c in Coord::all() {
            board.fire(c);
        }
        placer.place_fleet(&mut board, &mut rng).unwrap();

        prop_assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
        prop_assert!(board.cells().all(|c| c.revealed == Reveal::Unknown));
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        let mut a = Board::new();
        let mut b = Board::new();
        let ra = ShipPlacer::new()
            .place_fleet(&mut a, &mut SmallRng::seed_from_u64(seed))
            .unwrap();
        let rb = ShipPlacer::new()
            .place_fleet(&mut b, &mut SmallRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(ra, rb);
    }
}

#[test]
fn restart_limit_still_places_fleet() {
    // A single rejection restarts the whole fleet, so most runs restart.
    let placer = ShipPlacer::new().limits(PlacementLimits::restart_after(1));
    let mut restarted = false;
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place(Coord::new(4, 4).unwrap()).unwrap();
        board.fire(Coord::new(4, 4).unwrap());
        board.fire(Coord::new(0, 9).unwrap());

        let report = placer.place_fleet(&mut board, &mut rng).unwrap();
        assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
        assert_eq!(report.ships.len(), FLEET.len());
        assert!(report.draws >= FLEET.len() as u32 + report.restarts);
        assert!(board.cells().all(|c| c.revealed == Reveal::Unknown));
        restarted |= report.restarts > 0;
    }
    assert!(restarted);
}

#[test]
fn placer_reports_its_fleet() {
    let placer = ShipPlacer::new();
    assert_eq!(placer.fleet(), &FLEET[..]);
    let cells: usize = placer.fleet().iter().map(|def| def.length()).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert_eq!(ShipPlacer::with_fleet(&TOO_LONG).fleet().len(), 1);
}

#[test]
fn overfull_fleet_gives_up_after_max_restarts() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    let err = ShipPlacer::with_fleet(&OVERFULL)
        .limits(PlacementLimits::restart_after(50).with_max_restarts(3))
        .place_fleet(&mut board, &mut rng)
        .unwrap_err();
    assert_eq!(err, BoardError::UnableToPlaceShip);
    assert_eq!(board, Board::new());
}

#[test]
fn ship_longer_than_board_is_rejected_up_front() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    let err = ShipPlacer::with_fleet(&TOO_LONG)
        .place_fleet(&mut board, &mut rng)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
}

#[test]
fn fitting_placement_checks_bounds_and_overlap() {
    let mut board = Board::new();
    let carrier = FLEET[0];
    assert!(battlegrid::fitting_placement(&board, carrier, 0, 5, Orientation::Horizontal).is_some());
    assert!(battlegrid::fitting_placement(&board, carrier, 0, 6, Orientation::Horizontal).is_none());
    assert!(battlegrid::fitting_placement(&board, carrier, 6, 0, Orientation::Vertical).is_none());

    board.place(Coord::new(2, 0).unwrap()).unwrap();
    assert!(battlegrid::fitting_placement(&board, carrier, 0, 0, Orientation::Vertical).is_none());
    // touching is allowed
    assert!(battlegrid::fitting_placement(&board, carrier, 3, 0, Orientation::Vertical).is_some());
}
