use crate::ship::ShipDef;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Ships placed on every board, in placement order.
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments in [`FLEET`].
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "BATTLEGRID_LOG";
