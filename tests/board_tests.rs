use battlegrid::{
    Board, BoardError, Boards, Coord, HitResult, Orientation, Placement, Reveal, Side, FLEET,
};

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.cells().count(), 100);
    assert!(board
        .cells()
        .all(|c| !c.occupied && c.revealed == Reveal::Unknown));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(9, 9).is_ok());
    assert_eq!(
        Coord::new(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        Coord::new(0, 10).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(coord(6, 1).to_string(), "B7");
}

#[test]
fn test_is_free() {
    let mut board = Board::new();
    assert!(board.is_free(0, 0));
    board.place(coord(0, 0)).unwrap();
    assert!(!board.is_free(0, 0));
    assert!(board.is_free(0, 1));
    // off the grid is never free
    assert!(!board.is_free(10, 3));
    assert!(!board.is_free(3, 10));
}

#[test]
fn test_place_on_occupied_cell_is_rejected() {
    let mut board = Board::new();
    board.place(coord(4, 4)).unwrap();
    assert_eq!(board.place(coord(4, 4)), Err(BoardError::ShipOverlaps));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_place_ship_is_all_or_nothing() {
    let mut board = Board::new();
    board.place(coord(2, 5)).unwrap();
    let crossing = Placement::new(FLEET[0], coord(2, 1), Orientation::Horizontal).unwrap();
    assert_eq!(board.place_ship(&crossing), Err(BoardError::ShipOverlaps));
    assert_eq!(board.occupied_count(), 1);

    let clear = Placement::new(FLEET[0], coord(3, 1), Orientation::Horizontal).unwrap();
    board.place_ship(&clear).unwrap();
    assert_eq!(board.occupied_count(), 6);
}

#[test]
fn test_fire_hit_and_miss() {
    let mut board = Board::new();
    board.place(coord(1, 1)).unwrap();
    assert_eq!(board.fire(coord(1, 1)), HitResult::Hit);
    assert_eq!(board.fire(coord(1, 2)), HitResult::Miss);
    assert_eq!(board.revealed(coord(1, 1)), Reveal::Hit);
    assert_eq!(board.revealed(coord(1, 2)), Reveal::Miss);
    assert_eq!(board.revealed(coord(1, 3)), Reveal::Unknown);
    assert_eq!(board.hits().len(), 1);
    assert!(board.hits().contains(coord(1, 1)));
    assert_eq!(board.misses().len(), 1);
    assert!(board.misses().contains(coord(1, 2)));
    assert!(board.hits().is_disjoint(&board.misses()));
}

#[test]
fn test_repeat_fire_returns_recorded_result() {
    let mut board = Board::new();
    board.place(coord(5, 5)).unwrap();
    board.fire(coord(5, 5));
    board.fire(coord(0, 0));
    let before = board;

    assert_eq!(board.fire(coord(5, 5)), HitResult::Hit);
    assert_eq!(board.fire(coord(0, 0)), HitResult::Miss);
    assert_eq!(board, before);
}

#[test]
fn test_clear_twice_matches_clear_once() {
    let mut board = Board::new();
    let ship = Placement::new(FLEET[1], coord(0, 0), Orientation::Vertical).unwrap();
    board.place_ship(&ship).unwrap();
    board.fire(coord(0, 0));
    board.fire(coord(9, 9));

    board.clear();
    let once = board;
    board.clear();
    assert_eq!(board, once);
    assert_eq!(board, Board::new());
}

#[test]
fn test_cell_view() {
    let mut board = Board::new();
    board.place(coord(3, 7)).unwrap();
    board.fire(coord(3, 7));
    let cell = board.cell(coord(3, 7));
    assert!(cell.occupied);
    assert_eq!(cell.revealed, Reveal::Hit);
    assert_eq!(cell.coord, coord(3, 7));
}

#[test]
fn test_boards_are_independent() {
    let mut boards = Boards::new();
    boards.get_mut(Side::Player).place(coord(0, 0)).unwrap();
    boards.get_mut(Side::Opponent).fire(coord(0, 0));
    assert_eq!(boards.get(Side::Player).revealed(coord(0, 0)), Reveal::Unknown);
    assert!(!boards.get(Side::Opponent).cell(coord(0, 0)).occupied);
}

#[test]
fn test_placement_bounds() {
    assert_eq!(
        Placement::new(FLEET[0], coord(0, 6), Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Placement::new(FLEET[0], coord(6, 0), Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    let edge = Placement::new(FLEET[0], coord(5, 9), Orientation::Vertical).unwrap();
    let cells: Vec<_> = edge.cells().map(|c| (c.row(), c.col())).collect();
    assert_eq!(cells, vec![(5, 9), (6, 9), (7, 9), (8, 9), (9, 9)]);
}

#[test]
fn test_coord_deserialize_rejects_out_of_range() {
    let ok: Coord = serde_json::from_str("[2, 3]").unwrap();
    assert_eq!(ok, coord(2, 3));
    assert!(serde_json::from_str::<Coord>("[2, 10]").is_err());
}
