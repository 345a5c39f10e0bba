use aoc2024::grid::{Direction, Error, Grid, Neighborhood, Position};

#[test]
fn ragged_grid_is_rejected() {
    let err = Grid::from_text("...\n..\n...").unwrap_err();

    assert!(matches!(err, Error::InconsistentRow(3, 2)));
    assert_eq!(err.to_string(), "Expect 3 column(s) in each row, given 2.");
}

#[test]
fn marks_are_located() {
    let grid = Grid::from_text("#S.\n..E").unwrap();

    assert_eq!(grid.row_n(), 2);
    assert_eq!(grid.col_n(), 3);
    assert_eq!(grid.find_unique('S').unwrap(), Position::new(0, 1));
    assert_eq!(grid.find_unique('E').unwrap(), Position::new(1, 2));
    assert!(matches!(grid.find_unique('X'), Err(Error::NoMark('X'))));
    assert!(matches!(
        grid.find_unique('.'),
        Err(Error::MultipleMarks('.', _, _))
    ));
}

#[test]
fn neighbors_stay_inside() {
    let grid = Grid::new(3, 3, 0u8);
    let corner = Position::new(0, 0);
    let center = Position::new(1, 1);

    assert_eq!(grid.neighbors(&corner, Neighborhood::Orthogonal).count(), 2);
    assert_eq!(grid.neighbors(&corner, Neighborhood::WithDiagonals).count(), 3);
    assert_eq!(grid.neighbors(&center, Neighborhood::WithDiagonals).count(), 8);
    assert_eq!(grid.neighbor(&corner, Direction::North), None);
    assert_eq!(
        grid.neighbor(&corner, Direction::East),
        Some(Position::new(0, 1))
    );
}

#[test]
fn directions_turn_around() {
    for dir in Direction::all_dirs() {
        assert_eq!(dir.turn_clockwise().turn_counterclockwise(), *dir);
        assert_eq!(dir.turn_clockwise().turn_clockwise(), dir.reverse());
        assert_eq!(Direction::try_from(dir.to_string().chars().next().unwrap()), Ok(*dir));
    }
}
