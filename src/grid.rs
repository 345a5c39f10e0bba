use std::{error, fmt::Display};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char, Position),
    MultipleMarks(char, Position, Position),
    NoMark(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c, pos) => {
                write!(f, "Invalid character({}) at {} of map.", c, pos)
            }
            Error::MultipleMarks(c, last_pos, pos) => write!(
                f,
                "Expect only one '{}' in map, given two({}, {}).",
                c, last_pos, pos
            ),
            Error::NoMark(c) => write!(f, "No '{}' in map.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "^"),
            Direction::East => write!(f, ">"),
            Direction::South => write!(f, "v"),
            Direction::West => write!(f, "<"),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::North),
            '>' => Ok(Direction::East),
            'v' => Ok(Direction::South),
            '<' => Ok(Direction::West),
            other => Err(other),
        }
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row and column deltas of one step.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Which cells count as adjacent to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// The four orthogonal cells.
    Orthogonal,
    /// The orthogonal cells plus the four diagonal ones.
    WithDiagonals,
}

impl Neighborhood {
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        static ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        static ALL_OFFSETS: [(isize, isize); 8] = [
            (-1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
        ];

        match self {
            Neighborhood::Orthogonal => &ORTHOGONAL_OFFSETS,
            Neighborhood::WithDiagonals => &ALL_OFFSETS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Neighbor one step along `dir`, `None` when it would leave the first quadrant.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        self.offset(dr, dc)
    }

    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

/// Rectangular map of tiles stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(row_n: usize, col_n: usize, tile: T) -> Self {
        Self {
            tiles: vec![tile; row_n * col_n],
            row_n,
            col_n,
        }
    }
}

impl Grid<char> {
    /// Parses newline separated rows of characters as they are.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let mut builder = GridBuilder::new();
        for line in text.lines() {
            builder.add_row(line, |_, c| Ok(c))?;
        }

        Ok(builder.build())
    }

    /// The only position holding `mark`.
    pub fn find_unique(&self, mark: char) -> Result<Position, Error> {
        let mut found = None;
        for pos in self.positions().filter(|pos| self.tiles[self.ind(pos)] == mark) {
            if let Some(last_pos) = found {
                return Err(Error::MultipleMarks(mark, last_pos, pos));
            }

            found = Some(pos);
        }

        found.ok_or(Error::NoMark(mark))
    }
}

impl<T> Grid<T> {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub fn tile_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get_mut(ind))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(self.tiles.iter())
    }

    /// Moves `pos` by the given deltas if the result stays inside the grid.
    pub fn step(&self, pos: &Position, dr: isize, dc: isize) -> Option<Position> {
        pos.offset(dr, dc).filter(|next_pos| self.is_inside(next_pos))
    }

    pub fn neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|next_pos| self.is_inside(next_pos))
    }

    /// In-bounds neighbors of `pos` under the given neighborhood.
    pub fn neighbors<'a>(
        &'a self,
        pos: &'a Position,
        neighborhood: Neighborhood,
    ) -> impl Iterator<Item = Position> + 'a {
        neighborhood
            .offsets()
            .iter()
            .filter_map(move |(dr, dc)| self.step(pos, *dr, *dc))
    }

    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(Position, &T) -> Result<U, E>,
    ) -> Result<Grid<U>, E> {
        let tiles = self
            .tiles()
            .map(|(pos, tile)| f(pos, tile))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid {
            tiles,
            row_n: self.row_n,
            col_n: self.col_n,
        })
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(self.ind(pos))
        } else {
            None
        }
    }

    fn ind(&self, pos: &Position) -> usize {
        pos.r * self.col_n + pos.c
    }
}

#[derive(Debug)]
pub struct GridBuilder<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    /// Appends one row, converting each character with `to_tile`.
    pub fn add_row(
        &mut self,
        text: &str,
        mut to_tile: impl FnMut(Position, char) -> Result<T, Error>,
    ) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            self.tiles.push(to_tile(Position::new(self.row_n, ind), c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Grid<T> {
        Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}
