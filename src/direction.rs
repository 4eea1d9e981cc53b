//! Compass directions on the grid

use crate::Point;

/// Facing of the solver, and the side of a cell a wall sits on
///
/// The variants are in clockwise order, so turning right is one step
/// forward in the cycle and turning left is three steps forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order, starting from [Direction::Up]
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Quarter turn clockwise (Up -> Right)
    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Quarter turn counter-clockwise (Up -> Left)
    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Self {
        Self::CLOCKWISE[(self.index() + 2) % 4]
    }

    /// Neighbouring point in this direction, if it lies inside a
    /// `rows` x `cols` grid.
    pub fn step_from(self, point: Point, rows: usize, cols: usize) -> Option<Point> {
        let Point { row, col } = point;
        match self {
            Direction::Up => row.checked_sub(1).map(|row| Point { row, col }),
            Direction::Down => (row + 1 < rows).then(|| Point { row: row + 1, col }),
            Direction::Left => col.checked_sub(1).map(|col| Point { row, col }),
            Direction::Right => (col + 1 < cols).then(|| Point { row, col: col + 1 }),
        }
    }

    /// Direction leading from `from` to an adjacent point `to`
    ///
    /// Returns `None` unless the points differ by exactly one in exactly
    /// one coordinate.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match (
            to.row as isize - from.row as isize,
            to.col as isize - from.col as isize,
        ) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}
