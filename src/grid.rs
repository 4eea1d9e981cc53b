//! Rectangular grid of walled cells

use std::{collections::VecDeque, mem};

use crate::{Direction, MazeError, Point};

/// Single square of the maze
///
/// Walls are only changed through [Grid::remove_wall], which keeps the
/// flags of both neighbours in agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Point,
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    /// Reached by the generator
    visited: bool,
    /// Stepped on by the solver
    on_path: bool,
}

impl Cell {
    fn new(position: Point) -> Self {
        Cell {
            position,
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
            on_path: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the wall on side `side` is still standing
    pub fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    fn clear_wall(&mut self, side: Direction) {
        match side {
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }
}

/// Fixed-size `rows` x `cols` maze board
///
/// Cells live in a single row-major vector and are addressed by [Point].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall standing and no cell visited
    ///
    /// Returns [MazeError::InvalidDimensions] if either side is zero, or
    /// if the cells would not fit in memory.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let too_large = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(mem::size_of::<Cell>()))
            .map_or(true, |bytes| bytes > isize::MAX as usize);
        if rows == 0 || cols == 0 || too_large {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Point { row, col })))
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Fail with [MazeError::OutOfBounds] unless `point` is on the grid
    pub fn check_bounds(&self, point: Point) -> Result<(), MazeError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: point.row,
                col: point.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn index(&self, point: Point) -> Result<usize, MazeError> {
        self.check_bounds(point)?;
        Ok(point.row * self.cols + point.col)
    }

    /// Bounds-checked cell accessor
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, MazeError> {
        let idx = self.index(Point { row, col })?;
        Ok(&self.cells[idx])
    }

    fn cell_mut(&mut self, point: Point) -> Result<&mut Cell, MazeError> {
        let idx = self.index(point)?;
        Ok(&mut self.cells[idx])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Adjacent cells that the generator has not reached yet
    ///
    /// Candidates are checked in the order up, down, left, right.
    pub fn neighbors_unvisited(&self, point: Point) -> Result<Vec<Point>, MazeError> {
        self.check_bounds(point)?;
        let neighbors = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .filter_map(|dir| dir.step_from(point, self.rows, self.cols))
        .filter(|&p| !self.cells[p.row * self.cols + p.col].visited)
        .collect();
        Ok(neighbors)
    }

    /// Knock down the wall shared by two adjacent cells
    ///
    /// Both sides of the wall are cleared together; this is the only way
    /// walls are ever removed. If `b` is not next to `a` it is reported as
    /// [MazeError::OutOfBounds].
    pub fn remove_wall(&mut self, a: Point, b: Point) -> Result<(), MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let side = Direction::between(a, b).ok_or(MazeError::OutOfBounds {
            row: b.row,
            col: b.col,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cell_mut(a)?.clear_wall(side);
        self.cell_mut(b)?.clear_wall(side.opposite());
        Ok(())
    }

    /// Whether one can pass from `point` towards `direction`
    ///
    /// The outer boundary is never open.
    pub fn is_open(&self, point: Point, direction: Direction) -> Result<bool, MazeError> {
        Ok(!self.cell_at(point.row, point.col)?.has_wall(direction))
    }

    pub fn mark_visited(&mut self, point: Point) -> Result<(), MazeError> {
        self.cell_mut(point)?.visited = true;
        Ok(())
    }

    pub fn mark_on_path(&mut self, point: Point) -> Result<(), MazeError> {
        self.cell_mut(point)?.on_path = true;
        Ok(())
    }

    /// Number of removed interior walls
    pub fn open_connections(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| usize::from(!cell.right) + usize::from(!cell.bottom))
            .sum()
    }

    /// Cells reachable from `start` through open walls, breadth first
    pub fn reachable_from(&self, start: Point) -> Result<Vec<Point>, MazeError> {
        self.check_bounds(start)?;
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        let mut reached = Vec::new();
        seen[start.row * self.cols + start.col] = true;

        while let Some(point) = queue.pop_front() {
            reached.push(point);
            for dir in Direction::CLOCKWISE {
                if self.is_open(point, dir)? {
                    if let Some(next) = dir.step_from(point, self.rows, self.cols) {
                        let idx = next.row * self.cols + next.col;
                        if !seen[idx] {
                            seen[idx] = true;
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
        Ok(reached)
    }

    /// Whether the open walls form a spanning tree over all cells
    ///
    /// That is `rows * cols - 1` open walls, and every cell reachable from
    /// the top-left corner.
    pub fn is_perfect(&self) -> bool {
        self.open_connections() == self.cells.len() - 1
            && self
                .reachable_from(Point::new(0, 0))
                .map(|reached| reached.len() == self.cells.len())
                .unwrap_or(false)
    }
}
