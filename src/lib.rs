//! Generate a perfect maze and walk out of it with the right-hand rule
//!
//! A maze is a [Grid] of cells, each with four walls. [MazeGenerator]
//! knocks walls down with a randomized depth-first search until every cell
//! is connected to every other through exactly one route. [solve] then
//! walks from an entry to an exit keeping its right hand on the wall,
//! marking every cell it steps on.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_walker::{solve, MazeGenerator, MazeView, PathStyle, Point};
//!
//! let mut grid = MazeGenerator::new(Some(13)).generate(6, 9).unwrap();
//! assert!(grid.is_perfect());
//!
//! let (entry, exit) = (Point::new(0, 0), Point::new(5, 8));
//! let solution = solve(&mut grid, entry, exit).unwrap();
//! assert_eq!(solution.steps.last().unwrap().position, exit);
//!
//! let view = MazeView::new(&grid, entry, exit).style(PathStyle::Plain);
//! println!("{}", view);
//! ```
//!
//! ## Hand-made maze
//! ```
//! use maze_walker::{solve, Action, Grid, Point};
//!
//! // Three cells in a row, walls between them removed
//! let mut grid = Grid::new(1, 3).unwrap();
//! grid.remove_wall(Point::new(0, 0), Point::new(0, 1)).unwrap();
//! grid.remove_wall(Point::new(0, 1), Point::new(0, 2)).unwrap();
//!
//! let solution = solve(&mut grid, Point::new(0, 0), Point::new(0, 2)).unwrap();
//! assert_eq!(solution.steps.len(), 2);
//! assert!(solution.steps.iter().all(|s| s.action == Action::Forward));
//! ```

use thiserror::Error;

mod direction;
mod grid;
pub mod maze_generator;
mod render;
pub mod solver;

pub use direction::Direction;
pub use grid::{Cell, Grid};
pub use maze_generator::{MazeGenerator, RandomSource};
pub use render::{MazeView, PathStyle};
pub use solver::{solve, solve_with, Action, MazeSolution, Step, WallFollower};

/// Location in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }
}

/// Misuse of the maze API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("position ({row}, {col}) is outside the {rows}x{cols} maze")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("no way to the exit, walker was still going round after {steps} steps")]
    NoExit { steps: usize },
}
