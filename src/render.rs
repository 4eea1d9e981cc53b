//! Text rendering of the maze

use std::fmt;

use colored::Colorize;
use itertools::Itertools;

use crate::{Cell, Direction, Grid, Point};

/// How cells on the solver's path are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Bare ` * ` marker
    Plain,
    /// Marker shaded from green on the left to yellow on the right,
    /// using true colour escapes.
    #[default]
    Gradient,
}

/// Printable view of a grid with its entry and exit
///
/// ```
/// use maze_walker::{Grid, MazeView, PathStyle, Point};
///
/// let grid = Grid::new(1, 2).unwrap();
/// let view = MazeView::new(&grid, Point::new(0, 0), Point::new(0, 1)).style(PathStyle::Plain);
/// assert_eq!(view.to_string(), "+---+---+\n| E | S |\n+---+---+\n");
/// ```
pub struct MazeView<'a> {
    grid: &'a Grid,
    entry: Point,
    exit: Point,
    style: PathStyle,
}

impl<'a> MazeView<'a> {
    const ENTRY: &'static str = " E ";
    const EXIT: &'static str = " S ";
    const PATH: &'static str = " * ";
    const EMPTY: &'static str = "   ";
    const H_WALL: &'static str = "---";

    pub fn new(grid: &'a Grid, entry: Point, exit: Point) -> Self {
        Self {
            grid,
            entry,
            exit,
            style: PathStyle::default(),
        }
    }

    pub fn style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    fn interior(&self, cell: &Cell) -> String {
        let pos = cell.position();
        if pos == self.entry {
            Self::ENTRY.to_string()
        } else if pos == self.exit {
            Self::EXIT.to_string()
        } else if cell.is_on_path() {
            match self.style {
                PathStyle::Plain => Self::PATH.to_string(),
                PathStyle::Gradient => {
                    let red = (255 * pos.col / self.grid.cols()) as u8;
                    Self::PATH.truecolor(red, 255, 0).to_string()
                }
            }
        } else {
            Self::EMPTY.to_string()
        }
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.grid.cells().collect_vec();
        for row in cells.chunks(self.grid.cols()) {
            let tops = row
                .iter()
                .map(|cell| {
                    if cell.has_wall(Direction::Up) {
                        Self::H_WALL
                    } else {
                        Self::EMPTY
                    }
                })
                .join("+");
            writeln!(f, "+{}+", tops)?;

            let inner = row
                .iter()
                .map(|cell| {
                    let side = if cell.has_wall(Direction::Left) { "|" } else { " " };
                    format!("{}{}", side, self.interior(cell))
                })
                .join("");
            writeln!(f, "{}|", inner)?;
        }
        let bottom = (0..self.grid.cols()).map(|_| Self::H_WALL).join("+");
        writeln!(f, "+{}+", bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::{MazeView, PathStyle};
    use crate::{maze_generator::tests::snake_3x3, solve, Grid, Point};

    const ENTRY: Point = Point { row: 0, col: 0 };
    const EXIT: Point = Point { row: 2, col: 2 };

    #[test]
    fn single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        let p = Point::new(0, 0);
        let view = MazeView::new(&grid, p, p).style(PathStyle::Plain);
        assert_eq!(view.to_string(), "+---+\n| E |\n+---+\n");
    }

    #[test]
    fn generated_maze_layout() {
        let grid = snake_3x3();
        let view = MazeView::new(&grid, ENTRY, EXIT).style(PathStyle::Plain);
        let expected = "\
+---+---+---+
| E |       |
+   +   +   +
|   |   |   |
+   +   +   +
|       | S |
+---+---+---+
";
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn solved_maze_shows_path() {
        let mut grid = snake_3x3();
        solve(&mut grid, ENTRY, EXIT).unwrap();
        let view = MazeView::new(&grid, ENTRY, EXIT).style(PathStyle::Plain);
        let expected = "\
+---+---+---+
| E | *   * |
+   +   +   +
| * | * | * |
+   +   +   +
| *   * | S |
+---+---+---+
";
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn gradient_adds_colour_escapes() {
        colored::control::set_override(true);
        let mut grid = snake_3x3();
        solve(&mut grid, ENTRY, EXIT).unwrap();
        let plain = MazeView::new(&grid, ENTRY, EXIT)
            .style(PathStyle::Plain)
            .to_string();
        let shaded = MazeView::new(&grid, ENTRY, EXIT)
            .style(PathStyle::Gradient)
            .to_string();
        assert_ne!(plain, shaded);
        assert!(shaded.contains("\x1b["));
        assert_eq!(plain.lines().count(), shaded.lines().count());
    }
}
