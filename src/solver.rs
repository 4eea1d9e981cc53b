//! Right-hand wall follower

use tracing::trace;

use crate::{Direction, Grid, MazeError, Point};

/// What the solver did during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Right-hand side was open: turned right and moved forward
    TurnRight,
    /// Right-hand side blocked, ahead open: moved forward
    Forward,
    /// Boxed in on the right and ahead: turned left in place
    TurnLeft,
}

/// Solver state after one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: Point,
    pub facing: Direction,
    pub action: Action,
}

/// Walker that keeps its right hand on the wall
///
/// The walker only ever looks at the walls of the cell it stands on. In a
/// perfect maze this traces the outline of the passage tree, so every cell
/// (the exit included) is reached eventually, though not necessarily along
/// the shortest route.
#[derive(Debug, Clone)]
pub struct WallFollower {
    position: Point,
    facing: Direction,
    exit: Point,
}

impl WallFollower {
    /// Initial facing of the walker
    pub const START_FACING: Direction = Direction::Right;

    /// Place the walker on `entry`, which is marked as on the path
    ///
    /// Both `entry` and `exit` must be on the grid.
    pub fn new(grid: &mut Grid, entry: Point, exit: Point) -> Result<Self, MazeError> {
        grid.check_bounds(exit)?;
        grid.mark_on_path(entry)?;
        Ok(Self {
            position: entry,
            facing: Self::START_FACING,
            exit,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_done(&self) -> bool {
        self.position == self.exit
    }

    /// Take one step, marking the cell stood on afterwards
    ///
    /// Returns `None` once the exit has been reached.
    pub fn step(&mut self, grid: &mut Grid) -> Result<Option<Step>, MazeError> {
        if self.is_done() {
            return Ok(None);
        }

        let right = self.facing.turn_right();
        let action = if grid.is_open(self.position, right)? {
            self.facing = right;
            self.move_forward(grid)?;
            Action::TurnRight
        } else if grid.is_open(self.position, self.facing)? {
            self.move_forward(grid)?;
            Action::Forward
        } else {
            self.facing = self.facing.turn_left();
            Action::TurnLeft
        };
        grid.mark_on_path(self.position)?;

        let step = Step {
            position: self.position,
            facing: self.facing,
            action,
        };
        trace!(?step, "solver step");
        Ok(Some(step))
    }

    fn move_forward(&mut self, grid: &Grid) -> Result<(), MazeError> {
        // An open wall never faces the boundary, so this only fails on a
        // hand-made grid.
        self.position = self
            .facing
            .step_from(self.position, grid.rows(), grid.cols())
            .ok_or(MazeError::OutOfBounds {
                row: self.position.row,
                col: self.position.col,
                rows: grid.rows(),
                cols: grid.cols(),
            })?;
        Ok(())
    }
}

/// Route taken from entry to exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSolution {
    pub entry: Point,
    pub exit: Point,
    /// Every step taken, turns in place included
    pub steps: Vec<Step>,
}

impl MazeSolution {
    /// Number of moves between cells
    pub fn moves(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.action != Action::TurnLeft)
            .count()
    }

    /// Print report
    pub fn print_report(&self) {
        println!(
            "Exit found at ({}, {}) after {} steps ({} moves).",
            self.exit.row,
            self.exit.col,
            self.steps.len(),
            self.moves()
        );
    }
}

/// Walk from `entry` to `exit`, marking the cells on the way
pub fn solve(grid: &mut Grid, entry: Point, exit: Point) -> Result<MazeSolution, MazeError> {
    solve_with(grid, entry, exit, |_, _| ())
}

/// Walk from `entry` to `exit`, calling `observer` after every step
///
/// The observer gets the step and the grid with the path marked so far.
///
/// A walker has `4 * rows * cols` distinct states; if the exit is not
/// reached within that many steps the walk is going round in circles and
/// [MazeError::NoExit] is returned. This does not happen in a perfect maze.
pub fn solve_with<F>(
    grid: &mut Grid,
    entry: Point,
    exit: Point,
    mut observer: F,
) -> Result<MazeSolution, MazeError>
where
    F: FnMut(&Step, &Grid),
{
    let mut walker = WallFollower::new(grid, entry, exit)?;
    let max_steps = grid.rows().saturating_mul(grid.cols()).saturating_mul(4);
    let mut steps = Vec::new();

    while let Some(step) = walker.step(grid)? {
        observer(&step, grid);
        steps.push(step);
        if steps.len() > max_steps && !walker.is_done() {
            return Err(MazeError::NoExit { steps: steps.len() });
        }
    }

    Ok(MazeSolution { entry, exit, steps })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{solve, solve_with, Action, Step, WallFollower};
    use crate::{
        maze_generator::tests::snake_3x3, Direction, Grid, MazeError, MazeGenerator, Point,
    };

    fn step(row: usize, col: usize, facing: Direction, action: Action) -> Step {
        Step {
            position: Point::new(row, col),
            facing,
            action,
        }
    }

    /// 2x2 grid with every interior wall removed
    fn open_2x2() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        let [a, b, c, d] = [(0, 0), (0, 1), (1, 1), (1, 0)].map(|(r, c)| Point::new(r, c));
        for (p, q) in [(a, b), (b, c), (c, d), (d, a)] {
            grid.remove_wall(p, q).unwrap();
        }
        grid
    }

    /// On-path cells form one connected region through open walls
    fn assert_path_connected(grid: &Grid, entry: Point, exit: Point) {
        let on_path = grid
            .cells()
            .filter(|c| c.is_on_path())
            .map(|c| c.position())
            .collect_vec();
        assert!(on_path.contains(&entry));
        assert!(on_path.contains(&exit));

        let mut reached = vec![entry];
        let mut frontier = vec![entry];
        while let Some(p) = frontier.pop() {
            for dir in Direction::CLOCKWISE {
                if !grid.is_open(p, dir).unwrap() {
                    continue;
                }
                let next = dir.step_from(p, grid.rows(), grid.cols()).unwrap();
                if on_path.contains(&next) && !reached.contains(&next) {
                    reached.push(next);
                    frontier.push(next);
                }
            }
        }
        assert_eq!(reached.len(), on_path.len());
    }

    #[test]
    fn open_square_reaches_opposite_corner() {
        let mut grid = open_2x2();
        let solution = solve(&mut grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(
            solution.steps,
            vec![
                step(1, 0, Direction::Down, Action::TurnRight),
                step(1, 0, Direction::Right, Action::TurnLeft),
                step(1, 1, Direction::Right, Action::Forward),
            ]
        );
        assert_eq!(solution.moves(), 2);
        assert!(!grid.cell_at(0, 1).unwrap().is_on_path());
    }

    #[test]
    fn snake_maze_step_sequence() {
        let mut grid = snake_3x3();
        let solution = solve(&mut grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(
            solution.steps,
            vec![
                step(1, 0, Direction::Down, Action::TurnRight),
                step(2, 0, Direction::Down, Action::Forward),
                step(2, 0, Direction::Right, Action::TurnLeft),
                step(2, 1, Direction::Right, Action::Forward),
                step(2, 1, Direction::Up, Action::TurnLeft),
                step(1, 1, Direction::Up, Action::Forward),
                step(0, 1, Direction::Up, Action::Forward),
                step(0, 2, Direction::Right, Action::TurnRight),
                step(1, 2, Direction::Down, Action::TurnRight),
                step(2, 2, Direction::Down, Action::Forward),
            ]
        );
        assert!(grid.cells().all(|c| c.is_on_path()));
    }

    #[test]
    fn entry_equal_to_exit_takes_no_steps() {
        let mut grid = MazeGenerator::new(Some(1)).generate(3, 3).unwrap();
        let p = Point::new(1, 1);
        let solution = solve(&mut grid, p, p).unwrap();
        assert!(solution.steps.is_empty());
        assert!(grid.cell_at(1, 1).unwrap().is_on_path());
        assert_eq!(grid.cells().filter(|c| c.is_on_path()).count(), 1);
    }

    #[test]
    fn single_cell_maze() {
        let mut grid = MazeGenerator::new(Some(0)).generate(1, 1).unwrap();
        let p = Point::new(0, 0);
        assert!(solve(&mut grid, p, p).unwrap().steps.is_empty());
    }

    #[test]
    fn points_outside_the_grid_are_rejected() {
        let mut grid = MazeGenerator::new(Some(0)).generate(2, 3).unwrap();
        assert_eq!(
            solve(&mut grid, Point::new(0, 0), Point::new(2, 2)),
            Err(MazeError::OutOfBounds {
                row: 2,
                col: 2,
                rows: 2,
                cols: 3
            })
        );
        assert!(matches!(
            solve(&mut grid, Point::new(0, 3), Point::new(1, 2)),
            Err(MazeError::OutOfBounds { col: 3, .. })
        ));
    }

    #[test]
    fn random_mazes_are_solved_between_any_corners() {
        for seed in 0..20 {
            let base = MazeGenerator::new(Some(seed)).generate(8, 11).unwrap();
            let corners = [(0, 0), (0, 10), (7, 0), (7, 10), (4, 5)]
                .map(|(r, c)| Point::new(r, c));
            for (entry, exit) in corners.into_iter().tuple_combinations() {
                let mut grid = base.clone();
                let solution = solve(&mut grid, entry, exit).unwrap();
                assert_eq!(solution.steps.last().unwrap().position, exit);
                assert!(solution.steps.len() <= 4 * 8 * 11);
                assert_path_connected(&grid, entry, exit);
            }
        }
    }

    #[test]
    fn consecutive_positions_are_adjacent() {
        let mut grid = MazeGenerator::new(Some(9)).generate(10, 10).unwrap();
        let entry = Point::new(0, 0);
        let solution = solve(&mut grid, entry, Point::new(9, 9)).unwrap();
        let positions = std::iter::once(entry)
            .chain(solution.steps.iter().map(|s| s.position))
            .collect_vec();
        for (a, b) in positions.iter().tuple_windows() {
            match Direction::between(*a, *b) {
                Some(dir) => assert!(grid.is_open(*a, dir).unwrap()),
                None => assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn solving_is_deterministic() {
        let base = MazeGenerator::new(Some(5)).generate(15, 9).unwrap();
        let (entry, exit) = (Point::new(0, 0), Point::new(14, 8));
        let mut first = base.clone();
        let mut second = base.clone();
        assert_eq!(
            solve(&mut first, entry, exit).unwrap(),
            solve(&mut second, entry, exit).unwrap()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn observer_sees_every_step() {
        let mut grid = snake_3x3();
        let mut seen = Vec::new();
        let solution = solve_with(&mut grid, Point::new(0, 0), Point::new(2, 2), |s, g| {
            assert!(g.cell_at(s.position.row, s.position.col).unwrap().is_on_path());
            seen.push(s.position);
        })
        .unwrap();
        assert_eq!(seen.len(), solution.steps.len());
        assert_eq!(seen.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn walled_in_exit_is_reported() {
        let mut grid = Grid::new(1, 2).unwrap();
        assert_eq!(
            solve(&mut grid, Point::new(0, 0), Point::new(0, 1)),
            Err(MazeError::NoExit { steps: 9 })
        );
    }

    #[test]
    fn walker_stops_at_exit() {
        let mut grid = snake_3x3();
        let mut walker = WallFollower::new(&mut grid, Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(walker.facing(), Direction::Right);
        let first = walker.step(&mut grid).unwrap();
        assert_eq!(first, Some(step(1, 0, Direction::Down, Action::TurnRight)));
        assert!(walker.is_done());
        assert_eq!(walker.step(&mut grid).unwrap(), None);
        assert_eq!(walker.position(), Point::new(1, 0));
    }
}
