//! Maze generation

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use tracing::debug;

use crate::{Grid, MazeError, Point};

/// Source of the random choices made while carving
pub trait RandomSource {
    /// Uniformly distributed index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Perfect maze generator, carving passages with randomized depth-first
/// search.
pub struct MazeGenerator<R = StdRng> {
    random: R,
    seed: Option<u64>,
}

impl MazeGenerator<StdRng> {
    /// Generator with a seeded random source
    ///
    /// Without a seed, one is drawn from the thread-local generator and
    /// remembered, so that any maze can be generated again.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        debug!(seed, "seeded maze generator");
        Self {
            random: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl<R: RandomSource> MazeGenerator<R> {
    /// Generator driven by an arbitrary random source
    pub fn with_source(random: R) -> Self {
        Self { random, seed: None }
    }

    /// Seed of the underlying random generator, if it was seeded
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate a perfect `rows` x `cols` maze, carved from the top-left
    /// corner.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        self.carve(&mut grid, Point::new(0, 0))?;
        Ok(grid)
    }

    /// Carve passages into `grid`, starting from `start`
    ///
    /// Uses an explicit stack instead of recursion. The top of the stack is
    /// the current cell: if it has unvisited neighbours, one of them is
    /// chosen at random, the wall between is removed and the neighbour is
    /// pushed. Otherwise the cell is popped and the search backtracks.
    ///
    /// On a fresh grid this visits every cell exactly once, and the
    /// resulting passages form a spanning tree.
    pub fn carve(&mut self, grid: &mut Grid, start: Point) -> Result<(), MazeError> {
        grid.mark_visited(start)?;
        let mut stack = Vec::with_capacity(grid.rows() * grid.cols());
        stack.push(start);
        let mut carved = 0usize;

        while let Some(&current) = stack.last() {
            let neighbors = grid.neighbors_unvisited(current)?;
            if neighbors.is_empty() {
                stack.pop();
                continue;
            }
            let chosen = neighbors[self.random.index(neighbors.len())];
            grid.remove_wall(current, chosen)?;
            grid.mark_visited(chosen)?;
            stack.push(chosen);
            carved += 1;
        }

        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            carved,
            "maze carved"
        );
        Ok(())
    }
}
