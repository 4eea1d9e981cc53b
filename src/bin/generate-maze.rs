//! CLI for maze generation

use clap::Parser;
use maze_walker::{MazeGenerator, MazeView, PathStyle, Point};
use tracing::Level;

/// Print a perfect maze without solving it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log the seed and carving statistics
    #[arg(short, long)]
    verbose: bool,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate(args.rows, args.cols)?;
    let exit = Point::new(grid.rows() - 1, grid.cols() - 1);
    print!(
        "{}",
        MazeView::new(&grid, Point::new(0, 0), exit).style(PathStyle::Plain)
    );
    Ok(())
}
