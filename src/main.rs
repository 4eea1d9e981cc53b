//! CLI for generating and solving a maze

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use itertools::Itertools;
use maze_walker::{solve_with, MazeGenerator, MazeView, PathStyle, Point, Step};
use tracing::{info, Level};

/// Generate a perfect maze and walk out of it with the right-hand rule
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows; asked on stdin together with columns if missing
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Number of columns; asked on stdin together with rows if missing
    #[arg(long, requires = "rows")]
    cols: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Redraw the maze after every step of the solver
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 300)]
    frame_length: u64,

    /// Draw the path without colours
    #[arg(long)]
    no_color: bool,

    /// Log more, repeat for even more. Solver positions are logged by
    /// default.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Parse "rows cols"
fn parse_dimensions(line: &str) -> anyhow::Result<(usize, usize)> {
    let numbers = line
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .context("dimensions must be two positive integers")?;
    match numbers.into_iter().collect_tuple() {
        Some(dims) => Ok(dims),
        None => bail!("expected two numbers, rows and columns"),
    }
}

/// Ask for "rows cols" on stdin
fn prompt_dimensions() -> anyhow::Result<(usize, usize)> {
    print!("Enter the number of rows and columns of the maze: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    parse_dimensions(&line)
}

/// Report where the solver stands after a step
fn report_step(step: &Step) {
    info!(
        row = step.position.row,
        col = step.position.col,
        "current position"
    );
}

/// Generate a maze, print it, solve it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();

    let (rows, cols) = match (args.rows, args.cols) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => prompt_dimensions()?,
    };
    if rows == 0 || cols == 0 {
        bail!("maze needs at least one row and one column, got {rows}x{cols}");
    }

    let mut generator = MazeGenerator::new(args.seed);
    let mut grid = generator.generate(rows, cols)?;
    info!(seed = ?generator.seed(), rows, cols, "maze generated");

    let entry = Point::new(0, 0);
    let exit = Point::new(rows - 1, cols - 1);
    let style = if args.no_color {
        PathStyle::Plain
    } else {
        PathStyle::Gradient
    };
    println!("{}", MazeView::new(&grid, entry, exit).style(style));

    let solution = solve_with(&mut grid, entry, exit, |step, grid| {
        report_step(step);
        if args.playback {
            thread::sleep(Duration::from_millis(args.frame_length));
            print!("\x1B[2J\x1B[1;1H");
            println!("{}", MazeView::new(grid, entry, exit).style(style));
        }
    })?;

    if !args.playback {
        println!("{}", MazeView::new(&grid, entry, exit).style(style));
    }
    solution.print_report();
    Ok(())
}
