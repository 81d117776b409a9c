//! Prints line statistics for hypercube grids.
//!
//! # Usage
//!
//! Describe a single grid: cell and line counts, lines per extent, and the
//! fewest and most lines through any cell.
//!
//! ```sh
//! cargo run -p hyperoxo-lines --example line_stats -- --dim 3 --size 4
//! ```
//!
//! Compare built counts with the closed form for every grid up to a bound,
//! building the grids in parallel:
//!
//! ```sh
//! cargo run -p hyperoxo-lines --example line_stats -- --max-dim 5 --max-size 5
//! ```
//!
//! Run every structural check, and raise the line list ceiling:
//!
//! ```sh
//! cargo run -p hyperoxo-lines --example line_stats -- --dim 6 --size 5 --verify full --max-line-cells 1000000000
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to see assembly progress.

use std::process;

use clap::{Parser, ValueEnum};
use hyperoxo_core::{Limits, count};
use hyperoxo_lines::{BuildOptions, Hypercube, LineError, Verification};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VerifyKind {
    Count,
    Full,
}

impl From<VerifyKind> for Verification {
    fn from(kind: VerifyKind) -> Self {
        match kind {
            VerifyKind::Count => Self::Count,
            VerifyKind::Full => Self::Full,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of axes.
    #[arg(short, long, value_name = "D", default_value_t = 3)]
    dim: usize,

    /// Cells along each axis.
    #[arg(short, long, value_name = "N", default_value_t = 4)]
    size: usize,

    /// Print a table for every dimension up to this one instead.
    #[arg(long, value_name = "D", requires = "max_size")]
    max_dim: Option<usize>,

    /// Print a table for every size up to this one instead.
    #[arg(long, value_name = "N", requires = "max_dim")]
    max_size: Option<usize>,

    /// Extract diagonals on the thread pool.
    #[arg(long)]
    parallel: bool,

    /// Checks to run on the assembled lines.
    #[arg(long, value_name = "LEVEL", default_value = "count")]
    verify: VerifyKind,

    /// Largest grid to build, in cells.
    #[arg(long, value_name = "CELLS", default_value_t = Limits::DEFAULT_MAX_CELLS)]
    max_cells: usize,

    /// Largest line list to build, in cell references.
    #[arg(long, value_name = "REFS", default_value_t = Limits::DEFAULT_MAX_LINE_CELLS)]
    max_line_cells: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let options = BuildOptions::default()
        .with_limits(
            Limits::default()
                .with_max_cells(args.max_cells)
                .with_max_line_cells(args.max_line_cells),
        )
        .with_parallel(args.parallel)
        .with_verification(args.verify.into());

    let result = match (args.max_dim, args.max_size) {
        (Some(max_dim), Some(max_size)) => {
            print_table(max_dim, max_size, &options);
            Ok(())
        }
        _ => print_grid(args.dim, args.size, &options),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn print_grid(dim: usize, size: usize, options: &BuildOptions) -> Result<(), LineError> {
    let cube = Hypercube::with_options(dim, size, options)?;

    println!("Grid h({dim}, {size}):");
    println!("  cells: {}", cube.cell_count());
    println!("  lines: {}", cube.line_count());
    println!();

    println!("Lines by extent:");
    for (extent, lines) in cube.lines_grouped_by_extent() {
        println!("  {extent}: {}", lines.len());
    }
    println!();

    let memberships: Vec<_> = cube
        .cell_lines()
        .iter()
        .map(|(cell, ids)| (ids.len(), cell))
        .collect();
    let fewest = memberships.iter().min();
    let most = memberships.iter().max();
    println!("Lines through a cell:");
    if let (Some(&(min, min_cell)), Some(&(max, max_cell))) = (fewest, most) {
        let grid = cube.grid();
        println!("  fewest: {min} at {}", grid.unflatten_unchecked(min_cell));
        println!("  most: {max} at {}", grid.unflatten_unchecked(max_cell));
    }
    Ok(())
}

fn print_table(max_dim: usize, max_size: usize, options: &BuildOptions) {
    let params: Vec<(usize, usize)> = (1..=max_dim)
        .flat_map(|dim| (1..=max_size).map(move |size| (dim, size)))
        .collect();
    // Each grid builds sequentially; the table itself is spread over the pool.
    let options = options.with_parallel(false);
    let rows: Vec<_> = params
        .into_par_iter()
        .map(|(dim, size)| {
            let built = Hypercube::with_options(dim, size, &options).map(|cube| cube.line_count());
            (dim, size, count::num_lines(dim, size), built)
        })
        .collect();

    println!(
        "{:>4} {:>4} {:>12} {:>12}",
        "d", "n", "closed form", "built"
    );
    for (dim, size, expected, built) in rows {
        let expected = expected.map_or_else(|| "overflow".to_owned(), |c| c.to_string());
        let built = match built {
            Ok(count) => count.to_string(),
            Err(err) if err.is_grid() => "skipped".to_owned(),
            Err(err) => format!("FAILED: {err}"),
        };
        println!("{dim:>4} {size:>4} {expected:>12} {built:>12}");
    }
}
