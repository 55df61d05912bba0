//! Solves batches of random Lights Out grids and reports timings.
//!
//! Every sample is generated from its own seeded PCG stream, so a run is
//! reproducible regardless of how rayon schedules the work.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example solve_random
//! ```
//!
//! Pick board sizes and the number of grids per size:
//!
//! ```sh
//! cargo run --release --example solve_random -- --size 4 --size 5 --samples 10000
//! ```
//!
//! Compare against single back substitution:
//!
//! ```sh
//! cargo run --release --example solve_random -- --mode any
//! ```
//!
//! Set `RUST_LOG=debug` to see one line per solved grid.

use std::{process, time::Duration};

use clap::{Parser, ValueEnum};
use lightsout_core::{Board, Grid};
use lightsout_solver::{PressSolver, SolveMode};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Any,
    Optimal,
}

impl From<ModeArg> for SolveMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Any => SolveMode::Any,
            ModeArg::Optimal => SolveMode::Optimal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length to test. Repeatable. Defaults to 3 through 8.
    #[arg(short, long = "size", value_name = "N", num_args = 1..)]
    sizes: Vec<usize>,

    /// Random grids to solve per size.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    samples: usize,

    /// Seed for grid generation.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Kind of solution to search for.
    #[arg(long, value_name = "MODE", default_value = "optimal")]
    mode: ModeArg,
}

#[derive(Debug, Default)]
struct Report {
    solved: usize,
    unsolvable: usize,
    total_presses: usize,
    elapsed: Duration,
    slowest: Duration,
}

impl Report {
    fn merge(mut self, other: Self) -> Self {
        self.solved += other.solved;
        self.unsolvable += other.unsolvable;
        self.total_presses += other.total_presses;
        self.elapsed += other.elapsed;
        self.slowest = self.slowest.max(other.slowest);
        self
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }
    let sizes = if args.sizes.is_empty() {
        (3..=8).collect()
    } else {
        args.sizes.clone()
    };
    if let Some(size) = sizes.iter().find(|&&size| size == 0) {
        eprintln!("Invalid board size: {size}");
        process::exit(2);
    }

    let solver = PressSolver::new(args.mode.into());
    println!("mode: {:?}, samples per size: {}", solver.mode(), args.samples);
    for size in sizes {
        let report = run_size(&solver, size, args.samples, args.seed);
        print_report(size, &report);
    }
}

fn run_size(solver: &PressSolver, size: usize, samples: usize, seed: u64) -> Report {
    (0..samples)
        .into_par_iter()
        .map(|sample| {
            let grid = random_grid(size, seed, sample);
            let mut report = Report::default();
            match solver.solve(&grid) {
                Ok(solution) => {
                    let mut board = Board::new(&grid);
                    for &index in solution.presses() {
                        board.press_index(index);
                    }
                    assert!(board.is_solved(), "solution does not solve {grid}");
                    report.solved = 1;
                    report.total_presses = solution.press_count();
                    report.elapsed = solution.stats().elapsed();
                    report.slowest = report.elapsed;
                }
                Err(_) => report.unsolvable = 1,
            }
            report
        })
        .reduce(Report::default, Report::merge)
}

fn random_grid(size: usize, seed: u64, sample: usize) -> Grid {
    let mut rng = Pcg64::seed_from_u64(seed.wrapping_add(sample as u64));
    let bits = (0..size * size)
        .map(|_| rng.random_bool(0.5))
        .collect::<Vec<_>>();
    Grid::from_bits(bits).expect("bit count is a perfect square")
}

#[expect(clippy::cast_precision_loss)]
fn print_report(size: usize, report: &Report) {
    println!("{size}x{size}:");
    println!("  solved:     {}", report.solved);
    println!("  unsolvable: {}", report.unsolvable);
    if report.solved > 0 {
        let average = report.elapsed.as_secs_f64() * 1000.0 / report.solved as f64;
        let presses = report.total_presses as f64 / report.solved as f64;
        println!("  average:    {average:.3} ms, {presses:.1} presses");
        println!(
            "  slowest:    {:.3} ms",
            report.slowest.as_secs_f64() * 1000.0
        );
    }
}
