// Boggle Solver – Finds every word hidden in a Boggle board
// Copyright (C) 2025  The Boggle Solver authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::process::ExitCode;
use boggle_solver::{dice, logging};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Prints a random board made by shaking the Boggle dice. The output
/// can be given to solve-boggle as the board file.
#[derive(Parser, Debug)]
#[command(name = "make-board")]
struct Args {
    /// Number of rows on the board
    #[arg(short, long, default_value_t = 4)]
    rows: usize,

    /// Number of columns on the board
    #[arg(short, long, default_value_t = 4)]
    columns: usize,

    /// Seed for the random number generator to make the same board
    /// again
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(rows = args.rows, columns = args.columns, seed = ?args.seed, "shaking dice");

    match dice::generate(args.rows, args.columns, &mut rng) {
        Ok(board) => {
            println!("{}", board);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
