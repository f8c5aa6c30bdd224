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

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use boggle_solver::{logging, Dictionary};
use clap::Parser;

/// Prints the words that a dictionary file would contain after
/// loading, in alphabetical order and lowercase.
#[derive(Parser, Debug)]
#[command(name = "dump-words")]
struct Args {
    /// Word list with one word per line
    dictionary: PathBuf,
}

fn dump_words(
    dictionary: &Dictionary,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut iterator = dictionary.words();

    while let Some(word) = iterator.next() {
        writeln!(output, "{}", word)?;
    }

    output.flush()
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    let mut dictionary = Dictionary::new();

    let stats = match dictionary.load_file(&args.dictionary) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}: {}", args.dictionary.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let mut output = BufWriter::new(io::stdout().lock());

    if let Err(e) = dump_words(&dictionary, &mut output) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    eprintln!(
        "{} words, {} duplicates, {} rejected, {} trie nodes",
        stats.added,
        stats.duplicates,
        stats.rejected,
        dictionary.n_nodes(),
    );

    ExitCode::SUCCESS
}
