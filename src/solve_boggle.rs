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

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use boggle_solver::{logging, search, Board, Dictionary, Searcher};
use clap::Parser;
use serde::Serialize;
use tracing::info;

/// Finds every word from a dictionary that can be made on a Boggle
/// board. Any of the board size or file options that are missing are
/// asked for on the terminal.
#[derive(Parser, Debug)]
#[command(name = "solve-boggle")]
struct Args {
    /// Number of rows on the board
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of columns on the board
    #[arg(short, long)]
    columns: Option<usize>,

    /// Word list with one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Board file with one row of letters per line
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Number of threads to search with. 0 uses every CPU.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Show the cells used to make each word
    #[arg(short, long)]
    paths: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct Settings {
    rows: usize,
    columns: usize,
    dictionary: PathBuf,
    board: PathBuf,
}

#[derive(Serialize)]
struct WordReport<'a> {
    word: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<(usize, usize)>>,
}

#[derive(Serialize)]
struct Report<'a> {
    rows: usize,
    columns: usize,
    words: Vec<WordReport<'a>>,
    elapsed_ms: f64,
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no answer given",
        ));
    }

    Ok(line.trim().to_string())
}

fn prompt_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<usize> {
    loop {
        let answer = prompt(input, output, question)?;

        match answer.parse::<usize>() {
            Ok(size) if size > 0 => break Ok(size),
            _ => writeln!(output, "“{}” isn’t a valid size", answer)?,
        }
    }
}

fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<PathBuf> {
    loop {
        let answer = prompt(input, output, question)?;

        if !answer.is_empty() {
            break Ok(PathBuf::from(answer));
        }
    }
}

// Fills in anything missing from the command line by asking for it
fn resolve_settings<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> io::Result<Settings> {
    if args.rows.is_none() || args.columns.is_none() {
        writeln!(output, "Enter the dimensions of the Boggle board")?;
    }

    let rows = match args.rows {
        Some(rows) => rows,
        None => prompt_size(
            input,
            output,
            "How many rows are on the board?",
        )?,
    };

    let columns = match args.columns {
        Some(columns) => columns,
        None => prompt_size(
            input,
            output,
            "How many columns are on the board?",
        )?,
    };

    let dictionary = match &args.dictionary {
        Some(path) => path.clone(),
        None => prompt_path(
            input,
            output,
            "Enter the path of the dictionary file to use",
        )?,
    };

    let board = match &args.board {
        Some(path) => path.clone(),
        None => prompt_path(
            input,
            output,
            "Enter the path of the board to solve",
        )?,
    };

    Ok(Settings { rows, columns, dictionary, board })
}

// Loads the dictionary and the board and searches it. Either load
// failing is reported on stderr and gives an empty result.
fn solve(
    settings: &Settings,
    args: &Args,
) -> Result<(Board, BTreeMap<String, Option<Vec<usize>>>), ()> {
    let dictionary = match Dictionary::from_file(&settings.dictionary) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid dictionary");
            eprintln!("{}: {}", settings.dictionary.display(), e);
            return Err(());
        },
    };

    info!(n_words = dictionary.len(), "dictionary loaded");

    let board = match Board::load_file(
        &settings.board,
        settings.rows,
        settings.columns,
    ) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid board");
            eprintln!("{}: {}", settings.board.display(), e);
            return Err(());
        },
    };

    let words: BTreeMap<String, Option<Vec<usize>>> = if args.paths {
        search::search_paths(&board, &dictionary)
            .into_iter()
            .map(|(word, path)| (word, Some(path)))
            .collect()
    } else {
        let searcher = Searcher::new(&board);

        let words = if args.threads == 1 {
            searcher.search(&dictionary)
        } else {
            searcher.search_parallel(&dictionary, args.threads)
        };

        words.into_iter().map(|word| (word, None)).collect()
    };

    Ok((board, words))
}

fn format_path(board: &Board, path: &[usize]) -> String {
    path.iter()
        .map(|&cell| {
            let (row, column) = board.index_to_position(cell);
            format!("({},{})", row, column)
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn print_words(
    board: Option<&Board>,
    words: &BTreeMap<String, Option<Vec<usize>>>,
    elapsed_ms: f64,
) {
    for (word, path) in words.iter() {
        match (board, path) {
            (Some(board), Some(path)) => {
                println!("{} {}", word, format_path(board, path));
            },
            _ => println!("{}", word),
        }
    }

    println!("{} words found", words.len());
    println!("Solution took {:.3} ms to execute", elapsed_ms);
}

fn make_report<'a>(
    settings: &Settings,
    board: Option<&Board>,
    words: &'a BTreeMap<String, Option<Vec<usize>>>,
    elapsed_ms: f64,
) -> Report<'a> {
    Report {
        rows: settings.rows,
        columns: settings.columns,
        words: words.iter().map(|(word, path)| {
            WordReport {
                word: word.as_str(),
                path: board.zip(path.as_ref()).map(|(board, path)| {
                    path.iter()
                        .map(|&cell| board.index_to_position(cell))
                        .collect()
                }),
            }
        }).collect(),
        elapsed_ms,
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    let settings = match resolve_settings(
        &args,
        &mut io::stdin().lock(),
        &mut io::stderr(),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let start_time = Instant::now();

    let (board, words, result) = match solve(&settings, &args) {
        Ok((board, words)) => (Some(board), words, ExitCode::SUCCESS),
        Err(()) => (None, BTreeMap::new(), ExitCode::FAILURE),
    };

    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if args.json {
        let report = make_report(&settings, board.as_ref(), &words, elapsed_ms);

        let mut stdout = io::stdout().lock();

        if let Err(e) = serde_json::to_writer_pretty(&mut stdout, &report)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(stdout))
        {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    } else {
        print_words(board.as_ref(), &words, elapsed_ms);
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(command_line: &[&str]) -> Args {
        Args::parse_from(
            std::iter::once("solve-boggle").chain(command_line.iter().copied())
        )
    }

    #[test]
    fn everything_on_command_line() {
        let args = args(&["-r", "4", "-c", "5", "-d", "words.txt", "-b", "b.txt"]);
        let mut output = Vec::<u8>::new();

        let settings = resolve_settings(
            &args,
            &mut "".as_bytes(),
            &mut output,
        ).unwrap();

        assert_eq!(
            settings,
            Settings {
                rows: 4,
                columns: 5,
                dictionary: PathBuf::from("words.txt"),
                board: PathBuf::from("b.txt"),
            },
        );
        // Nothing should be asked
        assert!(output.is_empty());
        assert_eq!(args.threads, 1);
        assert!(!args.paths);
        assert!(!args.json);
    }

    #[test]
    fn ask_for_everything() {
        let args = args(&[]);
        let mut output = Vec::<u8>::new();

        let settings = resolve_settings(
            &args,
            &mut "3\nlots\n0\n2\n\n  dict.txt  \nboard.txt\n".as_bytes(),
            &mut output,
        ).unwrap();

        assert_eq!(
            settings,
            Settings {
                rows: 3,
                columns: 2,
                dictionary: PathBuf::from("dict.txt"),
                board: PathBuf::from("board.txt"),
            },
        );

        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Enter the dimensions of the Boggle board\n"));
        assert!(output.contains("“lots” isn’t a valid size"));
        assert!(output.contains("“0” isn’t a valid size"));
    }

    #[test]
    fn ask_for_board_only() {
        let args = args(&["--rows", "2", "--columns", "2", "-d", "d.txt"]);
        let mut output = Vec::<u8>::new();

        let settings = resolve_settings(
            &args,
            &mut "b.txt\n".as_bytes(),
            &mut output,
        ).unwrap();

        assert_eq!(settings.board, PathBuf::from("b.txt"));
        assert_eq!(
            &String::from_utf8(output).unwrap(),
            "Enter the path of the board to solve\n",
        );
    }

    #[test]
    fn no_answer() {
        let args = args(&["-r", "2"]);

        let err = resolve_settings(
            &args,
            &mut "".as_bytes(),
            &mut Vec::<u8>::new(),
        ).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn options() {
        let args = args(&["-t", "0", "--paths", "--json"]);

        assert_eq!(args.threads, 0);
        assert!(args.paths);
        assert!(args.json);
    }

    #[test]
    fn report() {
        let settings = Settings {
            rows: 2,
            columns: 2,
            dictionary: PathBuf::from("d"),
            board: PathBuf::from("b"),
        };
        let board = Board::parse("ca\nts", 2, 2).unwrap();

        let mut words = BTreeMap::new();
        words.insert("at".to_string(), Some(vec![1, 2]));
        words.insert("cat".to_string(), None);

        assert_eq!(format_path(&board, &[1, 2]), "(0,1) (1,0)");

        let report = make_report(&settings, Some(&board), &words, 1.5);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "rows": 2,
                "columns": 2,
                "words": [
                    { "word": "at", "path": [[0, 1], [1, 0]] },
                    { "word": "cat" },
                ],
                "elapsed_ms": 1.5,
            }),
        );

        let empty = BTreeMap::new();
        let report = make_report(&settings, None, &empty, 0.0);

        assert_eq!(
            serde_json::to_value(&report).unwrap()["words"],
            serde_json::json!([]),
        );
    }
}
