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

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use super::adjacency::AdjacencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    letters: Box<[char]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedCharacter(usize, char),
    LineTooShort(usize),
    NotEnoughLines,
    EmptyBoard,
    BoardTooBig,
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Format(ParseError),
}

/// Returns the number of cells on a board of the given size, or an
/// error if the board would have no cells or more cells than can be
/// counted.
pub fn board_cell_count(rows: usize, columns: usize) -> Result<usize, ParseError> {
    if rows == 0 || columns == 0 {
        return Err(ParseError::EmptyBoard);
    }

    rows.checked_mul(columns).ok_or(ParseError::BoardTooBig)
}

// Collects the letters of a board one row at a time
struct BoardBuilder {
    rows: usize,
    columns: usize,
    letters: Vec<char>,
    line_num: usize,
}

impl BoardBuilder {
    fn new(rows: usize, columns: usize) -> Result<BoardBuilder, ParseError> {
        board_cell_count(rows, columns)?;

        // The letters vector grows as the lines are read so a bogus
        // size can’t make it allocate up front
        Ok(BoardBuilder {
            rows,
            columns,
            letters: Vec::new(),
            line_num: 0,
        })
    }

    // Uses the first `columns` characters of the row, ignoring
    // whitespace and anything after them.
    fn add_row<I>(&mut self, chars: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = char>
    {
        let mut n_letters = 0;

        for ch in chars.into_iter()
            .filter(|ch| !ch.is_whitespace())
            .take(self.columns)
        {
            if !ch.is_ascii_alphabetic() {
                return Err(ParseError::UnexpectedCharacter(self.line_num, ch));
            }

            self.letters.push(ch.to_ascii_lowercase());
            n_letters += 1;
        }

        if n_letters < self.columns {
            return Err(ParseError::LineTooShort(self.line_num));
        }

        self.line_num += 1;

        Ok(())
    }

    fn finish(self) -> Result<Board, ParseError> {
        if self.line_num < self.rows {
            return Err(ParseError::NotEnoughLines);
        }

        Ok(Board {
            rows: self.rows,
            columns: self.columns,
            letters: self.letters.into_boxed_slice(),
        })
    }
}

impl Board {
    /// Makes a board out of a list of letters in row-major order.
    pub fn from_letters(
        rows: usize,
        columns: usize,
        letters: &[char],
    ) -> Result<Board, ParseError> {
        let mut builder = BoardBuilder::new(rows, columns)?;

        for row in letters.chunks(columns).take(rows) {
            builder.add_row(row.iter().copied())?;
        }

        builder.finish()
    }

    /// Parses a board with one row per line. Only the first `rows`
    /// lines are used.
    pub fn parse(s: &str, rows: usize, columns: usize) -> Result<Board, ParseError> {
        let mut builder = BoardBuilder::new(rows, columns)?;

        for line in s.lines().take(rows) {
            builder.add_row(line.chars())?;
        }

        builder.finish()
    }

    /// Reads a board from exactly `rows` lines of the reader. Nothing
    /// after that is read.
    pub fn load<R: BufRead>(
        reader: R,
        rows: usize,
        columns: usize,
    ) -> Result<Board, LoadError> {
        let mut builder = BoardBuilder::new(rows, columns)?;

        for line in reader.lines().take(rows) {
            builder.add_row(line?.chars())?;
        }

        Ok(builder.finish()?)
    }

    pub fn load_file<P: AsRef<Path>>(
        path: P,
        rows: usize,
        columns: usize,
    ) -> Result<Board, LoadError> {
        let file = File::open(path)?;

        Board::load(BufReader::new(file), rows, columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn letter_at(&self, row: usize, column: usize) -> char {
        self.letters[self.position_to_index(row, column)]
    }

    pub fn letter_at_index(&self, index: usize) -> char {
        self.letters[index]
    }

    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        assert!(index < self.cell_count());

        (index / self.columns, index % self.columns)
    }

    pub fn position_to_index(&self, row: usize, column: usize) -> usize {
        assert!(row < self.rows && column < self.columns);

        row * self.columns + column
    }

    pub fn adjacency(&self) -> AdjacencyTable {
        AdjacencyTable::new(self.rows, self.columns)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.letters.chunks(self.columns).enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for &letter in row {
                write!(f, "{}", letter)?;
            }
        }

        Ok(())
    }
}

fn format_character(ch: char, f: &mut fmt::Formatter) -> fmt::Result {
    if ch.is_control() {
        write!(f, "U+{:04x}", ch as u32)
    } else {
        write!(f, "{}", ch)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedCharacter(line_num, ch) => {
                write!(f, "line {}: unexpected character: ", line_num + 1)?;
                format_character(*ch, f)
            },
            ParseError::LineTooShort(line_num) => {
                write!(f, "line {}: line too short", line_num + 1)
            },
            ParseError::NotEnoughLines => write!(f, "not enough lines"),
            ParseError::EmptyBoard => write!(f, "board has no cells"),
            ParseError::BoardTooBig => write!(f, "board is too big"),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => e.fmt(f),
            LoadError::Format(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> LoadError {
        LoadError::Format(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let board = Board::parse("CaT\nsUn\nfOx", 3, 3).unwrap();

        assert_eq!(board.rows(), 3);
        assert_eq!(board.columns(), 3);
        assert_eq!(board.cell_count(), 9);
        assert_eq!(&board.to_string(), "cat\nsun\nfox");

        assert_eq!(board.letter_at(0, 0), 'c');
        assert_eq!(board.letter_at(1, 1), 'u');
        assert_eq!(board.letter_at(2, 2), 'x');
        assert_eq!(board.letter_at_index(3), 's');
        assert_eq!(board.letters(), &['c', 'a', 't', 's', 'u', 'n', 'f', 'o', 'x']);
    }

    #[test]
    fn whitespace() {
        let board = Board::parse("  c a\t\n t  s  ", 2, 2).unwrap();

        assert_eq!(&board.to_string(), "ca\nts");
    }

    #[test]
    fn extra_characters_ignored() {
        // Anything after the required columns and rows is skipped
        let board = Board::parse("abc!\ndef?\nthis isn’t read", 2, 3).unwrap();

        assert_eq!(&board.to_string(), "abc\ndef");
    }

    #[test]
    fn not_rectangular() {
        let board = Board::parse("abcd\nefgh", 2, 4).unwrap();

        assert_eq!(board.index_to_position(0), (0, 0));
        assert_eq!(board.index_to_position(3), (0, 3));
        assert_eq!(board.index_to_position(4), (1, 0));
        assert_eq!(board.index_to_position(7), (1, 3));
        assert_eq!(board.position_to_index(1, 2), 6);

        for index in 0..board.cell_count() {
            let (row, column) = board.index_to_position(index);
            assert_eq!(board.position_to_index(row, column), index);
        }
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            "line 2: unexpected character: -",
            &Board::parse("abc\na-c", 2, 3).unwrap_err().to_string(),
        );
        assert_eq!(
            "line 1: unexpected character: 4",
            &Board::parse("a4", 1, 2).unwrap_err().to_string(),
        );
        assert_eq!(
            "line 1: unexpected character: ĥ",
            &Board::parse("ĥa", 1, 2).unwrap_err().to_string(),
        );
        assert_eq!(
            "line 1: unexpected character: U+0000",
            &Board::parse("a\0", 1, 2).unwrap_err().to_string(),
        );
    }

    #[test]
    fn line_too_short() {
        assert_eq!(
            Board::parse("ca\nt", 2, 2).unwrap_err(),
            ParseError::LineTooShort(1),
        );
        assert_eq!(
            "line 1: line too short",
            &Board::parse("c a", 1, 3).unwrap_err().to_string(),
        );
    }

    #[test]
    fn not_enough_lines() {
        assert_eq!(
            Board::parse("ca\nts", 3, 2).unwrap_err(),
            ParseError::NotEnoughLines,
        );
        assert_eq!(
            Board::parse("", 1, 1).unwrap_err(),
            ParseError::NotEnoughLines,
        );
    }

    #[test]
    fn empty_board() {
        assert_eq!(
            Board::parse("abc", 0, 3).unwrap_err(),
            ParseError::EmptyBoard,
        );
        assert_eq!(
            Board::parse("abc", 1, 0).unwrap_err(),
            ParseError::EmptyBoard,
        );
        assert_eq!(
            Board::from_letters(0, 0, &[]).unwrap_err(),
            ParseError::EmptyBoard,
        );
    }

    #[test]
    fn huge_board() {
        assert_eq!(
            Board::parse("ab", usize::MAX, 2).unwrap_err(),
            ParseError::BoardTooBig,
        );
        assert_eq!(
            Board::parse("ab\ncd", 2, usize::MAX).unwrap_err(),
            ParseError::BoardTooBig,
        );
        assert_eq!(
            &ParseError::BoardTooBig.to_string(),
            "board is too big",
        );

        // Sizes that fit in a usize shouldn’t allocate anything before
        // the lines are read
        assert_eq!(
            Board::parse("ab\ncd", 1 << 62, 2).unwrap_err(),
            ParseError::NotEnoughLines,
        );
        assert!(matches!(
            Board::load("ab\ncd\n".as_bytes(), 1 << 40, 1 << 20).unwrap_err(),
            LoadError::Format(ParseError::LineTooShort(0)),
        ));
        assert_eq!(
            board_cell_count(4_611_686_018_427_387_904, 4),
            Err(ParseError::BoardTooBig),
        );
        assert_eq!(board_cell_count(3, 4), Ok(12));
    }

    #[test]
    fn from_letters() {
        let board = Board::from_letters(2, 2, &['C', 'a', 't', 's']).unwrap();

        assert_eq!(board, Board::parse("ca\nts", 2, 2).unwrap());

        assert_eq!(
            Board::from_letters(2, 2, &['c', 'a', 't']).unwrap_err(),
            ParseError::LineTooShort(1),
        );
        assert_eq!(
            Board::from_letters(2, 2, &['c', 'a']).unwrap_err(),
            ParseError::NotEnoughLines,
        );
        assert_eq!(
            Board::from_letters(1, 2, &['c', '1']).unwrap_err(),
            ParseError::UnexpectedCharacter(0, '1'),
        );
    }

    #[test]
    fn load() {
        let board = Board::load("xy\nzw\n".as_bytes(), 2, 2).unwrap();

        assert_eq!(&board.to_string(), "xy\nzw");

        match Board::load("xy\n".as_bytes(), 2, 2) {
            Err(LoadError::Format(ParseError::NotEnoughLines)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        match Board::load_file("/there/is/no/board/here.txt", 4, 4) {
            Err(LoadError::Io(_)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    #[should_panic]
    fn letter_out_of_range() {
        let board = Board::parse("ca\nts", 2, 2).unwrap();

        board.letter_at(0, 2);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let board = Board::parse("ca\nts", 2, 2).unwrap();

        board.index_to_position(4);
    }
}
