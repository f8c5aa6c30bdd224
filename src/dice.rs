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

use rand::Rng;
use rand::seq::SliceRandom;
use super::board::{self, Board, ParseError};

// The sixteen dice of the classic game. The real Q face shows “Qu”
// but a cell can only hold one letter so it is just a Q here.
pub const DICE: [&str; 16] = [
    "aaciot", "abilty", "abjmoq", "acdemp",
    "acelrs", "adenvz", "ahmors", "biforx",
    "denosw", "dknotu", "eefhiy", "egkluy",
    "egintv", "ehinps", "elpstu", "gilruw",
];

fn roll<R: Rng + ?Sized>(die: &str, rng: &mut R) -> char {
    let faces = die.as_bytes();

    faces[rng.gen_range(0..faces.len())] as char
}

/// Makes a random board by shaking the dice into the grid. Boards
/// with more than sixteen cells are filled by shaking the set of dice
/// again for each group of sixteen cells.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<Board, ParseError> {
    let n_cells = board::board_cell_count(rows, columns)?;
    let mut dice = DICE;
    let mut letters = Vec::new();

    while letters.len() < n_cells {
        dice.shuffle(rng);

        for die in dice.iter().take(n_cells - letters.len()) {
            letters.push(roll(die, rng));
        }
    }

    Board::from_letters(rows, columns, &letters)
}
