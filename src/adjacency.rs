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

/// Returns whether two cells of a grid with the given number of
/// columns touch each other horizontally, vertically or diagonally.
/// A cell is never adjacent to itself.
pub fn cells_adjacent(columns: usize, a: usize, b: usize) -> bool {
    if a == b {
        return false;
    }

    let (row_a, col_a) = (a / columns, a % columns);
    let (row_b, col_b) = (b / columns, b % columns);

    row_a.abs_diff(row_b) <= 1 && col_a.abs_diff(col_b) <= 1
}

/// The adjacency relation of a board calculated up front. The
/// relation only depends on the size of the board so the same table
/// can be reused for any board with the same dimensions. Only the
/// neighbour list of each cell is stored so the table grows linearly
/// with the number of cells.
#[derive(Debug, Clone)]
pub struct AdjacencyTable {
    rows: usize,
    columns: usize,
    // The adjacent cells of each cell in ascending order
    neighbours: Box<[Vec<usize>]>,
}

impl AdjacencyTable {
    pub fn new(rows: usize, columns: usize) -> AdjacencyTable {
        let neighbours = (0..rows).flat_map(|row| {
            (0..columns).map(move |column| {
                let mut cells = Vec::with_capacity(8);

                for other_row in row.saturating_sub(1)..(row + 2).min(rows) {
                    for other_column in
                        column.saturating_sub(1)..(column + 2).min(columns)
                    {
                        if other_row != row || other_column != column {
                            cells.push(other_row * columns + other_column);
                        }
                    }
                }

                cells
            })
        }).collect::<Vec<_>>().into_boxed_slice();

        AdjacencyTable { rows, columns, neighbours }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.neighbours.len()
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        let n_cells = self.cell_count();

        assert!(a < n_cells && b < n_cells);

        cells_adjacent(self.columns, a, b)
    }

    pub fn neighbours(&self, cell: usize) -> &[usize] {
        &self.neighbours[cell]
    }
}
