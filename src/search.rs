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

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::thread;
use tracing::{debug, trace};
use super::adjacency::AdjacencyTable;
use super::board::Board;
use super::dictionary::{self, Dictionary};

// The cells visited so far while building a word. A cell can only
// be used once per word, even if another cell has the same letter.
struct Path {
    word: String,
    cells: Vec<usize>,
    visited: Box<[bool]>,
    // Number of cells added to the path so far
    n_visits: usize,
}

impl Path {
    fn new(n_cells: usize) -> Path {
        Path {
            word: String::with_capacity(n_cells),
            cells: Vec::with_capacity(n_cells),
            visited: vec![false; n_cells].into_boxed_slice(),
            n_visits: 0,
        }
    }

    fn push(&mut self, cell: usize, letter: char) {
        self.word.push(letter);
        self.cells.push(cell);
        self.visited[cell] = true;
        self.n_visits += 1;
    }

    fn pop(&mut self) {
        if let Some(cell) = self.cells.pop() {
            self.word.pop();
            self.visited[cell] = false;
        }
    }
}

// Hands out the starting cells to the worker threads
struct CellQueue {
    next_cell: Mutex<usize>,
    n_cells: usize,
}

impl CellQueue {
    fn new(n_cells: usize) -> CellQueue {
        CellQueue {
            next_cell: Mutex::new(0),
            n_cells,
        }
    }

    fn next(&self) -> Option<usize> {
        let mut next_cell = self.next_cell.lock().unwrap();

        (*next_cell < self.n_cells).then(|| {
            let cell = *next_cell;
            *next_cell += 1;
            cell
        })
    }
}

/// Finds the words of a dictionary on a board. The adjacency table
/// is calculated once when the searcher is created so the same
/// searcher can be used with several dictionaries.
pub struct Searcher<'a> {
    board: &'a Board,
    adjacency: AdjacencyTable,
}

impl<'a> Searcher<'a> {
    pub fn new(board: &'a Board) -> Searcher<'a> {
        Searcher {
            board,
            adjacency: board.adjacency(),
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns every word in the dictionary that can be made by
    /// following a path of adjacent cells without using the same
    /// cell twice.
    pub fn search(&self, dictionary: &Dictionary) -> BTreeSet<String> {
        let mut words = BTreeSet::<String>::new();
        let mut path = Path::new(self.board.cell_count());

        for start in 0..self.board.cell_count() {
            self.search_from(
                dictionary,
                start,
                &mut path,
                &mut |word: &str, _: &[usize]| {
                    if !words.contains(word) {
                        words.insert(word.to_string());
                    }
                },
            );
        }

        debug!(n_words = words.len(), "search finished");

        words
    }

    /// Like `search` but also returns the cells used to spell each
    /// word. If there is more than one way to make a word then only
    /// the first path found is kept.
    pub fn search_paths(
        &self,
        dictionary: &Dictionary,
    ) -> BTreeMap<String, Vec<usize>> {
        let mut words = BTreeMap::<String, Vec<usize>>::new();
        let mut path = Path::new(self.board.cell_count());

        for start in 0..self.board.cell_count() {
            self.search_from(
                dictionary,
                start,
                &mut path,
                &mut |word: &str, cells: &[usize]| {
                    if !words.contains_key(word) {
                        words.insert(word.to_string(), cells.to_vec());
                    }
                },
            );
        }

        debug!(n_words = words.len(), "search finished");

        words
    }

    /// Same as `search` but the starting cells are shared out
    /// between `n_threads` worker threads. If `n_threads` is zero
    /// then the available parallelism is used.
    pub fn search_parallel(
        &self,
        dictionary: &Dictionary,
        n_threads: usize,
    ) -> BTreeSet<String> {
        let n_cells = self.board.cell_count();

        let n_threads = match n_threads {
            0 => thread::available_parallelism()
                .unwrap_or(NonZeroUsize::MIN)
                .get(),
            n => n,
        }.min(n_cells).max(1);

        debug!(n_threads, "starting parallel search");

        let queue = &CellQueue::new(n_cells);

        let words = thread::scope(|scope| {
            let handles = (0..n_threads).map(|_| {
                scope.spawn(move || {
                    let mut words = BTreeSet::<String>::new();
                    let mut path = Path::new(n_cells);

                    while let Some(start) = queue.next() {
                        self.search_from(
                            dictionary,
                            start,
                            &mut path,
                            &mut |word: &str, _: &[usize]| {
                                if !words.contains(word) {
                                    words.insert(word.to_string());
                                }
                            },
                        );
                    }

                    words
                })
            }).collect::<Vec<_>>();

            let mut words = BTreeSet::<String>::new();

            for handle in handles {
                match handle.join() {
                    Ok(thread_words) => words.extend(thread_words),
                    Err(e) => std::panic::resume_unwind(e),
                }
            }

            words
        });

        debug!(n_words = words.len(), "search finished");

        words
    }

    fn search_from<F>(
        &self,
        dictionary: &Dictionary,
        start: usize,
        path: &mut Path,
        found: &mut F,
    )
    where
        F: FnMut(&str, &[usize])
    {
        let n_visits = path.n_visits;

        self.visit(dictionary.root(), start, path, found);

        trace!(start, n_visits = path.n_visits - n_visits, "searched from cell");
    }

    // Tries to add `cell` to the path. `node` is the trie node for
    // the word before adding the cell.
    fn visit<F>(
        &self,
        node: dictionary::Node,
        cell: usize,
        path: &mut Path,
        found: &mut F,
    )
    where
        F: FnMut(&str, &[usize])
    {
        let letter = self.board.letter_at_index(cell);

        // No word continues with this letter
        let Some(node) = node.child(letter)
        else {
            return;
        };

        path.push(cell, letter);

        if node.is_word() {
            found(&path.word, &path.cells);
        }

        // Only keep going if there are longer words with this prefix
        if node.has_children() {
            for &next_cell in self.adjacency.neighbours(cell) {
                if !path.visited[next_cell] {
                    self.visit(node, next_cell, path, found);
                }
            }
        }

        path.pop();
    }
}

pub fn search(board: &Board, dictionary: &Dictionary) -> BTreeSet<String> {
    Searcher::new(board).search(dictionary)
}

pub fn search_paths(
    board: &Board,
    dictionary: &Dictionary,
) -> BTreeMap<String, Vec<usize>> {
    Searcher::new(board).search_paths(dictionary)
}

pub fn search_parallel(
    board: &Board,
    dictionary: &Dictionary,
    n_threads: usize,
) -> BTreeSet<String> {
    Searcher::new(board).search_parallel(dictionary, n_threads)
}
