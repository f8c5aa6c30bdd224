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

// The dictionary is stored as a trie. All of the nodes live in a
// single vector and refer to their children by index. The root node
// is always the first entry and represents the empty prefix so no
// other node can have index zero, which lets the child table use
// NonZeroUsize.
//
// Each node has a slot for every letter from ‘a’ to ‘z’. Words are
// always lowercased before being added so lookups are
// case-insensitive.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, warn};

pub const N_LETTERS: usize = 26;

#[derive(Debug, Clone)]
struct TrieNode {
    // Only used for iterating the words and debugging
    ch: char,
    is_word: bool,
    children: [Option<NonZeroUsize>; N_LETTERS],
}

impl TrieNode {
    fn new(ch: char) -> TrieNode {
        TrieNode {
            ch,
            is_word: false,
            children: [None; N_LETTERS],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    n_words: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

/// A reference to a node in the trie. This can be used to walk down
/// the trie one letter at a time without having to look up the whole
/// prefix again.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    dictionary: &'a Dictionary,
    index: usize,
}

fn letter_index(ch: char) -> Option<usize> {
    ch.is_ascii_alphabetic()
        .then(|| (ch.to_ascii_lowercase() as u8 - b'a') as usize)
}

fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            nodes: vec![TrieNode::new('*')],
            n_words: 0,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
        let mut dictionary = Dictionary::new();

        dictionary.load_file(path)?;

        Ok(dictionary)
    }

    /// Adds a word to the dictionary. Returns true if the word wasn’t
    /// already in the dictionary. The word is rejected without
    /// modifying the trie if it is empty or contains anything other
    /// than the letters a-z in either case.
    pub fn add_word(&mut self, word: &str) -> Result<bool, WordError> {
        let letters = word.chars()
            .map(|ch| letter_index(ch).ok_or(WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<usize>, WordError>>()?;

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        let mut node = 0;

        for letter in letters {
            node = match self.nodes[node].children[letter] {
                Some(child) => child.get(),
                None => {
                    let new_node_pos = self.nodes.len();

                    self.nodes.push(TrieNode::new(index_letter(letter)));

                    let child = NonZeroUsize::new(new_node_pos);
                    // The nodes list is never empty, so the
                    // new_node_pos shouldn’t be zero
                    assert!(child.is_some());

                    self.nodes[node].children[letter] = child;

                    new_node_pos
                },
            };
        }

        let is_new = !self.nodes[node].is_word;

        if is_new {
            self.nodes[node].is_word = true;
            self.n_words += 1;
        }

        Ok(is_new)
    }

    /// Adds every line of the reader as a word. The whole source is
    /// read before anything is added so that a read error leaves the
    /// dictionary unchanged. Blank lines are skipped and lines that
    /// aren’t valid words are skipped with a warning.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<LoadStats> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;

        let mut stats = LoadStats::default();

        for (line_num, line) in lines.iter().enumerate() {
            let word = line.trim();

            if word.is_empty() {
                continue;
            }

            match self.add_word(word) {
                Ok(true) => stats.added += 1,
                Ok(false) => stats.duplicates += 1,
                Err(e) => {
                    warn!("line {}: skipping “{}”: {}", line_num + 1, word, e);
                    stats.rejected += 1;
                },
            }
        }

        debug!(
            added = stats.added,
            duplicates = stats.duplicates,
            rejected = stats.rejected,
            nodes = self.nodes.len(),
            "loaded dictionary"
        );

        Ok(stats)
    }

    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<LoadStats, LoadError> {
        let file = File::open(path)?;

        Ok(self.load(BufReader::new(file))?)
    }

    pub fn root(&self) -> Node {
        Node { dictionary: self, index: 0 }
    }

    /// Follows the letters of `prefix` from the root. Returns None if
    /// no word starts with the prefix.
    pub fn find_node(&self, prefix: &str) -> Option<Node> {
        prefix.chars().try_fold(self.root(), |node, ch| node.child(ch))
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.find_node(word).map(|node| node.is_word()).unwrap_or(false)
    }

    /// Returns true if there is a word in the dictionary that is
    /// longer than `prefix` and starts with it.
    pub fn has_words_with_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix)
            .map(|node| node.has_children())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn words(&self) -> WordIterator {
        WordIterator::new(self)
    }
}

impl Default for Dictionary {
    fn default() -> Dictionary {
        Dictionary::new()
    }
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a TrieNode {
        &self.dictionary.nodes[self.index]
    }

    pub fn letter(&self) -> char {
        self.data().ch
    }

    pub fn is_word(&self) -> bool {
        self.data().is_word
    }

    pub fn has_children(&self) -> bool {
        self.data().children.iter().any(Option::is_some)
    }

    pub fn child(&self, ch: char) -> Option<Node<'a>> {
        let child = self.data().children[letter_index(ch)?]?;

        Some(Node { dictionary: self.dictionary, index: child.get() })
    }
}

struct StackEntry {
    node: usize,
    word_length: usize,
}

/// Iterates the words of the dictionary in alphabetical order.
pub struct WordIterator<'a> {
    dictionary: &'a Dictionary,
    stack: Vec<StackEntry>,
    buf: String,
}

impl<'a> WordIterator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> WordIterator<'a> {
        WordIterator {
            dictionary,
            stack: vec![StackEntry { node: 0, word_length: 0 }],
            buf: String::new(),
        }
    }

    pub fn next(&mut self) -> Option<&str> {
        while let Some(entry) = self.stack.pop() {
            let node = &self.dictionary.nodes[entry.node];

            self.buf.truncate(entry.word_length);

            // Skip the character from the root node
            if entry.node != 0 {
                self.buf.push(node.ch);
            }

            // Push in reverse so that the children get popped in
            // alphabetical order
            for child in node.children.iter().rev().flatten() {
                self.stack.push(StackEntry {
                    node: child.get(),
                    word_length: self.buf.len(),
                });
            }

            if node.is_word {
                return Some(&self.buf);
            }
        }

        None
    }
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordError::Empty => write!(f, "empty word"),
            WordError::InvalidCharacter(ch) => {
                if ch.is_control() {
                    write!(f, "invalid character: U+{:04x}", *ch as u32)
                } else {
                    write!(f, "invalid character: {}", ch)
                }
            },
        }
    }
}

impl std::error::Error for WordError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}
