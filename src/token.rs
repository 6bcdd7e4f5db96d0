//! Lexing one schematic row into its two disjoint token kinds: maximal digit runs and
//! lone symbol characters.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::location::{Coord, Coordinate};

/// A single grid character which is neither an ASCII digit nor `'.'`.
///
/// The coordinate alone disambiguates occurrences; the glyph is informational,
/// except that `'*'` marks a candidate gear.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    /// Where the symbol sits on the grid.
    pub coordinate: Coordinate,
    /// The symbol character itself.
    pub glyph: char,
}

/// A maximal run of ASCII digits, anchored at the coordinate of its first digit.
///
/// Equality and hashing cover both `value` and `start`, so numerically identical
/// numbers at different positions remain distinct.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PartNumber {
    /// The numeric value of the digit run.
    pub value: u32,
    /// The coordinate of the leftmost digit.
    pub start: Coordinate,
}

impl PartNumber {
    /// The coordinate of the rightmost digit, always on the same row as [`start`](Self::start).
    pub fn end(&self) -> Coordinate {
        Coordinate(self.start.0, self.start.1 + self.value.checked_ilog10().unwrap_or(0) as Coord)
    }

    /// Whether `coordinate` touches this number's bounding box, diagonals included.
    ///
    /// The box spans the number's full width, so this one test subsumes left, right,
    /// above, below, and diagonal adjacency.
    pub fn is_adjacent(&self, coordinate: Coordinate) -> bool {
        (self.start.0.saturating_sub(1)..=self.start.0 + 1).contains(&coordinate.0)
            && (self.start.1.saturating_sub(1)..=self.end().1 + 1).contains(&coordinate.1)
    }
}

/// A lexical item produced by scanning one schematic line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    /// A maximal digit run.
    Number(PartNumber),
    /// A lone non-digit, non-`'.'` character.
    Symbol(Symbol),
}

/// Single-pass scanner over one schematic line. See [`tokens_in`].
pub struct Tokens<'a> {
    chars: Peekable<CharIndices<'a>>,
    row: Coord,
}

/// Scan `line`, taken to be row `row` of the grid, into its tokens in left-to-right order.
///
/// `'.'` cells delimit tokens and produce nothing. Digit runs and symbols are disjoint
/// character classes, so no input can produce overlapping tokens, and any line at all
/// (empty included) scans without error.
pub fn tokens_in(line: &str, row: Coord) -> Tokens<'_> {
    Tokens { chars: line.char_indices().peekable(), row }
}

/// The symbols present in `line` at row `row`, in left-to-right order.
pub fn symbols_in(line: &str, row: Coord) -> impl Iterator<Item = Symbol> + '_ {
    tokens_in(line, row).filter_map(|token| match token {
        Token::Symbol(symbol) => Some(symbol),
        Token::Number(_) => None,
    })
}

/// The part-number candidates present in `line` at row `row`, in left-to-right order.
pub fn part_numbers_in(line: &str, row: Coord) -> impl Iterator<Item = PartNumber> + '_ {
    tokens_in(line, row).filter_map(|token| match token {
        Token::Number(part) => Some(part),
        Token::Symbol(_) => None,
    })
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (column, c) = self.chars.next()?;
            if c == '.' {
                continue;
            }

            if !c.is_ascii_digit() {
                return Some(Token::Symbol(Symbol { coordinate: Coordinate(self.row, column), glyph: c }));
            }

            let mut value = c.to_digit(10).unwrap_or(0);
            while let Some((_, digit)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
                value = value * 10 + digit.to_digit(10).unwrap_or(0);
            }

            return Some(Token::Number(PartNumber { value, start: Coordinate(self.row, column) }));
        }
    }
}
