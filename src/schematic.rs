use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::BufRead;
use std::iter;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::token::{part_numbers_in, symbols_in, PartNumber, Symbol};

#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Feature {
    Symbol(Symbol),
    Part(PartNumber),
}

/// The bipartite adjacency index between the part numbers and symbols of one schematic.
///
/// Built once by a streaming scan (see [`Schematic::from_lines`]) and read-only afterward.
/// Only attached features appear: a symbol with no adjacent number and a number with no
/// adjacent symbol never enter the index, so absence is what encodes "zero neighbors".
pub struct Schematic {
    graph: UnGraphMap<Feature, ()>,
}

impl Schematic {
    /// Build the index from an iterator of schematic rows.
    ///
    /// The scan materializes nothing beyond a 3-row window: the row sequence, padded
    /// with one empty sentinel row on either end, is walked with overlapping windows
    /// of (previous, current, next). Numbers are read from the current row only and
    /// tested against the symbols of all three rows, so each (symbol, number) pair is
    /// discovered exactly once. The sentinels mean the first and last rows need no
    /// special casing, and ragged rows behave as if padded with `'.'`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let padded = iter::once(String::new())
            .chain(lines.into_iter().map(|line| line.as_ref().to_owned()))
            .chain(iter::once(String::new()));

        let mut graph = UnGraphMap::new();
        for (row, (above, current, below)) in padded.tuple_windows().enumerate() {
            // the sentinel row above the grid is empty, so the wrapped index at row 0
            // can never reach a token
            let symbols = symbols_in(&above, row.wrapping_sub(1))
                .chain(symbols_in(&current, row))
                .chain(symbols_in(&below, row + 1))
                .collect_vec();

            for part in part_numbers_in(&current, row) {
                for symbol in symbols.iter().filter(|symbol| part.is_adjacent(symbol.coordinate)) {
                    graph.add_edge(Feature::Part(part), Feature::Symbol(*symbol), ());
                }
            }
        }

        Self { graph }
    }

    /// Build the index from a line-oriented reader, consuming it exactly once.
    ///
    /// An unreadable stream is fatal and surfaces immediately; there is no partial
    /// result and no retry.
    pub fn read_from(reader: impl BufRead) -> io::Result<Self> {
        let mut failure = None;
        let schematic = Self::from_lines(reader.lines().map_while(|line| match line {
            Ok(line) => Some(line),
            Err(error) => {
                failure = Some(error);
                None
            }
        }));

        match failure {
            Some(error) => Err(error),
            None => Ok(schematic),
        }
    }

    /// Every symbol adjacent to at least one part number. Order is unspecified.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.graph.nodes().filter_map(|feature| match feature {
            Feature::Symbol(symbol) => Some(symbol),
            Feature::Part(_) => None,
        })
    }

    /// Every part number adjacent to at least one symbol. Order is unspecified.
    pub fn part_numbers(&self) -> impl Iterator<Item = PartNumber> + '_ {
        self.graph.nodes().filter_map(|feature| match feature {
            Feature::Part(part) => Some(part),
            Feature::Symbol(_) => None,
        })
    }

    /// The part numbers recorded adjacent to `symbol`.
    ///
    /// Empty when the symbol is not in the index, which is how a symbol with zero
    /// adjacent numbers reads back.
    pub fn parts_adjacent_to(&self, symbol: Symbol) -> impl Iterator<Item = PartNumber> + '_ {
        self.graph.neighbors(Feature::Symbol(symbol)).filter_map(|feature| match feature {
            Feature::Part(part) => Some(part),
            Feature::Symbol(_) => None,
        })
    }

    /// The symbols recorded adjacent to `part`. Empty when the part number is not in
    /// the index.
    pub fn symbols_adjacent_to(&self, part: PartNumber) -> impl Iterator<Item = Symbol> + '_ {
        self.graph.neighbors(Feature::Part(part)).filter_map(|feature| match feature {
            Feature::Symbol(symbol) => Some(symbol),
            Feature::Part(_) => None,
        })
    }

    /// Sum of every part number adjacent to at least one symbol.
    pub fn part_number_sum(&self) -> u64 {
        self.part_numbers().map(|part| u64::from(part.value)).sum()
    }

    /// Every gear, paired with its two part numbers.
    ///
    /// A gear is a `'*'` symbol with exactly two adjacent part numbers; a `'*'` with
    /// one neighbor or three does not qualify.
    pub fn gears(&self) -> impl Iterator<Item = (Symbol, UnorderedPair<PartNumber>)> + '_ {
        self.symbols()
            .filter(|symbol| symbol.glyph == '*')
            .filter_map(|symbol| {
                self.parts_adjacent_to(symbol)
                    .collect_tuple()
                    .map(|(a, b)| (symbol, UnorderedPair(a, b)))
            })
    }

    /// Sum of the gear ratios, the product of each gear's two part-number values.
    pub fn gear_ratio_sum(&self) -> u64 {
        self.gears()
            .map(|(_, UnorderedPair(a, b))| u64::from(a.value) * u64::from(b.value))
            .sum()
    }
}

impl FromStr for Schematic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_lines(s.lines()))
    }
}

impl Display for Schematic {
    /// Re-renders the indexed features on a `'.'`-filled canvas sized to their extent.
    ///
    /// Features the scan discarded (numbers with no symbol, symbols with no number) do
    /// not appear, so the rendering shows exactly what the relation retained.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (mut rows, mut columns) = (0, 0);
        for feature in self.graph.nodes() {
            let extent = match feature {
                Feature::Symbol(symbol) => symbol.coordinate,
                Feature::Part(part) => part.end(),
            };
            rows = rows.max(extent.0 + 1);
            columns = columns.max(extent.1 + 1);
        }

        let mut canvas = Array2::from_elem((rows, columns), '.');
        for symbol in self.symbols() {
            canvas[[symbol.coordinate.0, symbol.coordinate.1]] = symbol.glyph;
        }
        for part in self.part_numbers() {
            for (offset, digit) in part.value.to_string().chars().enumerate() {
                canvas[[part.start.0, part.start.1 + offset]] = digit;
            }
        }

        let mut out = String::with_capacity(rows * (columns + 1));
        for row in canvas.rows() {
            for cell in row {
                out.push(*cell);
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
