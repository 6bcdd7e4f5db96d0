#![warn(missing_docs)]

//! # `engine-schematic`
//!
//! An adjacency engine for engine schematic grids: 2-D character grids in which maximal
//! digit runs are candidate part numbers and every other non-`'.'` character is a symbol.
//! Parse a grid with [`Schematic::from_lines`] (or via [`FromStr`](std::str::FromStr) for
//! in-memory text), then read the two derived statistics with
//! [`part_number_sum()`](Schematic::part_number_sum) and
//! [`gear_ratio_sum()`](Schematic::gear_ratio_sum).
//!
//! A part number counts when at least one symbol touches its bounding box, diagonals
//! included. A `'*'` symbol touching exactly two part numbers is a gear, and its ratio is
//! the product of those two values.
//!
//! # Internals
//! The grid is never materialized. Input rows stream through a 3-row window (previous,
//! current, next), padded with an empty sentinel row on either end; the [`token`] scanner
//! lexes each row into digit runs and symbols, and the numbers of the current row are
//! tested against the symbols of all three rows with a single bounding-box predicate.
//!
//! Each discovered adjacency becomes an edge in an undirected [`petgraph`] graph whose
//! nodes are the part numbers and symbols themselves, which gives the many-to-many
//! relation both query directions at once. Unattached features never enter the graph, so
//! both aggregates are plain folds over its nodes.

pub use location::Coordinate;
pub use schematic::Schematic;
pub use token::{PartNumber, Symbol, Token};

pub(crate) mod location;
pub mod token;
pub(crate) mod schematic;
