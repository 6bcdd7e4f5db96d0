pub(crate) type Coord = usize;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A position `(row, column)` on a schematic grid. The top left corner is `Coordinate(0, 0)`.
///
/// Ordering follows the scan order: by row first, then by column.
pub struct Coordinate(pub Coord, pub Coord);
