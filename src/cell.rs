use core::fmt;

/// A (row, column) coordinate on the grid. Both components fit in a byte, which is also how
/// cells travel across the byte interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Cell {
        Cell { row, col }
    }
    /// Number of single-axis steps separating two cells.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }
    /// Number of king moves separating two cells.
    pub fn chebyshev_distance(&self, other: &Cell) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col)) as u32
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> (u8, u8) {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
