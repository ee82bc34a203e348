use core::fmt;

use fxhash::FxHashSet;
use smallvec::SmallVec;

use crate::bfs::{SearchContext, SearchRecord};
use crate::{Cell, N_SMALLVEC_SIZE};

/// Grid description for a single search: the largest row and column values, the blocked cells,
/// whether diagonal steps are allowed, and the start and end of the query.
///
/// Steps towards smaller coordinates require the source coordinate to be larger than 1, so no
/// step ever lands on row or column 0. Cells on row or column 0 can still start a search and
/// expand downwards or to the right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: u8,
    pub height: u8,
    pub obstacles: FxHashSet<Cell>,
    pub allow_diagonal: bool,
    pub start: Cell,
    pub end: Cell,
}

impl GridConfig {
    pub fn new(width: u8, height: u8, start: Cell, end: Cell) -> GridConfig {
        GridConfig {
            width,
            height,
            obstacles: FxHashSet::default(),
            allow_diagonal: false,
            start,
            end,
        }
    }
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> GridConfig {
        self.allow_diagonal = allow_diagonal;
        self
    }
    pub fn with_obstacles<I, C>(mut self, obstacles: I) -> GridConfig
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.obstacles.extend(obstacles.into_iter().map(Into::into));
        self
    }

    pub fn is_obstacle(&self, cell: &Cell) -> bool {
        self.obstacles.contains(cell)
    }
    /// Width and height are inclusive bounds on column and row values.
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row <= self.height && cell.col <= self.width
    }

    /// Cells reachable from `cell` in a single step. Orthogonal steps are always considered,
    /// diagonal ones only if [allow_diagonal](Self::allow_diagonal) is set. Obstacles are never
    /// returned, and no cell appears twice.
    pub fn neighbors(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        let up = cell.row > 1;
        let down = cell.row < self.height;
        let left = cell.col > 1;
        let right = cell.col < self.width;

        let mut candidates: SmallVec<[(bool, i8, i8); 8]> = SmallVec::new();
        candidates.extend([(up, -1, 0), (down, 1, 0), (left, 0, -1), (right, 0, 1)]);
        if self.allow_diagonal {
            candidates.extend([
                (up && left, -1, -1),
                (up && right, -1, 1),
                (down && left, 1, -1),
                (down && right, 1, 1),
            ]);
        }
        candidates
            .into_iter()
            .filter(|&(allowed, _, _)| allowed)
            .filter_map(|(_, dr, dc)| {
                Some(Cell::new(
                    cell.row.checked_add_signed(dr)?,
                    cell.col.checked_add_signed(dc)?,
                ))
            })
            .filter(|n| !self.is_obstacle(n))
            .collect()
    }

    /// Runs a breadth-first search from [start](Self::start) that stops once
    /// [end](Self::end) has been discovered.
    pub fn search(&self) -> SearchRecord<Cell> {
        crate::bfs::bfs(&self.start, &self.end, |c| self.neighbors(c))
    }

    /// Shortest path from [start](Self::start) to [end](Self::end), both inclusive, or an empty
    /// path if the end cannot be reached.
    pub fn shortest_path(&self) -> Vec<Cell> {
        self.shortest_path_with(&mut SearchContext::with_capacity(self.cell_count()))
    }

    /// Same as [shortest_path](Self::shortest_path) but reuses the buffers of `context`.
    pub fn shortest_path_with(&self, context: &mut SearchContext<Cell>) -> Vec<Cell> {
        context.shortest_path(&self.start, &self.end, |c| self.neighbors(c))
    }

    /// Number of cells inside the bounds of the grid.
    pub fn cell_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..=self.height {
            for col in 0..=self.width {
                let cell = Cell::new(row, col);
                let c = if cell == self.start {
                    'S'
                } else if cell == self.end {
                    'E'
                } else if self.is_obstacle(&cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
