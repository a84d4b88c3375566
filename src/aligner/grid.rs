//! Dense DP grid and the matching predecessor grid.
//!
//! Cell `(i, j)` of the DP grid holds the minimum penalty of aligning the first `i` symbols of
//! the first sequence with the first `j` symbols of the second. Both grids have
//! `(m + 1) x (n + 1)` cells stored row-major.

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::aligner::scoring::{Penalty, SubstitutionCosts};
use crate::symbols::Sequence;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Penalty>,
}

impl DpGrid {
    fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![0; rows * cols] }
    }

    #[inline(always)]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Penalty {
        self.cells[self.idx(i, j)]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, j: usize, value: Penalty) {
        let ix = self.idx(i, j);
        self.cells[ix] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[Penalty] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The value of the bottom-right cell: the minimum total alignment penalty.
    pub fn final_penalty(&self) -> Penalty {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl Serialize for DpGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.chunks(self.cols))
    }
}

/// Which neighbouring cell the optimal value of a cell was derived from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Predecessor {
    /// Cell `(0, 0)` has no predecessor
    #[default]
    Start,

    /// `(i - 1, j - 1)`: both symbols aligned with each other
    Diagonal,

    /// `(i - 1, j)`: symbol of the first sequence aligned with a gap
    Up,

    /// `(i, j - 1)`: symbol of the second sequence aligned with a gap
    Left,
}

impl Predecessor {
    pub fn source(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            Self::Start => None,
            Self::Diagonal => Some((i - 1, j - 1)),
            Self::Up => Some((i - 1, j)),
            Self::Left => Some((i, j - 1)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredecessorGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Predecessor>,
}

impl PredecessorGrid {
    fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Predecessor::Start; rows * cols] }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Predecessor {
        self.cells[i * self.cols + j]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, j: usize, value: Predecessor) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[Predecessor] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Coordinates of the cell that `(i, j)` was derived from, `None` for `(0, 0)`.
    pub fn source(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        self.get(i, j).source(i, j)
    }

    /// Follow predecessors from the bottom-right cell back to `(0, 0)`. Both endpoints are
    /// included.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let mut curr = Some((self.rows - 1, self.cols - 1));
        let mut path = Vec::with_capacity(self.rows + self.cols);

        while let Some((i, j)) = curr {
            path.push((i, j));
            curr = self.source(i, j);
        }

        path
    }
}

impl Serialize for PredecessorGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.chunks(self.cols))
    }
}

/// Fill the DP grid and the predecessor grid in a single pass.
///
/// Ties are broken in favour of the diagonal move, then the up move, then the left move.
/// The backtracker relies on this exact order.
pub fn build_grids<C>(seq1: &Sequence, seq2: &Sequence, costs: &C) -> (DpGrid, PredecessorGrid)
where
    C: SubstitutionCosts,
{
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;
    let gap = costs.gap() as Penalty;

    let mut grid = DpGrid::new(rows, cols);
    let mut predecessors = PredecessorGrid::new(rows, cols);

    for i in 1..rows {
        grid.set(i, 0, costs.gap_cost(i));
        predecessors.set(i, 0, Predecessor::Up);
    }

    for j in 1..cols {
        grid.set(0, j, costs.gap_cost(j));
        predecessors.set(0, j, Predecessor::Left);
    }

    for j in 1..cols {
        for i in 1..rows {
            let diag = grid.get(i - 1, j - 1) + costs.substitution(seq1[i - 1], seq2[j - 1]) as Penalty;
            let up = grid.get(i - 1, j) + gap;
            let left = grid.get(i, j - 1) + gap;

            let (value, pred) = if diag <= up && diag <= left {
                (diag, Predecessor::Diagonal)
            } else if up <= left {
                (up, Predecessor::Up)
            } else {
                (left, Predecessor::Left)
            };

            grid.set(i, j, value);
            predecessors.set(i, j, pred);
        }
    }

    trace!("Filled {rows}x{cols} DP grid, final penalty {}", grid.final_penalty());

    (grid, predecessors)
}
