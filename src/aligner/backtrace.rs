use crate::aligner::alignment::{AlignedPair, Alignment};
use crate::aligner::grid::DpGrid;
use crate::aligner::scoring::{Penalty, SubstitutionCosts};
use crate::symbols::Sequence;

/// Reconstruct one optimal alignment by re-deriving each move from the DP grid, walking from
/// `(m, n)` back to `(0, 0)`.
///
/// Moves are tested in the same order the grid builder breaks ties (diagonal, up, left), so the
/// recovered path is the one recorded in the predecessor grid.
///
/// Panics if `grid` was not built from `seq1`, `seq2` and `costs`.
pub fn backtrace<C>(seq1: &Sequence, seq2: &Sequence, grid: &DpGrid, costs: &C) -> Alignment
where
    C: SubstitutionCosts,
{
    let gap = costs.gap() as Penalty;

    let mut i = seq1.len();
    let mut j = seq2.len();
    let mut alignment = Vec::with_capacity(i + j);

    while i > 0 && j > 0 {
        let curr = grid.get(i, j);
        let sub = costs.substitution(seq1[i - 1], seq2[j - 1]) as Penalty;

        if curr.checked_sub(sub) == Some(grid.get(i - 1, j - 1)) {
            alignment.push(AlignedPair::new(Some(seq1[i - 1]), Some(seq2[j - 1])));
            i -= 1;
            j -= 1;
        } else if curr.checked_sub(gap) == Some(grid.get(i - 1, j)) {
            alignment.push(AlignedPair::new(Some(seq1[i - 1]), None));
            i -= 1;
        } else if curr.checked_sub(gap) == Some(grid.get(i, j - 1)) {
            alignment.push(AlignedPair::new(None, Some(seq2[j - 1])));
            j -= 1;
        } else {
            panic!("DP grid is inconsistent at cell ({i}, {j}), no predecessor reproduces {curr}");
        }
    }

    while i > 0 {
        alignment.push(AlignedPair::new(Some(seq1[i - 1]), None));
        i -= 1;
    }

    while j > 0 {
        alignment.push(AlignedPair::new(None, Some(seq2[j - 1])));
        j -= 1;
    }

    alignment.reverse();
    alignment
}
