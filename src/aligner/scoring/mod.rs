pub mod category;

pub use category::CategoryCosts;

use crate::symbols::Symbol;

/// Total alignment penalty. Wide enough for `max(m, n) * max(weight)` on any input that fits
/// in memory.
pub type Penalty = u64;

/// Cost model used to fill the DP grid.
///
/// Costs are penalties: lower is better, and aligning a symbol with itself must cost zero.
pub trait SubstitutionCosts: Copy {
    /// Penalty for aligning a symbol against a gap
    fn gap(&self) -> u32;

    /// Penalty for aligning `a` against `b`
    fn substitution(&self, a: Symbol, b: Symbol) -> u32;

    #[inline]
    fn gap_cost(&self, length: usize) -> Penalty {
        length as Penalty * self.gap() as Penalty
    }
}
