pub mod alignment;
pub mod backtrace;
pub mod grid;
pub mod scoring;
pub mod utils;

use serde::Serialize;
use tracing::debug;

use crate::errors::AlignError;
use crate::symbols::Sequence;
pub use alignment::{AlignedPair, Alignment};
use alignment::alignment_rows;
use backtrace::backtrace;
use grid::{build_grids, DpGrid, PredecessorGrid};
use scoring::{CategoryCosts, Penalty, SubstitutionCosts};

pub const DEFAULT_GAP_MARKER: char = '_';

/// Minimum penalty together with one optimal alignment.
///
/// `aligned1` and `aligned2` always contain the same number of characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    pub penalty: Penalty,
    pub aligned1: String,
    pub aligned2: String,
}

/// Everything computed during a single alignment, for tooling and debugging.
#[derive(Clone, Debug)]
pub struct DetailedAlignment {
    pub seq1: Sequence,
    pub seq2: Sequence,
    pub grid: DpGrid,
    pub predecessors: PredecessorGrid,
    pub alignment: Alignment,
    pub result: AlignmentResult,
}

/// Global aligner with a fixed cost model.
///
/// Holds no state between calls; every alignment allocates its own grids, so a shared
/// reference can be used from several threads at once.
#[derive(Copy, Clone, Debug)]
pub struct Aligner<C = CategoryCosts> {
    costs: C,
    gap_marker: char,
}

impl Aligner<CategoryCosts> {
    /// Construct an aligner with class-based penalties, rejecting negative weights.
    pub fn with_penalties(
        gap: i64,
        vowel_vowel: i64,
        consonant_consonant: i64,
        cross_class: i64,
        digit_digit: i64,
    ) -> Result<Self, AlignError> {
        CategoryCosts::new(gap, vowel_vowel, consonant_consonant, cross_class, digit_digit)
            .map(Self::new)
    }
}

impl Default for Aligner<CategoryCosts> {
    fn default() -> Self {
        Self::new(CategoryCosts::default())
    }
}

impl<C> Aligner<C>
where
    C: SubstitutionCosts,
{
    pub fn new(costs: C) -> Self {
        Self {
            costs,
            gap_marker: DEFAULT_GAP_MARKER,
        }
    }

    /// Use `gap_marker` at gap positions. Letters and digits are rejected since they could not
    /// be told apart from aligned symbols.
    pub fn with_gap_marker(self, gap_marker: char) -> Result<Self, AlignError> {
        if gap_marker.is_ascii_alphanumeric() {
            return Err(AlignError::InvalidGapMarker(gap_marker));
        }

        Ok(Self { gap_marker, ..self })
    }

    pub fn costs(&self) -> &C {
        &self.costs
    }

    pub fn gap_marker(&self) -> char {
        self.gap_marker
    }

    /// Sanitize both inputs and compute their minimum-penalty global alignment.
    pub fn align(&self, raw1: &str, raw2: &str) -> AlignmentResult {
        self.align_detailed(raw1, raw2).result
    }

    /// Like [`Aligner::align`], but also return the sanitized sequences and both grids.
    pub fn align_detailed(&self, raw1: &str, raw2: &str) -> DetailedAlignment {
        self.align_sequences(Sequence::sanitize(raw1), Sequence::sanitize(raw2))
    }

    /// Align two already sanitized sequences.
    pub fn align_sequences(&self, seq1: Sequence, seq2: Sequence) -> DetailedAlignment {
        let (grid, predecessors) = build_grids(&seq1, &seq2, &self.costs);
        let alignment = backtrace(&seq1, &seq2, &grid, &self.costs);

        let (aligned1, aligned2) = alignment_rows(&alignment, self.gap_marker);
        let result = AlignmentResult {
            penalty: grid.final_penalty(),
            aligned1,
            aligned2,
        };

        debug!("Aligned sequences of length {} and {}, penalty: {}", seq1.len(), seq2.len(), result.penalty);

        DetailedAlignment {
            seq1,
            seq2,
            grid,
            predecessors,
            alignment,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn default_aligner() -> Aligner {
        Aligner::default()
    }

    fn check(aligner: &Aligner, a: &str, b: &str, penalty: Penalty, aligned1: &str, aligned2: &str) {
        let result = aligner.align(a, b);
        assert_eq!(result, AlignmentResult {
            penalty,
            aligned1: aligned1.to_string(),
            aligned2: aligned2.to_string(),
        }, "aligning {a:?} with {b:?}");
    }

    #[test]
    fn test_scenarios() {
        let aligner = default_aligner();

        check(&aligner, "MEAN", "name", 6, "mean_", "n_ame");
        check(&aligner, "abc", "ab", 2, "abc", "ab_");
        check(&aligner, "abc", "bc", 2, "abc", "_bc");
        check(&aligner, "ab", "1ab", 2, "_ab", "1ab");
        check(&aligner, "", "", 0, "", "");
        check(&aligner, "acbd", "zcbd", 3, "acbd", "zcbd");
        check(&aligner, "a", "e", 1, "a", "e");
        check(&aligner, "1", "2", 1, "1", "2");
        check(&aligner, "a", "1", 3, "a", "1");
        check(&aligner, "Hello, World!", "hello world", 0, "helloworld", "helloworld");
    }

    #[test]
    fn test_gap_marker() {
        let aligner = default_aligner().with_gap_marker('-').unwrap();
        check(&aligner, "abc", "bc", 2, "abc", "-bc");

        let aligner = default_aligner().with_gap_marker('*').unwrap();
        check(&aligner, "abc", "ac", 2, "abc", "a*c");
    }

    #[test]
    fn test_alphanumeric_gap_marker_rejected() {
        for marker in ['b', 'B', '7'] {
            assert!(matches!(
                default_aligner().with_gap_marker(marker),
                Err(AlignError::InvalidGapMarker(m)) if m == marker
            ));
        }
    }

    #[test]
    fn test_with_penalties() {
        let aligner: Aligner = Aligner::with_penalties(5, 1, 1, 3, 1).unwrap();
        check(&aligner, "mean", "name", 8, "mean", "name");

        assert!(matches!(
            Aligner::with_penalties(-1, 1, 1, 3, 1),
            Err(AlignError::NegativePenalty { weight: "gap", value: -1 })
        ));
    }

    #[test]
    fn test_predecessor_walk_matches_backtrace() {
        let aligner = default_aligner();

        for (a, b) in [("mean", "name"), ("ocurrance", "occurrence"), ("ab", "ba"), ("abc", "")] {
            let detailed = aligner.align_detailed(a, b);
            let path = detailed.predecessors.path();

            // One cell per alignment column plus the origin
            assert_eq!(path.len(), detailed.alignment.len() + 1);
            for (pair, window) in detailed.alignment.iter().rev().zip(path.windows(2)) {
                let ((i, j), (pi, pj)) = (window[0], window[1]);
                assert_eq!(pair.first.is_some(), pi + 1 == i);
                assert_eq!(pair.second.is_some(), pj + 1 == j);
            }
        }
    }

    fn raw_seq() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.!-]{0,16}"
    }

    fn any_costs() -> impl Strategy<Value = CategoryCosts> {
        (0..4i64, 0..4i64, 0..4i64, 0..6i64, 0..4i64)
            .prop_map(|(gap, vv, cc, cross, dd)| CategoryCosts::new(gap, vv, cc, cross, dd).unwrap())
    }

    fn alignment_cost<C: SubstitutionCosts>(costs: &C, alignment: &[AlignedPair]) -> Penalty {
        alignment.iter()
            .map(|pair| match (pair.first, pair.second) {
                (Some(x), Some(y)) => costs.substitution(x, y) as Penalty,
                _ => costs.gap() as Penalty,
            })
            .sum()
    }

    fn strip_gaps(s: &str) -> String {
        s.chars().filter(|&c| c != DEFAULT_GAP_MARKER).collect()
    }

    proptest! {
        #[test]
        fn identity_costs_nothing(a in raw_seq()) {
            prop_assert_eq!(default_aligner().align(&a, &a).penalty, 0);
        }

        #[test]
        fn penalty_is_symmetric(a in raw_seq(), b in raw_seq()) {
            let aligner = default_aligner();
            prop_assert_eq!(aligner.align(&a, &b).penalty, aligner.align(&b, &a).penalty);
        }

        #[test]
        fn gap_only_bound(a in raw_seq()) {
            let result = default_aligner().align(&a, "");
            prop_assert_eq!(result.penalty, 2 * Sequence::sanitize(&a).len() as Penalty);
        }

        #[test]
        fn zero_iff_equal(a in raw_seq(), b in raw_seq()) {
            let result = default_aligner().align(&a, &b);
            prop_assert_eq!(result.penalty == 0, Sequence::sanitize(&a) == Sequence::sanitize(&b));
        }

        #[test]
        fn alignment_reconstructs_inputs(a in raw_seq(), b in raw_seq()) {
            let result = default_aligner().align(&a, &b);

            prop_assert_eq!(result.aligned1.chars().count(), result.aligned2.chars().count());
            prop_assert_eq!(strip_gaps(&result.aligned1), Sequence::sanitize(&a).to_string());
            prop_assert_eq!(strip_gaps(&result.aligned2), Sequence::sanitize(&b).to_string());
        }

        #[test]
        fn alignment_cost_matches_penalty(a in raw_seq(), b in raw_seq()) {
            let aligner = default_aligner();
            let detailed = aligner.align_detailed(&a, &b);

            prop_assert_eq!(alignment_cost(aligner.costs(), &detailed.alignment), detailed.result.penalty);
        }

        #[test]
        fn alignment_cost_matches_penalty_for_any_weights(
            costs in any_costs(),
            a in raw_seq(),
            b in raw_seq(),
        ) {
            // Zero weights produce many ties between the three moves
            let aligner = Aligner::new(costs);
            let detailed = aligner.align_detailed(&a, &b);

            prop_assert_eq!(alignment_cost(&costs, &detailed.alignment), detailed.result.penalty);
            prop_assert_eq!(detailed.predecessors.path().len(), detailed.alignment.len() + 1);
            prop_assert_eq!(strip_gaps(&detailed.result.aligned1), detailed.seq1.to_string());
            prop_assert_eq!(strip_gaps(&detailed.result.aligned2), detailed.seq2.to_string());
        }
    }
}
