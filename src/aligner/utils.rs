use itertools::Itertools;

use crate::aligner::alignment::AlignedPair;
use crate::aligner::grid::{DpGrid, PredecessorGrid};
use crate::symbols::Symbol;

/// Render an alignment as three lines: first sequence, match line, second sequence.
///
/// The match line shows `|` for identical symbols, `:` for a substitution within the same
/// class, `.` for a cross-class substitution and a space for a gap.
pub fn print_alignment(aln: &[AlignedPair], gap_marker: char) -> String {
    let render = |sym: Option<Symbol>| sym.map_or(gap_marker, |s| s.as_char());

    let mut first = String::with_capacity(aln.len());
    let mut matches = String::with_capacity(aln.len());
    let mut second = String::with_capacity(aln.len());

    for pair in aln {
        first.push(render(pair.first));
        second.push(render(pair.second));

        matches.push(match (pair.first, pair.second) {
            (Some(a), Some(b)) if a == b => '|',
            (Some(a), Some(b)) if a.class() == b.class() => ':',
            (Some(_), Some(_)) => '.',
            _ => ' ',
        });
    }

    format!("{first}\n{matches}\n{second}")
}

/// Tab-separated memo table, one grid row per line.
pub fn format_grid(grid: &DpGrid) -> String {
    (0..grid.rows())
        .map(|i| grid.row(i).iter().join("\t"))
        .join("\n")
}

/// Tab-separated predecessor table. Each cell shows the coordinates it was derived from, or
/// `-` for the origin.
pub fn format_predecessors(predecessors: &PredecessorGrid) -> String {
    (0..predecessors.rows())
        .map(|i| {
            predecessors.row(i).iter()
                .enumerate()
                .map(|(j, pred)| match pred.source(i, j) {
                    Some((pi, pj)) => format!("[{pi}, {pj}]"),
                    None => "-".to_string(),
                })
                .join("\t")
        })
        .join("\n")
}
