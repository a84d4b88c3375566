//! Writers for alignment results in plain text, TSV and JSON lines.

use std::io::Write;

use serde::Serialize;

use crate::aligner::utils::{format_grid, format_predecessors, print_alignment};
use crate::aligner::{AlignmentResult, DetailedAlignment};
use crate::batch::SequencePair;
use crate::errors::AlignError;

/// Result of aligning one named pair, ready to be written out.
#[derive(Clone, Debug, Serialize)]
pub struct AlignmentRecord {
    pub name1: String,
    pub name2: String,

    #[serde(flatten)]
    pub result: AlignmentResult,

    /// Three-line rendering of the alignment
    #[serde(skip)]
    pub view: String,

    /// Memo and predecessor tables, only kept when requested
    #[serde(skip)]
    pub tables: Option<String>,
}

impl AlignmentRecord {
    pub fn new(pair: &SequencePair, detailed: DetailedAlignment, gap_marker: char, with_tables: bool) -> Self {
        let view = print_alignment(&detailed.alignment, gap_marker);
        let tables = with_tables.then(|| {
            format!(
                "Memoization table\n{}\n\nPredecessor table (where the values came from)\n{}",
                format_grid(&detailed.grid),
                format_predecessors(&detailed.predecessors),
            )
        });

        Self {
            name1: pair.name1.clone(),
            name2: pair.name2.clone(),
            result: detailed.result,
            view,
            tables,
        }
    }
}

pub fn write_text<W: Write>(mut writer: W, records: &[AlignmentRecord]) -> Result<(), AlignError> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }

        writeln!(writer, "# {} vs {}", record.name1, record.name2)?;

        if let Some(tables) = &record.tables {
            writeln!(writer, "{tables}\n")?;
        }

        writeln!(writer, "Minimum penalty: {}", record.result.penalty)?;
        writeln!(writer, "{}", record.view)?;
    }

    Ok(())
}

pub fn write_tsv<W: Write>(mut writer: W, records: &[AlignmentRecord]) -> Result<(), AlignError> {
    writeln!(writer, "name1\tname2\tpenalty\taligned1\taligned2")?;

    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            record.name1, record.name2, record.result.penalty, record.result.aligned1, record.result.aligned2
        )?;
    }

    Ok(())
}

/// One JSON object per line.
pub fn write_json<W: Write>(mut writer: W, records: &[AlignmentRecord]) -> Result<(), AlignError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }

    Ok(())
}
