use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::batch::SequencePair;
use crate::errors::AlignError;

/// Read sequence pairs from FASTA data. Consecutive records form a pair: records 1 and 2, 3 and
/// 4, and so on.
pub fn read_pairs<R>(reader: R) -> Result<Vec<SequencePair>, AlignError>
where
    R: BufRead,
{
    let mut reader = fasta::io::Reader::new(reader);
    let mut pairs = Vec::new();
    let mut pending: Option<(String, String)> = None;

    for result in reader.records() {
        let record = result?;
        let name = std::str::from_utf8(record.name())?.to_string();
        let sequence = std::str::from_utf8(record.sequence().as_ref())?.to_string();

        match pending.take() {
            None => pending = Some((name, sequence)),
            Some((name1, seq1)) => pairs.push(SequencePair::new(name1, seq1, name, sequence)),
        }
    }

    if let Some((name, _)) = pending {
        return Err(AlignError::UnpairedRecord(name));
    }

    debug!("Read {} sequence pairs", pairs.len());

    Ok(pairs)
}

/// Open a FASTA file (optionally gzip compressed, detected by the `.gz` extension) and read its
/// sequence pairs.
pub fn load_pairs(path: &Path) -> Result<Vec<SequencePair>, AlignError> {
    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(path)
        .map_err(|source| AlignError::FileReadError { source })?;

    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    read_pairs(reader_inner)
}
