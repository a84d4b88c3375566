//! Independent alignment of many sequence pairs, optionally spread over worker threads.

use crossbeam_channel as channel;
use tracing::{debug, info};

use crate::aligner::scoring::SubstitutionCosts;
use crate::aligner::{Aligner, DetailedAlignment};

/// Two named raw input strings to align against each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePair {
    pub name1: String,
    pub seq1: String,
    pub name2: String,
    pub seq2: String,
}

impl SequencePair {
    pub fn new(
        name1: impl Into<String>,
        seq1: impl Into<String>,
        name2: impl Into<String>,
        seq2: impl Into<String>,
    ) -> Self {
        Self {
            name1: name1.into(),
            seq1: seq1.into(),
            name2: name2.into(),
            seq2: seq2.into(),
        }
    }

    pub fn name(&self) -> String {
        format!("{}_vs_{}", self.name1, self.name2)
    }
}

/// Align every pair and pass its index, the pair and its detailed alignment through `process`.
/// Results are returned in the order of `pairs`.
///
/// With more than one thread, pairs are handed out to scoped workers over a shared job
/// channel. Each alignment owns its grids, so workers share nothing but the aligner.
pub fn align_pairs<C, F, T>(aligner: &Aligner<C>, pairs: &[SequencePair], threads: usize, process: F) -> Vec<T>
where
    C: SubstitutionCosts + Sync,
    F: Fn(usize, &SequencePair, DetailedAlignment) -> T + Sync,
    T: Send,
{
    let align_one = |ix: usize, pair: &SequencePair| {
        debug!("Aligning {}", pair.name());
        process(ix, pair, aligner.align_detailed(&pair.seq1, &pair.seq2))
    };

    if threads <= 1 || pairs.len() <= 1 {
        return pairs.iter()
            .enumerate()
            .map(|(ix, pair)| align_one(ix, pair))
            .collect();
    }

    info!("Aligning {} pairs using {} threads", pairs.len(), threads);

    let (job_tx, job_rx) = channel::unbounded();
    for job in pairs.iter().enumerate() {
        // The receiver is still alive, sending cannot fail
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let (result_tx, result_rx) = channel::unbounded();
    std::thread::scope(|s| {
        for _ in 0..threads.min(pairs.len()) {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let align_one = &align_one;

            s.spawn(move || {
                for (ix, pair) in job_rx {
                    if result_tx.send((ix, align_one(ix, pair))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut results: Vec<Option<T>> = (0..pairs.len()).map(|_| None).collect();
    for (ix, result) in result_rx {
        results[ix] = Some(result);
    }

    results.into_iter().flatten().collect()
}
