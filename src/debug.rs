use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::errors::AlignError;

pub mod messages {
    use serde::Serialize;

    use crate::aligner::grid::{DpGrid, PredecessorGrid};
    use crate::aligner::scoring::Penalty;
    use crate::aligner::DetailedAlignment;

    #[derive(Debug, Serialize)]
    pub enum DebugOutputMessage {
        Alignment {
            index: usize,
            pair_name: String,
            seq1: String,
            seq2: String,
            penalty: Penalty,
            grid: DpGrid,
            predecessors: PredecessorGrid,
        },
        Terminate,
    }

    impl DebugOutputMessage {
        pub fn new_from_alignment(index: usize, pair_name: &str, detailed: &DetailedAlignment) -> Self {
            Self::Alignment {
                index,
                pair_name: pair_name.to_string(),
                seq1: detailed.seq1.to_string(),
                seq2: detailed.seq2.to_string(),
                penalty: detailed.result.penalty,
                grid: detailed.grid.clone(),
                predecessors: detailed.predecessors.clone(),
            }
        }
    }
}

use messages::DebugOutputMessage;

/// Writes grid dumps to a directory on a background thread, one JSON file per aligned pair.
///
/// Files are named `{index}_{pair name}.json` with the pair's input index zero-padded, so pairs
/// with equal or similar names never share a file.
pub struct DebugOutputWriter {
    transmitter: Sender<DebugOutputMessage>,
    worker: DebugOutputWorker,
}

impl DebugOutputWriter {
    pub fn new<T: AsRef<Path>>(debug_output_dir: T) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();

        Self { transmitter: tx, worker: DebugOutputWorker::new(debug_output_dir, rx) }
    }

    pub fn log(&self, msg: DebugOutputMessage) {
        if let Err(e) = self.transmitter.send(msg) {
            warn!("Could not log debug message: {}", e)
        }
    }

    /// Flush outstanding messages and wait for the worker thread.
    pub fn join(self) -> Result<(), AlignError> {
        self.log(DebugOutputMessage::Terminate);
        self.worker.join()
    }
}

/// Keep file names portable: anything but ASCII alphanumerics, `-`, `_` and `.` becomes `_`.
fn file_stem(pair_name: &str) -> String {
    pair_name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '_' })
        .collect()
}

struct DebugOutputWorker {
    thread: JoinHandle<Result<(), AlignError>>,
}

impl DebugOutputWorker {
    fn new<T: AsRef<Path>>(debug_output_dir: T, receiver: Receiver<DebugOutputMessage>) -> Self {
        let output_path = debug_output_dir.as_ref().to_path_buf();

        Self { thread: std::thread::spawn(move || {
            debug!("Debug output directory {:?}", output_path);
            std::fs::create_dir_all(&output_path)?;

            for msg in receiver {
                match msg {
                    DebugOutputMessage::Alignment { index, ref pair_name, .. } => {
                        let fname = output_path.join(format!("{index:05}_{}.json", file_stem(pair_name)));
                        let mut output_file = File::create(fname).map(BufWriter::new)?;

                        serde_json::to_writer(&mut output_file, &msg)?;
                        writeln!(output_file)?;
                        output_file.flush()?;
                    },
                    DebugOutputMessage::Terminate => break
                }
            }

            Ok(())
        })}
    }

    fn join(self) -> Result<(), AlignError> {
        self.thread.join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::Aligner;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("seq 1/vs:seq-2"), "seq_1_vs_seq-2");
    }

    #[test]
    fn test_debug_writer_dumps_grids() {
        let dir = std::env::temp_dir().join(format!("seqalign-debug-{}", std::process::id()));
        let aligner: Aligner = Aligner::default();

        let writer = DebugOutputWriter::new(&dir);
        let detailed = aligner.align_detailed("ab", "a");
        writer.log(DebugOutputMessage::new_from_alignment(3, "x_vs_y", &detailed));
        writer.join().unwrap();

        let contents = std::fs::read_to_string(dir.join("00003_x_vs_y.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let dump = &value["Alignment"];

        assert_eq!(dump["index"], 3);
        assert_eq!(dump["pair_name"], "x_vs_y");
        assert_eq!(dump["penalty"], 2);
        assert_eq!(dump["grid"], serde_json::json!([[0, 2], [2, 0], [4, 2]]));
        assert_eq!(dump["predecessors"][1][1], "Diagonal");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clashing_pair_names_get_separate_files() {
        let dir = std::env::temp_dir().join(format!("seqalign-debug-names-{}", std::process::id()));
        let aligner: Aligner = Aligner::default();

        let writer = DebugOutputWriter::new(&dir);
        for (ix, (name, a, b)) in [("x y_vs_z", "ab", "a"), ("x_y_vs_z", "mean", "name"), ("x_y_vs_z", "", "")]
            .into_iter()
            .enumerate()
        {
            writer.log(DebugOutputMessage::new_from_alignment(ix, name, &aligner.align_detailed(a, b)));
        }
        writer.join().unwrap();

        let mut files: Vec<_> = std::fs::read_dir(&dir).unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        files.sort();
        assert_eq!(files, vec!["00000_x_y_vs_z.json", "00001_x_y_vs_z.json", "00002_x_y_vs_z.json"]);

        let contents = std::fs::read_to_string(dir.join("00001_x_y_vs_z.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["Alignment"]["penalty"], 6);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
