use std::fs::{self, File};
use std::io::{self, stdout, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, span, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use seqalign::batch::{align_pairs, SequencePair};
use seqalign::debug::messages::DebugOutputMessage;
use seqalign::debug::DebugOutputWriter;
use seqalign::io::report::{write_json, write_text, write_tsv, AlignmentRecord};
use seqalign::io::{load_pairs, resolve_costs};
use seqalign::{Aligner, Sequence};

mod cli;

use cli::{CliArgs, CliSubcommand, CostArgs, OutputArgs, OutputType};

/// Pairs aligned by the `samples` subcommand.
const SAMPLE_PAIRS: &[(&str, &str)] = &[
    ("mean", "name"),
    ("acbd", "zcbd"),
    ("abc", "ab"),
    ("abc", "bc"),
    ("ab", "1ab"),
    ("kitten", "sitting"),
    ("ocurrance", "occurrence"),
    ("Hello, World!", "hello world"),
];

fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();

    Ok(())
}

fn build_aligner(args: &CostArgs) -> Result<Aligner> {
    let costs = resolve_costs(args.costs.as_deref(), &args.overrides())
        .with_context(|| match &args.costs {
            Some(path) => format!("Could not determine penalty weights from {path:?} and flags"),
            None => "Invalid penalty weights".to_string(),
        })?;

    info!("Penalty weights: {:?}", costs);

    let aligner = Aligner::new(costs)
        .with_gap_marker(args.gap_marker)
        .context("Invalid gap marker")?;

    Ok(aligner)
}

fn check_strict(pairs: &[SequencePair]) -> Result<()> {
    for pair in pairs {
        Sequence::sanitize_strict(&pair.seq1).with_context(|| format!("Invalid sequence '{}'", pair.name1))?;
        Sequence::sanitize_strict(&pair.seq2).with_context(|| format!("Invalid sequence '{}'", pair.name2))?;
    }

    Ok(())
}

fn run_pairs(aligner: &Aligner, pairs: &[SequencePair], threads: usize, output: &OutputArgs) -> Result<()> {
    let debug_writer = output.debug_output.as_ref().map(DebugOutputWriter::new);
    let with_tables = output.show_grids && output.output_type == OutputType::Text;

    let records = align_pairs(aligner, pairs, threads, |ix, pair, detailed| {
        if let Some(debug) = &debug_writer {
            debug.log(DebugOutputMessage::new_from_alignment(ix, &pair.name(), &detailed));
        }

        AlignmentRecord::new(pair, detailed, aligner.gap_marker(), with_tables)
    });

    // Determine where to write the results to
    let mut writer: Box<dyn Write> = if let Some(path) = &output.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {path:?}"))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(stdout())
    };

    match output.output_type {
        OutputType::Text => write_text(&mut writer, &records)?,
        OutputType::Tsv => write_tsv(&mut writer, &records)?,
        OutputType::Json => write_json(&mut writer, &records)?,
    }
    writer.flush()?;

    if let Some(debug) = debug_writer {
        info!("Waiting for debug writer thread to finish...");
        debug.join().context("Could not write debug output")?;
    }

    Ok(())
}

fn align_subcommand(args: &cli::AlignArgs) -> Result<()> {
    let aligner = build_aligner(&args.costs)?;
    let pairs = [SequencePair::new("seq1", &args.seq1, "seq2", &args.seq2)];

    if args.strict {
        check_strict(&pairs)?;
    }

    run_pairs(&aligner, &pairs, 1, &args.output)
}

fn batch_subcommand(args: &cli::BatchArgs) -> Result<()> {
    let aligner = build_aligner(&args.costs)?;
    let pairs = load_pairs(&args.sequences)
        .with_context(|| format!("Could not read sequence pairs from {:?}", args.sequences))?;

    info!("Read {} pairs from {:?}", pairs.len(), args.sequences);

    if args.strict {
        check_strict(&pairs)?;
    }

    run_pairs(&aligner, &pairs, args.threads, &args.output)
}

fn samples_subcommand(args: &cli::SamplesArgs) -> Result<()> {
    let aligner = build_aligner(&args.costs)?;
    let pairs: Vec<_> = SAMPLE_PAIRS.iter()
        .map(|(a, b)| SequencePair::new(*a, *a, *b, *b))
        .collect();

    run_pairs(&aligner, &pairs, 1, &args.output)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let span = span!(Level::INFO, "seqalign");
    let _enter = span.enter();

    match &args.command {
        Some(CliSubcommand::Align(v)) => align_subcommand(v)?,
        Some(CliSubcommand::Batch(v)) => batch_subcommand(v)?,
        Some(CliSubcommand::Samples(v)) => samples_subcommand(v)?,
        None => anyhow::bail!("No subcommand given."),
    };

    Ok(())
}
