use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use seqalign::io::CostOverrides;

/// The various output formats supported by seqalign
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Penalty followed by the alignment, one block per pair
    #[default]
    Text,

    /// Tab-separated values with a header line
    Tsv,

    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Align two sequences given on the command line
    Align(AlignArgs),

    /// Align consecutive pairs of records from a FASTA file
    Batch(BatchArgs),

    /// Align the built-in list of sample pairs
    Samples(SamplesArgs),
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// First sequence. Case is ignored and anything but letters and digits is removed.
    #[clap(help_heading = "Inputs")]
    pub seq1: String,

    /// Second sequence
    #[clap(help_heading = "Inputs")]
    pub seq2: String,

    /// Fail if an input has no letters or digits left after sanitizing
    #[arg(long)]
    #[clap(help_heading = "Inputs")]
    pub strict: bool,

    #[command(flatten)]
    pub costs: CostArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Sequence pairs in FASTA format (optionally gzipped). Records 1 and 2 form the first
    /// pair, records 3 and 4 the second, and so on.
    #[clap(help_heading = "Inputs")]
    pub sequences: PathBuf,

    /// Fail if an input has no letters or digits left after sanitizing
    #[arg(long)]
    #[clap(help_heading = "Inputs")]
    pub strict: bool,

    /// Number of worker threads
    #[arg(short = 't', long, default_value = "1")]
    pub threads: usize,

    #[command(flatten)]
    pub costs: CostArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SamplesArgs {
    #[command(flatten)]
    pub costs: CostArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct CostArgs {
    /// JSON file with penalty weights. Flags below override values from this file.
    #[arg(short = 'c', long)]
    #[clap(help_heading = "Alignment configuration")]
    pub costs: Option<PathBuf>,

    /// Penalty for aligning a symbol against a gap [default: 2]
    #[arg(short = 'g', long, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub gap: Option<i64>,

    /// Penalty for two different vowels [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub vowel_vowel: Option<i64>,

    /// Penalty for two different consonants [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub consonant_consonant: Option<i64>,

    /// Penalty for symbols of different classes, e.g. a vowel and a consonant [default: 3]
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub cross_class: Option<i64>,

    /// Penalty for two different digits [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub digit_digit: Option<i64>,

    /// Character written at gap positions
    #[arg(long, default_value = "_")]
    #[clap(help_heading = "Alignment configuration")]
    pub gap_marker: char,
}

impl CostArgs {
    pub fn overrides(&self) -> CostOverrides {
        CostOverrides {
            gap: self.gap,
            vowel_vowel: self.vowel_vowel,
            consonant_consonant: self.consonant_consonant,
            cross_class: self.cross_class,
            digit_digit: self.digit_digit,
        }
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,

    /// Include the memoization and predecessor tables in text output
    #[arg(long)]
    #[clap(help_heading = "Outputs")]
    pub show_grids: bool,

    /// Write per-pair grid dumps as JSON to the given directory
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub debug_output: Option<PathBuf>,
}
