pub mod errors;
pub mod symbols;
pub mod aligner;
pub mod batch;
pub mod io;
pub mod debug;

pub use aligner::{Aligner, AlignmentResult, DetailedAlignment};
pub use aligner::scoring::{CategoryCosts, Penalty, SubstitutionCosts};
pub use symbols::{Sequence, Symbol, SymbolClass};
