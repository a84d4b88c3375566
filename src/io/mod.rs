pub mod costs;
pub mod fasta;
pub mod report;

pub use costs::{load_costs, resolve_costs, CostOverrides};
pub use fasta::{load_pairs, read_pairs};
