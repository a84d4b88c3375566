use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::aligner::scoring::{CategoryCosts, SubstitutionCosts};
use crate::errors::AlignError;

/// Load penalty weights from a JSON file. Missing weights take their default values.
///
/// ```json
/// { "gap": 2, "vowel_vowel": 1, "consonant_consonant": 1, "cross_class": 3, "digit_digit": 1 }
/// ```
pub fn load_costs(path: &Path) -> Result<CategoryCosts, AlignError> {
    let file = File::open(path)
        .map(BufReader::new)
        .map_err(|source| AlignError::FileReadError { source })?;

    Ok(serde_json::from_reader(file)?)
}

/// Individually specified weights, e.g. from the command line. `None` keeps the base value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CostOverrides {
    pub gap: Option<i64>,
    pub vowel_vowel: Option<i64>,
    pub consonant_consonant: Option<i64>,
    pub cross_class: Option<i64>,
    pub digit_digit: Option<i64>,
}

impl CostOverrides {
    pub fn apply(&self, base: CategoryCosts) -> Result<CategoryCosts, AlignError> {
        CategoryCosts::new(
            self.gap.unwrap_or(base.gap() as i64),
            self.vowel_vowel.unwrap_or(base.vowel_vowel() as i64),
            self.consonant_consonant.unwrap_or(base.consonant_consonant() as i64),
            self.cross_class.unwrap_or(base.cross_class() as i64),
            self.digit_digit.unwrap_or(base.digit_digit() as i64),
        )
    }
}

/// Start from the default weights, replace them with those from `path` if given, and finally
/// apply `overrides` on top.
pub fn resolve_costs(path: Option<&Path>, overrides: &CostOverrides) -> Result<CategoryCosts, AlignError> {
    let base = match path {
        Some(path) => load_costs(path)?,
        None => CategoryCosts::default(),
    };

    overrides.apply(base)
}
