use crate::symbols::Symbol;

/// One column of an alignment. A gap on either side is represented by `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    /// Symbol from the first sequence
    pub first: Option<Symbol>,

    /// Symbol from the second sequence
    pub second: Option<Symbol>
}

impl AlignedPair {
    pub fn new(first: Option<Symbol>, second: Option<Symbol>) -> Self {
        Self { first, second }
    }

    pub fn is_aligned(&self) -> bool {
        matches!((self.first, self.second), (Some(_), Some(_)))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }
}

pub type Alignment = Vec<AlignedPair>;

/// Render both rows of an alignment, writing `gap_marker` at gap positions.
pub fn alignment_rows(alignment: &[AlignedPair], gap_marker: char) -> (String, String) {
    let render = |sym: Option<Symbol>| sym.map_or(gap_marker, |s| s.as_char());

    alignment.iter()
        .map(|pair| (render(pair.first), render(pair.second)))
        .unzip()
}
