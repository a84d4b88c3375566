//! Normalized alignment symbols and the sanitizer that produces them.
//!
//! Only lowercase ASCII letters and digits survive sanitization. Every surviving
//! symbol belongs to exactly one [`SymbolClass`].

use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::errors::AlignError;

pub const VOWELS: &[u8; 5] = b"aeiou";
pub const CONSONANTS: &[u8; 21] = b"bcdfghjklmnpqrstvwxyz";
pub const DIGITS: &[u8; 10] = b"0123456789";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Vowel,
    Consonant,
    Digit,
}

const fn build_class_table() -> [Option<SymbolClass>; 256] {
    let mut table = [None; 256];

    let mut i = 0;
    while i < VOWELS.len() {
        table[VOWELS[i] as usize] = Some(SymbolClass::Vowel);
        i += 1;
    }

    i = 0;
    while i < CONSONANTS.len() {
        table[CONSONANTS[i] as usize] = Some(SymbolClass::Consonant);
        i += 1;
    }

    i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i] as usize] = Some(SymbolClass::Digit);
        i += 1;
    }

    table
}

/// Class membership for every byte value, `None` for bytes that are not a symbol.
static CLASS_TABLE: [Option<SymbolClass>; 256] = build_class_table();

/// Classify a byte against the fixed vowel, consonant and digit sets.
///
/// Uppercase letters are not folded here; use [`Symbol::try_from`] for that.
#[inline]
pub fn classify(byte: u8) -> Option<SymbolClass> {
    CLASS_TABLE[byte as usize]
}

/// A single normalized character: a lowercase ASCII letter or a digit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    byte: u8,
    class: SymbolClass,
}

impl Symbol {
    #[inline(always)]
    pub fn as_char(&self) -> char {
        self.byte as char
    }

    #[inline(always)]
    pub fn class(&self) -> SymbolClass {
        self.class
    }
}

impl TryFrom<u8> for Symbol {
    type Error = AlignError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let byte = value.to_ascii_lowercase();

        classify(byte)
            .map(|class| Symbol { byte, class })
            .ok_or(AlignError::InvalidSymbol(value))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered list of symbols derived from a raw input string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

impl Sequence {
    /// Lowercase `raw` and drop everything that is not an ASCII letter or digit.
    ///
    /// Never fails; an input without any letters or digits yields an empty sequence.
    pub fn sanitize(raw: &str) -> Self {
        raw.bytes()
            .filter_map(|b| Symbol::try_from(b).ok())
            .collect()
    }

    /// Like [`Sequence::sanitize`], but rejects a non-empty input that has nothing left after
    /// sanitization.
    pub fn sanitize_strict(raw: &str) -> Result<Self, AlignError> {
        let seq = Self::sanitize(raw);

        if seq.is_empty() && !raw.is_empty() {
            return Err(AlignError::EmptyAfterSanitizing(raw.to_string()));
        }

        Ok(seq)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item=&Symbol> + '_ {
        self.symbols.iter()
    }
}

impl Index<usize> for Sequence {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl FromIterator<Symbol> for Sequence {
    fn from_iter<T: IntoIterator<Item=Symbol>>(iter: T) -> Self {
        Self { symbols: iter.into_iter().collect() }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }

        Ok(())
    }
}
