use serde::{Deserialize, Serialize};

use crate::aligner::scoring::SubstitutionCosts;
use crate::errors::AlignError;
use crate::symbols::{Symbol, SymbolClass};

pub const DEFAULT_GAP: u32 = 2;
pub const DEFAULT_VOWEL_VOWEL: u32 = 1;
pub const DEFAULT_CONSONANT_CONSONANT: u32 = 1;
pub const DEFAULT_CROSS_CLASS: u32 = 3;
pub const DEFAULT_DIGIT_DIGIT: u32 = 1;

/// Substitution costs determined by the classes of the two aligned symbols.
///
/// Identical symbols always cost zero. Two different symbols of the same class cost the
/// penalty for that class, and symbols of different classes (vowel vs. consonant, letter vs.
/// digit) cost the cross-class penalty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryCosts")]
pub struct CategoryCosts {
    gap: u32,
    vowel_vowel: u32,
    consonant_consonant: u32,
    cross_class: u32,
    digit_digit: u32,
}

impl CategoryCosts {
    pub fn new(
        gap: i64,
        vowel_vowel: i64,
        consonant_consonant: i64,
        cross_class: i64,
        digit_digit: i64,
    ) -> Result<Self, AlignError> {
        Ok(Self {
            gap: checked_weight("gap", gap)?,
            vowel_vowel: checked_weight("vowel-vowel", vowel_vowel)?,
            consonant_consonant: checked_weight("consonant-consonant", consonant_consonant)?,
            cross_class: checked_weight("cross-class", cross_class)?,
            digit_digit: checked_weight("digit-digit", digit_digit)?,
        })
    }

    #[inline(always)]
    pub fn vowel_vowel(&self) -> u32 {
        self.vowel_vowel
    }

    #[inline(always)]
    pub fn consonant_consonant(&self) -> u32 {
        self.consonant_consonant
    }

    #[inline(always)]
    pub fn cross_class(&self) -> u32 {
        self.cross_class
    }

    #[inline(always)]
    pub fn digit_digit(&self) -> u32 {
        self.digit_digit
    }
}

fn checked_weight(weight: &'static str, value: i64) -> Result<u32, AlignError> {
    if value < 0 {
        return Err(AlignError::NegativePenalty { weight, value });
    }

    u32::try_from(value).map_err(|_| AlignError::PenaltyTooLarge { weight, value })
}

impl Default for CategoryCosts {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            vowel_vowel: DEFAULT_VOWEL_VOWEL,
            consonant_consonant: DEFAULT_CONSONANT_CONSONANT,
            cross_class: DEFAULT_CROSS_CLASS,
            digit_digit: DEFAULT_DIGIT_DIGIT,
        }
    }
}

impl SubstitutionCosts for CategoryCosts {
    #[inline(always)]
    fn gap(&self) -> u32 {
        self.gap
    }

    #[inline]
    fn substitution(&self, a: Symbol, b: Symbol) -> u32 {
        if a == b {
            return 0;
        }

        match (a.class(), b.class()) {
            (SymbolClass::Consonant, SymbolClass::Consonant) => self.consonant_consonant,
            (SymbolClass::Vowel, SymbolClass::Vowel) => self.vowel_vowel,
            (SymbolClass::Digit, SymbolClass::Digit) => self.digit_digit,
            _ => self.cross_class,
        }
    }
}

/// On-disk representation; missing fields take the default weights, and signed values let us
/// report negative weights instead of a generic parse error.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCategoryCosts {
    gap: i64,
    vowel_vowel: i64,
    consonant_consonant: i64,
    cross_class: i64,
    digit_digit: i64,
}

impl Default for RawCategoryCosts {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP as i64,
            vowel_vowel: DEFAULT_VOWEL_VOWEL as i64,
            consonant_consonant: DEFAULT_CONSONANT_CONSONANT as i64,
            cross_class: DEFAULT_CROSS_CLASS as i64,
            digit_digit: DEFAULT_DIGIT_DIGIT as i64,
        }
    }
}

impl TryFrom<RawCategoryCosts> for CategoryCosts {
    type Error = AlignError;

    fn try_from(raw: RawCategoryCosts) -> Result<Self, Self::Error> {
        CategoryCosts::new(raw.gap, raw.vowel_vowel, raw.consonant_consonant, raw.cross_class, raw.digit_digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: u8) -> Symbol {
        Symbol::try_from(c).unwrap()
    }

    #[test]
    fn test_default_penalties() {
        let costs = CategoryCosts::default();

        assert_eq!(costs.substitution(sym(b'a'), sym(b'a')), 0);
        assert_eq!(costs.substitution(sym(b'7'), sym(b'7')), 0);
        assert_eq!(costs.substitution(sym(b'a'), sym(b'e')), 1);
        assert_eq!(costs.substitution(sym(b'b'), sym(b'z')), 1);
        assert_eq!(costs.substitution(sym(b'1'), sym(b'2')), 1);
        assert_eq!(costs.substitution(sym(b'a'), sym(b'b')), 3);
        assert_eq!(costs.substitution(sym(b'b'), sym(b'a')), 3);
        assert_eq!(costs.substitution(sym(b'a'), sym(b'1')), 3);
        assert_eq!(costs.substitution(sym(b'9'), sym(b'x')), 3);
        assert_eq!(costs.gap(), 2);
        assert_eq!(costs.gap_cost(4), 8);
    }

    #[test]
    fn test_custom_penalties() {
        let costs = CategoryCosts::new(5, 2, 4, 7, 9).unwrap();

        assert_eq!(costs.substitution(sym(b'o'), sym(b'u')), 2);
        assert_eq!(costs.substitution(sym(b'c'), sym(b'd')), 4);
        assert_eq!(costs.substitution(sym(b'c'), sym(b'o')), 7);
        assert_eq!(costs.substitution(sym(b'0'), sym(b'5')), 9);
        assert_eq!(costs.gap(), 5);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = CategoryCosts::new(2, 1, -1, 3, 1).unwrap_err();
        assert!(matches!(err, AlignError::NegativePenalty { weight: "consonant-consonant", value: -1 }));
    }

    #[test]
    fn test_oversized_weight_rejected() {
        let err = CategoryCosts::new(5_000_000_000, 1, 1, 3, 1).unwrap_err();
        assert!(matches!(err, AlignError::PenaltyTooLarge { weight: "gap", value: 5_000_000_000 }));

        let costs = CategoryCosts::new(u32::MAX as i64, 0, 0, 0, 0).unwrap();
        assert_eq!(costs.gap(), u32::MAX);

        let err = CategoryCosts::new(2, 1, 1, i64::MIN, 1).unwrap_err();
        assert!(matches!(err, AlignError::NegativePenalty { weight: "cross-class", .. }));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let costs: CategoryCosts = serde_json::from_str(r#"{"gap": 4, "cross_class": 6}"#).unwrap();
        assert_eq!(costs.gap(), 4);
        assert_eq!(costs.cross_class(), 6);
        assert_eq!(costs.vowel_vowel(), DEFAULT_VOWEL_VOWEL);

        let err = serde_json::from_str::<CategoryCosts>(r#"{"gap": -3}"#).unwrap_err();
        assert!(err.to_string().contains("gap penalty must be non-negative"));

        assert!(serde_json::from_str::<CategoryCosts>(r#"{"gap_open": 3}"#).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let costs = CategoryCosts::new(3, 1, 2, 5, 1).unwrap();
        let json = serde_json::to_string(&costs).unwrap();
        assert_eq!(serde_json::from_str::<CategoryCosts>(&json).unwrap(), costs);
    }
}
