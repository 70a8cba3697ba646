//! Character classes and the fixed extended-character table.
//!
//! Generation draws from these alphabets and analysis detects class presence
//! against the very same data, so the two sides can never disagree about
//! what counts as, say, a symbol.

/// ASCII punctuation used for the symbol class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>/?~";

/// Labeled non-ASCII code points used for the optional unicode guarantee.
///
/// The same table backs the random draw during generation and the
/// `has_unicode` membership test during analysis.
pub const EXTENDED_CHARS: &[(char, &str)] = &[
    ('é', "e acute"),
    ('è', "e grave"),
    ('à', "a grave"),
    ('ù', "u grave"),
    ('ç', "c cedilla"),
    ('ñ', "n tilde"),
    ('ö', "o umlaut"),
    ('ü', "u umlaut"),
    ('€', "euro sign"),
    ('£', "pound sign"),
    ('¥', "yen sign"),
    ('µ', "micro sign"),
    ('ø', "o stroke"),
    ('æ', "ae ligature"),
];

/// A named character class with a fixed alphabet.
///
/// Class alphabets are pairwise disjoint by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in generation order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// The class alphabet.
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Digit => "0123456789",
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Stable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }

    /// Membership test against the class alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Whether `c` is one of the fixed extended characters.
pub fn is_extended(c: char) -> bool {
    EXTENDED_CHARS.iter().any(|(e, _)| *e == c)
}

/// The extended characters without their labels.
pub fn extended_alphabet() -> Vec<char> {
    EXTENDED_CHARS.iter().map(|(c, _)| *c).collect()
}
