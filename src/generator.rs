//! Random password and passphrase generation.
//!
//! Password mode guarantees at least one character from every enabled class
//! by drawing the guaranteed characters up front, then filling the remaining
//! length from the combined alphabet and shuffling. Guarantees are never
//! left to chance.

use std::collections::BTreeSet;

use secrecy::SecretString;

use crate::charset::{extended_alphabet, CharClass};
use crate::dictionary::Dictionary;
use crate::rng::RandomSource;
use crate::{Error, Result};

/// Configuration for password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    /// Total output length in code points. Must be at least 1.
    pub length: usize,
    /// Character classes that must each contribute at least one character.
    pub classes: BTreeSet<CharClass>,
    /// Guarantee one character from the extended table.
    pub include_unicode: bool,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharClass::ALL.into_iter().collect(),
            include_unicode: true,
        }
    }
}

/// Configuration for passphrase generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseSpec {
    /// Number of words to select. Must be at least 1.
    pub word_count: usize,
    /// Joined between words.
    pub separator: String,
    /// Inclusive lower bound on normalized word length.
    pub min_word_length: usize,
    /// Inclusive upper bound on normalized word length.
    pub max_word_length: usize,
    /// Uppercase the first code point of each word.
    pub capitalize: bool,
    /// Append one random digit.
    pub append_digit: bool,
    /// Append one random symbol.
    pub append_symbol: bool,
    /// Append one random extended character.
    pub append_unicode: bool,
}

impl Default for PassphraseSpec {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            min_word_length: 4,
            max_word_length: 8,
            capitalize: true,
            append_digit: true,
            append_symbol: true,
            append_unicode: true,
        }
    }
}

/// Generates a random password satisfying `spec`.
///
/// When the mandatory per-class characters alone exceed `spec.length`, the
/// mandatory list is truncated to the requested length and no fill occurs;
/// the length cap wins over the inclusion guarantees.
pub fn generate_password<R: rand::Rng + rand::CryptoRng>(
    spec: &GenerationSpec,
    rng: &mut RandomSource<R>,
) -> Result<SecretString> {
    if spec.length < 1 {
        return Err(Error::InvalidConfiguration(
            "password length must be at least 1".to_string(),
        ));
    }
    if spec.classes.is_empty() && !spec.include_unicode {
        return Err(Error::InvalidConfiguration(
            "at least one character class must be selected".to_string(),
        ));
    }

    let mut parts: Vec<char> = Vec::with_capacity(spec.length);
    let mut active: Vec<char> = Vec::new();

    // One guaranteed character per enabled class, classes in fixed order.
    for class in CharClass::ALL {
        if !spec.classes.contains(&class) {
            continue;
        }
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        parts.push(*rng.choose(&alphabet)?);
        active.extend(alphabet);
    }

    if spec.include_unicode {
        let extended = extended_alphabet();
        parts.push(*rng.choose(&extended)?);
    }

    if spec.length < parts.len() {
        // Length cap beats the inclusion guarantees.
        parts.truncate(spec.length);
    } else {
        // Fill comes from the selected classes only, never the extended
        // table. With a unicode-only spec there is no class alphabet to
        // fill from, so fall back to lowercase.
        if active.is_empty() {
            active = CharClass::Lowercase.alphabet().chars().collect();
        }
        for _ in 0..(spec.length - parts.len()) {
            parts.push(*rng.choose(&active)?);
        }
    }

    rng.shuffle(&mut parts)?;
    Ok(SecretString::new(parts.into_iter().collect::<String>().into()))
}

/// Generates a random passphrase from `dictionary` satisfying `spec`.
///
/// Selected words are pairwise distinct. The optional digit, symbol and
/// extended-character suffixes are appended in that fixed order, each
/// independently of the others.
pub fn generate_passphrase<R: rand::Rng + rand::CryptoRng>(
    spec: &PassphraseSpec,
    dictionary: &Dictionary,
    rng: &mut RandomSource<R>,
) -> Result<SecretString> {
    if spec.word_count < 1 {
        return Err(Error::InvalidConfiguration(
            "word count must be at least 1".to_string(),
        ));
    }
    if spec.min_word_length > spec.max_word_length {
        return Err(Error::InvalidConfiguration(
            "minimum word length exceeds maximum".to_string(),
        ));
    }

    let words = dictionary.filtered(spec.min_word_length, spec.max_word_length)?;
    if words.len() < spec.word_count {
        return Err(Error::InsufficientWords {
            needed: spec.word_count,
            available: words.len(),
        });
    }

    let take = spec.word_count.min(words.len());
    let indices = rng.distinct_indices(words.len(), take)?;

    let selected: Vec<String> = indices
        .into_iter()
        .map(|i| {
            let word = &words[i];
            if spec.capitalize {
                capitalize_first(word)
            } else {
                word.clone()
            }
        })
        .collect();

    let mut out = selected.join(&spec.separator);

    if spec.append_digit {
        let digits: Vec<char> = CharClass::Digit.alphabet().chars().collect();
        out.push(*rng.choose(&digits)?);
    }
    if spec.append_symbol {
        let symbols: Vec<char> = CharClass::Symbol.alphabet().chars().collect();
        out.push(*rng.choose(&symbols)?);
    }
    if spec.append_unicode {
        let extended = extended_alphabet();
        out.push(*rng.choose(&extended)?);
    }

    Ok(SecretString::new(out.into()))
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
