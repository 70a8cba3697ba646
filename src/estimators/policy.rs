//! Local policy and theoretical-entropy estimator.

use std::collections::BTreeSet;

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{is_extended, CharClass, EXTENDED_CHARS};

/// Minimum length for the length rule and the baseline policy.
const BASELINE_LENGTH: usize = 10;

/// Minimum number of distinct character classes for the baseline policy.
const BASELINE_CLASSES: u8 = 3;

/// Output of the local estimator.
///
/// Class presence is re-derived from the secret itself, so a hand-typed
/// secret scores identically to a generated one.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyReport {
    /// Length in code points, not bytes.
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Membership in the fixed extended table, not "any non-ASCII".
    pub has_unicode: bool,
    /// Rules satisfied out of 6: length >= 10 plus the five presences.
    pub rules_passed: u8,
    /// length >= 10 and at least 3 distinct classes present.
    pub meets_baseline: bool,
    /// Size of the deduplicated union of detected alphabets.
    pub alphabet_size: usize,
    /// `length * log2(alphabet_size)`; 0 when the alphabet has <= 1 symbol.
    pub entropy_bits: f64,
}

impl PolicyReport {
    /// Number of distinct character classes detected (0-5).
    pub fn classes_detected(&self) -> u8 {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
            self.has_unicode,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }
}

/// Evaluates the secret against the baseline policy and computes the
/// theoretical entropy of the detected alphabet.
pub fn evaluate_policy(secret: &SecretString) -> PolicyReport {
    let pwd = secret.expose_secret();
    let length = pwd.chars().count();

    let has_lowercase = pwd.chars().any(|c| CharClass::Lowercase.contains(c));
    let has_uppercase = pwd.chars().any(|c| CharClass::Uppercase.contains(c));
    let has_digit = pwd.chars().any(|c| CharClass::Digit.contains(c));
    let has_symbol = pwd.chars().any(|c| CharClass::Symbol.contains(c));
    let has_unicode = pwd.chars().any(is_extended);

    let mut rules_passed = 0u8;
    if length >= BASELINE_LENGTH {
        rules_passed += 1;
    }
    for present in [has_lowercase, has_uppercase, has_digit, has_symbol, has_unicode] {
        if present {
            rules_passed += 1;
        }
    }

    let mut alphabet: BTreeSet<char> = BTreeSet::new();
    for (class, present) in [
        (CharClass::Lowercase, has_lowercase),
        (CharClass::Uppercase, has_uppercase),
        (CharClass::Digit, has_digit),
        (CharClass::Symbol, has_symbol),
    ] {
        if present {
            alphabet.extend(class.alphabet().chars());
        }
    }
    if has_unicode {
        // Conservative estimate: only the known extended set.
        alphabet.extend(EXTENDED_CHARS.iter().map(|(c, _)| *c));
    }

    let alphabet_size = alphabet.len();
    let entropy_bits = if alphabet_size > 1 && length > 0 {
        length as f64 * (alphabet_size as f64).log2()
    } else {
        0.0
    };

    let classes_detected = [has_lowercase, has_uppercase, has_digit, has_symbol, has_unicode]
        .iter()
        .filter(|&&b| b)
        .count() as u8;

    PolicyReport {
        length,
        has_lowercase,
        has_uppercase,
        has_digit,
        has_symbol,
        has_unicode,
        rules_passed,
        meets_baseline: length >= BASELINE_LENGTH && classes_detected >= BASELINE_CLASSES,
        alphabet_size,
        entropy_bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_policy_typical_password() {
        let report = evaluate_policy(&secret("Password1!"));
        assert_eq!(report.length, 10);
        assert!(report.has_lowercase);
        assert!(report.has_uppercase);
        assert!(report.has_digit);
        assert!(report.has_symbol);
        assert!(!report.has_unicode);
        assert_eq!(report.classes_detected(), 4);
        assert_eq!(report.rules_passed, 5);
        assert!(report.meets_baseline);
        // 26 + 26 + 10 + 28 symbols
        assert_eq!(report.alphabet_size, 90);
        let expected = 10.0 * 90f64.log2();
        assert!((report.entropy_bits - expected).abs() < 1e-9);
    }

    #[test]
    fn test_policy_length_counts_code_points() {
        let report = evaluate_policy(&secret("abéç"));
        assert_eq!(report.length, 4);
        assert!(report.has_unicode);
    }

    #[test]
    fn test_policy_unicode_is_table_membership() {
        // Non-ASCII but outside the fixed table does not count.
        let report = evaluate_policy(&secret("пароль"));
        assert!(!report.has_unicode);
        // Table member counts.
        assert!(evaluate_policy(&secret("abcé")).has_unicode);
    }

    #[test]
    fn test_policy_empty_secret() {
        let report = evaluate_policy(&secret(""));
        assert_eq!(report.length, 0);
        assert_eq!(report.rules_passed, 0);
        assert!(!report.meets_baseline);
        assert_eq!(report.alphabet_size, 0);
        assert_eq!(report.entropy_bits, 0.0);
    }

    #[test]
    fn test_policy_single_symbol_alphabet_has_zero_entropy() {
        // Only digits detected: alphabet of 10, fine. A secret from an
        // empty detection set must yield zero.
        let report = evaluate_policy(&secret("     "));
        assert_eq!(report.alphabet_size, 0);
        assert_eq!(report.entropy_bits, 0.0);
    }

    #[test]
    fn test_policy_baseline_needs_three_classes() {
        // Long but only two classes.
        let report = evaluate_policy(&secret("abcdefgh1234"));
        assert!(report.length >= 10);
        assert_eq!(report.classes_detected(), 2);
        assert!(!report.meets_baseline);
    }

    #[test]
    fn test_policy_baseline_needs_length() {
        // Three classes but short.
        let report = evaluate_policy(&secret("Ab1"));
        assert_eq!(report.classes_detected(), 3);
        assert!(!report.meets_baseline);
    }

    #[test]
    fn test_entropy_monotonic_in_length() {
        let shorter = evaluate_policy(&secret("abcdef"));
        let longer = evaluate_policy(&secret("abcdefghij"));
        assert_eq!(shorter.alphabet_size, longer.alphabet_size);
        assert!(longer.entropy_bits > shorter.entropy_bits);
    }

    #[test]
    fn test_entropy_monotonic_in_alphabet() {
        let narrow = evaluate_policy(&secret("abcdefgh"));
        let wide = evaluate_policy(&secret("abcdefG1"));
        assert_eq!(narrow.length, wide.length);
        assert!(wide.alphabet_size > narrow.alphabet_size);
        assert!(wide.entropy_bits > narrow.entropy_bits);
    }
}
