//! Normalization of native estimator scores onto a shared 4-level scale.

use crate::estimators::{
    ChecklistReport, CrackabilityReport, EstimatorResult, NativeScore, Outcome, PolicyReport,
    StrengthCode,
};

/// Shared ordinal strength scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak = 0,
    Okay = 1,
    Good = 2,
    Strong = 3,
}

impl StrengthLevel {
    /// Fixed label for the level.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Okay => "Okay",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// The level as an integer in `0..=3`.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// A native score mapped onto the shared scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVerdict {
    pub level: StrengthLevel,
    /// Estimator-specific wording for the level.
    pub level_text: String,
    /// Actionable recommendation for the caller to display.
    pub recommendation: String,
}

impl NormalizedVerdict {
    fn new(level: StrengthLevel, level_text: &str, recommendation: impl Into<String>) -> Self {
        Self {
            level,
            level_text: level_text.to_string(),
            recommendation: recommendation.into(),
        }
    }
}

/// Maps one estimator result onto the shared scale.
///
/// Returns `None` for failures and for the raw-entropy estimator, whose
/// bits-of-entropy number is reported as-is without a level.
pub fn normalize(result: &EstimatorResult) -> Option<NormalizedVerdict> {
    let score = match &result.outcome {
        Outcome::Success(score) => score,
        Outcome::Failure(_) => return None,
    };

    match score {
        NativeScore::Policy(report) => Some(normalize_policy(report)),
        NativeScore::Crackability(report) => Some(normalize_crackability(report)),
        NativeScore::Checklist(report) => Some(normalize_checklist(report)),
        NativeScore::Classifier(report) => Some(normalize_classifier(report.strength_code)),
        NativeScore::RawEntropy(_) => None,
    }
}

fn normalize_crackability(report: &CrackabilityReport) -> NormalizedVerdict {
    match report.score {
        0 => NormalizedVerdict::new(
            StrengthLevel::Weak,
            "Very Weak",
            "Avoid (crackability score: Very Weak)",
        ),
        1 => NormalizedVerdict::new(
            StrengthLevel::Okay,
            "Weak",
            "Avoid (crackability score: Weak)",
        ),
        2 => NormalizedVerdict::new(
            StrengthLevel::Good,
            "Fair",
            "Usable with caution (crackability score: Fair)",
        ),
        3 => NormalizedVerdict::new(
            StrengthLevel::Strong,
            "Strong",
            "Good to use (crackability score: Strong)",
        ),
        _ => NormalizedVerdict::new(
            StrengthLevel::Strong,
            "Very Strong",
            "Good to use (crackability score: Very Strong)",
        ),
    }
}

fn normalize_policy(report: &PolicyReport) -> NormalizedVerdict {
    if !report.meets_baseline || report.rules_passed < 3 {
        NormalizedVerdict::new(
            StrengthLevel::Weak,
            "Non-Compliant",
            "Avoid (Fails basic policy)",
        )
    } else if report.rules_passed == 3 {
        NormalizedVerdict::new(
            StrengthLevel::Okay,
            "Passable",
            "Passable, consider improving (Basic policy)",
        )
    } else if report.rules_passed == 4 {
        NormalizedVerdict::new(
            StrengthLevel::Good,
            "Good",
            "Good (Meets most basic criteria)",
        )
    } else {
        NormalizedVerdict::new(
            StrengthLevel::Strong,
            "Excellent",
            "Excellent (Meets all basic criteria)",
        )
    }
}

fn normalize_classifier(code: StrengthCode) -> NormalizedVerdict {
    // Fixed lookup table; adjacent tiers collapse onto shared levels.
    let level = match code {
        StrengthCode::VeryWeak => StrengthLevel::Weak,
        StrengthCode::Weak => StrengthLevel::Okay,
        StrengthCode::Reasonable | StrengthCode::Medium => StrengthLevel::Good,
        StrengthCode::Strong | StrengthCode::VeryStrong => StrengthLevel::Strong,
    };
    let meaning = code.meaning();
    let recommendation = match level {
        StrengthLevel::Weak => format!("Avoid (classifier: {meaning})"),
        StrengthLevel::Okay => format!("Not Recommended (classifier: {meaning})"),
        StrengthLevel::Good => format!("Usable with caution (classifier: {meaning})"),
        StrengthLevel::Strong => format!("Good to use (classifier: {meaning})"),
    };
    NormalizedVerdict::new(level, meaning, recommendation)
}

fn normalize_checklist(report: &ChecklistReport) -> NormalizedVerdict {
    let errors = report.errors.len();
    if report.strong && report.warnings.is_empty() {
        NormalizedVerdict::new(
            StrengthLevel::Strong,
            "Strongly Compliant",
            "Excellent (Passes all checklist tests)",
        )
    } else if report.strong {
        NormalizedVerdict::new(
            StrengthLevel::Good,
            "Compliant (with warnings)",
            "Good (Passes checklist tests, but has warnings)",
        )
    } else if errors >= 1 && errors <= 2 {
        NormalizedVerdict::new(
            StrengthLevel::Okay,
            "Partially Compliant",
            "Consider improving (Fails few checklist tests)",
        )
    } else {
        NormalizedVerdict::new(
            StrengthLevel::Weak,
            "Non-Compliant",
            "Avoid (Fails checklist tests)",
        )
    }
}
