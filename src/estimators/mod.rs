//! Strength estimators.
//!
//! One local estimator plus adapters for the four externally computed
//! signals. Each estimator produces an [`EstimatorResult`]; a failure in one
//! never invalidates another.

mod external;
mod policy;

pub use external::{
    checklist_result, classifier_result, crackability_result, raw_entropy_result,
    ChecklistReport, ClassifierReport, CrackabilityReport, EntropyReport, StrengthCode,
};
pub use policy::{evaluate_policy, PolicyReport};

/// The closed set of estimator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EstimatorKind {
    /// Local policy-and-entropy estimator; never sourced externally.
    PolicyEntropy,
    /// Pattern-aware crackability model (ordinal score 0-4).
    Crackability,
    /// Rule checklist with required and optional tests.
    Checklist,
    /// Named strength tier classifier.
    Classifier,
    /// Raw bits-of-entropy formula.
    RawEntropy,
}

impl EstimatorKind {
    /// Every estimator, local first.
    pub const ALL: [EstimatorKind; 5] = [
        EstimatorKind::PolicyEntropy,
        EstimatorKind::Crackability,
        EstimatorKind::Checklist,
        EstimatorKind::Classifier,
        EstimatorKind::RawEntropy,
    ];

    /// The estimators sourced from the external analysis backend.
    pub const EXTERNAL: [EstimatorKind; 4] = [
        EstimatorKind::Crackability,
        EstimatorKind::Checklist,
        EstimatorKind::Classifier,
        EstimatorKind::RawEntropy,
    ];

    /// Stable name used in reports and payload keys.
    pub fn name(&self) -> &'static str {
        match self {
            EstimatorKind::PolicyEntropy => "policy_entropy",
            EstimatorKind::Crackability => "crackability",
            EstimatorKind::Checklist => "checklist",
            EstimatorKind::Classifier => "classifier",
            EstimatorKind::RawEntropy => "raw_entropy",
        }
    }
}

/// An estimator's native score, one tagged variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeScore {
    Policy(PolicyReport),
    Crackability(CrackabilityReport),
    Checklist(ChecklistReport),
    Classifier(ClassifierReport),
    RawEntropy(EntropyReport),
}

/// Success or failure of one estimator run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(NativeScore),
    Failure(String),
}

/// The outcome of one estimator against one secret.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorResult {
    pub kind: EstimatorKind,
    pub outcome: Outcome,
}

impl EstimatorResult {
    pub fn success(kind: EstimatorKind, score: NativeScore) -> Self {
        Self {
            kind,
            outcome: Outcome::Success(score),
        }
    }

    pub fn failure(kind: EstimatorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            outcome: Outcome::Failure(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
}
