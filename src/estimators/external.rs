//! Adapters for the externally computed strength signals.
//!
//! Each adapter reads its own slot of the backend payload. A slot that is
//! absent or fails to parse turns into that estimator's failure; sibling
//! estimators are unaffected.

use serde::Deserialize;
use serde_json::Value;

use crate::backend::BackendPayload;

use super::{EstimatorKind, EstimatorResult, NativeScore};

/// Pattern-aware crackability model output (zxcvbn-style).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrackabilityReport {
    /// Ordinal score, 0 (worst) to 4 (best).
    pub score: u8,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Rule checklist output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChecklistReport {
    pub strong: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, rename = "optionalTestsPassed")]
    pub optional_tests_passed: Option<u32>,
}

/// Named strength tiers emitted by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthCode {
    VeryWeak,
    Weak,
    Reasonable,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthCode {
    /// Human-readable tier name.
    pub fn meaning(&self) -> &'static str {
        match self {
            StrengthCode::VeryWeak => "Very Weak",
            StrengthCode::Weak => "Weak",
            StrengthCode::Reasonable => "Reasonable",
            StrengthCode::Medium => "Medium",
            StrengthCode::Strong => "Strong",
            StrengthCode::VeryStrong => "Very Strong",
        }
    }
}

/// Classifier output: a named tier plus per-class presence flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassifierReport {
    #[serde(rename = "strengthCode")]
    pub strength_code: StrengthCode,
    #[serde(default)]
    pub charsets: std::collections::BTreeMap<String, bool>,
}

/// Raw bits-of-entropy output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntropyReport {
    #[serde(rename = "shannonEntropyBits")]
    pub shannon_entropy_bits: f64,
}

fn from_slot<T, F>(kind: EstimatorKind, slot: Option<&Value>, wrap: F) -> EstimatorResult
where
    T: for<'de> Deserialize<'de>,
    F: FnOnce(T) -> NativeScore,
{
    match slot {
        None => EstimatorResult::failure(kind, "missing from backend payload"),
        Some(value) => match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => EstimatorResult::success(kind, wrap(parsed)),
            Err(e) => EstimatorResult::failure(kind, format!("malformed payload: {e}")),
        },
    }
}

pub fn crackability_result(payload: &BackendPayload) -> EstimatorResult {
    from_slot(
        EstimatorKind::Crackability,
        payload.crackability.as_ref(),
        NativeScore::Crackability,
    )
}

pub fn checklist_result(payload: &BackendPayload) -> EstimatorResult {
    from_slot(
        EstimatorKind::Checklist,
        payload.checklist.as_ref(),
        NativeScore::Checklist,
    )
}

pub fn classifier_result(payload: &BackendPayload) -> EstimatorResult {
    from_slot(
        EstimatorKind::Classifier,
        payload.classifier.as_ref(),
        NativeScore::Classifier,
    )
}

pub fn raw_entropy_result(payload: &BackendPayload) -> EstimatorResult {
    from_slot(
        EstimatorKind::RawEntropy,
        payload.entropy.as_ref(),
        NativeScore::RawEntropy,
    )
}
