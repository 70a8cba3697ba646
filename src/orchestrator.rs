//! Multi-source analysis orchestration.
//!
//! One analysis call runs the local estimator, performs exactly one backend
//! invocation, and distributes the payload to the external estimator slots.
//! The report always carries one entry per estimator; estimator failures are
//! recorded, never raised.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use secrecy::{ExposeSecret, SecretString};

use crate::backend::AnalysisBackend;
use crate::estimators::{
    checklist_result, classifier_result, crackability_result, evaluate_policy,
    raw_entropy_result, EstimatorKind, EstimatorResult, NativeScore,
};
use crate::normalize::{normalize, NormalizedVerdict};
use crate::{Error, Result};

/// Aggregate result of one analysis call.
///
/// Immutable once built; a report with zero successful estimators is still a
/// valid, displayable result.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Secret length in code points.
    pub secret_length: usize,
    /// One entry per estimator, success or failure.
    pub results: BTreeMap<EstimatorKind, EstimatorResult>,
    /// Normalized levels for the successes that define one.
    pub verdicts: BTreeMap<EstimatorKind, NormalizedVerdict>,
}

impl AnalysisReport {
    /// The result for one estimator. Every kind is always present.
    pub fn result(&self, kind: EstimatorKind) -> &EstimatorResult {
        &self.results[&kind]
    }

    /// Number of estimators that produced a native score.
    pub fn success_count(&self) -> usize {
        self.results.values().filter(|r| r.is_success()).count()
    }
}

/// Runs the full estimator set against one secret.
pub struct Orchestrator<B> {
    backend: B,
}

impl<B: AnalysisBackend> Orchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Analyzes one secret.
    ///
    /// Fails only when the local estimator itself breaks; backend problems
    /// of any kind degrade to `Failure` entries for the four external
    /// estimators while the local entry stands.
    pub fn analyze(&self, secret: &SecretString) -> Result<AnalysisReport> {
        let secret_length = secret.expose_secret().chars().count();

        let local = catch_unwind(AssertUnwindSafe(|| evaluate_policy(secret)))
            .map_err(|_| Error::OrchestratorUnavailable("local estimator panicked".to_string()))?;

        let mut results = BTreeMap::new();
        results.insert(
            EstimatorKind::PolicyEntropy,
            EstimatorResult::success(EstimatorKind::PolicyEntropy, NativeScore::Policy(local)),
        );

        match self.backend.analyze(secret) {
            Ok(payload) => {
                for result in [
                    crackability_result(&payload),
                    checklist_result(&payload),
                    classifier_result(&payload),
                    raw_entropy_result(&payload),
                ] {
                    results.insert(result.kind, result);
                }
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("analysis backend failed: {e}");
                let reason = e.to_string();
                for kind in EstimatorKind::EXTERNAL {
                    results.insert(kind, EstimatorResult::failure(kind, reason.clone()));
                }
            }
        }

        let verdicts = results
            .iter()
            .filter_map(|(kind, result)| normalize(result).map(|v| (*kind, v)))
            .collect();

        Ok(AnalysisReport {
            secret_length,
            results,
            verdicts,
        })
    }
}

/// Async version that sends the analysis result via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx<B>(
    orchestrator: std::sync::Arc<Orchestrator<B>>,
    secret: SecretString,
    tx: tokio::sync::mpsc::Sender<Result<AnalysisReport>>,
) where
    B: AnalysisBackend + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let report =
        tokio::task::spawn_blocking(move || orchestrator.analyze(&secret))
            .await
            .unwrap_or_else(|e| {
                Err(Error::OrchestratorUnavailable(format!(
                    "analysis task failed: {e}"
                )))
            });

    if tx.send(report).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send analysis result");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::backend::{BackendError, BackendPayload};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_analyze_tx() {
        let orchestrator = Arc::new(Orchestrator::new(
            |_: &SecretString| -> std::result::Result<BackendPayload, BackendError> {
                Ok(BackendPayload::default())
            },
        ));
        let (tx, mut rx) = tokio::sync::mpsc::channel(1);

        let secret = SecretString::new("TestPass123!".to_string().into());
        analyze_tx(orchestrator, secret, tx).await;

        let report = rx.recv().await.expect("Should receive analysis").unwrap();
        assert_eq!(report.results.len(), 5);
        assert!(report.result(EstimatorKind::PolicyEntropy).is_success());
    }
}
