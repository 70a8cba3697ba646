//! High-entropy secret generation and multi-source strength analysis.
//!
//! Generation produces random passwords and word-based passphrases with
//! per-class inclusion guarantees. Analysis runs a local policy/entropy
//! estimator plus four externally sourced estimators behind a single
//! backend invocation, tolerates any subset of them failing, and maps the
//! surviving scores onto one shared 4-level scale.
//!
//! # Features
//!
//! - `async` (default): Enables a channel-based async analysis entry point
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the passphrase dictionary
//!   (default: `/usr/share/dict/words`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{
//!     generate_password, CommandBackend, GenerationSpec, Orchestrator, RandomSource,
//! };
//!
//! let mut rng = RandomSource::new();
//! let secret = generate_password(&GenerationSpec::default(), &mut rng)?;
//!
//! let backend = CommandBackend::new("/usr/local/bin/analyze-helper");
//! let report = Orchestrator::new(backend).analyze(&secret)?;
//!
//! for (kind, verdict) in &report.verdicts {
//!     println!("{}: {} - {}", kind.name(), verdict.level.label(), verdict.recommendation);
//! }
//! # Ok::<(), pwd_forge::Error>(())
//! ```

// Internal modules
mod backend;
mod charset;
mod dictionary;
mod error;
mod estimators;
mod generator;
mod normalize;
mod orchestrator;
mod rng;

// Public API
pub use backend::{
    AnalysisBackend, BackendError, BackendPayload, CommandBackend, DEFAULT_TIMEOUT,
};
pub use charset::{extended_alphabet, is_extended, CharClass, EXTENDED_CHARS, SYMBOLS};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use estimators::{
    evaluate_policy, ChecklistReport, ClassifierReport, CrackabilityReport, EntropyReport,
    EstimatorKind, EstimatorResult, NativeScore, Outcome, PolicyReport, StrengthCode,
};
pub use generator::{generate_passphrase, generate_password, GenerationSpec, PassphraseSpec};
pub use normalize::{normalize, NormalizedVerdict, StrengthLevel};
pub use orchestrator::{AnalysisReport, Orchestrator};
pub use rng::RandomSource;

#[cfg(feature = "async")]
pub use orchestrator::analyze_tx;
