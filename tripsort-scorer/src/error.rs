//! Error types raised while loading or validating scoring configuration.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;
use tripsort_core::Domain;

/// Errors raised while loading or validating a scoring configuration.
///
/// Every variant is detected eagerly, before any candidate is scored:
/// misconfiguration must surface to the operator, never be silently
/// renormalised at ranking time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read scoring configuration at {path}")]
    Read {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing the configuration JSON failed.
    #[error("failed to parse scoring configuration at {path}")]
    Parse {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A domain carries no weight vector at all.
    #[error("domain {domain} has no weights configured")]
    MissingWeights {
        /// Affected domain.
        domain: Domain,
    },
    /// A domain's weights do not sum to 1.0.
    #[error("weights for domain {domain} sum to {sum}, expected 1.0 within {tolerance}")]
    WeightSum {
        /// Affected domain.
        domain: Domain,
        /// Actual sum of the configured weights.
        sum: f32,
        /// Accepted deviation from 1.0.
        tolerance: f32,
    },
    /// A weight was negative or non-finite.
    #[error("weight {weight} for sub-score {subscore} in domain {domain} must be finite and non-negative")]
    InvalidWeight {
        /// Affected domain.
        domain: Domain,
        /// Sub-score name the weight applies to.
        subscore: String,
        /// Offending weight value.
        weight: f32,
    },
    /// A weight references a sub-score no metric or reputation spec produces.
    #[error("weights for domain {domain} reference unknown sub-score {subscore}")]
    UnknownSubscore {
        /// Affected domain.
        domain: Domain,
        /// Sub-score name with no producer.
        subscore: String,
    },
    /// Two specs in one domain produce the same sub-score name.
    #[error("domain {domain} produces sub-score {subscore} more than once")]
    DuplicateSubscore {
        /// Affected domain.
        domain: Domain,
        /// Sub-score name produced twice.
        subscore: String,
    },
    /// A configured score fell outside the shared score scale.
    #[error("{context} {value} for domain {domain} is outside the 0..=100 score scale")]
    ScoreOutOfRange {
        /// Affected domain.
        domain: Domain,
        /// Description of the offending setting.
        context: &'static str,
        /// Offending value.
        value: f32,
    },
    /// Two reputation keys collide after lowercase folding.
    #[error("reputation table for domain {domain} contains conflicting entries for {key}")]
    ConflictingReputationKey {
        /// Affected domain.
        domain: Domain,
        /// Folded key both entries map to.
        key: String,
    },
}
