//! Weighted multi-factor ranking over candidate cohorts.
//!
//! [`WeightedScorer`] applies one domain configuration per request: each
//! configured metric is normalised against the cohort's observed spread,
//! the categorical attribute is resolved against the reputation table, the
//! sub-scores are folded with the domain's weight vector, and the cohort
//! is returned sorted best first.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use camino::Utf8Path;
use log::{debug, warn};
use tripsort_core::{Candidate, Domain, Scorer};

use crate::config::{DomainConfig, MetricSpec, ScoringConfig};
use crate::error::ConfigError;
use crate::normalise::normalise;
use crate::reputation::lookup;

/// Combine named sub-scores with a weight vector.
///
/// Pure weighted sum. Weight vectors are validated when the configuration
/// is loaded ([`crate::DomainConfig::validate`]), so a malformed vector can
/// never reach this function through a constructed scorer; a sub-score
/// missing for a weighted name contributes nothing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use tripsort_scorer::combine;
///
/// let subscores = BTreeMap::from([
///     ("quality_score".to_owned(), 80.0),
///     ("price_score".to_owned(), 60.0),
/// ]);
/// let weights = BTreeMap::from([
///     ("quality_score".to_owned(), 0.5),
///     ("price_score".to_owned(), 0.5),
/// ]);
/// assert_eq!(combine(&subscores, &weights), 70.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "combining sub-scores is a weighted sum"
)]
pub fn combine(subscores: &BTreeMap<String, f32>, weights: &BTreeMap<String, f32>) -> f32 {
    weights
        .iter()
        .map(|(name, &weight)| subscores.get(name).copied().unwrap_or(0.0) * weight)
        .sum()
}

/// Scorer applying per-domain weight vectors and reputation tables.
///
/// One instance holds the validated configuration for all six domains and
/// is safely shared across concurrent request handlers; ranking touches no
/// state beyond the cohort it is given.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    config: ScoringConfig,
}

impl WeightedScorer {
    /// Construct a scorer over `config`, validating it eagerly.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any domain's configuration is
    /// malformed; no scorer exists over an unvalidated table.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Construct a scorer from a JSON configuration file.
    ///
    /// # Errors
    /// Propagates read, parse, and validation failures from
    /// [`ScoringConfig::from_json_path`].
    pub fn from_json_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        ScoringConfig::from_json_path(path).map(|config| Self { config })
    }

    /// Borrow the validated configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl Scorer for WeightedScorer {
    fn rank(&self, domain: Domain, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let config = self.config.domain(domain);
        let mut cohort = drop_nameless(candidates);
        score_cohort(&mut cohort, config);
        sort_descending(&mut cohort);
        debug!("ranked {} {domain} candidates", cohort.len());
        cohort
    }
}

fn drop_nameless(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let total = candidates.len();
    let mut kept = Vec::with_capacity(total);
    for candidate in candidates {
        match candidate.validate() {
            Ok(()) => kept.push(candidate),
            Err(err) => warn!("skipping candidate: {err}"),
        }
    }
    let skipped = total - kept.len();
    if skipped > 0 {
        warn!("Skipped {skipped} candidates without a usable name");
    }
    kept
}

fn score_cohort(cohort: &mut [Candidate], config: &DomainConfig) {
    let observations: Vec<(&MetricSpec, Vec<f32>)> = config
        .metrics
        .iter()
        .map(|metric| (metric, observed_values(cohort, &metric.attribute)))
        .collect();
    for candidate in cohort.iter_mut() {
        score_candidate(candidate, config, &observations);
    }
}

fn score_candidate(
    candidate: &mut Candidate,
    config: &DomainConfig,
    observations: &[(&MetricSpec, Vec<f32>)],
) {
    for (metric, observed) in observations {
        let raw = candidate
            .numeric(&metric.attribute)
            .filter(|value| value.is_finite());
        let score = normalise(raw, observed, metric.prefer_low, config.default_subscore);
        candidate.record_subscore(metric.subscore.clone(), score);
    }
    let reputation = &config.reputation;
    let reputation_score = candidate
        .category(&reputation.attribute)
        .map_or(reputation.fallback, |key| {
            lookup(key, &reputation.table, reputation.fallback)
        });
    candidate.record_subscore(reputation.subscore.clone(), reputation_score);
    let overall = <WeightedScorer as Scorer>::sanitise(combine(candidate.subscores(), &config.weights));
    candidate.set_overall(overall);
}

/// Collect the cohort's present, finite values for one attribute.
fn observed_values(cohort: &[Candidate], attribute: &str) -> Vec<f32> {
    cohort
        .iter()
        .filter_map(|candidate| candidate.numeric(attribute))
        .filter(|value| value.is_finite())
        .collect()
}

fn sort_descending(cohort: &mut [Candidate]) {
    // Stable sort: equal overall scores keep their input order.
    cohort.sort_by(|a, b| overall_of(b).total_cmp(&overall_of(a)));
}

fn overall_of(candidate: &Candidate) -> f32 {
    candidate.overall().unwrap_or(0.0)
}
