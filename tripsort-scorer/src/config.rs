//! Per-domain scoring configuration with eager validation.
//!
//! A [`ScoringConfig`] carries one [`DomainConfig`] per search domain:
//! which numeric attributes to normalise, which categorical attribute to
//! resolve against a reputation table, the weight vector combining the
//! resulting sub-scores, and the defaults applied when a signal is absent.
//!
//! Validation is eager and consuming: a configuration is checked once when
//! a scorer is constructed, so a malformed weight table fails fast before
//! any candidate is scored.

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tripsort_core::{Domain, MAX_SCORE};

use crate::error::ConfigError;

/// Accepted deviation when checking that a domain's weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-6;

/// Maps one numeric attribute onto a normalised sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Candidate attribute read for this metric, for example `price`.
    pub attribute: String,
    /// Sub-score name the normalised value is recorded under.
    pub subscore: String,
    /// Whether lower raw values are better (prices, durations, stop counts).
    pub prefer_low: bool,
}

impl MetricSpec {
    /// Build a metric spec.
    #[must_use]
    pub fn new(attribute: impl Into<String>, subscore: impl Into<String>, prefer_low: bool) -> Self {
        Self {
            attribute: attribute.into(),
            subscore: subscore.into(),
            prefer_low,
        }
    }
}

/// Reputation lookup for a domain's categorical attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationSpec {
    /// Candidate attribute holding the category, for example `airline`.
    pub attribute: String,
    /// Sub-score name the reputation value is recorded under.
    pub subscore: String,
    /// Reputation scores per category, matched case-insensitively.
    ///
    /// Keys are folded to lowercase during validation.
    pub table: BTreeMap<String, f32>,
    /// Score applied when no table entry matches or the attribute is absent.
    pub fallback: f32,
}

/// Scoring configuration for a single search domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Numeric metrics normalised across the candidate cohort.
    pub metrics: Vec<MetricSpec>,
    /// Reputation lookup for the domain's categorical attribute.
    pub reputation: ReputationSpec,
    /// Weight per sub-score name; must sum to 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`].
    pub weights: BTreeMap<String, f32>,
    /// Sub-score recorded when a numeric attribute is absent.
    pub default_subscore: f32,
}

impl DomainConfig {
    /// Validate the configuration for `domain` and fold reputation keys to
    /// lowercase.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the weight vector is empty, carries a
    /// negative or non-finite entry, does not sum to 1.0, or references a
    /// sub-score nothing produces; when two specs produce the same
    /// sub-score; when a configured score leaves the `0..=100` scale; or
    /// when two reputation keys collide after case folding.
    pub fn validate(mut self, domain: Domain) -> Result<Self, ConfigError> {
        check_weights(domain, &self.weights)?;
        check_produced_subscores(domain, &self.metrics, &self.reputation, &self.weights)?;
        check_score_ranges(domain, &self)?;
        self.reputation.table = fold_reputation_keys(domain, std::mem::take(&mut self.reputation.table))?;
        Ok(self)
    }
}

/// Complete scoring configuration covering all six search domains.
///
/// # Examples
///
/// ```
/// use tripsort_core::Domain;
/// use tripsort_scorer::ScoringConfig;
///
/// let config = ScoringConfig::default().validate().expect("built-in defaults are valid");
/// assert!(!config.domain(Domain::Flight).metrics.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Flight search configuration.
    pub flight: DomainConfig,
    /// Hotel search configuration.
    pub hotel: DomainConfig,
    /// Restaurant search configuration.
    pub restaurant: DomainConfig,
    /// Activity search configuration.
    pub activity: DomainConfig,
    /// Product search configuration.
    pub product: DomainConfig,
    /// Coworking-space search configuration.
    pub coworking: DomainConfig,
}

impl ScoringConfig {
    /// Borrow the configuration for `domain`.
    #[must_use]
    pub const fn domain(&self, domain: Domain) -> &DomainConfig {
        match domain {
            Domain::Flight => &self.flight,
            Domain::Hotel => &self.hotel,
            Domain::Restaurant => &self.restaurant,
            Domain::Activity => &self.activity,
            Domain::Product => &self.product,
            Domain::Coworking => &self.coworking,
        }
    }

    /// Validate every domain's configuration.
    ///
    /// # Errors
    /// Propagates the first [`ConfigError`] raised by
    /// [`DomainConfig::validate`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        Ok(Self {
            flight: self.flight.validate(Domain::Flight)?,
            hotel: self.hotel.validate(Domain::Hotel)?,
            restaurant: self.restaurant.validate(Domain::Restaurant)?,
            activity: self.activity.validate(Domain::Activity)?,
            product: self.product.validate(Domain::Product)?,
            coworking: self.coworking.validate(Domain::Coworking)?,
        })
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, the JSON
    /// cannot be parsed, or the parsed configuration fails validation.
    pub fn from_json_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            flight: flight_defaults(),
            hotel: hotel_defaults(),
            restaurant: restaurant_defaults(),
            activity: activity_defaults(),
            product: product_defaults(),
            coworking: coworking_defaults(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "validation sums weights against the tolerance"
)]
fn check_weights(domain: Domain, weights: &BTreeMap<String, f32>) -> Result<(), ConfigError> {
    if weights.is_empty() {
        return Err(ConfigError::MissingWeights { domain });
    }
    for (subscore, &weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                domain,
                subscore: subscore.clone(),
                weight,
            });
        }
    }
    let sum: f32 = weights.values().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSum {
            domain,
            sum,
            tolerance: WEIGHT_SUM_TOLERANCE,
        });
    }
    Ok(())
}

fn check_produced_subscores(
    domain: Domain,
    metrics: &[MetricSpec],
    reputation: &ReputationSpec,
    weights: &BTreeMap<String, f32>,
) -> Result<(), ConfigError> {
    let mut produced = BTreeSet::new();
    let names = metrics
        .iter()
        .map(|metric| metric.subscore.as_str())
        .chain(std::iter::once(reputation.subscore.as_str()));
    for name in names {
        if !produced.insert(name) {
            return Err(ConfigError::DuplicateSubscore {
                domain,
                subscore: name.to_owned(),
            });
        }
    }
    for subscore in weights.keys() {
        if !produced.contains(subscore.as_str()) {
            return Err(ConfigError::UnknownSubscore {
                domain,
                subscore: subscore.clone(),
            });
        }
    }
    Ok(())
}

fn check_score_ranges(domain: Domain, config: &DomainConfig) -> Result<(), ConfigError> {
    check_score(domain, "default sub-score", config.default_subscore)?;
    check_score(domain, "reputation fallback", config.reputation.fallback)?;
    for &value in config.reputation.table.values() {
        check_score(domain, "reputation score", value)?;
    }
    Ok(())
}

fn check_score(domain: Domain, context: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
        return Err(ConfigError::ScoreOutOfRange {
            domain,
            context,
            value,
        });
    }
    Ok(())
}

fn fold_reputation_keys(
    domain: Domain,
    table: BTreeMap<String, f32>,
) -> Result<BTreeMap<String, f32>, ConfigError> {
    let mut folded = BTreeMap::new();
    for (key, value) in table {
        let lowered = key.to_lowercase();
        if folded.insert(lowered.clone(), value).is_some() {
            return Err(ConfigError::ConflictingReputationKey { domain, key: lowered });
        }
    }
    Ok(folded)
}

fn score_table(entries: &[(&str, f32)]) -> BTreeMap<String, f32> {
    entries
        .iter()
        .map(|&(name, value)| (name.to_owned(), value))
        .collect()
}

fn flight_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("price", "price_score", true),
            MetricSpec::new("duration_hours", "duration_score", true),
            MetricSpec::new("stops", "stops_score", true),
        ],
        reputation: ReputationSpec {
            attribute: "airline".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Singapore Airlines", 95.0),
                ("Qatar Airways", 94.0),
                ("Emirates", 92.0),
                ("ANA", 91.0),
                ("Cathay Pacific", 88.0),
                ("Lufthansa", 85.0),
                ("British Airways", 82.0),
                ("Delta", 80.0),
                ("KLM", 80.0),
                ("United", 75.0),
                ("Ryanair", 60.0),
                ("Spirit", 55.0),
            ]),
            fallback: 70.0,
        },
        weights: score_table(&[
            ("price_score", 0.35),
            ("duration_score", 0.25),
            ("stops_score", 0.15),
            ("reputation_score", 0.25),
        ]),
        default_subscore: 50.0,
    }
}

fn hotel_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("price", "price_score", true),
            MetricSpec::new("rating", "quality_score", false),
        ],
        reputation: ReputationSpec {
            attribute: "brand".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Four Seasons", 96.0),
                ("Ritz-Carlton", 95.0),
                ("Mandarin Oriental", 94.0),
                ("Hyatt", 86.0),
                ("Marriott", 85.0),
                ("Hilton", 84.0),
                ("Radisson", 78.0),
                ("Holiday Inn", 72.0),
                ("Best Western", 68.0),
                ("Ibis", 64.0),
            ]),
            fallback: 75.0,
        },
        weights: score_table(&[
            ("price_score", 0.40),
            ("quality_score", 0.35),
            ("reputation_score", 0.25),
        ]),
        default_subscore: 50.0,
    }
}

fn restaurant_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("rating", "quality_score", false),
            MetricSpec::new("price", "price_score", true),
        ],
        reputation: ReputationSpec {
            attribute: "cuisine".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Japanese", 88.0),
                ("Italian", 86.0),
                ("French", 85.0),
                ("Mediterranean", 84.0),
                ("Thai", 82.0),
                ("Indian", 81.0),
                ("Mexican", 80.0),
                ("Vietnamese", 80.0),
                ("American", 72.0),
                ("Fast Food", 55.0),
            ]),
            fallback: 70.0,
        },
        weights: score_table(&[
            ("quality_score", 0.45),
            ("price_score", 0.30),
            ("reputation_score", 0.25),
        ]),
        default_subscore: 50.0,
    }
}

fn activity_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("rating", "quality_score", false),
            MetricSpec::new("price", "price_score", true),
        ],
        reputation: ReputationSpec {
            attribute: "category".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Museum", 85.0),
                ("Food Tour", 84.0),
                ("Cooking Class", 83.0),
                ("Hiking", 82.0),
                ("Walking Tour", 80.0),
                ("Theme Park", 78.0),
                ("Boat Trip", 77.0),
                ("Nightlife", 68.0),
            ]),
            fallback: 70.0,
        },
        weights: score_table(&[
            ("quality_score", 0.40),
            ("price_score", 0.30),
            ("reputation_score", 0.30),
        ]),
        default_subscore: 50.0,
    }
}

fn product_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("price", "price_score", true),
            MetricSpec::new("rating", "quality_score", false),
        ],
        reputation: ReputationSpec {
            attribute: "brand".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Apple", 92.0),
                ("Sony", 88.0),
                ("Samsung", 87.0),
                ("Bose", 85.0),
                ("Dell", 80.0),
                ("Lenovo", 78.0),
                ("Anker", 76.0),
                ("Generic", 50.0),
            ]),
            fallback: 70.0,
        },
        weights: score_table(&[
            ("price_score", 0.45),
            ("quality_score", 0.30),
            ("reputation_score", 0.25),
        ]),
        default_subscore: 50.0,
    }
}

fn coworking_defaults() -> DomainConfig {
    DomainConfig {
        metrics: vec![
            MetricSpec::new("rating", "quality_score", false),
            MetricSpec::new("price", "price_score", true),
        ],
        reputation: ReputationSpec {
            attribute: "operator".to_owned(),
            subscore: "reputation_score".to_owned(),
            table: score_table(&[
                ("Industrious", 84.0),
                ("WeWork", 80.0),
                ("Impact Hub", 79.0),
                ("Mindspace", 76.0),
                ("Spaces", 75.0),
                ("Regus", 72.0),
            ]),
            fallback: 70.0,
        },
        weights: score_table(&[
            ("quality_score", 0.40),
            ("price_score", 0.35),
            ("reputation_score", 0.25),
        ]),
        default_subscore: 50.0,
    }
}
