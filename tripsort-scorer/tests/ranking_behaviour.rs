//! Behavioural coverage for ranking candidate cohorts.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tripsort_core::{Candidate, Domain, Scorer};
use tripsort_scorer::{ConfigError, ScoringConfig, WeightedScorer};

/// Scorer over the built-in six-domain configuration.
#[fixture]
pub fn scorer() -> WeightedScorer {
    match WeightedScorer::new(ScoringConfig::default()) {
        Ok(built) => built,
        Err(err) => panic!("built-in configuration must validate: {err}"),
    }
}

/// Cohort assembled by the given steps.
#[fixture]
pub fn cohort() -> RefCell<Vec<Candidate>> {
    RefCell::new(Vec::new())
}

/// Captures the ranked output for assertions.
#[fixture]
pub fn ranked() -> RefCell<Option<Vec<Candidate>>> {
    RefCell::new(None)
}

/// Configuration under test for construction scenarios.
#[fixture]
pub fn config() -> RefCell<Option<ScoringConfig>> {
    RefCell::new(None)
}

/// Captures scorer construction outcomes for assertions.
#[fixture]
pub fn build_result() -> RefCell<Option<Result<WeightedScorer, ConfigError>>> {
    RefCell::new(None)
}

#[given("three hotel candidates priced 100, 150, and 200")]
fn three_hotels(cohort: &RefCell<Vec<Candidate>>) {
    *cohort.borrow_mut() = vec![
        Candidate::new("Budget Stay").with_numeric("price", 100.0),
        Candidate::new("Mid Stay").with_numeric("price", 150.0),
        Candidate::new("Grand Stay").with_numeric("price", 200.0),
    ];
}

#[given("a single flight candidate priced 420")]
fn lone_flight(cohort: &RefCell<Vec<Candidate>>) {
    *cohort.borrow_mut() = vec![Candidate::new("Solo Hop").with_numeric("price", 420.0)];
}

#[given("two hotel candidates, one with a known brand and one unknown")]
fn branded_hotels(cohort: &RefCell<Vec<Candidate>>) {
    *cohort.borrow_mut() = vec![
        Candidate::new("Familiar")
            .with_numeric("price", 150.0)
            .with_category("brand", "Mandarin Oriental"),
        Candidate::new("Obscure")
            .with_numeric("price", 150.0)
            .with_category("brand", "Zyxwvut"),
    ];
}

#[given("a hotel cohort containing a nameless candidate")]
fn cohort_with_nameless(cohort: &RefCell<Vec<Candidate>>) {
    *cohort.borrow_mut() = vec![
        Candidate::new("Named").with_numeric("price", 100.0),
        Candidate::new("   ").with_numeric("price", 90.0),
        Candidate::new("Also Named").with_numeric("price", 110.0),
    ];
}

#[given("a hotel weight vector summing to 0.95")]
fn underweight_hotel_config(config: &RefCell<Option<ScoringConfig>>) {
    let mut scoring = ScoringConfig::default();
    scoring.hotel.weights.insert("price_score".to_owned(), 0.35);
    *config.borrow_mut() = Some(scoring);
}

#[when("I rank the hotel candidates")]
fn rank_hotels(
    scorer: &WeightedScorer,
    cohort: &RefCell<Vec<Candidate>>,
    ranked: &RefCell<Option<Vec<Candidate>>>,
) {
    let candidates = std::mem::take(&mut *cohort.borrow_mut());
    *ranked.borrow_mut() = Some(scorer.rank(Domain::Hotel, candidates));
}

#[when("I rank the flight candidates")]
fn rank_flights(
    scorer: &WeightedScorer,
    cohort: &RefCell<Vec<Candidate>>,
    ranked: &RefCell<Option<Vec<Candidate>>>,
) {
    let candidates = std::mem::take(&mut *cohort.borrow_mut());
    *ranked.borrow_mut() = Some(scorer.rank(Domain::Flight, candidates));
}

#[when("I build a scorer from that configuration")]
fn build_scorer(
    config: &RefCell<Option<ScoringConfig>>,
    build_result: &RefCell<Option<Result<WeightedScorer, ConfigError>>>,
) {
    let scoring = config
        .borrow_mut()
        .take()
        .unwrap_or_else(|| panic!("configuration must be initialised"));
    *build_result.borrow_mut() = Some(WeightedScorer::new(scoring));
}

#[then("the candidates are ordered cheapest first")]
fn ordered_cheapest_first(ranked: &RefCell<Option<Vec<Candidate>>>) {
    let binding = ranked.borrow();
    let list = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking must be recorded"));
    let names: Vec<&str> = list.iter().map(Candidate::name).collect();
    assert_eq!(names, ["Budget Stay", "Mid Stay", "Grand Stay"]);
}

#[then("the price sub-scores are 100, 50, and 0")]
fn price_subscores_span_the_scale(ranked: &RefCell<Option<Vec<Candidate>>>) {
    let binding = ranked.borrow();
    let list = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking must be recorded"));
    let scores: Vec<f32> = list
        .iter()
        .filter_map(|candidate| candidate.subscore("price_score"))
        .collect();
    assert_eq!(scores, [100.0, 50.0, 0.0]);
}

#[then("its price sub-score is 100")]
fn lone_candidate_scores_top_marks(ranked: &RefCell<Option<Vec<Candidate>>>) {
    let binding = ranked.borrow();
    let list = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking must be recorded"));
    let score = list
        .iter()
        .find_map(|candidate| candidate.subscore("price_score"));
    assert_eq!(score, Some(100.0));
}

#[then("the unknown brand scores the reputation fallback")]
fn unknown_brand_scores_fallback(ranked: &RefCell<Option<Vec<Candidate>>>) {
    let binding = ranked.borrow();
    let list = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking must be recorded"));
    let obscure = list
        .iter()
        .find(|candidate| candidate.name() == "Obscure")
        .and_then(|candidate| candidate.subscore("reputation_score"));
    assert_eq!(obscure, Some(75.0));
}

#[then("only the named candidates remain")]
fn only_named_candidates_remain(ranked: &RefCell<Option<Vec<Candidate>>>) {
    let binding = ranked.borrow();
    let list = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking must be recorded"));
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|candidate| !candidate.name().trim().is_empty()));
}

#[then("construction fails with a weight-sum error")]
fn construction_fails_on_weight_sum(
    build_result: &RefCell<Option<Result<WeightedScorer, ConfigError>>>,
) {
    let binding = build_result.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("construction outcome must be recorded"));
    match result {
        Ok(_) => panic!("expected construction to fail"),
        Err(ConfigError::WeightSum { domain, .. }) => assert_eq!(*domain, Domain::Hotel),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn cheapest_hotel_ranks_first(
    scorer: WeightedScorer,
    cohort: RefCell<Vec<Candidate>>,
    ranked: RefCell<Option<Vec<Candidate>>>,
) {
    let _ = (scorer, cohort, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn lone_candidate_carries_top_marks(
    scorer: WeightedScorer,
    cohort: RefCell<Vec<Candidate>>,
    ranked: RefCell<Option<Vec<Candidate>>>,
) {
    let _ = (scorer, cohort, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn unknown_brands_fall_back(
    scorer: WeightedScorer,
    cohort: RefCell<Vec<Candidate>>,
    ranked: RefCell<Option<Vec<Candidate>>>,
) {
    let _ = (scorer, cohort, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 3)]
fn nameless_candidates_are_dropped(
    scorer: WeightedScorer,
    cohort: RefCell<Vec<Candidate>>,
    ranked: RefCell<Option<Vec<Candidate>>>,
) {
    let _ = (scorer, cohort, ranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 4)]
fn malformed_weights_are_rejected(
    config: RefCell<Option<ScoringConfig>>,
    build_result: RefCell<Option<Result<WeightedScorer, ConfigError>>>,
) {
    let _ = (config, build_result);
}
