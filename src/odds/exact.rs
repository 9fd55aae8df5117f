use super::sizing::SearchSpace;
use super::{Method, OddsConfig, OddsError, ProbabilityResult, Showdown, Tally};
use crate::cards::{self, Card};
use crate::evaluator::combinations::Combinations;
use crate::hand::Scenario;

/// Exhaustive enumeration if the config's sizing policy allows it.
///
/// `Ok(None)` means the search space is over the policy limits and the caller should
/// sample instead.
///
/// ```
/// use poker_odds::hand::Scenario;
/// use poker_odds::odds::{exact_probability, OddsConfig};
///
/// let s = Scenario::parse("AS AC", "KH QD JS", 1).unwrap();
/// let r = exact_probability(&s, &OddsConfig::default()).unwrap().unwrap();
/// assert_eq!(r.samples, 178_365);
///
/// let crowded = Scenario::parse("AS AC", "KH QD JS", 3).unwrap();
/// assert!(exact_probability(&crowded, &OddsConfig::default()).unwrap().is_none());
/// ```
pub fn exact_probability(
    scenario: &Scenario,
    config: &OddsConfig,
) -> Result<Option<ProbabilityResult>, OddsError> {
    let space = SearchSpace::of(scenario);
    if !space.fits_deck() {
        return Err(OddsError::insufficient(&space));
    }
    let exact = config.policy.allows_exact(&space);
    log::debug!(
        "pool={} opponents={} unknown={} scenarios={} -> {}",
        space.pool,
        space.opponents,
        space.unknown_total,
        space.scenarios,
        if exact { "exact" } else { "monte carlo" }
    );
    if !exact {
        return Ok(None);
    }
    enumerate(scenario, config.parallel).map(Some)
}

/// Visit every unordered set of unknown cards once, regardless of size.
///
/// Each set is split deterministically: its first cards (in deck order) complete the
/// board and the rest are handed out to the opponents two at a time. Work is sharded by
/// the smallest index of the set, so shard results add up to the full enumeration.
pub fn enumerate(scenario: &Scenario, parallel: bool) -> Result<ProbabilityResult, OddsError> {
    let space = SearchSpace::of(scenario);
    if !space.fits_deck() {
        return Err(OddsError::insufficient(&space));
    }
    let pool = cards::remaining(&scenario.known_cards());
    let k = space.unknown_total;
    let shards = 0..=pool.len() - k;

    let tally = if parallel {
        tally_parallel(scenario, &pool, k, shards)
    } else {
        tally_sequential(scenario, &pool, k, shards)
    };
    Ok(ProbabilityResult::from_tally(Method::Exact, tally))
}

#[cfg(feature = "parallel")]
fn tally_parallel(
    scenario: &Scenario,
    pool: &[Card],
    k: usize,
    shards: std::ops::RangeInclusive<usize>,
) -> Tally {
    use rayon::prelude::*;
    shards
        .into_par_iter()
        .map(|first| tally_shard(scenario, pool, k, first))
        .reduce(Tally::default, Tally::merge)
}

#[cfg(not(feature = "parallel"))]
fn tally_parallel(
    scenario: &Scenario,
    pool: &[Card],
    k: usize,
    shards: std::ops::RangeInclusive<usize>,
) -> Tally {
    tally_sequential(scenario, pool, k, shards)
}

fn tally_sequential(
    scenario: &Scenario,
    pool: &[Card],
    k: usize,
    shards: std::ops::RangeInclusive<usize>,
) -> Tally {
    shards.map(|first| tally_shard(scenario, pool, k, first)).fold(Tally::default(), Tally::merge)
}

fn tally_shard(scenario: &Scenario, pool: &[Card], k: usize, first: usize) -> Tally {
    let mut table = Showdown::new(scenario);
    let mut tally = Tally::default();
    let mut combos = Combinations::leading(pool.len(), k, first);
    while let Some(indices) = combos.advance() {
        table.deal(indices.iter().map(|&i| pool[i]));
        tally.record(table.outcome());
    }
    log::trace!("shard {first}: {} scenarios", tally.total());
    tally
}
