use super::sizing::SearchSpace;
use super::{Method, OddsConfig, OddsError, ProbabilityResult, Showdown, Tally};
use crate::cards::{self, Card};
use crate::deck::Deck;
use crate::hand::Scenario;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Iterations per independently seeded chunk.
const CHUNK: usize = 1_000;

/// Sample `config.iterations` random deals.
///
/// Work is cut into fixed-size chunks, each driven by its own ChaCha stream derived
/// from the seed, so a seeded run returns the same counts on any number of threads.
///
/// ```
/// use poker_odds::hand::Scenario;
/// use poker_odds::odds::{monte_carlo, Method, OddsConfig};
///
/// let s = Scenario::parse("AS AC", "KH QD JS", 1).unwrap();
/// let config = OddsConfig::default().with_iterations(2_000).with_seed(1);
/// let r = monte_carlo(&s, &config).unwrap();
/// assert_eq!(r.method, Method::MonteCarlo);
/// assert_eq!(r.samples, 2_000);
/// assert_eq!(r, monte_carlo(&s, &config).unwrap());
/// ```
pub fn monte_carlo(scenario: &Scenario, config: &OddsConfig) -> Result<ProbabilityResult, OddsError> {
    let (pool, k) = prepare(scenario, config.iterations)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let chunks = config.iterations.div_ceil(CHUNK);
    let chunk_len = |i: usize| CHUNK.min(config.iterations - i * CHUNK);

    let run = |i: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(i as u64);
        let tally = sample(scenario, &pool, k, chunk_len(i), &mut rng);
        log::trace!("chunk {i}: {} deals", tally.total());
        tally
    };

    let tally = if config.parallel {
        run_parallel(chunks, run)
    } else {
        (0..chunks).map(run).fold(Tally::default(), Tally::merge)
    };
    Ok(ProbabilityResult::from_tally(Method::MonteCarlo, tally))
}

/// Sample on the calling thread with a caller-supplied RNG.
///
/// ```
/// use poker_odds::hand::Scenario;
/// use poker_odds::odds::monte_carlo_with_rng;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let s = Scenario::parse("7H 7D", "", 3).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(9);
/// let r = monte_carlo_with_rng(&s, 500, &mut rng).unwrap();
/// assert_eq!(r.tally.total(), 500);
/// ```
pub fn monte_carlo_with_rng<R: Rng + ?Sized>(
    scenario: &Scenario,
    iterations: usize,
    rng: &mut R,
) -> Result<ProbabilityResult, OddsError> {
    let (pool, k) = prepare(scenario, iterations)?;
    let tally = sample(scenario, &pool, k, iterations, rng);
    Ok(ProbabilityResult::from_tally(Method::MonteCarlo, tally))
}

fn prepare(scenario: &Scenario, iterations: usize) -> Result<(Vec<Card>, usize), OddsError> {
    if iterations == 0 {
        return Err(OddsError::ZeroIterations);
    }
    let space = SearchSpace::of(scenario);
    if !space.fits_deck() {
        return Err(OddsError::insufficient(&space));
    }
    Ok((cards::remaining(&scenario.known_cards()), space.unknown_total))
}

fn sample<R: Rng + ?Sized>(
    scenario: &Scenario,
    pool: &[Card],
    k: usize,
    iterations: usize,
    rng: &mut R,
) -> Tally {
    let mut table = Showdown::new(scenario);
    let mut deck = Deck::from_cards(pool.to_vec());
    let mut tally = Tally::default();
    for _ in 0..iterations {
        table.deal(deck.peek_random(rng, k).iter().copied());
        tally.record(table.outcome());
    }
    tally
}

#[cfg(feature = "parallel")]
fn run_parallel<F>(chunks: usize, run: F) -> Tally
where
    F: Fn(usize) -> Tally + Sync + Send,
{
    use rayon::prelude::*;
    (0..chunks).into_par_iter().map(run).reduce(Tally::default, Tally::merge)
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<F>(chunks: usize, run: F) -> Tally
where
    F: Fn(usize) -> Tally,
{
    (0..chunks).map(run).fold(Tally::default(), Tally::merge)
}
