use clap::{Parser, Subcommand};
use poker_odds::cards::parse_cards;
use poker_odds::evaluator::{best_of, Evaluation};
use poker_odds::hand::Scenario;
use poker_odds::odds::{self, OddsConfig, ProbabilityResult, DEFAULT_ITERATIONS};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Texas Hold'em hand evaluation and win probabilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Best five-card hand out of 5 to 7 cards", alias = "eval")]
    Evaluate {
        #[arg(required = true, num_args = 1.., help = "Cards such as AS KD 7C, or AS,KD,7C")]
        cards: Vec<String>,
    },
    #[command(about = "Win / tie / lose probabilities against the rest of the table")]
    Odds {
        #[arg(long, help = "Your two hole cards, e.g. \"AH KS\"")]
        hole: String,
        #[arg(long, default_value = "", help = "Community cards so far (0 to 5)")]
        board: String,
        #[arg(
            long,
            default_value_t = 2,
            value_parser = clap::value_parser!(u8).range(2..=10),
            help = "Players at the table, including you"
        )]
        players: u8,
        #[arg(long, default_value_t = DEFAULT_ITERATIONS, help = "Monte Carlo iterations")]
        iterations: usize,
        #[arg(long, help = "Seed for reproducible sampling")]
        seed: Option<u64>,
    },
    #[command(about = "Exact enumeration against Monte Carlo at growing iteration counts")]
    Compare {
        #[arg(long, help = "Seed for reproducible sampling")]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Evaluate { cards } => {
            let cards = parse_cards(&cards.join(" "))?;
            print_hand(&best_of(&cards)?);
        }
        Command::Odds { hole, board, players, iterations, seed } => {
            let scenario = Scenario::parse(&hole, &board, usize::from(players) - 1)?;
            let known = scenario.known_cards();
            if known.len() >= 5 {
                print_hand(&best_of(&known)?);
            }
            let mut config = OddsConfig::default().with_iterations(iterations);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            print_odds(&odds::win_probability_with(&scenario, &config)?);
        }
        Command::Compare { seed } => compare(seed)?,
    }
    Ok(())
}

fn compare(seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let scenario = Scenario::parse("AS AC", "KH QD JS", 1)?;
    println!("Pocket aces vs 1 opponent on KH QD JS");

    let exact = odds::enumerate(&scenario, true)?;
    print_odds(&exact);

    for iterations in [1_000, 10_000, 100_000] {
        let mut config = OddsConfig::default().with_iterations(iterations);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let sampled = odds::monte_carlo(&scenario, &config)?;
        print_odds(&sampled);
        println!(
            "  error vs exact: {:.3} percentage points",
            (sampled.win_probability - exact.win_probability).abs()
        );
    }
    Ok(())
}

fn print_hand(eval: &Evaluation) {
    println!("Best hand: {eval}");
    println!("Category:  {} of 10", eval.ordinal());
    println!("Tie-break: {:?}", eval.tiebreak());
}

fn print_odds(result: &ProbabilityResult) {
    println!("Method:    {} ({} samples)", result.method, result.samples);
    println!("Win:       {:.2}%", result.win_probability);
    println!("Tie:       {:.2}%", result.tie_probability);
    println!("Lose:      {:.2}%", result.lose_probability);
}
