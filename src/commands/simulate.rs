//! Simulation command
//!
//! Auto-plays complete games against random secrets and reports win-rate
//! statistics. The auto-player keeps the set of words consistent with every
//! evaluated row and guesses among them, so it plays a legal (if unambitious)
//! game every time.

use crate::core::{Feedback, MAX_ATTEMPTS, Word};
use crate::game::{GameSession, GameStatus, Key};
use crate::wordlists::WordList;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

use rayon::prelude::*;

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_attempts: f64,
    /// Index = number of attempts a won game took (1-6)
    pub distribution: [usize; MAX_ATTEMPTS + 1],
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games with random secrets and collect statistics
///
/// A fixed `seed` makes the whole run reproducible: same secrets, same
/// guesses, same result.
#[must_use]
pub fn run_simulation(words: &WordList, count: usize, seed: Option<u64>) -> SimulationResult {
    let mut rng = match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    };

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut wins = 0;
    let mut losses = 0;
    let mut total_attempts = 0;
    let mut distribution = [0usize; MAX_ATTEMPTS + 1];

    let start = Instant::now();

    for played in 1..=count {
        let secret = words.pick(&mut rng).clone();
        let (status, attempts) = play_one(words, secret, &mut rng);

        match status {
            GameStatus::Won => {
                wins += 1;
                total_attempts += attempts;
                distribution[attempts] += 1;
            }
            _ => losses += 1,
        }

        if played % 10 == 0 && wins > 0 {
            let avg = total_attempts as f64 / wins as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let average_attempts = if wins > 0 {
        total_attempts as f64 / wins as f64
    } else {
        0.0
    };

    SimulationResult {
        games: count,
        wins,
        losses,
        average_attempts,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64(),
    }
}

/// Drive one session to completion with the candidate-filtering auto-player
fn play_one(words: &WordList, secret: Word, rng: &mut StdRng) -> (GameStatus, usize) {
    let mut session = GameSession::new(words, secret);
    let mut candidates: Vec<Word> = words.words().to_vec();

    while !session.is_over() {
        // Candidates always contain the secret, so this cannot be empty
        let Some(guess) = candidates.choose(rng).cloned() else {
            break;
        };

        let (row, _) = session.cursor();
        for ch in guess.text().chars() {
            session.key_press(Key::Letter(ch));
        }
        session.key_press(Key::Enter);

        if session.is_over() {
            break;
        }

        // Keep only words that would have produced the observed row states
        let observed = *session.attempts()[row].states();
        candidates = candidates
            .par_iter()
            .filter(|candidate| Feedback::evaluate(candidate, &guess).states == observed)
            .cloned()
            .collect();
    }

    (session.status(), session.attempts().len())
}

/// Print simulation statistics
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Games played:    {}", result.games);
    println!(
        "  Won:             {} {}",
        result.wins,
        format!("({:.1}%)", result.wins as f64 / result.games as f64 * 100.0).green()
    );
    if result.losses > 0 {
        println!(
            "  Lost:            {} {}",
            result.losses,
            format!(
                "({:.1}%)",
                result.losses as f64 / result.games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses: {}",
        format!("{:.3}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("  Total time:      {:.2}s", result.duration.as_secs_f64());
    println!("  Games/second:    {:.1}", result.games_per_second);

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *result.distribution.iter().max().unwrap_or(&1);
    for attempts in 1..=MAX_ATTEMPTS {
        let count = result.distribution[attempts];
        if result.wins == 0 {
            continue;
        }
        let percentage = count as f64 / result.wins as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {attempts} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }
    println!();
}
