use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::hand_evaluator::evaluate_hand;

/// Win/tie/lose frequencies from a batch of simulated showdowns, as
/// percentages in 0..=100. `win + tie + lose` is exactly 100 because
/// `lose` is derived from the other two after rounding.
#[derive(Debug, Clone, Serialize)]
pub struct Equity {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
    pub simulations: usize,
}

impl Equity {
    /// The all-unknown fallback: no trial could be completed.
    pub fn none() -> Equity {
        Equity {
            win: 0.0,
            tie: 0.0,
            lose: 100.0,
            simulations: 0,
        }
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.2}% | Tie {:.2}% | Lose {:.2}%",
            self.win, self.tie, self.lose,
        )
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Estimate hero's showdown equity by Monte Carlo simulation.
///
/// Each trial completes the board to 5 cards, deals 2 cards to each of
/// `player_count - 1` opponents from the remaining pool, and scores one
/// vote: a win if hero's hand is strictly best, a tie if hero shares the
/// best rank with anyone, a loss otherwise. Trials run in parallel; each
/// worker shuffles its own copy of the pool with its thread-local RNG.
pub fn simulate(
    hole_cards: &[Card],
    community_cards: &[Card],
    player_count: usize,
    iterations: usize,
) -> Equity {
    let known: Vec<Card> = hole_cards
        .iter()
        .chain(community_cards.iter())
        .copied()
        .collect();
    let pool = Deck::excluding(&known);

    let opponents = player_count.saturating_sub(1);
    let cards_needed = 5 - community_cards.len();

    // The pool size is fixed for the whole request, so a trial that
    // cannot be dealt now can never be dealt. Skip them all.
    if pool.len() < cards_needed + 2 * opponents {
        return Equity::none();
    }

    let (wins, ties, losses) = (0..iterations)
        .into_par_iter()
        .map(|_| {
            let mut deck = pool.clone();
            deck.shuffle();
            let dealt = match deck.deal(cards_needed + 2 * opponents) {
                Ok(cards) => cards,
                Err(_) => return (0u64, 0u64, 0u64),
            };

            let mut board = community_cards.to_vec();
            board.extend_from_slice(&dealt[..cards_needed]);

            let hero = evaluate_hand(hole_cards, &board).unwrap();
            let best_opponent = dealt[cards_needed..]
                .chunks(2)
                .map(|opp| evaluate_hand(opp, &board).unwrap())
                .max();

            match best_opponent {
                None => (1, 0, 0),
                Some(best) if hero > best => (1, 0, 0),
                Some(best) if hero == best => (0, 1, 0),
                Some(_) => (0, 0, 1),
            }
        })
        .reduce(
            || (0, 0, 0),
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
        );

    let total = wins + ties + losses;
    if total == 0 {
        return Equity::none();
    }

    let win = round2(wins as f64 / total as f64 * 100.0);
    let tie = round2(ties as f64 / total as f64 * 100.0);
    Equity {
        win,
        tie,
        lose: round2(100.0 - win - tie),
        simulations: total as usize,
    }
}
