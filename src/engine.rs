use std::time::Instant;

use serde::Serialize;

use crate::advice::{opponent_ranges, recommend, OpponentRange, Recommendation};
use crate::cards::Card;
use crate::equity::{simulate, Equity};
use crate::strength::{describe, HandStrength};

/// Trial count used once the turn or river is known. Fewer unknowns
/// make the sample tighter, so the full budget is unnecessary. This is
/// still sampling, not exact enumeration.
pub const REDUCED_ITERATIONS: usize = 50_000;

/// Default trial count when the caller does not pick one.
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// How the probabilities were produced.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationBreakdown {
    pub method: String,
    pub confidence: String,
    pub cards_remaining: usize,
    pub simulation_time_ms: u64,
}

/// Everything the engine has to say about one game state. The calling
/// service serializes this as-is; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub win_probability: f64,
    pub tie_probability: f64,
    pub lose_probability: f64,
    pub hand_strength: HandStrength,
    pub opponent_ranges: Vec<OpponentRange>,
    pub recommendation: Recommendation,
    pub calculations: CalculationBreakdown,
}

/// Analyze a partially-observed hand: estimate win/tie/lose equity,
/// classify hero's current holding, and derive an action line.
///
/// Inputs are assumed pre-validated (distinct cards, 2 hole cards,
/// `player_count >= 2`). The engine never errors on card content; the
/// degenerate paths fall back to a `{0, 0, 100}` equity or an "Unknown"
/// descriptor instead.
pub fn analyze(
    hole_cards: &[Card],
    community_cards: &[Option<Card>],
    player_count: usize,
    iterations: usize,
) -> AnalysisResult {
    let start = Instant::now();

    let known_community: Vec<Card> = community_cards.iter().flatten().copied().collect();
    let cards_remaining = 52 - hole_cards.len() - known_community.len();

    // Turn and river leave at most one board card unknown; a smaller
    // fixed sample is enough there.
    let (equity, method) = if known_community.len() >= 4 {
        (
            simulate(hole_cards, &known_community, player_count, REDUCED_ITERATIONS),
            format!("Reduced-trial estimate ({} simulations)", REDUCED_ITERATIONS),
        )
    } else {
        (
            simulate(hole_cards, &known_community, player_count, iterations),
            format!("Monte Carlo ({} simulations)", iterations),
        )
    };

    let hand_strength = describe(hole_cards, &known_community);
    let recommendation = recommend(equity.win);

    let Equity { win, tie, lose, .. } = equity;

    AnalysisResult {
        win_probability: win,
        tie_probability: tie,
        lose_probability: lose,
        hand_strength,
        opponent_ranges: opponent_ranges(player_count),
        recommendation,
        calculations: CalculationBreakdown {
            method,
            confidence: "±0.8%".to_string(),
            cards_remaining,
            simulation_time_ms: start.elapsed().as_millis() as u64,
        },
    }
}
