use serde::Serialize;

use crate::cards::{rank_name, Card, Rank, ALL_SUITS};
use crate::hand_evaluator::{evaluate_hand, HandCategory};

/// How much of the board is known, decided once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    Preflop,
    Partial,
    Complete,
}

impl BoardState {
    pub fn from_community_count(known: usize) -> BoardState {
        match known {
            0 => BoardState::Preflop,
            1..=4 => BoardState::Partial,
            _ => BoardState::Complete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthCategory {
    MadeHand,
    DrawingHand,
    HighCard,
    Premium,
    Strong,
    Playable,
    Marginal,
    Unknown,
}

/// Human-facing classification of hero's current holding.
#[derive(Debug, Clone, Serialize)]
pub struct HandStrength {
    pub name: String,
    pub description: String,
    pub strength: u8,
    pub category: StrengthCategory,
}

impl HandStrength {
    fn new(name: &str, description: String, strength: u8, category: StrengthCategory) -> Self {
        HandStrength {
            name: name.to_string(),
            description,
            strength,
            category,
        }
    }

    /// Defensive fallback for a malformed hole-card count. Upstream
    /// validation makes this unreachable in practice.
    pub fn unknown() -> Self {
        HandStrength::new("Unknown", "Invalid hand".to_string(), 1, StrengthCategory::Unknown)
    }
}

/// Classify hero's current hand, dispatching on board completeness:
/// full evaluation on a complete board, rank/suit-count heuristics on a
/// partial one, hole-card archetypes preflop.
pub fn describe(hole_cards: &[Card], community_cards: &[Card]) -> HandStrength {
    match BoardState::from_community_count(community_cards.len()) {
        BoardState::Preflop => describe_preflop(hole_cards),
        BoardState::Partial => describe_partial(hole_cards, community_cards),
        BoardState::Complete => describe_complete(hole_cards, community_cards),
    }
}

fn made_strength(category: HandCategory) -> u8 {
    match category {
        HandCategory::HighCard => 1,
        HandCategory::Pair => 2,
        HandCategory::TwoPair => 3,
        HandCategory::ThreeOfAKind => 4,
        HandCategory::Straight => 5,
        HandCategory::Flush => 6,
        HandCategory::FullHouse => 7,
        HandCategory::FourOfAKind => 8,
        HandCategory::StraightFlush | HandCategory::RoyalFlush => 9,
    }
}

fn made_description(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::Pair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
        HandCategory::RoyalFlush => "Royal flush",
    }
}

fn describe_complete(hole_cards: &[Card], community_cards: &[Card]) -> HandStrength {
    let rank = match evaluate_hand(hole_cards, community_cards) {
        Ok(rank) => rank,
        Err(_) => return HandStrength::unknown(),
    };
    let category = if rank.category >= HandCategory::Pair {
        StrengthCategory::MadeHand
    } else {
        StrengthCategory::HighCard
    };
    HandStrength::new(
        rank.category.name(),
        made_description(rank.category).to_string(),
        made_strength(rank.category),
        category,
    )
}

/// Made straight / straight draw scan over unique ranks sorted
/// descending. The draw check looks at 4-rank windows spanning at most
/// 4 and the A-4-3-2 wheel shape; wider multi-gap shapes are not
/// detected. This windowed behavior is load-bearing for output parity,
/// keep it as is.
fn straight_potential(sorted_ranks: &[u8]) -> (bool, bool) {
    if sorted_ranks.len() < 3 {
        return (false, false);
    }
    for window in sorted_ranks.windows(5) {
        if window[0] - window[4] == 4 {
            return (true, false);
        }
    }
    for window in sorted_ranks.windows(4) {
        if window[0] - window[3] <= 4 {
            return (false, true);
        }
    }
    if [14u8, 4, 3, 2].iter().all(|r| sorted_ranks.contains(r)) {
        return (false, true);
    }
    (false, false)
}

fn describe_partial(hole_cards: &[Card], community_cards: &[Card]) -> HandStrength {
    let all_cards: Vec<Card> = hole_cards
        .iter()
        .chain(community_cards.iter())
        .copied()
        .collect();

    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for card in &all_cards {
        rank_counts[card.value() as usize] += 1;
        suit_counts[ALL_SUITS.iter().position(|&s| s == card.suit).unwrap_or(0)] += 1;
    }

    let by_count = |count: u8| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&v| rank_counts[v as usize] == count)
            .collect()
    };
    let pairs = by_count(2);
    let trips = by_count(3);
    let quads = by_count(4);

    let max_suit_count = *suit_counts.iter().max().unwrap_or(&0);
    let flush_made = max_suit_count >= 5;
    let flush_draw = max_suit_count == 4;

    let mut unique_ranks: Vec<u8> = all_cards.iter().map(|c| c.value()).collect();
    unique_ranks.sort_unstable_by(|a, b| b.cmp(a));
    unique_ranks.dedup();
    let (straight_made, straight_draw) = straight_potential(&unique_ranks);

    if let Some(&quad) = quads.first() {
        return HandStrength::new(
            "Four of a Kind",
            format!("Quad {}s", rank_name(quad)),
            8,
            StrengthCategory::MadeHand,
        );
    }
    if let Some(&trip) = trips.first() {
        if let Some(&pair) = pairs.first() {
            return HandStrength::new(
                "Full House",
                format!("{}s full of {}s", rank_name(trip), rank_name(pair)),
                7,
                StrengthCategory::MadeHand,
            );
        }
        return HandStrength::new(
            "Three of a Kind",
            format!("Trip {}s", rank_name(trip)),
            6,
            StrengthCategory::MadeHand,
        );
    }
    if flush_made {
        let flush_suit = ALL_SUITS[suit_counts
            .iter()
            .enumerate()
            .max_by_key(|&(_, count)| count)
            .map_or(0, |(i, _)| i)];
        return HandStrength::new(
            "Flush",
            format!("{} flush", flush_suit.name()),
            6,
            StrengthCategory::MadeHand,
        );
    }
    if straight_made {
        return HandStrength::new(
            "Straight",
            format!("{}-high straight", rank_name(unique_ranks[0])),
            5,
            StrengthCategory::MadeHand,
        );
    }
    if pairs.len() >= 2 {
        return HandStrength::new(
            "Two Pair",
            format!(
                "{}s and {}s",
                rank_name(pairs[0]),
                rank_name(pairs[pairs.len() - 1])
            ),
            4,
            StrengthCategory::MadeHand,
        );
    }
    if let Some(&pair) = pairs.first() {
        return HandStrength::new(
            "Pair",
            format!("Pair of {}s", rank_name(pair)),
            3,
            StrengthCategory::MadeHand,
        );
    }
    if flush_draw && straight_draw {
        return HandStrength::new(
            "Straight Flush Draw",
            "Open-ended straight flush draw".to_string(),
            6,
            StrengthCategory::DrawingHand,
        );
    }
    if straight_draw {
        return HandStrength::new(
            "Straight Draw",
            "Open-ended straight draw".to_string(),
            4,
            StrengthCategory::DrawingHand,
        );
    }
    if flush_draw {
        return HandStrength::new(
            "Flush Draw",
            "4-card flush draw".to_string(),
            4,
            StrengthCategory::DrawingHand,
        );
    }
    HandStrength::new(
        "High Card",
        format!("{} high", rank_name(unique_ranks[0])),
        2,
        StrengthCategory::HighCard,
    )
}

fn describe_preflop(hole_cards: &[Card]) -> HandStrength {
    if hole_cards.len() != 2 {
        return HandStrength::unknown();
    }
    let (first, second) = (hole_cards[0], hole_cards[1]);
    let (r1, r2) = (first.rank.to_char(), second.rank.to_char());

    let broadway_pair = matches!(first.rank, Rank::Ace | Rank::King | Rank::Queen | Rank::Jack);
    let both_ace_king = matches!(first.rank, Rank::Ace | Rank::King)
        && matches!(second.rank, Rank::Ace | Rank::King);

    if first.rank == second.rank {
        if broadway_pair {
            return HandStrength::new(
                "Premium Pair",
                format!("Pair of {}s", r1),
                8,
                StrengthCategory::Premium,
            );
        }
        return HandStrength::new(
            "Pocket Pair",
            format!("Pair of {}s", r1),
            6,
            StrengthCategory::Strong,
        );
    }

    if first.suit == second.suit {
        if both_ace_king {
            return HandStrength::new(
                "Premium Suited",
                format!("{}{} suited", r1, r2),
                7,
                StrengthCategory::Premium,
            );
        }
        return HandStrength::new(
            "Suited Cards",
            format!("{}{} suited", r1, r2),
            5,
            StrengthCategory::Playable,
        );
    }

    if both_ace_king {
        return HandStrength::new(
            "Premium Offsuit",
            format!("{}{} offsuit", r1, r2),
            6,
            StrengthCategory::Strong,
        );
    }

    HandStrength::new(
        "High Cards",
        format!("{}{} offsuit", r1, r2),
        3,
        StrengthCategory::Marginal,
    )
}
