use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::Card;
use crate::error::{EngineError, EngineResult};

/// The ten canonical hand categories, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Totally ordered strength of an evaluated hand. Hands of the same
/// category and identical kickers compare equal, which is what the
/// simulator relies on for tie detection.
#[derive(Debug, Clone, Eq)]
pub struct HandRank {
    pub category: HandCategory,
    pub kickers: Vec<u8>,
}

impl HandRank {
    pub fn new(category: HandCategory, kickers: Vec<u8>) -> Self {
        HandRank { category, kickers }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.kickers == other.kickers
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => self.kickers.cmp(&other.kickers),
            ord => ord,
        }
    }
}

/// High card of a 5-card straight, if any. Values must be sorted
/// descending. The wheel (A-5-4-3-2) counts as a 5-high straight.
fn straight_high(values: &[u8]) -> Option<u8> {
    let unique: Vec<u8> = values.iter().copied().dedup().collect();
    if unique.len() < 5 {
        return None;
    }
    if unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }
    if unique[0] == 14 && unique[1] == 5 && unique[4] == 2 {
        return Some(5);
    }
    None
}

fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);

    if flush {
        if let Some(high) = straight {
            if high == 14 {
                return HandRank::new(HandCategory::RoyalFlush, vec![14]);
            }
            return HandRank::new(HandCategory::StraightFlush, vec![high]);
        }
    }

    // Rank multiplicities, largest group first, higher rank first on ties.
    let mut groups: Vec<(usize, u8)> = values
        .iter()
        .copied()
        .counts()
        .into_iter()
        .map(|(value, count)| (count, value))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    // One kicker per group, paired ranks ahead of side cards.
    let grouped_kickers: Vec<u8> = groups.iter().map(|&(_, value)| value).collect();

    match (groups[0].0, groups.get(1).map_or(0, |g| g.0), straight) {
        (4, _, _) => HandRank::new(HandCategory::FourOfAKind, grouped_kickers),
        (3, 2, _) => HandRank::new(HandCategory::FullHouse, grouped_kickers),
        _ if flush => HandRank::new(HandCategory::Flush, values),
        (_, _, Some(high)) => HandRank::new(HandCategory::Straight, vec![high]),
        (3, _, _) => HandRank::new(HandCategory::ThreeOfAKind, grouped_kickers),
        (2, 2, _) => HandRank::new(HandCategory::TwoPair, grouped_kickers),
        (2, _, _) => HandRank::new(HandCategory::Pair, grouped_kickers),
        _ => HandRank::new(HandCategory::HighCard, values),
    }
}

/// Evaluate the best 5-card hand available from hole cards plus board.
/// Accepts any total of 5 to 7 cards.
pub fn evaluate_hand(hole_cards: &[Card], board: &[Card]) -> EngineResult<HandRank> {
    let all_cards: Vec<Card> = hole_cards.iter().chain(board.iter()).copied().collect();
    if all_cards.len() < 5 {
        return Err(EngineError::NotEnoughCards {
            need: 5,
            got: all_cards.len(),
        });
    }

    let mut best: Option<HandRank> = None;
    for combo in all_cards.iter().combinations(5) {
        let five: [Card; 5] = [*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]];
        let rank = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| rank > *b) {
            best = Some(rank);
        }
    }

    best.ok_or(EngineError::NotEnoughCards {
        need: 5,
        got: all_cards.len(),
    })
}

/// Compare two hands on a shared board: 1 if hand1 wins, -1 if hand2
/// wins, 0 on a chop.
pub fn compare_hands(hand1: &[Card], hand2: &[Card], board: &[Card]) -> EngineResult<i32> {
    let r1 = evaluate_hand(hand1, board)?;
    let r2 = evaluate_hand(hand2, board)?;
    Ok(match r1.cmp(&r2) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    })
}
