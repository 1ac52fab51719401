use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static PROFILES_JSON: &str = include_str!("../data/opponent_profiles.json");

/// Static archetype a seat might be playing. Loaded once from the
/// embedded table; never mutated after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentRange {
    pub profile: String,
    pub range: String,
    pub likely_holdings: Vec<String>,
}

#[derive(Deserialize)]
struct ProfileFile {
    profiles: Vec<OpponentRange>,
}

static PROFILES: Lazy<Vec<OpponentRange>> = Lazy::new(|| {
    let file: ProfileFile =
        serde_json::from_str(PROFILES_JSON).expect("Failed to parse opponent profiles");
    file.profiles
});

/// One archetype per opponent, in table order, capped at the table size.
pub fn opponent_ranges(player_count: usize) -> Vec<OpponentRange> {
    let opponents_needed = player_count.saturating_sub(1).min(PROFILES.len());
    PROFILES[..opponents_needed].to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    #[serde(rename = "Bet/Raise")]
    BetRaise,
    #[serde(rename = "Call/Check")]
    CallCheck,
    #[serde(rename = "Check/Call")]
    CheckCall,
    #[serde(rename = "Fold")]
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::BetRaise => write!(f, "Bet/Raise"),
            Action::CallCheck => write!(f, "Call/Check"),
            Action::CheckCall => write!(f, "Check/Call"),
            Action::Fold => write!(f, "Fold"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub reason: String,
    pub confidence: String,
}

impl Recommendation {
    fn new(action: Action, reason: &str, confidence: &str) -> Self {
        Recommendation {
            action,
            reason: reason.to_string(),
            confidence: confidence.to_string(),
        }
    }
}

/// Threshold map from win probability (0..=100) to an action line.
/// Boundary values fall into the stronger bracket.
pub fn recommend(win_probability: f64) -> Recommendation {
    if win_probability >= 60.0 {
        Recommendation::new(
            Action::BetRaise,
            "Strong hand with high win probability",
            "High (85%+)",
        )
    } else if win_probability >= 40.0 {
        Recommendation::new(
            Action::CallCheck,
            "Decent hand with reasonable equity",
            "Medium (70%)",
        )
    } else if win_probability >= 25.0 {
        Recommendation::new(
            Action::CheckCall,
            "Drawing hand with some equity",
            "Low (55%)",
        )
    } else {
        Recommendation::new(Action::Fold, "Weak hand with poor equity", "High (80%+)")
    }
}
