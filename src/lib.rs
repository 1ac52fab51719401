//! Texas Hold'em hand-equity engine.
//!
//! Pure computation library behind a hand-analysis service: given hole
//! cards, any known community cards, and a player count, it estimates
//! win/tie/lose probabilities by Monte Carlo simulation, classifies the
//! current best hand (including draw detection on incomplete boards),
//! and maps the result to a strategic recommendation.
//!
//! The entry point is [`engine::analyze`]. Card validation, JSON
//! plumbing, and transport belong to the caller; the engine always
//! returns a best-effort result for pre-validated input.

pub mod advice;
pub mod cards;
pub mod engine;
pub mod equity;
pub mod error;
pub mod hand_evaluator;
pub mod strength;
