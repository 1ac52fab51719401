use equity_engine::cards::*;
use equity_engine::strength::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn hole(a: &str, b: &str) -> Vec<Card> {
    vec![c(a), c(b)]
}

#[test]
fn test_board_state_dispatch() {
    assert_eq!(BoardState::from_community_count(0), BoardState::Preflop);
    assert_eq!(BoardState::from_community_count(1), BoardState::Partial);
    assert_eq!(BoardState::from_community_count(4), BoardState::Partial);
    assert_eq!(BoardState::from_community_count(5), BoardState::Complete);
}

#[test]
fn test_preflop_premium_pair() {
    let result = describe(&hole("Ah", "As"), &[]);
    assert_eq!(result.name, "Premium Pair");
    assert_eq!(result.description, "Pair of As");
    assert_eq!(result.strength, 8);
    assert_eq!(result.category, StrengthCategory::Premium);
}

#[test]
fn test_preflop_pocket_pair() {
    let result = describe(&hole("7h", "7d"), &[]);
    assert_eq!(result.name, "Pocket Pair");
    assert_eq!(result.strength, 6);
    assert_eq!(result.category, StrengthCategory::Strong);
}

#[test]
fn test_preflop_premium_suited() {
    let result = describe(&hole("As", "Ks"), &[]);
    assert_eq!(result.name, "Premium Suited");
    assert_eq!(result.description, "AK suited");
    assert_eq!(result.strength, 7);
    assert_eq!(result.category, StrengthCategory::Premium);
}

#[test]
fn test_preflop_suited_cards() {
    let result = describe(&hole("9s", "8s"), &[]);
    assert_eq!(result.name, "Suited Cards");
    assert_eq!(result.strength, 5);
    assert_eq!(result.category, StrengthCategory::Playable);
}

#[test]
fn test_preflop_premium_offsuit() {
    let result = describe(&hole("As", "Kh"), &[]);
    assert_eq!(result.name, "Premium Offsuit");
    assert_eq!(result.description, "AK offsuit");
    assert_eq!(result.strength, 6);
    assert_eq!(result.category, StrengthCategory::Strong);
}

#[test]
fn test_preflop_high_cards() {
    let result = describe(&hole("Ah", "7d"), &[]);
    assert_eq!(result.name, "High Cards");
    assert_eq!(result.strength, 3);
    assert_eq!(result.category, StrengthCategory::Marginal);
}

#[test]
fn test_malformed_hole_cards() {
    let result = describe(&[c("Ah")], &[]);
    assert_eq!(result.name, "Unknown");
    assert_eq!(result.strength, 1);
    assert_eq!(result.category, StrengthCategory::Unknown);
}

#[test]
fn test_flop_trips() {
    let result = describe(&hole("Jh", "Jd"), &parse_board("Js7c2h").unwrap());
    assert_eq!(result.name, "Three of a Kind");
    assert_eq!(result.description, "Trip Jacks");
    assert_eq!(result.strength, 6);
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_partial_quads() {
    let result = describe(&hole("Ah", "Ad"), &parse_board("AsAc2h").unwrap());
    assert_eq!(result.name, "Four of a Kind");
    assert_eq!(result.description, "Quad Aces");
    assert_eq!(result.strength, 8);
}

#[test]
fn test_partial_full_house() {
    let result = describe(&hole("Jh", "Jd"), &parse_board("JsKcKh").unwrap());
    assert_eq!(result.name, "Full House");
    assert_eq!(result.description, "Jacks full of Kings");
    assert_eq!(result.strength, 7);
}

#[test]
fn test_partial_flush_made() {
    let result = describe(&hole("Ah", "2h"), &parse_board("5h8hJh").unwrap());
    assert_eq!(result.name, "Flush");
    assert_eq!(result.description, "Hearts flush");
    assert_eq!(result.strength, 6);
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_partial_straight_made() {
    let result = describe(&hole("7h", "8s"), &parse_board("9dTcJh").unwrap());
    assert_eq!(result.name, "Straight");
    assert_eq!(result.description, "Jack-high straight");
    assert_eq!(result.strength, 5);
}

#[test]
fn test_turn_straight_made() {
    let result = describe(&hole("7h", "8h"), &parse_board("9hTsJd2c").unwrap());
    assert!(result.name.contains("Straight"));
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_partial_two_pair() {
    let result = describe(&hole("Ah", "Kd"), &parse_board("As2cKh").unwrap());
    assert_eq!(result.name, "Two Pair");
    assert_eq!(result.description, "Aces and Kings");
    assert_eq!(result.strength, 4);
}

#[test]
fn test_partial_pair() {
    let result = describe(&hole("Ah", "Kd"), &parse_board("As2c7h").unwrap());
    assert_eq!(result.name, "Pair");
    assert_eq!(result.description, "Pair of Aces");
    assert_eq!(result.strength, 3);
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_partial_flush_draw() {
    let result = describe(&hole("Ah", "2h"), &parse_board("7h9hKs").unwrap());
    assert_eq!(result.name, "Flush Draw");
    assert_eq!(result.description, "4-card flush draw");
    assert_eq!(result.strength, 4);
    assert_eq!(result.category, StrengthCategory::DrawingHand);
}

#[test]
fn test_partial_straight_draw() {
    let result = describe(&hole("9h", "8d"), &parse_board("7cTs2h").unwrap());
    assert_eq!(result.name, "Straight Draw");
    assert_eq!(result.strength, 4);
    assert_eq!(result.category, StrengthCategory::DrawingHand);
}

#[test]
fn test_partial_straight_flush_draw() {
    let result = describe(&hole("9h", "8h"), &parse_board("7hTh2s").unwrap());
    assert_eq!(result.name, "Straight Flush Draw");
    assert_eq!(result.strength, 6);
    assert_eq!(result.category, StrengthCategory::DrawingHand);
}

#[test]
fn test_partial_wheel_draw() {
    let result = describe(&hole("Ah", "2d"), &parse_board("3c4s9h").unwrap());
    assert_eq!(result.name, "Straight Draw");
    assert_eq!(result.category, StrengthCategory::DrawingHand);
}

#[test]
fn test_partial_high_card() {
    let result = describe(&hole("Ah", "Kd"), &parse_board("2c7s9h").unwrap());
    assert_eq!(result.name, "High Card");
    assert_eq!(result.description, "Ace high");
    assert_eq!(result.strength, 2);
    assert_eq!(result.category, StrengthCategory::HighCard);
}

#[test]
fn test_complete_board_pair_is_made_hand() {
    let result = describe(&hole("Ah", "Kd"), &parse_board("As7c2h9dQc").unwrap());
    assert_eq!(result.name, "Pair");
    assert_eq!(result.description, "One pair");
    assert_eq!(result.strength, 2);
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_complete_board_high_card() {
    let result = describe(&hole("As", "2d"), &parse_board("KhQh7c8c9d").unwrap());
    assert_eq!(result.name, "High Card");
    assert_eq!(result.strength, 1);
    assert_eq!(result.category, StrengthCategory::HighCard);
}

#[test]
fn test_complete_board_straight() {
    let result = describe(&hole("7h", "8h"), &parse_board("9sTdJc2c3d").unwrap());
    assert_eq!(result.name, "Straight");
    assert_eq!(result.strength, 5);
    assert_eq!(result.category, StrengthCategory::MadeHand);
}

#[test]
fn test_complete_board_royal_flush() {
    let result = describe(&hole("As", "Ks"), &parse_board("QsJsTs2d3c").unwrap());
    assert_eq!(result.name, "Royal Flush");
    assert_eq!(result.description, "Royal flush");
    assert_eq!(result.strength, 9);
}
