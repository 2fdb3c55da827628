use crate::Card;

/// Calculates the blackjack total of the given cards.
///
/// Every ace starts at 11 and is lowered to 1, one at a time, while the total
/// exceeds 21. A total above 21 therefore means every ace already counts 1.
pub fn hand_total(cards: &[Card]) -> u16 {
    let mut total: u16 = 0;
    let mut aces_as_eleven = 0;

    for card in cards {
        if card.is_ace() {
            aces_as_eleven += 1;
        }
        total += u16::from(card.value());
    }

    while total > 21 && aces_as_eleven > 0 {
        total -= 10;
        aces_as_eleven -= 1;
    }

    total
}

/// Two cards of the same rank. Two aces are a pair, not a soft hand.
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

/// Two cards with exactly one ace.
pub fn is_soft_hand(cards: &[Card]) -> bool {
    cards.len() == 2 && cards.iter().filter(|card| card.is_ace()).count() == 1
}

/// Two cards totalling 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_total(cards) == 21
}
