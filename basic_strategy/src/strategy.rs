use crate::{
    session::hand::{hand_total, is_pair, is_soft_hand},
    Action, Card,
};

const H: Action = Action::Hit;
const S: Action = Action::Stand;
const D: Action = Action::DoubleDown;
const P: Action = Action::Split;
const DS: Action = Action::DoubleOrStand;

/// Dealer columns are 2, 3, ..., 10, Ace.
pub const DEALER_COLUMNS: usize = 10;

pub type ChartLine = [Action; DEALER_COLUMNS];

const HARD_LOWEST: u8 = 8;
const HARD_HIGHEST: u8 = 17;
const HARD_CHART: [ChartLine; 10] = [
    [H, H, H, H, H, H, H, H, H, H], // 8, 8-
    [H, D, D, D, D, H, H, H, H, H],
    [D, D, D, D, D, D, D, D, H, H],
    [D, D, D, D, D, D, D, D, D, D], // 11
    [H, H, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17, 17+
];

const SOFT_LOWEST: u8 = 13;
const SOFT_CHART: [ChartLine; 9] = [
    [H, H, H, D, D, H, H, H, H, H], // Ace + 2
    [H, H, H, D, D, H, H, H, H, H],
    [H, H, D, D, D, H, H, H, H, H],
    [H, H, D, D, D, H, H, H, H, H],
    [H, D, D, D, D, H, H, H, H, H],
    [DS, DS, DS, DS, DS, S, S, H, H, H], // Ace + 7
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S], // Ace + 10
];

const PAIR_CHART: [ChartLine; 10] = [
    [P, P, P, P, P, P, H, H, H, H], // Double 2
    [P, P, P, P, P, P, H, H, H, H],
    [H, H, H, P, P, H, H, H, H, H],
    [D, D, D, D, D, D, D, D, H, H],
    [P, P, P, P, P, P, H, H, H, H],
    [P, P, P, P, P, P, H, H, H, H],
    [P, P, P, P, P, P, P, P, P, P],
    [P, P, P, P, P, S, P, P, S, S],
    [S, S, S, S, S, S, S, S, S, S], // Double 10
    [P, P, P, P, P, P, P, P, P, P], // Double Ace
];

/// Returns the basic strategy action for a two-card player hand against the
/// dealer's upcard.
///
/// Pairs are looked up first, then soft hands (exactly one ace), then hard
/// totals. Without an upcard there is nothing to look up and the answer is
/// `Stand`.
pub fn correct_action(player_cards: [Card; 2], dealer_up_card: Option<Card>) -> Action {
    let dealer_up_card = match dealer_up_card {
        Some(card) => card,
        None => return Action::Stand,
    };
    let col = (dealer_up_card.value() - 2) as usize;

    if is_pair(&player_cards) {
        let row = (player_cards[0].value() - 2) as usize;
        PAIR_CHART[row][col]
    } else if is_soft_hand(&player_cards) {
        let soft_total = player_cards
            .iter()
            .find(|card| !card.is_ace())
            .map_or(11, |card| 11 + card.value());
        if soft_total < SOFT_LOWEST {
            Action::Hit
        } else {
            SOFT_CHART[(soft_total - SOFT_LOWEST) as usize][col]
        }
    } else {
        let total = hand_total(&player_cards).clamp(HARD_LOWEST.into(), HARD_HIGHEST.into());
        HARD_CHART[usize::from(total) - usize::from(HARD_LOWEST)][col]
    }
}

/// One labelled line of the printed strategy chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub hand: String,
    pub actions: ChartLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub title: &'static str,
    pub rows: Vec<ChartRow>,
}

pub const DEALER_LABELS: [&str; DEALER_COLUMNS] =
    ["2", "3", "4", "5", "6", "7", "8", "9", "10", "A"];

/// Builds the strategy chart for display: hard totals from 17+ down to 8,
/// soft totals from A,9 down to A,2 and pairs from A,A down to 2,2.
pub fn strategy_chart() -> Vec<ChartSection> {
    let hard_rows = (HARD_LOWEST..=HARD_HIGHEST)
        .rev()
        .map(|total| ChartRow {
            hand: if total == HARD_HIGHEST {
                format!("{}+", total)
            } else {
                total.to_string()
            },
            actions: HARD_CHART[(total - HARD_LOWEST) as usize],
        })
        .collect();

    let soft_rows = (2..=9u8)
        .rev()
        .map(|other| ChartRow {
            hand: format!("A,{}", other),
            actions: SOFT_CHART[(other - 2) as usize],
        })
        .collect();

    let pair_rows = (2..=11u8)
        .rev()
        .map(|value| {
            let label = if value == 11 {
                String::from("A")
            } else {
                value.to_string()
            };
            ChartRow {
                hand: format!("{},{}", label, label),
                actions: PAIR_CHART[(value - 2) as usize],
            }
        })
        .collect();

    vec![
        ChartSection {
            title: "Hard Totals",
            rows: hard_rows,
        },
        ChartSection {
            title: "Soft Totals",
            rows: soft_rows,
        },
        ChartSection {
            title: "Pairs",
            rows: pair_rows,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use strum::IntoEnumIterator;

    fn hand(first: Rank, second: Rank) -> [Card; 2] {
        [Card::new(first, Suit::Hearts), Card::new(second, Suit::Spades)]
    }

    fn up(rank: Rank) -> Option<Card> {
        Some(Card::new(rank, Suit::Diamonds))
    }

    /// One upcard per dealer column.
    fn dealer_ranks() -> [Rank; 10] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Ace,
        ]
    }

    fn row_codes(player: [Card; 2]) -> Vec<&'static str> {
        dealer_ranks()
            .iter()
            .map(|rank| correct_action(player, up(*rank)).code())
            .collect()
    }

    fn codes(line: &str) -> Vec<&str> {
        line.split(',').collect()
    }

    #[test]
    fn missing_up_card_means_stand() {
        assert_eq!(correct_action(hand(Rank::Five, Rank::Six), None), Action::Stand);
        assert_eq!(correct_action(hand(Rank::Ace, Rank::Ace), None), Action::Stand);
    }

    #[test]
    fn aces_always_split() {
        for dealer in Rank::iter() {
            assert_eq!(correct_action(hand(Rank::Ace, Rank::Ace), up(dealer)), Action::Split);
        }
    }

    #[test]
    fn hard_seventeen_always_stands_and_eleven_always_doubles() {
        for dealer in Rank::iter() {
            assert_eq!(correct_action(hand(Rank::Ten, Rank::Seven), up(dealer)), Action::Stand);
            assert_eq!(correct_action(hand(Rank::Nine, Rank::Eight), up(dealer)), Action::Stand);
            assert_eq!(
                correct_action(hand(Rank::Six, Rank::Five), up(dealer)),
                Action::DoubleDown
            );
            assert_eq!(
                correct_action(hand(Rank::Eight, Rank::Three), up(dealer)),
                Action::DoubleDown
            );
        }
    }

    #[test]
    fn soft_eighteen_depends_on_dealer() {
        let ace_seven = hand(Rank::Ace, Rank::Seven);
        assert_eq!(correct_action(ace_seven, up(Rank::Two)), Action::DoubleOrStand);
        assert_eq!(correct_action(ace_seven, up(Rank::Six)), Action::DoubleOrStand);
        assert_eq!(correct_action(ace_seven, up(Rank::Seven)), Action::Stand);
        assert_eq!(correct_action(ace_seven, up(Rank::Eight)), Action::Stand);
        assert_eq!(correct_action(ace_seven, up(Rank::Nine)), Action::Hit);
        assert_eq!(correct_action(ace_seven, up(Rank::King)), Action::Hit);
        assert_eq!(correct_action(ace_seven, up(Rank::Ace)), Action::Hit);
    }

    #[test]
    fn order_of_cards_does_not_matter() {
        for dealer in dealer_ranks() {
            assert_eq!(
                correct_action(hand(Rank::Ace, Rank::Four), up(dealer)),
                correct_action(hand(Rank::Four, Rank::Ace), up(dealer))
            );
        }
    }

    #[test]
    fn hard_rows() {
        assert_eq!(row_codes(hand(Rank::Two, Rank::Three)), codes("H,H,H,H,H,H,H,H,H,H"));
        assert_eq!(row_codes(hand(Rank::Five, Rank::Three)), codes("H,H,H,H,H,H,H,H,H,H"));
        assert_eq!(row_codes(hand(Rank::Six, Rank::Three)), codes("H,D,D,D,D,H,H,H,H,H"));
        assert_eq!(row_codes(hand(Rank::Six, Rank::Four)), codes("D,D,D,D,D,D,D,D,H,H"));
        assert_eq!(row_codes(hand(Rank::Seven, Rank::Four)), codes("D,D,D,D,D,D,D,D,D,D"));
        assert_eq!(row_codes(hand(Rank::Ten, Rank::Two)), codes("H,H,S,S,S,H,H,H,H,H"));
        for second in [Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
            assert_eq!(row_codes(hand(Rank::Ten, second)), codes("S,S,S,S,S,H,H,H,H,H"));
        }
        assert_eq!(row_codes(hand(Rank::Jack, Rank::Queen)), codes("S,S,S,S,S,S,S,S,S,S"));
    }

    #[test]
    fn soft_rows() {
        let expected = [
            (Rank::Two, "H,H,H,D,D,H,H,H,H,H"),
            (Rank::Three, "H,H,H,D,D,H,H,H,H,H"),
            (Rank::Four, "H,H,D,D,D,H,H,H,H,H"),
            (Rank::Five, "H,H,D,D,D,H,H,H,H,H"),
            (Rank::Six, "H,D,D,D,D,H,H,H,H,H"),
            (Rank::Seven, "DS,DS,DS,DS,DS,S,S,H,H,H"),
            (Rank::Eight, "S,S,S,S,S,S,S,S,S,S"),
            (Rank::Nine, "S,S,S,S,S,S,S,S,S,S"),
            (Rank::King, "S,S,S,S,S,S,S,S,S,S"),
        ];
        for (other, line) in expected {
            assert_eq!(row_codes(hand(Rank::Ace, other)), codes(line), "A,{:?}", other);
        }
    }

    #[test]
    fn pair_rows() {
        let expected = [
            (Rank::Two, "P,P,P,P,P,P,H,H,H,H"),
            (Rank::Three, "P,P,P,P,P,P,H,H,H,H"),
            (Rank::Four, "H,H,H,P,P,H,H,H,H,H"),
            (Rank::Five, "D,D,D,D,D,D,D,D,H,H"),
            (Rank::Six, "P,P,P,P,P,P,H,H,H,H"),
            (Rank::Seven, "P,P,P,P,P,P,H,H,H,H"),
            (Rank::Eight, "P,P,P,P,P,P,P,P,P,P"),
            (Rank::Nine, "P,P,P,P,P,S,P,P,S,S"),
            (Rank::Ten, "S,S,S,S,S,S,S,S,S,S"),
            (Rank::Queen, "S,S,S,S,S,S,S,S,S,S"),
            (Rank::Ace, "P,P,P,P,P,P,P,P,P,P"),
        ];
        for (rank, line) in expected {
            assert_eq!(row_codes(hand(rank, rank)), codes(line), "{:?} pair", rank);
        }
    }

    #[test]
    fn mixed_tens_are_a_hard_twenty() {
        assert_eq!(correct_action(hand(Rank::King, Rank::Ten), up(Rank::Six)), Action::Stand);
    }

    #[test]
    fn chart_matches_resolver() {
        let chart = strategy_chart();
        let titles: Vec<&str> = chart.iter().map(|section| section.title).collect();
        assert_eq!(titles, vec!["Hard Totals", "Soft Totals", "Pairs"]);

        let hard: Vec<&str> = chart[0].rows.iter().map(|row| row.hand.as_str()).collect();
        assert_eq!(hard, vec!["17+", "16", "15", "14", "13", "12", "11", "10", "9", "8"]);
        let soft: Vec<&str> = chart[1].rows.iter().map(|row| row.hand.as_str()).collect();
        assert_eq!(soft, vec!["A,9", "A,8", "A,7", "A,6", "A,5", "A,4", "A,3", "A,2"]);
        let pairs: Vec<&str> = chart[2].rows.iter().map(|row| row.hand.as_str()).collect();
        assert_eq!(
            pairs,
            vec!["A,A", "10,10", "9,9", "8,8", "7,7", "6,6", "5,5", "4,4", "3,3", "2,2"]
        );

        let ace_seven = &chart[1].rows[2];
        let printed: Vec<&str> = ace_seven.actions.iter().map(|action| action.code()).collect();
        assert_eq!(printed, row_codes(hand(Rank::Ace, Rank::Seven)));

        let nines = &chart[2].rows[2];
        let printed: Vec<&str> = nines.actions.iter().map(|action| action.code()).collect();
        assert_eq!(printed, row_codes(hand(Rank::Nine, Rank::Nine)));
    }
}
