pub mod card;
pub mod session;
pub mod stats;
pub mod strategy;

use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use card::{Card, Rank, Suit};
pub use session::{Judgement, Session, SessionState};
pub use stats::{MemoryStreakStore, Statistics, StreakStore, Tracker};
pub use strategy::{correct_action, strategy_chart, ChartRow, ChartSection};

/// Restricts which dealt hands are offered to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum PracticeMode {
    #[default]
    All,
    HardTotalsOnly,
    SoftTotalsOnly,
    PairsOnly,
}

impl PracticeMode {
    pub fn description(&self) -> &'static str {
        match self {
            PracticeMode::All => "Practice All",
            PracticeMode::HardTotalsOnly => "Hard Totals",
            PracticeMode::SoftTotalsOnly => "Soft Totals",
            PracticeMode::PairsOnly => "Pairs",
        }
    }

    /// Checks if a dealt player hand belongs to this mode.
    pub fn accepts(&self, player_cards: &[Card]) -> bool {
        match self {
            PracticeMode::All => true,
            PracticeMode::HardTotalsOnly => !player_cards.iter().any(|card| card.is_ace()),
            PracticeMode::SoftTotalsOnly => player_cards.iter().any(|card| card.is_ace()),
            PracticeMode::PairsOnly => session::hand::is_pair(player_cards),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    DoubleDown,
    Split,
    /// Double down if the rules allow it, otherwise stand.
    DoubleOrStand,
}

impl Action {
    /// The abbreviation used in strategy charts.
    pub fn code(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::DoubleDown => "D",
            Action::Split => "P",
            Action::DoubleOrStand => "DS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::DoubleDown => "Double Down",
            Action::Split => "Split",
            Action::DoubleOrStand => "Double Down if allowed, otherwise Stand",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
