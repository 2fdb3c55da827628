pub mod hand;
pub mod shoe;

use crate::{
    strategy::correct_action,
    stats::{StreakStore, Tracker},
    Action, Card, PracticeMode, Statistics,
};
use basic_strategy_macros::allowed_state;
use rand::Rng;

use self::{hand::hand_total, shoe::Shoe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No hand has been dealt yet.
    Waiting,
    /// A hand is dealt and waits for exactly one decision.
    Playing,
    /// The decision was judged. Deal the next hand to continue.
    Finished,
}

/// The verdict on one player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub decision: Action,
    pub correct_action: Action,
    pub is_correct: bool,
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_correct {
            "Correct!"
        } else {
            "Incorrect!"
        };
        write!(
            f,
            "{} Basic strategy says to {}.",
            verdict,
            self.correct_action.description()
        )
    }
}

/// Drills basic strategy: deals a two-card hand and a dealer upcard, accepts
/// one decision and judges it.
///
/// Commands issued in the wrong state, or a double or split the hand is not
/// eligible for, are ignored and return `None`.
pub struct Session<R: Rng, S: StreakStore> {
    state: SessionState,
    practice_mode: PracticeMode,
    shoe: Shoe<R>,
    player_hand: Vec<Card>,
    dealer_up_card: Option<Card>,
    player_score: u16,
    feedback: Option<String>,
    tracker: Tracker<S>,
}

impl<R: Rng, S: StreakStore> Session<R, S> {
    pub fn new(rng: R, store: S) -> Self {
        Self {
            state: SessionState::Waiting,
            practice_mode: PracticeMode::default(),
            shoe: Shoe::new(rng),
            player_hand: Vec::with_capacity(2),
            dealer_up_card: None,
            player_score: 0,
            feedback: None,
            tracker: Tracker::new(store),
        }
    }

    /// Deals a new hand. Can be called in any state.
    ///
    /// Redeals until the hand fits the practice mode and is not a natural.
    pub fn start_new_hand(&mut self) {
        loop {
            self.player_hand.clear();
            self.player_hand.push(self.shoe.draw());
            self.player_hand.push(self.shoe.draw());
            self.dealer_up_card = Some(self.shoe.draw());
            self.player_score = hand_total(&self.player_hand);

            if self.practice_mode.accepts(&self.player_hand) && self.player_score != 21 {
                break;
            }
        }

        log::debug!(
            "dealt {} {} against {}",
            self.player_hand[0],
            self.player_hand[1],
            self.dealer_up_card.map_or(String::from("-"), |card| card.to_string())
        );
        self.state = SessionState::Playing;
        self.feedback = None;
    }

    /// Can be called at Playing state.
    #[allowed_state(Playing)]
    pub fn hit(&mut self) -> Option<Judgement> {
        Some(self.judge(Action::Hit))
    }

    /// Can be called at Playing state.
    #[allowed_state(Playing)]
    pub fn stand(&mut self) -> Option<Judgement> {
        Some(self.judge(Action::Stand))
    }

    /// Can be called at Playing state, on a two-card hand.
    #[allowed_state(Playing, can_double_down)]
    pub fn double_down(&mut self) -> Option<Judgement> {
        Some(self.judge(Action::DoubleDown))
    }

    /// Can be called at Playing state, on a pair.
    #[allowed_state(Playing, can_split)]
    pub fn split(&mut self) -> Option<Judgement> {
        Some(self.judge(Action::Split))
    }

    /// Changes the filter for hands dealt from now on.
    pub fn set_practice_mode(&mut self, practice_mode: PracticeMode) {
        self.practice_mode = practice_mode;
    }

    pub fn can_double_down(&self) -> bool {
        self.state == SessionState::Playing && self.player_hand.len() == 2
    }

    pub fn can_split(&self) -> bool {
        self.state == SessionState::Playing && hand::is_pair(&self.player_hand)
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_up_card
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn player_score(&self) -> u16 {
        self.player_score
    }

    pub fn stats(&self) -> &Statistics {
        self.tracker.stats()
    }

    pub fn practice_mode(&self) -> PracticeMode {
        self.practice_mode
    }

    pub fn store(&self) -> &S {
        self.tracker.store()
    }

    /// The reference action for the current hand.
    pub fn correct_action(&self) -> Action {
        match <[Card; 2]>::try_from(self.player_hand.as_slice()) {
            Ok(player_cards) => correct_action(player_cards, self.dealer_up_card),
            Err(_) => Action::Stand,
        }
    }

    fn judge(&mut self, decision: Action) -> Judgement {
        let correct_action = self.correct_action();
        let judgement = Judgement {
            decision,
            correct_action,
            is_correct: decision == correct_action,
        };
        self.tracker.record_decision(judgement.is_correct);
        self.feedback = Some(judgement.to_string());
        self.state = SessionState::Finished;
        judgement
    }
}
