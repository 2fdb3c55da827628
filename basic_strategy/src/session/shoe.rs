use crate::{Card, Rank, Suit};

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::Rng;

pub const CARDS_PER_DECK: usize = 52;

/// Represents a single shuffled deck. Cards are dealt from the back, and an
/// empty shoe is rebuilt and reshuffled on the next draw.
#[derive(Debug, Clone)]
pub struct Shoe<R: Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl<R: Rng> Shoe<R> {
    /// Creates a new shoe shuffled with the given random source.
    pub fn new(rng: R) -> Shoe<R> {
        let mut shoe = Shoe {
            cards: Vec::with_capacity(CARDS_PER_DECK),
            rng,
        };
        shoe.reset();
        shoe
    }

    /// Puts all 52 cards back and shuffles.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals a card. Never fails: an empty shoe is reshuffled first.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            log::debug!("shoe exhausted, reshuffling");
            self.reset();
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
