//! The four suit-locked foundations and the win check.

use crate::card::{Card, NUM_RANKS, NUM_SUITS, Rank, Suit};

/// One ascending Ace..King stack, bound to a single suit for its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Foundation {
            suit,
            cards: Vec::with_capacity(NUM_RANKS as usize),
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_RANKS as usize
    }

    /// Same suit, and either an Ace onto an empty stack or the next rank up.
    pub fn accepts(&self, card: Card) -> bool {
        card.suit() == self.suit
            && match self.top() {
                None => card.rank() == Rank::Ace,
                Some(top) => card.rank_index() == top.rank_index() + 1,
            }
    }

    pub fn push(&mut self, card: Card) {
        debug_assert!(self.accepts(card), "{card} does not fit {:?} foundation", self.suit);
        self.cards.push(card);
    }

    /// Empty, or exactly Ace..top of this foundation's suit.
    pub fn invariant_holds(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(i, c)| c.suit() == self.suit && c.rank_index() as usize == i)
    }
}

/// The four foundations, indexed by `Suit::index()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundations([Foundation; NUM_SUITS as usize]);

impl Default for Foundations {
    fn default() -> Self {
        Foundations(Suit::ALL.map(Foundation::new))
    }
}

impl Foundations {
    pub fn get(&self, suit: Suit) -> &Foundation {
        &self.0[suit.index()]
    }

    pub fn get_mut(&mut self, suit: Suit) -> &mut Foundation {
        &mut self.0[suit.index()]
    }

    pub fn top(&self, suit: Suit) -> Option<Card> {
        self.get(suit).top()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Foundation> {
        self.0.iter()
    }

    /// Total number of cards across all foundations.
    pub fn card_count(&self) -> usize {
        self.0.iter().map(Foundation::len).sum()
    }
}

/// A game is won once every foundation holds all thirteen ranks.
pub fn is_won(foundations: &Foundations) -> bool {
    foundations.iter().all(Foundation::is_complete)
}
