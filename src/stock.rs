//! The stock: undealt cards plus a cursor to the one currently exposed.
//!
//! Drawing walks the cursor forward through the sequence and falls back to
//! "nothing exposed" after the last card, so repeated draws cycle through
//! the whole stock. Taking the exposed card closes the gap, which leaves the
//! cursor on the card that followed it.

use log::trace;

use crate::card::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    cards: Vec<Card>,
    /// `None` means no card is exposed; otherwise always `< cards.len()`.
    cursor: Option<usize>,
}

impl Stock {
    /// Build a stock from cards in draw order, with nothing exposed.
    pub fn new(cards: Vec<Card>) -> Self {
        Stock { cards, cursor: None }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All remaining stock cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Expose the next card, or wrap back to "nothing exposed".
    pub fn advance(&mut self) {
        self.cursor = match self.cursor {
            None if self.cards.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.cards.len() => Some(i + 1),
            Some(_) => None,
        };
        trace!("stock cursor -> {:?} of {}", self.cursor, self.cards.len());
    }

    /// The currently exposed card, if any.
    pub fn exposed(&self) -> Option<Card> {
        self.cursor.map(|i| self.cards[i])
    }

    /// Remove and return the exposed card.
    ///
    /// Returns `None` and leaves the stock untouched when nothing is exposed.
    pub fn take_exposed(&mut self) -> Option<Card> {
        let i = self.cursor?;
        let card = self.cards.remove(i);
        if i >= self.cards.len() {
            self.cursor = None;
        }
        debug_assert!(self.cursor.is_none_or(|c| c < self.cards.len()));
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::standard_deck;

    fn stock_of(n: usize) -> Stock {
        Stock::new(standard_deck()[..n].to_vec())
    }

    #[test]
    fn empty_stock_never_exposes() {
        let mut stock = Stock::default();
        stock.advance();
        assert_eq!(stock.cursor(), None);
        assert_eq!(stock.exposed(), None);
        assert_eq!(stock.take_exposed(), None);
    }

    #[test]
    fn drawing_visits_every_card_once_per_cycle() {
        let mut stock = stock_of(24);
        let deck = standard_deck();

        for _cycle in 0..2 {
            assert_eq!(stock.exposed(), None);
            for expected in deck[..24].iter() {
                stock.advance();
                assert_eq!(stock.exposed(), Some(*expected));
            }
            stock.advance();
        }
        assert_eq!(stock.exposed(), None);
    }

    #[test]
    fn taking_exposed_card_reveals_the_next_one() {
        let mut stock = stock_of(3);
        let deck = standard_deck();

        stock.advance();
        stock.advance();
        assert_eq!(stock.exposed(), Some(deck[1]));

        assert_eq!(stock.take_exposed(), Some(deck[1]));
        assert_eq!(stock.len(), 2);
        assert_eq!(stock.cursor(), Some(1));
        assert_eq!(stock.exposed(), Some(deck[2]));
    }

    #[test]
    fn taking_last_card_clears_the_cursor() {
        let mut stock = stock_of(2);
        stock.advance();
        stock.advance();
        let last = stock.exposed();

        assert_eq!(stock.take_exposed(), last);
        assert_eq!(stock.len(), 1);
        assert_eq!(stock.cursor(), None);

        stock.advance();
        assert_eq!(stock.take_exposed(), Some(standard_deck()[0]));
        assert!(stock.is_empty());
        assert_eq!(stock.cursor(), None);
    }

    #[test]
    fn take_without_exposed_card_is_a_no_op() {
        let mut stock = stock_of(5);
        let before = stock.clone();
        assert_eq!(stock.take_exposed(), None);
        assert_eq!(stock, before);
    }
}
