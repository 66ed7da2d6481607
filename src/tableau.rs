//! The seven tableau piles.
//!
//! Each pile stores its cards bottom-to-top together with `hidden`, the
//! number of face-down cards at the bottom. The pile invariant is
//! `hidden < len`, or `hidden == len == 0`: a non-empty pile always shows at
//! least its top card.

use crate::card::{Card, is_one_lower_opposite_color};

/// Number of tableau piles.
pub const NUM_PILES: usize = 7;

/// Number of cards dealt into the tableau at the start of a game (1+2+..+7).
pub const DEALT_TO_TABLEAU: usize = NUM_PILES * (NUM_PILES + 1) / 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    hidden: usize,
}

/// Read-only view of a pile for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PileView<'a> {
    /// Number of face-down cards at the bottom of `cards`.
    pub hidden: usize,
    /// All cards, bottom to top.
    pub cards: &'a [Card],
}

impl Pile {
    /// Build a pile from cards (bottom to top) with the given face-down count.
    ///
    /// A `hidden` count that would leave a non-empty pile with no face-up card
    /// is clamped so the top card shows.
    pub fn from_parts(cards: Vec<Card>, hidden: usize) -> Self {
        let hidden = hidden.min(cards.len().saturating_sub(1));
        Pile { cards, hidden }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up segment, bottom to top.
    pub fn visible(&self) -> &[Card] {
        &self.cards[self.hidden..]
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn view(&self) -> PileView<'_> {
        PileView {
            hidden: self.hidden,
            cards: &self.cards,
        }
    }

    /// Can `card` be placed on this pile on its own?
    ///
    /// An empty pile takes only a King; otherwise `card` must be one rank
    /// below the top card and of the opposite color.
    pub fn accepts_single(&self, card: Card) -> bool {
        match self.top() {
            None => card.is_king(),
            Some(top) => is_one_lower_opposite_color(card, top),
        }
    }

    pub fn push_single(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the top card. Callers follow up with `reveal_if_needed`.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Flip the new top card face-up if the last face-up card just left.
    pub fn reveal_if_needed(&mut self) {
        if self.hidden == self.cards.len() && self.hidden > 0 {
            self.hidden -= 1;
        }
    }

    /// Detach the top `count` cards, keeping their order.
    pub(crate) fn take_top_run(&mut self, count: usize) -> Vec<Card> {
        debug_assert!(count <= self.len() - self.hidden);
        let start = self.cards.len() - count;
        self.cards.split_off(start)
    }

    /// Append a run on top of this pile, keeping its order.
    pub(crate) fn extend_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// True if the face-down boundary is in a legal position.
    pub fn hidden_invariant_holds(&self) -> bool {
        self.hidden < self.cards.len() || (self.hidden == 0 && self.cards.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    pub piles: [Pile; NUM_PILES],
}

impl Tableau {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Deal the opening layout from the first 28 cards of `cards`.
    ///
    /// Pile `i` receives `i + 1` consecutive cards (bottom to top) with all
    /// but the topmost face-down.
    pub fn deal(cards: &[Card]) -> Self {
        debug_assert!(cards.len() >= DEALT_TO_TABLEAU);
        let mut offset = 0;
        let piles = core::array::from_fn(|i| {
            let dealt = cards[offset..offset + i + 1].to_vec();
            offset += i + 1;
            Pile::from_parts(dealt, i)
        });
        Tableau { piles }
    }

    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    pub fn pile_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.piles.get_mut(index)
    }

    pub fn top(&self, index: usize) -> Option<Card> {
        self.pile(index).and_then(Pile::top)
    }

    pub fn accepts_single(&self, index: usize, card: Card) -> bool {
        self.pile(index).is_some_and(|p| p.accepts_single(card))
    }

    /// Mutable access to two distinct piles at once.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Pile, &mut Pile)> {
        if a == b || a >= NUM_PILES || b >= NUM_PILES {
            return None;
        }
        if a < b {
            let (left, right) = self.piles.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.piles.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Total number of cards across all piles.
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit, standard_deck};

    #[test]
    fn deal_lays_out_a_staircase() {
        let deck = standard_deck();
        let tab = Tableau::deal(&deck);

        for (i, pile) in tab.piles.iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
            assert_eq!(pile.hidden(), i);
            assert_eq!(pile.visible().len(), 1);
            assert!(pile.hidden_invariant_holds());
        }
        assert_eq!(tab.card_count(), DEALT_TO_TABLEAU);
        // Pile 0 gets the first card, pile 1 the next two, and so on.
        assert_eq!(tab.piles[1].cards(), &deck[1..3]);
        assert_eq!(tab.top(6), Some(deck[27]));
    }

    #[test]
    fn empty_pile_accepts_only_kings() {
        let pile = Pile::default();
        for card in standard_deck() {
            assert_eq!(pile.accepts_single(card), card.rank() == Rank::King, "{card}");
        }
    }

    #[test]
    fn non_empty_pile_needs_one_lower_opposite_color() {
        let pile = Pile::from_parts(vec![Card::new(Suit::Spades, Rank::Nine)], 0);

        assert!(pile.accepts_single(Card::new(Suit::Hearts, Rank::Eight)));
        assert!(pile.accepts_single(Card::new(Suit::Diamonds, Rank::Eight)));
        assert!(!pile.accepts_single(Card::new(Suit::Clubs, Rank::Eight)));
        assert!(!pile.accepts_single(Card::new(Suit::Hearts, Rank::Seven)));
        assert!(!pile.accepts_single(Card::new(Suit::Hearts, Rank::Ten)));
    }

    #[test]
    fn reveal_flips_only_when_visible_segment_is_gone() {
        let deck = standard_deck();
        let mut pile = Pile::from_parts(deck[..3].to_vec(), 2);

        pile.reveal_if_needed();
        assert_eq!(pile.hidden(), 2);

        assert_eq!(pile.pop_top(), Some(deck[2]));
        pile.reveal_if_needed();
        assert_eq!(pile.hidden(), 1);
        assert!(pile.hidden_invariant_holds());

        assert_eq!(pile.pop_top(), Some(deck[1]));
        pile.reveal_if_needed();
        assert_eq!(pile.hidden(), 0);

        assert_eq!(pile.pop_top(), Some(deck[0]));
        pile.reveal_if_needed();
        assert_eq!((pile.len(), pile.hidden()), (0, 0));
        assert!(pile.hidden_invariant_holds());
    }

    #[test]
    fn from_parts_never_hides_the_top_card() {
        let deck = standard_deck();
        assert_eq!(Pile::from_parts(deck[..4].to_vec(), 9).hidden(), 3);
        assert_eq!(Pile::from_parts(Vec::new(), 2).hidden(), 0);
    }

    #[test]
    fn pair_mut_rejects_same_or_out_of_range() {
        let mut tab = Tableau::new_empty();
        assert!(tab.pair_mut(2, 2).is_none());
        assert!(tab.pair_mut(0, NUM_PILES).is_none());

        let (a, b) = tab.pair_mut(5, 1).unwrap();
        a.push_single(Card::new(Suit::Clubs, Rank::King));
        b.push_single(Card::new(Suit::Hearts, Rank::King));
        assert_eq!(tab.top(5), Some(Card::new(Suit::Clubs, Rank::King)));
        assert_eq!(tab.top(1), Some(Card::new(Suit::Hearts, Rank::King)));
    }
}
