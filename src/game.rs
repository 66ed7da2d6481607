//! Game-level state: the board and the session that owns it.
//!
//! `Board` is the full set of card containers (stock, seven piles, four
//! foundations). `GameSession` owns one board plus the shuffle source used
//! to deal it and the cached win flag, and is the only thing an input
//! layer needs to talk to.

use log::{debug, info};

use crate::card::{Card, DECK_LEN, Suit};
use crate::foundation::{Foundations, is_won};
use crate::moves::{self, MoveKind, Zone};
use crate::shuffle::{FixedDeck, ShuffleSource};
use crate::stock::Stock;
use crate::tableau::{DEALT_TO_TABLEAU, PileView, Tableau};

/// Every card container in one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub stock: Stock,
    pub tableau: Tableau,
    pub foundations: Foundations,
}

impl Board {
    /// Deal a deck into the opening layout.
    ///
    /// The first 28 cards go to the tableau (pile `i` gets `i + 1` cards),
    /// the remaining 24 form the stock in deck order with nothing exposed.
    pub fn deal(deck: &[Card; DECK_LEN]) -> Self {
        Board {
            stock: Stock::new(deck[DEALT_TO_TABLEAU..].to_vec()),
            tableau: Tableau::deal(deck),
            foundations: Foundations::default(),
        }
    }

    /// Every card on the board, stock first, then piles, then foundations.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.stock.cards().to_vec();
        for pile in &self.tableau.piles {
            cards.extend_from_slice(pile.cards());
        }
        for foundation in self.foundations.iter() {
            cards.extend_from_slice(foundation.cards());
        }
        cards
    }

    /// Pile and foundation invariants, for tests and debug checks.
    pub fn invariants_hold(&self) -> bool {
        self.tableau.piles.iter().all(|p| p.hidden_invariant_holds())
            && self.foundations.iter().all(|f| f.invariant_holds())
            && self.stock.cursor().is_none_or(|i| i < self.stock.len())
    }
}

/// One player's game, from deal to win, and any number of re-deals.
#[derive(Debug)]
pub struct GameSession<S = Box<dyn ShuffleSource>> {
    board: Board,
    won: bool,
    shuffle: S,
    deals: u64,
}

impl GameSession<FixedDeck> {
    /// A session that deals `deck` every time.
    pub fn from_deck(deck: [Card; DECK_LEN]) -> Self {
        GameSession::new(FixedDeck::new(deck))
    }
}

impl<S: ShuffleSource> GameSession<S> {
    /// Create a session and deal its first game.
    pub fn new(shuffle: S) -> Self {
        let mut session = GameSession {
            board: Board::default(),
            won: false,
            shuffle,
            deals: 0,
        };
        session.new_game();
        session
    }

    /// Shuffle and deal a fresh game, discarding the current one.
    pub fn new_game(&mut self) {
        let deck = self.shuffle.permutation();
        self.board = Board::deal(&deck);
        self.won = false;
        self.deals += 1;
        info!("deal #{} from {}", self.deals, self.shuffle.describe());
    }

    /// Full read-only snapshot of every container.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of games dealt in this session.
    pub fn deals_played(&self) -> u64 {
        self.deals
    }

    pub fn exposed_stock_card(&self) -> Option<Card> {
        self.board.stock.exposed()
    }

    pub fn advance_stock(&mut self) {
        self.board.stock.advance();
    }

    /// Hidden count and cards (bottom to top) of pile `index`.
    pub fn pile_view(&self, index: usize) -> Option<PileView<'_>> {
        self.board.tableau.pile(index).map(|p| p.view())
    }

    pub fn foundation_top(&self, suit: Suit) -> Option<Card> {
        self.board.foundations.top(suit)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Exposed stock card onto a foundation, or onto its own suit's
    /// foundation when `target` is `None`.
    pub fn stock_to_foundation(&mut self, target: Option<Suit>) -> usize {
        self.apply(MoveKind::StockToFoundation { target })
    }

    /// Top card of `pile` onto a foundation.
    pub fn pile_to_foundation(&mut self, pile: u8, target: Option<Suit>) -> usize {
        self.apply(MoveKind::PileToFoundation { pile, target })
    }

    pub fn stock_to_pile(&mut self, pile: u8) -> usize {
        self.apply(MoveKind::StockToPile { pile })
    }

    /// Move the run from `src` that fits onto `dst`.
    pub fn pile_to_pile(&mut self, src: u8, dst: u8) -> usize {
        self.apply(MoveKind::PileToPile { src, dst })
    }

    /// Move between two zones; unsupported pairings move nothing.
    pub fn move_cards(&mut self, src: Zone, dst: Zone) -> usize {
        let Some(kind) = MoveKind::from_zones(src, dst) else {
            debug!("{src:?} -> {dst:?}: not a move");
            return 0;
        };
        self.apply(kind)
    }

    /// Send the card at `src` to the foundation of its own suit.
    pub fn send_to_foundation(&mut self, src: Zone) -> usize {
        match MoveKind::to_own_foundation(src) {
            Some(kind) => self.apply(kind),
            None => 0,
        }
    }

    fn apply(&mut self, kind: MoveKind) -> usize {
        let moved = moves::apply_move(&mut self.board, kind);
        debug_assert!(self.board.invariants_hold(), "after {kind:?}");
        if moved > 0 && kind.fills_foundation() {
            self.won = is_won(&self.board.foundations);
            if self.won {
                info!("game won after deal #{}", self.deals);
            }
        }
        moved
    }
}
