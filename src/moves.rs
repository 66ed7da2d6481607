//! Move addressing, validation and application.
//!
//! Every move is validate-then-apply: a rejected move returns 0 and leaves
//! the board untouched, a legal move returns the number of cards it moved.
//! Moves are addressed by `Zone`, and `MoveKind::from_zones` picks which
//! of the primitive moves a (source, destination) pair means.

use log::{Level, debug, log_enabled, trace};

use crate::card::{Card, Suit, is_one_lower_opposite_color};
use crate::game::Board;
use crate::tableau::Pile;

/// Where a move starts or ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The exposed stock card.
    Stock,
    /// A tableau pile, 0-based (0..=6).
    Tableau(u8),
    /// The foundation for a suit.
    Foundation(Suit),
}

/// The primitive moves the engine knows how to check and apply.
///
/// `target: None` on a foundation move means "the foundation of the moved
/// card's own suit".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    StockToFoundation { target: Option<Suit> },
    PileToFoundation { pile: u8, target: Option<Suit> },
    StockToPile { pile: u8 },
    PileToPile { src: u8, dst: u8 },
}

impl MoveKind {
    /// Resolve a (source, destination) pair into a move.
    ///
    /// Returns `None` for pairings that are never legal, such as anything
    /// out of a foundation or anything into the stock.
    pub fn from_zones(src: Zone, dst: Zone) -> Option<Self> {
        match (src, dst) {
            (Zone::Stock, Zone::Tableau(pile)) => Some(MoveKind::StockToPile { pile }),
            (Zone::Stock, Zone::Foundation(suit)) => {
                Some(MoveKind::StockToFoundation { target: Some(suit) })
            }
            (Zone::Tableau(src), Zone::Tableau(dst)) => Some(MoveKind::PileToPile { src, dst }),
            (Zone::Tableau(pile), Zone::Foundation(suit)) => Some(MoveKind::PileToFoundation {
                pile,
                target: Some(suit),
            }),
            _ => None,
        }
    }

    /// The move a double activation of `src` means: send its card to the
    /// foundation of its own suit.
    pub fn to_own_foundation(src: Zone) -> Option<Self> {
        match src {
            Zone::Stock => Some(MoveKind::StockToFoundation { target: None }),
            Zone::Tableau(pile) => Some(MoveKind::PileToFoundation { pile, target: None }),
            Zone::Foundation(_) => None,
        }
    }

    /// True if a successful move of this kind adds to a foundation.
    pub fn fills_foundation(self) -> bool {
        matches!(
            self,
            MoveKind::StockToFoundation { .. } | MoveKind::PileToFoundation { .. }
        )
    }

    /// Render a move as a human-readable string, using the board as it is
    /// before the move to name the cards involved.
    pub fn describe(&self, board: &Board) -> String {
        let card_str = |c: Option<Card>| c.map_or_else(|| "(none)".to_string(), |c| c.short_str());
        let target_str = |t: Option<Suit>| t.map_or_else(|| "own suit".to_string(), |s| format!("{s:?}"));
        match *self {
            MoveKind::StockToFoundation { target } => format!(
                "Stock: {} -> Foundation({})",
                card_str(board.stock.exposed()),
                target_str(target)
            ),
            MoveKind::PileToFoundation { pile, target } => format!(
                "Pile {}: {} -> Foundation({})",
                pile + 1,
                card_str(board.tableau.top(pile as usize)),
                target_str(target)
            ),
            MoveKind::StockToPile { pile } => format!(
                "Stock: {} -> Pile {}",
                card_str(board.stock.exposed()),
                pile + 1
            ),
            MoveKind::PileToPile { src, dst } => {
                let visible = board
                    .tableau
                    .pile(src as usize)
                    .map(Pile::visible)
                    .unwrap_or_default();
                match (visible.first(), visible.last()) {
                    (Some(low), Some(top)) if visible.len() > 1 => {
                        format!("Pile {}: {}..{} -> Pile {}", src + 1, low, top, dst + 1)
                    }
                    (_, top) => format!(
                        "Pile {}: {} -> Pile {}",
                        src + 1,
                        card_str(top.copied()),
                        dst + 1
                    ),
                }
            }
        }
    }
}

/// Check and apply a move. Returns the number of cards moved, 0 if rejected.
pub fn apply_move(board: &mut Board, kind: MoveKind) -> usize {
    let before = log_enabled!(Level::Debug).then(|| kind.describe(board));
    let moved = match kind {
        MoveKind::StockToFoundation { target } => stock_to_foundation(board, target),
        MoveKind::PileToFoundation { pile, target } => {
            pile_to_foundation(board, pile as usize, target)
        }
        MoveKind::StockToPile { pile } => stock_to_pile(board, pile as usize),
        MoveKind::PileToPile { src, dst } => pile_to_pile(board, src as usize, dst as usize),
    };
    if let Some(text) = before {
        if moved > 0 {
            debug!("{text}: moved {moved} card(s)");
        } else {
            debug!("{text}: rejected");
        }
    }
    moved
}

/// Move between two zones. Unsupported pairings move nothing.
pub fn move_cards(board: &mut Board, src: Zone, dst: Zone) -> usize {
    match MoveKind::from_zones(src, dst) {
        Some(kind) => apply_move(board, kind),
        None => {
            debug!("{src:?} -> {dst:?}: not a move");
            0
        }
    }
}

/// Pick the foundation a card goes to: the requested one if it matches the
/// card's suit, or the card's own suit when none is requested.
fn resolve_foundation(card: Card, target: Option<Suit>) -> Option<Suit> {
    match target {
        Some(suit) if suit != card.suit() => None,
        _ => Some(card.suit()),
    }
}

/// Exposed stock card onto a foundation.
pub fn stock_to_foundation(board: &mut Board, target: Option<Suit>) -> usize {
    let Some(card) = board.stock.exposed() else {
        return 0;
    };
    let Some(suit) = resolve_foundation(card, target) else {
        return 0;
    };
    if !board.foundations.get(suit).accepts(card) {
        return 0;
    }
    if let Some(card) = board.stock.take_exposed() {
        board.foundations.get_mut(suit).push(card);
    }
    1
}

/// Top card of a pile onto a foundation.
pub fn pile_to_foundation(board: &mut Board, pile: usize, target: Option<Suit>) -> usize {
    let Some(card) = board.tableau.top(pile) else {
        return 0;
    };
    let Some(suit) = resolve_foundation(card, target) else {
        return 0;
    };
    if !board.foundations.get(suit).accepts(card) {
        return 0;
    }
    let Some(src) = board.tableau.pile_mut(pile) else {
        return 0;
    };
    src.pop_top();
    src.reveal_if_needed();
    board.foundations.get_mut(suit).push(card);
    1
}

/// Exposed stock card onto a pile.
pub fn stock_to_pile(board: &mut Board, pile: usize) -> usize {
    let Some(card) = board.stock.exposed() else {
        return 0;
    };
    if !board.tableau.accepts_single(pile, card) {
        return 0;
    }
    let Some(dst) = board.tableau.pile_mut(pile) else {
        return 0;
    };
    if let Some(card) = board.stock.take_exposed() {
        dst.push_single(card);
    }
    1
}

/// Move the matching run from the top of `src` onto `dst`.
///
/// Onto a non-empty pile the run must end at the card one rank below the
/// destination's top; onto an empty pile it must end at a King. Either way
/// the run has to be a straight all the way up to the top of `src`.
pub fn pile_to_pile(board: &mut Board, src: usize, dst: usize) -> usize {
    let Some((from, to)) = board.tableau.pair_mut(src, dst) else {
        return 0;
    };
    let Some(src_top) = from.top() else {
        return 0;
    };

    let count = match to.top() {
        Some(lead) if !parity_allows(lead, src_top) => {
            trace!("pile {src} top {src_top} cannot follow {lead}: color parity");
            0
        }
        Some(lead) => find_tail_run(from, |c| c.rank_index() + 1 == lead.rank_index()),
        None => find_tail_run(from, Card::is_king),
    };
    if count == 0 {
        return 0;
    }

    let run = from.take_top_run(count);
    to.extend_run(run);
    from.reveal_if_needed();
    count
}

/// Quick color check before scanning for a landing card.
///
/// Along a straight the colors alternate, so a run ending on the card below
/// `lead` has a top of the same color as `lead` when their rank difference
/// is even and the opposite color when it is odd.
pub fn parity_allows(lead: Card, pile_top: Card) -> bool {
    let even = lead.rank_index().abs_diff(pile_top.rank_index()) % 2 == 0;
    even == (lead.color() == pile_top.color())
}

/// Walk the face-up segment of `pile` from the top down while it forms a
/// straight, and return the length of the run ending at the first card
/// satisfying `stop`. Returns 0 if the straight breaks (or the face-up
/// segment runs out) before such a card is reached.
pub fn find_tail_run(pile: &Pile, stop: impl Fn(Card) -> bool) -> usize {
    let mut upper: Option<Card> = None;
    for (depth, &card) in pile.visible().iter().rev().enumerate() {
        if let Some(upper) = upper {
            if !is_one_lower_opposite_color(upper, card) {
                trace!("straight breaks at {card} under {upper}");
                break;
            }
        }
        if stop(card) {
            return depth + 1;
        }
        upper = Some(card);
    }
    0
}
