//! Human-readable rendering of a Klondike board.
//!
//! Face-down cards are shown as "XX" and face-up cards with their
//! `short_str()` rank/suit code. The output is meant for the demo binary
//! and for debugging, not as a stable format.

use core::fmt;

use crate::card::{Card, Suit};
use crate::game::Board;
use crate::tableau::NUM_PILES;

/// How much of the board to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailLevel {
    /// What a player sees: face-down cards stay hidden.
    #[default]
    Player,
    /// Every card face-up, for checking deals.
    Reveal,
}

/// Format a single card for display, either face-up or face-down.
pub fn format_card_visible(card: Card, face_up: bool) -> String {
    if face_up {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render the foundation row, showing only each foundation's top card.
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(board: &Board) -> String {
    let cells: Vec<String> = Suit::ALL
        .iter()
        .map(|&suit| match board.foundations.top(suit) {
            Some(card) => format!("[{card}]"),
            None => "[  ]".to_string(),
        })
        .collect();
    format!("Foundations: {}", cells.join(" "))
}

/// Render the stock size and the exposed stock card on a single line.
pub fn render_stock(board: &Board) -> String {
    let stock = &board.stock;
    let size = if stock.is_empty() {
        "Stock: [empty]".to_string()
    } else {
        format!("Stock: [{} cards]", stock.len())
    };
    let exposed = match stock.exposed() {
        Some(card) => format!("[{card}]"),
        None => "[  ]".to_string(),
    };
    format!("{size}    Exposed: {exposed}")
}

/// Render all tableau piles as columns, bottom card on the first row.
///
/// Each cell is three characters wide; shorter piles are padded with
/// blanks so the seven columns line up.
pub fn render_piles(board: &Board, detail: DetailLevel) -> String {
    let mut s = String::from("Piles:\n");
    for i in 0..NUM_PILES {
        s.push_str(&format!(" P{} ", i + 1));
    }
    s.push('\n');

    let piles = &board.tableau.piles;
    let max_height = piles.iter().map(|p| p.len()).max().unwrap_or(0);
    for row in 0..max_height {
        for pile in piles {
            match pile.cards().get(row) {
                Some(&card) => {
                    let face_up = detail == DetailLevel::Reveal || row >= pile.hidden();
                    s.push_str(&format!("{:>3} ", format_card_visible(card, face_up)));
                }
                None => s.push_str("    "),
            }
        }
        // Trailing blanks only add noise to diffs.
        s.truncate(s.trim_end().len());
        s.push('\n');
    }
    s
}

/// Foundations, stock and piles, in that order.
pub fn render_board(board: &Board, detail: DetailLevel) -> String {
    format!(
        "{}\n{}\n{}",
        render_foundations(board),
        render_stock(board),
        render_piles(board, detail)
    )
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, DetailLevel::Player))
    }
}
