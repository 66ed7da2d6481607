//! Card, Suit, Rank and Color types for a standard 52-card deck.
//!
//! - `Card` is a compact 1-byte representation (0..=51).
//! - `Suit`, `Rank` and `Color` give human-readable structure on top of that.

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// Deck length as `usize`, for array sizes.
pub const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// A playing card represented compactly as an index in 0..=51.
///
/// The mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card(u8);

/// The four suits, in the order foundations are laid out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Diamonds = 2,
    Clubs = 3,
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

/// The thirteen ranks, Ace low.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Card {
    /// Create a new card from a suit and rank.
    #[inline]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit as u8 * NUM_RANKS + rank as u8)
    }

    /// Create a card from a raw index, or `None` if `index >= 52`.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        (index < CARDS_PER_DECK).then_some(Card(index))
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / NUM_RANKS) as usize]
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % NUM_RANKS) as usize]
    }

    /// Rank as a plain number, 0=Ace .. 12=King.
    #[inline]
    pub fn rank_index(self) -> u8 {
        self.0 % NUM_RANKS
    }

    #[inline]
    pub fn color(self) -> Color {
        self.suit().color()
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank() == Rank::King
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().short_char(), self.suit().short_char())
    }
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    /// Position of this suit in `Suit::ALL`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'S', 'D', or 'C'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[inline]
    pub fn short_char(self) -> char {
        b"A23456789TJQK"[self as usize] as char
    }
}

/// Tableau stacking rule: can `upper` be placed directly on `lower`?
///
/// True if `upper` is exactly one rank below `lower` and the colors differ.
#[inline]
pub fn is_one_lower_opposite_color(upper: Card, lower: Card) -> bool {
    upper.rank_index() + 1 == lower.rank_index() && upper.color() != lower.color()
}

/// Generate a standard 52-card deck in a fixed order.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order, so
/// `standard_deck()[i].index() == i`.
pub fn standard_deck() -> [Card; DECK_LEN] {
    core::array::from_fn(|i| Card(i as u8))
}
