//! Sources of shuffled decks for new deals.
//!
//! The engine only ever asks for "a permutation of the 52 cards", so the
//! randomness is injected through `ShuffleSource`. Tests use the seeded or
//! fixed sources to make every deal reproducible.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail, ensure};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, DECK_LEN, standard_deck};

/// Anything that can produce a fresh deck order for a new deal.
pub trait ShuffleSource {
    fn permutation(&mut self) -> [Card; DECK_LEN];

    /// Short label used when logging deals.
    fn describe(&self) -> String;
}

impl<T: ShuffleSource + ?Sized> ShuffleSource for Box<T> {
    fn permutation(&mut self) -> [Card; DECK_LEN] {
        (**self).permutation()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Fisher–Yates over any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomShuffle<R = StdRng> {
    rng: R,
    label: String,
}

impl RandomShuffle<StdRng> {
    /// Non-reproducible deals seeded from the operating system.
    pub fn from_entropy() -> Self {
        RandomShuffle {
            rng: StdRng::from_entropy(),
            label: "random".to_string(),
        }
    }

    /// Reproducible deals: the same seed yields the same sequence of games.
    pub fn seeded(seed: u64) -> Self {
        RandomShuffle {
            rng: StdRng::seed_from_u64(seed),
            label: format!("seed:{seed}"),
        }
    }
}

impl<R: Rng> RandomShuffle<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomShuffle {
            rng,
            label: "custom rng".to_string(),
        }
    }
}

impl<R: Rng> ShuffleSource for RandomShuffle<R> {
    fn permutation(&mut self) -> [Card; DECK_LEN] {
        let mut deck = standard_deck();
        deck.shuffle(&mut self.rng);
        deck
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Small LCG-driven Fisher–Yates shuffle keyed by a 32-bit seed.
///
/// Unlike `RandomShuffle`, the output does not depend on the `rand` version,
/// so decks named by an LCG seed stay stable.
#[derive(Clone, Debug)]
pub struct LcgShuffle {
    seed: u32,
    state: u32,
}

impl LcgShuffle {
    pub fn new(seed: u32) -> Self {
        LcgShuffle { seed, state: seed }
    }

    fn next(&mut self) -> u32 {
        // Numerical Recipes constants; not cryptographically secure.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl ShuffleSource for LcgShuffle {
    fn permutation(&mut self) -> [Card; DECK_LEN] {
        let mut deck = standard_deck();
        for i in (1..DECK_LEN).rev() {
            let r = (self.next() as usize) % (i + 1);
            deck.swap(i, r);
        }
        deck
    }

    fn describe(&self) -> String {
        format!("lcg:{}", self.seed)
    }
}

/// Replays one known permutation for every deal.
#[derive(Clone, Debug)]
pub struct FixedDeck {
    deck: [Card; DECK_LEN],
    label: String,
}

impl FixedDeck {
    /// Panics in debug builds if `deck` is not a permutation of the 52 cards.
    pub fn new(deck: [Card; DECK_LEN]) -> Self {
        debug_assert!(is_full_deck(&deck));
        FixedDeck {
            deck,
            label: "fixed".to_string(),
        }
    }

    /// Parse a bracketed list such as `"[51, 32, 3, ...]"` of card indices.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(FixedDeck {
            deck: parse_bracketed_deck_list(s)?,
            label: "fixed".to_string(),
        })
    }

    /// Load the first bracketed deck list found in a text file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read deck file '{}'", path.display()))?;
        let open = text
            .find('[')
            .ok_or_else(|| anyhow!("no deck list found in '{}'", path.display()))?;
        let close = text[open..]
            .find(']')
            .map(|p| open + p)
            .ok_or_else(|| anyhow!("unterminated deck list in '{}'", path.display()))?;
        let deck = parse_bracketed_deck_list(&text[open..=close])
            .with_context(|| format!("bad deck list in '{}'", path.display()))?;
        let label = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "deck file".to_string());
        Ok(FixedDeck { deck, label })
    }
}

impl ShuffleSource for FixedDeck {
    fn permutation(&mut self) -> [Card; DECK_LEN] {
        self.deck
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// True if every card appears exactly once.
pub fn is_full_deck(deck: &[Card]) -> bool {
    let mut seen = [false; DECK_LEN];
    for card in deck {
        let i = card.index() as usize;
        if seen[i] {
            return false;
        }
        seen[i] = true;
    }
    deck.len() == DECK_LEN
}

/// Parse a single bracketed integer list (e.g. "[1, 2, 3]") into a deck.
///
/// The list must contain exactly 52 integers, each in 0..=51, with no
/// duplicates. Each integer is a `Card::index()`.
pub fn parse_bracketed_deck_list(s: &str) -> Result<[Card; DECK_LEN]> {
    let open = s.find('[').context("missing '['")?;
    let close = s.rfind(']').context("missing ']'")?;
    ensure!(close > open, "malformed [...] list");

    let mut cards: Vec<Card> = Vec::with_capacity(DECK_LEN);
    for part in s[open + 1..close].split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        let v: u8 = t
            .parse()
            .with_context(|| format!("could not parse '{t}' as a card index"))?;
        let card =
            Card::from_index(v).ok_or_else(|| anyhow!("card index {v} out of range 0..=51"))?;
        if cards.contains(&card) {
            bail!("duplicate card index {v}");
        }
        cards.push(card);
    }

    let n = cards.len();
    cards
        .try_into()
        .map_err(|_| anyhow!("deck list must have {DECK_LEN} numbers, got {n}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_list(deck: &[Card]) -> String {
        let nums: Vec<String> = deck.iter().map(|c| c.index().to_string()).collect();
        format!("[{}]", nums.join(", "))
    }

    #[test]
    fn every_source_yields_a_full_deck() {
        let mut sources: Vec<Box<dyn ShuffleSource>> = vec![
            Box::new(RandomShuffle::from_entropy()),
            Box::new(RandomShuffle::seeded(7)),
            Box::new(LcgShuffle::new(2025)),
            Box::new(FixedDeck::new(standard_deck())),
        ];
        for source in sources.iter_mut() {
            for _ in 0..3 {
                assert!(is_full_deck(&source.permutation()), "{}", source.describe());
            }
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RandomShuffle::seeded(42);
        let mut b = RandomShuffle::seeded(42);
        assert_eq!(a.permutation(), b.permutation());
        assert_eq!(a.permutation(), b.permutation());

        assert_eq!(LcgShuffle::new(9).permutation(), LcgShuffle::new(9).permutation());
        assert_ne!(LcgShuffle::new(9).permutation(), LcgShuffle::new(10).permutation());
    }

    #[test]
    fn consecutive_lcg_deals_differ() {
        let mut lcg = LcgShuffle::new(1);
        let first = lcg.permutation();
        assert_ne!(first, lcg.permutation());
    }

    #[test]
    fn deck_list_parses_back() {
        let deck = LcgShuffle::new(123).permutation();
        let parsed = parse_bracketed_deck_list(&deck_list(&deck)).unwrap();
        assert_eq!(parsed, deck);

        let mut fixed = FixedDeck::parse(&format!("deck: {}\n", deck_list(&deck))).unwrap();
        assert_eq!(fixed.permutation(), deck);
    }

    #[test]
    fn bad_deck_lists_are_rejected() {
        let deck = standard_deck();

        assert!(parse_bracketed_deck_list("1, 2, 3").is_err());
        assert!(parse_bracketed_deck_list(&deck_list(&deck[..51])).is_err());

        let mut dup = deck;
        dup[51] = dup[0];
        let err = parse_bracketed_deck_list(&deck_list(&dup)).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");

        let text = deck_list(&deck).replace("[0,", "[52,");
        assert!(parse_bracketed_deck_list(&text).is_err());
    }

    #[test]
    fn missing_deck_file_reports_the_path() {
        let err = FixedDeck::from_file(Path::new("/nonexistent/deck.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/deck.txt"), "{err}");
    }
}
