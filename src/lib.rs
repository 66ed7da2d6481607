pub mod card;
pub mod stock;
pub mod tableau;
pub mod foundation;
pub mod moves;
pub mod game;
pub mod shuffle;
pub mod display;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::display::{DetailLevel, render_board};
use crate::game::GameSession;
use crate::shuffle::{FixedDeck, LcgShuffle, RandomShuffle, ShuffleSource};

pub use crate::card::{Card, Color, Rank, Suit};
pub use crate::game::Board;
pub use crate::moves::Zone;

/// Where the demo binary gets its deal from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DealConfig {
    /// Fresh entropy every run.
    #[default]
    Random,
    /// `rand`'s `StdRng` seeded with this value.
    Seed(u64),
    /// The small built-in LCG shuffle.
    Lcg(u32),
    /// The first bracketed deck list in this file.
    DeckFile(PathBuf),
}

impl DealConfig {
    pub fn into_source(self) -> Result<Box<dyn ShuffleSource>> {
        Ok(match self {
            DealConfig::Random => Box::new(RandomShuffle::from_entropy()),
            DealConfig::Seed(seed) => Box::new(RandomShuffle::seeded(seed)),
            DealConfig::Lcg(seed) => Box::new(LcgShuffle::new(seed)),
            DealConfig::DeckFile(path) => Box::new(FixedDeck::from_file(&path)?),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub deal: DealConfig,
    pub detail: DetailLevel,
}

impl RunConfig {
    /// Parse the very small command-line surface:
    ///   * `--seed=<u64>`  → seeded `rand` shuffle
    ///   * `--lcg=<u32>`   → built-in LCG shuffle
    ///   * `--deck=<file>` → fixed deck read from a file
    ///   * `--reveal`      → show face-down cards
    ///
    /// Unknown arguments are reported and ignored.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut cfg = RunConfig::default();
        for arg in args {
            if arg == "--reveal" {
                cfg.detail = DetailLevel::Reveal;
            } else if let Some(rest) = arg.strip_prefix("--seed=") {
                let seed = rest
                    .parse()
                    .with_context(|| format!("could not parse seed from '{rest}'"))?;
                cfg.deal = DealConfig::Seed(seed);
            } else if let Some(rest) = arg.strip_prefix("--lcg=") {
                let seed = rest
                    .parse()
                    .with_context(|| format!("could not parse LCG seed from '{rest}'"))?;
                cfg.deal = DealConfig::Lcg(seed);
            } else if let Some(rest) = arg.strip_prefix("--deck=") {
                cfg.deal = DealConfig::DeckFile(PathBuf::from(rest));
            } else {
                eprintln!(
                    "Warning: unrecognized argument '{arg}'; supported: --seed=<u64>, --lcg=<u32>, --deck=<file>, --reveal"
                );
            }
        }
        Ok(cfg)
    }
}

/// Entry point for the `klondike_rules` binary: deal one game from the
/// configured source and print the opening layout.
///
/// Example:
///   cargo run -- --lcg=12345 --reveal
pub fn run() -> Result<()> {
    let cfg = RunConfig::from_args(env::args().skip(1))?;
    let source = cfg.deal.into_source()?;
    println!("Dealing from {}", source.describe());
    println!();

    let session = GameSession::new(source);
    println!("{}", render_board(session.board(), cfg.detail));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_config_is_random_player_view() {
        let cfg = RunConfig::from_args(Vec::new()).unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.deal, DealConfig::Random);
        assert_eq!(cfg.detail, DetailLevel::Player);
    }

    #[test]
    fn parses_deal_sources_and_detail() {
        let cfg = RunConfig::from_args(args(&["--seed=99", "--reveal"])).unwrap();
        assert_eq!(cfg.deal, DealConfig::Seed(99));
        assert_eq!(cfg.detail, DetailLevel::Reveal);

        let cfg = RunConfig::from_args(args(&["--lcg=7", "--bogus"])).unwrap();
        assert_eq!(cfg.deal, DealConfig::Lcg(7));

        let cfg = RunConfig::from_args(args(&["--deck=deals/one.txt"])).unwrap();
        assert_eq!(cfg.deal, DealConfig::DeckFile(PathBuf::from("deals/one.txt")));
    }

    #[test]
    fn bad_seed_is_an_error() {
        assert!(RunConfig::from_args(args(&["--seed=abc"])).is_err());
        assert!(RunConfig::from_args(args(&["--lcg=-1"])).is_err());
    }

    #[test]
    fn lcg_config_deals_reproducibly() {
        let a = GameSession::new(DealConfig::Lcg(4).into_source().unwrap());
        let b = GameSession::new(DealConfig::Lcg(4).into_source().unwrap());
        assert_eq!(a.board(), b.board());
    }
}
