//! # Game State
//!
//! Everything the game knows, in one place. No TUI types here; presentation
//! state lives in the `tui` module.
//!
//! ```text
//! Game
//! ├── board: BoardConfig     // tile counts, fixed for the session
//! ├── round: RoundState      // reference, selectors, lock, status
//! ├── rules: RoundRules      // reset delay, restart behavior
//! ├── tally: Tally           // in-memory locks / wins
//! └── rng: StdRng            // reference generation
//! ```
//!
//! State changes only happen through `update(game, action)` in action.rs.

use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::board::BoardConfig;
use crate::core::config::ResolvedConfig;
use crate::core::round::{RoundState, StatusMessage, generate_reference};

/// Delay between a lock and the automatic next round.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub reset_delay: Duration,
    /// When true, Space also cancels a pending automatic reset.
    pub restart_cancels_pending_reset: bool,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            restart_cancels_pending_reset: true,
        }
    }
}

/// Session counters. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub locks: u32,
    pub wins: u32,
}

impl Tally {
    pub fn record(&mut self, status: StatusMessage) {
        self.locks += 1;
        if status == StatusMessage::Win {
            self.wins += 1;
        }
    }
}

pub struct Game {
    pub board: BoardConfig,
    pub round: RoundState,
    pub rules: RoundRules,
    pub tally: Tally,
    rng: StdRng,
}

impl Game {
    /// Starts a session with a first reference already drawn.
    ///
    /// `seed` makes every reference of the session reproducible.
    pub fn new(board: BoardConfig, rules: RoundRules, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let round = generate_reference(&board, &mut rng);
        Self {
            board,
            round,
            rules,
            tally: Tally::default(),
            rng,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        info!(
            "New game: {} red / {} blue tiles, seed {:?}",
            config.board.left_count(),
            config.board.right_count(),
            config.seed
        );
        Self::new(config.board, config.rules, config.seed)
    }

    /// Replaces the round with a freshly generated reference.
    pub fn regenerate(&mut self) {
        self.round = generate_reference(&self.board, &mut self.rng);
    }
}
