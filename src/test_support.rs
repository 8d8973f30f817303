//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::audio::SoundPlayer;
use crate::core::action::Cue;
use crate::core::board::BoardConfig;
use crate::core::state::{Game, RoundRules};

/// A 7/7 game with a fixed seed.
pub fn test_game() -> Game {
    Game::new(BoardConfig::default(), RoundRules::default(), Some(7))
}

/// Remembers every cue it was asked to play. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingPlayer {
    log: Rc<RefCell<Vec<Cue>>>,
}

impl RecordingPlayer {
    pub fn cues(&self) -> Vec<Cue> {
        self.log.borrow().clone()
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&self, cue: Cue) {
        self.log.borrow_mut().push(cue);
    }
}
