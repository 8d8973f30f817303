//! # Session
//!
//! Glue between the pure reducer and the outside world. A `Session` owns the
//! game, the pending resets and the sound player, feeds actions through
//! `update()`, and carries out the returned effects.
//!
//! Time comes in as a parameter so the whole loop can be driven from tests.

use std::time::{Duration, Instant};

use log::debug;

use crate::audio::SoundPlayer;
use crate::core::action::{Action, Effect, update};
use crate::core::state::Game;
use crate::core::timer::ResetSchedule;

pub struct Session {
    pub game: Game,
    resets: ResetSchedule,
    player: Box<dyn SoundPlayer>,
}

impl Session {
    pub fn new(game: Game, player: Box<dyn SoundPlayer>) -> Self {
        Self {
            game,
            resets: ResetSchedule::new(),
            player,
        }
    }

    /// Runs one action and its effects. Returns true if the session should end.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        let mut quit = false;
        for effect in update(&mut self.game, action) {
            match effect {
                Effect::PlayCue(cue) => self.player.play(cue),
                Effect::ScheduleReset(delay) => {
                    debug!("Reset scheduled in {:?}", delay);
                    self.resets.schedule(now, delay);
                }
                Effect::CancelPendingResets => {
                    if self.resets.pending() > 0 {
                        debug!("Cancelled {} pending reset(s)", self.resets.pending());
                    }
                    self.resets.cancel_all();
                }
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Fires every reset whose deadline has passed.
    pub fn fire_due_resets(&mut self, now: Instant) -> bool {
        let mut quit = false;
        for _ in 0..self.resets.take_due(now) {
            quit |= self.dispatch(Action::ResetElapsed, now);
        }
        quit
    }

    pub fn pending_resets(&self) -> usize {
        self.resets.pending()
    }

    pub fn time_until_reset(&self, now: Instant) -> Option<Duration> {
        self.resets.time_until_next(now)
    }
}
