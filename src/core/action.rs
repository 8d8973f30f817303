//! # Actions
//!
//! Everything that can happen in Huemix becomes an `Action`.
//! Player presses `D`? That's `Action::Move(Side::Red, Step::Right)`.
//! The reset delay runs out? That's `Action::ResetElapsed`.
//!
//! The `update()` function takes the game and an action, mutates the game,
//! and returns the side effects the adapter must carry out. No I/O here:
//! sounds and timers are described as `Effect`s, never performed.
//!
//! ```text
//! Game + Action  →  update()  →  Game' + [Effect]
//! ```

use log::{debug, info};

use crate::core::board::Side;
use crate::core::round::{StatusMessage, Step, evaluate_lock};
use crate::core::state::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move one selector a single tile.
    Move(Side, Step),
    /// Freeze both selectors and judge the blend.
    Lock,
    /// Draw a new reference right now, locked or not.
    Restart,
    /// A scheduled reset came due.
    ResetElapsed,
    Quit,
}

/// The three sound cues the game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Move,
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlayCue(Cue),
    ScheduleReset(std::time::Duration),
    CancelPendingResets,
    Quit,
}

pub fn update(game: &mut Game, action: Action) -> Vec<Effect> {
    match action {
        Action::Move(side, step) => {
            if game.round.locked {
                return Vec::new();
            }
            let changed = game.round.step(&game.board, side, step);
            debug!(
                "{} selector {:?} -> red {} / blue {}",
                side.label(),
                step,
                game.round.red_index,
                game.round.blue_index
            );
            if changed {
                vec![Effect::PlayCue(Cue::Move)]
            } else {
                Vec::new()
            }
        }
        Action::Lock => {
            if game.round.locked {
                return Vec::new();
            }
            let (mix, status) = evaluate_lock(&game.board, &game.round);
            game.round.locked = true;
            game.round.mix_color = mix;
            game.round.status = status;
            game.tally.record(status);
            info!(
                "Locked red {} / blue {}: mix {} vs reference {} -> {:?}",
                game.round.red_index, game.round.blue_index, mix, game.round.reference_color, status
            );
            let cue = if status == StatusMessage::Win {
                Cue::Win
            } else {
                Cue::Lose
            };
            vec![
                Effect::PlayCue(cue),
                Effect::ScheduleReset(game.rules.reset_delay),
            ]
        }
        Action::Restart => {
            info!("Manual restart");
            game.regenerate();
            if game.rules.restart_cancels_pending_reset {
                vec![Effect::CancelPendingResets]
            } else {
                Vec::new()
            }
        }
        Action::ResetElapsed => {
            info!("Reset delay elapsed, new reference");
            game.regenerate();
            Vec::new()
        }
        Action::Quit => vec![Effect::Quit],
    }
}
