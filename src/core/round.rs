//! # Rounds
//!
//! One round = one reference color and one attempt at matching it.
//!
//! ```text
//! generate_reference ──► unlocked ──(moves)──► unlocked ──(lock)──► locked
//!        ▲                                                            │
//!        └──────────────── reset after the delay, or Space ───────────┘
//! ```

use log::debug;
use rand::Rng;

use crate::core::board::{BoardConfig, Rgb, Side};

/// Which selector moved most recently. Drives the highlight stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastActive {
    #[default]
    None,
    Red,
    Blue,
}

impl From<Side> for LastActive {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => LastActive::Red,
            Side::Blue => LastActive::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    None,
    Win,
    NoMatch,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            StatusMessage::None => "",
            StatusMessage::Win => "YOU WIN!",
            StatusMessage::NoMatch => "No match, restarting...",
        }
    }
}

/// Direction of a single selector step along the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub reference_color: Rgb,
    /// Source tiles of the reference (red side, blue side). Diagnostics only.
    pub reference_indices: (usize, usize),
    pub red_index: usize,
    pub blue_index: usize,
    pub last_active: LastActive,
    pub locked: bool,
    /// White until a lock; frozen afterwards.
    pub mix_color: Rgb,
    pub status: StatusMessage,
}

impl RoundState {
    /// A fresh round whose reference is the blend of the two given tiles.
    pub fn from_reference(board: &BoardConfig, red_ref: usize, blue_ref: usize) -> Self {
        Self {
            reference_color: board.mix(red_ref, blue_ref),
            reference_indices: (red_ref, blue_ref),
            red_index: *board.red_range().start(),
            blue_index: *board.blue_range().end(),
            last_active: LastActive::None,
            locked: false,
            mix_color: Rgb::WHITE,
            status: StatusMessage::None,
        }
    }

    /// Moves one selector by a single tile, clamped to its side.
    ///
    /// Marks the side as last active even when the clamp swallows the step.
    /// Returns true only if the index changed.
    pub fn step(&mut self, board: &BoardConfig, side: Side, step: Step) -> bool {
        let (index, range) = match side {
            Side::Red => (&mut self.red_index, board.red_range()),
            Side::Blue => (&mut self.blue_index, board.blue_range()),
        };
        let target = match step {
            Step::Left => index.saturating_sub(1),
            Step::Right => *index + 1,
        };
        let clamped = target.clamp(*range.start(), *range.end());
        let changed = clamped != *index;
        *index = clamped;
        self.last_active = side.into();
        changed
    }

    /// Blend of the current selections, recomputed on demand.
    pub fn live_mix(&self, board: &BoardConfig) -> Rgb {
        board.mix(self.red_index, self.blue_index)
    }

    /// What the mix tile shows right now.
    pub fn displayed_mix(&self, board: &BoardConfig) -> Rgb {
        if self.locked {
            self.mix_color
        } else if self.last_active == LastActive::None {
            Rgb::WHITE
        } else {
            self.live_mix(board)
        }
    }
}

/// Starts a new round from two uniformly chosen tiles, one per side.
pub fn generate_reference<R: Rng>(board: &BoardConfig, rng: &mut R) -> RoundState {
    let red_ref = rng.gen_range(board.red_range());
    let blue_ref = rng.gen_range(board.blue_range());
    let round = RoundState::from_reference(board, red_ref, blue_ref);
    debug!(
        "Reference {} from tiles {} and {}",
        round.reference_color, red_ref, blue_ref
    );
    round
}

/// Blends the locked selections and compares them with the reference.
///
/// Exact per-channel equality; there is no tolerance window.
pub fn evaluate_lock(board: &BoardConfig, round: &RoundState) -> (Rgb, StatusMessage) {
    let mix = round.live_mix(board);
    let status = if mix == round.reference_color {
        StatusMessage::Win
    } else {
        StatusMessage::NoMatch
    };
    (mix, status)
}
