//! # Board
//!
//! The row of tiles both players pick from, and the colors painted on it.
//!
//! ```text
//!   0   1   2 ... L-1 │  L  │ L+1 ...      T-1
//!  ─────── red ───────┼ mix ┼─────── blue ──────
//!  (255,0,0) → pink   │white│ light blue → (0,0,255)
//! ```
//!
//! `L` is `left_count`, `T` is `total_tiles`. Everything here is pure:
//! the same index on the same board always maps to the same color.

use std::fmt;
use std::ops::RangeInclusive;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const CYAN: Rgb = Rgb(0, 255, 255);

    /// Per-channel average, rounding halves up.
    pub fn average(self, other: Rgb) -> Rgb {
        Rgb(
            average_channel(self.0, other.0),
            average_channel(self.1, other.1),
            average_channel(self.2, other.2),
        )
    }

    /// Uniform gray, the canvas equivalent of a single-value fill.
    pub const fn gray(level: u8) -> Rgb {
        Rgb(level, level, level)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

fn average_channel(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}

/// Linear interpolation of one channel, rounded half-up and clamped to a byte.
fn lerp_channel(start: f64, stop: f64, t: f64) -> u8 {
    let value = t * (stop - start) + start;
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Interpolation parameter for position `pos` on a side with `count` tiles.
fn side_param(pos: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (pos as f64 / (count - 1) as f64).clamp(0.0, 1.0)
}

/// Which player owns a side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A side was configured with zero tiles.
    EmptySide { side: Side },
    /// A side has more tiles than the board can lay out.
    TooManyTiles { side: Side, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptySide { side } => {
                write!(f, "the {} side needs at least one tile", side.label().to_lowercase())
            }
            BoardError::TooManyTiles { side, count } => write!(
                f,
                "the {} side has {} tiles, at most {} allowed",
                side.label().to_lowercase(),
                count,
                BoardConfig::MAX_SIDE_COUNT
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Tile counts for both sides. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    left_count: usize,
    right_count: usize,
}

impl BoardConfig {
    pub const DEFAULT_SIDE_COUNT: usize = 7;
    pub const MAX_SIDE_COUNT: usize = 64;

    pub fn new(left_count: usize, right_count: usize) -> Result<Self, BoardError> {
        if left_count == 0 {
            return Err(BoardError::EmptySide { side: Side::Red });
        }
        if right_count == 0 {
            return Err(BoardError::EmptySide { side: Side::Blue });
        }
        if left_count > Self::MAX_SIDE_COUNT {
            return Err(BoardError::TooManyTiles {
                side: Side::Red,
                count: left_count,
            });
        }
        if right_count > Self::MAX_SIDE_COUNT {
            return Err(BoardError::TooManyTiles {
                side: Side::Blue,
                count: right_count,
            });
        }
        Ok(Self {
            left_count,
            right_count,
        })
    }

    pub fn left_count(&self) -> usize {
        self.left_count
    }

    pub fn right_count(&self) -> usize {
        self.right_count
    }

    /// The single neutral tile between the two sides.
    pub fn mix_index(&self) -> usize {
        self.left_count
    }

    pub fn total_tiles(&self) -> usize {
        self.left_count + 1 + self.right_count
    }

    /// Legal positions for the red selector.
    pub fn red_range(&self) -> RangeInclusive<usize> {
        0..=self.left_count - 1
    }

    /// Legal positions for the blue selector (never the mix tile).
    pub fn blue_range(&self) -> RangeInclusive<usize> {
        self.mix_index() + 1..=self.total_tiles() - 1
    }

    pub fn color_for_index(&self, i: usize) -> Rgb {
        if i < self.left_count {
            let t = side_param(i, self.left_count);
            let fade = lerp_channel(0.0, 150.0, t);
            Rgb(255, fade, fade)
        } else if i == self.mix_index() {
            Rgb::WHITE
        } else {
            let j = i - self.mix_index() - 1;
            let t = side_param(j, self.right_count);
            let fade = lerp_channel(120.0, 0.0, t);
            Rgb(fade, fade, 255)
        }
    }

    /// Color of every tile, left to right.
    pub fn palette(&self) -> Vec<Rgb> {
        (0..self.total_tiles())
            .map(|i| self.color_for_index(i))
            .collect()
    }

    /// Blend of two tiles, as shown on the mix tile.
    pub fn mix(&self, red_index: usize, blue_index: usize) -> Rgb {
        self.color_for_index(red_index)
            .average(self.color_for_index(blue_index))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            left_count: Self::DEFAULT_SIDE_COUNT,
            right_count: Self::DEFAULT_SIDE_COUNT,
        }
    }
}
