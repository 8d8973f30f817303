//! # Scene
//!
//! Turns the game into a flat list of draw commands on a logical canvas
//! measured in pixels. The canvas size is fixed once per session from the
//! board and tile size; adapters scale it onto whatever surface they own.
//!
//! ```text
//!                 REFERENCE COLOR
//!                    ┌──────┐
//!                    │ ref  │
//!                    └──────┘
//!                    YOU WIN!
//!     ┏━━━━┓                              ┌────┐
//!     ┃ r0 ┃ r1  …  r6 │mix│ b8  …  b13   │b14 │
//!     ┗━━━━┛                              └────┘
//!      [■]                                 [■]
//!      Red                                 Blue
//!
//!      A/D = move Red • J/L = move Blue • R = lock
//! ```
//!
//! Building a scene never touches the game; the live mix preview is derived
//! from the selectors on every call.

use crate::core::board::{BoardConfig, Rgb, Side};
use crate::core::round::LastActive;
use crate::core::state::Game;

pub const MIN_CANVAS_WIDTH: f32 = 900.0;
pub const MIN_CANVAS_HEIGHT: f32 = 420.0;
pub const LEGEND: &str = "A/D = move Red • J/L = move Blue • R = lock";

const TILE_GAP: f32 = 2.0;
const SIDE_MARGIN: f32 = 200.0;
const LABEL_BAND: f32 = 18.0;
const STATUS_BAND: f32 = 34.0;
const FRAME_INSET: f32 = 6.0;
const BADGE_GAP: f32 = 14.0;
const BADGE_SIZE: f32 = 20.0;
const NAME_BAND: f32 = 18.0;
const VERTICAL_MARGIN: f32 = 60.0;
const LEGEND_OFFSET: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PxRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn inflate(self, by: f32) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2.0 * by, self.h + 2.0 * by)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb,
    pub weight: u8,
}

impl Stroke {
    pub const NEUTRAL: Stroke = Stroke {
        color: Rgb::BLACK,
        weight: 1,
    };
    pub const SWATCH: Stroke = Stroke {
        color: Rgb::gray(40),
        weight: 1,
    };
    /// The last-moved selector while the round is open.
    pub const HIGHLIGHT: Stroke = Stroke {
        color: Rgb::CYAN,
        weight: 5,
    };

    pub fn is_heavy(&self) -> bool {
        self.weight > 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: PxRect,
        color: Rgb,
        outline: Option<Stroke>,
    },
    Outline {
        rect: PxRect,
        stroke: Stroke,
    },
    /// Text centered on `(x, y)`.
    Text {
        x: f32,
        y: f32,
        size: u16,
        color: Rgb,
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

/// Lookups over the command list, for inspecting a frame without a terminal.
impl Scene {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Fill color of the command drawn exactly at `rect`, if any.
    pub fn fill_at(&self, rect: PxRect) -> Option<Rgb> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Fill { rect: r, color, .. } if *r == rect => Some(*color),
            _ => None,
        })
    }

    pub fn outline_at(&self, rect: PxRect) -> Option<Stroke> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Outline { rect: r, stroke } if *r == rect => Some(*stroke),
            _ => None,
        })
    }
}

/// Canvas geometry, computed once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub width: f32,
    pub height: f32,
    tile: f32,
    total_tiles: usize,
    row_start_x: f32,
    top: f32,
}

impl SceneLayout {
    pub fn new(board: &BoardConfig, tile_px: u32) -> Self {
        let tile = tile_px as f32;
        let total_tiles = board.total_tiles();
        let row_width = total_tiles as f32 * (tile + TILE_GAP);
        let width = (row_width + SIDE_MARGIN).max(MIN_CANVAS_WIDTH);

        let content = Self::content_height(tile);
        let height = (content + 2.0 * VERTICAL_MARGIN).max(MIN_CANVAS_HEIGHT);

        Self {
            width,
            height,
            tile,
            total_tiles,
            row_start_x: (width - row_width) / 2.0,
            top: ((height - content) / 2.0).floor(),
        }
    }

    /// Label, swatch, status, tile row, badge and name, stacked.
    fn content_height(tile: f32) -> f32 {
        LABEL_BAND + tile + STATUS_BAND + tile + BADGE_GAP + BADGE_SIZE + NAME_BAND
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    #[cfg(test)]
    fn top(&self) -> f32 {
        self.top
    }

    #[cfg(test)]
    fn bottom(&self) -> f32 {
        self.top + Self::content_height(self.tile)
    }

    pub fn reference_rect(&self) -> PxRect {
        PxRect::new(
            self.center_x() - self.tile / 2.0,
            self.top + LABEL_BAND,
            self.tile,
            self.tile,
        )
    }

    fn row_y(&self) -> f32 {
        self.reference_rect().bottom() + STATUS_BAND
    }

    pub fn tile_rect(&self, index: usize) -> PxRect {
        PxRect::new(
            self.row_start_x + index as f32 * (self.tile + TILE_GAP),
            self.row_y(),
            self.tile,
            self.tile,
        )
    }

    pub fn selector_rect(&self, index: usize) -> PxRect {
        self.tile_rect(index).inflate(FRAME_INSET)
    }

    pub fn badge_rect(&self, index: usize) -> PxRect {
        let tile = self.tile_rect(index);
        PxRect::new(
            tile.center_x() - BADGE_SIZE / 2.0,
            tile.bottom() + BADGE_GAP,
            BADGE_SIZE,
            BADGE_SIZE,
        )
    }
}

/// Builds this frame's draw commands.
pub fn on_tick(game: &Game, layout: &SceneLayout) -> Scene {
    let round = &game.round;
    let cx = layout.center_x();
    let mut commands = Vec::with_capacity(layout.total_tiles + 12);

    commands.push(DrawCommand::Fill {
        rect: PxRect::new(0.0, 0.0, layout.width, layout.height),
        color: Rgb::WHITE,
        outline: None,
    });

    let swatch = layout.reference_rect();
    commands.push(text(cx, swatch.y - LABEL_BAND / 2.0, 14, Rgb::BLACK, "REFERENCE COLOR"));
    commands.push(DrawCommand::Fill {
        rect: swatch,
        color: round.reference_color,
        outline: Some(Stroke::SWATCH),
    });

    let mix = round.displayed_mix(&game.board);
    for i in 0..layout.total_tiles {
        let color = if i == game.board.mix_index() {
            mix
        } else {
            game.board.color_for_index(i)
        };
        commands.push(DrawCommand::Fill {
            rect: layout.tile_rect(i),
            color,
            outline: Some(Stroke::NEUTRAL),
        });
    }

    for (side, index, badge) in [
        (Side::Red, round.red_index, Rgb::RED),
        (Side::Blue, round.blue_index, Rgb::BLUE),
    ] {
        let highlighted = !round.locked && round.last_active == LastActive::from(side);
        commands.push(DrawCommand::Outline {
            rect: layout.selector_rect(index),
            stroke: if highlighted {
                Stroke::HIGHLIGHT
            } else {
                Stroke::NEUTRAL
            },
        });
        let badge_rect = layout.badge_rect(index);
        commands.push(DrawCommand::Fill {
            rect: badge_rect,
            color: badge,
            outline: None,
        });
        commands.push(text(
            badge_rect.center_x(),
            badge_rect.bottom() + NAME_BAND / 2.0,
            12,
            Rgb::BLACK,
            side.label(),
        ));
    }

    let status = round.status.text();
    if !status.is_empty() {
        commands.push(text(cx, swatch.bottom() + STATUS_BAND / 2.0 - 4.0, 20, Rgb::BLACK, status));
    }

    commands.push(text(cx, layout.height - LEGEND_OFFSET, 12, Rgb::gray(50), LEGEND));

    Scene {
        width: layout.width,
        height: layout.height,
        commands,
    }
}

fn text(x: f32, y: f32, size: u16, color: Rgb, content: &str) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        size,
        color,
        content: content.to_string(),
    }
}
