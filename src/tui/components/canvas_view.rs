//! # CanvasView Component
//!
//! Rasterizes a [`Scene`] onto terminal cells. The scene lives on a
//! fixed pixel canvas; this component scales it to whatever area it is
//! given, one axis at a time, so the picture stretches with the terminal.
//!
//! ## Mapping
//!
//! - **Fill**: background color on every covered cell. Edges snap to the
//!   nearest cell boundary. A thin outline is only drawn when the fill spans
//!   at least 3×3 cells; smaller fills would be all border.
//! - **Outline**: box-drawing border on the enclosing cells. Heavy strokes
//!   use the thick border set. Existing backgrounds are kept, so a frame
//!   drawn over tiles still shows the tile colors underneath.
//! - **Text**: centered on its anchor, foreground only. Large text is bold.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use unicode_width::UnicodeWidthStr;

use crate::core::board::Rgb;
use crate::core::scene::{DrawCommand, PxRect, Scene, Stroke};
use crate::tui::component::Component;

const MIN_OUTLINED_CELLS: u16 = 3;
const BOLD_TEXT_SIZE: u16 = 20;

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

pub struct CanvasView<'a> {
    pub scene: &'a Scene,
}

impl<'a> CanvasView<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl Component for CanvasView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        paint(self.scene, frame.buffer_mut(), area);
    }
}

#[derive(Clone, Copy)]
enum Snap {
    Nearest,
    Enclose,
}

/// Pixel → cell scaling for one area.
struct Projection {
    area: Rect,
    sx: f32,
    sy: f32,
}

impl Projection {
    fn new(scene: &Scene, area: Rect) -> Self {
        Self {
            area,
            sx: area.width as f32 / scene.width,
            sy: area.height as f32 / scene.height,
        }
    }

    fn span(start: f32, len: f32, scale: f32, snap: Snap) -> (i32, i32) {
        let (a, b) = match snap {
            Snap::Nearest => ((start * scale).round(), ((start + len) * scale).round()),
            Snap::Enclose => ((start * scale).floor(), ((start + len) * scale).ceil()),
        };
        let (a, b) = (a as i32, b as i32);
        (a, b.max(a + 1))
    }

    /// The cells covered by `rect`, clipped to the area.
    fn cells(&self, rect: PxRect, snap: Snap) -> Option<Rect> {
        let (x0, x1) = Self::span(rect.x, rect.w, self.sx, snap);
        let (y0, y1) = Self::span(rect.y, rect.h, self.sy, snap);
        let left = self.area.x as i32;
        let top = self.area.y as i32;
        let x0 = (left + x0).max(left);
        let x1 = (left + x1).min(self.area.right() as i32);
        let y0 = (top + y0).max(top);
        let y1 = (top + y1).min(self.area.bottom() as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect::new(
            x0 as u16,
            y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }

    fn point(&self, x: f32, y: f32) -> (i32, i32) {
        (
            self.area.x as i32 + (x * self.sx).round() as i32,
            self.area.y as i32 + (y * self.sy).floor() as i32,
        )
    }
}

pub fn paint(scene: &Scene, buf: &mut Buffer, area: Rect) {
    if area.is_empty() || scene.width <= 0.0 || scene.height <= 0.0 {
        return;
    }
    let projection = Projection::new(scene, area);

    for command in &scene.commands {
        match command {
            DrawCommand::Fill {
                rect,
                color,
                outline,
            } => {
                let Some(cells) = projection.cells(*rect, Snap::Nearest) else {
                    continue;
                };
                fill(buf, cells, *color);
                if let Some(stroke) = outline
                    && cells.width >= MIN_OUTLINED_CELLS
                    && cells.height >= MIN_OUTLINED_CELLS
                {
                    outline_cells(buf, cells, *stroke);
                }
            }
            DrawCommand::Outline { rect, stroke } => {
                if let Some(cells) = projection.cells(*rect, Snap::Enclose) {
                    outline_cells(buf, cells, *stroke);
                }
            }
            DrawCommand::Text {
                x,
                y,
                size,
                color,
                content,
            } => {
                let (cx, row) = projection.point(*x, *y);
                draw_text(buf, area, cx, row, content, text_style(*size, *color));
            }
        }
    }
}

fn fill(buf: &mut Buffer, cells: Rect, color: Rgb) {
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(color.into());
            }
        }
    }
}

fn outline_cells(buf: &mut Buffer, cells: Rect, stroke: Stroke) {
    if cells.width < 2 || cells.height < 2 {
        return;
    }
    let set = if stroke.is_heavy() {
        border::THICK
    } else {
        border::PLAIN
    };
    let fg: Color = stroke.color.into();
    let (left, right) = (cells.left(), cells.right() - 1);
    let (top, bottom) = (cells.top(), cells.bottom() - 1);

    let mut put = |x: u16, y: u16, symbol: &str| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_fg(fg);
        }
    };
    for x in left + 1..right {
        put(x, top, set.horizontal_top);
        put(x, bottom, set.horizontal_bottom);
    }
    for y in top + 1..bottom {
        put(left, y, set.vertical_left);
        put(right, y, set.vertical_right);
    }
    put(left, top, set.top_left);
    put(right, top, set.top_right);
    put(left, bottom, set.bottom_left);
    put(right, bottom, set.bottom_right);
}

fn text_style(size: u16, color: Rgb) -> Style {
    let style = Style::default().fg(color.into());
    if size >= BOLD_TEXT_SIZE {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn draw_text(buf: &mut Buffer, area: Rect, center_x: i32, row: i32, content: &str, style: Style) {
    if row < area.top() as i32 || row >= area.bottom() as i32 {
        return;
    }
    let width = content.width() as i32;
    let col = (center_x - width / 2).max(area.left() as i32);
    if col >= area.right() as i32 {
        return;
    }
    let max_width = (area.right() as i32 - col) as usize;
    buf.set_stringn(col as u16, row as u16, content, max_width, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::board::Side;
    use crate::core::round::{RoundState, Step};
    use crate::core::scene::{SceneLayout, on_tick};
    use crate::test_support::test_game;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// 180×84 cells = exactly 5 canvas pixels per cell for the default board.
    fn render(scene: &Scene) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(180, 84)).unwrap();
        terminal
            .draw(|f| CanvasView::new(scene).render(f, f.area()))
            .unwrap();
        terminal
    }

    fn text_of(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_reference_swatch_is_filled() {
        let game = test_game();
        let scene = on_tick(&game, &SceneLayout::new(&game.board, 48));
        let terminal = render(&scene);
        let cell = terminal.backend().buffer().cell((90, 30)).unwrap();
        assert_eq!(cell.bg, Color::from(game.round.reference_color));
        assert!(text_of(&terminal).contains("REFERENCE COLOR"));
    }

    #[test]
    fn test_mix_tile_shows_frozen_mix() {
        let mut game = test_game();
        game.round = RoundState::from_reference(&game.board, 0, 14);
        update(&mut game, Action::Lock);
        let scene = on_tick(&game, &SceneLayout::new(&game.board, 48));
        let terminal = render(&scene);

        let cell = terminal.backend().buffer().cell((90, 47)).unwrap();
        assert_eq!(cell.bg, Color::Rgb(128, 0, 128));
        assert!(text_of(&terminal).contains("YOU WIN!"));
    }

    #[test]
    fn test_highlight_uses_thick_border() {
        let mut game = test_game();
        let layout = SceneLayout::new(&game.board, 48);
        let before = text_of(&render(&on_tick(&game, &layout)));
        assert!(!before.contains('┏'));

        update(&mut game, Action::Move(Side::Blue, Step::Left));
        let terminal = render(&on_tick(&game, &layout));
        let text = text_of(&terminal);
        assert!(text.contains('┏'));
        assert!(text.contains('┛'));
    }

    #[test]
    fn test_legend_and_names_are_drawn() {
        let game = test_game();
        let text = text_of(&render(&on_tick(&game, &SceneLayout::new(&game.board, 48))));
        assert!(text.contains("R = lock"));
        assert!(text.contains("Red"));
        assert!(text.contains("Blue"));
    }

    #[test]
    fn test_paint_stays_inside_area() {
        let game = test_game();
        let scene = on_tick(&game, &SceneLayout::new(&game.board, 48));
        let mut buf = Buffer::empty(Rect::new(0, 0, 200, 100));
        let area = Rect::new(10, 5, 180, 84);
        paint(&scene, &mut buf, area);

        for (x, y) in [(0, 0), (9, 50), (190, 50), (100, 4), (100, 89)] {
            let cell = buf.cell((x, y)).unwrap();
            assert_eq!(cell.bg, Color::Reset, "cell ({x}, {y}) was painted");
        }
        assert_eq!(buf.cell((100, 50)).unwrap().bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let game = test_game();
        let scene = on_tick(&game, &SceneLayout::new(&game.board, 48));
        for (w, h) in [(1, 1), (10, 3), (3, 40)] {
            let mut buf = Buffer::empty(Rect::new(0, 0, w, h));
            paint(&scene, &mut buf, Rect::new(0, 0, w, h));
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        paint(&scene, &mut buf, Rect::new(0, 0, 0, 0));
    }
}
