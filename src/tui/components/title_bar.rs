//! # TitleBar Component
//!
//! Top status line above the canvas.
//!
//! ## Responsibilities
//!
//! - Name the game and the board in play (`7 red / 7 blue`)
//! - Show the session tally (`wins 2 of 5`)
//! - Flag a locked round while it waits for its reset
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(game.board, game.tally, game.round.locked);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **No locks yet**: `"Huemix (7 red / 7 blue)"`
//! 2. **Some rounds played**: `"Huemix (7 red / 7 blue) | wins 2 of 5"`
//! 3. **Locked**: either of the above followed by `" | locked"`

use crate::core::board::BoardConfig;
use crate::core::state::Tally;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub board: BoardConfig,
    pub tally: Tally,
    pub locked: bool,
}

impl TitleBar {
    pub fn new(board: BoardConfig, tally: Tally, locked: bool) -> Self {
        Self {
            board,
            tally,
            locked,
        }
    }

    pub fn text(&self) -> String {
        let mut title = format!(
            "Huemix ({} red / {} blue)",
            self.board.left_count(),
            self.board.right_count()
        );
        if self.tally.locks > 0 {
            title.push_str(&format!(
                " | wins {} of {}",
                self.tally.wins, self.tally.locks
            ));
        }
        if self.locked {
            title.push_str(" | locked");
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
