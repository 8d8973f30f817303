use crate::core::scene::on_tick;
use crate::core::state::Game;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CanvasView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, game: &Game, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, canvas_area] = layout.areas(frame.area());

    TitleBar::new(game.board, game.tally, game.round.locked).render(frame, title_area);

    let scene = on_tick(game, &tui.layout);
    CanvasView::new(&scene).render(frame, canvas_area);
}
