//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop Timing
//!
//! Each pass of the event loop:
//!
//! 1. fires every reset whose deadline has passed,
//! 2. redraws if a frame is due or something changed,
//! 3. blocks on input until the next frame or the next reset, whichever
//!    comes first, then drains all pending events.
//!
//! The frame cadence comes from `frame_rate` in the config (30 by default).

mod component;
mod components;
mod event;
mod ui;

use std::time::Instant;

use log::{debug, info};

use crate::audio::build_player;
use crate::core::config::ResolvedConfig;
use crate::core::scene::SceneLayout;
use crate::core::state::Game;
use crate::session::Session;
use crate::tui::event::{action_for, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub layout: SceneLayout,
}

impl TuiState {
    pub fn new(game: &Game, tile_px: u32) -> Self {
        Self {
            layout: SceneLayout::new(&game.board, tile_px),
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let game = Game::from_config(&config);
    let tui = TuiState::new(&game, config.tile_px);
    let player = build_player(config.muted, &config.sounds);
    let mut session = Session::new(game, player);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut session, &tui, &config);
    ratatui::restore();

    info!(
        "Session over: {} of {} locks matched, {} reset(s) dropped",
        session.game.tally.wins,
        session.game.tally.locks,
        session.pending_resets()
    );
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    session: &mut Session,
    tui: &TuiState,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let frame_interval = config.frame_interval();
    let mut next_frame = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if session.fire_due_resets(now) {
            return Ok(());
        }
        if needs_redraw || now >= next_frame {
            terminal.draw(|f| ui::draw_ui(f, &session.game, tui))?;
            needs_redraw = false;
            next_frame = now + frame_interval;
        }

        // Wake up for the next frame or the next reset, whichever is sooner
        let mut timeout = next_frame.saturating_duration_since(Instant::now());
        if let Some(until_reset) = session.time_until_reset(Instant::now()) {
            timeout = timeout.min(until_reset);
        }

        let Some(first_event) = poll_event_timeout(timeout)? else {
            continue;
        };
        needs_redraw = true;

        let mut pending = Some(first_event);
        while let Some(event) = pending {
            // Resize maps to no action; it only needs the redraw flagged above
            if let Some(action) = action_for(&event) {
                debug!("{:?} -> {:?}", event, action);
                if session.dispatch(action, Instant::now()) {
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}
