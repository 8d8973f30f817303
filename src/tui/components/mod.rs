//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! Both components are stateless: they receive everything as props and
//! render into the area they are given.
//!
//! - `TitleBar`: top line with the board and the session tally
//! - `CanvasView`: rasterizes the core `Scene` onto terminal cells
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into the game. This makes dependencies explicit and
//! components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(game.board, game.tally, game.round.locked).render(frame, area);
//!
//! // Bad: Hidden dependency on the game
//! title_bar.render(frame, area); // reads from a global Game
//! ```

pub mod canvas_view;
mod title_bar;

pub use canvas_view::CanvasView;
pub use title_bar::TitleBar;
