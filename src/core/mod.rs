//! # Core Game Logic
//!
//! This module contains Huemix's game rules.
//! It knows nothing about terminals, speakers or clocks.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Game (all state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • on_tick() (scene)    │
//!                    │                         │
//!                    │  No UI. No audio.       │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Session   │      │   Audio    │
//!     │  Adapter   │      │ (effects)  │      │  (rodio)   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: tile counts and the index → color mapping
//! - [`round`]: one round's state, reference generation, lock evaluation
//! - [`state`]: the `Game` struct, everything in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`scene`]: draw commands for the current frame
//! - [`timer`]: pending automatic resets
//! - [`config`]: file, env and CLI settings

pub mod action;
pub mod board;
pub mod config;
pub mod round;
pub mod scene;
pub mod state;
pub mod timer;
