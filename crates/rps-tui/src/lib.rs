//! rps-tui: Terminal UI layer using ratatui
//!
//! Provides the full-screen window for the game.

pub mod app;
pub mod input;
pub mod sound;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::Command;
pub use sound::{Chime, Silent, TerminalBell};
pub use theme::Theme;
