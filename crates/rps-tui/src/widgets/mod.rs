//! Custom widgets

mod controls;
mod icon;
mod score;

pub use controls::ControlsWidget;
pub use icon::{ICON_HEIGHT, ICON_WIDTH, IconCache, MoveIconWidget, icon_art};
pub use score::{ScoreWidget, high_scores_text, score_text};
