//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or RPS_LIGHT_BG=1 environment variable.

use ratatui::style::Color;
use rps_core::Move;

/// Color theme for terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (control help)
    pub text_dim: Color,
    /// Window border
    pub border: Color,
    /// Header and icon frame accents
    pub accent: Color,
    /// Player won the round
    pub good: Color,
    /// Computer won the round
    pub bad: Color,
    /// Status line highlight while flashing
    pub flash_fg: Color,
    pub flash_bg: Color,

    pub icon_rock: Color,
    pub icon_paper: Color,
    pub icon_scissors: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            accent: Color::Cyan,
            good: Color::Green,
            bad: Color::Red,
            flash_fg: Color::Black,
            flash_bg: Color::Yellow,
            icon_rock: Color::Gray,
            icon_paper: Color::White,
            icon_scissors: Color::Yellow,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Blue,
            good: Color::Green,
            bad: Color::Red,
            flash_fg: Color::Black,
            flash_bg: Color::Yellow,
            icon_rock: Color::DarkGray,
            icon_paper: Color::Blue,
            icon_scissors: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and RPS_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Color used to draw a move's icon
    pub fn icon_color(&self, m: Move) -> Color {
        match m {
            Move::Rock => self.icon_rock,
            Move::Paper => self.icon_paper,
            Move::Scissors => self.icon_scissors,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("RPS_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
