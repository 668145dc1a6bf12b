//! Score and high score lines

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use rps_core::{HighScores, Scoreboard};

use crate::theme::Theme;

pub fn score_text(score: &Scoreboard) -> String {
    format!("You: {}  Computer: {}", score.player, score.computer)
}

pub fn high_scores_text(high_scores: &HighScores) -> String {
    if high_scores.is_empty() {
        return "High Scores: —".to_string();
    }
    let list: Vec<String> = high_scores.entries().iter().map(u32::to_string).collect();
    format!("High Scores: {}", list.join(", "))
}

/// Widget for rendering the score line and the high score line, centered
pub struct ScoreWidget<'a> {
    score: &'a Scoreboard,
    high_scores: &'a HighScores,
    theme: &'a Theme,
}

impl<'a> ScoreWidget<'a> {
    pub fn new(score: &'a Scoreboard, high_scores: &'a HighScores, theme: &'a Theme) -> Self {
        Self {
            score,
            high_scores,
            theme,
        }
    }
}

impl Widget for ScoreWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = [
            (score_text(self.score), Style::default().fg(self.theme.text)),
            (
                high_scores_text(self.high_scores),
                Style::default().fg(self.theme.accent),
            ),
        ];

        for (row, (text, style)) in lines.iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let width = text.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_stringn(x, area.y + row as u16, text, area.width as usize, *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::Outcome;

    #[test]
    fn test_score_text() {
        let mut score = Scoreboard::new();
        assert_eq!(score_text(&score), "You: 0  Computer: 0");
        score.record(Outcome::Player);
        score.record(Outcome::Computer);
        score.record(Outcome::Player);
        assert_eq!(score_text(&score), "You: 2  Computer: 1");
    }

    #[test]
    fn test_high_scores_text() {
        assert_eq!(high_scores_text(&HighScores::new()), "High Scores: —");
        let ledger = HighScores::from_entries([3, 8, 5]);
        assert_eq!(high_scores_text(&ledger), "High Scores: 8, 5, 3");
    }
}
