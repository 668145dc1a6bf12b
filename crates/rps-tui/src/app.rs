//! Application state and main UI controller

use std::time::{Duration, Instant};

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use rps_core::{LedgerStore, Move, Outcome, Round, Session};

use crate::input::{Command, key_to_command};
use crate::sound::Chime;
use crate::theme::Theme;
use crate::widgets::{ControlsWidget, IconCache, MoveIconWidget, ScoreWidget};

const WELCOME: &str = "Choose rock, paper or scissors";

/// Number of highlight on/off cycles after a round
const FLASHES: u32 = 3;
/// Length of each highlight on or off phase
const FLASH_STEP: Duration = Duration::from_millis(150);

/// Event poll interval while the status line is animating
const FRAME: Duration = Duration::from_millis(50);
/// Event poll interval while nothing on screen changes by itself
const IDLE: Duration = Duration::from_millis(500);

/// Status line highlight that blinks a few times after each round
#[derive(Debug, Clone, Copy, Default)]
pub struct Flash {
    started: Option<Instant>,
}

impl Flash {
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// True while the status line should be drawn highlighted
    pub fn is_lit(&self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        let step = now.saturating_duration_since(started).as_millis() / FLASH_STEP.as_millis();
        step < u128::from(FLASHES * 2) && step % 2 == 0
    }

    /// True while the flash animation still needs redraws
    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|s| now.saturating_duration_since(s) < FLASH_STEP * FLASHES * 2)
    }
}

/// Application state
pub struct App {
    /// Score, high scores and opponent
    session: Session<Box<dyn LedgerStore>>,

    /// Should quit
    should_quit: bool,

    /// Result of the last round, or the welcome prompt
    status: String,

    /// Outcome of the last round, for coloring the status line
    last_outcome: Option<Outcome>,

    flash: Flash,

    player_icon: IconCache,
    computer_icon: IconCache,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    chime: Box<dyn Chime>,
}

impl App {
    pub fn new(session: Session<Box<dyn LedgerStore>>, theme: Theme, chime: Box<dyn Chime>) -> Self {
        Self {
            session,
            should_quit: false,
            status: WELCOME.to_string(),
            last_outcome: None,
            flash: Flash::default(),
            player_icon: IconCache::new(Move::Rock, &theme),
            computer_icon: IconCache::new(Move::Rock, &theme),
            theme,
            chime,
        }
    }

    pub fn session(&self) -> &Session<Box<dyn LedgerStore>> {
        &self.session
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// How long the main loop may wait for input before redrawing
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.flash.is_running(now) {
            FRAME
        } else {
            IDLE
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => key_to_command(key),
            _ => None,
        }
    }

    /// Execute a command
    pub fn execute(&mut self, command: Command) {
        self.execute_at(command, Instant::now());
    }

    /// Execute a command with an explicit clock, for the flash timer
    pub fn execute_at(&mut self, command: Command, now: Instant) {
        match command {
            Command::Play(m) => {
                let round = self.session.play(m);
                self.show_round(&round, now);
            }
            Command::Reset => {
                self.session.reset();
            }
            Command::ClearHighScores => self.session.clear_high_scores(),
            Command::Quit => {
                self.session.quit();
                self.should_quit = true;
            }
        }
    }

    fn show_round(&mut self, round: &Round, now: Instant) {
        self.player_icon.show(round.player, &self.theme);
        self.computer_icon.show(round.computer, &self.theme);

        self.status = match round.outcome {
            Outcome::Tie => format!("Tie — both chose {}", round.player),
            Outcome::Player => format!("You win — {} beats {}", round.player, round.computer),
            Outcome::Computer => {
                format!("Computer wins — {} beats {}", round.computer, round.player)
            }
        };
        self.last_outcome = Some(round.outcome);
        self.chime.play(round.outcome);
        self.flash.start(now);
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    pub fn render_at(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        let outer = Block::default()
            .title(" Rock · Paper · Scissors ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // spacer
                Constraint::Length(6), // icons
                Constraint::Length(1), // spacer
                Constraint::Length(1), // status
                Constraint::Length(1), // spacer
                Constraint::Length(2), // score + high scores
                Constraint::Min(0),
                Constraint::Length(2), // controls
            ])
            .split(inner);

        self.render_icons(frame, chunks[1]);
        self.render_status(frame, chunks[3], now);

        let score = self.session.score();
        let high_scores = self.session.high_scores();
        frame.render_widget(ScoreWidget::new(score, high_scores, &self.theme), chunks[5]);
        frame.render_widget(ControlsWidget::new(&self.theme), chunks[7]);
    }

    fn render_icons(&self, frame: &mut Frame, area: Rect) {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(13),
                Constraint::Length(6),
                Constraint::Length(13),
                Constraint::Fill(1),
            ])
            .split(area);

        frame.render_widget(MoveIconWidget::new(&self.player_icon, "You", &self.theme), row[1]);
        frame.render_widget(
            Paragraph::new("\n\nvs")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.text)),
            row[2],
        );
        frame.render_widget(
            MoveIconWidget::new(&self.computer_icon, "Computer", &self.theme),
            row[3],
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let fg = match self.last_outcome {
            Some(Outcome::Player) => self.theme.good,
            Some(Outcome::Computer) => self.theme.bad,
            _ => self.theme.text,
        };
        let style = if self.flash.is_lit(now) {
            Style::default()
                .fg(self.theme.flash_fg)
                .bg(self.theme.flash_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg)
        };

        let status = Paragraph::new(self.status.as_str())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(status, area);
    }
}
