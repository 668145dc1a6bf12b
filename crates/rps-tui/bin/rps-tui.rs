//! Rock-Paper-Scissors in a terminal window
//!
//! Main entry point for the graphical front end.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use rps_core::{GameRng, HighScores, LedgerStore, Session};
use rps_save::JsonFileStore;
use rps_tui::{App, Chime, Silent, TerminalBell, Theme};

/// Rock-Paper-Scissors with persisted high scores
#[derive(Parser, Debug)]
#[command(name = "rps-tui")]
#[command(author, version, about = "Rock Paper Scissors - beat the computer!", long_about = None)]
struct Args {
    /// Use the light background theme
    #[arg(long = "light")]
    light: bool,

    /// Do not ring the terminal bell after each round
    #[arg(short = 'm', long = "mute")]
    mute: bool,

    /// Seed for the computer's moves (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// High score file (defaults to ~/.rps_high_scores.json)
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Print the high scores and exit
    #[arg(short = 's', long = "scores")]
    scores: bool,

    /// Verbose logging to the log file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();
    init_logging(args.verbose);

    let mut store = match &args.scores_file {
        Some(path) => JsonFileStore::at(path),
        None => JsonFileStore::default_location(),
    };

    if args.scores {
        display_high_scores(&mut store);
        return Ok(());
    }

    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    let store: Box<dyn LedgerStore> = Box::new(store);
    let session = Session::new(store, rng);

    let theme = if args.light { Theme::light() } else { Theme::detect() };
    let chime: Box<dyn Chime> = if args.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::stdout())
    };
    let mut app = App::new(session, theme, chime);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}

/// Main loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input, waking up often enough to animate the status flash
        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

/// Log to a file so log lines never land on the alternate screen
fn init_logging(verbose: bool) {
    let Some(mut path) = dirs::data_local_dir() else {
        return;
    };
    path.push("rps-rs");
    if std::fs::create_dir_all(&path).is_err() {
        return;
    }
    path.push("rps-tui.log");

    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::WriteLogger::init(level, config, file);
}

/// Print the high score ledger
fn display_high_scores(store: &mut JsonFileStore) {
    let ledger = HighScores::from_entries(store.load());

    println!("\n=== Rock Paper Scissors High Scores ===\n");
    if ledger.is_empty() {
        println!("No high scores yet.");
    } else {
        println!("{:<6} {:<8}", "Rank", "Score");
        println!("{:-<15}", "");
        for (rank, score) in ledger.entries().iter().enumerate() {
            println!("{:<6} {:<8}", rank + 1, score);
        }
    }

    if let Some(path) = store.path() {
        println!("\n(Score file: {})", path.display());
    }
}
