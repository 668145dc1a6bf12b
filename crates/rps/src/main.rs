//! Rock-Paper-Scissors console game
//!
//! Main entry point for the text front end.

mod console;

use std::io;

use clap::Parser;

use rps_core::{GameRng, MemoryStore, Session};

/// Rock-Paper-Scissors against the computer
#[derive(Parser, Debug)]
#[command(name = "rps")]
#[command(author, version, about = "Rock Paper Scissors on the command line", long_about = None)]
struct Args {
    /// Seed for the computer's moves (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Verbose logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    // The console keeps no high scores on disk.
    let mut session = Session::new(MemoryStore::new(), rng);

    // Ctrl-C is a quit like any other. Stdout is not locked across the loop
    // so the handler can write.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = console::farewell(&mut io::stdout());
        std::process::exit(0);
    }) {
        log::warn!("could not install Ctrl-C handler: {}", e);
    }

    let stdin = io::stdin();
    let exit = console::run(&mut session, stdin.lock(), &mut io::stdout())?;
    log::debug!("console exit: {:?}", exit);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
