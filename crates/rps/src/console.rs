//! Line-oriented game loop

use std::io::{self, BufRead, Write};

use rps_core::{LedgerStore, Outcome, Session, SessionResult, normalize_move};

pub const BANNER: &str =
    "Rock Paper Scissors - type 'rock', 'paper', or 'scissors' (or r/p/s). Type 'quit' to exit.";
pub const PROMPT: &str = "Your move: ";
pub const INVALID: &str = "Invalid input. Please type rock/paper/scissors or quit.";
pub const GOODBYE: &str = "Goodbye!";

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// The player typed a quit token or an empty line
    Quit,
    /// Input ran out (or could not be read)
    EndOfInput,
}

/// Play rounds read from `input` until the player quits or input ends.
///
/// Only write errors are returned; a failed read counts as end of input.
pub fn run<S, R, W>(session: &mut Session<S>, mut input: R, out: &mut W) -> io::Result<ConsoleExit>
where
    S: LedgerStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", BANNER)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                farewell(out)?;
                return Ok(ConsoleExit::EndOfInput);
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("stopped reading input: {}", e);
                farewell(out)?;
                return Ok(ConsoleExit::EndOfInput);
            }
        }

        let text = line.trim_end_matches(['\n', '\r']);
        match session.handle(normalize_move(text)) {
            SessionResult::Quit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(ConsoleExit::Quit);
            }
            SessionResult::Invalid => {
                log::debug!("rejected input {:?}", text);
                writeln!(out, "{}", INVALID)?;
            }
            SessionResult::Played(round) => {
                writeln!(out, "You: {}  -  Computer: {}", round.player, round.computer)?;
                let verdict = match round.outcome {
                    Outcome::Tie => "It's a tie!",
                    Outcome::Player => "You win this round!",
                    Outcome::Computer => "Computer wins this round!",
                };
                writeln!(out, "{}", verdict)?;

                let score = session.score();
                writeln!(
                    out,
                    "Score -> You: {}  Computer: {}  (Rounds: {})",
                    score.player, score.computer, score.rounds
                )?;
                writeln!(out, "---")?;
            }
        }
    }
}

/// Say goodbye when input stops mid-prompt (end of input or Ctrl-C).
///
/// The cursor is still on the prompt line, so a newline goes first.
pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", GOODBYE)?;
    out.flush()
}
