//! Outcome chimes
//!
//! The terminal bell is the only audio backend. A terminal that ignores BEL
//! simply stays quiet, and write errors are dropped.

use std::io::Write;

use rps_core::Outcome;

/// Plays a short cue after each round
pub trait Chime {
    fn play(&mut self, outcome: Outcome);
}

/// No sound at all
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self, _outcome: Outcome) {}
}

/// Rings the terminal bell: twice for a win, once for a loss or a tie
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Chime for TerminalBell<W> {
    fn play(&mut self, outcome: Outcome) {
        let bells: &[u8] = match outcome {
            Outcome::Player => b"\x07\x07",
            Outcome::Computer | Outcome::Tie => b"\x07",
        };
        if let Err(e) = self.out.write_all(bells).and_then(|_| self.out.flush()) {
            log::debug!("bell failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_counts() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Outcome::Player);
        bell.play(Outcome::Computer);
        bell.play(Outcome::Tie);
        assert_eq!(bell.into_inner(), b"\x07\x07\x07\x07");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no audio"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_tolerated() {
        let mut bell = TerminalBell::new(Broken);
        bell.play(Outcome::Player);
    }
}
