//! Guess sources
//!
//! A guess source is asked for the guess of a round and may be asked again for the
//! same round when the engine refuses what it returned.

use super::config::ConfigError;
use crate::core::{Alphabet, Code};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Why a source could not produce a guess
#[derive(Debug)]
pub enum SourceError {
    /// The player asked to stop
    Quit,
    /// No more input
    Closed,
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "Player quit"),
            Self::Closed => write!(f, "Input closed before the game ended"),
            Self::Io(e) => write!(f, "I/O error reading guess: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Produces guesses for the engine
pub trait GuessSource {
    /// Return a guess for `round`
    ///
    /// # Errors
    /// Returns `SourceError` when no guess can be produced.
    fn next_guess(
        &mut self,
        round: usize,
        alphabet: &Alphabet,
        positions: usize,
    ) -> Result<Code, SourceError>;
}

/// Which guess source a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// A person typing at the terminal
    Human,
    /// Uniform random guesses
    Random,
}

impl SourceType {
    /// Look up a source by name: "human" or "random"
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownAlgorithm` for any other name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "random" => Ok(Self::Random),
            _ => Err(ConfigError::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// Reads guesses line by line
///
/// Typing `quit`, `q` or `exit` ends the game with `SourceError::Quit`.
pub struct TerminalGuessSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalGuessSource<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalGuessSource<io::StdinLock<'static>, io::Stdout> {
    /// Read from stdin, prompt on stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GuessSource for TerminalGuessSource<R, W> {
    fn next_guess(
        &mut self,
        round: usize,
        _alphabet: &Alphabet,
        positions: usize,
    ) -> Result<Code, SourceError> {
        write!(self.output, "input ({round}, {positions} symbols):\t")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SourceError::Closed);
        }

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Err(SourceError::Quit),
            text => Ok(Code::parse(text)),
        }
    }
}

/// Guesses `positions` distinct symbols uniformly at random
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    /// Seeded for reproducible games, or from the OS otherwise
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
        }
    }

    /// Draw one guess; never fails for `positions <= alphabet.len()`
    pub fn pick(&mut self, alphabet: &Alphabet, positions: usize) -> Code {
        let mut symbols: Vec<_> = alphabet
            .symbols()
            .choose_multiple(&mut self.rng, positions)
            .copied()
            .collect();
        symbols.shuffle(&mut self.rng);
        Code::new(symbols)
    }
}

impl GuessSource for RandomGuesser {
    fn next_guess(
        &mut self,
        _round: usize,
        alphabet: &Alphabet,
        positions: usize,
    ) -> Result<Code, SourceError> {
        Ok(self.pick(alphabet, positions))
    }
}

/// Replays a fixed list of guesses, then reports `SourceError::Closed`
pub struct ScriptedGuesser {
    guesses: VecDeque<Code>,
}

impl ScriptedGuesser {
    pub fn new<'a>(guesses: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            guesses: guesses.into_iter().map(Code::parse).collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessSource for ScriptedGuesser {
    fn next_guess(
        &mut self,
        _round: usize,
        _alphabet: &Alphabet,
        _positions: usize,
    ) -> Result<Code, SourceError> {
        self.guesses.pop_front().ok_or(SourceError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use std::io::Cursor;

    fn alphabet() -> Alphabet {
        Alphabet::new("ABCDEF".chars().map(Symbol::new))
    }

    #[test]
    fn source_type_from_name() {
        assert_eq!(SourceType::from_name("human"), Ok(SourceType::Human));
        assert_eq!(SourceType::from_name("Random"), Ok(SourceType::Random));
        assert_eq!(
            SourceType::from_name("minimax"),
            Err(ConfigError::UnknownAlgorithm("minimax".to_string()))
        );
    }

    #[test]
    fn terminal_source_reads_and_uppercases() {
        let mut output = Vec::new();
        let mut source = TerminalGuessSource::new(Cursor::new("abcd\n"), &mut output);

        let guess = source.next_guess(3, &alphabet(), 4).unwrap();
        assert_eq!(guess, Code::parse("ABCD"));

        drop(source);
        let prompt = String::from_utf8(output).unwrap();
        assert!(prompt.contains("input (3, 4 symbols)"));
    }

    #[test]
    fn terminal_source_quit_and_eof() {
        let mut source = TerminalGuessSource::new(Cursor::new("  QUIT \n"), io::sink());
        assert!(matches!(
            source.next_guess(1, &alphabet(), 4),
            Err(SourceError::Quit)
        ));
        assert!(matches!(
            source.next_guess(1, &alphabet(), 4),
            Err(SourceError::Closed)
        ));
    }

    #[test]
    fn terminal_source_passes_invalid_text_through() {
        let mut source = TerminalGuessSource::new(Cursor::new("ab?\n"), io::sink());
        let guess = source.next_guess(1, &alphabet(), 4).unwrap();
        assert_eq!(guess.len(), 3);
    }

    #[test]
    fn random_guesser_draws_distinct_symbols_from_alphabet() {
        let alphabet = alphabet();
        let mut guesser = RandomGuesser::new(Some(11));
        for _ in 0..100 {
            let guess = guesser.pick(&alphabet, 4);
            assert_eq!(guess.len(), 4);
            assert_eq!(guess.first_duplicate(), None);
            assert!(guess.symbols().iter().all(|&s| alphabet.contains(s)));
        }
    }

    #[test]
    fn random_guesser_seed_reproducible() {
        let alphabet = alphabet();
        let mut a = RandomGuesser::new(Some(5));
        let mut b = RandomGuesser::new(Some(5));
        for round in 1..=10 {
            assert_eq!(
                a.next_guess(round, &alphabet, 4).unwrap(),
                b.next_guess(round, &alphabet, 4).unwrap()
            );
        }
    }

    #[test]
    fn scripted_guesser_runs_out() {
        let mut source = ScriptedGuesser::new(["ab", "cd"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(
            source.next_guess(1, &alphabet(), 2).unwrap(),
            Code::parse("AB")
        );
        assert_eq!(
            source.next_guess(2, &alphabet(), 2).unwrap(),
            Code::parse("CD")
        );
        assert!(matches!(
            source.next_guess(3, &alphabet(), 2),
            Err(SourceError::Closed)
        ));
    }
}
