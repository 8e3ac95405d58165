//! Game configuration and setup
//!
//! `GameConfig` holds raw options as the user gave them. `GameConfig::build`
//! validates them once and produces an immutable `GameSetup`; nothing downstream
//! re-checks configuration.

use crate::core::{Alphabet, Code, Symbol};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fmt;

/// Longest code a game may use
pub const MAX_POSITIONS: usize = 12;
/// Code length when none is given
pub const DEFAULT_POSITIONS: usize = 4;
/// Rounds per game when none is given
pub const DEFAULT_ROUNDS: usize = 10;

/// Fatal configuration problems, reported before any game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    PositionsOutOfRange(usize),
    AlphabetSize { positions: usize, values: usize },
    NoRounds,
    DuplicateSymbol(Symbol),
    InvalidSymbol(char),
    SymbolNotInAlphabet(Symbol),
    UnknownAlgorithm(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionsOutOfRange(n) => {
                write!(f, "Code length must be between 1 and {MAX_POSITIONS}, got {n}")
            }
            Self::AlphabetSize { positions, values } => write!(
                f,
                "Alphabet size must be between {positions} and {}, got {values}",
                Alphabet::MAX_SIZE
            ),
            Self::NoRounds => write!(f, "A game needs at least one round"),
            Self::DuplicateSymbol(s) => {
                write!(f, "Solution must not contain double characters ('{s}')")
            }
            Self::InvalidSymbol(c) => write!(f, "Solution may only contain letters, got '{c}'"),
            Self::SymbolNotInAlphabet(s) => {
                write!(f, "Solution symbol '{s}' is not in the alphabet")
            }
            Self::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{name}' (expected 'human' or 'random')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raw game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Code length; ignored when `solution` is given
    pub positions: usize,
    /// Alphabet size, defaults to twice the code length
    pub value_count: Option<usize>,
    pub max_rounds: usize,
    /// Fixed solution instead of a random one
    pub solution: Option<String>,
    /// Seed for reproducible alphabets and solutions
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            positions: DEFAULT_POSITIONS,
            value_count: None,
            max_rounds: DEFAULT_ROUNDS,
            solution: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Random number generator for this configuration: seeded when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Validate the options and generate the alphabet and solution
    ///
    /// # Errors
    /// Returns `ConfigError` if the code length, alphabet size, round count or the
    /// supplied solution is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::GameConfig;
    ///
    /// let config = GameConfig { seed: Some(7), ..GameConfig::default() };
    /// let setup = config.build().unwrap();
    /// assert_eq!(setup.positions(), 4);
    /// assert_eq!(setup.alphabet().len(), 8);
    /// assert_eq!(setup.max_rounds(), 10);
    /// ```
    pub fn build(&self) -> Result<GameSetup, ConfigError> {
        self.build_with(&mut self.rng())
    }

    /// Like [`GameConfig::build`], drawing randomness from `rng`
    ///
    /// # Errors
    /// Same as [`GameConfig::build`].
    pub fn build_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameSetup, ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }

        let letters = Alphabet::letters();

        match &self.solution {
            Some(text) => {
                let solution = parse_solution(text)?;
                let positions = solution.len();
                check_positions(positions)?;
                let values = self.value_count.unwrap_or(positions * 2);
                check_alphabet_size(positions, values)?;

                let extras: Vec<Symbol> = letters
                    .symbols()
                    .iter()
                    .copied()
                    .filter(|&s| !solution.contains(s))
                    .collect();
                let alphabet = Alphabet::new(
                    solution
                        .symbols()
                        .iter()
                        .copied()
                        .chain(extras.choose_multiple(rng, values - positions).copied()),
                );

                GameSetup::new(alphabet, solution, self.max_rounds)
            }
            None => {
                check_positions(self.positions)?;
                let values = self.value_count.unwrap_or(self.positions * 2);
                check_alphabet_size(self.positions, values)?;

                let alphabet =
                    Alphabet::new(letters.symbols().choose_multiple(rng, values).copied());
                let mut symbols: Vec<Symbol> = alphabet
                    .symbols()
                    .choose_multiple(rng, self.positions)
                    .copied()
                    .collect();
                // choose_multiple does not randomize order
                symbols.shuffle(rng);

                GameSetup::new(alphabet, Code::new(symbols), self.max_rounds)
            }
        }
    }
}

fn parse_solution(text: &str) -> Result<Code, ConfigError> {
    if let Some(c) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidSymbol(c));
    }
    let solution = Code::parse(text);
    if let Some(duplicate) = solution.first_duplicate() {
        return Err(ConfigError::DuplicateSymbol(duplicate));
    }
    Ok(solution)
}

const fn check_positions(positions: usize) -> Result<(), ConfigError> {
    if positions == 0 || positions > MAX_POSITIONS {
        return Err(ConfigError::PositionsOutOfRange(positions));
    }
    Ok(())
}

const fn check_alphabet_size(positions: usize, values: usize) -> Result<(), ConfigError> {
    if values < positions || values > Alphabet::MAX_SIZE {
        return Err(ConfigError::AlphabetSize { positions, values });
    }
    Ok(())
}

/// A validated, immutable game setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    alphabet: Alphabet,
    solution: Code,
    max_rounds: usize,
}

impl GameSetup {
    /// Validate an explicit alphabet and solution
    ///
    /// # Errors
    /// Returns `ConfigError` if the solution length is out of range, the solution
    /// repeats a symbol or uses one outside the alphabet, or `max_rounds` is zero.
    pub fn new(alphabet: Alphabet, solution: Code, max_rounds: usize) -> Result<Self, ConfigError> {
        check_positions(solution.len())?;
        if max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if let Some(duplicate) = solution.first_duplicate() {
            return Err(ConfigError::DuplicateSymbol(duplicate));
        }
        if let Some(&missing) = solution.symbols().iter().find(|&&s| !alphabet.contains(s)) {
            return Err(ConfigError::SymbolNotInAlphabet(missing));
        }

        Ok(Self {
            alphabet,
            solution,
            max_rounds,
        })
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Code {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> usize {
        self.solution.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config_builds() {
        let setup = seeded(1).build().unwrap();
        assert_eq!(setup.positions(), DEFAULT_POSITIONS);
        assert_eq!(setup.alphabet().len(), DEFAULT_POSITIONS * 2);
        assert_eq!(setup.max_rounds(), DEFAULT_ROUNDS);
    }

    #[test]
    fn generated_solution_is_valid() {
        for seed in 0..50 {
            let setup = seeded(seed).build().unwrap();
            assert_eq!(setup.solution().first_duplicate(), None);
            assert!(
                setup
                    .solution()
                    .symbols()
                    .iter()
                    .all(|&s| setup.alphabet().contains(s) && s.is_letter())
            );
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        assert_eq!(seeded(42).build().unwrap(), seeded(42).build().unwrap());
    }

    #[test]
    fn supplied_solution_sets_positions() {
        let config = GameConfig {
            positions: 9,
            solution: Some("cab".to_string()),
            seed: Some(3),
            ..GameConfig::default()
        };
        let setup = config.build().unwrap();
        assert_eq!(setup.positions(), 3);
        assert_eq!(setup.solution().to_string(), "CAB");
        assert_eq!(setup.alphabet().len(), 6);
        assert!(setup.alphabet().contains(Symbol::new('C')));
    }

    #[test]
    fn supplied_solution_with_duplicates_rejected() {
        let config = GameConfig {
            solution: Some("ABCA".to_string()),
            ..GameConfig::default()
        };
        assert_eq!(
            config.build(),
            Err(ConfigError::DuplicateSymbol(Symbol::new('A')))
        );
    }

    #[test]
    fn supplied_solution_with_non_letters_rejected() {
        let config = GameConfig {
            solution: Some("AB3D".to_string()),
            ..GameConfig::default()
        };
        assert_eq!(config.build(), Err(ConfigError::InvalidSymbol('3')));
    }

    #[test]
    fn supplied_solution_too_long_rejected() {
        let config = GameConfig {
            solution: Some("ABCDEFGHIJKLM".to_string()),
            ..GameConfig::default()
        };
        assert_eq!(config.build(), Err(ConfigError::PositionsOutOfRange(13)));
    }

    #[test]
    fn positions_out_of_range() {
        for positions in [0, MAX_POSITIONS + 1] {
            let config = GameConfig {
                positions,
                ..GameConfig::default()
            };
            assert_eq!(
                config.build(),
                Err(ConfigError::PositionsOutOfRange(positions))
            );
        }
    }

    #[test]
    fn max_positions_fits_default_alphabet() {
        let config = GameConfig {
            positions: MAX_POSITIONS,
            seed: Some(9),
            ..GameConfig::default()
        };
        let setup = config.build().unwrap();
        assert_eq!(setup.alphabet().len(), MAX_POSITIONS * 2);
    }

    #[test]
    fn alphabet_size_bounds() {
        let too_small = GameConfig {
            value_count: Some(3),
            ..GameConfig::default()
        };
        assert_eq!(
            too_small.build(),
            Err(ConfigError::AlphabetSize {
                positions: 4,
                values: 3
            })
        );

        let too_large = GameConfig {
            value_count: Some(27),
            ..GameConfig::default()
        };
        assert!(matches!(
            too_large.build(),
            Err(ConfigError::AlphabetSize { values: 27, .. })
        ));

        let exact = GameConfig {
            value_count: Some(4),
            seed: Some(5),
            ..GameConfig::default()
        };
        assert_eq!(exact.build().unwrap().alphabet().len(), 4);
    }

    #[test]
    fn zero_rounds_rejected() {
        let config = GameConfig {
            max_rounds: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.build(), Err(ConfigError::NoRounds));
    }

    #[test]
    fn setup_rejects_symbol_outside_alphabet() {
        let alphabet = Alphabet::new("ABC".chars().map(Symbol::new));
        assert_eq!(
            GameSetup::new(alphabet, Code::parse("ABZ"), 5),
            Err(ConfigError::SymbolNotInAlphabet(Symbol::new('Z')))
        );
    }

    #[test]
    fn setup_rejects_duplicates() {
        let alphabet = Alphabet::letters();
        assert_eq!(
            GameSetup::new(alphabet, Code::parse("ABB"), 5),
            Err(ConfigError::DuplicateSymbol(Symbol::new('B')))
        );
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::DuplicateSymbol(Symbol::new('A')).to_string(),
            "Solution must not contain double characters ('A')"
        );
        assert_eq!(
            ConfigError::PositionsOutOfRange(13).to_string(),
            "Code length must be between 1 and 12, got 13"
        );
    }
}
