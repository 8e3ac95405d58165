//! Symbols, alphabets and codes
//!
//! A `Code` is an ordered sequence of symbols. Solutions and guesses are both codes;
//! only solutions are required to be free of duplicates.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single peg colour, written as an uppercase letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// Create a symbol, normalizing ASCII letters to uppercase
    #[inline]
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c.to_ascii_uppercase())
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Whether the symbol is one of `A..=Z`
    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        self.0.is_ascii_uppercase()
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of symbols a game is played with
///
/// Kept sorted and free of duplicates so membership is a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Number of letters available to generated games
    pub const MAX_SIZE: usize = 26;

    /// Build an alphabet from any symbols; order and repeats are discarded
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Symbol};
    ///
    /// let alphabet = Alphabet::new("CABBA".chars().map(Symbol::new));
    /// assert_eq!(alphabet.len(), 3);
    /// assert_eq!(alphabet.to_string(), "A B C");
    /// ```
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut symbols: Vec<Symbol> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// All uppercase ASCII letters
    #[must_use]
    pub fn letters() -> Self {
        Self::new(('A'..='Z').map(Symbol::new))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// An ordered sequence of symbols, used for both guesses and solutions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Code(Vec<Symbol>);

impl Code {
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// Parse typed input into a code
    ///
    /// Letters are upper-cased and whitespace is skipped. No validation happens here;
    /// the engine decides whether the code is playable.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// assert_eq!(Code::parse("ab cd").to_string(), "ABCD");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::new)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    /// The first symbol that occurs more than once, scanning left to right
    #[must_use]
    pub fn first_duplicate(&self) -> Option<Symbol> {
        self.0
            .iter()
            .enumerate()
            .find(|(i, symbol)| self.0[..*i].contains(symbol))
            .map(|(_, &symbol)| symbol)
    }

    /// Occurrences of each symbol, used by the scorer's multiset bookkeeping
    pub(crate) fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.0 {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Symbol> for Code {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
