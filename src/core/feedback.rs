//! Peg feedback for a guess
//!
//! Feedback only keeps counts: how many pegs were exact (right symbol, right
//! position), present (right symbol, wrong position) and absent. Which positions
//! produced which peg is deliberately not reported to the player.

use super::Code;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Peg for a symbol in the right position
pub const EXACT_PEG: char = '●';
/// Peg for a symbol that is in the solution but elsewhere
pub const PRESENT_PEG: char = '○';
/// Peg for a position that earned nothing
pub const ABSENT_PEG: char = '◌';

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Feedback {
    exact: u8,
    present: u8,
    absent: u8,
}

impl Feedback {
    /// Feedback for a round that has not been played: every peg absent
    #[inline]
    #[must_use]
    pub const fn unplayed(positions: u8) -> Self {
        Self {
            exact: 0,
            present: 0,
            absent: positions,
        }
    }

    #[inline]
    #[must_use]
    pub const fn new(exact: u8, present: u8, absent: u8) -> Self {
        Self {
            exact,
            present,
            absent,
        }
    }

    /// Score `guess` against `solution`
    ///
    /// Both codes must have the same length; the engine rejects anything else
    /// before scoring. Peg counts are `u8`: games are capped at 12 positions, and a
    /// count past `u8::MAX` saturates.
    ///
    /// # Algorithm
    /// 1. First pass: positions where the symbols agree are exact and consume one
    ///    occurrence of that symbol from the solution's pool
    /// 2. Second pass: remaining guess positions are present while the pool still
    ///    holds an occurrence of their symbol, consuming it; otherwise absent
    ///
    /// So a symbol never earns more exact + present pegs than it has occurrences
    /// in the solution, and exact matches are claimed first.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let solution = Code::parse("ABCD");
    ///
    /// let swapped = Feedback::score(&Code::parse("ABDC"), &solution);
    /// assert_eq!((swapped.exact(), swapped.present()), (2, 2));
    ///
    /// // Only one A exists and it is already claimed by the exact match
    /// let repeated = Feedback::score(&Code::parse("AAAA"), &solution);
    /// assert_eq!(repeated, Feedback::new(1, 0, 3));
    /// ```
    #[must_use]
    pub fn score(guess: &Code, solution: &Code) -> Self {
        debug_assert_eq!(
            guess.len(),
            solution.len(),
            "guess and solution lengths differ"
        );

        let mut available = solution.symbol_counts();
        let mut claimed = vec![false; guess.len()];
        let mut exact = 0usize;
        let mut present = 0usize;

        // First pass: exact matches
        for (i, (g, s)) in guess.symbols().iter().zip(solution.symbols()).enumerate() {
            if g == s {
                claimed[i] = true;
                exact += 1;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced symbols from whatever is left
        for (symbol, _) in guess
            .symbols()
            .iter()
            .zip(&claimed)
            .filter(|(_, claimed)| !**claimed)
        {
            if let Some(count) = available.get_mut(symbol)
                && *count > 0
            {
                *count -= 1;
                present += 1;
            }
        }

        let absent = guess.len() - exact - present;
        Self {
            exact: peg_count(exact),
            present: peg_count(present),
            absent: peg_count(absent),
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn present(self) -> u8 {
        self.present
    }

    #[inline]
    #[must_use]
    pub const fn absent(self) -> u8 {
        self.absent
    }

    /// Total number of pegs, equal to the code length
    #[inline]
    #[must_use]
    pub const fn positions(self) -> u8 {
        self.exact
            .saturating_add(self.present)
            .saturating_add(self.absent)
    }

    /// Every peg exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact > 0 && self.present == 0 && self.absent == 0
    }

    /// Render as pegs: exact first, then present, then absent
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(2, 1, 1).pegs(), "●●○◌");
    /// ```
    #[must_use]
    pub fn pegs(self) -> String {
        let mut result = String::with_capacity(usize::from(self.positions()) * 3);
        for _ in 0..self.exact {
            result.push(EXACT_PEG);
        }
        for _ in 0..self.present {
            result.push(PRESENT_PEG);
        }
        for _ in 0..self.absent {
            result.push(ABSENT_PEG);
        }
        result
    }
}

fn peg_count(count: usize) -> u8 {
    u8::try_from(count).unwrap_or(u8::MAX)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pegs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use proptest::prelude::*;

    fn score(guess: &str, solution: &str) -> Feedback {
        Feedback::score(&Code::parse(guess), &Code::parse(solution))
    }

    #[test]
    fn all_absent() {
        let feedback = score("EFEF", "ABCD");
        assert_eq!(feedback, Feedback::new(0, 0, 4));
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn all_exact() {
        let feedback = score("ABCD", "ABCD");
        assert_eq!(feedback, Feedback::new(4, 0, 0));
        assert!(feedback.is_perfect());
    }

    #[test]
    fn all_present() {
        assert_eq!(score("DCBA", "ABCD"), Feedback::new(0, 4, 0));
    }

    #[test]
    fn swapped_pair() {
        assert_eq!(score("ABDC", "ABCD"), Feedback::new(2, 2, 0));
    }

    #[test]
    fn repeated_symbol_claimed_by_exact() {
        // One A in the solution, taken by position 0
        assert_eq!(score("AAAA", "ABCD"), Feedback::new(1, 0, 3));
    }

    #[test]
    fn repeated_symbol_exact_wins_over_earlier_misplaced() {
        // The misplaced A at position 0 must not steal the A that position 2 matches
        assert_eq!(score("AEAE", "BCAD"), Feedback::new(1, 0, 3));
    }

    #[test]
    fn repeated_pairs_capped_by_multiplicity() {
        // A and C are each used up by their exact match
        assert_eq!(score("AACC", "ABCD"), Feedback::new(2, 0, 2));
    }

    #[test]
    fn repeated_symbol_misplaced_counted_once() {
        assert_eq!(score("BBEE", "ABCD"), Feedback::new(1, 0, 3));
        assert_eq!(score("EEBB", "ABCD"), Feedback::new(0, 1, 3));
    }

    #[test]
    fn single_position() {
        assert_eq!(score("A", "A"), Feedback::new(1, 0, 0));
        assert_eq!(score("B", "A"), Feedback::new(0, 0, 1));
    }

    #[test]
    fn unplayed_is_all_absent() {
        let feedback = Feedback::unplayed(5);
        assert_eq!(feedback.positions(), 5);
        assert_eq!(feedback.pegs(), "◌◌◌◌◌");
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn zero_positions_never_perfect() {
        assert!(!Feedback::unplayed(0).is_perfect());
    }

    #[test]
    fn oversized_code_saturates_instead_of_wrapping() {
        let solution = Code::new(vec![Symbol::new('A'); 300]);
        let mut guess = vec![Symbol::new('A'); 100];
        guess.extend(vec![Symbol::new('B'); 200]);

        let feedback = Feedback::score(&Code::new(guess), &solution);
        assert_eq!(feedback, Feedback::new(100, 0, 200));
        assert_eq!(feedback.positions(), u8::MAX);

        let perfect = Feedback::score(&solution, &solution);
        assert_eq!(perfect, Feedback::new(u8::MAX, 0, 0));
        assert!(perfect.is_perfect());
    }

    #[test]
    fn pegs_ordered_by_category() {
        assert_eq!(score("ABDE", "ABCD").pegs(), "●●○◌");
        assert_eq!(format!("{}", Feedback::new(0, 2, 2)), "○○◌◌");
    }

    fn distinct_solution() -> impl Strategy<Value = Code> {
        proptest::sample::subsequence(('A'..='H').collect::<Vec<_>>(), 1..=8)
            .prop_shuffle()
            .prop_map(|chars| chars.into_iter().map(Symbol::new).collect())
    }

    fn guess_for(len: usize) -> impl Strategy<Value = Code> {
        proptest::collection::vec(proptest::sample::select(('A'..='J').collect::<Vec<_>>()), len)
            .prop_map(|chars| chars.into_iter().map(Symbol::new).collect())
    }

    fn pair() -> impl Strategy<Value = (Code, Code)> {
        distinct_solution().prop_flat_map(|solution| {
            let len = solution.len();
            (guess_for(len), Just(solution))
        })
    }

    proptest! {
        #[test]
        fn pegs_sum_to_length((guess, solution) in pair()) {
            let feedback = Feedback::score(&guess, &solution);
            prop_assert_eq!(usize::from(feedback.positions()), solution.len());
        }

        #[test]
        fn perfect_iff_equal((guess, solution) in pair()) {
            let feedback = Feedback::score(&guess, &solution);
            prop_assert_eq!(feedback.is_perfect(), guess == solution);
            prop_assert!(Feedback::score(&solution, &solution).is_perfect());
        }

        #[test]
        fn scoring_is_idempotent((guess, solution) in pair()) {
            prop_assert_eq!(
                Feedback::score(&guess, &solution),
                Feedback::score(&guess, &solution)
            );
        }

        #[test]
        fn credited_pegs_bounded_by_shared_symbols((guess, solution) in pair()) {
            // With a duplicate-free solution each symbol can be credited at most once
            let feedback = Feedback::score(&guess, &solution);
            let shared = solution
                .symbols()
                .iter()
                .filter(|&&s| guess.contains(s))
                .count();
            prop_assert_eq!(usize::from(feedback.exact() + feedback.present()), shared);
        }

        #[test]
        fn exact_counts_positional_agreement((guess, solution) in pair()) {
            let agree = guess
                .symbols()
                .iter()
                .zip(solution.symbols())
                .filter(|(g, s)| g == s)
                .count();
            prop_assert_eq!(usize::from(Feedback::score(&guess, &solution).exact()), agree);
        }
    }
}
