//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(yellow) A(green) N(gray) E(green)
    /// // 0 + 1×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [0u8; 5];
        let mut answer_available = answer.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = 2; // Green

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows (wrong position, but letter exists)
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == 0 {
                // Not already green
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = 1; // Yellow
                    *count -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Self(pattern)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..5 {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..5 {
            if val % 3 == 1 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut pattern = 0u8;
        let mut multiplier = 1u8;

        for ch in chars {
            let digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' => 0,
                _ => return None,
            };
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Some(Self(pattern))
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(10); // 2 bytes per emoji
        let mut val = self.0;

        for _ in 0..5 {
            let digit = val % 3;
            result.push(match digit {
                2 => '🟩', // Green
                1 => '🟨', // Yellow
                _ => '⬜', // Gray
            });
            val /= 3;
        }

        result
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
