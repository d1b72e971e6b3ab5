//! Password strength estimation.
//!
//! The estimate infers an effective pool from the character classes present
//! in the string and scores it as `length * log2(pool)`. Letters, digits and
//! the fixed specials add a flat bonus each; any other character adds one per
//! distinct symbol.

use std::collections::HashSet;
use std::fmt;

use super::charset::{self, SPECIALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Map entropy bits to a strength tier. Lower bounds are inclusive.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 28.0 {
            Strength::VeryWeak
        } else if bits < 36.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Medium
        } else {
            Strength::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "very weak",
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// Rounded to two decimals.
    pub entropy_bits: f64,
    pub strength: Strength,
    /// Always at least 1.
    pub pool_size: usize,
}

/// Calculate password entropy in bits.
pub fn estimate_entropy(password_length: usize, pool_size: usize) -> f64 {
    if pool_size <= 1 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

/// Estimate the effective pool size of a password.
pub fn pool_size(password: &str) -> usize {
    let mut pool = 0;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(charset::is_special) {
        pool += SPECIALS.len();
    }

    let others: HashSet<char> = password
        .chars()
        .filter(|&c| !(c.is_ascii_alphanumeric() || charset::is_special(c)))
        .collect();
    pool += others.len();

    pool.max(1)
}

/// Assess any string. Never fails; the empty string scores 0 bits.
pub fn assess(password: &str) -> Assessment {
    let pool_size = pool_size(password);
    let entropy_bits = round2(estimate_entropy(password.chars().count(), pool_size));

    Assessment {
        entropy_bits,
        strength: Strength::from_entropy(entropy_bits),
        pool_size,
    }
}

/// Entropy as shown to users. Whole values keep one decimal (`0.0`, `3.0`),
/// others print with at most two.
pub fn format_bits(bits: f64) -> String {
    if bits.fract() == 0.0 {
        format!("{bits:.1}")
    } else {
        format!("{}", round2(bits))
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        let result = assess("");
        assert_eq!(result.entropy_bits, 0.0);
        assert_eq!(result.strength, Strength::VeryWeak);
        assert_eq!(result.pool_size, 1);
    }

    #[test]
    fn lowercase_only() {
        let result = assess("abc");
        assert_eq!(result.pool_size, 26);
        assert_eq!(result.entropy_bits, 14.1);
        assert_eq!(result.strength.label(), "very weak");
    }

    #[test]
    fn all_standard_classes() {
        let result = assess("Ab3!");
        assert_eq!(result.pool_size, 72);
        assert_eq!(result.entropy_bits, 24.68);
        assert_eq!(result.strength, Strength::VeryWeak);
    }

    #[test]
    fn exotic_character_adds_one() {
        let result = assess("Ab3!\u{eb}");
        assert_eq!(result.pool_size, 73);
        assert_eq!(result.entropy_bits, 30.95);
        assert_eq!(result.strength, Strength::Weak);
    }

    #[test]
    fn exotic_characters_are_deduplicated() {
        assert_eq!(pool_size("--"), 1);
        assert_eq!(pool_size("-_-_~"), 3);
        assert_eq!(pool_size("a--"), 27);
        // A space is neither alphanumeric nor a listed special
        assert_eq!(pool_size("a b"), 27);
    }

    #[test]
    fn class_bonus_ignores_count_within_class() {
        assert_eq!(pool_size("a"), pool_size("abcdefghijklmnop"));
        assert_eq!(pool_size("!"), 10);
        assert_eq!(pool_size("!@#$%"), 10);
    }

    #[test]
    fn single_exotic_symbol_is_zero_bits() {
        let result = assess("~~~~~~~~");
        assert_eq!(result.pool_size, 1);
        assert_eq!(result.entropy_bits, 0.0);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 3 chars, pool 2 (two distinct exotics) -> 3 bits
        let result = assess("\u{eb}\u{e9}\u{eb}");
        assert_eq!(result.pool_size, 2);
        assert_eq!(result.entropy_bits, 3.0);
    }

    #[test]
    fn bits_display() {
        assert_eq!(format_bits(0.0), "0.0");
        assert_eq!(format_bits(3.0), "3.0");
        assert_eq!(format_bits(14.1), "14.1");
        assert_eq!(format_bits(30.95), "30.95");
        assert_eq!(format_bits(assess("").entropy_bits), "0.0");
    }

    #[test]
    fn label_boundaries_are_exact() {
        assert_eq!(Strength::from_entropy(27.99), Strength::VeryWeak);
        assert_eq!(Strength::from_entropy(28.0), Strength::Weak);
        assert_eq!(Strength::from_entropy(35.99), Strength::Weak);
        assert_eq!(Strength::from_entropy(36.0), Strength::Medium);
        assert_eq!(Strength::from_entropy(59.99), Strength::Medium);
        assert_eq!(Strength::from_entropy(60.0), Strength::Strong);
        assert_eq!(Strength::from_entropy(512.0), Strength::Strong);
    }

    #[test]
    fn generated_defaults_rate_strong() {
        // 12 chars from the full 72-symbol pool
        let result = assess("aB3$eF6&iJ9(");
        assert_eq!(result.pool_size, 72);
        assert_eq!(result.entropy_bits, 74.04);
        assert_eq!(result.strength, Strength::Strong);
    }

    #[test]
    fn assess_is_idempotent() {
        let password = "Tr0ub4dor&3\u{2603}";
        assert_eq!(assess(password), assess(password));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Strength::Medium.to_string(), "medium");
        assert_eq!(format!("{}", Strength::VeryWeak), "very weak");
    }
}
