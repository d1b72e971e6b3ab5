//! One-shot security tips.
//!
//! Two themed sets, each handing out at most one tip per session.

use rand::Rng;
use rand::seq::SliceRandom;

pub const CAT_TIPS: &[&str] = &[
    "Cat says: use complex passwords!",
    "Cat whispers: never show your password to anyone!",
    "Cat advises: change your password regularly!",
    "Cat whispers: don't use one password for every site!",
    "Cat says: mix letters, digits and symbols!",
];

pub const ROCKET_TIPS: &[&str] = &[
    "Hint: use different symbols for a reliable password.",
    "Hint: don't use one password everywhere.",
    "Hint: change your password every 2-3 months.",
    "Hint: strong passwords make you safer.",
    "Hint: never share your passwords with anyone.",
];

/// A tip set that gives out a single random tip.
#[derive(Debug)]
pub struct TipJar {
    tips: &'static [&'static str],
    shown: bool,
}

impl TipJar {
    pub fn new(tips: &'static [&'static str]) -> Self {
        Self { tips, shown: false }
    }

    /// A random tip the first time, `None` afterwards.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        if self.shown {
            return None;
        }
        self.shown = true;
        self.tips.choose(rng).copied()
    }

    pub fn is_spent(&self) -> bool {
        self.shown
    }
}

/// The cat and rocket jars. Draws empty the cat jar first.
#[derive(Debug)]
pub struct Tips {
    jars: [TipJar; 2],
}

impl Default for Tips {
    fn default() -> Self {
        Self {
            jars: [TipJar::new(CAT_TIPS), TipJar::new(ROCKET_TIPS)],
        }
    }
}

impl Tips {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'static str> {
        self.jars
            .iter_mut()
            .find(|jar| !jar.is_spent())
            .and_then(|jar| jar.draw(rng))
    }

    pub fn is_spent(&self) -> bool {
        self.jars.iter().all(TipJar::is_spent)
    }
}
