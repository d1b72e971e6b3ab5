//! Password generation.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use zeroize::Zeroizing;

use super::charset::{self, CharClasses};

/// Length used whenever the requested one is missing, non-numeric or below 1.
pub const DEFAULT_LENGTH: usize = 12;

/// Longest password a request may ask for. Longer lengths are capped.
pub const MAX_LENGTH: usize = 4096;

/// Most passwords a single batch may hold. Larger counts are capped.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No character types selected: enable letters, digits or special characters")]
    NoCharacterClassSelected,
}

/// A validated generation request. The length is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: CharClasses,
}

impl GenerationRequest {
    /// A length of 0 falls back to [`DEFAULT_LENGTH`]; anything above
    /// [`MAX_LENGTH`] is capped.
    pub fn new(length: usize, classes: CharClasses) -> Self {
        Self {
            length: fit_length(length),
            classes,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Parse user-supplied length text, falling back to [`DEFAULT_LENGTH`]
/// for anything that is not a positive integer. Lengths above
/// [`MAX_LENGTH`] are capped.
pub fn parse_length(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 => fit_length(n),
        _ => {
            debug!("invalid length input {input:?}, using default {DEFAULT_LENGTH}");
            DEFAULT_LENGTH
        }
    }
}

/// Clamp a requested password count into `1..=MAX_COUNT`.
pub fn cap_count(count: usize) -> usize {
    if count > MAX_COUNT {
        warn!("{count} passwords requested, capping at {MAX_COUNT}");
    }
    count.clamp(1, MAX_COUNT)
}

/// Bring a numeric length into `1..=MAX_LENGTH`. Zero becomes
/// [`DEFAULT_LENGTH`].
pub fn fit_length(length: usize) -> usize {
    match length {
        0 => {
            debug!("length 0 requested, using default {DEFAULT_LENGTH}");
            DEFAULT_LENGTH
        }
        n if n > MAX_LENGTH => {
            warn!("length {n} requested, capping at {MAX_LENGTH}");
            MAX_LENGTH
        }
        n => n,
    }
}

/// Draws passwords from a character pool using an owned PRNG.
///
/// Each generator carries its own random state, so concurrent callers
/// should each construct one rather than share it.
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a single password. Every character is drawn independently
    /// and uniformly, with replacement, from the pool.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<Zeroizing<String>, GenerateError> {
        let chars = charset::build(request.classes);
        if chars.is_empty() {
            return Err(GenerateError::NoCharacterClassSelected);
        }

        let mut password = Zeroizing::new(String::with_capacity(request.length));
        for _ in 0..request.length {
            password.push(random_char(&chars, &mut self.rng));
        }

        debug!(
            "generated password: length={}, pool={}",
            request.length,
            chars.len()
        );
        Ok(password)
    }

    /// Generate `count` passwords from the same request. The count is
    /// clamped with [`cap_count`].
    pub fn generate_batch(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<Zeroizing<String>>, GenerateError> {
        (0..cap_count(count)).map(|_| self.generate(request)).collect()
    }
}

#[inline]
fn random_char<R: Rng>(chars: &[u8], rng: &mut R) -> char {
    // Pool is ASCII only
    chars[rng.gen_range(0..chars.len())] as char
}
