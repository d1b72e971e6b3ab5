//! Character set building for password generation.

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// The fixed special-symbol class, shared by generation and assessment.
pub const SPECIALS: &[u8] = b"!@#$%^&*()";

/// Which character classes feed the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub letters: bool,
    pub digits: bool,
    pub specials: bool,
}

impl CharClasses {
    pub const ALL: CharClasses = CharClasses {
        letters: true,
        digits: true,
        specials: true,
    };

    pub fn is_empty(&self) -> bool {
        !(self.letters || self.digits || self.specials)
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::ALL
    }
}

/// Build the character pool: letters, then digits, then specials.
pub fn build(classes: CharClasses) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(classes));

    if classes.letters {
        chars.extend_from_slice(LETTERS);
    }

    if classes.digits {
        chars.extend_from_slice(DIGITS);
    }

    if classes.specials {
        chars.extend_from_slice(SPECIALS);
    }

    chars
}

/// Pool size for the given classes, without building it.
pub fn size(classes: CharClasses) -> usize {
    let mut size = 0;
    if classes.letters {
        size += LETTERS.len();
    }
    if classes.digits {
        size += DIGITS.len();
    }
    if classes.specials {
        size += SPECIALS.len();
    }
    size
}

#[inline]
pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIALS.contains(&(c as u8))
}
