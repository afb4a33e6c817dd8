//! Character classes and generation pools.

/// Lowercase letters used for generation. `o` is left out so it can't be read as `0`.
pub const LOWERCASE_POOL: &[u8] = b"aeiubdghjmnpqrstvxyz";

/// Uppercase letters used for generation, without `O`.
pub const UPPERCASE_POOL: &[u8] = b"AEUBDGHJLMNPQRSTVWXYZ";

/// Digits used for generation, without `0` and `1`.
pub const DIGIT_POOL: &[u8] = b"23456789";

/// A symbol is anything outside `[a-zA-Z0-9]`.
pub fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Characters accepted into the allowed symbol set: `[^a-zA-Z0-9 ]`.
pub fn is_allowed_symbol_candidate(c: char) -> bool {
    is_symbol(c) && c != ' '
}

/// Per-class character counts of a password.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub digits: usize,
    pub letters: usize,
    pub lower: usize,
    pub upper: usize,
    pub symbols: usize,
}

impl ClassCounts {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut counts, c| {
            if c.is_ascii_digit() {
                counts.digits += 1;
            } else if c.is_ascii_lowercase() {
                counts.letters += 1;
                counts.lower += 1;
            } else if c.is_ascii_uppercase() {
                counts.letters += 1;
                counts.upper += 1;
            } else {
                counts.symbols += 1;
            }
            counts
        })
    }
}
