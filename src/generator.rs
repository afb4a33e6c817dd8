//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use secrecy::zeroize::Zeroize;

use crate::charset::{DIGIT_POOL, LOWERCASE_POOL, UPPERCASE_POOL};
use crate::policy::{PasswordPolicy, PolicyConfig, normalize};

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())] as char
}

fn push_from<R: Rng + ?Sized>(buf: &mut Vec<char>, pool: &[u8], count: usize, rng: &mut R) {
    for _ in 0..count {
        buf.push(pick(pool, rng));
    }
}

/// Builds a password from the normalized `config`, then shuffles it.
///
/// Composition before the shuffle: `min_lower_case` lowercase, `min_upper_case`
/// uppercase, one extra lowercase when the two fall short of `min_letters`,
/// `min_numbers` digits, `min_symbols` allowed symbols, then lowercase padding
/// up to `min_length`.
///
/// The extra lowercase letter is added once, whatever the size of the
/// shortfall, so configurations where `max_length` caps the padding can
/// produce passwords that fail validation.
pub fn generate_password<R: Rng + ?Sized>(config: &PolicyConfig, rng: &mut R) -> String {
    let config = normalize(config);
    let mut buf: Vec<char> = Vec::with_capacity(config.min_length);

    push_from(&mut buf, LOWERCASE_POOL, config.min_lower_case, rng);
    push_from(&mut buf, UPPERCASE_POOL, config.min_upper_case, rng);

    if config.min_lower_case + config.min_upper_case < config.min_letters {
        buf.push(pick(LOWERCASE_POOL, rng));
    }

    push_from(&mut buf, DIGIT_POOL, config.min_numbers, rng);

    let symbols = &config.allowed_symbols;
    if config.max_symbols != 0 && config.min_symbols != 0 && !symbols.is_empty() {
        for _ in 0..config.min_symbols {
            buf.push(symbols[rng.gen_range(0..symbols.len())]);
        }
    }

    while buf.len() < config.min_length {
        buf.push(pick(LOWERCASE_POOL, rng));
    }

    buf.shuffle(rng);

    let password: String = buf.iter().collect();
    buf.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", password.len());

    password
}

impl PasswordPolicy {
    /// Generates a random password using the thread-local RNG.
    pub fn generate(&self) -> SecretString {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a random password with the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretString {
        SecretString::new(generate_password(self.raw_config(), rng).into())
    }
}
