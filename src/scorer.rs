//! Password scorer - heuristic strength estimate between 0 and 100.

use std::collections::HashSet;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::is_symbol;
use crate::dictionary::WordSource;
use crate::policy::{PasswordPolicy, PolicyConfig};
use crate::validator::validate_password;

/// Delay before an async evaluation starts, so a newer keystroke can cancel it.
#[cfg(feature = "async")]
pub const SCORE_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Strength score, always within `0..=100`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: PasswordScore = PasswordScore(0);
    pub const MAX: PasswordScore = PasswordScore(100);

    /// Clamps `value` into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

struct ScoreInput<'a> {
    password: &'a str,
    dictionary: Option<&'a dyn WordSource>,
}

type Penalty = (&'static str, fn(&ScoreInput<'_>) -> u32);

const PENALTIES: [Penalty; 4] = [
    ("letters", letter_penalty),
    ("digits", digit_penalty),
    ("symbols", symbol_penalty),
    ("dictionary", dictionary_penalty),
];

/// 5 per letter seen before, 10 more when it repeats the previous letter.
fn letter_penalty(input: &ScoreInput<'_>) -> u32 {
    let mut seen = HashSet::new();
    let mut previous = None;
    let mut penalty = 0;

    for c in input.password.chars().filter(char::is_ascii_alphabetic) {
        if !seen.insert(c) {
            penalty += 5;
        }
        if previous == Some(c) {
            penalty += 10;
        }
        previous = Some(c);
    }
    penalty
}

/// 5 per digit seen before.
fn digit_penalty(input: &ScoreInput<'_>) -> u32 {
    let mut seen = HashSet::new();
    input
        .password
        .chars()
        .filter(char::is_ascii_digit)
        .filter(|c| !seen.insert(*c))
        .map(|_| 5)
        .sum()
}

/// Flat 10 when there is no symbol at all.
fn symbol_penalty(input: &ScoreInput<'_>) -> u32 {
    if input.password.chars().any(is_symbol) { 0 } else { 10 }
}

/// 20 per dictionary word found anywhere in the password, ignoring case.
fn dictionary_penalty(input: &ScoreInput<'_>) -> u32 {
    let Some(dictionary) = input.dictionary else {
        return 0;
    };

    let lowered = input.password.to_lowercase();
    dictionary
        .words()
        .map(str::trim)
        .filter(|word| !word.is_empty() && lowered.contains(&word.to_lowercase()))
        .map(|_| 20)
        .sum()
}

/// Runs the penalty stages, checking `is_cancelled` before each one.
///
/// Returns `None` only when cancelled.
fn score_with(
    config: &PolicyConfig,
    dictionary: Option<&dyn WordSource>,
    password: &str,
    is_cancelled: &dyn Fn() -> bool,
) -> Option<PasswordScore> {
    if password.is_empty() || !validate_password(config, password).is_valid() {
        return Some(PasswordScore::MIN);
    }

    let input = ScoreInput {
        password,
        dictionary,
    };

    let mut score: i64 = 100;
    for (_stage_name, penalty_fn) in PENALTIES {
        if is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Scoring cancelled before stage {}", _stage_name);
            return None;
        }
        score -= i64::from(penalty_fn(&input));
    }

    Some(PasswordScore::new(score))
}

/// Scores `password` under `config`.
///
/// Passwords that fail validation, and the empty password, score 0.
pub fn score_password(
    config: &PolicyConfig,
    dictionary: Option<&dyn WordSource>,
    password: &str,
) -> PasswordScore {
    score_with(config, dictionary, password, &|| false).unwrap_or_default()
}

impl PasswordPolicy {
    /// Scores the password. Invalid passwords score 0; call
    /// [`PasswordPolicy::validate`] to learn why.
    pub fn score(&self, password: &SecretString) -> PasswordScore {
        score_password(self.raw_config(), self.dictionary(), password.expose_secret())
    }
}

#[cfg(feature = "async")]
impl PasswordPolicy {
    /// Scores the password unless `token` is cancelled first.
    ///
    /// # Returns
    /// `None` when the evaluation was cancelled before completing.
    pub fn score_cancellable(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Option<PasswordScore> {
        let is_cancelled = || token.as_ref().is_some_and(|t| t.is_cancelled());
        score_with(
            self.raw_config(),
            self.dictionary(),
            password.expose_secret(),
            &is_cancelled,
        )
    }

    /// Async version that sends the outcome via channel after [`SCORE_DEBOUNCE`].
    pub async fn score_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Option<PasswordScore>>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("scoring is about to start...");

        tokio::time::sleep(SCORE_DEBOUNCE).await;
        let score = self.score_cancellable(password, Some(token));

        if let Err(_e) = tx.send(score).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password score: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, FileDictionary};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_score_empty_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.score(&secret("")), PasswordScore::MIN);
    }

    #[test]
    fn test_score_invalid_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.score(&secret("8sdf7aysd")).value(), 0);
        assert_eq!(policy.score(&secret("Ab1#")).value(), 0);
    }

    #[test]
    fn test_score_too_long_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.score(&secret("Abcdefgh12345#_xyz")), PasswordScore::MIN);
    }

    #[test]
    fn test_score_empty_password_with_zero_min_length() {
        let config = PolicyConfig {
            min_length: 0,
            min_numbers: 0,
            min_letters: 0,
            min_lower_case: 0,
            min_upper_case: 0,
            min_symbols: 0,
            ..PolicyConfig::default()
        };
        assert!(validate_password(&config, "").is_valid());
        assert_eq!(score_password(&config, None, ""), PasswordScore::MIN);
    }

    #[test]
    fn test_score_repeated_letters_and_digits() {
        let policy = PasswordPolicy::new();
        // o twice (one adjacent), u once more, 3 twice more
        assert_eq!(policy.score(&secret("wound33oo#_Xu3!")).value(), 65);
    }

    #[test]
    fn test_score_adjacent_letter_costs_fifteen() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.score(&secret("Qwerttyu1#")).value(), 85);
    }

    #[test]
    fn test_score_letters_are_case_sensitive() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.score(&secret("AaBbCc12#x")).value(), 100);
    }

    #[test]
    fn test_score_no_symbols() {
        let mut policy = PasswordPolicy::new();
        policy.set_min_symbols(0);
        assert_eq!(policy.score(&secret("wound33ooXu3")).value(), 55);
        assert_eq!(policy.min_symbols(), 0);
    }

    #[test]
    fn test_score_dictionary_words() {
        let policy = PasswordPolicy::new()
            .with_dictionary(Arc::new(Dictionary::from_lines(["QWERTY", "dragon", ""])));
        assert_eq!(policy.score(&secret("QwErTy12#zx")).value(), 80);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let mut policy = PasswordPolicy::new()
            .with_dictionary(Arc::new(Dictionary::from_lines(["this", "that", "other", "word"])));
        policy.set_max_length(100);
        let score = policy.score(&secret("thisthatotherwordyesnomaybe33oo#_Xu3!"));
        assert_eq!(score, PasswordScore::MIN);
    }

    #[test]
    fn test_score_file_dictionary() {
        let temp_file = setup_with_tempfile(&["wound", "zebra"]);
        let policy =
            PasswordPolicy::new().with_dictionary(Arc::new(FileDictionary::new(temp_file.path())));
        assert_eq!(policy.score(&secret("wound33oo#_Xu3!")).value(), 45);
    }

    #[test]
    fn test_score_dictionary_file_with_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(b"dragon\ncaf\xe9\n").expect("Failed to write");
        let policy =
            PasswordPolicy::new().with_dictionary(Arc::new(FileDictionary::new(temp_file.path())));
        assert_eq!(policy.score(&secret("Dragon12#xk")).value(), 80);
    }

    #[test]
    fn test_score_missing_dictionary_file() {
        let policy = PasswordPolicy::new()
            .with_dictionary(Arc::new(FileDictionary::new("/nonexistent/path/words.txt")));
        assert_eq!(policy.score(&secret("wound33oo#_Xu3!")).value(), 65);
    }

    #[test]
    fn test_score_bounds() {
        let policy = PasswordPolicy::new();
        for pwd in ["", "a", "password", "Qwasd12!", "wound33oo#_Xu3!", "aaaaaaAAA111#"] {
            let score = policy.score(&secret(pwd));
            assert!(score <= PasswordScore::MAX, "Score {} out of bounds for '{}'", score, pwd);
        }
    }

    #[test]
    fn test_password_score_clamps() {
        assert_eq!(PasswordScore::new(-40).value(), 0);
        assert_eq!(PasswordScore::new(140).value(), 100);
        assert_eq!(u8::from(PasswordScore::new(42)), 42);
        assert_eq!(PasswordScore::new(42).to_string(), "42");
    }
}
