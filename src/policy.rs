//! Policy configuration, options binding and bound reconciliation.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::charset::is_allowed_symbol_candidate;
use crate::dictionary::WordSource;

/// Numeric bounds and allowed symbol set governing password acceptability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub min_numbers: usize,
    pub min_letters: usize,
    pub min_lower_case: usize,
    pub min_upper_case: usize,
    pub min_symbols: usize,
    pub max_symbols: usize,
    /// Deduplicated, in insertion order. Generation indexes into it.
    pub allowed_symbols: Vec<char>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 7,
            max_length: 15,
            min_numbers: 1,
            min_letters: 5,
            min_lower_case: 1,
            min_upper_case: 1,
            min_symbols: 1,
            max_symbols: 3,
            allowed_symbols: vec!['#', '_', '!'],
        }
    }
}

/// Reconciles bounds that would otherwise make validation impossible.
///
/// Applied in order:
/// 1. `min_length` is raised to `min_numbers + min_letters + min_symbols`
/// 2. `min_length` is lowered to `max_length`
/// 3. `min_symbols` is lowered to `max_symbols`
pub fn normalize(config: &PolicyConfig) -> PolicyConfig {
    let mut normalized = config.clone();

    let min_positions = config
        .min_numbers
        .saturating_add(config.min_letters)
        .saturating_add(config.min_symbols);
    if min_positions > normalized.min_length {
        normalized.min_length = min_positions;
    }

    if normalized.min_length > normalized.max_length {
        normalized.min_length = normalized.max_length;
    }

    if normalized.min_symbols > normalized.max_symbols {
        normalized.min_symbols = normalized.max_symbols;
    }

    #[cfg(feature = "tracing")]
    {
        if normalized != *config {
            tracing::debug!(
                "Policy normalized: min_length {} -> {}, min_symbols {} -> {}",
                config.min_length,
                normalized.min_length,
                config.min_symbols,
                normalized.min_symbols
            );
        }
    }

    normalized
}

/// Allowed symbols as supplied by a caller: a list of characters or one string.
///
/// Only characters matching `[^a-zA-Z0-9 ]` survive, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SymbolInput {
    List(Vec<char>),
    Text(String),
}

impl SymbolInput {
    pub fn into_symbols(self) -> Vec<char> {
        let chars: Vec<char> = match self {
            SymbolInput::List(chars) => chars,
            SymbolInput::Text(text) => text.chars().collect(),
        };

        let mut symbols = Vec::with_capacity(chars.len());
        for c in chars {
            if is_allowed_symbol_candidate(c) && !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        symbols
    }
}

impl From<&str> for SymbolInput {
    fn from(text: &str) -> Self {
        SymbolInput::Text(text.to_string())
    }
}

impl From<String> for SymbolInput {
    fn from(text: String) -> Self {
        SymbolInput::Text(text)
    }
}

impl From<Vec<char>> for SymbolInput {
    fn from(chars: Vec<char>) -> Self {
        SymbolInput::List(chars)
    }
}

impl From<&[char]> for SymbolInput {
    fn from(chars: &[char]) -> Self {
        SymbolInput::List(chars.to_vec())
    }
}

impl<const N: usize> From<[char; N]> for SymbolInput {
    fn from(chars: [char; N]) -> Self {
        SymbolInput::List(chars.to_vec())
    }
}

/// Partial configuration. Only the keys that are present get applied.
///
/// Deserializes from camelCase keys (`minLength`, `allowedSymbols`, ...), so
/// form or JSON input can be bound directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_numbers: Option<usize>,
    pub min_letters: Option<usize>,
    pub min_lower_case: Option<usize>,
    pub min_upper_case: Option<usize>,
    pub min_symbols: Option<usize>,
    pub max_symbols: Option<usize>,
    pub allowed_symbols: Option<SymbolInput>,
}

/// Password policy: configuration plus an optional dictionary for scoring.
///
/// The configuration is kept exactly as set. Every operation and every getter
/// works on [`normalize`]d values, so changing one bound can change what
/// another getter reports.
///
/// Reconciliation never sticks: raising `max_length` after a `min_length`
/// was capped restores the requested `min_length`, even if an operation ran
/// in between.
#[derive(Clone, Default)]
pub struct PasswordPolicy {
    config: PolicyConfig,
    dictionary: Option<Arc<dyn WordSource>>,
}

impl fmt::Debug for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordPolicy")
            .field("config", &self.config)
            .field("dictionary", &self.dictionary.is_some())
            .finish()
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PolicyOptions) -> Self {
        let mut policy = Self::default();
        policy.set_options(options);
        policy
    }

    pub fn with_dictionary(mut self, dictionary: Arc<dyn WordSource>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn set_dictionary(&mut self, dictionary: Arc<dyn WordSource>) {
        self.dictionary = Some(dictionary);
    }

    pub fn clear_dictionary(&mut self) {
        self.dictionary = None;
    }

    pub fn dictionary(&self) -> Option<&dyn WordSource> {
        self.dictionary.as_deref()
    }

    /// Applies every option that is set, leaving the others untouched.
    pub fn set_options(&mut self, options: PolicyOptions) {
        let PolicyOptions {
            min_length,
            max_length,
            min_numbers,
            min_letters,
            min_lower_case,
            min_upper_case,
            min_symbols,
            max_symbols,
            allowed_symbols,
        } = options;

        if let Some(v) = max_length {
            self.config.max_length = v;
        }
        if let Some(v) = min_length {
            self.config.min_length = v;
        }
        if let Some(v) = min_numbers {
            self.config.min_numbers = v;
        }
        if let Some(v) = min_letters {
            self.config.min_letters = v;
        }
        if let Some(v) = min_symbols {
            self.config.min_symbols = v;
        }
        if let Some(v) = max_symbols {
            self.config.max_symbols = v;
        }
        if let Some(symbols) = allowed_symbols {
            self.set_allowed_symbols(symbols);
        }
        if let Some(v) = min_lower_case {
            self.config.min_lower_case = v;
        }
        if let Some(v) = min_upper_case {
            self.config.min_upper_case = v;
        }
    }

    /// The configuration as operations see it, after [`normalize`].
    pub fn config(&self) -> PolicyConfig {
        normalize(&self.config)
    }

    /// The configuration exactly as it was set.
    pub fn raw_config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn set_min_length(&mut self, min_length: usize) {
        self.config.min_length = min_length;
    }

    pub fn set_max_length(&mut self, max_length: usize) {
        self.config.max_length = max_length;
    }

    pub fn set_min_numbers(&mut self, min_numbers: usize) {
        self.config.min_numbers = min_numbers;
    }

    pub fn set_min_letters(&mut self, min_letters: usize) {
        self.config.min_letters = min_letters;
    }

    pub fn set_min_lower_case(&mut self, min_lower_case: usize) {
        self.config.min_lower_case = min_lower_case;
    }

    pub fn set_min_upper_case(&mut self, min_upper_case: usize) {
        self.config.min_upper_case = min_upper_case;
    }

    pub fn set_min_symbols(&mut self, min_symbols: usize) {
        self.config.min_symbols = min_symbols;
    }

    pub fn set_max_symbols(&mut self, max_symbols: usize) {
        self.config.max_symbols = max_symbols;
    }

    /// Replaces the allowed symbol set.
    ///
    /// Letters, digits and spaces are filtered out and duplicates dropped; an
    /// input without any symbol leaves the set empty.
    pub fn set_allowed_symbols<S: Into<SymbolInput>>(&mut self, symbols: S) {
        self.config.allowed_symbols = symbols.into().into_symbols();
    }

    pub fn min_length(&self) -> usize {
        self.config().min_length
    }

    pub fn max_length(&self) -> usize {
        self.config().max_length
    }

    pub fn min_numbers(&self) -> usize {
        self.config().min_numbers
    }

    pub fn min_letters(&self) -> usize {
        self.config().min_letters
    }

    pub fn min_lower_case(&self) -> usize {
        self.config().min_lower_case
    }

    pub fn min_upper_case(&self) -> usize {
        self.config().min_upper_case
    }

    pub fn min_symbols(&self) -> usize {
        self.config().min_symbols
    }

    pub fn max_symbols(&self) -> usize {
        self.config().max_symbols
    }

    pub fn allowed_symbols(&self) -> Vec<char> {
        self.config.allowed_symbols.clone()
    }
}
