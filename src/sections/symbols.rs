//! Symbol sections - symbol count bounds and allowed symbol membership.

use crate::charset::is_symbol;

use super::{SectionInput, SectionResult};

/// Checks the symbol count against `min_symbols` and `max_symbols`.
///
/// The minimum is only enforced while `max_symbols` is non-zero.
pub fn symbol_count_section(input: &SectionInput<'_>) -> SectionResult {
    let config = input.config;
    let count = input.counts.symbols;
    let mut reasons = Vec::new();

    if count < config.min_symbols && config.max_symbols != 0 {
        reasons.push(format!(
            "Not enough symbols in password, a minimum of {} required.",
            config.min_symbols
        ));
    }

    if count > config.max_symbols {
        if config.max_symbols == 0 {
            reasons.push(
                "You are not allowed any symbols in password, please remove them.".to_string(),
            );
        } else {
            reasons.push(format!(
                "Too many symbols in password, a maximum of {} allowed.",
                config.max_symbols
            ));
        }
    }

    reasons
}

/// Reports every symbol occurrence missing from `allowed_symbols`.
///
/// Skipped entirely when `max_symbols` is zero; the count section already
/// rejects any symbol in that case.
pub fn allowed_symbols_section(input: &SectionInput<'_>) -> SectionResult {
    let config = input.config;
    if config.max_symbols == 0 {
        return Vec::new();
    }

    let allowed: String = config.allowed_symbols.iter().collect();
    input
        .password
        .chars()
        .filter(|&c| is_symbol(c) && !config.allowed_symbols.contains(&c))
        .map(|c| {
            format!(
                "Non specified symbol {} used in password, please use one of {}.",
                c, allowed
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyConfig;

    #[test]
    fn test_symbol_count_section_not_enough() {
        let config = PolicyConfig::default();
        let result = symbol_count_section(&SectionInput::new("Password1", &config));
        assert_eq!(
            result,
            vec!["Not enough symbols in password, a minimum of 1 required.".to_string()]
        );
    }

    #[test]
    fn test_symbol_count_section_too_many() {
        let config = PolicyConfig::default();
        let result = symbol_count_section(&SectionInput::new("Pass1#_!#", &config));
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("Too many symbols"));
    }

    #[test]
    fn test_symbol_count_section_none_allowed() {
        let config = PolicyConfig {
            min_symbols: 0,
            max_symbols: 0,
            ..PolicyConfig::default()
        };
        let result = symbol_count_section(&SectionInput::new("Pass1#", &config));
        assert_eq!(
            result,
            vec!["You are not allowed any symbols in password, please remove them.".to_string()]
        );
    }

    #[test]
    fn test_symbol_minimum_guarded_by_max_symbols() {
        // min_symbols above zero is ignored once max_symbols is zero
        let config = PolicyConfig {
            min_symbols: 2,
            max_symbols: 0,
            ..PolicyConfig::default()
        };
        assert!(symbol_count_section(&SectionInput::new("Password1", &config)).is_empty());
    }

    #[test]
    fn test_allowed_symbols_section_one_error_per_occurrence() {
        let config = PolicyConfig::default();
        let result = allowed_symbols_section(&SectionInput::new("Pa$s$w0rd#", &config));
        assert_eq!(result.len(), 2);
        assert_eq!(
            result[0],
            "Non specified symbol $ used in password, please use one of #_!."
        );
        assert_eq!(result[0], result[1]);
    }

    #[test]
    fn test_allowed_symbols_section_skipped_without_symbols() {
        let config = PolicyConfig {
            min_symbols: 0,
            max_symbols: 0,
            ..PolicyConfig::default()
        };
        assert!(allowed_symbols_section(&SectionInput::new("Pa$$word1", &config)).is_empty());
    }

    #[test]
    fn test_allowed_symbols_section_pass() {
        let config = PolicyConfig::default();
        assert!(allowed_symbols_section(&SectionInput::new("Pass_w0rd#", &config)).is_empty());
    }
}
