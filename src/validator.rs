//! Password validator - runs the policy sections in order.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::{PasswordPolicy, PolicyConfig, normalize};
use crate::sections::{
    Section, SectionInput, allowed_symbols_section, length_section, letters_section,
    lower_case_section, numbers_section, symbol_count_section, upper_case_section,
};

/// Outcome of a validation: the password passes iff no errors were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Validates `password` against `config` after normalizing it.
///
/// A length violation stops validation with a single error; every other
/// section runs and contributes its own messages.
pub fn validate_password(config: &PolicyConfig, password: &str) -> ValidationResult {
    let config = normalize(config);
    let input = SectionInput::new(password, &config);

    let errors = length_section(&input);
    if !errors.is_empty() {
        return ValidationResult { errors };
    }

    // Orchestrator: execute sections in sequence
    let sections: [Section; 6] = [
        ("numbers", numbers_section),
        ("letters", letters_section),
        ("lower_case", lower_case_section),
        ("upper_case", upper_case_section),
        ("symbol_count", symbol_count_section),
        ("allowed_symbols", allowed_symbols_section),
    ];

    let mut errors = Vec::new();
    for (_section_name, section_fn) in sections {
        let reasons = section_fn(&input);
        #[cfg(feature = "tracing")]
        {
            if !reasons.is_empty() {
                tracing::debug!(
                    "Validation section {} failed: {} reasons",
                    _section_name,
                    reasons.len()
                );
            }
        }
        errors.extend(reasons);
    }

    ValidationResult { errors }
}

impl PasswordPolicy {
    /// Validates the password and returns every rule it breaks.
    pub fn validate(&self, password: &SecretString) -> ValidationResult {
        validate_password(self.raw_config(), password.expose_secret())
    }
}
