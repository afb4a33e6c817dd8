//! Character class sections - minimum numbers, letters, lower and upper case.

use super::{SectionInput, SectionResult};

/// Checks the number of digits against `min_numbers`.
pub fn numbers_section(input: &SectionInput<'_>) -> SectionResult {
    let min = input.config.min_numbers;
    if input.counts.digits < min {
        return vec![format!(
            "Not enough numbers in password, a minimum of {} required.",
            min
        )];
    }
    Vec::new()
}

/// Checks the number of ASCII letters against `min_letters`.
pub fn letters_section(input: &SectionInput<'_>) -> SectionResult {
    let min = input.config.min_letters;
    if input.counts.letters < min {
        return vec![format!(
            "Not enough letters in password, a minimum of {} required.",
            min
        )];
    }
    Vec::new()
}

/// Checks lowercase letters. A minimum of zero disables the check.
pub fn lower_case_section(input: &SectionInput<'_>) -> SectionResult {
    let min = input.config.min_lower_case;
    if input.counts.lower < min && min != 0 {
        return vec![format!(
            "Not enough lower case letters in password, a minimum of {} required.",
            min
        )];
    }
    Vec::new()
}

/// Checks uppercase letters. A minimum of zero disables the check.
pub fn upper_case_section(input: &SectionInput<'_>) -> SectionResult {
    let min = input.config.min_upper_case;
    if input.counts.upper < min && min != 0 {
        return vec![format!(
            "Not enough upper case letters in password, a minimum of {} required.",
            min
        )];
    }
    Vec::new()
}
