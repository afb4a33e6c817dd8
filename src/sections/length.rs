//! Length section - checks password minimum and maximum length.

use super::{SectionInput, SectionResult};

/// Checks if the password length is within the configured bounds.
///
/// Length is counted in characters. At most one message is produced: the
/// validator stops after this section when it fails.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let len = input.password.chars().count();
    let config = input.config;

    if len < config.min_length {
        return vec![format!(
            "Password must be at least {} characters long, current password is too short at {} characters.",
            config.min_length, len
        )];
    }
    if len > config.max_length {
        return vec![format!(
            "Password must be at most {} characters long, current password is too long at {} characters.",
            config.max_length, len
        )];
    }
    Vec::new()
}
