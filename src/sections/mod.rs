//! Password validation sections
//!
//! Each section checks one rule of the policy and reports the violations it finds.

mod classes;
mod length;
mod symbols;

pub use classes::{letters_section, lower_case_section, numbers_section, upper_case_section};
pub use length::length_section;
pub use symbols::{allowed_symbols_section, symbol_count_section};

use crate::charset::ClassCounts;
use crate::policy::PolicyConfig;

/// What a section gets to look at.
pub struct SectionInput<'a> {
    pub password: &'a str,
    pub counts: ClassCounts,
    pub config: &'a PolicyConfig,
}

impl<'a> SectionInput<'a> {
    pub fn new(password: &'a str, config: &'a PolicyConfig) -> Self {
        Self {
            password,
            counts: ClassCounts::of(password),
            config,
        }
    }
}

/// Result type for section evaluation functions.
/// - empty - Section passed
/// - one message per violation otherwise
pub type SectionResult = Vec<String>;

/// A named section, run in order by the validator.
pub type Section = (&'static str, fn(&SectionInput<'_>) -> SectionResult);
