//! Password policy library
//!
//! This library validates passwords against configurable composition rules,
//! scores their strength and generates random passwords satisfying the same
//! rules, with optional dictionary support.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-based scoring
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the dictionary used by
//!   [`FileDictionary::from_env`] (default: `./assets/words.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pwd_policy::{FileDictionary, PasswordPolicy, PolicyOptions};
//! use secrecy::SecretString;
//!
//! let mut policy = PasswordPolicy::with_options(PolicyOptions {
//!     min_length: Some(10),
//!     allowed_symbols: Some("#_!-".into()),
//!     ..PolicyOptions::default()
//! })
//! .with_dictionary(Arc::new(FileDictionary::from_env()));
//! policy.set_max_symbols(4);
//!
//! let password = SecretString::new("MyP4ss_word!".to_string().into());
//!
//! let result = policy.validate(&password);
//! for error in result.errors() {
//!     println!("{}", error);
//! }
//! println!("Score: {}", policy.score(&password));
//!
//! let generated = policy.generate();
//! assert!(policy.validate(&generated).is_valid());
//! ```

// Internal modules
mod charset;
mod dictionary;
mod generator;
mod policy;
mod scorer;
mod sections;
mod validator;

// Public API
pub use dictionary::{
    DICTIONARY_PATH_ENV, Dictionary, DictionaryError, FileDictionary, WordSource, dictionary_path,
};
pub use generator::generate_password;
pub use policy::{PasswordPolicy, PolicyConfig, PolicyOptions, SymbolInput, normalize};
pub use scorer::{PasswordScore, score_password};
pub use validator::{ValidationResult, validate_password};

#[cfg(feature = "async")]
pub use scorer::SCORE_DEBOUNCE;
