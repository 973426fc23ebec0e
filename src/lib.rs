//! Password generation and session library
//!
//! This library generates random passwords from selectable character
//! classes, scores their strength, and keeps the passwords generated during
//! one session in an in-memory list with aggregate statistics.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async scoring and async clipboard copy
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`Settings::from_env`]:
//!
//! - `PWD_DEFAULT_LENGTH`, `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`: length slider
//!   (defaults 16, 4, 64)
//! - `PWD_DEFAULT_LABEL`: label for entries saved without one
//! - `PWD_DATE_FORMAT`: entry date format (default `%d/%m/%Y`)
//!
//! # Example
//!
//! ```rust
//! use pwd_session::{CharacterClass, GenerationOptions, Session, ThreadRandom, generate};
//!
//! let options = GenerationOptions::new(16)
//!     .with(CharacterClass::Lowercase)
//!     .with(CharacterClass::Digit);
//!
//! let password = generate(&options, &mut ThreadRandom).expect("a class is selected");
//!
//! let mut session = Session::new();
//! let entry = session.append(Some("example.org"), password);
//! println!("{}", entry.strength);
//!
//! let stats = session.stats();
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.average_length, 16);
//! ```

// Internal modules
mod clipboard;
mod config;
mod evaluator;
mod generator;
mod sections;
mod session;
mod types;

// Public API
pub use clipboard::{Clipboard, ClipboardError, CopyOutcome, copy_entry, copy_text};
pub use config::{ConfigError, Settings};
pub use evaluator::score;
pub use generator::{GenerateError, RandomSource, SeededRandom, ThreadRandom, generate};
pub use session::{EntryId, PasswordEntry, Session, SessionStats};
pub use types::{CharacterClass, GenerationOptions, StrengthLevel, StrengthResult, StyleTag};

#[cfg(feature = "async")]
pub use clipboard::copy_text_tx;

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, score_tx};

/// Generates a password, scores it and stores it in `session`.
///
/// This is the usual "generate" button flow. Nothing is stored when
/// generation fails.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidOptions`] if no character class is
/// selected.
pub fn generate_and_store<'s, R: RandomSource + ?Sized>(
    session: &'s mut Session,
    options: &GenerationOptions,
    rng: &mut R,
    label: Option<&str>,
) -> Result<&'s PasswordEntry, GenerateError> {
    let password = generate(options, rng)?;
    Ok(session.append(label, password))
}
