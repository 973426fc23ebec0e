//! Password scoring sections
//!
//! Each section checks one aspect of a password and awards points for it.
//! Sections are independent; the evaluator sums them.

mod diversity;
mod length;
mod variety;

pub use diversity::diversity_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Points awarded by a single section.
pub type SectionScore = u8;

/// Signature shared by every section.
pub type Section = fn(&str) -> SectionScore;
