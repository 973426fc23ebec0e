//! Diversity section - rewards passwords made of mostly distinct characters.

use std::collections::HashSet;

use super::SectionScore;

/// `10` if distinct characters make up at least 70% of the length.
///
/// Short strings pass easily and long ones rarely do; the ratio is kept
/// as is. The empty password gets nothing.
pub fn diversity_section(password: &str) -> SectionScore {
    let len = password.chars().count();
    if len == 0 {
        return 0;
    }
    let unique: HashSet<char> = password.chars().collect();
    if unique.len() * 10 >= len * 7 { 10 } else { 0 }
}
