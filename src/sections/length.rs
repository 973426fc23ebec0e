//! Length section - awards points by length bucket.

use super::SectionScore;

const LONG_LENGTH: usize = 12;
const MEDIUM_LENGTH: usize = 8;

/// Awards points for password length, counted in characters.
///
/// # Returns
/// - `25` for 12 characters or more
/// - `15` for 8 to 11 characters
/// - `5` otherwise, including the empty password
pub fn length_section(password: &str) -> SectionScore {
    let len = password.chars().count();
    if len >= LONG_LENGTH {
        25
    } else if len >= MEDIUM_LENGTH {
        15
    } else {
        5
    }
}
