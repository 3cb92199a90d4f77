//! Length criterion - checks password minimum length.

/// Minimum number of characters for the length criterion.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
///
/// Counts characters, not bytes, so a multi-byte character counts once.
pub fn length_criterion(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
