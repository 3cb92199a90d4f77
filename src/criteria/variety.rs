//! Character variety criteria - uppercase, lowercase, digit, special.

/// The exhaustive set of characters satisfying the special criterion.
///
/// Fixed on purpose: characters outside it (`_`, `-`, space, and any
/// non-ASCII punctuation) never count as special. Widening the set would
/// silently change existing ratings.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks for at least one uppercase letter `A-Z`.
pub fn uppercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks for at least one lowercase letter `a-z`.
pub fn lowercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks for at least one decimal digit `0-9`.
pub fn digit_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_criterion(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
