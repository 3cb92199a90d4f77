//! Structural criteria
//!
//! Each module checks one aspect of the password's composition. The
//! checks run only on passwords that cleared the blocklist, and always
//! against the original casing.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_criterion};
pub use variety::{
    SPECIAL_CHARS, digit_criterion, lowercase_criterion, special_criterion, uppercase_criterion,
};
