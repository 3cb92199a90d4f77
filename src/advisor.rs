//! Advisory mapper - turns a criterion report into remediation hints.

use crate::report::CriterionReport;

pub const AVOID_COMMON: &str = "Avoid using common passwords or patterns.";
pub const INCREASE_LENGTH: &str = "Increase the length to at least 8 characters.";
pub const ADD_UPPERCASE: &str = "Add at least one uppercase letter.";
pub const ADD_LOWERCASE: &str = "Add at least one lowercase letter.";
pub const ADD_DIGIT: &str = "Add at least one digit.";
pub const ADD_SPECIAL: &str = "Add at least one special character (e.g., !, @, #, etc.).";

/// Maps a criterion report to an ordered list of remediation hints.
///
/// A blocklisted report yields exactly one hint, since the structural
/// criteria were never evaluated on that path. Otherwise one hint is
/// appended per unsatisfied criterion, in a fixed order: length,
/// uppercase, lowercase, digit, special. A fully satisfied report
/// yields an empty list.
pub fn suggest(report: &CriterionReport) -> Vec<&'static str> {
    let criteria = match report {
        CriterionReport::Blocklisted => return vec![AVOID_COMMON],
        CriterionReport::Structural(criteria) => criteria,
    };

    let mut suggestions = Vec::new();
    if !criteria.length {
        suggestions.push(INCREASE_LENGTH);
    }
    if !criteria.uppercase {
        suggestions.push(ADD_UPPERCASE);
    }
    if !criteria.lowercase {
        suggestions.push(ADD_LOWERCASE);
    }
    if !criteria.digit {
        suggestions.push(ADD_DIGIT);
    }
    if !criteria.special {
        suggestions.push(ADD_SPECIAL);
    }
    suggestions
}
