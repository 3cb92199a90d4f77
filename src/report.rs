//! Evaluation result types.

use std::fmt;

use crate::advisor;

/// Qualitative strength rating, ordered by increasing desirability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Satisfaction flags for the five structural criteria, evaluated against
/// the original, case-preserved password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralCriteria {
    /// At least [`MIN_LENGTH`](crate::MIN_LENGTH) characters.
    pub length: bool,
    /// At least one `A-Z`.
    pub uppercase: bool,
    /// At least one `a-z`.
    pub lowercase: bool,
    /// At least one `0-9`.
    pub digit: bool,
    /// At least one character from the fixed [`SPECIAL_CHARS`](crate::SPECIAL_CHARS) set.
    pub special: bool,
}

impl StructuralCriteria {
    /// Number of satisfied criteria, 0 through 5.
    pub fn score(&self) -> u8 {
        [self.length, self.uppercase, self.lowercase, self.digit, self.special]
            .iter()
            .filter(|&&satisfied| satisfied)
            .count() as u8
    }
}

/// Per-evaluation record of which checks ran and what they found.
///
/// Exactly one of the two shapes is produced per evaluation: a
/// blocklisted password short-circuits before any structural criterion
/// runs, so the two variants never mix. Downstream consumers (the
/// advisory mapper in particular) branch on this shape, not on the
/// derived [`StrengthLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionReport {
    /// The password matched the blocklist or a weak pattern.
    Blocklisted,
    /// The password cleared the blocklist; the five structural flags.
    Structural(StructuralCriteria),
}

impl CriterionReport {
    /// Derives the strength rating from the report.
    ///
    /// Only a full score of 5 rates Very Strong, 4 rates Strong, and
    /// exactly 3 rates Moderate; 2 or fewer is Weak. The partition is
    /// deliberate: a `>= 3` catch-all would also claim 4 and 5.
    pub fn level(&self) -> StrengthLevel {
        match self {
            Self::Blocklisted => StrengthLevel::Weak,
            Self::Structural(criteria) => match criteria.score() {
                5 => StrengthLevel::VeryStrong,
                4 => StrengthLevel::Strong,
                3 => StrengthLevel::Moderate,
                _ => StrengthLevel::Weak,
            },
        }
    }
}

/// Result of evaluating one password.
///
/// Holds the [`CriterionReport`]; the strength level and the suggestion
/// list are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub report: CriterionReport,
}

impl Evaluation {
    /// The strength rating for this evaluation.
    pub fn level(&self) -> StrengthLevel {
        self.report.level()
    }

    /// Remediation hints for this evaluation, in presentation order.
    pub fn suggestions(&self) -> Vec<&'static str> {
        advisor::suggest(&self.report)
    }
}
