//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::blocklist::Blocklist;
use crate::criteria::{
    digit_criterion, length_criterion, lowercase_criterion, special_criterion, uppercase_criterion,
};
use crate::report::{CriterionReport, Evaluation, StructuralCriteria};

/// Evaluates password strength against the supplied blocklist.
///
/// A blocklisted password short-circuits to the single-entry report; no
/// structural criterion runs on that path. Otherwise the five structural
/// criteria are checked against the original, case-preserved password.
///
/// Pure given its inputs: the blocklist is read-only, nothing is stored,
/// and calling twice with the same inputs returns identical results.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `blocklist` - The loaded blocklist, shared read-only
///
/// # Returns
/// An [`Evaluation`] carrying the criterion report.
pub fn evaluate_password(password: &SecretString, blocklist: &Blocklist) -> Evaluation {
    let pwd = password.expose_secret();

    if blocklist.is_blocklisted(pwd) {
        return Evaluation {
            report: CriterionReport::Blocklisted,
        };
    }

    let criteria = StructuralCriteria {
        length: length_criterion(pwd),
        uppercase: uppercase_criterion(pwd),
        lowercase: lowercase_criterion(pwd),
        digit: digit_criterion(pwd),
        special: special_criterion(pwd),
    };

    Evaluation {
        report: CriterionReport::Structural(criteria),
    }
}

/// Async hand-off that sends the evaluation result via channel.
///
/// The evaluation itself stays synchronous; this only moves the result
/// onto a channel so a windowed collaborator can await it off its event
/// loop.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    blocklist: &Blocklist,
    tx: mpsc::Sender<Evaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let evaluation = evaluate_password(password, blocklist);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor;
    use crate::report::StrengthLevel;

    fn test_blocklist() -> Blocklist {
        Blocklist::from_iter(["monkey", "dragon", "sunshine", "admin"])
    }

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_evaluate_blocklisted_by_membership() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret("DRAGON"), &blocklist);

        assert_eq!(evaluation.report, CriterionReport::Blocklisted);
        assert_eq!(evaluation.level(), StrengthLevel::Weak);
    }

    #[test]
    fn test_evaluate_blocklisted_by_pattern_substring() {
        let blocklist = test_blocklist();

        // Substring match on "password" wins over structure.
        let evaluation = evaluate_password(&secret("password123"), &blocklist);
        assert_eq!(evaluation.report, CriterionReport::Blocklisted);

        // Structurally perfect, still blocklisted.
        let evaluation = evaluate_password(&secret("Qwerty123!A"), &blocklist);
        assert_eq!(evaluation.report, CriterionReport::Blocklisted);
        assert_eq!(evaluation.level(), StrengthLevel::Weak);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret(""), &blocklist);

        assert_eq!(
            evaluation.report,
            CriterionReport::Structural(StructuralCriteria {
                length: false,
                uppercase: false,
                lowercase: false,
                digit: false,
                special: false,
            })
        );
        assert_eq!(evaluation.level(), StrengthLevel::Weak);
        assert_eq!(evaluation.suggestions().len(), 5);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret("Abcdefg1"), &blocklist);

        assert_eq!(
            evaluation.report,
            CriterionReport::Structural(StructuralCriteria {
                length: true,
                uppercase: true,
                lowercase: true,
                digit: true,
                special: false,
            })
        );
        assert_eq!(evaluation.level(), StrengthLevel::Strong);
        assert_eq!(evaluation.suggestions(), vec![advisor::ADD_SPECIAL]);
    }

    #[test]
    fn test_evaluate_very_strong_password() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret("Abcdefg1!"), &blocklist);

        assert_eq!(evaluation.level(), StrengthLevel::VeryStrong);
        assert!(evaluation.suggestions().is_empty());
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret("abcdefg!"), &blocklist);

        assert_eq!(
            evaluation.report,
            CriterionReport::Structural(StructuralCriteria {
                length: true,
                uppercase: false,
                lowercase: true,
                digit: false,
                special: true,
            })
        );
        assert_eq!(evaluation.level(), StrengthLevel::Moderate);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let blocklist = test_blocklist();
        let evaluation = evaluate_password(&secret("ab!"), &blocklist);

        assert_eq!(evaluation.level(), StrengthLevel::Weak);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let blocklist = test_blocklist();
        let pwd = secret("SomePhrase9");

        let first = evaluate_password(&pwd, &blocklist);
        let second = evaluate_password(&pwd, &blocklist);
        assert_eq!(first, second);
    }

    #[test]
    fn test_satisfying_another_criterion_never_lowers_level() {
        let blocklist = test_blocklist();

        // abcdefg! (Moderate) gains a digit, then an uppercase letter.
        let steps = ["abcdefg!", "abcdefg1!", "Abcdefg1!"];
        let mut previous = StrengthLevel::Weak;
        for step in steps {
            let level = evaluate_password(&secret(step), &blocklist).level();
            assert!(level >= previous, "{} regressed to {}", step, level);
            previous = level;
        }
    }
}
