//! Password strength evaluation library
//!
//! This library evaluates a candidate password against a weak-password
//! blocklist and five structural criteria, and maps the result to a
//! qualitative strength rating plus remediation hints. It is an advisory
//! tool, not an authentication system: nothing is hashed, stored, or
//! checked against any account.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-based evaluation hand-off
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-advisor` prompt-and-print binary
//!
//! # Environment Variables
//!
//! - `PWD_BLOCKLIST_PATH`: Custom path to the blocklist file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_advisor::{Blocklist, evaluate_password};
//! use secrecy::SecretString;
//!
//! // Load the blocklist once at startup; evaluations borrow it read-only.
//! let blocklist = Blocklist::from_default_path().expect("Failed to load blocklist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password(&password, &blocklist);
//!
//! println!("Strength: {}", evaluation.level());
//! for hint in evaluation.suggestions() {
//!     println!("- {}", hint);
//! }
//! ```

// Internal modules
mod advisor;
mod blocklist;
mod criteria;
mod evaluator;
mod report;

// Public API
pub use advisor::suggest;
pub use blocklist::{Blocklist, BlocklistError, WEAK_PATTERNS};
pub use criteria::{MIN_LENGTH, SPECIAL_CHARS};
pub use evaluator::evaluate_password;
pub use report::{CriterionReport, Evaluation, StrengthLevel, StructuralCriteria};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
