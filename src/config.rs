#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

/// Controls what `set_credit` does for a course that was never added.
///
/// The original behavior is permissive: a credit entry may be written for a
/// course missing from the course list, leaving a credit without a matching
/// enrollment. The strict mode turns that write into a silent no-op, in line
/// with how the other setters treat unknown courses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditPolicy {
    /// Allow credit writes for courses the student is not enrolled in.
    #[default]
    Permissive,
    /// Ignore credit writes for courses the student is not enrolled in.
    Strict,
}

impl CreditPolicy {
    /// Reads the policy from `ROLLBOOK_STRICT_CREDITS`; unset, empty, `0`,
    /// and `false` all mean the permissive default.
    pub fn from_env() -> CreditPolicy {
        match std::env::var("ROLLBOOK_STRICT_CREDITS") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" => CreditPolicy::Permissive,
                _ => CreditPolicy::Strict,
            },
            Err(_) => CreditPolicy::Permissive,
        }
    }
}
