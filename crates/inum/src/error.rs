//! Definition-time and strict-parse errors.
//!
//! Definition errors abort the declaration that raised them: a failed
//! `define` leaves the builder exactly as it was before the call. Parse
//! failures are not errors at all (`parse` returns `None`); [`NotDefined`]
//! exists only for the strict [`parse_or_fail`] path.
//!
//! [`parse_or_fail`]: crate::Registry::parse_or_fail

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a label was rejected at definition time.
///
/// Uses strum derives so the snake_case string form is available for
/// messages and serialized payloads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum LabelIssue {
    /// The label was empty.
    Empty,
    /// The label began with a digit or contained a character outside
    /// `[A-Za-z0-9_]`.
    InvalidCharacter,
    /// Another member already uses this label. Labels fold ASCII case, so
    /// `KMB` and `kmb` collide.
    AlreadyDefined,
}

/// Error raised while defining an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefineError {
    /// The label fails the identifier policy or collides with an existing
    /// label.
    InvalidLabel {
        /// The rejected label as given.
        label: String,
        /// What was wrong with it.
        issue: LabelIssue,
    },
    /// The value collides with an existing member's value. Autoincrement
    /// uses the current member count as its base, so interleaving explicit
    /// and implicit values can land here too.
    DuplicateValue {
        /// The label being defined.
        label: String,
        /// The colliding value.
        value: i64,
        /// The label that already owns the value.
        existing_label: String,
    },
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLabel { label, issue } => {
                write!(f, "invalid label {label:?}: {issue}")
            }
            Self::DuplicateValue {
                label,
                value,
                existing_label,
            } => {
                write!(f, "value {value} for {label:?} is already taken by {existing_label:?}")
            }
        }
    }
}

impl std::error::Error for DefineError {}

/// Strict-parse failure: the input did not resolve to any member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotDefined {
    /// Name of the enum type that was queried.
    pub type_name: String,
    /// Rendered form of the rejected input.
    pub input: String,
}

impl fmt::Display for NotDefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not defined in {}", self.input, self.type_name)
    }
}

impl std::error::Error for NotDefined {}
