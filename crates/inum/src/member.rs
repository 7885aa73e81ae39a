//! The member value object.

use std::{cmp::Ordering, fmt};

use serde::Serialize;

use crate::case::to_snake_case;

/// A single labeled integer member of an enum registry.
///
/// Members are created only by [`RegistryBuilder::define`] and live inside
/// their owning [`Registry`]; external code holds references. A registry
/// never contains two members sharing a label or a value, so structural
/// equality on `(label, value)` coincides with singleton identity for any
/// two references obtained from the same registry.
///
/// Serializes as `{label, value}`. There is deliberately no `Deserialize`
/// impl: a deserialized member would exist outside any registry.
///
/// [`Registry`]: crate::Registry
/// [`RegistryBuilder::define`]: crate::RegistryBuilder::define
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Member {
    label: Box<str>,
    value: i64,
}

impl Member {
    pub(crate) fn new(label: &str, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The label in its declared (canonical) case.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The integer value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The label converted to lowercase underscore form.
    ///
    /// Used for predicate names and localization keys (`BAKU_ON` ->
    /// `baku_on`, `BakuOn` -> `baku_on`).
    #[must_use]
    pub fn underscore(&self) -> String {
        to_snake_case(&self.label)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    /// Orders by value. The label tiebreak never fires inside one registry
    /// (values are unique there); it only keeps `Ord` consistent with `Eq`
    /// when members of unrelated registries are sorted together.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.label.cmp(&other.label))
    }
}
