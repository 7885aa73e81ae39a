//! Localization provider interface and view filtering.
//!
//! The library derives dotted keys (`anime_type.baku_on`) and hands them to
//! a consumer-supplied [`Localizer`]; it ships no translation storage of
//! its own.

/// Supplies localized display text for derived keys.
pub trait Localizer {
    /// Returns the localized text for `key`.
    ///
    /// Missing-key behavior is the provider's own contract — a marker
    /// string, a fallback, a panic. The result is passed through untouched.
    fn translate(&self, key: &str) -> String;
}

/// Label filters applied when building a collection view.
///
/// `only` and `except` are both applied when both are set: a member is kept
/// when its label appears in `only` (if set) and does not appear in
/// `except`. Label matching folds ASCII case, like parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewFilter<'a> {
    /// Keep only members whose label appears here, when set.
    pub only: Option<&'a [&'a str]>,
    /// Drop members whose label appears here.
    pub except: Option<&'a [&'a str]>,
}

impl ViewFilter<'_> {
    pub(crate) fn admits(&self, label: &str) -> bool {
        let listed = |list: &[&str]| list.iter().any(|entry| entry.eq_ignore_ascii_case(label));
        self.only.is_none_or(listed) && !self.except.is_some_and(listed)
    }
}
