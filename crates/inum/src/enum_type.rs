//! The enum-type abstraction: one trait implemented per concrete type.
//!
//! [`Inum`] needs a single method — [`registry`] — and provides the whole
//! public contract on top of it: parsing, comparison, member arithmetic,
//! iteration, localization. [`declare_inum!`] generates the impl, but any
//! type with a `'static` registry can implement the trait by hand.
//!
//! [`registry`]: Inum::registry
//! [`declare_inum!`]: crate::declare_inum

use std::cmp::Ordering;

use crate::{
    error::NotDefined,
    input::ParseInput,
    localize::{Localizer, ViewFilter},
    member::Member,
    registry::Registry,
};

/// A concrete enum type backed by a sealed [`Registry`].
pub trait Inum: 'static {
    /// The type's registry. Built once; immutable afterwards.
    fn registry() -> &'static Registry;

    /// Parses a heterogeneous input to a member of this type, or `None`.
    ///
    /// See [`Registry::parse`] for the dispatch rules.
    fn parse<'a>(input: impl Into<ParseInput<'a>>) -> Option<&'static Member> {
        Self::registry().parse(input)
    }

    /// Like [`parse`], but absence becomes a [`NotDefined`] error.
    ///
    /// [`parse`]: Self::parse
    fn parse_or_fail<'a>(input: impl Into<ParseInput<'a>>) -> Result<&'static Member, NotDefined> {
        Self::registry().parse_or_fail(input)
    }

    /// Iterates members in definition order. Finite and restartable.
    fn members() -> std::slice::Iter<'static, Member> {
        Self::registry().iter()
    }

    /// Labels in definition order.
    #[must_use]
    fn labels() -> Vec<&'static str> {
        Self::registry().labels()
    }

    /// Values in definition order.
    #[must_use]
    fn values() -> Vec<i64> {
        Self::registry().values()
    }

    /// `(label, value)` pairs in definition order.
    #[must_use]
    fn pairs() -> Vec<(&'static str, i64)> {
        Self::registry().pairs()
    }

    /// Number of members.
    #[must_use]
    fn len() -> usize {
        Self::registry().len()
    }

    /// Three-way comparison by value after coercing both sides through
    /// [`parse`]; `None` when either side fails to parse.
    ///
    /// [`parse`]: Self::parse
    fn compare<'a, 'b>(
        left: impl Into<ParseInput<'a>>,
        right: impl Into<ParseInput<'b>>,
    ) -> Option<Ordering> {
        Self::registry().compare(left, right)
    }

    /// True when all three inputs parse and `input`'s value lies in
    /// `[low, high]`.
    fn between<'a, 'b, 'c>(
        input: impl Into<ParseInput<'a>>,
        low: impl Into<ParseInput<'b>>,
        high: impl Into<ParseInput<'c>>,
    ) -> bool {
        Self::registry().between(input, low, high)
    }

    /// The member at `member.value() + delta`, or `None` when the sum is
    /// not a defined value.
    fn add(member: &Member, delta: i64) -> Option<&'static Member> {
        Self::registry().offset(member, delta)
    }

    /// The member at `member.value() - delta`, or `None` when the
    /// difference is not a defined value.
    fn subtract(member: &Member, delta: i64) -> Option<&'static Member> {
        member
            .value()
            .checked_sub(delta)
            .and_then(|value| Self::registry().find_value(value))
    }

    /// True when `input` parses to exactly `member`.
    fn equals<'a>(member: &Member, input: impl Into<ParseInput<'a>>) -> bool {
        Self::registry().equals(member, input)
    }

    /// True when `input` parses to any member of this type.
    fn is_defined<'a>(input: impl Into<ParseInput<'a>>) -> bool {
        Self::registry().is_defined(input)
    }

    /// Derives the localization key for a member.
    ///
    /// The default scheme is the registry's: snake-cased type name joined
    /// to the snake-cased label by a dot. Override this method to key
    /// translations differently; [`translate`] and [`collection_view`]
    /// pick the override up.
    ///
    /// [`translate`]: Self::translate
    /// [`collection_view`]: Self::collection_view
    #[must_use]
    fn localization_key(member: &Member) -> String {
        Self::registry().localization_key(member)
    }

    /// Looks [`localization_key`] up in `localizer` and returns its text.
    ///
    /// [`localization_key`]: Self::localization_key
    fn translate(member: &Member, localizer: &impl Localizer) -> String {
        localizer.translate(&Self::localization_key(member))
    }

    /// `(display_text, value)` pairs for UI population, in definition
    /// order, filtered by label; display text comes from [`translate`].
    ///
    /// [`translate`]: Self::translate
    fn collection_view(localizer: &impl Localizer, filter: ViewFilter<'_>) -> Vec<(String, i64)> {
        Self::members()
            .filter(|m| filter.admits(m.label()))
            .map(|m| (Self::translate(m, localizer), m.value()))
            .collect()
    }
}
