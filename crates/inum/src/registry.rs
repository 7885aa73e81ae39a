//! Per-type member registry: definition, lookup, parsing, and comparison.
//!
//! A [`Registry`] stores members in a vector (insertion order = definition
//! order) and resolves labels and values through hash maps holding indices
//! into that vector, so every lookup is O(1) average and every listing
//! operation walks definition order. [`RegistryBuilder`] is the only
//! definition surface; once [`finish`] runs the registry is immutable and
//! safe for unsynchronized concurrent reads.
//!
//! [`finish`]: RegistryBuilder::finish

use std::cmp::Ordering;

use ahash::AHashMap;
use indexmap::IndexMap;

use crate::{
    case::to_snake_case_scoped,
    error::{DefineError, LabelIssue, NotDefined},
    input::ParseInput,
    localize::{Localizer, ViewFilter},
    member::Member,
};

/// Checks the identifier policy: ASCII, first char alphabetic or `_`,
/// remainder alphanumeric or `_`.
fn label_issue(label: &str) -> Option<LabelIssue> {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return Some(LabelIssue::Empty);
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Some(LabelIssue::InvalidCharacter);
    }
    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some(LabelIssue::InvalidCharacter);
    }
    None
}

/// Accumulates member definitions for one enum type.
///
/// Each `define` call is transactional: on failure the builder keeps its
/// prior contents and stays usable. Definition order is preserved into the
/// finished [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    type_name: Box<str>,
    members: Vec<Member>,
    by_label: AHashMap<String, u32>,
    by_value: AHashMap<i64, u32>,
}

impl RegistryBuilder {
    /// Defines a member with an autoincremented value.
    ///
    /// The value is the current member count, so a run of `define` calls
    /// yields `0, 1, 2, …`. After an explicit [`define_with`] the base is
    /// still the count — not the highest value used — so a later implicit
    /// value can collide with an earlier explicit one, which fails with
    /// [`DefineError::DuplicateValue`].
    ///
    /// [`define_with`]: Self::define_with
    pub fn define(&mut self, label: &str) -> Result<&Member, DefineError> {
        let value = i64::try_from(self.members.len()).expect("member count fits in i64");
        self.insert(label, value)
    }

    /// Defines a member with an explicit value.
    pub fn define_with(&mut self, label: &str, value: i64) -> Result<&Member, DefineError> {
        self.insert(label, value)
    }

    fn insert(&mut self, label: &str, value: i64) -> Result<&Member, DefineError> {
        if let Some(issue) = label_issue(label) {
            return Err(DefineError::InvalidLabel {
                label: label.to_string(),
                issue,
            });
        }
        let folded = label.to_ascii_uppercase();
        if self.by_label.contains_key(&folded) {
            return Err(DefineError::InvalidLabel {
                label: label.to_string(),
                issue: LabelIssue::AlreadyDefined,
            });
        }
        if let Some(&index) = self.by_value.get(&value) {
            return Err(DefineError::DuplicateValue {
                label: label.to_string(),
                value,
                existing_label: self.members[index as usize].label().to_string(),
            });
        }

        let index = u32::try_from(self.members.len()).expect("registry index fits in u32");
        self.members.push(Member::new(label, value));
        self.by_label.insert(folded, index);
        self.by_value.insert(value, index);
        Ok(&self.members[index as usize])
    }

    /// Seals the builder into an immutable [`Registry`].
    #[must_use]
    pub fn finish(self) -> Registry {
        debug_assert_eq!(self.members.len(), self.by_label.len());
        debug_assert_eq!(self.members.len(), self.by_value.len());
        Registry {
            type_name: self.type_name,
            members: self.members.into_boxed_slice(),
            by_label: self.by_label,
            by_value: self.by_value,
        }
    }
}

/// The sealed label/value registry of one enum type.
///
/// Holds the ordered members and both lookup maps. Every listing operation
/// (`labels`, `values`, `pairs`, `to_map`, iteration, collection views)
/// walks definition order — there is no value-sorted variant.
#[derive(Debug)]
pub struct Registry {
    type_name: Box<str>,
    members: Box<[Member]>,
    by_label: AHashMap<String, u32>,
    by_value: AHashMap<i64, u32>,
}

impl Registry {
    /// Starts a builder for an enum type with the given name.
    ///
    /// The name feeds localization-key derivation; a `::`-scoped name maps
    /// its separators to `.` there (`Shop::FruitType` ->
    /// `shop.fruit_type.…`).
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            type_name: type_name.into().into_boxed_str(),
            members: Vec::new(),
            by_label: AHashMap::new(),
            by_value: AHashMap::new(),
        }
    }

    /// The enum type's name as given at build time.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no members are defined.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in definition order. Finite and restartable.
    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// The member at `index` in definition order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    /// Labels in definition order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.members.iter().map(Member::label).collect()
    }

    /// Values in definition order.
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.members.iter().map(Member::value).collect()
    }

    /// `(label, value)` pairs in definition order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, i64)> {
        self.members.iter().map(|m| (m.label(), m.value())).collect()
    }

    /// Label -> value map preserving definition order.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<&str, i64> {
        self.members.iter().map(|m| (m.label(), m.value())).collect()
    }

    /// Looks a member up by label, folding ASCII case.
    #[must_use]
    pub fn find_label(&self, label: &str) -> Option<&Member> {
        let index = *self.by_label.get(&label.to_ascii_uppercase())?;
        Some(&self.members[index as usize])
    }

    /// Looks a member up by value.
    #[must_use]
    pub fn find_value(&self, value: i64) -> Option<&Member> {
        let index = *self.by_value.get(&value)?;
        Some(&self.members[index as usize])
    }

    /// True when `member` is one of this registry's members.
    #[must_use]
    pub fn contains(&self, member: &Member) -> bool {
        self.find_value(member.value()).is_some_and(|found| found == member)
    }

    /// Parses a heterogeneous input to a member, or `None`.
    ///
    /// Dispatch by input shape: integers (and text made entirely of ASCII
    /// decimal digits) resolve by value; other text resolves by label,
    /// folding ASCII case; a member resolves to this registry's own
    /// singleton or nothing. Absence is the answer for anything else —
    /// this path never fails.
    pub fn parse<'a, 'r>(&'r self, input: impl Into<ParseInput<'a>>) -> Option<&'r Member> {
        match input.into() {
            ParseInput::None => None,
            ParseInput::Int(value) => self.find_value(value),
            ParseInput::Text(text) => {
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    text.parse::<i64>().ok().and_then(|value| self.find_value(value))
                } else {
                    self.find_label(text)
                }
            }
            ParseInput::Member(member) => {
                self.find_value(member.value()).filter(|found| *found == member)
            }
        }
    }

    /// Like [`parse`], but absence becomes a [`NotDefined`] error.
    ///
    /// [`parse`]: Self::parse
    pub fn parse_or_fail<'a, 'r>(
        &'r self,
        input: impl Into<ParseInput<'a>>,
    ) -> Result<&'r Member, NotDefined> {
        let input = input.into();
        self.parse(input).ok_or_else(|| NotDefined {
            type_name: self.type_name.to_string(),
            input: input.to_string(),
        })
    }

    /// Three-way comparison by value after coercing both sides through
    /// [`parse`]; `None` when either side fails to parse. The sentinel
    /// keeps ordering checks total without turning junk operands into
    /// errors.
    ///
    /// [`parse`]: Self::parse
    pub fn compare<'a, 'b>(
        &self,
        left: impl Into<ParseInput<'a>>,
        right: impl Into<ParseInput<'b>>,
    ) -> Option<Ordering> {
        match (self.parse(left), self.parse(right)) {
            (Some(a), Some(b)) => Some(a.value().cmp(&b.value())),
            _ => None,
        }
    }

    /// True when all three inputs parse and `input`'s value lies in
    /// `[low, high]`.
    pub fn between<'a, 'b, 'c>(
        &self,
        input: impl Into<ParseInput<'a>>,
        low: impl Into<ParseInput<'b>>,
        high: impl Into<ParseInput<'c>>,
    ) -> bool {
        let (Some(member), Some(low), Some(high)) =
            (self.parse(input), self.parse(low), self.parse(high))
        else {
            return false;
        };
        low.value() <= member.value() && member.value() <= high.value()
    }

    /// The member whose value is `member.value() + delta`, if defined.
    ///
    /// Arithmetic may land off the registry (or overflow `i64`); the result
    /// is then `None` and callers must handle absence.
    #[must_use]
    pub fn offset(&self, member: &Member, delta: i64) -> Option<&Member> {
        member
            .value()
            .checked_add(delta)
            .and_then(|value| self.find_value(value))
    }

    /// True when `input` parses to exactly `member`.
    pub fn equals<'a>(&self, member: &Member, input: impl Into<ParseInput<'a>>) -> bool {
        self.parse(input).is_some_and(|found| found == member)
    }

    /// True when `input` parses to any member.
    pub fn is_defined<'a>(&self, input: impl Into<ParseInput<'a>>) -> bool {
        self.parse(input).is_some()
    }

    /// The default localization key: snake-cased type name (`::` mapped to
    /// `.`) joined to the snake-cased label by a dot.
    ///
    /// `AnimeType` / `BAKU_ON` -> `anime_type.baku_on`. Enum types can
    /// override the scheme through [`Inum::localization_key`].
    ///
    /// [`Inum::localization_key`]: crate::Inum::localization_key
    #[must_use]
    pub fn localization_key(&self, member: &Member) -> String {
        format!(
            "{}.{}",
            to_snake_case_scoped(&self.type_name, "."),
            member.underscore()
        )
    }

    /// Looks the default localization key up in `localizer`.
    pub fn translate(&self, member: &Member, localizer: &impl Localizer) -> String {
        localizer.translate(&self.localization_key(member))
    }

    /// `(display_text, value)` pairs for UI population, in definition
    /// order, filtered by label. Display text comes from [`translate`].
    ///
    /// [`translate`]: Self::translate
    pub fn collection_view(
        &self,
        localizer: &impl Localizer,
        filter: ViewFilter<'_>,
    ) -> Vec<(String, i64)> {
        self.members
            .iter()
            .filter(|m| filter.admits(m.label()))
            .map(|m| (self.translate(m, localizer), m.value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
