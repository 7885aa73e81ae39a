//! The field binding: typed access and per-member predicates.

use std::marker::PhantomData;

use indexmap::IndexMap;
use inum::{Inum, Member, ParseInput};

use crate::validate::{InclusionRule, ValidationPipeline};

/// Host-side storage of one nullable integer field per name.
///
/// The binding round-trips everything through this trait; consistency of
/// the underlying storage is the host's concern.
pub trait EnumStore {
    /// Reads the raw integer stored under `field`, if any.
    fn read_field(&self, field: &str) -> Option<i64>;

    /// Stores `value` under `field`, replacing whatever was there.
    fn write_field(&mut self, field: &str, value: Option<i64>);
}

/// Binds an enum type to one field of a host record.
///
/// Construction walks the enum once and materializes a definition-ordered
/// predicate table, one entry per member, named `<prefix_><snake_label>`
/// (no prefix by default). The table is the capability-object rendition of
/// per-member predicate methods: [`check`] answers any of its names
/// against the current field value.
///
/// ```
/// inum::declare_inum! {
///     pub enum Drink { REDBULL, MONSTER, BURN }
/// }
///
/// use inum_record::{Binding, EnumStore};
///
/// struct Vending {
///     drink: Option<i64>,
/// }
///
/// impl EnumStore for Vending {
///     fn read_field(&self, field: &str) -> Option<i64> {
///         (field == "drink").then_some(self.drink).flatten()
///     }
///     fn write_field(&mut self, field: &str, value: Option<i64>) {
///         if field == "drink" {
///             self.drink = value;
///         }
///     }
/// }
///
/// let binding = Binding::<Drink>::new("drink");
/// let mut record = Vending { drink: None };
/// binding.set(&mut record, "REDBULL");
/// assert!(binding.check(&record, "redbull"));
/// assert!(!binding.check(&record, "monster"));
/// ```
///
/// [`check`]: Self::check
#[derive(Debug, Clone)]
pub struct Binding<E: Inum> {
    field: Box<str>,
    allow_nil: bool,
    validate_inclusion: bool,
    predicates: IndexMap<Box<str>, i64>,
    _enum: PhantomData<fn() -> E>,
}

impl<E: Inum> Binding<E> {
    /// Binds `field` with defaults: no predicate prefix, nil allowed,
    /// inclusion validation off.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        let mut binding = Self {
            field: field.into().into_boxed_str(),
            allow_nil: true,
            validate_inclusion: false,
            predicates: IndexMap::new(),
            _enum: PhantomData,
        };
        binding.rebuild_predicates(None);
        binding
    }

    /// Prefixes every predicate name with `<prefix>_`.
    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.rebuild_predicates(Some(prefix));
        self
    }

    /// Sets whether the emitted inclusion rule accepts an absent raw
    /// value.
    #[must_use]
    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    /// Turns inclusion-rule emission on or off.
    #[must_use]
    pub fn validate_inclusion(mut self, validate: bool) -> Self {
        self.validate_inclusion = validate;
        self
    }

    fn rebuild_predicates(&mut self, prefix: Option<&str>) {
        self.predicates = E::members()
            .map(|member| {
                let name = match prefix {
                    Some(prefix) => format!("{prefix}_{}", member.underscore()),
                    None => member.underscore(),
                };
                (name.into_boxed_str(), member.value())
            })
            .collect();
    }

    /// The bound field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Reads the field and parses it to a member, or `None` for an absent
    /// or unparseable raw value.
    pub fn get(&self, store: &impl EnumStore) -> Option<&'static Member> {
        E::parse(store.read_field(&self.field))
    }

    /// Parses `input` and stores its value; unparseable or explicitly-nil
    /// input stores the absent marker. Returns the member stored, if any.
    pub fn set<'a>(
        &self,
        store: &mut impl EnumStore,
        input: impl Into<ParseInput<'a>>,
    ) -> Option<&'static Member> {
        let member = E::parse(input);
        store.write_field(&self.field, member.map(Member::value));
        member
    }

    /// True when the current raw field value is the member behind the
    /// named predicate. Unknown predicate names answer `false`.
    #[must_use]
    pub fn check(&self, store: &impl EnumStore, predicate: &str) -> bool {
        let Some(&value) = self.predicates.get(predicate) else {
            return false;
        };
        store.read_field(&self.field) == Some(value)
    }

    /// Predicate names in definition order.
    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(AsRef::as_ref)
    }

    /// The inclusion rule for the host's validation pipeline, when
    /// validation is enabled.
    #[must_use]
    pub fn inclusion_rule(&self) -> Option<InclusionRule> {
        self.validate_inclusion.then(|| InclusionRule {
            field: self.field.to_string(),
            allow_nil: self.allow_nil,
            allowed_values: E::values(),
        })
    }

    /// Pushes the inclusion rule into `pipeline`, when validation is
    /// enabled.
    pub fn install_validation(&self, pipeline: &mut impl ValidationPipeline) {
        if let Some(rule) = self.inclusion_rule() {
            pipeline.add_inclusion_rule(rule);
        }
    }
}
