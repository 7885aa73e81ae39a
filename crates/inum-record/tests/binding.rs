//! Binding scenarios against an in-memory record.
//!
//! The fixture mirrors the canonical usage: an enum with a gap in its
//! values bound to one nullable integer field, driven through every input
//! shape the setter accepts, then observed through predicates and the
//! emitted validation rule.

use inum_record::{Binding, EnumStore, InclusionRule, ValidationPipeline};
use pretty_assertions::assert_eq;

inum::declare_inum! {
    pub enum Anime {
        NYARUKO,
        MUROMISAN,
        NOURIN,
        KMB = 4,
    }
}

inum::declare_inum! {
    pub enum Drink {
        REDBULL,
        MONSTER,
        BURN,
    }
}

/// One-field record with name-checked access.
#[derive(Default)]
struct Show {
    anime: Option<i64>,
}

impl EnumStore for Show {
    fn read_field(&self, field: &str) -> Option<i64> {
        (field == "anime").then_some(self.anime).flatten()
    }

    fn write_field(&mut self, field: &str, value: Option<i64>) {
        if field == "anime" {
            self.anime = value;
        }
    }
}

/// Collects rules so tests can inspect what a binding installs.
#[derive(Default)]
struct RuleSink {
    rules: Vec<InclusionRule>,
}

impl ValidationPipeline for RuleSink {
    fn add_inclusion_rule(&mut self, rule: InclusionRule) {
        self.rules.push(rule);
    }
}

// =============================================================================
// 1. get/set round trips
// =============================================================================

/// Every parseable input shape stores the same raw value and reads back
/// the same singleton.
#[test]
fn set_accepts_every_input_shape() {
    let binding = Binding::<Anime>::new("anime");
    let mut record = Show::default();

    assert_eq!(binding.set(&mut record, 4), Some(Anime::KMB()));
    assert_eq!(record.anime, Some(4));
    assert_eq!(binding.get(&record), Some(Anime::KMB()));

    binding.set(&mut record, None::<i64>);
    assert_eq!(binding.set(&mut record, "KMB"), Some(Anime::KMB()));
    assert_eq!(record.anime, Some(4));

    binding.set(&mut record, None::<i64>);
    assert_eq!(binding.set(&mut record, "kmb"), Some(Anime::KMB()));
    assert_eq!(record.anime, Some(4));

    binding.set(&mut record, None::<i64>);
    assert_eq!(binding.set(&mut record, Anime::KMB()), Some(Anime::KMB()));
    assert_eq!(record.anime, Some(4));
    assert_eq!(binding.get(&record), Some(Anime::KMB()));
}

/// Unparseable and explicitly-nil inputs store the absent marker.
#[test]
fn set_stores_absent_for_unparseable_input() {
    let binding = Binding::<Anime>::new("anime");
    let mut record = Show { anime: Some(4) };

    assert_eq!(binding.set(&mut record, "Nothing"), None);
    assert_eq!(record.anime, None);

    record.anime = Some(4);
    assert_eq!(binding.set(&mut record, None::<i64>), None);
    assert_eq!(record.anime, None);
    assert_eq!(binding.get(&record), None);
}

/// A raw value outside the registry reads back as absent, not a panic.
#[test]
fn get_is_absent_for_raw_junk() {
    let binding = Binding::<Anime>::new("anime");
    let record = Show { anime: Some(3) };
    assert_eq!(binding.get(&record), None);
}

// =============================================================================
// 2. predicates
// =============================================================================

/// Setting the field through any equivalent input satisfies exactly the
/// matching predicate.
#[test]
fn predicates_follow_the_stored_member() {
    let binding = Binding::<Anime>::new("anime");
    let mut record = Show::default();

    binding.set(&mut record, 1);
    assert!(binding.check(&record, "muromisan"));
    assert!(!binding.check(&record, "kmb"));

    for input in ["KMB", "kmb"] {
        binding.set(&mut record, input);
        assert!(binding.check(&record, "kmb"));
        assert!(!binding.check(&record, "muromisan"));
    }

    binding.set(&mut record, Anime::KMB());
    assert!(binding.check(&record, "kmb"));

    // an empty field satisfies nothing
    binding.set(&mut record, None::<i64>);
    assert!(!binding.check(&record, "kmb"));

    // unknown predicate names are simply false
    assert!(!binding.check(&record, "made_up"));
}

/// Predicate names are snake-cased labels in definition order.
#[test]
fn predicate_names_are_definition_ordered() {
    let binding = Binding::<Anime>::new("anime");
    let names: Vec<&str> = binding.predicate_names().collect();
    assert_eq!(names, vec!["nyaruko", "muromisan", "nourin", "kmb"]);
}

/// A prefix is joined with an underscore before every name.
#[test]
fn prefixed_predicates() {
    let binding = Binding::<Drink>::new("drink").prefix("drink_type");
    let names: Vec<&str> = binding.predicate_names().collect();
    assert_eq!(names, vec!["drink_type_redbull", "drink_type_monster", "drink_type_burn"]);

    let mut record = Show::default();
    // the binding writes under its own field name; Show ignores others
    let binding_on_anime = Binding::<Anime>::new("anime").prefix("title");
    binding_on_anime.set(&mut record, "NOURIN");
    assert!(binding_on_anime.check(&record, "title_nourin"));
    assert!(!binding_on_anime.check(&record, "nourin"));
}

// =============================================================================
// 3. validation rules
// =============================================================================

/// No rule is emitted unless validation is enabled.
#[test]
fn validation_is_off_by_default() {
    let binding = Binding::<Anime>::new("anime");
    assert_eq!(binding.inclusion_rule(), None);

    let mut sink = RuleSink::default();
    binding.install_validation(&mut sink);
    assert!(sink.rules.is_empty());
}

/// The emitted rule carries the field, the nil policy, and the values in
/// definition order.
#[test]
fn inclusion_rule_contents() {
    let binding = Binding::<Anime>::new("anime").validate_inclusion(true).allow_nil(false);
    let rule = binding.inclusion_rule().unwrap();
    assert_eq!(
        rule,
        InclusionRule {
            field: "anime".to_string(),
            allow_nil: false,
            allowed_values: vec![0, 1, 2, 4],
        }
    );

    let mut sink = RuleSink::default();
    binding.install_validation(&mut sink);
    assert_eq!(sink.rules, vec![rule]);
}

/// The rule's serialized form is the flat declarative shape hosts consume.
#[test]
fn inclusion_rule_serializes_flat() {
    let binding = Binding::<Anime>::new("anime").validate_inclusion(true);
    let json = serde_json::to_value(binding.inclusion_rule().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "field": "anime",
            "allow_nil": true,
            "allowed_values": [0, 1, 2, 4],
        })
    );
}
