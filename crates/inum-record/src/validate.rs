//! Declarative validation rules emitted by bindings.

use serde::{Deserialize, Serialize};

/// An inclusion rule restricting a raw field to an enum's values.
///
/// The rule is data, not behavior: the host validation pipeline decides
/// when and how to enforce it. Serializes to a flat `{field, allow_nil,
/// allowed_values}` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionRule {
    /// Name of the bound field.
    pub field: String,
    /// Whether an absent (`None`) raw value passes.
    pub allow_nil: bool,
    /// The enum's values in definition order.
    pub allowed_values: Vec<i64>,
}

/// A host validation pipeline that collects declarative rules.
pub trait ValidationPipeline {
    /// Accepts an inclusion rule for a bound field.
    fn add_inclusion_rule(&mut self, rule: InclusionRule);
}
