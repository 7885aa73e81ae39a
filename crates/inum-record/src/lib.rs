//! Record-field binding for `inum` enum types.
//!
//! This crate adapts an [`inum::Inum`] type to a host record that stores a
//! nullable integer: a [`Binding`] wraps one field name and exposes a typed
//! getter, a parse-anything setter, one boolean predicate per member, and a
//! declarative inclusion rule for the host's validation pipeline. The host
//! side stays behind two small traits — [`EnumStore`] for field storage and
//! [`ValidationPipeline`] for rule collection — so any persistence layer
//! can participate.

mod binding;
mod validate;

pub use crate::{
    binding::{Binding, EnumStore},
    validate::{InclusionRule, ValidationPipeline},
};
