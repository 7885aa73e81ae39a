#![doc = include_str!("../../../README.md")]

mod case;
mod declare;
mod enum_type;
mod error;
mod input;
mod localize;
mod member;
mod registry;

pub use crate::{
    case::{to_snake_case, to_snake_case_scoped},
    enum_type::Inum,
    error::{DefineError, LabelIssue, NotDefined},
    input::ParseInput,
    localize::{Localizer, ViewFilter},
    member::Member,
    registry::{Registry, RegistryBuilder},
};
