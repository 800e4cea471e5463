//! Core mapping engine for protorec: the runtime value vocabulary, temporal
//! types, wire-message and record metadata, the per-record-type mapper
//! registries, and the composable query filters produced by scope building.

// public exports are one module level down
pub mod error;
pub mod mapper;
pub mod message;
pub mod model;
pub mod query;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No registries or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        message::{Message, MessageDescriptor},
        model::{Record, RecordModel},
        query::{Predicate, Query},
        value::Value,
    };
}
