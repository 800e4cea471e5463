//! protorec — a mapping engine between wire messages and persisted records.
//!
//! ## Crate layout
//! - `core`: runtime values, temporal types, message/record metadata, the
//!   per-record-type mapper registries, and query filters.
//!
//! The `prelude` module mirrors the surface call sites actually use.

pub use protorec_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::error::MapperError;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        error::{ConfigurationError, InvalidConverterError, MapperError, ScopeNotFoundError},
        mapper::{ConverterRef, Direction, Mapper, TransformerRef},
        message::{FieldDescriptor, FieldKind, Message, MessageDescriptor},
        model::{AssignmentPolicy, AttributeKind, AttributeModel, Record, RecordModel},
        query::{CompareOp, Predicate, Query, Row},
        types::{Date, Time, Timestamp},
        value::Value,
    };
}
