//! Composable query filters produced by the scope builder.
//!
//! The predicate layer is pure and schema-agnostic: construction, AND/OR
//! composition, and evaluation against row-shaped data. Execution belongs
//! to the external query layer that consumes the built filter.

mod builder;
mod predicate;

pub use builder::Query;
pub use predicate::{CompareOp, ComparePredicate, Predicate, Row};
