//! Runtime metadata for mapped record types: attribute names and storage
//! kinds, the mass-assignment policy, and the instance read seam.

mod field;
mod record;

pub use field::{AttributeKind, AttributeModel};
pub use record::{AssignmentPolicy, Record, RecordModel};
