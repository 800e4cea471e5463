use crate::{model::field::AttributeModel, value::Value};
use serde::Serialize;

///
/// AssignmentPolicy
///
/// Mass-assignment restriction for bulk population from untrusted input.
/// Exactly one mode applies to a record type at a time.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum AssignmentPolicy {
    /// Every declared attribute may be mass-assigned.
    Unrestricted,
    /// Only the listed attributes may be mass-assigned.
    AllowList(&'static [&'static str]),
    /// The listed attributes may never be mass-assigned.
    DenyList(&'static [&'static str]),
}

impl AssignmentPolicy {
    #[must_use]
    pub fn permits(&self, name: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::AllowList(names) => names.contains(&name),
            Self::DenyList(names) => !names.contains(&name),
        }
    }
}

///
/// RecordModel
/// Minimal runtime model for one mapped record type.
///

#[derive(Clone, Debug, Serialize)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used in error messages.
    pub record_name: &'static str,
    /// Ordered attribute list.
    pub attributes: &'static [AttributeModel],
    pub policy: AssignmentPolicy,
}

impl RecordModel {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeModel> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

///
/// Record
///
/// Instance read seam for one persisted record.
///
/// `get` returns the attribute's current value via the record's own read
/// accessor; `None` means the record exposes no reader for that attribute.
///

pub trait Record {
    fn get(&self, attribute: &str) -> Option<Value>;
}

///
/// TESTS
///
