use crate::value::Value;
use serde::Serialize;

///
/// FieldKind
///
/// Scalar wire kinds. Nested message fields are out of scope; unknown kinds
/// on an inbound payload are simply never declared here and thus ignored.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    String,
    Bytes,
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldDescriptor {
    /// Field name as used for attribute matching.
    pub name: &'static str,
    /// Wire index. Carried for diagnostics; the mapping rules never read it.
    pub number: u32,
    pub kind: FieldKind,
    /// Repeated fields never participate in attribute mapping.
    pub repeated: bool,
}

///
/// MessageDescriptor
///
/// Immutable, externally owned schema description. Field order is the
/// declaration order and is authoritative for the field table and for
/// searchable-field iteration.
///

#[derive(Clone, Debug, Serialize)]
pub struct MessageDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// Message
///
/// Instance access seam for one decoded wire message.
///
/// `get` returns `None` for an unset field — the unset sentinel — which is
/// distinct from a present-but-empty value such as `Value::Text("")` or
/// `Value::List([])`.
///

pub trait Message {
    fn descriptor(&self) -> &MessageDescriptor;

    fn get(&self, field: &str) -> Option<Value>;
}

///
/// TESTS
///
