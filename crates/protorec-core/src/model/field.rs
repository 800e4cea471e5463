use serde::Serialize;

///
/// AttributeModel
/// Runtime attribute metadata used by the field table and coercion defaults.
///

#[derive(Clone, Debug, Serialize)]
pub struct AttributeModel {
    /// Attribute name as matched against wire-field names.
    pub name: &'static str,
    /// Storage kind. A lossy projection aligned with `Value` variants.
    pub kind: AttributeKind,
}

///
/// AttributeKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AttributeKind {
    Bool,
    Int,
    Uint,
    Float64,
    Text,
    Blob,
    Date,
    Time,
    Timestamp,
}

impl AttributeKind {
    /// Kinds the built-in epoch-seconds coercion applies to.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Timestamp)
    }
}

///
/// TESTS
///
