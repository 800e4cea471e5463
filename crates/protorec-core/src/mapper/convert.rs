use crate::{
    model::AttributeKind,
    types::{Date, Time, Timestamp},
    value::Value,
};
use std::sync::Arc;

/// Resolved converter handle: one value in, one value out.
pub type ConvertFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

///
/// Direction
///
/// Inbound and outbound coercions are independent namespaces; registering
/// one never defines the other.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Wire value to attribute value (create/update path).
    Inbound,
    /// Attribute value to wire value (serialization path).
    Outbound,
}

///
/// ConverterRef
///
/// Tagged reference to a converter: either a name resolved against the
/// mapper's named-converter table, or an inline function value. Resolution
/// happens once, at registration time, so lookups always hold a uniform
/// callable handle.
///

#[derive(Clone)]
pub enum ConverterRef {
    Named(&'static str),
    Func(ConvertFn),
}

impl ConverterRef {
    /// Wrap an inline function value.
    pub fn func(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }
}

///
/// Built-in default coercion, inbound direction.
///
/// Integer wire values targeting a temporal storage kind are decoded as
/// seconds since the Unix epoch; everything else passes through unchanged.
///
pub(crate) fn default_inbound(kind: AttributeKind, value: Value) -> Value {
    match (kind, value) {
        (AttributeKind::Date, Value::Int(secs)) => Value::Date(Date::from_timestamp_secs(secs)),
        (AttributeKind::Time, Value::Int(secs)) => Value::Time(Time::from_timestamp_secs(secs)),
        (AttributeKind::Timestamp, Value::Int(secs)) => {
            Value::Timestamp(Timestamp::from_secs(secs))
        }

        // Unsigned wire kinds carry the same encoding when they fit.
        (kind, Value::Uint(secs)) if kind.is_temporal() => match i64::try_from(secs) {
            Ok(secs) => default_inbound(kind, Value::Int(secs)),
            Err(_) => Value::Uint(secs),
        },

        (_, value) => value,
    }
}

///
/// Built-in default coercion, outbound direction.
///
/// The inverse of the inbound default: temporal attribute values encode to
/// integer seconds since the Unix epoch; everything else passes through.
///
pub(crate) fn default_outbound(kind: AttributeKind, value: Value) -> Value {
    if !kind.is_temporal() {
        return value;
    }

    match value {
        Value::Date(date) => Value::Int(date.to_timestamp_secs()),
        Value::Time(time) => Value::Int(time.to_timestamp_secs()),
        Value::Timestamp(ts) => Value::Int(ts.get()),
        value => value,
    }
}

///
/// TESTS
///
