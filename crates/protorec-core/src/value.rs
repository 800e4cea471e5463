use crate::types::{Date, Time, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Runtime value vocabulary crossing the wire/storage boundary. Wire fields
/// and record attributes both read and write through this one enum, so the
/// coercion registry can stay a plain `Value -> Value` function table.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Explicit null. Outbound mapping uses this for attributes the record
    /// exposes no reader for; it is distinct from a field being unset.
    None,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float64(f64),
    Text(String),
    Blob(Vec<u8>),
    Date(Date),
    Time(Time),
    Timestamp(Timestamp),
    List(Vec<Value>),
}

impl Value {
    /// Emptiness as the scope builder sees it: empty text or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// View this value as the ordered sequence handed to a scope.
    ///
    /// A list yields its elements, `None` yields nothing, and any other
    /// scalar yields itself as a one-element sequence.
    #[must_use]
    pub fn into_sequence(self) -> Vec<Self> {
        match self {
            Self::List(items) => items,
            Self::None => Vec::new(),
            value => vec![value],
        }
    }

    /// Strict same-kind equality.
    ///
    /// Returns `None` for mismatched kinds so callers can distinguish
    /// "unequal" from "not comparable".
    #[must_use]
    pub fn compare_eq(&self, other: &Self) -> Option<bool> {
        match (self, other) {
            (Self::None, Self::None) => Some(true),
            (Self::Bool(a), Self::Bool(b)) => Some(a == b),
            (Self::Int(a), Self::Int(b)) => Some(a == b),
            (Self::Uint(a), Self::Uint(b)) => Some(a == b),
            (Self::Float64(a), Self::Float64(b)) => Some(a == b),
            (Self::Text(a), Self::Text(b)) => Some(a == b),
            (Self::Blob(a), Self::Blob(b)) => Some(a == b),
            (Self::Date(a), Self::Date(b)) => Some(a == b),
            (Self::Time(a), Self::Time(b)) => Some(a == b),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a == b),
            (Self::List(a), Self::List(b)) => Some(a == b),
            _ => None,
        }
    }

    /// Strict comparator for identical orderable kinds.
    ///
    /// Returns `None` for mismatched or non-orderable kinds.
    #[must_use]
    pub fn compare_order(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Uint(a), Self::Uint(b)) => a.partial_cmp(b),
            (Self::Float64(a), Self::Float64(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),
            (Self::Time(a), Self::Time(b)) => a.partial_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

///
/// TESTS
///
