use crate::value::Value;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    ops::{BitAnd, BitOr},
};

///
/// Predicate AST
///
/// Pure representation of query filters. This layer carries no schema
/// validation, index logic, or execution semantics; scopes construct
/// predicates and the external query layer interprets them.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: String, op: CompareOp, value: Value) -> Self {
        Self { field, op, value }
    }

    #[must_use]
    pub fn eq(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: String, value: Value) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }

    #[must_use]
    pub fn in_(field: String, values: Vec<Value>) -> Self {
        Self::new(field, CompareOp::In, Value::List(values))
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::eq(field.into(), value))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::ne(field.into(), value))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lt(field.into(), value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lte(field.into(), value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gt(field.into(), value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gte(field.into(), value))
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::in_(field.into(), values))
    }

    ///
    /// Evaluate this predicate against a single row.
    ///
    /// Pure runtime evaluation: missing fields and comparisons that are
    /// undefined for the value kinds involved evaluate to `false`.
    ///
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        match self {
            Self::True => true,
            Self::False => false,

            Self::And(children) => children.iter().all(|child| child.matches(row)),
            Self::Or(children) => children.iter().any(|child| child.matches(row)),
            Self::Not(inner) => !inner.matches(row),

            Self::Compare(cmp) => eval_compare(row, cmp),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

///
/// Row
///
/// Abstraction over row-like data that exposes fields by name. Attribute
/// maps produced by inbound mapping evaluate directly.
///

pub trait Row {
    fn field(&self, name: &str) -> Option<Value>;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

///
/// Evaluate a single comparison against a row.
///
/// Returns `false` if the field is missing or the comparison is undefined
/// for the value kinds involved.
///
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let Some(actual) = row.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual.compare_eq(value).unwrap_or(false),
        CompareOp::Ne => actual.compare_eq(value).is_some_and(|v| !v),

        CompareOp::Lt => actual.compare_order(value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => actual.compare_order(value).is_some_and(Ordering::is_le),
        CompareOp::Gt => actual.compare_order(value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => actual.compare_order(value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(&actual, value).unwrap_or(false),
    }
}

///
/// Check whether a value equals any element in a list.
///
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    let mut saw_valid = false;
    for item in items {
        match actual.compare_eq(item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}

///
/// TESTS
///
