use crate::query::predicate::{Predicate, Row};

///
/// Query
///
/// Declarative filter accumulator for one record type.
///
/// This builder:
/// - Collects predicates contributed by scopes into a single filter
/// - Is purely structural (no schema access or execution)
/// - Starts as "all records" and only ever narrows under `filter`/`and`
///
/// The scope builder intersects one predicate per present searchable field;
/// callers may also chain from an already-narrowed query.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    predicate: Option<Predicate>,
}

impl Query {
    /// The unfiltered query: matches every record.
    #[must_use]
    pub const fn all() -> Self {
        Self { predicate: None }
    }

    /// Add a predicate, implicitly AND-ing with any existing predicate.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = match self.predicate.take() {
            Some(existing) => Some(Predicate::And(vec![existing, predicate])),
            None => Some(predicate),
        };
        self
    }

    /// Explicit AND combinator for predicates.
    #[must_use]
    pub fn and(self, predicate: Predicate) -> Self {
        self.filter(predicate)
    }

    /// Explicit OR combinator for predicates.
    #[must_use]
    pub fn or(mut self, predicate: Predicate) -> Self {
        self.predicate = match self.predicate.take() {
            Some(existing) => Some(Predicate::Or(vec![existing, predicate])),
            None => Some(predicate),
        };
        self
    }

    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    /// Finalize into a single predicate; the empty query is `True`.
    #[must_use]
    pub fn build(self) -> Predicate {
        self.predicate.unwrap_or(Predicate::True)
    }

    /// Evaluate the accumulated filter against a single row.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.predicate
            .as_ref()
            .is_none_or(|predicate| predicate.matches(row))
    }
}

///
/// TESTS
///
