use crate::{
    error::{MapperError, ScopeNotFoundError},
    mapper::Mapper,
    message::Message,
    query::{Predicate, Query},
    value::Value,
};
use std::sync::Arc;

/// Named query-filter constructor: a non-empty ordered value sequence in, a
/// composable predicate out.
pub type ScopeFn = Arc<dyn Fn(&[Value]) -> Predicate + Send + Sync>;

///
/// Searchable
///
/// One searchable-field declaration: when `field` is present on an inbound
/// message, the scope named `scope` narrows the result set. Declarations
/// are kept in registration order.
///

#[derive(Clone)]
pub(crate) struct Searchable {
    pub field: &'static str,
    pub scope: &'static str,
}

impl Mapper {
    /// Define a named scope on this record type.
    pub fn define_scope(
        &mut self,
        name: &'static str,
        f: impl Fn(&[Value]) -> Predicate + Send + Sync + 'static,
    ) {
        self.scopes.insert(name, Arc::new(f));
    }

    ///
    /// Declare a searchable wire field.
    ///
    /// Scope existence is deliberately not verified here: scope definitions
    /// may arrive after the declaration. An undefined scope surfaces as a
    /// `ScopeNotFoundError` at build time instead.
    ///
    pub fn register_searchable(&mut self, field: &'static str, scope: &'static str) {
        self.searchables.push(Searchable { field, scope });
    }

    ///
    /// Compose a query filter from every searchable field present on the
    /// message.
    ///
    /// Starts from `base` (the unfiltered query when `None`, enabling
    /// chaining from an already-narrowed query) and intersects one scope
    /// result per present, non-empty searchable field, in registration
    /// order. Absent fields and empty values (empty text, empty lists)
    /// contribute nothing; a message with no searchable field present
    /// returns `base` unchanged.
    ///
    pub fn build_scope(
        &self,
        message: &dyn Message,
        base: Option<Query>,
    ) -> Result<Query, MapperError> {
        let mut query = base.unwrap_or_default();

        for searchable in &self.searchables {
            let Some(value) = message.get(searchable.field) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let values = value.into_sequence();
            if values.is_empty() {
                continue;
            }

            let scope =
                self.scopes
                    .get(searchable.scope)
                    .ok_or_else(|| ScopeNotFoundError {
                        record: self.model().record_name,
                        field: searchable.field,
                        scope: searchable.scope,
                    })?;

            query = query.filter(scope(&values));
        }

        Ok(query)
    }

    /// Vocabulary alias for `build_scope` with no base query.
    pub fn search_scope(&self, message: &dyn Message) -> Result<Query, MapperError> {
        self.build_scope(message, None)
    }

    /// Vocabulary alias for `build_scope` chaining from an existing query.
    pub fn by_fields(&self, message: &dyn Message, base: Query) -> Result<Query, MapperError> {
        self.build_scope(message, Some(base))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::Row,
        test_fixtures::{TestMessage, USER_MESSAGE, user_mapper},
    };
    use std::collections::BTreeMap;

    fn searchable_mapper() -> Mapper {
        let mut mapper = user_mapper();
        mapper.define_scope("by_name", |values| {
            Predicate::in_("name", values.to_vec())
        });
        mapper.define_scope("by_email", |values| {
            Predicate::in_("email", values.to_vec())
        });
        mapper.register_searchable("name", "by_name");
        mapper.register_searchable("email", "by_email");
        mapper
    }

    fn row(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE)
            .set("name", Value::List(vec![Value::Text("alice".into())]));

        let query = mapper
            .search_scope(&message)
            .expect("defined scopes should build");

        // Equivalent to by_name(["alice"]) alone.
        let expected = Query::all().filter(Predicate::in_(
            "name",
            vec![Value::Text("alice".into())],
        ));
        assert_eq!(query, expected, "unset email should not narrow the query");
    }

    #[test]
    fn empty_sequences_contribute_nothing() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE).set("name", Value::List(vec![]));

        let query = mapper
            .search_scope(&message)
            .expect("defined scopes should build");
        assert_eq!(query, Query::all());
    }

    #[test]
    fn empty_text_contributes_nothing() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE)
            .set("name", Value::Text(String::new()))
            .set("email", Value::Text("a@example.com".into()));

        let query = mapper
            .search_scope(&message)
            .expect("defined scopes should build");

        // Only the email scope applies; the empty name never narrows.
        let expected = Query::all().filter(Predicate::in_(
            "email",
            vec![Value::Text("a@example.com".into())],
        ));
        assert_eq!(query, expected, "present-but-empty text should be skipped");
    }

    #[test]
    fn scalar_values_become_one_element_sequences() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE).set("name", Value::Text("bob".into()));

        let query = mapper
            .search_scope(&message)
            .expect("defined scopes should build");
        assert!(query.matches(&row(&[("name", Value::Text("bob".into()))])));
        assert!(!query.matches(&row(&[("name", Value::Text("eve".into()))])));
    }

    #[test]
    fn present_fields_intersect_in_registration_order() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE)
            .set("name", Value::Text("alice".into()))
            .set("email", Value::Text("a@example.com".into()));

        let query = mapper
            .search_scope(&message)
            .expect("defined scopes should build");

        assert!(query.matches(&row(&[
            ("name", Value::Text("alice".into())),
            ("email", Value::Text("a@example.com".into())),
        ])));
        assert!(
            !query.matches(&row(&[
                ("name", Value::Text("alice".into())),
                ("email", Value::Text("b@example.com".into())),
            ])),
            "both scopes must hold under AND composition"
        );
    }

    #[test]
    fn declaration_order_does_not_change_selection_for_disjoint_fields() {
        let mut reversed = user_mapper();
        reversed.define_scope("by_name", |values| {
            Predicate::in_("name", values.to_vec())
        });
        reversed.define_scope("by_email", |values| {
            Predicate::in_("email", values.to_vec())
        });
        reversed.register_searchable("email", "by_email");
        reversed.register_searchable("name", "by_name");

        let forward = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE)
            .set("name", Value::Text("alice".into()))
            .set("email", Value::Text("a@example.com".into()));

        let forward_query = forward.search_scope(&message).expect("scopes defined");
        let reversed_query = reversed.search_scope(&message).expect("scopes defined");

        let rows = [
            row(&[
                ("name", Value::Text("alice".into())),
                ("email", Value::Text("a@example.com".into())),
            ]),
            row(&[
                ("name", Value::Text("alice".into())),
                ("email", Value::Text("x@example.com".into())),
            ]),
            row(&[("name", Value::Text("eve".into()))]),
        ];
        for row in &rows {
            assert_eq!(
                forward_query.matches(row),
                reversed_query.matches(row),
                "AND-composed scopes should commute for disjoint fields"
            );
        }
    }

    #[test]
    fn chaining_from_a_base_query_preserves_its_filter() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE).set("name", Value::Text("alice".into()));

        let base = Query::all().filter(Predicate::eq("active", Value::Bool(true)));
        let query = mapper
            .by_fields(&message, base)
            .expect("defined scopes should build");

        assert!(query.matches(&row(&[
            ("name", Value::Text("alice".into())),
            ("active", Value::Bool(true)),
        ])));
        assert!(
            !query.matches(&row(&[
                ("name", Value::Text("alice".into())),
                ("active", Value::Bool(false)),
            ])),
            "the base query's predicate should still narrow"
        );
    }

    #[test]
    fn no_present_fields_returns_base_unchanged() {
        let mapper = searchable_mapper();
        let message = TestMessage::new(&USER_MESSAGE);

        let base = Query::all().filter(Predicate::eq("active", Value::Bool(true)));
        let query = mapper
            .by_fields(&message, base.clone())
            .expect("defined scopes should build");
        assert_eq!(query, base);
    }

    #[test]
    fn undefined_scope_fails_at_build_time_not_declaration() {
        let mut mapper = user_mapper();
        // Declaration succeeds even though the scope does not exist yet.
        mapper.register_searchable("name", "by_reputation");

        let unset = TestMessage::new(&USER_MESSAGE);
        assert!(
            mapper.search_scope(&unset).is_ok(),
            "absent field should never resolve the scope"
        );

        let present = TestMessage::new(&USER_MESSAGE).set("name", Value::Text("alice".into()));
        let err = mapper
            .search_scope(&present)
            .expect_err("undefined scope should fail once the field is present");
        assert!(
            matches!(err, MapperError::ScopeNotFound(_)),
            "expected a scope-not-found error, got: {err}"
        );
    }
}
