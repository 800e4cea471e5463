use thiserror::Error as ThisError;

///
/// MapperError
///
/// Unified error surface for the mapping engine. Every variant is a
/// programmer/configuration error: detected synchronously, propagated to
/// the immediate caller, never retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MapperError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    InvalidConverter(#[from] InvalidConverterError),

    #[error(transparent)]
    ScopeNotFound(#[from] ScopeNotFoundError),
}

///
/// ConfigurationError
///
/// Caller setup errors, detected at mapping-call time rather than at
/// registration. These indicate the record type was never wired up, not
/// bad runtime data.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigurationError {
    #[error("no message descriptor bound for record type '{record}'")]
    MessageUnbound { record: &'static str },
}

///
/// InvalidConverterError
///
/// Registration-time failures. The offending registration never takes
/// effect, so a mapper that finished initialization has a fully resolved
/// converter table.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidConverterError {
    #[error("converter '{name}' is not defined on record type '{record}'")]
    UnknownConverter {
        record: &'static str,
        name: &'static str,
    },

    #[error("transformer '{name}' is not defined on record type '{record}'")]
    UnknownTransformer {
        record: &'static str,
        name: &'static str,
    },
}

///
/// ScopeNotFoundError
///
/// A searchable field referenced a scope that was never defined. Raised at
/// build time, not at declaration time: scope definitions may legitimately
/// arrive after the searchable-field declaration.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("scope '{scope}' is not defined on record type '{record}' (searchable field '{field}')")]
pub struct ScopeNotFoundError {
    pub record: &'static str,
    pub field: &'static str,
    pub scope: &'static str,
}

///
/// TESTS
///
