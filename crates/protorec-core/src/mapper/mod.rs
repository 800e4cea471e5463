//! The mapping engine: one `Mapper` per record type owns every registry
//! and performs inbound/outbound attribute mapping and scope building.

mod convert;
mod field_table;
mod scope;
mod transform;

pub use convert::{ConvertFn, ConverterRef, Direction};
pub use scope::ScopeFn;
pub use transform::{TransformFn, TransformerRef};

use crate::{
    error::{ConfigurationError, InvalidConverterError, MapperError},
    mapper::scope::Searchable,
    message::{Message, MessageDescriptor},
    model::{Record, RecordModel},
    value::Value,
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::OnceLock,
};

///
/// Mapper
///
/// Per-record-type mapping state: the message binding, the cached field
/// table, and the coercion/transformer/scope registries.
///
/// Registration is `&mut self` and confined to type initialization; every
/// mapping operation is `&self` over immutable tables, so a built mapper is
/// safe to share across threads. Rebinding the message descriptor resets
/// the cached field table.
///

pub struct Mapper {
    model: &'static RecordModel,
    message: Option<&'static MessageDescriptor>,
    field_table: OnceLock<Vec<&'static str>>,

    named_converters: HashMap<&'static str, ConvertFn>,
    named_transformers: HashMap<&'static str, TransformFn>,

    coercions: HashMap<(Direction, &'static str), ConvertFn>,
    transformers: Vec<(&'static str, TransformFn)>,

    pub(crate) searchables: Vec<Searchable>,
    pub(crate) scopes: HashMap<&'static str, ScopeFn>,
}

impl Mapper {
    /// Create an unbound mapper for one record type.
    #[must_use]
    pub fn new(model: &'static RecordModel) -> Self {
        Self {
            model,
            message: None,
            field_table: OnceLock::new(),
            named_converters: HashMap::new(),
            named_transformers: HashMap::new(),
            coercions: HashMap::new(),
            transformers: Vec::new(),
            searchables: Vec::new(),
            scopes: HashMap::new(),
        }
    }

    /// Bind (or rebind) the wire message descriptor for this record type.
    ///
    /// Rebinding invalidates the cached field table.
    pub fn bind_message(&mut self, message: &'static MessageDescriptor) {
        self.message = Some(message);
        self.field_table = OnceLock::new();
    }

    ///
    /// Derive a child mapper for a record subtype.
    ///
    /// Copy-on-inherit: the child's tables are value copies of this
    /// mapper's at call time. Later registrations on either side do not
    /// propagate.
    ///
    #[must_use]
    pub fn derive(&self, model: &'static RecordModel) -> Self {
        Self {
            model,
            message: self.message,
            field_table: OnceLock::new(),
            named_converters: self.named_converters.clone(),
            named_transformers: self.named_transformers.clone(),
            coercions: self.coercions.clone(),
            transformers: self.transformers.clone(),
            searchables: self.searchables.clone(),
            scopes: self.scopes.clone(),
        }
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    ///
    /// The field table: ordered attribute names eligible for mapping.
    ///
    /// Computed lazily on first use and cached until the message binding
    /// changes. Fails with a `ConfigurationError` while no descriptor is
    /// bound.
    ///
    pub fn field_table(&self) -> Result<&[&'static str], MapperError> {
        let Some(message) = self.message else {
            return Err(ConfigurationError::MessageUnbound {
                record: self.model.record_name,
            }
            .into());
        };

        Ok(self
            .field_table
            .get_or_init(|| field_table::resolve_fields(self.model, message)))
    }

    // ---
    // Registration (type-initialization phase)
    // ---

    /// Add a named converter that `ConverterRef::Named` can resolve.
    pub fn define_converter(
        &mut self,
        name: &'static str,
        f: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) {
        self.named_converters.insert(name, std::sync::Arc::new(f));
    }

    /// Add a named transformer that `TransformerRef::Named` can resolve.
    pub fn define_transformer(
        &mut self,
        name: &'static str,
        f: impl Fn(&dyn Message) -> Value + Send + Sync + 'static,
    ) {
        self.named_transformers.insert(name, std::sync::Arc::new(f));
    }

    ///
    /// Register a per-attribute coercion rule for one direction.
    ///
    /// Named references resolve against the named-converter table here,
    /// at registration time; an unknown name fails fast and the prior
    /// rule (if any) stays in effect. Re-registration replaces silently.
    ///
    pub fn register_coercion(
        &mut self,
        direction: Direction,
        attribute: &'static str,
        converter: ConverterRef,
    ) -> Result<(), MapperError> {
        let resolved = match converter {
            ConverterRef::Func(f) => f,
            ConverterRef::Named(name) => self.named_converters.get(name).cloned().ok_or(
                InvalidConverterError::UnknownConverter {
                    record: self.model.record_name,
                    name,
                },
            )?,
        };

        self.coercions.insert((direction, attribute), resolved);
        Ok(())
    }

    ///
    /// Register a whole-message transformer for one attribute.
    ///
    /// Transformers run after field-based mapping and overwrite; they are
    /// inbound-only. Same fail-fast resolution as `register_coercion`.
    ///
    pub fn register_transformer(
        &mut self,
        attribute: &'static str,
        transformer: TransformerRef,
    ) -> Result<(), MapperError> {
        let resolved = match transformer {
            TransformerRef::Func(f) => f,
            TransformerRef::Named(name) => self.named_transformers.get(name).cloned().ok_or(
                InvalidConverterError::UnknownTransformer {
                    record: self.model.record_name,
                    name,
                },
            )?,
        };

        match self
            .transformers
            .iter_mut()
            .find(|(name, _)| *name == attribute)
        {
            Some(entry) => entry.1 = resolved,
            None => self.transformers.push((attribute, resolved)),
        }

        Ok(())
    }

    // ---
    // Mapping operations (read-only phase)
    // ---

    ///
    /// Inbound mapping: message to attribute map.
    ///
    /// Unset fields are omitted entirely, so callers can distinguish "not
    /// provided" from "explicitly empty". Transformers run last and
    /// overwrite any field-mapped value for the same attribute.
    ///
    pub fn attributes_from_message(
        &self,
        message: &dyn Message,
    ) -> Result<BTreeMap<String, Value>, MapperError> {
        let fields = self.field_table()?;
        let mut attributes = BTreeMap::new();

        for &name in fields {
            let Some(raw) = message.get(name) else {
                continue;
            };

            let value = match (
                self.coercions.get(&(Direction::Inbound, name)),
                self.model.attribute(name),
            ) {
                (Some(convert), _) => convert(raw),
                (None, Some(attribute)) => convert::default_inbound(attribute.kind, raw),
                (None, None) => raw,
            };

            attributes.insert(name.to_string(), value);
        }

        for (attribute, transform) in &self.transformers {
            attributes.insert((*attribute).to_string(), transform(message));
        }

        Ok(attributes)
    }

    ///
    /// Outbound mapping: record to wire-field map.
    ///
    /// Reuses the same field table symmetrically. An outbound rule receives
    /// the attribute's current value; an attribute the record exposes no
    /// reader for yields `Value::None` rather than failing. The caller
    /// hands the map to its message constructor.
    ///
    pub fn fields_from_record(
        &self,
        record: &dyn Record,
    ) -> Result<BTreeMap<String, Value>, MapperError> {
        let fields = self.field_table()?;
        let mut out = BTreeMap::new();

        for &name in fields {
            let current = record.get(name);

            let value = match self.coercions.get(&(Direction::Outbound, name)) {
                Some(convert) => convert(current.unwrap_or(Value::None)),
                None => match (current, self.model.attribute(name)) {
                    (Some(value), Some(attribute)) => {
                        convert::default_outbound(attribute.kind, value)
                    }
                    (Some(value), None) => value,
                    (None, _) => Value::None,
                },
            };

            out.insert(name.to_string(), value);
        }

        Ok(out)
    }
}

///
/// TESTS
///
