//! Shared test-only fixtures: a static user message/record schema pair and
//! map-backed message/record stand-ins.

use crate::{
    mapper::Mapper,
    message::{FieldDescriptor, FieldKind, Message, MessageDescriptor},
    model::{AssignmentPolicy, AttributeKind, AttributeModel, Record, RecordModel},
    value::Value,
};
use std::collections::BTreeMap;

pub(crate) static USER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "guid",
        number: 1,
        kind: FieldKind::String,
        repeated: false,
    },
    FieldDescriptor {
        name: "name",
        number: 2,
        kind: FieldKind::String,
        repeated: false,
    },
    FieldDescriptor {
        name: "email",
        number: 3,
        kind: FieldKind::String,
        repeated: false,
    },
    FieldDescriptor {
        name: "account_id",
        number: 4,
        kind: FieldKind::Int64,
        repeated: false,
    },
    FieldDescriptor {
        name: "created_at",
        number: 5,
        kind: FieldKind::Int64,
        repeated: false,
    },
    FieldDescriptor {
        name: "tags",
        number: 6,
        kind: FieldKind::String,
        repeated: true,
    },
];

pub(crate) static USER_MESSAGE: MessageDescriptor = MessageDescriptor {
    name: "UserMessage",
    fields: USER_FIELDS,
};

pub(crate) static USER_ATTRIBUTES: &[AttributeModel] = &[
    AttributeModel {
        name: "guid",
        kind: AttributeKind::Text,
    },
    AttributeModel {
        name: "name",
        kind: AttributeKind::Text,
    },
    AttributeModel {
        name: "email",
        kind: AttributeKind::Text,
    },
    AttributeModel {
        name: "account_id",
        kind: AttributeKind::Int,
    },
    AttributeModel {
        name: "created_at",
        kind: AttributeKind::Timestamp,
    },
    AttributeModel {
        name: "password_digest",
        kind: AttributeKind::Text,
    },
];

pub(crate) static USER_MODEL: RecordModel = RecordModel {
    path: "test_fixtures::User",
    record_name: "User",
    attributes: USER_ATTRIBUTES,
    policy: AssignmentPolicy::DenyList(&["password_digest"]),
};

/// A user mapper bound to the full message descriptor.
pub(crate) fn user_mapper() -> Mapper {
    let mut mapper = Mapper::new(&USER_MODEL);
    mapper.bind_message(&USER_MESSAGE);
    mapper
}

///
/// TestMessage
///
/// Map-backed message stand-in. Fields absent from the map read as unset.
///

#[derive(Clone, Debug)]
pub(crate) struct TestMessage {
    descriptor: &'static MessageDescriptor,
    fields: BTreeMap<&'static str, Value>,
}

impl TestMessage {
    pub fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn set(mut self, field: &'static str, value: Value) -> Self {
        self.fields.insert(field, value);
        self
    }
}

impl Message for TestMessage {
    fn descriptor(&self) -> &MessageDescriptor {
        self.descriptor
    }

    fn get(&self, field: &str) -> Option<Value> {
        self.fields.get(field).cloned()
    }
}

///
/// TestRecord
///
/// Map-backed record stand-in. Attributes absent from the map behave like
/// attributes without a read accessor.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct TestRecord {
    attributes: BTreeMap<&'static str, Value>,
}

impl TestRecord {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, attribute: &'static str, value: Value) -> Self {
        self.attributes.insert(attribute, value);
        self
    }
}

impl Record for TestRecord {
    fn get(&self, attribute: &str) -> Option<Value> {
        self.attributes.get(attribute).cloned()
    }
}
