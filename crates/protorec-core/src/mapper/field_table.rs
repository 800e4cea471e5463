use crate::{message::MessageDescriptor, model::RecordModel};

///
/// Resolve the field table for one record/message binding.
///
/// Schema-level derivation, independent of any message instance: wire
/// fields in declaration order, minus repeated fields, minus names not
/// declared as attributes, minus names the mass-assignment policy rejects.
/// Per-instance absence filtering happens during mapping, not here.
///
pub(crate) fn resolve_fields(
    model: &RecordModel,
    message: &MessageDescriptor,
) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();

    for field in message.fields {
        if field.repeated {
            continue;
        }
        if model.attribute(field.name).is_none() {
            continue;
        }
        if !model.policy.permits(field.name) {
            continue;
        }
        // Duplicate declarations collapse to the first occurrence.
        if names.contains(&field.name) {
            continue;
        }

        names.push(field.name);
    }

    names
}

///
/// TESTS
///
