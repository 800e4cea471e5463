use crate::{message::Message, value::Value};
use std::sync::Arc;

/// Resolved transformer handle: derives one attribute value from the whole
/// inbound message.
pub type TransformFn = Arc<dyn Fn(&dyn Message) -> Value + Send + Sync>;

///
/// TransformerRef
///
/// Tagged reference to a transformer, mirroring `ConverterRef`: a name
/// resolved against the mapper's named-transformer table at registration
/// time, or an inline function value.
///

#[derive(Clone)]
pub enum TransformerRef {
    Named(&'static str),
    Func(TransformFn),
}

impl TransformerRef {
    /// Wrap an inline function value.
    pub fn func(f: impl Fn(&dyn Message) -> Value + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }
}
