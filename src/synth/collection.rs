use std::collections::HashMap;

use prost_reflect::{FieldDescriptor, MapKey, Value};

use super::field::unsupported;
use super::{RecursionGuard, Synthesizer};
use crate::error::Error;
use crate::source::RandomSource;

impl<R: RandomSource + ?Sized> Synthesizer<'_, R> {
    /// A repeated field always gets exactly one element.
    pub(super) fn list(
        &mut self,
        field: &FieldDescriptor,
        guard: RecursionGuard,
    ) -> Result<Value, Error> {
        let element = self.value(field, &field.kind(), guard)?;
        Ok(Value::List(vec![element]))
    }

    /// A map field always gets exactly one entry. The key is drawn before
    /// the value.
    pub(super) fn map(
        &mut self,
        field: &FieldDescriptor,
        guard: RecursionGuard,
    ) -> Result<Value, Error> {
        let kind = field.kind();
        let Some(entry) = kind.as_message().filter(|entry| entry.is_map_entry()) else {
            return Err(unsupported(field, &kind));
        };
        let key_field = entry.map_entry_key_field();
        let value_field = entry.map_entry_value_field();

        let key_kind = key_field.kind();
        let key = self.value(&key_field, &key_kind, guard)?;
        let key = map_key(key).ok_or_else(|| unsupported(&key_field, &key_kind))?;
        let value = self.value(&value_field, &value_field.kind(), guard)?;

        Ok(Value::Map(HashMap::from([(key, value)])))
    }
}

/// Only integral, bool and string values are valid keys.
fn map_key(value: Value) -> Option<MapKey> {
    match value {
        Value::Bool(v) => Some(MapKey::Bool(v)),
        Value::I32(v) => Some(MapKey::I32(v)),
        Value::I64(v) => Some(MapKey::I64(v)),
        Value::U32(v) => Some(MapKey::U32(v)),
        Value::U64(v) => Some(MapKey::U64(v)),
        Value::String(v) => Some(MapKey::String(v)),
        _ => None,
    }
}
