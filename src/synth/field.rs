use bytes::Bytes;
use prost_reflect::{DynamicMessage, FieldDescriptor, Kind, MessageDescriptor, Value};

use super::{RecursionGuard, Synthesizer};
use crate::error::Error;
use crate::source::RandomSource;

impl<R: RandomSource + ?Sized> Synthesizer<'_, R> {
    /// Generates a single value of `kind` for `field`.
    ///
    /// Every encoding variant of an integer width and signedness shares one
    /// draw, e.g. `int32`, `sint32` and `sfixed32` all use `int32()`.
    pub(super) fn value(
        &mut self,
        field: &FieldDescriptor,
        kind: &Kind,
        guard: RecursionGuard,
    ) -> Result<Value, Error> {
        let value = match kind {
            Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => Value::I32(self.source.int32()),
            Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => Value::I64(self.source.int64()),
            Kind::Uint32 | Kind::Fixed32 => Value::U32(self.source.uint32()),
            Kind::Uint64 | Kind::Fixed64 => Value::U64(self.source.uint64()),
            Kind::Float => Value::F32(self.source.float32()),
            Kind::Double => Value::F64(self.source.float64()),
            Kind::Bool => Value::Bool(self.bool()),
            Kind::String => Value::String(self.string()),
            Kind::Bytes => Value::Bytes(Bytes::from(self.string().into_bytes())),
            Kind::Enum(descriptor) => Value::EnumNumber(self.enum_number(descriptor)),
            Kind::Message(_) if field.is_group() => return Err(unsupported(field, kind)),
            Kind::Message(descriptor) => Value::Message(self.nested(field, descriptor, guard)?),
        };
        Ok(value)
    }

    /// Even draws are `true`.
    fn bool(&mut self) -> bool {
        self.source.int32() % 2 == 0
    }

    /// `string_len` characters drawn uniformly from the alphabet.
    fn string(&mut self) -> String {
        let config = self.config;
        let alphabet = &config.alphabet;
        if alphabet.is_empty() {
            return String::new();
        }
        (0..config.string_len)
            .map(|_| alphabet[self.source.intn(alphabet.len())])
            .collect()
    }

    fn nested(
        &mut self,
        field: &FieldDescriptor,
        descriptor: &MessageDescriptor,
        guard: RecursionGuard,
    ) -> Result<DynamicMessage, Error> {
        match guard.descend() {
            Some(guard) => self.message(descriptor, guard),
            None => {
                tracing::trace!(
                    field = field.name(),
                    message = descriptor.full_name(),
                    "depth budget exhausted, using default instance"
                );
                Ok(DynamicMessage::new(descriptor.clone()))
            }
        }
    }
}

pub(super) fn unsupported(field: &FieldDescriptor, kind: &Kind) -> Error {
    Error::UnsupportedFieldKind {
        field: field.full_name().to_string(),
        kind: kind_name(field, kind),
    }
}

/// The name of `kind` as written in a `.proto` file.
fn kind_name(field: &FieldDescriptor, kind: &Kind) -> &'static str {
    match kind {
        Kind::Double => "double",
        Kind::Float => "float",
        Kind::Int32 => "int32",
        Kind::Int64 => "int64",
        Kind::Uint32 => "uint32",
        Kind::Uint64 => "uint64",
        Kind::Sint32 => "sint32",
        Kind::Sint64 => "sint64",
        Kind::Fixed32 => "fixed32",
        Kind::Fixed64 => "fixed64",
        Kind::Sfixed32 => "sfixed32",
        Kind::Sfixed64 => "sfixed64",
        Kind::Bool => "bool",
        Kind::String => "string",
        Kind::Bytes => "bytes",
        Kind::Enum(_) => "enum",
        Kind::Message(_) if field.is_group() => "group",
        Kind::Message(_) => "message",
    }
}
