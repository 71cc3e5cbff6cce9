//! Schema builders and a scripted random source shared by unit tests.

use std::collections::VecDeque;

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto,
};

use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, Value};

use crate::source::RandomSource;

pub fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

pub fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Message)
    }
}

pub fn enum_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Enum)
    }
}

pub fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field
    }
}

pub fn oneof(field: FieldDescriptorProto, index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(index),
        ..field
    }
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn with_oneofs(mut message: DescriptorProto, names: &[&str]) -> DescriptorProto {
    message.oneof_decl = names
        .iter()
        .map(|name| OneofDescriptorProto {
            name: Some(name.to_string()),
            ..Default::default()
        })
        .collect();
    message
}

pub fn map_entry(name: &str, key: Type, value: FieldDescriptorProto) -> DescriptorProto {
    DescriptorProto {
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..message(name, vec![field("key", 1, key), value])
    }
}

pub fn enumeration(name: &str, values: &[&str]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .zip(0..)
            .map(|(value, number)| EnumValueDescriptorProto {
                name: Some(value.to_string()),
                number: Some(number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// A single proto2 file. Every set field then reports presence, even when
/// the generated value is the default for its type.
pub fn file(
    package: &str,
    messages: Vec<DescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
) -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some(format!("{package}.proto")),
            package: Some(package.to_string()),
            message_type: messages,
            enum_type: enums,
            syntax: Some("proto2".to_string()),
            ..Default::default()
        }],
    }
}

/// Builds a pool and returns the message `name` from it.
pub fn descriptor(fds: FileDescriptorSet, name: &str) -> MessageDescriptor {
    DescriptorPool::from_file_descriptor_set(fds)
        .expect("valid pool")
        .get_message_by_name(name)
        .expect("message exists")
}

/// The value of field `number`, or its default when unset.
pub fn get(msg: &DynamicMessage, number: u32) -> Value {
    msg.get_field_by_number(number)
        .expect("field exists")
        .into_owned()
}

/// A [`RandomSource`] that replays scripted `intn` results and records the
/// bound of every `intn` call. Other draws return fixed values.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pub intn_results: VecDeque<usize>,
    pub intn_bounds: Vec<usize>,
    pub int32_value: i32,
    pub draws: usize,
}

impl ScriptedSource {
    pub fn with_intn(results: &[usize]) -> Self {
        Self {
            intn_results: results.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl RandomSource for ScriptedSource {
    fn seed(&mut self, _seed: u64) {}

    fn int32(&mut self) -> i32 {
        self.draws += 1;
        self.int32_value
    }

    fn int64(&mut self) -> i64 {
        self.draws += 1;
        -7
    }

    fn uint32(&mut self) -> u32 {
        self.draws += 1;
        7
    }

    fn uint64(&mut self) -> u64 {
        self.draws += 1;
        u64::MAX
    }

    fn float32(&mut self) -> f32 {
        self.draws += 1;
        0.25
    }

    fn float64(&mut self) -> f64 {
        self.draws += 1;
        0.5
    }

    fn intn(&mut self, n: usize) -> usize {
        self.draws += 1;
        self.intn_bounds.push(n);
        self.intn_results.pop_front().unwrap_or(0).min(n.saturating_sub(1))
    }
}
