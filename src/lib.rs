//! Generate randomly populated protobuf messages from their descriptors.
//!
//! Given only a [`MessageDescriptor`], [`ProtoRand`] builds a
//! [`DynamicMessage`] with every field set: scalars from a seedable random
//! stream, one member of each oneof, a single element in every repeated
//! field and a single entry in every map. Nested messages are generated
//! recursively until the depth budget in [`Config`] runs out, after which
//! the empty default instance is used. Concrete `prost` types that
//! implement [`ReflectMessage`] can be generated directly.
//!
//! Schemas and messages are [`prost_reflect`] types, re-exported here so
//! callers build their [`DescriptorPool`] against the same version.
//!
//! Output is fully determined by the seed and the schema, so a failing test
//! can be reproduced from its seed.

mod config;
mod error;
mod generator;
mod source;
mod synth;

#[cfg(test)]
mod testutil;

pub use config::{Config, DEFAULT_ALPHABET, DEFAULT_MAX_DEPTH, DEFAULT_STRING_LEN};
pub use error::Error;
pub use generator::ProtoRand;
pub use prost_reflect;
pub use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, ReflectMessage};
pub use source::{RandomSource, StdRandomSource};
