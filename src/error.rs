//! Error types for protorand.

/// Errors returned while generating a message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field's value kind has no generation rule. Aborts the whole
    /// generation call.
    #[error("unsupported kind '{kind}' for field '{field}'")]
    UnsupportedFieldKind {
        /// Fully-qualified name of the offending field.
        field: String,
        /// Protobuf name of the kind, e.g. `group`.
        kind: &'static str,
    },
    /// The generated message could not be merged into the requested type.
    #[error("failed to merge generated '{message}': {source}")]
    Merge {
        /// Fully-qualified name of the message type.
        message: String,
        #[source]
        source: prost::DecodeError,
    },
}
